//! Application services.

pub mod installer;
pub mod project;
pub mod splicer;

pub use installer::PluginInstaller;
pub use project::ProjectOps;
pub use splicer::{EntrySplicer, SpliceSummary};
