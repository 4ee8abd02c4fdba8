//! Infrastructure adapters for Webstrap.
//!
//! Implements the ports defined in `webstrap_core::application::ports`:
//!
//! - [`LocalFilesystem`] / [`MemoryFilesystem`], filesystem access
//! - [`SystemRunner`], subprocess execution with inherited stdio
//! - [`RegexAnchorMatcher`], structural anchor matching
//!
//! and ships the built-in plugin catalog (`plugins`).

pub mod anchor;
pub mod filesystem;
pub mod plugins;
pub mod process;

pub use anchor::RegexAnchorMatcher;
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use process::SystemRunner;
