//! Core domain layer for Webstrap.
//!
//! This module contains pure business logic with no I/O. All filesystem,
//! subprocess, and pattern-matching concerns are handled via ports (traits)
//! defined in the application layer.
//!
//! - **No async**: domain logic is synchronous
//! - **No I/O**: no filesystem, network, or external calls
//! - **Immutable value objects**: `Copy`, equality-by-value
//! - **Explicit state**: `ProjectState` is constructed once and passed by
//!   reference; there is no process-wide singleton

pub mod error;
pub mod plugin;
pub mod splice;
pub mod state;
pub mod value_objects;

// Re-exports for convenience
pub use error::DomainError;

pub use plugin::{
    DependencySpec, FileCategory, FileContent, FileSpec, PluginBundle, ScriptSpec, TemplateContext,
};

pub use splice::{
    AppShowcase, EntryPatch, IndexSplice, LayoutSplice, MergedSplice, NextPluginEntry, PageInfo,
    ReactPluginEntry, Span,
};

pub use state::ProjectState;

pub use value_objects::{
    GeneratorKind, Language, PackageManager, ProjectKind, StateSolution, StylingEngine, UiLibrary,
};
