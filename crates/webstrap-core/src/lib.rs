//! Webstrap Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the Webstrap
//! project scaffolding tool, following hexagonal (ports and adapters)
//! architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │          webstrap-cli (CLI)             │
//! │  (interview, wizard, report rendering)  │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │ (PluginInstaller, EntrySplicer, ops)    │
//! │        Orchestrates Use Cases           │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │ (Filesystem, ProcessRunner, Anchor)     │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    webstrap-adapters (Infrastructure)   │
//! │ (LocalFilesystem, SystemRunner, regex)  │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │        Domain Layer (Pure Logic)        │
//! │ (ProjectState, PluginBundle, patches)   │
//! │        No I/O, no subprocesses          │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use webstrap_core::{
//!     application::services::PluginInstaller,
//!     domain::{Language, GeneratorKind, PackageManager, ProjectState},
//! };
//!
//! // 1. Build the project state once, up front
//! let mut state = ProjectState::new(
//!     PackageManager::Npm,
//!     "my-app",
//!     Language::TypeScript,
//!     GeneratorKind::ReactVite,
//! );
//!
//! // 2. Use application services (with injected adapters)
//! let installer = PluginInstaller::new(&filesystem, ".");
//! installer.install(&bundle, &mut state)?;
//! ```

// Re-export domain layer (stable, well-defined API)
pub mod domain;

// Re-export application layer (orchestration logic)
pub mod application;

// Re-export error types
pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        report::{ScaffoldReport, StepOutcome},
        services::{EntrySplicer, PluginInstaller},
        ports::{AnchorMatcher, Filesystem, ProcessRunner},
    };
    pub use crate::domain::{
        EntryPatch, FileCategory, GeneratorKind, Language, PackageManager, PluginBundle,
        ProjectKind, ProjectState, StateSolution, TemplateContext, UiLibrary,
    };
    pub use crate::error::{WebstrapError, WebstrapResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
