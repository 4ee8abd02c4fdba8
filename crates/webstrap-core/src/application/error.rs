//! Application layer errors.
//!
//! These errors represent failures in orchestration, not business logic.
//! Business logic errors are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// Filesystem operation failed.
    #[error("Filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },

    /// An external command could not be spawned at all.
    #[error("Failed to launch '{command}': {reason}")]
    CommandSpawn { command: String, reason: String },

    /// An external command ran but exited non-zero.
    #[error("Command '{command}' exited with {}", .code.map_or("no status".to_string(), |c| format!("code {c}")))]
    CommandFailed { command: String, code: Option<i32> },

    /// A generated manifest or config file could not be parsed.
    #[error("Failed to parse {path}: {reason}")]
    ManifestParse { path: PathBuf, reason: String },

    /// A required generated file was not found under the searched tree.
    #[error("Generated file matching '{pattern}' not found under {root}")]
    GeneratedFileMissing { root: PathBuf, pattern: String },
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
                "Ensure the parent directory exists".into(),
            ],
            Self::CommandSpawn { command, .. } => vec![
                format!("'{command}' could not be started"),
                "Ensure it is installed and on your PATH".into(),
            ],
            Self::CommandFailed { command, .. } => vec![
                format!("'{command}' reported a failure"),
                "Check the command output above for details".into(),
            ],
            Self::ManifestParse { path, .. } => vec![
                format!("'{}' is not valid JSON", path.display()),
                "The generator may have produced unexpected output".into(),
            ],
            Self::GeneratedFileMissing { pattern, .. } => vec![
                format!("No file matching '{pattern}' was generated"),
                "The generator layout may have changed; rerun with -vv for details".into(),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::FilesystemError { .. } => ErrorCategory::Internal,
            Self::CommandSpawn { .. } => ErrorCategory::Configuration,
            Self::CommandFailed { .. } => ErrorCategory::Internal,
            Self::ManifestParse { .. } => ErrorCategory::Internal,
            Self::GeneratedFileMissing { .. } => ErrorCategory::NotFound,
        }
    }
}
