//! Application layer errors.
//!
//! These errors represent failures in orchestration, not naming rules.
//! Naming and layout errors are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur while locating the project or writing the module.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// No ancestor of `start` contains a project manifest.
    #[error(
        "Cannot find project root from {}: no {} found in any parent directory",
        .start.display(),
        .markers.join(" / ")
    )]
    RootNotFound { start: PathBuf, markers: Vec<String> },

    /// Filesystem operation failed.
    #[error("Filesystem error at {}: {reason}", .path.display())]
    FilesystemError { path: PathBuf, reason: String },

    /// In-memory filesystem lock poisoned.
    #[error("Filesystem state lock poisoned")]
    LockPoisoned,
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::RootNotFound { markers, .. } => vec![
                "Run modforge inside a Node.js project".into(),
                format!("Expected one of: {}", markers.join(", ")),
                "Or point at the project with: modforge new <name> --dir <path>".into(),
            ],
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
                "Files written before the failure were left in place".into(),
            ],
            Self::LockPoisoned => vec!["Try again".into()],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::RootNotFound { .. } => ErrorCategory::NotFound,
            Self::FilesystemError { .. } | Self::LockPoisoned => ErrorCategory::Internal,
        }
    }
}
