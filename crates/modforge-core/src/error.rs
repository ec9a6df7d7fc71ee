//! Unified error handling for Modforge Core.
//!
//! This module provides a unified error type that wraps domain and application
//! errors, with user-actionable suggestions.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// Root error type for Modforge Core operations.
#[derive(Debug, Error, Clone)]
pub enum ModforgeError {
    /// Invalid module name, subfolder, or layout.
    #[error("{0}")]
    Domain(#[from] DomainError),

    /// Root discovery or filesystem failure.
    #[error("{0}")]
    Application(#[from] ApplicationError),
}

impl ModforgeError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => match e.category() {
                crate::domain::ErrorCategory::Validation => ErrorCategory::Validation,
                crate::domain::ErrorCategory::Internal => ErrorCategory::Internal,
            },
            Self::Application(e) => e.category(),
        }
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    Internal,
}

/// Convenient result type alias.
pub type ModforgeResult<T> = Result<T, ModforgeError>;

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    #[test]
    fn validation_errors_are_categorized() {
        let err: ModforgeError = DomainError::EmptyModuleName.into();
        assert_eq!(err.category(), ErrorCategory::Validation);
    }

    #[test]
    fn root_not_found_is_not_found() {
        let err: ModforgeError = ApplicationError::RootNotFound {
            start: PathBuf::from("/tmp/x"),
            markers: vec!["package.json".into()],
        }
        .into();
        assert_eq!(err.category(), ErrorCategory::NotFound);
        assert!(err.to_string().contains("package.json"));
        assert!(err.suggestions().iter().any(|s| s.contains("--dir")));
    }
}
