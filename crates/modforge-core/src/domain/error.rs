use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors
    // ========================================================================
    #[error("Module name cannot be empty")]
    EmptyModuleName,

    #[error(
        "Invalid module name '{name}': only letters, digits, underscores and hyphens are allowed (found {invalid})"
    )]
    InvalidModuleName { name: String, invalid: String },

    #[error("Module name '{name}' has no letters or digits to build a class name from")]
    NoAlphanumeric { name: String },

    #[error("Invalid subfolder '{name}': {reason}")]
    InvalidSubfolder { name: String, reason: String },

    #[error("At least one subfolder is required")]
    EmptySubfolderSet,

    // ========================================================================
    // Layout Violations
    // ========================================================================
    #[error("Duplicate path in module layout: {path}")]
    DuplicateTarget { path: String },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::EmptyModuleName => vec![
                "Type a module name such as: user, blog_post, order-item".into(),
            ],
            Self::InvalidModuleName { .. } | Self::NoAlphanumeric { .. } => vec![
                "Use letters, digits, underscores and hyphens only".into(),
                "Examples: user, blog_post, order-item".into(),
            ],
            Self::InvalidSubfolder { .. } | Self::EmptySubfolderSet => vec![
                "Check the `generator.subfolders` setting in your config".into(),
                "Default: controllers, middlewares, routes, services, repositories".into(),
            ],
            Self::DuplicateTarget { path } => vec![
                format!("'{}' would be generated twice", path),
                "Remove the repeated entry from `generator.subfolders`".into(),
            ],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::EmptyModuleName
            | Self::InvalidModuleName { .. }
            | Self::NoAlphanumeric { .. }
            | Self::InvalidSubfolder { .. }
            | Self::EmptySubfolderSet => ErrorCategory::Validation,
            Self::DuplicateTarget { .. } => ErrorCategory::Internal,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Internal,
}
