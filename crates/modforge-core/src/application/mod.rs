//! Application layer for Modforge.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (`ModuleService`)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Root locator / materializer**: the two I/O-bound steps, both driven
//!   through the `Filesystem` port
//! - **Errors**: Application-specific error types
//!
//! Naming and rendering rules live in `crate::domain`.

pub mod error;
pub mod materializer;
pub mod ports;
pub mod root_locator;
pub mod services;

pub use error::ApplicationError;
pub use materializer::{GenerationReport, PlannedFile, materialize, preview};
pub use ports::Filesystem;
pub use root_locator::{DEFAULT_MANIFEST, find_root};
pub use services::{DEFAULT_MODULES_DIR, ModuleService};
