//! Application services (use cases).

pub mod module_service;

pub use module_service::{DEFAULT_MODULES_DIR, ModuleService};
