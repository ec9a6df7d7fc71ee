//! Modforge Core: plans and writes Express modules.
//!
//! This crate provides the domain and application layers for the Modforge
//! Express-module scaffolding tool, following hexagonal (ports and adapters)
//! architecture.
//!
//! ## Layers
//!
//! | Module          | Contents                                                      | I/O |
//! |-----------------|---------------------------------------------------------------|-----|
//! | [`domain`]      | casing, `ModuleName`, `Subfolder`, layout plan, file contents | no  |
//! | [`application`] | `Filesystem` port, root locator, materializer, `ModuleService`| via port |
//! | [`error`]       | `ModforgeError` with categories and suggestions               | no  |
//!
//! Adapters for the port live in `modforge-adapters`; the binary in
//! `modforge-cli`.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use std::path::Path;
//!
//! use modforge_core::prelude::*;
//!
//! fn scaffold(fs: Box<dyn Filesystem>) -> ModforgeResult<()> {
//!     let service = ModuleService::new(fs);
//!     let name: ModuleName = "blog_post".parse()?;
//!     let root = service.locate_root(Path::new("/work/app"))?;
//!     let report = service.generate(&name, &Subfolder::defaults(), &root)?;
//!     println!("created {} files", report.created.len());
//!     Ok(())
//! }
//! ```

pub mod application;
pub mod domain;
pub mod error;

/// Commonly used items.
pub mod prelude {
    pub use crate::application::{GenerationReport, ModuleService, ports::Filesystem};
    pub use crate::domain::{FileRole, FileTarget, ModuleLayout, ModuleName, Subfolder};
    pub use crate::error::{ModforgeError, ModforgeResult};
}
