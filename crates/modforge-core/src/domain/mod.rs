//! Domain layer: pure naming, planning and rendering rules.
//!
//! Nothing here performs I/O. Given the same [`ModuleName`] and subfolder
//! list, every function returns the same output.

pub mod casing;
pub mod error;
pub mod exports;
pub mod layout;
pub mod module_name;
pub mod subfolder;
pub mod template;

pub use casing::{to_camel_case, to_kebab_case, to_pascal_case};
pub use error::{DomainError, ErrorCategory};
pub use exports::{registration_hint, render_index, render_module_index};
pub use layout::{FileRole, FileTarget, INDEX_FILE, ModuleLayout};
pub use module_name::ModuleName;
pub use subfolder::{Subfolder, parse_subfolders};
pub use template::{ImportSpec, PrimaryTemplate, RenderContext, render};

/// Content for any planned target.
///
/// Dispatches on the target's role: primary files go through the template
/// renderer, aggregators and the root index through the export wirer.
pub fn content_for(module: &ModuleName, target: &FileTarget) -> String {
    match &target.role {
        FileRole::ModuleIndex => render_module_index(module),
        FileRole::Primary(folder) => render(module, folder),
        FileRole::Aggregator(folder) => render_index(module, folder),
    }
}
