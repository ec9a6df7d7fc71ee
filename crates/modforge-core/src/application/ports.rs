//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `modforge-adapters` implement
//! these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by infrastructure
//!   - `Filesystem`: directory creation, file writes, existence probes
//!
//! - **Driving (Input) Ports**: Called by external world, implemented by application
//!   - (Defined in CLI layer, implemented by services)

use std::path::Path;

use crate::error::ModforgeResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `modforge_adapters::filesystem::LocalFilesystem` (production)
/// - `modforge_adapters::filesystem::MemoryFilesystem` (testing)
///
/// The root locator only probes with [`Filesystem::is_file`], so it can be
/// exercised against an in-memory tree.
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories. Existing ones are fine.
    fn create_dir_all(&self, path: &Path) -> ModforgeResult<()>;

    /// Write content to a file, replacing it if present.
    fn write_file(&self, path: &Path, content: &str) -> ModforgeResult<()>;

    /// Check if path exists (file or directory).
    fn exists(&self, path: &Path) -> bool;

    /// Check if path exists and is a regular file.
    fn is_file(&self, path: &Path) -> bool;
}
