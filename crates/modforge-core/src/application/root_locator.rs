//! Project root discovery.

use std::path::{Path, PathBuf};

use tracing::{debug, instrument};

use crate::{
    application::{ApplicationError, ports::Filesystem},
    error::ModforgeResult,
};

/// Manifest that marks a Node.js project root.
pub const DEFAULT_MANIFEST: &str = "package.json";

/// Walk from `start` up through its ancestors and return the first directory
/// containing any of `markers` as a regular file.
///
/// `start` itself is checked first. The filesystem root is never a
/// candidate; reaching it yields [`ApplicationError::RootNotFound`]. Nothing
/// is cached between calls.
#[instrument(skip(fs), fields(start = %start.display()))]
pub fn find_root(
    fs: &dyn Filesystem,
    start: &Path,
    markers: &[String],
) -> ModforgeResult<PathBuf> {
    for dir in start.ancestors().filter(|d| d.parent().is_some()) {
        if let Some(marker) = markers.iter().find(|m| fs.is_file(&dir.join(m))) {
            debug!(root = %dir.display(), %marker, "Project root found");
            return Ok(dir.to_path_buf());
        }
    }

    Err(ApplicationError::RootNotFound {
        start: start.to_path_buf(),
        markers: markers.to_vec(),
    }
    .into())
}
