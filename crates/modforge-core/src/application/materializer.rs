//! Writes a planned module layout to a [`Filesystem`].
//!
//! Semantics are "create if absent": an existing file is never read,
//! compared, or overwritten. There is no rollback; if a write fails, the
//! files already written stay on disk and the error is returned.

use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, info, instrument};

use crate::{
    application::ports::Filesystem,
    domain::{ModuleLayout, ModuleName, content_for},
    error::ModforgeResult,
};

/// Outcome of one materialization run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GenerationReport {
    /// Absolute module directory, e.g. `<root>/src/Modules/BlogPost`.
    pub module_path: PathBuf,
    /// Files written during this run, in plan order.
    pub created: Vec<PathBuf>,
    /// Files that already existed and were left untouched.
    pub skipped: Vec<PathBuf>,
}

impl GenerationReport {
    /// `true` when every planned file already existed.
    pub fn is_noop(&self) -> bool {
        self.created.is_empty()
    }
}

/// Create every folder of `layout` under `module_path`, then write each
/// target that does not exist yet.
#[instrument(skip_all, fields(module = %module, path = %module_path.display()))]
pub fn materialize(
    fs: &dyn Filesystem,
    module: &ModuleName,
    layout: &ModuleLayout,
    module_path: &Path,
) -> ModforgeResult<GenerationReport> {
    fs.create_dir_all(module_path)?;
    for folder in layout.subfolders() {
        fs.create_dir_all(&module_path.join(folder.as_str()))?;
    }

    let mut report = GenerationReport {
        module_path: module_path.to_path_buf(),
        ..GenerationReport::default()
    };

    for target in layout.targets() {
        let path = module_path.join(target.relative_path());

        if fs.exists(&path) {
            debug!(path = %path.display(), "File exists, skipping");
            report.skipped.push(path);
            continue;
        }

        if let Some(parent) = path.parent() {
            fs.create_dir_all(parent)?;
        }

        fs.write_file(&path, &content_for(module, target))?;
        debug!(path = %path.display(), "File written");
        report.created.push(path);
    }

    info!(
        created = report.created.len(),
        skipped = report.skipped.len(),
        "Module materialized"
    );
    Ok(report)
}

/// One planned target and whether it is already on disk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlannedFile {
    pub path: PathBuf,
    pub exists: bool,
}

/// What [`materialize`] would do, in plan order. Only probes `fs`.
pub fn preview(
    fs: &dyn Filesystem,
    layout: &ModuleLayout,
    module_path: &Path,
) -> Vec<PlannedFile> {
    layout
        .targets()
        .iter()
        .map(|target| {
            let path = module_path.join(target.relative_path());
            let exists = fs.exists(&path);
            PlannedFile { path, exists }
        })
        .collect()
}
