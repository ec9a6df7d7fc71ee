//! Module Service - main application orchestrator.
//!
//! This service coordinates the module generation workflow:
//! 1. Locate the project root
//! 2. Plan the module layout
//! 3. Materialize missing files
//!
//! It implements the driving port (incoming) and uses driven ports (outgoing).

use std::path::{Path, PathBuf};

use tracing::{info, instrument, warn};

use crate::{
    application::{
        materializer::{GenerationReport, PlannedFile, materialize, preview},
        ports::Filesystem,
        root_locator::{DEFAULT_MANIFEST, find_root},
    },
    domain::{ModuleLayout, ModuleName, Subfolder},
    error::{ModforgeError, ModforgeResult},
};

/// Where modules live, relative to the project root.
pub const DEFAULT_MODULES_DIR: &str = "src/Modules";

/// Main module generation service.
pub struct ModuleService {
    filesystem: Box<dyn Filesystem>,
    modules_dir: PathBuf,
    manifest_files: Vec<String>,
}

impl ModuleService {
    /// Create a new module service over the given filesystem adapter.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let service = ModuleService::new(Box::new(LocalFilesystem::new()))
    ///     .with_modules_dir("src/Modules")
    ///     .with_manifest_files(vec!["package.json".into()]);
    /// ```
    pub fn new(filesystem: Box<dyn Filesystem>) -> Self {
        Self {
            filesystem,
            modules_dir: PathBuf::from(DEFAULT_MODULES_DIR),
            manifest_files: vec![DEFAULT_MANIFEST.to_string()],
        }
    }

    pub fn with_modules_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.modules_dir = dir.into();
        self
    }

    pub fn with_manifest_files(mut self, files: Vec<String>) -> Self {
        self.manifest_files = files;
        self
    }

    /// Find the enclosing project starting at `start`.
    pub fn locate_root(&self, start: &Path) -> ModforgeResult<PathBuf> {
        find_root(self.filesystem.as_ref(), start, &self.manifest_files)
    }

    /// Plan and validate the layout without touching the filesystem.
    pub fn plan(&self, module: &ModuleName, subfolders: &[Subfolder]) -> ModforgeResult<ModuleLayout> {
        let layout = ModuleLayout::plan(module, subfolders);
        layout.validate().map_err(ModforgeError::Domain)?;

        if !subfolders.contains(&Subfolder::Routes) {
            warn!("No routes subfolder configured; the module index will import a missing './routes'");
        }

        Ok(layout)
    }

    /// `<root>/<modules_dir>/<PascalName>`.
    pub fn module_path(&self, root: &Path, module: &ModuleName) -> PathBuf {
        root.join(&self.modules_dir).join(module.pascal())
    }

    /// Generate `module` under an already-located project `root`.
    #[instrument(
        skip_all,
        fields(module = %module, root = %root.display())
    )]
    pub fn generate(
        &self,
        module: &ModuleName,
        subfolders: &[Subfolder],
        root: &Path,
    ) -> ModforgeResult<GenerationReport> {
        info!("Generating module {}", module.pascal());

        let layout = self.plan(module, subfolders)?;
        let module_path = self.module_path(root, module);
        let report = materialize(self.filesystem.as_ref(), module, &layout, &module_path)?;

        if report.is_noop() {
            info!("Module already complete, nothing written");
        }
        Ok(report)
    }

    /// Files `generate` would touch under `root`, each marked if it already
    /// exists. Nothing is written.
    pub fn preview(
        &self,
        module: &ModuleName,
        subfolders: &[Subfolder],
        root: &Path,
    ) -> ModforgeResult<Vec<PlannedFile>> {
        let layout = self.plan(module, subfolders)?;
        let module_path = self.module_path(root, module);
        Ok(preview(self.filesystem.as_ref(), &layout, &module_path))
    }

    /// Locate the root from `start`, then generate.
    pub fn create_module(
        &self,
        module: &ModuleName,
        subfolders: &[Subfolder],
        start: &Path,
    ) -> ModforgeResult<GenerationReport> {
        let root = self.locate_root(start)?;
        self.generate(module, subfolders, &root)
    }
}
