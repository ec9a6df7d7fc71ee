use std::collections::HashSet;
use std::path::PathBuf;

use super::{error::DomainError, module_name::ModuleName, subfolder::Subfolder};

/// File name of every aggregator and of the module root index.
pub const INDEX_FILE: &str = "index.ts";

/// What a planned file is for; decides which renderer produces its content.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum FileRole {
    /// `<Module>/index.ts`, mounting the module router.
    ModuleIndex,
    /// The implementation file of a subfolder.
    Primary(Subfolder),
    /// `<subfolder>/index.ts`, re-exporting the primary symbol.
    Aggregator(Subfolder),
}

/// A single file to create, relative to the module directory.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FileTarget {
    pub role: FileRole,
    pub file_name: String,
}

impl FileTarget {
    /// Containing folder relative to the module directory; `""` for the root.
    pub fn folder(&self) -> &str {
        match &self.role {
            FileRole::ModuleIndex => "",
            FileRole::Primary(f) | FileRole::Aggregator(f) => f.as_str(),
        }
    }

    pub fn relative_path(&self) -> PathBuf {
        PathBuf::from(self.folder()).join(&self.file_name)
    }
}

/// Ordered plan of everything a module consists of.
///
/// Ordering contract: the root index, then every primary file in subfolder
/// order, then every aggregator in subfolder order.
#[derive(Debug, Clone)]
pub struct ModuleLayout {
    pub(crate) module_dir: String,
    pub(crate) subfolders: Vec<Subfolder>,
    pub(crate) targets: Vec<FileTarget>,
}

impl ModuleLayout {
    /// Plan the files for `module` across `subfolders`.
    pub fn plan(module: &ModuleName, subfolders: &[Subfolder]) -> Self {
        let mut targets = Vec::with_capacity(1 + 2 * subfolders.len());

        targets.push(FileTarget {
            role: FileRole::ModuleIndex,
            file_name: INDEX_FILE.into(),
        });

        targets.extend(subfolders.iter().map(|folder| FileTarget {
            role: FileRole::Primary(folder.clone()),
            file_name: folder.primary_file_name(module),
        }));

        targets.extend(subfolders.iter().map(|folder| FileTarget {
            role: FileRole::Aggregator(folder.clone()),
            file_name: INDEX_FILE.into(),
        }));

        Self {
            module_dir: module.pascal(),
            subfolders: subfolders.to_vec(),
            targets,
        }
    }

    /// Reject empty plans and plans producing the same path twice.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.subfolders.is_empty() {
            return Err(DomainError::EmptySubfolderSet);
        }

        let mut seen = HashSet::new();
        for target in &self.targets {
            let path = target.relative_path();
            if !seen.insert(path.clone()) {
                return Err(DomainError::DuplicateTarget {
                    path: path.display().to_string(),
                });
            }
        }

        Ok(())
    }

    /// PascalCase directory name under the modules root.
    pub fn module_dir(&self) -> &str {
        &self.module_dir
    }

    pub fn subfolders(&self) -> &[Subfolder] {
        &self.subfolders
    }

    pub fn targets(&self) -> &[FileTarget] {
        &self.targets
    }

    pub fn len(&self) -> usize {
        self.targets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plan(name: &str, folders: &[Subfolder]) -> ModuleLayout {
        ModuleLayout::plan(&ModuleName::new(name).unwrap(), folders)
    }

    #[test]
    fn target_count_is_one_plus_two_per_folder() {
        let defaults = Subfolder::defaults();
        for n in 0..=defaults.len() {
            let layout = plan("user", &defaults[..n]);
            assert_eq!(layout.len(), 1 + 2 * n);
        }
    }

    #[test]
    fn default_plan_has_no_duplicates() {
        let layout = plan("blog_post", &Subfolder::defaults());
        let unique: HashSet<_> = layout.targets().iter().map(|t| t.relative_path()).collect();
        assert_eq!(unique.len(), layout.len());
        assert!(layout.validate().is_ok());
    }

    #[test]
    fn primaries_come_before_aggregators() {
        let layout = plan("user", &Subfolder::defaults());
        let roles: Vec<_> = layout.targets().iter().map(|t| &t.role).collect();

        assert_eq!(roles[0], &FileRole::ModuleIndex);
        assert!(roles[1..6].iter().all(|r| matches!(r, FileRole::Primary(_))));
        assert!(roles[6..].iter().all(|r| matches!(r, FileRole::Aggregator(_))));
        assert_eq!(layout.targets()[1].file_name, "user.controller.ts");
        assert_eq!(layout.targets()[5].file_name, "user.repository.ts");
    }

    #[test]
    fn root_index_has_empty_folder() {
        let layout = plan("user", &Subfolder::defaults());
        let root = &layout.targets()[0];
        assert_eq!(root.folder(), "");
        assert_eq!(root.relative_path(), PathBuf::from("index.ts"));
    }

    #[test]
    fn module_dir_is_pascal() {
        assert_eq!(plan("blog_post", &Subfolder::defaults()).module_dir(), "BlogPost");
    }

    #[test]
    fn repeated_folder_is_a_duplicate() {
        let layout = plan("user", &[Subfolder::Routes, Subfolder::Routes]);
        assert!(matches!(
            layout.validate(),
            Err(DomainError::DuplicateTarget { .. })
        ));
    }

    #[test]
    fn empty_folder_set_is_rejected() {
        assert_eq!(
            plan("user", &[]).validate(),
            Err(DomainError::EmptySubfolderSet)
        );
    }
}
