//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate only receives the resolved values.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Environment variables, e.g. `MODFORGE_GENERATOR__MODULES_DIR=lib/modules`
//! 3. Config file (`--config <FILE>` or [`AppConfig::config_path`])
//! 4. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};

use modforge_core::{
    application::{DEFAULT_MANIFEST, DEFAULT_MODULES_DIR},
    domain::Subfolder,
};

use crate::error::{CliError, CliResult};

const ENV_PREFIX: &str = "MODFORGE";

/// Application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Module generation settings.
    pub generator: GeneratorConfig,
    /// Output settings.
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Modules directory relative to the project root.
    pub modules_dir: String,
    /// File names that mark a project root.
    pub manifest_files: Vec<String>,
    /// Subfolders generated for every module, in order.
    pub subfolders: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub no_color: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            generator: GeneratorConfig {
                modules_dir: DEFAULT_MODULES_DIR.into(),
                manifest_files: vec![DEFAULT_MANIFEST.into()],
                subfolders: Subfolder::defaults()
                    .into_iter()
                    .map(String::from)
                    .collect(),
            },
            output: OutputConfig { no_color: false },
        }
    }
}

impl AppConfig {
    /// Load configuration, layering file and environment over the defaults.
    ///
    /// An explicit `config_file` must exist; the default location is
    /// optional.
    pub fn load(config_file: Option<&Path>) -> CliResult<Self> {
        match config_file {
            Some(path) => Self::load_from(path, true),
            None => Self::load_from(&Self::config_path(), false),
        }
    }

    fn load_from(path: &Path, required: bool) -> CliResult<Self> {
        let defaults = Config::try_from(&Self::default()).map_err(config_error)?;

        Config::builder()
            .add_source(defaults)
            .add_source(
                File::from(path)
                    .format(FileFormat::Toml)
                    .required(required),
            )
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true)
                    .list_separator(",")
                    .with_list_parse_key("generator.manifest_files")
                    .with_list_parse_key("generator.subfolders"),
            )
            .build()
            .and_then(Config::try_deserialize)
            .map_err(config_error)
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.modforge.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "modforge", "modforge")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".modforge.toml"))
    }

    /// Serialise as the TOML written by `modforge config init`.
    pub fn to_toml(&self) -> CliResult<String> {
        toml::to_string_pretty(self).map_err(|e| CliError::ConfigError {
            message: format!("Failed to serialise config: {e}"),
            source: Some(Box::new(e)),
        })
    }
}

fn config_error(e: config::ConfigError) -> CliError {
    CliError::ConfigError {
        message: e.to_string(),
        source: Some(Box::new(e)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn defaults_match_express_layout() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.generator.modules_dir, "src/Modules");
        assert_eq!(cfg.generator.manifest_files, vec!["package.json"]);
        assert_eq!(
            cfg.generator.subfolders,
            vec!["controllers", "middlewares", "routes", "services", "repositories"]
        );
        assert!(!cfg.output.no_color);
    }

    #[test]
    fn missing_default_file_falls_back_to_defaults() {
        let tmp = TempDir::new().unwrap();
        let cfg = AppConfig::load_from(&tmp.path().join("absent.toml"), false).unwrap();
        assert_eq!(cfg.generator.modules_dir, "src/Modules");
    }

    #[test]
    fn explicit_missing_file_is_config_error() {
        let tmp = TempDir::new().unwrap();
        let err = AppConfig::load(Some(tmp.path().join("absent.toml").as_path())).unwrap_err();
        assert_eq!(err.exit_code(), 4);
    }

    #[test]
    fn file_overrides_defaults_partially() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("config.toml");
        std::fs::write(
            &path,
            "[generator]\nmodules_dir = \"lib/modules\"\nsubfolders = [\"controllers\", \"routes\"]\n",
        )
        .unwrap();

        let cfg = AppConfig::load(Some(path.as_path())).unwrap();
        assert_eq!(cfg.generator.modules_dir, "lib/modules");
        assert_eq!(cfg.generator.subfolders, vec!["controllers", "routes"]);
        assert_eq!(cfg.generator.manifest_files, vec!["package.json"]);
        assert!(!cfg.output.no_color);
    }

    #[test]
    fn malformed_file_is_config_error() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("config.toml");
        std::fs::write(&path, "[generator\nmodules_dir = ").unwrap();
        assert!(matches!(
            AppConfig::load(Some(path.as_path())),
            Err(CliError::ConfigError { .. })
        ));
    }

    #[test]
    fn toml_round_trips_through_loader() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("config.toml");
        std::fs::write(&path, AppConfig::default().to_toml().unwrap()).unwrap();
        let cfg = AppConfig::load(Some(path.as_path())).unwrap();
        assert_eq!(cfg.generator.subfolders.len(), 5);
    }

    #[test]
    fn config_path_is_not_empty() {
        assert!(!AppConfig::config_path().as_os_str().is_empty());
    }
}
