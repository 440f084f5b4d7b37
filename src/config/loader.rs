//! Settings file discovery and loading.

use crate::config::schema::Settings;
use crate::error::{DockerEnvError, Result};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable that relocates the base directory.
pub const HOME_ENV: &str = "DOCKER_ENV_INIT_HOME";

/// Name of the per-user base directory under `$HOME`.
pub const BASE_DIR_NAME: &str = ".docker-env-init";

/// Locations of the per-user files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigPaths {
    /// Base directory: `~/.docker-env-init` or `$DOCKER_ENV_INIT_HOME`.
    pub base_dir: PathBuf,

    /// Settings file: `<base>/config.yml`
    pub settings: PathBuf,

    /// Custom template root: `<base>/templates`
    pub templates: PathBuf,
}

impl ConfigPaths {
    /// Resolve paths from the environment.
    ///
    /// Without `$DOCKER_ENV_INIT_HOME` or a home directory, the base
    /// directory is relative to the working directory.
    pub fn discover() -> Self {
        let base = env::var_os(HOME_ENV)
            .filter(|v| !v.is_empty())
            .map(PathBuf::from)
            .or_else(|| dirs::home_dir().map(|home| home.join(BASE_DIR_NAME)))
            .unwrap_or_else(|| PathBuf::from(BASE_DIR_NAME));
        Self::from_base(base)
    }

    /// Paths under an explicit base directory.
    pub fn from_base(base_dir: impl Into<PathBuf>) -> Self {
        let base_dir = base_dir.into();
        Self {
            settings: base_dir.join("config.yml"),
            templates: base_dir.join("templates"),
            base_dir,
        }
    }
}

/// Parse YAML content into Settings.
///
/// An empty document yields the defaults.
pub fn parse_settings(content: &str, source_path: &Path) -> Result<Settings> {
    if content.trim().is_empty() {
        return Ok(Settings::default());
    }

    serde_yaml::from_str(content).map_err(|e| DockerEnvError::ConfigParseError {
        path: source_path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Load settings from one file.
///
/// # Errors
///
/// Returns `FileNotFound` if the file doesn't exist.
/// Returns `ConfigParseError` if the YAML is invalid or has unknown keys.
pub fn load_settings_file(path: &Path) -> Result<Settings> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            DockerEnvError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            DockerEnvError::Io(e)
        }
    })?;

    parse_settings(&content, path)
}

/// Load settings with optional path override.
///
/// An explicit `config_override` must exist. The default settings file is
/// optional and its absence yields the defaults.
pub fn load_settings(paths: &ConfigPaths, config_override: Option<&Path>) -> Result<Settings> {
    if let Some(override_path) = config_override {
        return load_settings_file(override_path);
    }

    if paths.settings.exists() {
        tracing::debug!("Loading settings from {}", paths.settings.display());
        load_settings_file(&paths.settings)
    } else {
        Ok(Settings::default())
    }
}
