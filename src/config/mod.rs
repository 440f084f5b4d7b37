//! Per-user settings for docker-env-init.
//!
//! - Schema definitions in [`schema`]
//! - Path discovery and loading in [`loader`]
//!
//! # Example
//!
//! ```
//! use docker_env_init::config::{load_settings, ConfigPaths};
//! use tempfile::TempDir;
//! use std::fs;
//!
//! let temp = TempDir::new().unwrap();
//! let paths = ConfigPaths::from_base(temp.path());
//! fs::write(&paths.settings, "compose_command: docker compose").unwrap();
//!
//! let settings = load_settings(&paths, None).unwrap();
//! assert_eq!(settings.compose_command, "docker compose");
//! assert_eq!(settings.default_system, "ubuntu");
//! ```
//!
//! # File Locations
//!
//! - Settings: `~/.docker-env-init/config.yml` (or `--config <PATH>`)
//! - Custom templates: `~/.docker-env-init/templates/<system>/`
//!
//! `DOCKER_ENV_INIT_HOME` replaces `~/.docker-env-init`.

pub mod loader;
pub mod schema;

pub use loader::{
    load_settings, load_settings_file, parse_settings, ConfigPaths, BASE_DIR_NAME, HOME_ENV,
};
pub use schema::{OutputMode, Settings};
