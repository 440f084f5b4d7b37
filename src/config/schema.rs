//! Settings file schema.

use serde::{Deserialize, Serialize};

/// User settings read from `~/.docker-env-init/config.yml`.
///
/// Every key is optional; unknown keys are rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Template system used by `init` when `--system` is not given.
    pub default_system: String,

    /// Output mode used when neither `--verbose` nor `--quiet` is given.
    pub default_output: OutputMode,

    /// Compose program and leading arguments, e.g. `docker compose`.
    pub compose_command: String,

    /// Location of the Docker install script used by `install`.
    pub install_script_url: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            default_system: default_system(),
            default_output: OutputMode::default(),
            compose_command: default_compose_command(),
            install_script_url: default_install_script_url(),
        }
    }
}

impl Settings {
    /// Split `compose_command` into a program and its leading arguments.
    ///
    /// Falls back to `docker-compose` when the value is blank.
    pub fn compose_program(&self) -> (String, Vec<String>) {
        let mut parts = self.compose_command.split_whitespace().map(str::to_string);
        match parts.next() {
            Some(program) => (program, parts.collect()),
            None => (default_compose_command(), Vec::new()),
        }
    }
}

fn default_system() -> String {
    "ubuntu".to_string()
}

fn default_compose_command() -> String {
    "docker-compose".to_string()
}

fn default_install_script_url() -> String {
    "https://linuxmirrors.cn/docker.sh".to_string()
}

/// Output verbosity mode
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputMode {
    Verbose,
    #[default]
    Normal,
    Quiet,
    Silent,
}
