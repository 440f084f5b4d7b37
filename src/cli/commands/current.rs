//! Current command implementation.
//!
//! The `docker-env-init current` command shows which compose file
//! `docker-compose.yml` points at.

use std::path::{Path, PathBuf};

use crate::environment::{current_version, COMPOSE_FILE};
use crate::error::Result;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The current command implementation.
pub struct CurrentCommand {
    env_dir: PathBuf,
}

impl CurrentCommand {
    /// Create a new current command.
    pub fn new(env_dir: &Path) -> Self {
        Self {
            env_dir: env_dir.to_path_buf(),
        }
    }
}

impl Command for CurrentCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        match current_version(&self.env_dir)?.label() {
            Some(label) => ui.message(&format!("Current: {}", label)),
            None => ui.message(&format!(
                "No {} active. Run 'docker-env-init use <version>' first.",
                COMPOSE_FILE
            )),
        }

        Ok(CommandResult::success())
    }
}
