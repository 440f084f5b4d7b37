//! Compose command implementations.
//!
//! `build`, `up`, `down`, `run` and `exec` all run the configured compose
//! program against the active `docker-compose.yml`.

use std::path::{Path, PathBuf};

use crate::config::Settings;
use crate::docker::{run_compose, ComposeAction};
use crate::error::Result;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// A compose subcommand.
pub struct ComposeCommand<'a> {
    env_dir: PathBuf,
    settings: &'a Settings,
    action: ComposeAction,
}

impl<'a> ComposeCommand<'a> {
    /// Create a new compose command.
    pub fn new(env_dir: &Path, settings: &'a Settings, action: ComposeAction) -> Self {
        Self {
            env_dir: env_dir.to_path_buf(),
            settings,
            action,
        }
    }
}

impl Command for ComposeCommand<'_> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let outcome = run_compose(self.settings, &self.env_dir, self.action)?;

        if !outcome.success {
            if self.action == ComposeAction::Exec {
                ui.error("Failed to exec into container. Is it running?");
            }
            return Ok(CommandResult::failure(outcome.code_or_one()));
        }

        if self.action == ComposeAction::Up {
            ui.message("Container started. Run 'docker-env-init exec' to enter.");
        }

        Ok(CommandResult::success())
    }
}
