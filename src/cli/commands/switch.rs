//! Switch command implementation.
//!
//! The `docker-env-init switch` command points `docker-compose.yml` at any
//! compose file in the environment directory.

use std::path::{Path, PathBuf};

use crate::cli::args::SwitchArgs;
use crate::environment::switch_to_file;
use crate::error::Result;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The switch command implementation.
pub struct SwitchCommand {
    env_dir: PathBuf,
    args: SwitchArgs,
}

impl SwitchCommand {
    /// Create a new switch command.
    pub fn new(env_dir: &Path, args: SwitchArgs) -> Self {
        Self {
            env_dir: env_dir.to_path_buf(),
            args,
        }
    }
}

impl Command for SwitchCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        switch_to_file(&self.env_dir, &self.args.file)?;
        ui.success(&format!("Switched to: {}", self.args.file));
        Ok(CommandResult::success())
    }
}
