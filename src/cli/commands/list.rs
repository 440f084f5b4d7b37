//! List command implementation.
//!
//! The `docker-env-init list` command lists the compose files that can be
//! made active.

use std::path::{Path, PathBuf};

use crate::cli::args::ListArgs;
use crate::environment::list_candidates;
use crate::error::Result;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The list command implementation.
pub struct ListCommand {
    env_dir: PathBuf,
    args: ListArgs,
}

impl ListCommand {
    /// Create a new list command.
    pub fn new(env_dir: &Path, args: ListArgs) -> Self {
        Self {
            env_dir: env_dir.to_path_buf(),
            args,
        }
    }

    /// Get the command arguments.
    pub fn args(&self) -> &ListArgs {
        &self.args
    }
}

impl Command for ListCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let candidates = list_candidates(&self.env_dir)?;

        if self.args.json {
            let json = serde_json::to_string_pretty(&candidates)
                .map_err(|e| anyhow::anyhow!("Failed to serialize compose files: {}", e))?;
            ui.message(&json);
            return Ok(CommandResult::success());
        }

        ui.message("Available docker-compose files:");
        if candidates.is_empty() {
            ui.message("  (no files found)");
        }
        for candidate in &candidates {
            let marker = if candidate.active { " (active)" } else { "" };
            ui.message(&format!("  {}{}", candidate.file_name, marker));
        }

        Ok(CommandResult::success())
    }
}
