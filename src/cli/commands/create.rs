//! Create command implementation.
//!
//! The `docker-env-init create` command writes a scaffold
//! `docker-compose.<name>.yml`, asking before replacing an existing one.

use std::path::{Path, PathBuf};

use crate::cli::args::CreateArgs;
use crate::environment::create_custom;
use crate::error::{DockerEnvError, Result};
use crate::ui::{Prompt, UserInterface};

use super::dispatcher::{Command, CommandResult};

/// The create command implementation.
pub struct CreateCommand {
    env_dir: PathBuf,
    args: CreateArgs,
}

impl CreateCommand {
    /// Create a new create command.
    pub fn new(env_dir: &Path, args: CreateArgs) -> Self {
        Self {
            env_dir: env_dir.to_path_buf(),
            args,
        }
    }
}

impl Command for CreateCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let path = match create_custom(&self.env_dir, &self.args.name, self.args.force) {
            Ok(path) => path,
            Err(DockerEnvError::AlreadyExists { path }) => {
                let file_name = display_name(&path);
                let prompt = Prompt::confirm(
                    "overwrite",
                    format!("File {} exists. Overwrite?", file_name),
                    false,
                );
                if !ui.prompt(&prompt)?.as_bool() {
                    return Ok(CommandResult::success());
                }
                create_custom(&self.env_dir, &self.args.name, true)?
            }
            Err(e) => return Err(e),
        };

        let file_name = display_name(&path);
        ui.success(&format!("Created: {}", file_name));
        ui.show_hint(&format!(
            "Edit the file as needed, then run: docker-env-init switch {}",
            file_name
        ));

        Ok(CommandResult::success())
    }
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
