//! Use command implementation.
//!
//! The `docker-env-init use` command points `docker-compose.yml` at one
//! version's compose file, asking which one when no version is given.

use std::path::{Path, PathBuf};

use crate::cli::args::UseArgs;
use crate::environment::{list_candidates, select_version, Candidate};
use crate::error::{DockerEnvError, Result};
use crate::registry::{compare_versions, version_of};
use crate::ui::{Prompt, PromptOption, UserInterface};

use super::dispatcher::{Command, CommandResult};

/// The use command implementation.
pub struct UseCommand {
    env_dir: PathBuf,
    args: UseArgs,
}

impl UseCommand {
    /// Create a new use command.
    pub fn new(env_dir: &Path, args: UseArgs) -> Self {
        Self {
            env_dir: env_dir.to_path_buf(),
            args,
        }
    }

    fn pick_version(&self, ui: &mut dyn UserInterface) -> Result<String> {
        let mut versions: Vec<Candidate> = list_candidates(&self.env_dir)?
            .into_iter()
            .filter(|c| version_of(&c.file_name) == Some(c.variant.as_str()))
            .collect();
        versions.sort_by(|a, b| compare_versions(&a.variant, &b.variant));

        if versions.is_empty() {
            return Err(DockerEnvError::InvalidInput {
                message: format!(
                    "No docker-compose.<version>.yml files in {}",
                    self.env_dir.display()
                ),
            });
        }

        let default = if ui.is_interactive() {
            versions
                .iter()
                .find(|c| c.active)
                .map(|c| c.variant.clone())
        } else {
            None
        };

        let options = versions
            .iter()
            .map(|c| PromptOption {
                label: if c.active {
                    format!("{} (active)", c.variant)
                } else {
                    c.variant.clone()
                },
                value: c.variant.clone(),
            })
            .collect();

        let prompt = Prompt::select("version", "Select a version", options, default);
        Ok(ui.prompt(&prompt)?.as_string())
    }
}

impl Command for UseCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let version = match &self.args.version {
            Some(v) => v.clone(),
            None => self.pick_version(ui)?,
        };

        let target = select_version(&self.env_dir, &version)?;
        let name = target
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or(version);
        ui.success(&format!("Switched to: {}", name));

        Ok(CommandResult::success())
    }
}
