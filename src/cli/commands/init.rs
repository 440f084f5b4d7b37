//! Init command implementation.
//!
//! The `docker-env-init init` command writes a template system into a new
//! environment directory.

use std::path::{Path, PathBuf};

use crate::cli::args::InitArgs;
use crate::config::Settings;
use crate::environment::materialize;
use crate::error::Result;
use crate::registry::Registry;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The init command implementation.
pub struct InitCommand<'a> {
    base_dir: PathBuf,
    registry: &'a Registry,
    settings: &'a Settings,
    args: InitArgs,
}

impl<'a> InitCommand<'a> {
    /// Create a new init command. Relative target directories are resolved
    /// against `base_dir`.
    pub fn new(
        base_dir: &Path,
        registry: &'a Registry,
        settings: &'a Settings,
        args: InitArgs,
    ) -> Self {
        Self {
            base_dir: base_dir.to_path_buf(),
            registry,
            settings,
            args,
        }
    }

    /// Name of the system to materialize.
    fn system_name(&self) -> &str {
        self.args
            .system
            .as_deref()
            .unwrap_or(&self.settings.default_system)
    }
}

impl Command for InitCommand<'_> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let system = self.registry.require(self.system_name())?;
        let target = self.base_dir.join(&self.args.dir);

        let written = materialize(&target, system)?;
        for file in &written.files {
            ui.message(&format!("Created {}", file));
        }

        let shown = self.args.dir.display();
        ui.message("");
        ui.success(&format!("docker-env template created in {}/", shown));
        ui.message("");
        ui.message("Usage:");
        ui.show_hint(&format!("cd {}", shown));
        match system.default_version() {
            Some(version) if !system.versions().is_empty() => {
                ui.show_hint(&format!("docker-env-init use {}", version));
            }
            _ => ui.show_hint("docker-env-init use <version>"),
        }
        ui.show_hint("docker-env-init up");

        Ok(CommandResult::success())
    }
}
