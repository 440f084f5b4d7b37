//! Install command implementation.
//!
//! The `docker-env-init install` command downloads the Docker install script
//! and runs it with the chosen mirror.

use std::time::Duration;

use crate::cli::args::InstallArgs;
use crate::config::Settings;
use crate::docker::{run_install_script, ScriptFetcher};
use crate::error::Result;
use crate::shell::is_elevated;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

const FETCH_TIMEOUT: Duration = Duration::from_secs(60);

/// The install command implementation.
pub struct InstallCommand<'a> {
    settings: &'a Settings,
    args: InstallArgs,
}

impl<'a> InstallCommand<'a> {
    /// Create a new install command.
    pub fn new(settings: &'a Settings, args: InstallArgs) -> Self {
        Self { settings, args }
    }

    fn download(&self, ui: &mut dyn UserInterface) -> Result<String> {
        let url = &self.settings.install_script_url;
        let mut spinner = ui.start_spinner(&format!("Downloading {}", url));

        let fetched = ScriptFetcher::new(FETCH_TIMEOUT).and_then(|f| f.fetch(url));
        match fetched {
            Ok(script) => {
                spinner.finish_success("Downloaded install script");
                Ok(script)
            }
            Err(e) => {
                spinner.finish_error("Download failed");
                Err(e.into())
            }
        }
    }
}

impl Command for InstallCommand<'_> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        ui.message("Installing Docker...");
        ui.message(&format!(
            "Mirror: {}",
            self.args
                .mirror
                .map(|m| m.to_string())
                .unwrap_or_else(|| "default (auto-select)".to_string())
        ));

        if !is_elevated() {
            ui.warning("Not running as root; the install script may ask for sudo.");
        }

        let script = self.download(ui)?;
        tracing::debug!("Install script is {} bytes", script.len());

        let outcome = run_install_script(&script, self.args.mirror, &std::env::temp_dir())?;
        if outcome.success {
            ui.success("Docker installed successfully");
            Ok(CommandResult::success())
        } else {
            ui.error("Failed to install Docker");
            Ok(CommandResult::failure(outcome.code_or_one()))
        }
    }
}
