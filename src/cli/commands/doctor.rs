//! Doctor command implementation.
//!
//! The `docker-env-init doctor` command reports on the Docker installation.

use crate::cli::args::DoctorArgs;
use crate::config::Settings;
use crate::docker::{run_checks, DoctorCheck};
use crate::error::Result;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The doctor command implementation.
pub struct DoctorCommand<'a> {
    settings: &'a Settings,
    args: DoctorArgs,
}

impl<'a> DoctorCommand<'a> {
    /// Create a new doctor command.
    pub fn new(settings: &'a Settings, args: DoctorArgs) -> Self {
        Self { settings, args }
    }
}

impl Command for DoctorCommand<'_> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let checks = run_checks(self.settings);
        report(&checks, self.args.json, ui)?;
        Ok(CommandResult::success())
    }
}

/// Print the checks, one line each, or as a JSON array.
fn report(checks: &[DoctorCheck], json: bool, ui: &mut dyn UserInterface) -> Result<()> {
    if json {
        let out = serde_json::to_string_pretty(checks)
            .map_err(|e| anyhow::anyhow!("Failed to serialize checks: {}", e))?;
        ui.message(&out);
        return Ok(());
    }

    ui.show_header("Docker Environment Check");
    for check in checks {
        let line = format!("{}: {}", check.name, check.detail);
        if check.passed() {
            ui.success(&line);
        } else {
            ui.message(&format!("✗ {}", line));
        }
        if let Some(hint) = &check.hint {
            ui.show_hint(hint);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::docker::run_checks_with;
    use crate::ui::MockUI;

    #[test]
    fn report_without_docker() {
        let checks = run_checks_with(&Settings::default(), |_, _| None);
        let mut ui = MockUI::new();

        report(&checks, false, &mut ui).unwrap();

        assert_eq!(ui.headers(), &["Docker Environment Check".to_string()]);
        assert!(ui.has_message("✗ Docker: not installed"));
        assert!(ui.has_message("✗ docker-compose: not installed"));
        assert!(ui.has_message("✗ Docker daemon: not running"));
        assert!(ui.has_message("✗ Docker group: check failed"));
        assert!(ui.has_hint("Run: docker-env-init install"));
        assert!(ui.successes().is_empty());
    }

    #[test]
    fn report_as_json() {
        let checks = run_checks_with(&Settings::default(), |_, _| None);
        let mut ui = MockUI::new();

        report(&checks, true, &mut ui).unwrap();

        let parsed: serde_json::Value = serde_json::from_str(&ui.messages()[0]).unwrap();
        assert_eq!(parsed.as_array().unwrap().len(), 4);
        assert_eq!(parsed[0]["name"], "Docker");
        assert_eq!(parsed[0]["status"], "fail");
        assert!(ui.headers().is_empty());
    }
}
