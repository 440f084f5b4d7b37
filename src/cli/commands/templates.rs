//! Templates command implementation.
//!
//! The `docker-env-init templates` commands list, inspect and create
//! template systems.

use serde::Serialize;
use std::path::{Path, PathBuf};

use crate::cli::args::TemplatesAction;
use crate::error::Result;
use crate::registry::{builtin, Registry, SystemOrigin, TemplateSystem};
use crate::ui::{Table, UserInterface};

use super::dispatcher::{Command, CommandResult};

/// The templates command implementation.
pub struct TemplatesCommand {
    registry: Registry,
    custom_dir: PathBuf,
    action: TemplatesAction,
}

/// JSON shape of one system in `templates list --json`.
#[derive(Debug, Serialize)]
struct SystemSummary<'a> {
    name: &'a str,
    origin: SystemOrigin,
    versions: &'a [String],
    default_version: Option<&'a str>,
}

impl<'a> From<&'a TemplateSystem> for SystemSummary<'a> {
    fn from(system: &'a TemplateSystem) -> Self {
        Self {
            name: system.name(),
            origin: system.origin(),
            versions: system.versions(),
            default_version: system.default_version(),
        }
    }
}

impl TemplatesCommand {
    /// Create a new templates command. `custom_dir` is where `new` writes.
    pub fn new(registry: Registry, custom_dir: &Path, action: TemplatesAction) -> Self {
        Self {
            registry,
            custom_dir: custom_dir.to_path_buf(),
            action,
        }
    }

    fn list(&self, json: bool, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        if json {
            let summaries: Vec<SystemSummary> =
                self.registry.list().iter().map(SystemSummary::from).collect();
            let out = serde_json::to_string_pretty(&summaries)
                .map_err(|e| anyhow::anyhow!("Failed to serialize templates: {}", e))?;
            ui.message(&out);
            return Ok(CommandResult::success());
        }

        if self.registry.is_empty() {
            ui.message("No template systems found.");
            return Ok(CommandResult::success());
        }

        let mut table = Table::new(&["NAME", "ORIGIN", "VERSIONS", "DEFAULT"]);
        for system in self.registry.list() {
            table.add_row(&[
                system.name().to_string(),
                system.origin().to_string(),
                system.versions().join(", "),
                system.default_version().unwrap_or("-").to_string(),
            ]);
        }
        ui.message(&table.render());

        Ok(CommandResult::success())
    }

    fn show(&self, name: &str, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let system = self.registry.require(name)?;

        ui.show_header(&format!("{} ({})", system.name(), system.origin()));
        if system.origin() == SystemOrigin::Custom && builtin::has_system(system.name()) {
            ui.show_hint("Replaces the built-in system of the same name");
        }
        let versions = if system.versions().is_empty() {
            "none".to_string()
        } else {
            system.versions().join(", ")
        };
        ui.message(&format!("Versions: {}", versions));
        ui.message(&format!(
            "Default: {}",
            system.default_version().unwrap_or("none")
        ));
        ui.message("Files:");
        for (file_name, content) in system.files() {
            ui.message(&format!("  {} ({} bytes)", file_name, content.len()));
        }

        Ok(CommandResult::success())
    }

    fn create(&self, name: &str, base: &str, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let mut registry = self.registry.clone();
        if registry.get(base).is_none() {
            ui.warning(&format!(
                "Unknown base system '{}'; starting from the default Dockerfile",
                base
            ));
        }

        let dir = registry.create_custom_system(&self.custom_dir, name, base)?;
        ui.success(&format!("Created template system '{}' in {}", name, dir.display()));
        ui.show_hint(&format!("docker-env-init init --system {}", name));

        Ok(CommandResult::success())
    }
}

impl Command for TemplatesCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        match &self.action {
            TemplatesAction::List { json } => self.list(*json, ui),
            TemplatesAction::Show { name } => self.show(name, ui),
            TemplatesAction::New { name, base } => self.create(name, base, ui),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DockerEnvError;
    use crate::registry::MemoryRoot;
    use crate::ui::MockUI;
    use tempfile::TempDir;

    fn registry() -> Registry {
        let mut root = MemoryRoot::new(SystemOrigin::Builtin);
        root.add_file("ubuntu", "Dockerfile.20.04", b"FROM ubuntu:20.04\n");
        root.add_file("ubuntu", "Dockerfile.22.04", b"FROM ubuntu:22.04\n");
        root.add_file("ubuntu", "docker-compose.22.04.yml", b"services: {}\n");
        Registry::load(&[&root])
    }

    #[test]
    fn list_renders_table() {
        let temp = TempDir::new().unwrap();
        let cmd = TemplatesCommand::new(
            registry(),
            temp.path(),
            TemplatesAction::List { json: false },
        );
        let mut ui = MockUI::new();

        cmd.execute(&mut ui).unwrap();

        let table = &ui.messages()[0];
        assert!(table.contains("ubuntu"));
        assert!(table.contains("built-in"));
        assert!(table.contains("20.04, 22.04"));
    }

    #[test]
    fn list_json() {
        let temp = TempDir::new().unwrap();
        let cmd =
            TemplatesCommand::new(registry(), temp.path(), TemplatesAction::List { json: true });
        let mut ui = MockUI::new();

        cmd.execute(&mut ui).unwrap();

        let parsed: serde_json::Value = serde_json::from_str(&ui.messages()[0]).unwrap();
        assert_eq!(parsed[0]["name"], "ubuntu");
        assert_eq!(parsed[0]["origin"], "builtin");
        assert_eq!(parsed[0]["default_version"], "22.04");
    }

    #[test]
    fn list_empty_registry() {
        let temp = TempDir::new().unwrap();
        let cmd = TemplatesCommand::new(
            Registry::default(),
            temp.path(),
            TemplatesAction::List { json: false },
        );
        let mut ui = MockUI::new();

        cmd.execute(&mut ui).unwrap();

        assert!(ui.has_message("No template systems found."));
    }

    #[test]
    fn show_lists_files() {
        let temp = TempDir::new().unwrap();
        let cmd = TemplatesCommand::new(
            registry(),
            temp.path(),
            TemplatesAction::Show {
                name: "ubuntu".to_string(),
            },
        );
        let mut ui = MockUI::new();

        cmd.execute(&mut ui).unwrap();

        assert_eq!(ui.headers(), &["ubuntu (built-in)".to_string()]);
        assert!(ui.has_message("Versions: 20.04, 22.04"));
        assert!(ui.has_message("Default: 22.04"));
        assert!(ui.has_message("  docker-compose.22.04.yml (13 bytes)"));
    }

    #[test]
    fn show_unknown_system() {
        let temp = TempDir::new().unwrap();
        let cmd = TemplatesCommand::new(
            registry(),
            temp.path(),
            TemplatesAction::Show {
                name: "Ubuntu".to_string(),
            },
        );
        let mut ui = MockUI::new();

        let err = cmd.execute(&mut ui).unwrap_err();
        assert!(matches!(err, DockerEnvError::UnknownSystem { .. }));
    }

    #[test]
    fn new_copies_base_system() {
        let temp = TempDir::new().unwrap();
        let cmd = TemplatesCommand::new(
            registry(),
            temp.path(),
            TemplatesAction::New {
                name: "mine".to_string(),
                base: "ubuntu".to_string(),
            },
        );
        let mut ui = MockUI::new();

        cmd.execute(&mut ui).unwrap();

        assert!(temp.path().join("mine/Dockerfile.22.04").is_file());
        assert!(ui.has_success("Created template system 'mine'"));
        assert!(ui.warnings().is_empty());
    }

    #[test]
    fn new_with_unknown_base_warns() {
        let temp = TempDir::new().unwrap();
        let cmd = TemplatesCommand::new(
            registry(),
            temp.path(),
            TemplatesAction::New {
                name: "mine".to_string(),
                base: "arch".to_string(),
            },
        );
        let mut ui = MockUI::new();

        cmd.execute(&mut ui).unwrap();

        assert!(ui.has_warning("Unknown base system 'arch'"));
        assert!(temp.path().join("mine/Dockerfile").is_file());
    }

    #[test]
    fn new_existing_system_fails() {
        let temp = TempDir::new().unwrap();
        std::fs::create_dir_all(temp.path().join("mine")).unwrap();
        let cmd = TemplatesCommand::new(
            registry(),
            temp.path(),
            TemplatesAction::New {
                name: "mine".to_string(),
                base: "ubuntu".to_string(),
            },
        );
        let mut ui = MockUI::new();

        let err = cmd.execute(&mut ui).unwrap_err();
        assert!(matches!(err, DockerEnvError::AlreadyExists { .. }));
    }
}
