//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing CLI subcommands

use std::path::{Path, PathBuf};

use crate::cli::args::{Cli, Commands};
use crate::config::{ConfigPaths, Settings};
use crate::docker::ComposeAction;
use crate::error::Result;
use crate::registry::Registry;
use crate::ui::UserInterface;

/// Trait for command implementations.
///
/// Each CLI subcommand implements this trait to provide its execution logic.
pub trait Command {
    /// Execute the command.
    ///
    /// # Arguments
    ///
    /// * `ui` - User interface for displaying output and prompts
    ///
    /// # Returns
    ///
    /// A [`CommandResult`] indicating success/failure and exit code.
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }
}

/// Dispatches CLI commands to their implementations.
pub struct CommandDispatcher {
    env_dir: PathBuf,
    paths: ConfigPaths,
    settings: Settings,
}

impl CommandDispatcher {
    /// Create a new dispatcher for the given environment directory.
    pub fn new(env_dir: PathBuf, paths: ConfigPaths, settings: Settings) -> Self {
        Self {
            env_dir,
            paths,
            settings,
        }
    }

    /// Get the environment directory.
    pub fn env_dir(&self) -> &Path {
        &self.env_dir
    }

    /// Load the template registry: built-in systems, then the custom root.
    fn registry(&self) -> Registry {
        Registry::with_custom_dir(&self.paths.templates)
    }

    /// Dispatch and execute a command.
    ///
    /// Routes the CLI subcommand to the appropriate command implementation
    /// and executes it.
    pub fn dispatch(&self, cli: &Cli, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let env_dir = &self.env_dir;
        let settings = &self.settings;

        match &cli.command {
            Commands::Init(args) => {
                let registry = self.registry();
                let cmd = super::init::InitCommand::new(env_dir, &registry, settings, args.clone());
                cmd.execute(ui)
            }
            Commands::Use(args) => {
                let cmd = super::use_version::UseCommand::new(env_dir, args.clone());
                cmd.execute(ui)
            }
            Commands::Current => super::current::CurrentCommand::new(env_dir).execute(ui),
            Commands::List(args) => {
                let cmd = super::list::ListCommand::new(env_dir, args.clone());
                cmd.execute(ui)
            }
            Commands::Switch(args) => {
                let cmd = super::switch::SwitchCommand::new(env_dir, args.clone());
                cmd.execute(ui)
            }
            Commands::Create(args) => {
                let cmd = super::create::CreateCommand::new(env_dir, args.clone());
                cmd.execute(ui)
            }
            Commands::Build => self.compose(ComposeAction::Build, ui),
            Commands::Up => self.compose(ComposeAction::Up, ui),
            Commands::Down => self.compose(ComposeAction::Down, ui),
            Commands::Run => self.compose(ComposeAction::Run, ui),
            Commands::Exec => self.compose(ComposeAction::Exec, ui),
            Commands::Install(args) => {
                let cmd = super::install::InstallCommand::new(settings, args.clone());
                cmd.execute(ui)
            }
            Commands::Doctor(args) => {
                let cmd = super::doctor::DoctorCommand::new(settings, args.clone());
                cmd.execute(ui)
            }
            Commands::Templates(sub) => {
                let cmd = super::templates::TemplatesCommand::new(
                    self.registry(),
                    &self.paths.templates,
                    sub.clone(),
                );
                cmd.execute(ui)
            }
            Commands::Completions(args) => {
                let cmd = super::completions::CompletionsCommand::new(args.clone());
                cmd.execute(ui)
            }
        }
    }

    fn compose(&self, action: ComposeAction, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let cmd = super::compose::ComposeCommand::new(&self.env_dir, &self.settings, action);
        cmd.execute(ui)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::MockUI;
    use clap::Parser;
    use std::fs;
    use tempfile::TempDir;

    fn dispatcher(temp: &TempDir) -> CommandDispatcher {
        CommandDispatcher::new(
            temp.path().join("env"),
            ConfigPaths::from_base(temp.path().join("home")),
            Settings::default(),
        )
    }

    #[test]
    fn command_result_success() {
        let result = CommandResult::success();
        assert!(result.success);
        assert_eq!(result.exit_code, 0);
    }

    #[test]
    fn command_result_failure() {
        let result = CommandResult::failure(1);
        assert!(!result.success);
        assert_eq!(result.exit_code, 1);
    }

    #[test]
    fn dispatcher_creation() {
        let dispatcher = CommandDispatcher::new(
            PathBuf::from("/test"),
            ConfigPaths::from_base("/home/test/.docker-env-init"),
            Settings::default(),
        );
        assert_eq!(dispatcher.env_dir(), Path::new("/test"));
    }

    #[test]
    fn dispatch_init_then_use() {
        let temp = TempDir::new().unwrap();
        let dispatcher = dispatcher(&temp);
        fs::create_dir_all(dispatcher.env_dir()).unwrap();
        let mut ui = MockUI::new();

        let init = Cli::try_parse_from(["docker-env-init", "init", "ubuntu-env"]).unwrap();
        assert!(dispatcher.dispatch(&init, &mut ui).unwrap().success);

        let env = CommandDispatcher::new(
            dispatcher.env_dir().join("ubuntu-env"),
            ConfigPaths::from_base(temp.path().join("home")),
            Settings::default(),
        );
        let select = Cli::try_parse_from(["docker-env-init", "use", "22.04"]).unwrap();
        assert!(env.dispatch(&select, &mut ui).unwrap().success);
        assert!(ui.has_success("Switched to: docker-compose.22.04.yml"));
    }

    #[test]
    fn dispatch_compose_without_pointer_fails() {
        let temp = TempDir::new().unwrap();
        let dispatcher = dispatcher(&temp);
        let mut ui = MockUI::new();

        let cli = Cli::try_parse_from(["docker-env-init", "build"]).unwrap();
        let err = dispatcher.dispatch(&cli, &mut ui).unwrap_err();
        assert!(err.to_string().contains("docker-env-init use <version>"));
    }
}
