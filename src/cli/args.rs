//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use crate::docker::Mirror;

/// docker-env-init - Docker development environment templates.
#[derive(Debug, Parser)]
#[command(name = "docker-env-init")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Environment directory (overrides current directory)
    #[arg(short, long, global = true)]
    pub dir: Option<PathBuf>,

    /// Path to config file (overrides ~/.docker-env-init/config.yml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Show verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Create a docker-env template in a directory
    Init(InitArgs),

    /// Switch to a specific version
    Use(UseArgs),

    /// Show the active compose file
    Current,

    /// List available compose files
    List(ListArgs),

    /// Switch to a custom compose file
    Switch(SwitchArgs),

    /// Create a custom compose file from the scaffold
    Create(CreateArgs),

    /// Build images (uses the active docker-compose.yml)
    Build,

    /// Start the container in detached mode
    Up,

    /// Stop and remove containers
    Down,

    /// Run the container in the foreground
    Run,

    /// Exec into the running container
    Exec,

    /// Install Docker
    Install(InstallArgs),

    /// Check the Docker installation
    Doctor(DoctorArgs),

    /// Inspect and create template systems
    #[command(subcommand)]
    Templates(TemplatesAction),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `init` command.
#[derive(Debug, Clone, clap::Args)]
pub struct InitArgs {
    /// Directory to create
    #[arg(default_value = "docker-env")]
    pub dir: PathBuf,

    /// Template system to use (defaults to the configured system)
    #[arg(long)]
    pub system: Option<String>,
}

impl Default for InitArgs {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("docker-env"),
            system: None,
        }
    }
}

/// Arguments for the `use` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct UseArgs {
    /// Version to activate, e.g. 22.04 (prompts when omitted)
    #[arg(id = "target_version", value_name = "VERSION")]
    pub version: Option<String>,
}

/// Arguments for the `list` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ListArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `switch` command.
#[derive(Debug, Clone, clap::Args)]
pub struct SwitchArgs {
    /// Compose file in the environment directory
    pub file: String,
}

/// Arguments for the `create` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CreateArgs {
    /// Name used in docker-compose.<name>.yml
    pub name: String,

    /// Overwrite an existing file without asking
    #[arg(short, long)]
    pub force: bool,
}

/// Arguments for the `install` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct InstallArgs {
    /// Package mirror (default: auto-select)
    #[arg(value_enum)]
    pub mirror: Option<Mirror>,
}

/// Arguments for the `doctor` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct DoctorArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// `templates` subcommands.
#[derive(Debug, Clone, Subcommand)]
pub enum TemplatesAction {
    /// List template systems
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the versions and files of a system
    Show {
        /// System name
        name: String,
    },

    /// Create a custom system in ~/.docker-env-init/templates
    New {
        /// Name of the new system
        name: String,

        /// System to copy files from
        #[arg(long, default_value = "ubuntu")]
        base: String,
    },
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn init_defaults_to_docker_env() {
        let cli = Cli::try_parse_from(["docker-env-init", "init"]).unwrap();
        match cli.command {
            Commands::Init(args) => {
                assert_eq!(args.dir, PathBuf::from("docker-env"));
                assert!(args.system.is_none());
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn global_dir_after_subcommand() {
        let cli = Cli::try_parse_from(["docker-env-init", "current", "--dir", "/tmp/env"]).unwrap();
        assert_eq!(cli.dir, Some(PathBuf::from("/tmp/env")));
    }

    #[test]
    fn install_rejects_unknown_mirror() {
        assert!(Cli::try_parse_from(["docker-env-init", "install", "google"]).is_err());

        let cli = Cli::try_parse_from(["docker-env-init", "install", "cn"]).unwrap();
        match cli.command {
            Commands::Install(args) => assert_eq!(args.mirror, Some(Mirror::Cn)),
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn templates_new_default_base() {
        let cli = Cli::try_parse_from(["docker-env-init", "templates", "new", "arch"]).unwrap();
        match cli.command {
            Commands::Templates(TemplatesAction::New { name, base }) => {
                assert_eq!(name, "arch");
                assert_eq!(base, "ubuntu");
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn subcommand_is_required() {
        assert!(Cli::try_parse_from(["docker-env-init"]).is_err());
    }
}
