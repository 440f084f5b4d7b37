//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results.
//!
//! # Architecture
//!
//! Commands are dispatched via [`CommandDispatcher`], which routes CLI
//! subcommands to their implementations. This allows:
//! - Single binary with subcommands (`docker-env-init use`, `docker-env-init up`)
//! - Settings and the template registry loaded in one place
//! - Consistent global flag handling

pub mod completions;
pub mod compose;
pub mod create;
pub mod current;
pub mod dispatcher;
pub mod doctor;
pub mod init;
pub mod install;
pub mod list;
pub mod switch;
pub mod templates;
pub mod use_version;

pub use dispatcher::{Command, CommandDispatcher, CommandResult};
