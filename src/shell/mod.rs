//! External program execution and platform checks.

pub mod command;
pub mod platform;

pub use command::{
    display_command, execute, execute_inherit, execute_quiet, CommandOptions, CommandResult,
};
pub use platform::{is_ci, is_elevated, lists_docker_group};
