//! Compose invocations against the active compose file.

use std::path::Path;

use crate::config::Settings;
use crate::environment::require_active;
use crate::error::Result;
use crate::shell::{execute_inherit, CommandResult};

/// Service every generated compose file defines.
pub const SERVICE_NAME: &str = "compile-env";

/// Compose operations exposed as subcommands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComposeAction {
    /// `build`
    Build,
    /// `up -d`
    Up,
    /// `down`
    Down,
    /// `up` in the foreground
    Run,
    /// `exec compile-env bash`
    Exec,
}

impl ComposeAction {
    /// Compose arguments after `-f <file>`.
    pub fn args(&self) -> Vec<String> {
        let args: &[&str] = match self {
            ComposeAction::Build => &["build"],
            ComposeAction::Up => &["up", "-d"],
            ComposeAction::Down => &["down"],
            ComposeAction::Run => &["up"],
            ComposeAction::Exec => &["exec", SERVICE_NAME, "bash"],
        };
        args.iter().map(|a| a.to_string()).collect()
    }
}

/// Full program and argument list for `action` on `compose_file`.
pub fn compose_invocation(
    settings: &Settings,
    compose_file: &Path,
    action: ComposeAction,
) -> (String, Vec<String>) {
    let (program, mut args) = settings.compose_program();
    args.push("-f".to_string());
    args.push(compose_file.display().to_string());
    args.extend(action.args());
    (program, args)
}

/// Run `action` against the active compose file of `env_dir` with inherited
/// stdio.
///
/// Fails with `NoActiveCompose` before starting anything when no version is
/// selected.
pub fn run_compose(
    settings: &Settings,
    env_dir: &Path,
    action: ComposeAction,
) -> Result<CommandResult> {
    let compose_file = require_active(env_dir)?;
    let (program, args) = compose_invocation(settings, &compose_file, action);
    execute_inherit(&program, &args)
}
