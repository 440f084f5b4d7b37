//! Docker installation health checks.

use serde::Serialize;

use crate::config::Settings;
use crate::shell::{execute_quiet, lists_docker_group, CommandResult};

/// Outcome of one check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckStatus {
    Pass,
    Fail,
}

/// One line of the doctor report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DoctorCheck {
    /// What was checked, e.g. `Docker daemon`.
    pub name: String,
    pub status: CheckStatus,
    /// Version string or state shown after the name.
    pub detail: String,
    /// Follow-up shown under a failed check.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}

impl DoctorCheck {
    fn pass(name: &str, detail: impl Into<String>) -> Self {
        Self {
            name: name.to_string(),
            status: CheckStatus::Pass,
            detail: detail.into(),
            hint: None,
        }
    }

    fn fail(name: &str, detail: impl Into<String>, hint: Option<&str>) -> Self {
        Self {
            name: name.to_string(),
            status: CheckStatus::Fail,
            detail: detail.into(),
            hint: hint.map(str::to_string),
        }
    }

    /// Whether the check passed.
    pub fn passed(&self) -> bool {
        self.status == CheckStatus::Pass
    }
}

/// Run every check with real processes.
pub fn run_checks(settings: &Settings) -> Vec<DoctorCheck> {
    run_checks_with(settings, |program, args| execute_quiet(program, args).ok())
}

/// Run every check through `run`, which returns `None` when a program
/// cannot be started.
pub fn run_checks_with<F>(settings: &Settings, run: F) -> Vec<DoctorCheck>
where
    F: Fn(&str, &[String]) -> Option<CommandResult>,
{
    let version = vec!["--version".to_string()];
    let mut checks = Vec::with_capacity(4);

    checks.push(match succeeded(run("docker", &version)) {
        Some(out) => DoctorCheck::pass("Docker", out),
        None => DoctorCheck::fail(
            "Docker",
            "not installed",
            Some("Run: docker-env-init install"),
        ),
    });

    let (compose_program, mut compose_args) = settings.compose_program();
    compose_args.extend(version);
    let compose_name = settings.compose_command.trim().to_string();
    checks.push(match succeeded(run(&compose_program, &compose_args)) {
        Some(out) => DoctorCheck::pass(&compose_name, out),
        None => DoctorCheck::fail(&compose_name, "not installed", None),
    });

    checks.push(match succeeded(run("docker", &["info".to_string()])) {
        Some(_) => DoctorCheck::pass("Docker daemon", "running"),
        None => DoctorCheck::fail("Docker daemon", "not running", None),
    });

    checks.push(match run("groups", &[]) {
        Some(result) if result.success => {
            if lists_docker_group(&result.stdout) {
                DoctorCheck::pass("Docker group", "user is member")
            } else {
                DoctorCheck::fail("Docker group", "user not member (may need sudo)", None)
            }
        }
        _ => DoctorCheck::fail("Docker group", "check failed", None),
    });

    checks
}

fn succeeded(result: Option<CommandResult>) -> Option<String> {
    result
        .filter(|r| r.success)
        .map(|r| r.stdout.trim().to_string())
}
