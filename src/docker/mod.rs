//! Everything that shells out to Docker.
//!
//! - [`compose`] runs Compose against the active compose file
//! - [`install`] downloads and runs the Docker install script
//! - [`doctor`] checks the local Docker installation

pub mod compose;
pub mod doctor;
pub mod install;

pub use compose::{compose_invocation, run_compose, ComposeAction, SERVICE_NAME};
pub use doctor::{run_checks, run_checks_with, CheckStatus, DoctorCheck};
pub use install::{run_install_script, script_args, script_env, Mirror, ScriptFetcher};
