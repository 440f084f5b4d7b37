//! Environment directories and their active compose pointer.
//!
//! An environment directory is created once by [`materialize`] from a
//! template system. Afterwards the switchboard functions manage which
//! `docker-compose.<version>.yml` the `docker-compose.yml` symlink points at.

pub mod materialize;
pub mod scaffold;
pub mod switchboard;

pub use materialize::{materialize, Materialized};
pub use scaffold::{custom_compose, SWITCH_SCRIPT, SWITCH_SCRIPT_NAME};
pub use switchboard::{
    compose_path, compose_variant, create_custom, current_version, list_candidates,
    require_active, select_version, set_active, switch_to_file, version_compose_path,
    ActiveCompose, Candidate, COMPOSE_FILE,
};
