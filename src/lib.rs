//! docker-env-init - Docker development environment templates.
//!
//! docker-env-init writes template `Dockerfile`/`docker-compose.yml` files
//! into an environment directory, keeps a `docker-compose.yml` symlink
//! pointing at the active version, and drives Docker Compose against it.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Settings file loading
//! - [`docker`] - Compose invocations, Docker install and health checks
//! - [`environment`] - Environment directories and the active compose pointer
//! - [`error`] - Error types and result aliases
//! - [`registry`] - Template systems from the built-in and custom roots
//! - [`shell`] - Process execution
//! - [`ui`] - Interactive prompts, spinners, and terminal output
//!
//! # Example
//!
//! ```
//! use docker_env_init::environment::{current_version, select_version};
//! use docker_env_init::registry::{MemoryRoot, Registry, SystemOrigin};
//!
//! let mut root = MemoryRoot::new(SystemOrigin::Builtin);
//! root.add_file("ubuntu", "Dockerfile.22.04", b"FROM ubuntu:22.04\n");
//! root.add_file("ubuntu", "docker-compose.22.04.yml", b"services: {}\n");
//! let registry = Registry::load(&[&root]);
//! assert_eq!(registry.versions_for("ubuntu"), vec!["22.04"]);
//!
//! let dir = std::env::temp_dir().join(format!("docker-env-doc-{}", std::process::id()));
//! # let _ = std::fs::remove_dir_all(&dir);
//! docker_env_init::environment::materialize(&dir, registry.require("ubuntu").unwrap()).unwrap();
//! select_version(&dir, "22.04").unwrap();
//! assert_eq!(
//!     current_version(&dir).unwrap().label().as_deref(),
//!     Some("docker-compose.22.04.yml")
//! );
//! # std::fs::remove_dir_all(&dir).unwrap();
//! ```

pub mod cli;
pub mod config;
pub mod docker;
pub mod environment;
pub mod error;
pub mod registry;
pub mod shell;
pub mod ui;

pub use error::{DockerEnvError, Result};
