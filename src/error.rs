//! Error types for docker-env-init operations.
//!
//! This module defines [`DockerEnvError`], the primary error type used
//! throughout the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Use `DockerEnvError` for domain-specific errors that need distinct handling
//! - Use `anyhow::Error` (via `DockerEnvError::Other`) for unexpected errors
//! - All errors should name the missing or conflicting resource

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for docker-env-init operations.
#[derive(Debug, Error)]
pub enum DockerEnvError {
    /// A file or directory that must not exist yet is already present.
    #[error("{} already exists", path.display())]
    AlreadyExists { path: PathBuf },

    /// Referenced template system does not exist.
    #[error("Unknown template system: {name}")]
    UnknownSystem { name: String },

    /// No compose file for the requested version.
    #[error("docker-compose.{version}.yml not found in {}", dir.display())]
    VersionNotFound { version: String, dir: PathBuf },

    /// A file required by the command is missing.
    #[error("{} not found", path.display())]
    FileNotFound { path: PathBuf },

    /// The environment has no active compose file.
    #[error("{} not found. Run 'docker-env-init use <version>' first.", path.display())]
    NoActiveCompose { path: PathBuf },

    /// Failed to parse the settings file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// A value supplied on the command line cannot be used.
    #[error("{message}")]
    InvalidInput { message: String },

    /// External program could not be started.
    #[error("Failed to start {program}: {}", spawn_reason(.source))]
    CommandSpawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

fn spawn_reason(source: &std::io::Error) -> String {
    if source.kind() == std::io::ErrorKind::NotFound {
        "not found on PATH".to_string()
    } else {
        source.to_string()
    }
}

impl DockerEnvError {
    /// Whether this error reports a missing resource.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::UnknownSystem { .. }
                | Self::VersionNotFound { .. }
                | Self::FileNotFound { .. }
                | Self::NoActiveCompose { .. }
        )
    }
}

/// Result type alias for docker-env-init operations.
pub type Result<T> = std::result::Result<T, DockerEnvError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn already_exists_displays_path() {
        let err = DockerEnvError::AlreadyExists {
            path: PathBuf::from("docker-env"),
        };
        assert_eq!(err.to_string(), "docker-env already exists");
    }

    #[test]
    fn unknown_system_displays_name() {
        let err = DockerEnvError::UnknownSystem {
            name: "alpine".into(),
        };
        assert!(err.to_string().contains("alpine"));
    }

    #[test]
    fn version_not_found_names_compose_file() {
        let err = DockerEnvError::VersionNotFound {
            version: "99.99".into(),
            dir: PathBuf::from("/env"),
        };
        let msg = err.to_string();
        assert!(msg.contains("docker-compose.99.99.yml"));
        assert!(msg.contains("/env"));
    }

    #[test]
    fn no_active_compose_hints_at_use() {
        let err = DockerEnvError::NoActiveCompose {
            path: PathBuf::from("/env/docker-compose.yml"),
        };
        assert!(err.to_string().contains("use <version>"));
    }

    #[test]
    fn config_parse_error_displays_path_and_message() {
        let err = DockerEnvError::ConfigParseError {
            path: PathBuf::from("/config.yml"),
            message: "invalid syntax".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("/config.yml"));
        assert!(msg.contains("invalid syntax"));
    }

    #[test]
    fn command_spawn_names_missing_program() {
        let err = DockerEnvError::CommandSpawn {
            program: "docker-compose".into(),
            source: std::io::Error::from(std::io::ErrorKind::NotFound),
        };
        assert_eq!(
            err.to_string(),
            "Failed to start docker-compose: not found on PATH"
        );
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn not_found_classification() {
        assert!(DockerEnvError::UnknownSystem { name: "x".into() }.is_not_found());
        assert!(DockerEnvError::FileNotFound {
            path: PathBuf::from("x")
        }
        .is_not_found());
        assert!(!DockerEnvError::AlreadyExists {
            path: PathBuf::from("x")
        }
        .is_not_found());
    }

    #[test]
    fn io_error_converts_from_std() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: DockerEnvError = io_err.into();
        assert!(matches!(err, DockerEnvError::Io(_)));
    }
}
