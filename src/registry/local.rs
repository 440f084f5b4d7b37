//! User template directory (`~/.docker-env-init/templates/`).

use crate::error::{DockerEnvError, Result};
use crate::registry::source::DirRoot;
use crate::registry::system::{SystemOrigin, TemplateSystem};
use std::fs;
use std::path::{Path, PathBuf};

/// Dockerfile written into a new custom system when there is no base
/// system to copy from.
pub const DEFAULT_DOCKERFILE: &str = r#"FROM ubuntu:22.04

ENV DEBIAN_FRONTEND=noninteractive
ENV TZ=Asia/Shanghai

RUN sed -i 's/archive.ubuntu.com/mirrors.aliyun.com/g' /etc/apt/sources.list && \
    sed -i 's/security.ubuntu.com/mirrors.aliyun.com/g' /etc/apt/sources.list

RUN apt-get update && apt-get install -y \
    build-essential \
    cmake \
    make \
    git \
    vim \
    curl \
    wget \
    pkg-config \
    libssl-dev \
    gdb \
    gcc-arm-linux-gnueabihf \
    g++-arm-linux-gnueabihf \
    device-tree-compiler \
    libncurses5-dev \
    libelf-dev \
    bc \
    flex \
    bison \
    libfdt-dev \
    rsync \
    python3 \
    python3-pip \
    && rm -rf /var/lib/apt/lists/* \
    && apt-get clean

ARG HOST_UID=1000
ARG HOST_GID=1000

RUN groupadd -g ${HOST_GID} dockeruser && \
    useradd -m -u ${HOST_UID} -g ${HOST_GID} dockeruser

USER dockeruser
WORKDIR /workspace

CMD ["bash"]
"#;

/// Root for the user's own template systems.
pub fn custom_root(dir: &Path) -> DirRoot {
    DirRoot::new(dir, SystemOrigin::Custom)
}

/// Write a new custom system directory.
///
/// Copies every file of `base` when given, otherwise writes
/// [`DEFAULT_DOCKERFILE`] as both `Dockerfile` and `Dockerfile.22.04`.
/// Fails with `AlreadyExists` if the system directory is present.
pub fn write_custom_system(
    templates_dir: &Path,
    name: &str,
    base: Option<&TemplateSystem>,
) -> Result<PathBuf> {
    validate_system_name(name)?;

    let system_dir = templates_dir.join(name);
    if system_dir.exists() {
        return Err(DockerEnvError::AlreadyExists { path: system_dir });
    }

    fs::create_dir_all(&system_dir)?;

    match base {
        Some(base) => {
            tracing::debug!("Copying {} files from '{}'", base.files().len(), base.name());
            for (file_name, content) in base.files() {
                fs::write(system_dir.join(file_name), content)?;
            }
        }
        None => {
            fs::write(system_dir.join("Dockerfile"), DEFAULT_DOCKERFILE)?;
            fs::write(system_dir.join("Dockerfile.22.04"), DEFAULT_DOCKERFILE)?;
        }
    }

    Ok(system_dir)
}

fn validate_system_name(name: &str) -> Result<()> {
    let valid = !name.is_empty()
        && name != "."
        && name != ".."
        && !name.contains(['/', '\\']);
    if valid {
        Ok(())
    } else {
        Err(DockerEnvError::InvalidInput {
            message: format!("Invalid template name '{}'", name),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::source::TemplateRoot;
    use tempfile::TempDir;

    #[test]
    fn writes_default_files_without_base() {
        let temp = TempDir::new().unwrap();
        let dir = write_custom_system(temp.path(), "arm", None).unwrap();

        assert_eq!(dir, temp.path().join("arm"));
        let content = fs::read_to_string(dir.join("Dockerfile.22.04")).unwrap();
        assert!(content.contains("gcc-arm-linux-gnueabihf"));
        assert!(dir.join("Dockerfile").exists());
    }

    #[test]
    fn copies_base_system_files() {
        let temp = TempDir::new().unwrap();
        let base = TemplateSystem::from_files(
            "ubuntu",
            SystemOrigin::Builtin,
            vec![("docker-compose.22.04.yml".to_string(), b"services: {}\n".to_vec())],
        );

        let dir = write_custom_system(temp.path(), "mine", Some(&base)).unwrap();

        assert_eq!(
            fs::read(dir.join("docker-compose.22.04.yml")).unwrap(),
            b"services: {}\n"
        );
        assert!(!dir.join("Dockerfile").exists());
    }

    #[test]
    fn existing_system_is_rejected() {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join("taken")).unwrap();

        let result = write_custom_system(temp.path(), "taken", None);
        assert!(matches!(result, Err(DockerEnvError::AlreadyExists { .. })));
    }

    #[test]
    fn path_like_names_are_rejected() {
        let temp = TempDir::new().unwrap();
        for name in ["", "..", "a/b"] {
            let result = write_custom_system(temp.path(), name, None);
            assert!(matches!(result, Err(DockerEnvError::InvalidInput { .. })));
        }
    }

    #[test]
    fn custom_root_has_custom_origin() {
        let temp = TempDir::new().unwrap();
        assert_eq!(custom_root(temp.path()).origin(), SystemOrigin::Custom);
    }
}
