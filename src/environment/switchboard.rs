//! The active compose pointer of an environment directory.
//!
//! `docker-compose.yml` is a symlink to one concrete
//! `docker-compose.<version>.yml`. Every change of the active version goes
//! through [`set_active`].

use serde::Serialize;
use std::ffi::OsStr;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::error::{DockerEnvError, Result};

use super::scaffold::custom_compose;

/// Name of the pointer file.
pub const COMPOSE_FILE: &str = "docker-compose.yml";

/// Temporary name used while swapping the pointer.
const STAGING_LINK: &str = ".docker-compose.yml.next";

/// State of the pointer in an environment directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActiveCompose {
    /// No `docker-compose.yml`.
    None,
    /// `docker-compose.yml` is a symlink to `target`.
    Linked { target: PathBuf },
    /// `docker-compose.yml` is a regular file.
    Regular,
}

impl ActiveCompose {
    /// Label shown to the user: the link target's file name, or
    /// `docker-compose.yml` for a regular file.
    pub fn label(&self) -> Option<String> {
        match self {
            ActiveCompose::None => None,
            ActiveCompose::Linked { target } => Some(
                target
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_else(|| target.display().to_string()),
            ),
            ActiveCompose::Regular => Some(COMPOSE_FILE.to_string()),
        }
    }

    /// File name of the link target, if the pointer is a symlink.
    pub fn target_file_name(&self) -> Option<&str> {
        match self {
            ActiveCompose::Linked { target } => target.file_name()?.to_str(),
            _ => None,
        }
    }
}

/// A compose file that can be made active.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Candidate {
    /// File name, e.g. `docker-compose.22.04.yml`.
    pub file_name: String,
    /// The part between `docker-compose.` and `.yml`.
    pub variant: String,
    /// Whether the pointer currently targets this file.
    pub active: bool,
}

/// Path of the pointer in `env_dir`.
pub fn compose_path(env_dir: &Path) -> PathBuf {
    env_dir.join(COMPOSE_FILE)
}

/// Path of the compose file for a version.
pub fn version_compose_path(env_dir: &Path, version: &str) -> PathBuf {
    env_dir.join(format!("docker-compose.{}.yml", version))
}

/// Make `docker-compose.<version>.yml` the active compose file.
///
/// Fails with `VersionNotFound`, leaving the directory untouched, when the
/// file does not exist.
pub fn select_version(env_dir: &Path, version: &str) -> Result<PathBuf> {
    let target = version_compose_path(env_dir, version);
    if !target.is_file() {
        return Err(DockerEnvError::VersionNotFound {
            version: version.to_string(),
            dir: env_dir.to_path_buf(),
        });
    }

    set_active(env_dir, &target)?;
    Ok(target)
}

/// Make any existing file in `env_dir` the active compose file.
///
/// The pointer itself and the staging link are rejected.
pub fn switch_to_file(env_dir: &Path, file_name: &str) -> Result<PathBuf> {
    let target = env_dir.join(file_name);
    if is_pointer_path(env_dir, &target) {
        return Err(DockerEnvError::InvalidInput {
            message: format!("Cannot switch to {}; pick a concrete compose file", file_name),
        });
    }
    if !target.is_file() {
        return Err(DockerEnvError::FileNotFound { path: target });
    }

    set_active(env_dir, &target)?;
    Ok(target)
}

/// Point `docker-compose.yml` at `target`, replacing whatever was there.
///
/// The new link is created under a temporary name and renamed over the old
/// pointer, so readers see either the old or the new target. Targets inside
/// `env_dir` are stored as bare file names, anything else as an absolute
/// path.
pub fn set_active(env_dir: &Path, target: &Path) -> Result<()> {
    let link = compose_path(env_dir);
    let staging = env_dir.join(STAGING_LINK);
    let link_target = link_target(env_dir, target)?;

    remove_if_present(&staging)?;
    symlink(&link_target, &staging)?;

    if let Err(e) = fs::rename(&staging, &link) {
        let _ = fs::remove_file(&staging);
        return Err(e.into());
    }

    tracing::debug!("{} -> {}", link.display(), link_target.display());
    Ok(())
}

/// Read the pointer state of `env_dir`.
pub fn current_version(env_dir: &Path) -> Result<ActiveCompose> {
    let link = compose_path(env_dir);

    let metadata = match fs::symlink_metadata(&link) {
        Ok(m) => m,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(ActiveCompose::None),
        Err(e) => return Err(e.into()),
    };

    if metadata.file_type().is_symlink() {
        let target = fs::read_link(&link)?;
        Ok(ActiveCompose::Linked { target })
    } else {
        Ok(ActiveCompose::Regular)
    }
}

/// Path of the active compose file, failing with `NoActiveCompose` when the
/// pointer is missing or dangling.
pub fn require_active(env_dir: &Path) -> Result<PathBuf> {
    let link = compose_path(env_dir);
    if link.exists() {
        Ok(link)
    } else {
        Err(DockerEnvError::NoActiveCompose { path: link })
    }
}

/// Compose files in `env_dir` other than the pointer itself, sorted by name.
///
/// A file is marked active when its name equals the file name of the link
/// target.
pub fn list_candidates(env_dir: &Path) -> Result<Vec<Candidate>> {
    if !env_dir.is_dir() {
        return Ok(Vec::new());
    }

    let current = current_version(env_dir)?;
    let active_name = current.target_file_name();

    let mut candidates = Vec::new();
    for entry in fs::read_dir(env_dir)? {
        let entry = entry?;
        if entry.file_type()?.is_dir() {
            continue;
        }
        let Some(name) = entry.file_name().to_str().map(str::to_string) else {
            continue;
        };
        let Some(variant) = compose_variant(&name) else {
            continue;
        };
        candidates.push(Candidate {
            variant: variant.to_string(),
            active: active_name == Some(name.as_str()),
            file_name: name,
        });
    }

    candidates.sort_by(|a, b| a.file_name.cmp(&b.file_name));
    Ok(candidates)
}

/// The `<variant>` of `docker-compose.<variant>.yml`; `None` for the
/// pointer and unrelated files.
pub fn compose_variant(file_name: &str) -> Option<&str> {
    if file_name == COMPOSE_FILE {
        return None;
    }
    file_name
        .strip_prefix("docker-compose.")?
        .strip_suffix(".yml")
        .filter(|v| !v.is_empty())
}

/// Write a scaffold `docker-compose.<name>.yml`.
///
/// An existing file is only replaced when `overwrite` is set; otherwise this
/// fails with `AlreadyExists` and the caller decides whether to ask.
pub fn create_custom(env_dir: &Path, name: &str, overwrite: bool) -> Result<PathBuf> {
    if name.is_empty() || name.contains(['/', '\\']) {
        return Err(DockerEnvError::InvalidInput {
            message: format!("Invalid compose name '{}'", name),
        });
    }

    let path = version_compose_path(env_dir, name);
    if path.exists() && !overwrite {
        return Err(DockerEnvError::AlreadyExists { path });
    }

    fs::create_dir_all(env_dir)?;
    fs::write(&path, custom_compose(name))?;
    Ok(path)
}

/// Symlink targets resolve against the link's directory, so only a bare
/// file name or an absolute path points where the caller meant.
fn link_target(env_dir: &Path, target: &Path) -> Result<PathBuf> {
    match (target.parent(), target.file_name()) {
        (Some(parent), Some(name)) if parent == env_dir => Ok(PathBuf::from(name)),
        _ => Ok(std::path::absolute(target)?),
    }
}

/// Whether `target` is the pointer or the staging link of `env_dir`.
fn is_pointer_path(env_dir: &Path, target: &Path) -> bool {
    let (Some(parent), Some(name)) = (target.parent(), target.file_name()) else {
        return false;
    };
    if name != OsStr::new(COMPOSE_FILE) && name != OsStr::new(STAGING_LINK) {
        return false;
    }
    match (fs::canonicalize(parent), fs::canonicalize(env_dir)) {
        (Ok(a), Ok(b)) => a == b,
        _ => parent == env_dir,
    }
}

fn remove_if_present(path: &Path) -> Result<()> {
    match fs::remove_file(path) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(e.into()),
    }
}

#[cfg(unix)]
fn symlink(target: &Path, link: &Path) -> io::Result<()> {
    std::os::unix::fs::symlink(target, link)
}

#[cfg(windows)]
fn symlink(target: &Path, link: &Path) -> io::Result<()> {
    std::os::windows::fs::symlink_file(target, link)
}
