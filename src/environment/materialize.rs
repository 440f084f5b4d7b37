//! Writing a new environment directory from a template system.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{DockerEnvError, Result};
use crate::registry::TemplateSystem;

use super::scaffold::{SWITCH_SCRIPT, SWITCH_SCRIPT_NAME};

/// Files written by [`materialize`].
#[derive(Debug, Clone)]
pub struct Materialized {
    /// The new environment directory.
    pub dir: PathBuf,
    /// Names of every file written, template files first.
    pub files: Vec<String>,
}

/// Create `target_dir` and write every file of `system` into it, plus the
/// generated `switch.sh`.
///
/// Fails with `AlreadyExists` before writing anything if `target_dir` is
/// already present.
pub fn materialize(target_dir: &Path, system: &TemplateSystem) -> Result<Materialized> {
    if target_dir.exists() || fs::symlink_metadata(target_dir).is_ok() {
        return Err(DockerEnvError::AlreadyExists {
            path: target_dir.to_path_buf(),
        });
    }

    fs::create_dir_all(target_dir)?;
    tracing::debug!(
        "Materializing '{}' into {}",
        system.name(),
        target_dir.display()
    );

    let mut files = Vec::with_capacity(system.files().len() + 1);
    for (file_name, content) in system.files() {
        fs::write(target_dir.join(file_name), content)?;
        files.push(file_name.clone());
    }

    let script = target_dir.join(SWITCH_SCRIPT_NAME);
    fs::write(&script, SWITCH_SCRIPT)?;
    make_executable(&script)?;
    files.push(SWITCH_SCRIPT_NAME.to_string());

    Ok(Materialized {
        dir: target_dir.to_path_buf(),
        files,
    })
}

#[cfg(unix)]
fn make_executable(path: &Path) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;
    fs::set_permissions(path, fs::Permissions::from_mode(0o755))?;
    Ok(())
}

#[cfg(not(unix))]
fn make_executable(_path: &Path) -> Result<()> {
    Ok(())
}
