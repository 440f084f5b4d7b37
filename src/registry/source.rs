//! Template roots.
//!
//! A template root is anything that can list template systems and the
//! files inside each one. The registry only sees this listing capability,
//! so the same loading code serves the embedded built-ins, the user's
//! template directory and in-memory fixtures.

use crate::registry::system::SystemOrigin;
use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// A flat listing of one system's files: `(file name, content)`.
pub type SystemFiles = Vec<(String, Vec<u8>)>;

/// A location that holds one subdirectory per template system.
pub trait TemplateRoot {
    /// Origin assigned to every system loaded from this root.
    fn origin(&self) -> SystemOrigin;

    /// Human-readable location, used in log messages.
    fn describe(&self) -> String;

    /// Names of the systems in this root, in a stable order.
    ///
    /// A root that does not exist has no systems; that is not an error.
    fn system_names(&self) -> io::Result<Vec<String>>;

    /// The non-directory entries of one system (not recursive).
    fn read_system(&self, name: &str) -> io::Result<SystemFiles>;
}

/// A template root on the local filesystem.
#[derive(Debug, Clone)]
pub struct DirRoot {
    path: PathBuf,
    origin: SystemOrigin,
}

impl DirRoot {
    /// Create a root for a directory.
    pub fn new(path: impl Into<PathBuf>, origin: SystemOrigin) -> Self {
        Self {
            path: path.into(),
            origin,
        }
    }

    /// The directory this root reads from.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl TemplateRoot for DirRoot {
    fn origin(&self) -> SystemOrigin {
        self.origin
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    fn system_names(&self) -> io::Result<Vec<String>> {
        if !self.path.is_dir() {
            return Ok(Vec::new());
        }

        let mut names = Vec::new();
        for entry in fs::read_dir(&self.path)? {
            let entry = entry?;
            if entry.path().is_dir() {
                if let Some(name) = entry.file_name().to_str() {
                    names.push(name.to_string());
                }
            }
        }
        names.sort();
        Ok(names)
    }

    fn read_system(&self, name: &str) -> io::Result<SystemFiles> {
        let dir = self.path.join(name);
        let mut files = Vec::new();

        for entry in fs::read_dir(&dir)? {
            let entry = entry?;
            let path = entry.path();
            if path.is_dir() {
                continue;
            }
            let Some(file_name) = entry.file_name().to_str().map(str::to_string) else {
                tracing::debug!("Skipping non UTF-8 file name in {}", dir.display());
                continue;
            };
            files.push((file_name, fs::read(&path)?));
        }

        Ok(files)
    }
}

/// An in-memory template root.
///
/// # Example
///
/// ```
/// use docker_env_init::registry::{MemoryRoot, Registry, SystemOrigin, TemplateRoot};
///
/// let mut root = MemoryRoot::new(SystemOrigin::Custom);
/// root.add_file("alpine", "Dockerfile.3.19", b"FROM alpine:3.19\n");
///
/// let registry = Registry::load(&[&root as &dyn TemplateRoot]);
/// assert_eq!(registry.versions_for("alpine"), vec!["3.19".to_string()]);
/// ```
#[derive(Debug, Clone)]
pub struct MemoryRoot {
    origin: SystemOrigin,
    systems: BTreeMap<String, SystemFiles>,
}

impl MemoryRoot {
    /// Create an empty root.
    pub fn new(origin: SystemOrigin) -> Self {
        Self {
            origin,
            systems: BTreeMap::new(),
        }
    }

    /// Add a file to a system, creating the system if needed.
    pub fn add_file(&mut self, system: &str, file_name: &str, content: &[u8]) {
        self.systems
            .entry(system.to_string())
            .or_default()
            .push((file_name.to_string(), content.to_vec()));
    }
}

impl TemplateRoot for MemoryRoot {
    fn origin(&self) -> SystemOrigin {
        self.origin
    }

    fn describe(&self) -> String {
        "<memory>".to_string()
    }

    fn system_names(&self) -> io::Result<Vec<String>> {
        Ok(self.systems.keys().cloned().collect())
    }

    fn read_system(&self, name: &str) -> io::Result<SystemFiles> {
        self.systems.get(name).cloned().ok_or_else(|| {
            io::Error::new(io::ErrorKind::NotFound, format!("no system '{}'", name))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_dir_has_no_systems() {
        let temp = TempDir::new().unwrap();
        let root = DirRoot::new(temp.path().join("missing"), SystemOrigin::Custom);
        assert!(root.system_names().unwrap().is_empty());
    }

    #[test]
    fn dir_root_lists_only_directories() {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join("ubuntu")).unwrap();
        fs::create_dir_all(temp.path().join("debian")).unwrap();
        fs::write(temp.path().join("README.md"), "not a system").unwrap();

        let root = DirRoot::new(temp.path(), SystemOrigin::Custom);
        assert_eq!(root.system_names().unwrap(), vec!["debian", "ubuntu"]);
    }

    #[test]
    fn dir_root_reads_flat_files() {
        let temp = TempDir::new().unwrap();
        let system = temp.path().join("ubuntu");
        fs::create_dir_all(system.join("nested")).unwrap();
        fs::write(system.join("Dockerfile"), "FROM ubuntu\n").unwrap();
        fs::write(system.join("nested").join("ignored"), "x").unwrap();

        let root = DirRoot::new(temp.path(), SystemOrigin::Custom);
        let files = root.read_system("ubuntu").unwrap();

        assert_eq!(files.len(), 1);
        assert_eq!(files[0].0, "Dockerfile");
        assert_eq!(files[0].1, b"FROM ubuntu\n");
    }

    #[test]
    fn memory_root_round_trips_files() {
        let mut root = MemoryRoot::new(SystemOrigin::Builtin);
        root.add_file("ubuntu", "Dockerfile", b"FROM ubuntu");

        assert_eq!(root.system_names().unwrap(), vec!["ubuntu"]);
        assert_eq!(root.read_system("ubuntu").unwrap().len(), 1);
        assert!(root.read_system("missing").is_err());
    }
}
