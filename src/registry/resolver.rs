//! Template system catalog built from an ordered list of roots.
//!
//! Roots are loaded in order and later roots replace earlier systems of the
//! same name:
//! 1. Built-in
//! 2. Custom (~/.docker-env-init/templates/)

use crate::error::{DockerEnvError, Result};
use crate::registry::builtin::BuiltinRoot;
use crate::registry::local::{custom_root, write_custom_system};
use crate::registry::source::TemplateRoot;
use crate::registry::system::TemplateSystem;
use std::path::{Path, PathBuf};

/// Catalog of template systems, keyed by name.
///
/// Built once per command and passed by reference; it is never mutated
/// except by [`Registry::create_custom_system`], which adds the system it
/// just wrote to disk.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    systems: Vec<TemplateSystem>,
}

impl Registry {
    /// Load systems from each root in order.
    ///
    /// Missing roots contribute nothing. A root or system that cannot be
    /// read is skipped with a warning so the other roots still load.
    pub fn load(roots: &[&dyn TemplateRoot]) -> Self {
        let mut registry = Self::default();

        for root in roots {
            let names = match root.system_names() {
                Ok(names) => names,
                Err(e) => {
                    tracing::warn!("Skipping template root {}: {}", root.describe(), e);
                    continue;
                }
            };

            for name in names {
                match root.read_system(&name) {
                    Ok(files) => {
                        let system = TemplateSystem::from_files(&name, root.origin(), files);
                        tracing::debug!(
                            "Loaded {} system '{}' from {} ({} versions)",
                            system.origin(),
                            name,
                            root.describe(),
                            system.versions().len()
                        );
                        registry.insert(system);
                    }
                    Err(e) => {
                        tracing::warn!(
                            "Skipping template system '{}' in {}: {}",
                            name,
                            root.describe(),
                            e
                        );
                    }
                }
            }
        }

        registry
    }

    /// Load the built-in systems followed by the user's template directory.
    pub fn with_custom_dir(custom_dir: &Path) -> Self {
        let builtin = BuiltinRoot::new();
        let custom = custom_root(custom_dir);
        Self::load(&[&builtin, &custom])
    }

    /// Insert a system, replacing any system with the same name in place.
    fn insert(&mut self, system: TemplateSystem) {
        match self.systems.iter_mut().find(|s| s.name() == system.name()) {
            Some(existing) => *existing = system,
            None => self.systems.push(system),
        }
    }

    /// Get a system by exact name.
    pub fn get(&self, name: &str) -> Option<&TemplateSystem> {
        self.systems.iter().find(|s| s.name() == name)
    }

    /// Get a system by name, failing with `UnknownSystem`.
    pub fn require(&self, name: &str) -> Result<&TemplateSystem> {
        self.get(name).ok_or_else(|| DockerEnvError::UnknownSystem {
            name: name.to_string(),
        })
    }

    /// All systems in load order.
    pub fn list(&self) -> &[TemplateSystem] {
        &self.systems
    }

    /// All system names in load order.
    pub fn names(&self) -> Vec<&str> {
        self.systems.iter().map(|s| s.name()).collect()
    }

    /// Check if the registry has no systems.
    pub fn is_empty(&self) -> bool {
        self.systems.is_empty()
    }

    /// Versions of a system; empty when the system is unknown.
    pub fn versions_for(&self, name: &str) -> Vec<String> {
        self.get(name)
            .map(|s| s.versions().to_vec())
            .unwrap_or_default()
    }

    /// Content of one file of a system.
    pub fn file(&self, system: &str, file_name: &str) -> Option<&[u8]> {
        self.get(system)?.file(file_name)
    }

    /// Compose file of a system for a version.
    pub fn compose_file(&self, system: &str, version: &str) -> Option<&[u8]> {
        self.get(system)?.compose_file(version)
    }

    /// Dockerfile of a system for a version, or the bare `Dockerfile`.
    pub fn dockerfile(&self, system: &str, version: Option<&str>) -> Option<&[u8]> {
        self.get(system)?.dockerfile(version)
    }

    /// Create a custom system under `custom_dir` and add it to the catalog.
    ///
    /// Starts from a copy of `base` when that system is known, otherwise from
    /// a default Ubuntu Dockerfile.
    pub fn create_custom_system(
        &mut self,
        custom_dir: &Path,
        name: &str,
        base: &str,
    ) -> Result<PathBuf> {
        let system_dir = write_custom_system(custom_dir, name, self.get(base))?;

        let root = custom_root(custom_dir);
        let files = root.read_system(name)?;
        self.insert(TemplateSystem::from_files(name, root.origin(), files));

        Ok(system_dir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::source::{DirRoot, MemoryRoot};
    use crate::registry::system::SystemOrigin;
    use std::fs;
    use tempfile::TempDir;

    fn builtin_fixture() -> MemoryRoot {
        let mut root = MemoryRoot::new(SystemOrigin::Builtin);
        root.add_file("ubuntu", "Dockerfile", b"FROM ubuntu:22.04\n");
        root.add_file("ubuntu", "Dockerfile.22.04", b"FROM ubuntu:22.04\n");
        root.add_file("ubuntu", "docker-compose.22.04.yml", b"services: {}\n");
        root.add_file("debian", "Dockerfile", b"FROM debian\n");
        root
    }

    #[test]
    fn registry_loads_builtins() {
        let temp = TempDir::new().unwrap();
        let registry = Registry::with_custom_dir(&temp.path().join("templates"));

        let ubuntu = registry.get("ubuntu").unwrap();
        assert_eq!(ubuntu.origin(), SystemOrigin::Builtin);
        assert_eq!(ubuntu.versions(), &["20.04", "22.04", "24.04"]);
    }

    #[test]
    fn registry_lookup_is_exact() {
        let root = builtin_fixture();
        let registry = Registry::load(&[&root]);

        assert!(registry.get("ubuntu").is_some());
        assert!(registry.get("Ubuntu").is_none());
        assert!(registry.get("ubunt").is_none());
    }

    #[test]
    fn require_fails_for_unknown() {
        let registry = Registry::default();
        let result = registry.require("nonexistent");
        assert!(matches!(result, Err(DockerEnvError::UnknownSystem { .. })));
    }

    #[test]
    fn versions_for_unknown_is_empty() {
        let root = builtin_fixture();
        let registry = Registry::load(&[&root]);

        assert_eq!(registry.versions_for("ubuntu"), vec!["22.04"]);
        assert!(registry.versions_for("nonexistent").is_empty());
    }

    #[test]
    fn later_root_replaces_whole_system() {
        let builtin = builtin_fixture();
        let mut custom = MemoryRoot::new(SystemOrigin::Custom);
        custom.add_file("ubuntu", "Dockerfile.18.04", b"FROM ubuntu:18.04\n");

        let registry = Registry::load(&[&builtin, &custom]);
        let ubuntu = registry.get("ubuntu").unwrap();

        assert_eq!(ubuntu.origin(), SystemOrigin::Custom);
        assert_eq!(ubuntu.versions(), &["18.04"]);
        assert!(ubuntu.file("Dockerfile").is_none());
        assert!(ubuntu.file("docker-compose.22.04.yml").is_none());
    }

    #[test]
    fn override_keeps_load_position() {
        let builtin = builtin_fixture();
        let mut custom = MemoryRoot::new(SystemOrigin::Custom);
        custom.add_file("debian", "Dockerfile", b"FROM debian:custom\n");
        custom.add_file("zeta", "Dockerfile", b"FROM zeta\n");

        let registry = Registry::load(&[&builtin, &custom]);

        assert_eq!(registry.names(), vec!["debian", "ubuntu", "zeta"]);
    }

    #[test]
    fn missing_roots_give_empty_registry() {
        let temp = TempDir::new().unwrap();
        let a = DirRoot::new(temp.path().join("a"), SystemOrigin::Builtin);
        let b = DirRoot::new(temp.path().join("b"), SystemOrigin::Custom);

        let registry = Registry::load(&[&a, &b]);
        assert!(registry.is_empty());
    }

    #[cfg(unix)]
    #[test]
    fn unreadable_system_is_skipped() {
        use std::os::unix::fs::PermissionsExt;

        let temp = TempDir::new().unwrap();
        let good = temp.path().join("good");
        let bad = temp.path().join("bad");
        fs::create_dir_all(&good).unwrap();
        fs::create_dir_all(&bad).unwrap();
        fs::write(good.join("Dockerfile"), "FROM good\n").unwrap();
        fs::write(bad.join("Dockerfile"), "FROM bad\n").unwrap();
        fs::set_permissions(&bad, fs::Permissions::from_mode(0o000)).unwrap();

        let root = DirRoot::new(temp.path(), SystemOrigin::Custom);
        let registry = Registry::load(&[&root]);

        // Root can read anything; only assert on the readable system there.
        assert!(registry.get("good").is_some());
        if unsafe { libc::geteuid() } != 0 {
            assert!(registry.get("bad").is_none());
        }

        fs::set_permissions(&bad, fs::Permissions::from_mode(0o755)).unwrap();
    }

    #[test]
    fn file_accessors() {
        let root = builtin_fixture();
        let registry = Registry::load(&[&root]);

        assert!(registry.compose_file("ubuntu", "22.04").is_some());
        assert!(registry.compose_file("ubuntu", "24.04").is_none());
        assert!(registry.dockerfile("debian", None).is_some());
        assert!(registry.file("nonexistent", "Dockerfile").is_none());
    }

    #[test]
    fn create_custom_system_copies_base_and_registers() {
        let temp = TempDir::new().unwrap();
        let custom_dir = temp.path().join("templates");
        let root = builtin_fixture();
        let mut registry = Registry::load(&[&root]);

        let dir = registry
            .create_custom_system(&custom_dir, "mine", "ubuntu")
            .unwrap();

        assert!(dir.join("docker-compose.22.04.yml").exists());
        let mine = registry.get("mine").unwrap();
        assert_eq!(mine.origin(), SystemOrigin::Custom);
        assert_eq!(mine.versions(), &["22.04"]);
    }

    #[test]
    fn create_custom_system_without_base_uses_default() {
        let temp = TempDir::new().unwrap();
        let mut registry = Registry::default();

        registry
            .create_custom_system(temp.path(), "arm", "missing-base")
            .unwrap();

        let arm = registry.get("arm").unwrap();
        assert_eq!(arm.versions(), &["22.04"]);
        assert_eq!(arm.default_version(), Some("22.04"));
    }

    #[test]
    fn create_custom_system_twice_fails() {
        let temp = TempDir::new().unwrap();
        let mut registry = Registry::default();

        registry.create_custom_system(temp.path(), "arm", "ubuntu").unwrap();
        let result = registry.create_custom_system(temp.path(), "arm", "ubuntu");

        assert!(matches!(result, Err(DockerEnvError::AlreadyExists { .. })));
    }
}
