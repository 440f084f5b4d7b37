//! Template system definitions.
//!
//! A template system is a named bundle of environment files (Dockerfiles,
//! compose files) loaded from one directory of a template root. The set of
//! versions a system supports is derived from its file names.

use regex::Regex;
use serde::Serialize;
use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::fmt;
use std::sync::LazyLock;

/// Version token embedded in a file name: `Dockerfile.22.04`,
/// `docker-compose.22.04.yml`.
static VERSION_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\.(\d+\.\d+)(?:\.|$)").expect("VERSION_REGEX must compile")
});

/// Marker used as the default version of a system that only ships a bare
/// `Dockerfile`.
pub const DEFAULT_MARKER: &str = "default";

/// Where a template system was loaded from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SystemOrigin {
    /// Shipped with the tool.
    Builtin,
    /// Loaded from the user's template directory.
    Custom,
}

impl fmt::Display for SystemOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SystemOrigin::Builtin => write!(f, "built-in"),
            SystemOrigin::Custom => write!(f, "custom"),
        }
    }
}

/// A named, versioned bundle of environment templates.
#[derive(Debug, Clone)]
pub struct TemplateSystem {
    name: String,
    origin: SystemOrigin,
    files: BTreeMap<String, Vec<u8>>,
    versions: Vec<String>,
    default_version: Option<String>,
}

impl TemplateSystem {
    /// Build a system from its flat file listing.
    ///
    /// Versions and the default version are derived here and never
    /// recomputed; the system is immutable afterwards.
    pub fn from_files<I>(name: impl Into<String>, origin: SystemOrigin, files: I) -> Self
    where
        I: IntoIterator<Item = (String, Vec<u8>)>,
    {
        let files: BTreeMap<String, Vec<u8>> = files.into_iter().collect();
        let versions = derive_versions(files.keys().map(String::as_str));
        let default_version = versions.last().cloned().or_else(|| {
            files
                .contains_key("Dockerfile")
                .then(|| DEFAULT_MARKER.to_string())
        });

        Self {
            name: name.into(),
            origin,
            files,
            versions,
            default_version,
        }
    }

    /// System name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Where the system was loaded from.
    pub fn origin(&self) -> SystemOrigin {
        self.origin
    }

    /// All files, keyed by file name.
    pub fn files(&self) -> &BTreeMap<String, Vec<u8>> {
        &self.files
    }

    /// Content of a single file.
    pub fn file(&self, name: &str) -> Option<&[u8]> {
        self.files.get(name).map(Vec::as_slice)
    }

    /// Versions found in the file names, in ascending numeric order.
    pub fn versions(&self) -> &[String] {
        &self.versions
    }

    /// The greatest version, or `"default"` for a bare-`Dockerfile` system.
    pub fn default_version(&self) -> Option<&str> {
        self.default_version.as_deref()
    }

    /// The compose file for a version.
    pub fn compose_file(&self, version: &str) -> Option<&[u8]> {
        self.file(&format!("docker-compose.{}.yml", version))
    }

    /// The Dockerfile for a version, or the bare `Dockerfile` when `None`.
    pub fn dockerfile(&self, version: Option<&str>) -> Option<&[u8]> {
        match version {
            Some(v) => self.file(&format!("Dockerfile.{}", v)),
            None => self.file("Dockerfile"),
        }
    }
}

/// Extract the version token from a file name, if any.
pub fn version_of(file_name: &str) -> Option<&str> {
    VERSION_REGEX
        .captures(file_name)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str())
}

/// Collect the distinct versions in a set of file names, sorted ascending.
pub fn derive_versions<'a>(file_names: impl IntoIterator<Item = &'a str>) -> Vec<String> {
    let mut versions: Vec<String> = Vec::new();
    for name in file_names {
        if let Some(version) = version_of(name) {
            if !versions.iter().any(|v| v == version) {
                versions.push(version.to_string());
            }
        }
    }
    versions.sort_by(|a, b| compare_versions(a, b));
    versions
}

/// Order `major.minor` tokens numerically, falling back to string order.
pub fn compare_versions(a: &str, b: &str) -> Ordering {
    fn parts(v: &str) -> Option<(u64, u64)> {
        let (major, minor) = v.split_once('.')?;
        Some((major.parse().ok()?, minor.parse().ok()?))
    }

    match (parts(a), parts(b)) {
        (Some(x), Some(y)) => x.cmp(&y).then_with(|| a.cmp(b)),
        _ => a.cmp(b),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn files(names: &[&str]) -> Vec<(String, Vec<u8>)> {
        names
            .iter()
            .map(|n| (n.to_string(), format!("# {}\n", n).into_bytes()))
            .collect()
    }

    #[test]
    fn version_of_compose_and_dockerfile() {
        assert_eq!(version_of("docker-compose.22.04.yml"), Some("22.04"));
        assert_eq!(version_of("Dockerfile.20.04"), Some("20.04"));
        assert_eq!(version_of("Dockerfile"), None);
        assert_eq!(version_of("docker-compose.custom.yml"), None);
        assert_eq!(version_of("README.md"), None);
    }

    #[test]
    fn versions_are_derived_regardless_of_order() {
        let forward = TemplateSystem::from_files(
            "ubuntu",
            SystemOrigin::Builtin,
            files(&[
                "Dockerfile.20.04",
                "Dockerfile.22.04",
                "docker-compose.20.04.yml",
                "docker-compose.22.04.yml",
            ]),
        );
        let reversed = TemplateSystem::from_files(
            "ubuntu",
            SystemOrigin::Builtin,
            files(&[
                "docker-compose.22.04.yml",
                "docker-compose.20.04.yml",
                "Dockerfile.22.04",
                "Dockerfile.20.04",
            ]),
        );

        assert_eq!(forward.versions(), &["20.04", "22.04"]);
        assert_eq!(reversed.versions(), forward.versions());
    }

    #[test]
    fn default_version_is_greatest() {
        let system = TemplateSystem::from_files(
            "ubuntu",
            SystemOrigin::Builtin,
            files(&["Dockerfile", "Dockerfile.9.10", "Dockerfile.24.04", "Dockerfile.20.04"]),
        );
        assert_eq!(system.versions(), &["9.10", "20.04", "24.04"]);
        assert_eq!(system.default_version(), Some("24.04"));
    }

    #[test]
    fn bare_dockerfile_defaults_to_marker() {
        let system =
            TemplateSystem::from_files("plain", SystemOrigin::Custom, files(&["Dockerfile"]));
        assert!(system.versions().is_empty());
        assert_eq!(system.default_version(), Some(DEFAULT_MARKER));
    }

    #[test]
    fn no_dockerfile_no_default() {
        let system =
            TemplateSystem::from_files("empty", SystemOrigin::Custom, files(&["notes.txt"]));
        assert_eq!(system.default_version(), None);
    }

    #[test]
    fn file_lookups() {
        let system = TemplateSystem::from_files(
            "ubuntu",
            SystemOrigin::Builtin,
            files(&["Dockerfile", "Dockerfile.22.04", "docker-compose.22.04.yml"]),
        );
        assert!(system.compose_file("22.04").is_some());
        assert!(system.compose_file("20.04").is_none());
        assert!(system.dockerfile(Some("22.04")).is_some());
        assert_eq!(system.dockerfile(None), Some("# Dockerfile\n".as_bytes()));
    }

    #[test]
    fn compare_versions_is_numeric() {
        assert_eq!(compare_versions("9.10", "20.04"), Ordering::Less);
        assert_eq!(compare_versions("22.04", "22.10"), Ordering::Less);
        assert_eq!(compare_versions("24.04", "24.04"), Ordering::Equal);
    }

    #[test]
    fn origin_display() {
        assert_eq!(SystemOrigin::Builtin.to_string(), "built-in");
        assert_eq!(SystemOrigin::Custom.to_string(), "custom");
    }
}
