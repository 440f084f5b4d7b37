//! Built-in templates embedded at compile time.

use crate::registry::source::{SystemFiles, TemplateRoot};
use crate::registry::system::SystemOrigin;
use include_dir::{include_dir, Dir};
use std::io;

/// Embedded templates directory.
static TEMPLATES_DIR: Dir<'_> = include_dir!("$CARGO_MANIFEST_DIR/templates");

/// The template systems shipped inside the binary.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinRoot;

impl BuiltinRoot {
    /// Create the built-in root.
    pub fn new() -> Self {
        Self
    }
}

impl TemplateRoot for BuiltinRoot {
    fn origin(&self) -> SystemOrigin {
        SystemOrigin::Builtin
    }

    fn describe(&self) -> String {
        "<built-in>".to_string()
    }

    fn system_names(&self) -> io::Result<Vec<String>> {
        let mut names: Vec<String> = TEMPLATES_DIR
            .dirs()
            .filter_map(|d| d.path().file_name())
            .filter_map(|n| n.to_str())
            .map(str::to_string)
            .collect();
        names.sort();
        Ok(names)
    }

    fn read_system(&self, name: &str) -> io::Result<SystemFiles> {
        let dir = TEMPLATES_DIR.get_dir(name).ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::NotFound,
                format!("no built-in system '{}'", name),
            )
        })?;

        Ok(dir
            .files()
            .filter_map(|file| {
                let file_name = file.path().file_name()?.to_str()?;
                Some((file_name.to_string(), file.contents().to_vec()))
            })
            .collect())
    }
}

/// Check if a system ships with the tool.
pub fn has_system(name: &str) -> bool {
    TEMPLATES_DIR.get_dir(name).is_some()
}
