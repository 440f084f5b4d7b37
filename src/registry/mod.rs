//! Template registry.
//!
//! This module loads named template systems from multiple roots:
//! - Built-in templates (embedded in binary)
//! - Custom templates (~/.docker-env-init/templates/)
//!
//! # Resolution Order
//!
//! Roots are loaded in order and the last one wins, so a custom system
//! fully replaces a built-in system of the same name.
//!
//! # Example
//!
//! ```
//! use docker_env_init::registry::{BuiltinRoot, Registry, TemplateRoot};
//!
//! // Load registry with built-in templates only
//! let builtin = BuiltinRoot::new();
//! let registry = Registry::load(&[&builtin as &dyn TemplateRoot]);
//!
//! if let Some(system) = registry.get("ubuntu") {
//!     println!("{} defaults to {:?}", system.name(), system.default_version());
//! }
//! ```

pub mod builtin;
pub mod local;
pub mod resolver;
pub mod source;
pub mod system;

// Re-exports
pub use builtin::BuiltinRoot;
pub use local::{custom_root, write_custom_system, DEFAULT_DOCKERFILE};
pub use resolver::Registry;
pub use source::{DirRoot, MemoryRoot, SystemFiles, TemplateRoot};
pub use system::{compare_versions, version_of, SystemOrigin, TemplateSystem, DEFAULT_MARKER};
