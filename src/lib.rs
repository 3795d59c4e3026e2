//! Unbundle - embedded resource extraction
//!
//! Locates files and directories bundled inside an application package at
//! compile time and copies them out to caller-chosen filesystem locations.
//! Typical use is materializing default configuration files, templates, or
//! example assets shipped inside a distributable.
//!
//! Packages embed their resources with [`include_dir!`] and register the
//! resulting tree in a [`PackageRegistry`] under a dotted identifier. A
//! package's extractable resources must live under a single top-level
//! directory named `resources`, `data`, or `assets` (see
//! [`RESOURCE_ROOT_NAMES`]).
//!
//! ```ignore
//! use std::path::Path;
//!
//! use unbundle::{Dir, PackageRegistry, extract_file, include_dir};
//!
//! static DEFAULTS: Dir = include_dir!("$CARGO_MANIFEST_DIR/resources");
//!
//! let mut registry = PackageRegistry::new();
//! registry.register("myapp.defaults", &DEFAULTS);
//!
//! extract_file(
//!     &registry,
//!     "myapp.defaults",
//!     "config/settings.toml",
//!     Path::new("/etc/myapp/settings.toml"),
//!     false,
//! )?;
//! ```

pub mod error;
pub mod extractor;
pub mod locator;
pub mod registry;

pub use error::{Result, UnbundleError};
pub use extractor::{extract_dir, extract_file};
pub use locator::{RESOURCE_ROOT_NAMES, resource_root};
pub use registry::PackageRegistry;

// Registered trees are `include_dir` values; re-export the handle type and
// the embedding macro so callers do not need a direct dependency.
pub use include_dir::{Dir, include_dir};
