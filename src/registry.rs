//! Package registry mapping identifiers to embedded resource trees
//!
//! A compiled binary has no runtime module lookup, so the host application
//! registers each package's embedded tree once under a dotted identifier
//! (e.g. `"myapp.defaults"`) and every extraction call resolves through the
//! registry.

use std::collections::HashMap;

use include_dir::Dir;

use crate::error::{Result, UnbundleError};

/// Maps dotted package identifiers to their embedded resource trees
#[derive(Debug, Default)]
pub struct PackageRegistry {
    packages: HashMap<String, &'static Dir<'static>>,
}

impl PackageRegistry {
    /// Create an empty registry
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an embedded tree under a package identifier
    ///
    /// Registering the same identifier again replaces the earlier tree.
    pub fn register(&mut self, package: impl Into<String>, tree: &'static Dir<'static>) {
        self.packages.insert(package.into(), tree);
    }

    /// Look up the embedded tree registered for a package identifier
    pub fn resolve(&self, package: &str) -> Result<&'static Dir<'static>> {
        self.packages
            .get(package)
            .copied()
            .ok_or_else(|| UnbundleError::PackageNotFound {
                package: package.to_string(),
            })
    }
}
