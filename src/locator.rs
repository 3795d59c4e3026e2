//! Resource root discovery
//!
//! A package's extractable resources live under a single conventionally
//! named top-level directory. Candidate names are probed in a fixed order
//! and the first directory found wins; the order is a policy decision, not
//! configurable.

use include_dir::Dir;

use crate::error::{Result, UnbundleError};

/// Conventional resource-root directory names, in probe order
pub const RESOURCE_ROOT_NAMES: &[&str] = &["resources", "data", "assets"];

/// Locate the resource root of a package's embedded tree
///
/// Returns the first candidate from [`RESOURCE_ROOT_NAMES`] that exists as a
/// directory at the top level of `tree`. Fails with
/// [`UnbundleError::RootNotFound`] when none does.
pub fn resource_root<'a>(package: &str, tree: &'a Dir<'a>) -> Result<&'a Dir<'a>> {
    for name in RESOURCE_ROOT_NAMES {
        if let Some(root) = tree.get_dir(name) {
            tracing::debug!("resolved resource root '{name}' for package '{package}'");
            return Ok(root);
        }
    }

    Err(UnbundleError::RootNotFound {
        package: package.to_string(),
    })
}
