//! File and directory extraction
//!
//! This module copies embedded resources out to the filesystem:
//! - Single-file extraction (`extract_file`)
//! - Recursive directory extraction (`extract_dir`)
//!
//! Both resolve the package's resource root first, then enforce the
//! destination overwrite policy before any bytes are written. Every failure
//! aborts the remaining steps immediately; nothing is retried.

use std::fs;
use std::path::Path;

use include_dir::{Dir, DirEntry};

use crate::error::{Result, UnbundleError};
use crate::locator::resource_root;
use crate::registry::PackageRegistry;

fn file_write_error(path: &Path, e: std::io::Error) -> UnbundleError {
    UnbundleError::FileWriteFailed {
        path: path.display().to_string(),
        reason: e.to_string(),
    }
}

/// Ensure parent directory exists for a path
fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| file_write_error(parent, e))?;
    }
    Ok(())
}

/// Extract a single resource file to `output_path`
///
/// `resource_path` is resolved relative to the package's resource root and
/// must name a file; a directory at that path does not satisfy a file
/// request. Missing parent directories of `output_path` are created. An
/// existing destination is only replaced when `overwrite` is set; otherwise
/// the call fails before anything is written.
pub fn extract_file(
    registry: &PackageRegistry,
    package: &str,
    resource_path: &str,
    output_path: &Path,
    overwrite: bool,
) -> Result<()> {
    let tree = registry.resolve(package)?;
    let root = resource_root(package, tree)?;

    // Embedded entry paths are relative to the included tree, not the
    // resource root, so lookups join the root's own path first.
    let embedded = root.path().join(resource_path);
    let Some(file) = root.get_file(&embedded) else {
        return Err(UnbundleError::ResourceNotFound {
            path: resource_path.to_string(),
        });
    };

    tracing::debug!(
        "extracting file '{resource_path}' from '{package}' to '{}'",
        output_path.display()
    );

    ensure_parent_dir(output_path)?;

    if !overwrite && output_path.exists() {
        return Err(UnbundleError::AlreadyExists {
            path: output_path.display().to_string(),
        });
    }

    fs::write(output_path, file.contents()).map_err(|e| file_write_error(output_path, e))
}

/// Extract an embedded directory subtree to `output_dir`
///
/// `resource_path` is resolved relative to the package's resource root and
/// must name a directory; a file at that path does not satisfy a directory
/// request. An existing destination is replaced wholesale when `overwrite`
/// is set: it is deleted and recreated, never merged. On success the
/// destination mirrors the source subtree exactly — same relative paths,
/// same file bytes.
pub fn extract_dir(
    registry: &PackageRegistry,
    package: &str,
    resource_path: &str,
    output_dir: &Path,
    overwrite: bool,
) -> Result<()> {
    let tree = registry.resolve(package)?;
    let root = resource_root(package, tree)?;

    let embedded = root.path().join(resource_path);
    let Some(source) = root.get_dir(&embedded) else {
        return Err(UnbundleError::ResourceNotFound {
            path: resource_path.to_string(),
        });
    };

    tracing::debug!(
        "extracting directory '{resource_path}' from '{package}' to '{}'",
        output_dir.display()
    );

    if output_dir.exists() {
        if !overwrite {
            return Err(UnbundleError::AlreadyExists {
                path: output_dir.display().to_string(),
            });
        }
        fs::remove_dir_all(output_dir).map_err(|e| file_write_error(output_dir, e))?;
    }

    fs::create_dir_all(output_dir).map_err(|e| file_write_error(output_dir, e))?;

    copy_entries(source, source.path(), output_dir)
}

/// Mirror a directory's entries under `output_dir`, depth-first
///
/// Directories are created before their contents are visited; sibling order
/// follows the embedded tree's natural enumeration.
fn copy_entries(dir: &Dir<'_>, source_root: &Path, output_dir: &Path) -> Result<()> {
    for entry in dir.entries() {
        let relative = entry.path().strip_prefix(source_root).unwrap_or(entry.path());
        let target = output_dir.join(relative);

        match entry {
            DirEntry::Dir(subdir) => {
                tracing::trace!("creating directory '{}'", target.display());
                fs::create_dir_all(&target).map_err(|e| file_write_error(&target, e))?;
                copy_entries(subdir, source_root, output_dir)?;
            }
            DirEntry::File(file) => {
                tracing::trace!("writing file '{}'", target.display());
                fs::write(&target, file.contents()).map_err(|e| file_write_error(&target, e))?;
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use include_dir::include_dir;
    use tempfile::TempDir;

    use super::*;

    static EXAMPLE_PACKAGE: Dir =
        include_dir!("$CARGO_MANIFEST_DIR/tests/fixtures/example_package");

    fn example_registry() -> PackageRegistry {
        let mut registry = PackageRegistry::new();
        registry.register("tests.example_package", &EXAMPLE_PACKAGE);
        registry
    }

    #[test]
    fn test_ensure_parent_dir() {
        let temp = TempDir::new().unwrap();
        let file_path = temp.path().join("subdir/nested/file.txt");

        let result = ensure_parent_dir(&file_path);
        assert!(result.is_ok());
        assert!(file_path.parent().unwrap().exists());
    }

    #[test]
    fn test_extract_file_rejects_directory_path() {
        let registry = example_registry();
        let temp = TempDir::new().unwrap();
        let output = temp.path().join("out");

        let result = extract_file(
            &registry,
            "tests.example_package",
            "dir_example",
            &output,
            false,
        );
        assert!(matches!(
            result.unwrap_err(),
            UnbundleError::ResourceNotFound { .. }
        ));
        assert!(!output.exists());
    }

    #[test]
    fn test_extract_dir_rejects_file_path() {
        let registry = example_registry();
        let temp = TempDir::new().unwrap();
        let output = temp.path().join("out");

        let result = extract_dir(
            &registry,
            "tests.example_package",
            "file_example.txt",
            &output,
            false,
        );
        assert!(matches!(
            result.unwrap_err(),
            UnbundleError::ResourceNotFound { .. }
        ));
        assert!(!output.exists());
    }
}
