//! Error types and handling for Unbundle
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for extraction operations
#[derive(Error, Diagnostic, Debug)]
pub enum UnbundleError {
    // Lookup errors
    #[error("Package '{package}' is not registered")]
    #[diagnostic(
        code(unbundle::package::not_found),
        help("Register the package's embedded tree with PackageRegistry::register before extracting")
    )]
    PackageNotFound { package: String },

    #[error(
        "No resource root found in package '{package}': expected a directory named one of: resources, data, assets"
    )]
    #[diagnostic(
        code(unbundle::root::not_found),
        help("Bundle the package's files under a top-level directory named 'resources', 'data' or 'assets'")
    )]
    RootNotFound { package: String },

    #[error("No resource found matching '{path}'")]
    #[diagnostic(
        code(unbundle::resource::not_found),
        help("Paths are resolved relative to the package's resource root and must name the requested kind (file or directory)")
    )]
    ResourceNotFound { path: String },

    // Destination errors
    #[error("'{path}' already exists")]
    #[diagnostic(
        code(unbundle::dest::already_exists),
        help("Pass overwrite = true to replace the existing destination")
    )]
    AlreadyExists { path: String },

    // File system errors
    #[error("Failed to write '{path}': {reason}")]
    #[diagnostic(code(unbundle::fs::write_failed))]
    FileWriteFailed { path: String, reason: String },

    #[error("IO error: {message}")]
    #[diagnostic(code(unbundle::fs::io_error))]
    IoError { message: String },
}

impl From<std::io::Error> for UnbundleError {
    fn from(err: std::io::Error) -> Self {
        UnbundleError::IoError {
            message: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, UnbundleError>;
