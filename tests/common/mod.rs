//! Common test utilities for unbundle integration tests

use include_dir::{Dir, include_dir};
use unbundle::PackageRegistry;

/// Package with a `resources` root holding the example files used across
/// these tests
pub static EXAMPLE_PACKAGE: Dir =
    include_dir!("$CARGO_MANIFEST_DIR/tests/fixtures/example_package");

/// Package whose resources live under an unconventional `media` directory
pub static BAD_PACKAGE: Dir = include_dir!("$CARGO_MANIFEST_DIR/tests/fixtures/bad_package");

/// Package rooted at `data`
pub static DATA_PACKAGE: Dir = include_dir!("$CARGO_MANIFEST_DIR/tests/fixtures/data_package");

/// Package rooted at `assets`
pub static ASSETS_PACKAGE: Dir = include_dir!("$CARGO_MANIFEST_DIR/tests/fixtures/assets_package");

/// Registry with every fixture package registered
#[must_use]
pub fn fixture_registry() -> PackageRegistry {
    let mut registry = PackageRegistry::new();
    registry.register("tests.example_package", &EXAMPLE_PACKAGE);
    registry.register("tests.bad_package", &BAD_PACKAGE);
    registry.register("tests.data_package", &DATA_PACKAGE);
    registry.register("tests.assets_package", &ASSETS_PACKAGE);
    registry
}
