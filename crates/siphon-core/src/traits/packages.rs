// SPDX-FileCopyrightText: 2026 Siphon Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The installed-package metadata seam.

use std::path::PathBuf;

use crate::error::SiphonError;

/// Metadata for one installed package release, as reported by a
/// [`PackageIndex`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageSpec {
    /// Package name (e.g. `"siphon-input-csv"`).
    pub name: String,
    /// Declared package version. Ordered comparison implements the
    /// "prefer newest" selection policy.
    pub version: semver::Version,
    /// Absolute library-root directories declared by the package manifest.
    /// Module files live under these roots.
    pub lib_roots: Vec<PathBuf>,
}

/// Read-only query capability over the host's installed-package metadata.
///
/// Any concrete package manager can implement this; the registry only ever
/// asks one question of it.
pub trait PackageIndex: Send + Sync {
    /// All installed packages whose file manifest contains a file matching
    /// the given module name (extension-insensitive). Order is unspecified;
    /// the registry sorts by version itself.
    fn find_providers(&self, module: &str) -> Result<Vec<PackageSpec>, SiphonError>;
}
