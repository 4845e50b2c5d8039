// SPDX-FileCopyrightText: 2026 Siphon Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Installed-package manifest parsing from `package.toml` files.
//!
//! Every installed plugin package carries a manifest declaring its name,
//! version, library roots, and the module files it provides. The
//! [`DirPackageIndex`](crate::index::DirPackageIndex) reads these to answer
//! "which installed packages provide this module?".

use std::path::{Path, PathBuf};

use serde::Deserialize;
use siphon_core::SiphonError;

/// Parsed manifest of one installed package release.
#[derive(Debug, Clone)]
pub struct PackageManifest {
    /// Package name (e.g. `"siphon-input-csv"`).
    pub name: String,
    /// Declared package version.
    pub version: semver::Version,
    /// Library-root directories, relative to the package directory.
    pub lib_roots: Vec<PathBuf>,
    /// Module files the package provides, relative to its library roots.
    pub files: Vec<String>,
}

impl PackageManifest {
    /// Whether this package's file manifest contains a file matching the
    /// given module name. The match ignores the file extension, so
    /// `"siphon/input/csv.plugin"` provides the module `"siphon/input/csv"`.
    pub fn provides_module(&self, module: &str) -> bool {
        let wanted = Path::new(module);
        self.files
            .iter()
            .any(|f| Path::new(f).with_extension("") == wanted)
    }
}

/// Intermediate TOML deserialization struct for `package.toml`.
#[derive(Debug, Deserialize)]
struct PackageManifestFile {
    package: PackageSection,
}

/// The `[package]` section of a `package.toml` file.
#[derive(Debug, Deserialize)]
struct PackageSection {
    name: String,
    version: String,
    #[serde(default = "default_lib_roots")]
    lib_roots: Vec<PathBuf>,
    #[serde(default)]
    files: Vec<String>,
}

fn default_lib_roots() -> Vec<PathBuf> {
    vec![PathBuf::from("lib")]
}

/// Parse a package manifest from TOML content.
///
/// Validates that the name is non-empty and the version parses as semver.
pub fn parse_package_manifest(toml_content: &str) -> Result<PackageManifest, SiphonError> {
    let file: PackageManifestFile = toml::from_str(toml_content)
        .map_err(|e| SiphonError::Config(format!("invalid package manifest: {e}")))?;

    let section = file.package;

    if section.name.is_empty() {
        return Err(SiphonError::Config(
            "package manifest: name must not be empty".to_string(),
        ));
    }

    let version = semver::Version::parse(&section.version).map_err(|e| {
        SiphonError::Config(format!(
            "package manifest: invalid version '{}': {e}",
            section.version
        ))
    })?;

    Ok(PackageManifest {
        name: section.name,
        version,
        lib_roots: section.lib_roots,
        files: section.files,
    })
}
