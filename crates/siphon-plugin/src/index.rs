// SPDX-FileCopyrightText: 2026 Siphon Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Directory-backed installed-package index.
//!
//! [`DirPackageIndex`] implements [`PackageIndex`] over an on-disk layout of
//! one subdirectory per installed package release, each containing a
//! `package.toml` manifest:
//!
//! ```text
//! <root>/siphon-input-csv-1.4.2/package.toml
//! <root>/siphon-input-csv-1.4.2/lib/siphon/input/csv.plugin
//! ```

use std::fs;
use std::path::PathBuf;

use siphon_core::traits::{PackageIndex, PackageSpec};
use siphon_core::SiphonError;

use crate::manifest::parse_package_manifest;

/// Name of the manifest file inside each package directory.
pub const PACKAGE_MANIFEST_FILE: &str = "package.toml";

/// Read-only package index over a directory of installed packages.
pub struct DirPackageIndex {
    root: PathBuf,
}

impl DirPackageIndex {
    /// Create an index rooted at `root`. A missing root is an empty index,
    /// not an error.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The directory this index reads from.
    pub fn root(&self) -> &PathBuf {
        &self.root
    }
}

impl PackageIndex for DirPackageIndex {
    fn find_providers(&self, module: &str) -> Result<Vec<PackageSpec>, SiphonError> {
        let mut providers = Vec::new();
        if !self.root.is_dir() {
            return Ok(providers);
        }

        let entries = fs::read_dir(&self.root).map_err(|e| SiphonError::PackageIndex {
            message: format!("cannot read package root {}", self.root.display()),
            source: Some(Box::new(e)),
        })?;

        for entry in entries {
            let entry = entry.map_err(|e| SiphonError::PackageIndex {
                message: format!("cannot read package root {}", self.root.display()),
                source: Some(Box::new(e)),
            })?;
            let dir = entry.path();
            if !dir.is_dir() {
                continue;
            }
            let manifest_path = dir.join(PACKAGE_MANIFEST_FILE);
            if !manifest_path.is_file() {
                continue;
            }

            let content =
                fs::read_to_string(&manifest_path).map_err(|e| SiphonError::PackageIndex {
                    message: format!("cannot read {}", manifest_path.display()),
                    source: Some(Box::new(e)),
                })?;

            // A broken manifest disables that one package, not the whole
            // index.
            let manifest = match parse_package_manifest(&content) {
                Ok(manifest) => manifest,
                Err(e) => {
                    tracing::warn!(
                        path = %manifest_path.display(),
                        error = %e,
                        "skipping package with unparseable manifest"
                    );
                    continue;
                }
            };

            if !manifest.provides_module(module) {
                continue;
            }

            providers.push(PackageSpec {
                name: manifest.name,
                version: manifest.version,
                lib_roots: manifest.lib_roots.iter().map(|r| dir.join(r)).collect(),
            });
        }

        Ok(providers)
    }
}
