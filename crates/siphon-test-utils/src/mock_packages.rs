// SPDX-FileCopyrightText: 2026 Siphon Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! In-memory [`PackageIndex`] double with query counting.

use std::sync::Mutex;

use siphon_core::traits::{PackageIndex, PackageSpec};
use siphon_core::SiphonError;

/// Package index backed by a scripted (module → spec) list.
#[derive(Default)]
pub struct MockPackageIndex {
    providers: Mutex<Vec<(String, PackageSpec)>>,
    queries: Mutex<usize>,
}

impl MockPackageIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare that `spec` provides `module`.
    pub fn add_provider(&self, module: &str, spec: PackageSpec) {
        self.providers
            .lock()
            .unwrap()
            .push((module.to_string(), spec));
    }

    /// How many times `find_providers` has been called.
    pub fn queries(&self) -> usize {
        *self.queries.lock().unwrap()
    }
}

impl PackageIndex for MockPackageIndex {
    fn find_providers(&self, module: &str) -> Result<Vec<PackageSpec>, SiphonError> {
        *self.queries.lock().unwrap() += 1;
        Ok(self
            .providers
            .lock()
            .unwrap()
            .iter()
            .filter(|(m, _)| m.as_str() == module)
            .map(|(_, spec)| spec.clone())
            .collect())
    }
}
