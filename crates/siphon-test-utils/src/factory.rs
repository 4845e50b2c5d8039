// SPDX-FileCopyrightText: 2026 Siphon Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! No-op plugin factory for tests.

use siphon_core::traits::{Plugin, PluginFactory};
use siphon_core::types::PluginCategory;
use siphon_core::SiphonError;

/// A plugin that does nothing.
pub struct NoopPlugin {
    category: PluginCategory,
}

impl Plugin for NoopPlugin {
    fn name(&self) -> &str {
        "noop"
    }

    fn version(&self) -> semver::Version {
        semver::Version::new(0, 1, 0)
    }

    fn category(&self) -> PluginCategory {
        self.category
    }
}

/// Factory producing [`NoopPlugin`] instances. Tests distinguish factory
/// instances by `Arc::ptr_eq`, so no identity field is needed.
pub struct NoopFactory {
    category: PluginCategory,
}

impl NoopFactory {
    pub fn new(category: PluginCategory) -> Self {
        Self { category }
    }
}

impl PluginFactory for NoopFactory {
    fn category(&self) -> PluginCategory {
        self.category
    }

    fn create(&self, _config: &serde_json::Value) -> Result<Box<dyn Plugin>, SiphonError> {
        Ok(Box::new(NoopPlugin {
            category: self.category,
        }))
    }
}
