// SPDX-FileCopyrightText: 2026 Siphon Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The plugin value traits.
//!
//! A registry entry is a [`PluginFactory`]; a factory produces [`Plugin`]
//! instances from an opaque JSON configuration value at execution time.

use crate::error::SiphonError;
use crate::types::PluginCategory;

/// A concrete plugin instance (one input, output, parser, ...).
pub trait Plugin: Send + Sync {
    /// Human-readable name of this plugin instance.
    fn name(&self) -> &str;

    /// Semantic version of this plugin.
    fn version(&self) -> semver::Version;

    /// The category this plugin belongs to.
    fn category(&self) -> PluginCategory;
}

/// Factory for creating plugin instances from configuration.
///
/// Factories are the values stored in the registry's table. A plugin module
/// registers one factory per type name during its own load, via the
/// [`PluginRegistrar`](crate::traits::PluginRegistrar) handed to the loader.
pub trait PluginFactory: Send + Sync {
    /// The category of plugin this factory produces.
    fn category(&self) -> PluginCategory;

    /// Create a new plugin instance from the given configuration.
    fn create(&self, config: &serde_json::Value) -> Result<Box<dyn Plugin>, SiphonError>;
}

impl std::fmt::Debug for dyn PluginFactory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PluginFactory")
            .field("category", &self.category())
            .finish_non_exhaustive()
    }
}
