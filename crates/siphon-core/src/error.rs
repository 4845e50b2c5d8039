// SPDX-FileCopyrightText: 2026 Siphon Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the Siphon bulk loader.

use thiserror::Error;

use crate::types::PluginCategory;

/// The primary error type used across Siphon's plugin traits and core operations.
#[derive(Debug, Error)]
pub enum SiphonError {
    /// Configuration errors (invalid TOML, missing required fields, type mismatches).
    #[error("configuration error: {0}")]
    Config(String),

    /// No registration and no module found by any discovery strategy.
    #[error(
        "unknown {category} plugin '{type_name}': module '{module}' is not installed \
         (run 'siphon package search siphon-{category}' to find plugins)"
    )]
    PluginNotInstalled {
        category: PluginCategory,
        type_name: String,
        module: String,
    },

    /// A module was found and loaded, but it never registered the plugin.
    #[error(
        "unknown {category} plugin '{type_name}': module '{module}' is installed \
         but it does not correctly register the plugin"
    )]
    PluginMisregistered {
        category: PluginCategory,
        type_name: String,
        module: String,
    },

    /// A module was found but failed while loading. Propagated unchanged through
    /// `lookup`/`search` so real bugs in plugin code are never misreported as
    /// "plugin missing".
    #[error("failed to load module '{module}': {source}")]
    ModuleLoad {
        module: String,
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// The installed-package index could not be queried.
    #[error("package index error: {message}")]
    PackageIndex {
        message: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// A plugin factory rejected its configuration or failed to construct.
    #[error("plugin error: {message}")]
    Plugin {
        message: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Internal or unexpected errors.
    #[error("internal error: {0}")]
    Internal(String),
}
