// SPDX-FileCopyrightText: 2026 Siphon Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Common types used across the plugin traits and the Siphon framework.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Reserved package namespace. Packages whose names start with this prefix
/// are treated as Siphon plugins by the load announcer.
pub const PACKAGE_NAMESPACE_PREFIX: &str = "siphon-";

/// Identifies the kind of plugin a registry manages.
///
/// Each category owns an independent type namespace: the `"csv"` input plugin
/// and the `"csv"` parser plugin are unrelated registrations.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum PluginCategory {
    Input,
    Output,
    Parser,
    Formatter,
    Decoder,
    Encoder,
    Filter,
}

impl PluginCategory {
    /// The conventional module-name prefix for this category, combined with a
    /// short type name to derive a loadable module name
    /// (e.g. `input` + `"csv"` → `"siphon/input/csv"`).
    pub fn search_prefix(&self) -> String {
        format!("siphon/{self}/")
    }
}

/// A package the host module system has already loaded, as reported by
/// [`ModuleLoader::loaded_packages`](crate::traits::ModuleLoader::loaded_packages).
///
/// The version is kept as the host's raw string: loaded packages are only ever
/// displayed, never version-compared.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedPackage {
    pub name: String,
    pub version: String,
}
