// SPDX-FileCopyrightText: 2026 Siphon Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core library for the Siphon bulk loader.
//!
//! This crate provides the foundational trait definitions, error types, and
//! common types used throughout the Siphon workspace. The plugin registry in
//! `siphon-plugin` depends only on the seams defined here, so hosts can swap
//! in their own module loaders, package indexes, and notification sinks.

pub mod error;
pub mod traits;
pub mod types;

// Re-export key items at crate root for ergonomic imports.
pub use error::SiphonError;
pub use types::{LoadedPackage, PluginCategory, PACKAGE_NAMESPACE_PREFIX};

// Re-export the trait seams at crate root.
pub use traits::{
    LoadOutcome, ModuleLoader, NotificationSink, PackageIndex, PackageSpec, Plugin,
    PluginFactory, PluginRegistrar,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn siphon_error_has_all_variants() {
        let _config = SiphonError::Config("test".into());
        let _not_installed = SiphonError::PluginNotInstalled {
            category: PluginCategory::Input,
            type_name: "csv".into(),
            module: "siphon/input/csv".into(),
        };
        let _misregistered = SiphonError::PluginMisregistered {
            category: PluginCategory::Input,
            type_name: "csv".into(),
            module: "siphon/input/csv".into(),
        };
        let _load = SiphonError::ModuleLoad {
            module: "siphon/input/csv".into(),
            source: Box::new(std::io::Error::other("test")),
        };
        let _index = SiphonError::PackageIndex {
            message: "test".into(),
            source: None,
        };
        let _plugin = SiphonError::Plugin {
            message: "test".into(),
            source: None,
        };
        let _internal = SiphonError::Internal("test".into());
    }

    #[test]
    fn not_installed_message_names_category_type_and_remediation() {
        let err = SiphonError::PluginNotInstalled {
            category: PluginCategory::Output,
            type_name: "s3".into(),
            module: "siphon/output/s3".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("output"));
        assert!(msg.contains("'s3'"));
        assert!(msg.contains("siphon/output/s3"));
        assert!(msg.contains("siphon package search siphon-output"));
    }

    #[test]
    fn misregistered_message_names_module_path() {
        let err = SiphonError::PluginMisregistered {
            category: PluginCategory::Parser,
            type_name: "jsonl".into(),
            module: "siphon/parser/jsonl".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("parser"));
        assert!(msg.contains("'jsonl'"));
        assert!(msg.contains("siphon/parser/jsonl"));
        assert!(msg.contains("does not correctly register"));
    }

    #[test]
    fn module_load_preserves_source() {
        use std::error::Error as _;
        let err = SiphonError::ModuleLoad {
            module: "siphon/filter/dedupe".into(),
            source: Box::new(std::io::Error::other("missing symbol")),
        };
        assert!(err.source().is_some());
        assert!(err.to_string().contains("missing symbol"));
    }
}
