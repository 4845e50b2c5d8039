// SPDX-FileCopyrightText: 2026 Siphon Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Plugin registry, package manifest parser, and installed-package index.
//!
//! The plugin system resolves short type names (e.g. `"csv"`) within a
//! category (input, output, parser, ...) to registered plugin factories,
//! loading the providing module on demand through the host's
//! [`ModuleLoader`](siphon_core::ModuleLoader) and
//! [`PackageIndex`](siphon_core::PackageIndex) seams.

pub mod index;
pub mod manifest;
pub mod registry;
pub mod sink;

pub use index::{DirPackageIndex, PACKAGE_MANIFEST_FILE};
pub use manifest::{parse_package_manifest, PackageManifest};
pub use registry::PluginRegistry;
pub use sink::StdoutSink;
