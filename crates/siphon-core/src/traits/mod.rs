// SPDX-FileCopyrightText: 2026 Siphon Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Trait seams between the plugin registry and its host environment.

pub mod loader;
pub mod notify;
pub mod packages;
pub mod plugin;

pub use loader::{LoadOutcome, ModuleLoader, PluginRegistrar};
pub use notify::NotificationSink;
pub use packages::{PackageIndex, PackageSpec};
pub use plugin::{Plugin, PluginFactory};
