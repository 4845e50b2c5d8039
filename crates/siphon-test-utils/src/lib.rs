// SPDX-FileCopyrightText: 2026 Siphon Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Test utilities for Siphon plugin-resolution tests.
//!
//! Provides scriptable doubles for the registry's trait seams so resolution
//! flows can be tested deterministically without a real module system:
//!
//! - [`MockLoader`] - scripted module loader with call recording
//! - [`MockPackageIndex`] - in-memory installed-package index
//! - [`CaptureSink`] - collects announcement lines
//! - [`NoopFactory`] - registerable do-nothing plugin factory

pub mod capture_sink;
pub mod factory;
pub mod mock_loader;
pub mod mock_packages;

pub use capture_sink::CaptureSink;
pub use factory::{NoopFactory, NoopPlugin};
pub use mock_loader::{MockLoader, ModuleBehavior};
pub use mock_packages::MockPackageIndex;
