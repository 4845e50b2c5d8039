// SPDX-FileCopyrightText: 2026 Siphon Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The module loader seam.
//!
//! [`ModuleLoader`] is the registry's only window onto the host's module
//! system. The registry's resolution algorithm depends solely on this trait,
//! never on a specific loading mechanism, so any host (dynamic libraries,
//! embedded interpreters, test doubles) can implement it.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::error::SiphonError;
use crate::types::LoadedPackage;
use crate::traits::plugin::PluginFactory;

/// Result of a load attempt that did not fail outright.
///
/// "Not found" means no candidate module exists under the requested name or
/// path. A module that was *found* but raised while loading must surface as
/// `Err(SiphonError::ModuleLoad { .. })`, never as `NotFound` — the registry
/// relies on this distinction to avoid misreporting broken plugins as missing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The module was found and its initialization ran (or had already run).
    Loaded,
    /// No module exists under the requested name or path.
    NotFound,
}

/// Registration callback handed to the loader.
///
/// A plugin module must, as part of its own initialization, call
/// [`register`](PluginRegistrar::register) for every type it provides. A
/// module that loads without registering anything is reported as
/// misregistered on the next lookup.
pub trait PluginRegistrar {
    /// Associate `type_name` with `factory`, overwriting any prior entry.
    fn register(&mut self, type_name: &str, factory: Arc<dyn PluginFactory>);
}

/// Host module system: load modules by name or path, expose the module
/// search path, and report loaded packages.
///
/// Contract: repeated loads of the same module are idempotent (the module's
/// initialization does not run twice), and [`LoadOutcome::NotFound`] is
/// reserved for "no candidate exists" as documented on [`LoadOutcome`].
pub trait ModuleLoader: Send + Sync {
    /// Load a module by its conventional name (e.g. `"siphon/input/csv"`),
    /// letting the host map the name onto its own storage.
    fn load_by_name(
        &self,
        module: &str,
        registrar: &mut dyn PluginRegistrar,
    ) -> Result<LoadOutcome, SiphonError>;

    /// Load a module from an absolute file path.
    fn load_by_path(
        &self,
        path: &Path,
        registrar: &mut dyn PluginRegistrar,
    ) -> Result<LoadOutcome, SiphonError>;

    /// The ordered list of directory roots the host searches for modules.
    /// The registry reads this but never mutates it.
    fn search_path(&self) -> Vec<PathBuf>;

    /// If `module` exists in its file form under `dir`, return that file's
    /// path. This is a pure existence probe: it must not execute anything.
    fn resolve_in(&self, dir: &Path, module: &str) -> Option<PathBuf>;

    /// All packages currently loaded in the host environment, used by the
    /// registry to announce newly loaded Siphon plugins.
    fn loaded_packages(&self) -> Vec<LoadedPackage>;
}
