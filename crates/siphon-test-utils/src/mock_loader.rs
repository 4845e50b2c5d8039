// SPDX-FileCopyrightText: 2026 Siphon Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Scriptable [`ModuleLoader`] double.
//!
//! Tests describe, per module name or path, what a load attempt does:
//! register a factory, load silently without registering, or fail fatally.
//! Every load attempt is recorded so tests can assert which candidates were
//! (or were not) tried.

use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use siphon_core::traits::{LoadOutcome, ModuleLoader, PluginRegistrar};
use siphon_core::types::{LoadedPackage, PluginCategory};
use siphon_core::SiphonError;

use crate::factory::NoopFactory;

/// What a scripted load attempt does.
#[derive(Debug, Clone)]
pub enum ModuleBehavior {
    /// The module loads and registers a [`NoopFactory`] under `type_name`.
    Registers {
        type_name: String,
        category: PluginCategory,
    },
    /// The module loads but registers nothing (a misbehaving plugin).
    RegistersNothing,
    /// The module is found but fails while loading.
    Fails { message: String },
}

#[derive(Default)]
struct Inner {
    by_name: HashMap<String, ModuleBehavior>,
    by_path: HashMap<PathBuf, ModuleBehavior>,
    search_path: Vec<PathBuf>,
    files: HashMap<PathBuf, HashSet<String>>,
    loaded: Vec<LoadedPackage>,
    calls: Vec<String>,
}

/// In-memory module loader for tests.
#[derive(Default)]
pub struct MockLoader {
    inner: Mutex<Inner>,
}

impl MockLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// The file path a module resolves to inside a directory. The mock's
    /// file convention is `<dir>/<module>.plugin`.
    pub fn module_file(dir: &Path, module: &str) -> PathBuf {
        dir.join(format!("{module}.plugin"))
    }

    /// Script what loading `module` by name does.
    pub fn add_module(&self, module: &str, behavior: ModuleBehavior) {
        self.inner
            .lock()
            .unwrap()
            .by_name
            .insert(module.to_string(), behavior);
    }

    /// Script what loading the exact `path` does.
    pub fn add_path(&self, path: impl Into<PathBuf>, behavior: ModuleBehavior) {
        self.inner.lock().unwrap().by_path.insert(path.into(), behavior);
    }

    /// Append a directory to the module search path.
    pub fn add_search_dir(&self, dir: impl Into<PathBuf>) {
        let dir = dir.into();
        let mut inner = self.inner.lock().unwrap();
        if !inner.search_path.contains(&dir) {
            inner.search_path.push(dir);
        }
    }

    /// Place `module`'s file under `dir`, append `dir` to the search path,
    /// and script what loading that file does.
    pub fn add_search_file(&self, dir: impl Into<PathBuf>, module: &str, behavior: ModuleBehavior) {
        let dir = dir.into();
        self.add_search_dir(dir.clone());
        self.add_search_file_unlisted(dir, module, behavior);
    }

    /// Like [`add_search_file`](Self::add_search_file), but without putting
    /// `dir` on the search path — for directories only reachable through
    /// package lib roots.
    pub fn add_search_file_unlisted(
        &self,
        dir: impl Into<PathBuf>,
        module: &str,
        behavior: ModuleBehavior,
    ) {
        let dir = dir.into();
        let path = Self::module_file(&dir, module);
        let mut inner = self.inner.lock().unwrap();
        inner.files.entry(dir).or_default().insert(module.to_string());
        inner.by_path.insert(path, behavior);
    }

    /// Report `name`/`version` among the host's loaded packages.
    pub fn add_loaded_package(&self, name: &str, version: &str) {
        self.inner.lock().unwrap().loaded.push(LoadedPackage {
            name: name.to_string(),
            version: version.to_string(),
        });
    }

    /// Every load attempt so far, as `"name:<module>"` / `"path:<path>"`.
    pub fn calls(&self) -> Vec<String> {
        self.inner.lock().unwrap().calls.clone()
    }

    /// Total number of load attempts.
    pub fn load_attempts(&self) -> usize {
        self.inner.lock().unwrap().calls.len()
    }

    fn apply(
        &self,
        behavior: ModuleBehavior,
        module: &str,
        registrar: &mut dyn PluginRegistrar,
    ) -> Result<LoadOutcome, SiphonError> {
        match behavior {
            ModuleBehavior::Registers { type_name, category } => {
                registrar.register(&type_name, Arc::new(NoopFactory::new(category)));
                Ok(LoadOutcome::Loaded)
            }
            ModuleBehavior::RegistersNothing => Ok(LoadOutcome::Loaded),
            ModuleBehavior::Fails { message } => Err(SiphonError::ModuleLoad {
                module: module.to_string(),
                source: message.into(),
            }),
        }
    }
}

impl ModuleLoader for MockLoader {
    fn load_by_name(
        &self,
        module: &str,
        registrar: &mut dyn PluginRegistrar,
    ) -> Result<LoadOutcome, SiphonError> {
        let behavior = {
            let mut inner = self.inner.lock().unwrap();
            inner.calls.push(format!("name:{module}"));
            inner.by_name.get(module).cloned()
        };
        match behavior {
            Some(behavior) => self.apply(behavior, module, registrar),
            None => Ok(LoadOutcome::NotFound),
        }
    }

    fn load_by_path(
        &self,
        path: &Path,
        registrar: &mut dyn PluginRegistrar,
    ) -> Result<LoadOutcome, SiphonError> {
        let behavior = {
            let mut inner = self.inner.lock().unwrap();
            inner.calls.push(format!("path:{}", path.display()));
            inner.by_path.get(path).cloned()
        };
        match behavior {
            Some(behavior) => self.apply(behavior, &path.display().to_string(), registrar),
            None => Ok(LoadOutcome::NotFound),
        }
    }

    fn search_path(&self) -> Vec<PathBuf> {
        self.inner.lock().unwrap().search_path.clone()
    }

    fn resolve_in(&self, dir: &Path, module: &str) -> Option<PathBuf> {
        let inner = self.inner.lock().unwrap();
        match inner.files.get(dir) {
            Some(modules) => modules
                .contains(module)
                .then(|| Self::module_file(dir, module)),
            // Directories not scripted in the mock fall back to the real
            // filesystem, so integration tests can use tempdir packages.
            None => {
                let path = Self::module_file(dir, module);
                path.is_file().then_some(path)
            }
        }
    }

    fn loaded_packages(&self) -> Vec<LoadedPackage> {
        self.inner.lock().unwrap().loaded.clone()
    }
}
