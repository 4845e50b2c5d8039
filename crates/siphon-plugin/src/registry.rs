// SPDX-FileCopyrightText: 2026 Siphon Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Plugin resolution and registration.
//!
//! One [`PluginRegistry`] exists per plugin category. A registry resolves a
//! short type name (e.g. `"csv"`) to a registered [`PluginFactory`], loading
//! the providing module on demand through three discovery strategies: direct
//! load by naming convention, a scan of the module search path, and a scan of
//! installed-package metadata.

use std::collections::{HashMap, HashSet};
use std::path::PathBuf;
use std::sync::Arc;

use chrono::Local;
use siphon_core::traits::{
    LoadOutcome, ModuleLoader, NotificationSink, PackageIndex, PluginFactory, PluginRegistrar,
};
use siphon_core::types::{PluginCategory, PACKAGE_NAMESPACE_PREFIX};
use siphon_core::SiphonError;

/// Registry of plugins for a single category.
///
/// Holds the registration table (type name → factory) and resolves
/// unregistered types by locating and loading their modules. `category` and
/// the derived search prefix are fixed at construction; only the table and
/// the announced-package set mutate.
///
/// The registry is synchronous and not internally synchronized: `register`,
/// `lookup`, and `search` take `&mut self` and run to completion, performing
/// blocking I/O inline. A concurrent host must confine a registry to one
/// thread or wrap it in its own lock.
pub struct PluginRegistry {
    category: PluginCategory,
    search_prefix: String,
    loader: Arc<dyn ModuleLoader>,
    packages: Arc<dyn PackageIndex>,
    sink: Arc<dyn NotificationSink>,
    table: HashMap<String, Arc<dyn PluginFactory>>,
    announced: HashSet<String>,
}

impl PluginRegistry {
    /// Create an empty registry for `category`, with the search prefix
    /// derived from the category's naming convention.
    pub fn new(
        category: PluginCategory,
        loader: Arc<dyn ModuleLoader>,
        packages: Arc<dyn PackageIndex>,
        sink: Arc<dyn NotificationSink>,
    ) -> Self {
        Self {
            search_prefix: category.search_prefix(),
            category,
            loader,
            packages,
            sink,
            table: HashMap::new(),
            announced: HashSet::new(),
        }
    }

    /// The category this registry manages.
    pub fn category(&self) -> PluginCategory {
        self.category
    }

    /// The module-name prefix combined with a type name to derive a loadable
    /// module name.
    pub fn search_prefix(&self) -> &str {
        &self.search_prefix
    }

    /// The module name a given type resolves to (`search_prefix + type`).
    pub fn module_name(&self, type_name: &str) -> String {
        format!("{}{}", self.search_prefix, type_name.trim())
    }

    /// Associate `type_name` with `factory`, overwriting any prior entry.
    ///
    /// This is the self-registration hook a loaded plugin module invokes
    /// during its own initialization (via the [`PluginRegistrar`] handed to
    /// the loader). Last write wins; there are no error conditions.
    pub fn register(&mut self, type_name: &str, factory: Arc<dyn PluginFactory>) {
        let key = type_name.trim().to_string();
        tracing::debug!(category = %self.category, r#type = %key, "registered plugin");
        self.table.insert(key, factory);
    }

    /// Resolve `type_name` to its registered factory, loading the providing
    /// module if necessary.
    ///
    /// Already-registered types return immediately without any discovery.
    /// Otherwise [`search`](Self::search) runs; if it loads a module that
    /// never registered the type, the error is
    /// [`SiphonError::PluginMisregistered`], and if nothing was found
    /// anywhere it is [`SiphonError::PluginNotInstalled`]. A module that
    /// fails *while* loading propagates its error unchanged.
    pub fn lookup(&mut self, type_name: &str) -> Result<Arc<dyn PluginFactory>, SiphonError> {
        let key = type_name.trim().to_string();
        if let Some(factory) = self.table.get(&key) {
            return Ok(Arc::clone(factory));
        }

        let module = self.module_name(&key);
        if self.search(&key)? {
            if let Some(factory) = self.table.get(&key) {
                return Ok(Arc::clone(factory));
            }
            Err(SiphonError::PluginMisregistered {
                category: self.category,
                type_name: key,
                module,
            })
        } else {
            Err(SiphonError::PluginNotInstalled {
                category: self.category,
                type_name: key,
                module,
            })
        }
    }

    /// Try to locate and load the module providing `type_name`.
    ///
    /// Returns `Ok(true)` as soon as one strategy loads a module, `Ok(false)`
    /// if no strategy found a candidate, and `Err` if a found module failed
    /// while loading. Finding nothing is not an error at this level; `lookup`
    /// decides how to report it.
    pub fn search(&mut self, type_name: &str) -> Result<bool, SiphonError> {
        let module = self.module_name(type_name);
        let loader = Arc::clone(&self.loader);

        // Strategy 1: direct load by naming convention. `NotFound` means no
        // module exists under this name; anything the loader found but could
        // not load surfaces as `Err` and propagates out of here unchanged.
        match loader.load_by_name(&module, self)? {
            LoadOutcome::Loaded => {
                tracing::debug!(module = %module, "loaded plugin module by name");
                self.announce_loaded_packages();
                return Ok(true);
            }
            LoadOutcome::NotFound => {}
        }

        // Strategy 2: scan the module search path for the module's file form.
        let mut candidates: Vec<PathBuf> = loader
            .search_path()
            .iter()
            .filter_map(|dir| loader.resolve_in(dir, &module))
            .collect();
        candidates.sort(); // sort to prefer newer version
        for path in candidates {
            match loader.load_by_path(&path, self)? {
                LoadOutcome::Loaded => {
                    tracing::debug!(path = %path.display(), "loaded plugin module from search path");
                    self.announce_loaded_packages();
                    return Ok(true);
                }
                // The probe saw the file but the loader no longer does; try
                // the next candidate.
                LoadOutcome::NotFound => continue,
            }
        }

        // Strategy 3: installed-package metadata, greatest version wins.
        let mut specs = self.packages.find_providers(&module)?;
        specs.sort_by(|a, b| a.version.cmp(&b.version));
        if let Some(spec) = specs.pop() {
            tracing::debug!(
                package = %spec.name,
                version = %spec.version,
                module = %module,
                "resolving plugin from installed package"
            );
            for root in &spec.lib_roots {
                let Some(path) = loader.resolve_in(root, &module) else {
                    continue;
                };
                match loader.load_by_path(&path, self)? {
                    LoadOutcome::Loaded => {
                        self.announce_loaded_packages();
                        return Ok(true);
                    }
                    LoadOutcome::NotFound => continue,
                }
            }
        }

        Ok(false)
    }

    /// Announce every not-yet-announced loaded package in the reserved
    /// namespace. Runs after each successful module load; the announced set
    /// guarantees at most one line per package name for the registry's
    /// lifetime even though unrelated loads re-trigger the scan.
    fn announce_loaded_packages(&mut self) {
        for pkg in self.loader.loaded_packages() {
            if !pkg.name.starts_with(PACKAGE_NAMESPACE_PREFIX) {
                continue;
            }
            if self.announced.contains(&pkg.name) {
                continue;
            }
            let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S%.3f %z");
            self.sink
                .emit(&format!("{timestamp}: Loaded plugin {} ({})", pkg.name, pkg.version));
            self.announced.insert(pkg.name);
        }
    }
}

impl PluginRegistrar for PluginRegistry {
    fn register(&mut self, type_name: &str, factory: Arc<dyn PluginFactory>) {
        PluginRegistry::register(self, type_name, factory);
    }
}

impl std::fmt::Debug for PluginRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PluginRegistry")
            .field("category", &self.category)
            .field("search_prefix", &self.search_prefix)
            .field("registered", &self.table.len())
            .field("announced", &self.announced.len())
            .finish()
    }
}
