// SPDX-FileCopyrightText: 2026 Siphon Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! End-to-end resolution flows over a real on-disk package layout.
//!
//! Uses [`DirPackageIndex`] against tempdir packages and the scriptable
//! loader from `siphon-test-utils` (which probes the real filesystem for
//! directories it has no script for).

use std::fs;
use std::path::Path;
use std::sync::Arc;

use siphon_core::traits::{ModuleLoader, NotificationSink, PackageIndex};
use siphon_core::types::PluginCategory;
use siphon_core::SiphonError;
use siphon_plugin::{DirPackageIndex, PluginRegistry, PACKAGE_MANIFEST_FILE};
use siphon_test_utils::{CaptureSink, MockLoader, ModuleBehavior};

/// Lay down one installed package release under `root` and return its lib
/// directory. The module file itself is created so existence probes see it.
fn install_package(root: &Path, name: &str, version: &str, module: &str) -> std::path::PathBuf {
    let dir = root.join(format!("{name}-{version}"));
    let lib = dir.join("lib");
    let module_file = MockLoader::module_file(&lib, module);
    fs::create_dir_all(module_file.parent().unwrap()).unwrap();
    fs::write(&module_file, b"").unwrap();
    fs::write(
        dir.join(PACKAGE_MANIFEST_FILE),
        format!(
            r#"
[package]
name = "{name}"
version = "{version}"
files = ["{module}.plugin"]
"#
        ),
    )
    .unwrap();
    lib
}

fn registry(
    loader: &Arc<MockLoader>,
    index: DirPackageIndex,
    sink: &Arc<CaptureSink>,
) -> PluginRegistry {
    PluginRegistry::new(
        PluginCategory::Input,
        Arc::clone(loader) as Arc<dyn ModuleLoader>,
        Arc::new(index) as Arc<dyn PackageIndex>,
        Arc::clone(sink) as Arc<dyn NotificationSink>,
    )
}

#[test]
fn resolves_installed_package_preferring_newest_and_announces_once() {
    let tmp = tempfile::tempdir().unwrap();
    let module = "siphon/input/csv";

    let old_lib = install_package(tmp.path(), "siphon-input-csv", "1.2.0", module);
    let new_lib = install_package(tmp.path(), "siphon-input-csv", "2.1.0", module);

    let loader = Arc::new(MockLoader::new());
    loader.add_path(
        MockLoader::module_file(&old_lib, module),
        ModuleBehavior::Registers {
            type_name: "csv".into(),
            category: PluginCategory::Input,
        },
    );
    loader.add_path(
        MockLoader::module_file(&new_lib, module),
        ModuleBehavior::Registers {
            type_name: "csv".into(),
            category: PluginCategory::Input,
        },
    );
    loader.add_loaded_package("siphon-input-csv", "2.1.0");

    let sink = Arc::new(CaptureSink::new());
    let mut registry = registry(&loader, DirPackageIndex::new(tmp.path()), &sink);

    let factory = registry.lookup("csv").unwrap();
    assert_eq!(factory.category(), PluginCategory::Input);

    let path_loads: Vec<String> = loader
        .calls()
        .into_iter()
        .filter(|c| c.starts_with("path:"))
        .collect();
    assert_eq!(path_loads.len(), 1);
    assert!(
        path_loads[0].contains("2.1.0"),
        "newest release must be loaded, got {path_loads:?}"
    );

    // One announcement, in the documented line format.
    let lines = sink.lines();
    assert_eq!(lines.len(), 1);
    let (timestamp, rest) = lines[0].split_once(": ").unwrap();
    assert_eq!(rest, "Loaded plugin siphon-input-csv (2.1.0)");
    // e.g. "2026-08-23 14:03:07.412 +0000"
    assert!(timestamp.len() >= 23, "timestamp looks truncated: {timestamp}");
    assert_eq!(&timestamp[4..5], "-");
    assert_eq!(&timestamp[13..14], ":");

    // A second successful search must not announce the package again.
    assert!(registry.search("csv").unwrap());
    assert_eq!(sink.lines().len(), 1);
}

#[test]
fn empty_package_root_reports_not_installed() {
    let tmp = tempfile::tempdir().unwrap();
    let loader = Arc::new(MockLoader::new());
    let sink = Arc::new(CaptureSink::new());
    let mut registry = registry(&loader, DirPackageIndex::new(tmp.path()), &sink);

    let err = registry.lookup("csv").unwrap_err();
    match err {
        SiphonError::PluginNotInstalled { type_name, module, .. } => {
            assert_eq!(type_name, "csv");
            assert_eq!(module, "siphon/input/csv");
        }
        other => panic!("expected PluginNotInstalled, got {other:?}"),
    }
    assert!(sink.lines().is_empty());
}

#[test]
fn installed_package_that_registers_nothing_is_misregistered() {
    let tmp = tempfile::tempdir().unwrap();
    let module = "siphon/input/hollow";
    let lib = install_package(tmp.path(), "siphon-input-hollow", "0.1.0", module);

    let loader = Arc::new(MockLoader::new());
    loader.add_path(
        MockLoader::module_file(&lib, module),
        ModuleBehavior::RegistersNothing,
    );

    let sink = Arc::new(CaptureSink::new());
    let mut registry = registry(&loader, DirPackageIndex::new(tmp.path()), &sink);

    let err = registry.lookup("hollow").unwrap_err();
    match err {
        SiphonError::PluginMisregistered { module, .. } => {
            assert_eq!(module, "siphon/input/hollow");
        }
        other => panic!("expected PluginMisregistered, got {other:?}"),
    }
}

#[test]
fn broken_module_in_installed_package_is_fatal() {
    let tmp = tempfile::tempdir().unwrap();
    let module = "siphon/input/faulty";
    let lib = install_package(tmp.path(), "siphon-input-faulty", "0.1.0", module);

    let loader = Arc::new(MockLoader::new());
    loader.add_path(
        MockLoader::module_file(&lib, module),
        ModuleBehavior::Fails {
            message: "panic during plugin init".into(),
        },
    );

    let sink = Arc::new(CaptureSink::new());
    let mut registry = registry(&loader, DirPackageIndex::new(tmp.path()), &sink);

    let err = registry.lookup("faulty").unwrap_err();
    match err {
        SiphonError::ModuleLoad { source, .. } => {
            assert!(source.to_string().contains("panic during plugin init"));
        }
        other => panic!("expected ModuleLoad, got {other:?}"),
    }
}

#[test]
fn search_path_directory_with_real_files_wins_over_package_index() {
    let tmp = tempfile::tempdir().unwrap();
    let module = "siphon/input/csv";

    // A module file sitting directly on the search path.
    let local = tmp.path().join("local-plugins");
    let local_file = MockLoader::module_file(&local, module);
    fs::create_dir_all(local_file.parent().unwrap()).unwrap();
    fs::write(&local_file, b"").unwrap();

    // The same module also installed as a package.
    let pkg_root = tmp.path().join("packages");
    let lib = install_package(&pkg_root, "siphon-input-csv", "9.9.9", module);

    let loader = Arc::new(MockLoader::new());
    loader.add_search_dir(&local);
    loader.add_path(
        local_file.clone(),
        ModuleBehavior::Registers {
            type_name: "csv".into(),
            category: PluginCategory::Input,
        },
    );
    loader.add_path(
        MockLoader::module_file(&lib, module),
        ModuleBehavior::Registers {
            type_name: "csv".into(),
            category: PluginCategory::Input,
        },
    );

    let sink = Arc::new(CaptureSink::new());
    let mut registry = registry(&loader, DirPackageIndex::new(&pkg_root), &sink);

    registry.lookup("csv").unwrap();

    let path_loads: Vec<String> = loader
        .calls()
        .into_iter()
        .filter(|c| c.starts_with("path:"))
        .collect();
    assert_eq!(path_loads.len(), 1);
    assert!(
        path_loads[0].contains("local-plugins"),
        "search path strategy must run before the package index, got {path_loads:?}"
    );
}
