//! Golden tests against the installed-application tree in test-fixtures/
//!
//! The fixture is copied into a temporary directory first so that the
//! checkout location never leaks into URIs (and into keyword matching).

use boot_core::BootstrapConfig;
use boot_test_utils::layout::TestLayout;
use pretty_assertions::assert_eq;
use std::fs;
use std::path::{Path, PathBuf};

/// Path to the test-fixtures directory (relative to the workspace root).
fn fixtures_dir() -> PathBuf {
    let manifest_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    // tests/integration -> ../../test-fixtures
    manifest_dir.join("../../test-fixtures")
}

fn copy_tree(from: &Path, to: &Path) {
    fs::create_dir_all(to).unwrap();
    for entry in fs::read_dir(from).unwrap() {
        let entry = entry.unwrap();
        let target = to.join(entry.file_name());
        if entry.file_type().unwrap().is_dir() {
            copy_tree(&entry.path(), &target);
        } else {
            fs::copy(entry.path(), &target).unwrap();
        }
    }
}

fn installed_app() -> TestLayout {
    let app = TestLayout::new();
    copy_tree(&fixtures_dir().join("apps/installed"), app.root());
    app
}

/// Strip the temporary root so results can be compared as relative URIs.
fn relative(app: &TestLayout, uris: impl IntoIterator<Item = String>) -> Vec<String> {
    let prefix = boot_fs::to_file_url(app.root()).unwrap().to_string();
    uris.into_iter()
        .map(|uri| uri.trim_start_matches(&prefix).trim_start_matches('/').to_string())
        .collect()
}

#[test]
fn test_installed_app_prefers_labkeywebapp() {
    let app = installed_app();

    let config = BootstrapConfig::from_args(["-modulesdir=modules"], app.root()).unwrap();
    assert_eq!(config.webapp_dir(), app.path("labkeywebapp"));
}

#[test]
fn test_installed_app_config_order() {
    let app = installed_app();

    let config = BootstrapConfig::from_args(["-configdir=cfg"], app.root()).unwrap();
    let ordered = relative(&app, config.config_paths().unwrap());
    assert_eq!(
        ordered,
        vec![
            "modules/pipeline/config/pipelineContext.xml",
            "modules/core/config/coreContext.xml",
            "cfg/a/pipeline-config.xml",
            "cfg/b/other.xml",
        ]
    );
}

#[test]
fn test_installed_app_classpath() {
    let app = installed_app();

    let config = BootstrapConfig::from_args(Vec::<String>::new(), app.root()).unwrap();
    let entries = relative(
        &app,
        config
            .class_load_paths()
            .unwrap()
            .iter()
            .map(|url| url.to_string()),
    );

    assert_eq!(entries.len(), 5);
    assert_eq!(
        &entries[..2],
        ["modules/core/lib/core.jar", "modules/pipeline/lib/pipeline.jar"]
    );
    let mut library = entries[2..].to_vec();
    library.sort();
    assert_eq!(
        library,
        vec![
            "labkeywebapp/WEB-INF/lib/a.jar",
            "labkeywebapp/WEB-INF/lib/b.jar",
            "labkeywebapp/WEB-INF/lib/c.jar",
        ]
    );
    assert!(!entries.iter().any(|e| e.contains("unused.jar")));
}

#[test]
fn test_installed_app_program_args() {
    let app = installed_app();

    let config =
        BootstrapConfig::from_args(["-configdir=cfg", "run", "--", "-debug"], app.root()).unwrap();
    assert_eq!(config.program_args(), ["run", "-debug"]);
}
