//! End-to-end scenarios: raw launcher arguments to classpath and config order

use boot_core::{
    BootstrapConfig, Error, ExtractionResult, LauncherSettings, ModuleExtractor, Result,
};
use boot_fs::{ConfigError, to_file_url};
use boot_test_utils::layout::TestLayout;
use pretty_assertions::assert_eq;
use std::collections::BTreeSet;
use std::path::PathBuf;
use std::sync::Arc;

struct FixedExtractor(ExtractionResult);

impl ModuleExtractor for FixedExtractor {
    fn extract_modules(&self, _module_dirs: &[PathBuf]) -> Result<ExtractionResult> {
        Ok(self.0.clone())
    }
}

fn no_modules() -> Arc<FixedExtractor> {
    Arc::new(FixedExtractor(ExtractionResult::default()))
}

#[test]
fn test_installer_layout_is_found_from_modules_dir() {
    let app = TestLayout::new();
    app.standard("labkeywebapp");
    app.dir("webapp/WEB-INF/lib");
    app.dir("explodedWar/WEB-INF/lib");
    let modules_arg = format!("-modulesdir={}", app.path("modules").display());

    let config = BootstrapConfig::from_args([modules_arg], app.root()).unwrap();
    assert_eq!(config.modules_dir(), app.path("modules"));
    assert_eq!(config.webapp_dir(), app.path("labkeywebapp"));
    assert_eq!(config.lib_dir(), app.path("labkeywebapp/WEB-INF/lib"));
    assert_eq!(config.config_dir(), None);
}

#[test]
fn test_user_pipeline_config_is_loaded_first() {
    let app = TestLayout::new();
    app.standard("labkeywebapp");
    let pipeline = app.file("cfg/a/pipeline-config.xml");
    let other = app.file("cfg/b/other.xml");

    let config = BootstrapConfig::new(
        ["-configdir=cfg"],
        app.root(),
        LauncherSettings::default(),
        no_modules(),
    )
    .unwrap();

    assert_eq!(
        config.config_paths().unwrap(),
        vec![
            to_file_url(&pipeline).unwrap().to_string(),
            to_file_url(&other).unwrap().to_string(),
        ]
    );
}

#[test]
fn test_modules_dir_pointing_at_file_fails_construction() {
    let app = TestLayout::new();
    let file = app.file("modules.txt");
    // A valid webapp exists, but resolution must stop at the modules dir.
    app.dir("labkeywebapp/WEB-INF/lib");

    let err = BootstrapConfig::from_args(["-modulesdir=modules.txt"], app.root()).unwrap_err();
    assert!(err.is_config());
    assert!(err.to_string().contains(&file.display().to_string()));
    match err {
        Error::Fs(boot_fs::Error::Config(ConfigError::MissingModulesDir { path })) => {
            assert_eq!(path, file);
        }
        other => panic!("expected MissingModulesDir, got {other:?}"),
    }
}

#[test]
fn test_classpath_has_module_archives_then_library_jars() {
    let app = TestLayout::new();
    app.standard("labkeywebapp");
    for jar in ["a.jar", "b.jar", "c.jar"] {
        app.file(&format!("labkeywebapp/WEB-INF/lib/{jar}"));
    }
    let module_archives = vec![
        app.file("modules/m1/lib/m1.jar"),
        app.file("modules/m2/lib/m2.jar"),
    ];

    let config = BootstrapConfig::new(
        Vec::<String>::new(),
        app.root(),
        LauncherSettings::default(),
        Arc::new(FixedExtractor(ExtractionResult {
            archives: module_archives.clone(),
            config_files: vec![],
        })),
    )
    .unwrap();

    let class_path = config.class_load_paths().unwrap();
    assert_eq!(class_path.len(), 5);
    assert_eq!(class_path.as_slice()[0], to_file_url(&module_archives[0]).unwrap());
    assert_eq!(class_path.as_slice()[1], to_file_url(&module_archives[1]).unwrap());

    let library: BTreeSet<_> = class_path.as_slice()[2..].iter().cloned().collect();
    let expected: BTreeSet<_> = ["a.jar", "b.jar", "c.jar"]
        .iter()
        .map(|jar| to_file_url(&app.path(&format!("labkeywebapp/WEB-INF/lib/{jar}"))).unwrap())
        .collect();
    assert_eq!(library, expected);
}

#[test]
fn test_layout_failure_happens_before_extraction() {
    struct PanickingExtractor;
    impl ModuleExtractor for PanickingExtractor {
        fn extract_modules(&self, _module_dirs: &[PathBuf]) -> Result<ExtractionResult> {
            panic!("extractor must not run when the layout is invalid");
        }
    }

    let app = TestLayout::new();
    app.dir("modules");

    let result = BootstrapConfig::new(
        Vec::<String>::new(),
        app.root(),
        LauncherSettings::default(),
        Arc::new(PanickingExtractor),
    );
    assert!(matches!(
        result,
        Err(Error::Fs(boot_fs::Error::Config(ConfigError::MissingWebappDir { .. })))
    ));
}
