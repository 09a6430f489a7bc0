//! Command implementations for boot-cli

pub mod classpath;
pub mod config;
pub mod layout;
pub mod plan;

pub use classpath::run_classpath;
pub use config::run_config;
pub use layout::run_layout;
pub use plan::run_plan;

use std::path::Path;
use std::sync::Arc;

use boot_core::{BootstrapConfig, ExplodedModuleExtractor, LauncherSettings};
use boot_fs::SettingsStore;

use crate::error::Result;

/// Load settings (defaults when no file is given) and resolve the bootstrap
/// configuration against `cwd`.
pub fn load_bootstrap(
    cwd: &Path,
    raw: &[String],
    settings_path: Option<&Path>,
) -> Result<BootstrapConfig> {
    let settings = match settings_path {
        Some(path) => {
            tracing::debug!(?path, "Loading launcher settings");
            SettingsStore::new().load::<LauncherSettings>(path)?
        }
        None => LauncherSettings::default(),
    };
    let extractor = Arc::new(ExplodedModuleExtractor::new(&settings.config_extension));
    Ok(BootstrapConfig::new(
        raw.iter().cloned(),
        cwd,
        settings,
        extractor,
    )?)
}
