//! Module extraction seam
//!
//! The bootstrap only needs two things from modules: the archives to put on
//! the classpath and the configuration files the modules ship. How modules
//! are unpacked is up to the [`ModuleExtractor`] implementation.

use std::path::{Path, PathBuf};

use boot_fs::{LayoutPath, has_extension, is_directory, list_entries};

use crate::Result;
use crate::settings::DEFAULT_CONFIG_EXTENSION;

/// Locations reported by a [`ModuleExtractor`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractionResult {
    /// Archives to put on the classpath, in extractor order
    pub archives: Vec<PathBuf>,
    /// Configuration files provided by the modules themselves
    pub config_files: Vec<PathBuf>,
}

/// Turns module source directories into classpath archives and module
/// configuration files.
pub trait ModuleExtractor: Send + Sync {
    fn extract_modules(&self, module_dirs: &[PathBuf]) -> Result<ExtractionResult>;
}

/// Extractor for modules that are already unpacked on disk.
///
/// ```text
/// {modules}/
/// └── {module}/
///     ├── lib/*.jar        # archives
///     └── config/*.xml     # module configuration
/// ```
///
/// Modules are visited in name order, and files within each module in name
/// order, so the result does not depend on directory listing order.
#[derive(Debug, Clone)]
pub struct ExplodedModuleExtractor {
    config_extension: String,
}

impl Default for ExplodedModuleExtractor {
    fn default() -> Self {
        Self::new(DEFAULT_CONFIG_EXTENSION)
    }
}

impl ExplodedModuleExtractor {
    pub fn new(config_extension: impl Into<String>) -> Self {
        Self {
            config_extension: config_extension.into(),
        }
    }

    fn extract_module(&self, module: &Path, result: &mut ExtractionResult) -> Result<()> {
        let lib_dir = module.join(LayoutPath::Lib);
        if lib_dir.is_dir() {
            result
                .archives
                .extend(sorted(list_entries(&lib_dir, has_extension("jar"))?));
        }

        let config_dir = module.join("config");
        if config_dir.is_dir() {
            result.config_files.extend(sorted(list_entries(
                &config_dir,
                has_extension(&self.config_extension),
            )?));
        }
        Ok(())
    }
}

impl ModuleExtractor for ExplodedModuleExtractor {
    fn extract_modules(&self, module_dirs: &[PathBuf]) -> Result<ExtractionResult> {
        let mut result = ExtractionResult::default();
        for dir in module_dirs {
            for module in sorted(list_entries(dir, is_directory)?) {
                tracing::debug!(?module, "Extracting module");
                self.extract_module(&module, &mut result)?;
            }
        }
        Ok(result)
    }
}

fn sorted(mut paths: Vec<PathBuf>) -> Vec<PathBuf> {
    paths.sort();
    paths
}
