//! Bootstrap configuration
//!
//! [`BootstrapConfig`] is built once from the launcher arguments. The layout
//! and program arguments are fixed at construction; the classpath and the
//! configuration file lists are computed on first access and cached for the
//! lifetime of the object.

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, OnceLock, PoisonError};

use boot_fs::{LayoutOptions, ResolvedLayout};

use crate::args::{self, ArgumentStore};
use crate::classpath::ClassPath;
use crate::discovery::discover_config_files;
use crate::extractor::{ExplodedModuleExtractor, ModuleExtractor};
use crate::ordering::{PriorityComparator, order_config_uris, to_config_uris};
use crate::settings::LauncherSettings;
use crate::{ArgsError, Result};

/// Results of the one-time initialization.
#[derive(Debug)]
struct Loaded {
    class_path: ClassPath,
    module_config_files: Vec<PathBuf>,
    user_config_files: Vec<PathBuf>,
}

/// Resolved runtime environment of the launched application.
pub struct BootstrapConfig {
    layout: ResolvedLayout,
    program_args: Vec<String>,
    settings: LauncherSettings,
    cwd: PathBuf,
    extractor: Arc<dyn ModuleExtractor>,
    init_lock: Mutex<()>,
    loaded: OnceLock<Loaded>,
}

impl BootstrapConfig {
    /// Resolve from raw arguments with default settings and the
    /// [`ExplodedModuleExtractor`].
    pub fn from_args<I, S>(raw: I, cwd: &Path) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let settings = LauncherSettings::default();
        let extractor = Arc::new(ExplodedModuleExtractor::new(&settings.config_extension));
        Self::new(raw, cwd, settings, extractor)
    }

    /// Resolve from raw arguments.
    ///
    /// Relative directory options are resolved against `cwd`.
    ///
    /// # Errors
    ///
    /// Returns an [`ArgsError`] for a directory option without a value, or a
    /// configuration error for the first required directory that is missing.
    /// Nothing is constructed on failure.
    pub fn new<I, S>(
        raw: I,
        cwd: &Path,
        settings: LauncherSettings,
        extractor: Arc<dyn ModuleExtractor>,
    ) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let args = ArgumentStore::parse(raw);
        let options = LayoutOptions {
            modules_dir: dir_option(&args, args::MODULES_DIR)?,
            webapp_dir: dir_option(&args, args::WEBAPP_DIR)?,
            config_dir: dir_option(&args, args::CONFIG_DIR)?,
        };
        let layout = ResolvedLayout::resolve(&options, cwd)?;

        Ok(Self {
            layout,
            program_args: args.parameters().to_vec(),
            settings,
            cwd: cwd.to_path_buf(),
            extractor,
            init_lock: Mutex::new(()),
            loaded: OnceLock::new(),
        })
    }

    pub fn layout(&self) -> &ResolvedLayout {
        &self.layout
    }

    pub fn modules_dir(&self) -> &Path {
        self.layout.modules_dir()
    }

    pub fn webapp_dir(&self) -> &Path {
        self.layout.webapp_dir()
    }

    pub fn lib_dir(&self) -> &Path {
        self.layout.lib_dir()
    }

    pub fn config_dir(&self) -> Option<&Path> {
        self.layout.config_dir()
    }

    /// Positional arguments, passed through unmodified.
    pub fn program_args(&self) -> &[String] {
        &self.program_args
    }

    pub fn settings(&self) -> &LauncherSettings {
        &self.settings
    }

    /// Module archives followed by library entries.
    pub fn class_load_paths(&self) -> Result<&ClassPath> {
        Ok(&self.loaded()?.class_path)
    }

    /// Configuration file URIs in load order.
    pub fn config_paths(&self) -> Result<Vec<String>> {
        let loaded = self.loaded()?;
        let module_uris = to_config_uris(&loaded.module_config_files, &self.cwd)?;
        let user_uris = to_config_uris(&loaded.user_config_files, &self.cwd)?;
        let comparator = PriorityComparator::new(&self.settings.priority_keyword);
        Ok(order_config_uris(module_uris, user_uris, &comparator))
    }

    fn loaded(&self) -> Result<&Loaded> {
        if let Some(loaded) = self.loaded.get() {
            return Ok(loaded);
        }

        // Only one thread extracts; the rest wait here and then see its result.
        let _guard = self.init_lock.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(loaded) = self.loaded.get() {
            return Ok(loaded);
        }
        let loaded = self.load()?;
        Ok(self.loaded.get_or_init(|| loaded))
    }

    fn load(&self) -> Result<Loaded> {
        let extraction = self
            .extractor
            .extract_modules(&[self.layout.modules_dir().to_path_buf()])?;
        let class_path =
            ClassPath::build(&extraction.archives, self.layout.lib_dir(), &self.cwd)?;
        let user_config_files =
            discover_config_files(self.layout.config_dir(), &self.settings.config_extension)?;

        tracing::info!(
            class_path = class_path.len(),
            module_configs = extraction.config_files.len(),
            user_configs = user_config_files.len(),
            "Bootstrap environment loaded"
        );

        Ok(Loaded {
            class_path,
            module_config_files: extraction.config_files,
            user_config_files,
        })
    }
}

impl std::fmt::Debug for BootstrapConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BootstrapConfig")
            .field("layout", &self.layout)
            .field("program_args", &self.program_args)
            .field("settings", &self.settings)
            .field("loaded", &self.loaded.get().is_some())
            .finish_non_exhaustive()
    }
}

fn dir_option(args: &ArgumentStore, name: &str) -> Result<Option<PathBuf>> {
    if !args.has_option(name) {
        return Ok(None);
    }
    match args.option(name) {
        Some(value) => Ok(Some(PathBuf::from(value))),
        None => Err(ArgsError::MissingValue {
            name: name.to_string(),
        }
        .into()),
    }
}
