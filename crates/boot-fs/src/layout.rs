//! Application layout resolution
//!
//! Determines where the modules, webapp, library and (optional) configuration
//! directories of an installed application live. A layout is either fully
//! resolved or not at all; every returned path was checked to be an existing
//! directory.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::constants::{LayoutPath, WEBAPP_CANDIDATES};
use crate::path::absolutize;
use crate::{ConfigError, Result};

/// Directory overrides supplied by the caller.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LayoutOptions {
    /// Explicit modules directory, otherwise `./modules`
    pub modules_dir: Option<PathBuf>,
    /// Explicit webapp directory, otherwise probed next to the modules directory
    pub webapp_dir: Option<PathBuf>,
    /// Optional directory of user-provided configuration files
    pub config_dir: Option<PathBuf>,
}

/// The resolved on-disk layout.
///
/// ```text
/// {parent}/
/// ├── modules/              # modules_dir
/// └── labkeywebapp/         # webapp_dir (or webapp/, explodedWar/)
///     └── WEB-INF/
///         └── lib/          # lib_dir
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedLayout {
    modules_dir: PathBuf,
    webapp_dir: PathBuf,
    lib_dir: PathBuf,
    config_dir: Option<PathBuf>,
}

impl ResolvedLayout {
    /// Resolve the layout, making relative overrides absolute against `cwd`.
    ///
    /// Checks run in a fixed order (modules, webapp, library, config) and the
    /// first missing directory is reported.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] naming the expected path of the first
    /// required directory that does not exist or is not a directory.
    pub fn resolve(options: &LayoutOptions, cwd: &Path) -> Result<Self> {
        let modules_dir = match &options.modules_dir {
            Some(dir) => absolutize(dir, cwd),
            None => cwd.join(LayoutPath::ModulesDir),
        };
        if !modules_dir.is_dir() {
            return Err(ConfigError::MissingModulesDir { path: modules_dir }.into());
        }
        tracing::debug!(?modules_dir, "Resolved modules directory");

        let webapp_dir = match &options.webapp_dir {
            Some(dir) => {
                let webapp_dir = absolutize(dir, cwd);
                if !webapp_dir.is_dir() {
                    return Err(ConfigError::MissingWebappDir { path: webapp_dir }.into());
                }
                webapp_dir
            }
            None => find_webapp_dir(&modules_dir)?,
        };
        tracing::debug!(?webapp_dir, "Resolved webapp directory");

        let lib_dir = webapp_dir.join(LayoutPath::WebInf).join(LayoutPath::Lib);
        if !lib_dir.is_dir() {
            return Err(ConfigError::MissingLibDir { path: lib_dir }.into());
        }

        // An absent option means "no user configuration"; a present but
        // missing directory is an error.
        let config_dir = match &options.config_dir {
            Some(dir) => {
                let config_dir = absolutize(dir, cwd);
                if !config_dir.is_dir() {
                    return Err(ConfigError::MissingConfigDir { path: config_dir }.into());
                }
                Some(config_dir)
            }
            None => None,
        };

        Ok(Self {
            modules_dir,
            webapp_dir,
            lib_dir,
            config_dir,
        })
    }

    pub fn modules_dir(&self) -> &Path {
        &self.modules_dir
    }

    pub fn webapp_dir(&self) -> &Path {
        &self.webapp_dir
    }

    pub fn lib_dir(&self) -> &Path {
        &self.lib_dir
    }

    pub fn config_dir(&self) -> Option<&Path> {
        self.config_dir.as_deref()
    }
}

/// Probe the conventional webapp names next to the canonical modules directory.
fn find_webapp_dir(modules_dir: &Path) -> Result<PathBuf> {
    let canonical =
        dunce::canonicalize(modules_dir).map_err(|e| crate::Error::io(modules_dir, e))?;
    let parent = canonical
        .parent()
        .map(Path::to_path_buf)
        .ok_or_else(|| ConfigError::MissingWebappDir {
            path: canonical.clone(),
        })?;

    for candidate in WEBAPP_CANDIDATES {
        let dir = parent.join(candidate);
        tracing::debug!(?dir, "Probing webapp candidate");
        if dir.is_dir() {
            return Ok(dir);
        }
    }

    Err(ConfigError::MissingWebappDir { path: parent }.into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use std::fs;
    use tempfile::TempDir;

    fn mkdirs(root: &Path, dirs: &[&str]) {
        for dir in dirs {
            fs::create_dir_all(root.join(dir)).unwrap();
        }
    }

    #[test]
    fn defaults_to_modules_under_cwd() {
        let temp = TempDir::new().unwrap();
        let root = dunce::canonicalize(temp.path()).unwrap();
        mkdirs(&root, &["modules", "webapp/WEB-INF/lib"]);

        let layout = ResolvedLayout::resolve(&LayoutOptions::default(), &root).unwrap();
        assert_eq!(layout.modules_dir(), root.join("modules"));
        assert_eq!(layout.webapp_dir(), root.join("webapp"));
        assert_eq!(layout.lib_dir(), root.join("webapp/WEB-INF/lib"));
        assert_eq!(layout.config_dir(), None);
    }

    #[test]
    fn relative_overrides_are_made_absolute() {
        let temp = TempDir::new().unwrap();
        let root = dunce::canonicalize(temp.path()).unwrap();
        mkdirs(&root, &["mods", "site/WEB-INF/lib", "cfg"]);

        let options = LayoutOptions {
            modules_dir: Some("mods".into()),
            webapp_dir: Some("site".into()),
            config_dir: Some("cfg".into()),
        };
        let layout = ResolvedLayout::resolve(&options, &root).unwrap();
        assert!(layout.modules_dir().is_absolute());
        assert_eq!(layout.webapp_dir(), root.join("site"));
        assert_eq!(layout.config_dir(), Some(root.join("cfg").as_path()));
    }

    #[test]
    fn missing_library_directory_fails() {
        let temp = TempDir::new().unwrap();
        let root = dunce::canonicalize(temp.path()).unwrap();
        mkdirs(&root, &["modules", "webapp/WEB-INF"]);

        let err = ResolvedLayout::resolve(&LayoutOptions::default(), &root).unwrap_err();
        match err {
            Error::Config(ConfigError::MissingLibDir { path }) => {
                assert_eq!(path, root.join("webapp").join("WEB-INF").join("lib"));
            }
            other => panic!("expected MissingLibDir, got {other:?}"),
        }
    }

    #[test]
    fn explicit_webapp_is_not_probed() {
        let temp = TempDir::new().unwrap();
        let root = dunce::canonicalize(temp.path()).unwrap();
        mkdirs(&root, &["modules", "labkeywebapp/WEB-INF/lib"]);

        let options = LayoutOptions {
            webapp_dir: Some(root.join("elsewhere")),
            ..LayoutOptions::default()
        };
        let err = ResolvedLayout::resolve(&options, &root).unwrap_err();
        assert!(matches!(
            err,
            Error::Config(ConfigError::MissingWebappDir { ref path }) if path == &root.join("elsewhere")
        ));
    }
}
