//! Error types for boot-fs

use std::path::PathBuf;

/// Result type for boot-fs operations
pub type Result<T> = std::result::Result<T, Error>;

/// A required directory of the deployment is missing or is not a directory.
///
/// Every variant carries the absolute path that was expected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("missing modules directory: could not find modules directory at {path}")]
    MissingModulesDir { path: PathBuf },

    #[error(
        "missing webapp directory: could not find webapp directory at {path} \
         (tried labkeywebapp, webapp, explodedWar)"
    )]
    MissingWebappDir { path: PathBuf },

    #[error(
        "missing library directory: could not find subdirectory WEB-INF/lib in webapp, \
         expected to be at {path}"
    )]
    MissingLibDir { path: PathBuf },

    #[error("missing config directory: could not find configuration directory at {path}")]
    MissingConfigDir { path: PathBuf },
}

impl ConfigError {
    /// The path the deployment was expected to provide.
    pub fn path(&self) -> &std::path::Path {
        match self {
            Self::MissingModulesDir { path }
            | Self::MissingWebappDir { path }
            | Self::MissingLibDir { path }
            | Self::MissingConfigDir { path } => path,
        }
    }
}

/// Errors that can occur in boot-fs operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Cannot express {path} as a file URI")]
    InvalidUri { path: PathBuf },

    #[error("Failed to parse {format} settings at {path}: {message}")]
    SettingsParse {
        path: PathBuf,
        format: String,
        message: String,
    },

    #[error("Unsupported settings format: {extension}")]
    UnsupportedFormat { extension: String },
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Whether this error reports a misconfigured deployment layout.
    pub fn is_config(&self) -> bool {
        matches!(self, Self::Config(_))
    }
}
