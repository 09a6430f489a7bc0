//! Error types for boot-core

/// Result type for boot-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Malformed launcher arguments
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ArgsError {
    /// A directory option was given without `=value`
    #[error("Option -{name} requires a value (-{name}=<path>)")]
    MissingValue { name: String },
}

/// Errors that can occur in boot-core operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Launcher arguments could not be interpreted
    #[error(transparent)]
    Args(#[from] ArgsError),

    /// Module extraction failed
    #[error("Module extraction failed: {message}")]
    Extraction { message: String },

    /// Filesystem error from boot-fs, including layout configuration errors
    #[error(transparent)]
    Fs(#[from] boot_fs::Error),
}

impl Error {
    /// Whether this error reports a misconfigured deployment layout.
    pub fn is_config(&self) -> bool {
        matches!(self, Self::Fs(e) if e.is_config())
    }
}
