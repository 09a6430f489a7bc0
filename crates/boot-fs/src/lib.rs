//! Filesystem layer for the pipeline bootstrap
//!
//! Resolves the on-disk layout of an installed application (modules, webapp,
//! library and optional configuration directories) and provides the small
//! listing and path helpers the bootstrap builds on.

pub mod constants;
pub mod error;
pub mod layout;
pub mod listing;
pub mod path;
pub mod settings;

pub use constants::{LayoutPath, WEBAPP_CANDIDATES};
pub use error::{ConfigError, Error, Result};
pub use layout::{LayoutOptions, ResolvedLayout};
pub use listing::{has_extension, is_directory, list_entries};
pub use path::{absolutize, to_file_url};
pub use settings::SettingsStore;
