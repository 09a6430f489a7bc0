//! Bootstrap layer for the pipeline launcher
//!
//! Turns launcher arguments into everything the application framework needs
//! at startup:
//!
//! - **Layout**: modules, webapp, library and optional configuration directories
//! - **Classpath**: module archives plus every library entry, built once
//! - **Configuration order**: module and user configuration URIs, with the
//!   priority subsystem first in each group
//! - **Program arguments**: positional arguments, passed through verbatim
//!
//! # Architecture
//!
//! ```text
//!                pipeline-boot (CLI)
//!                        |
//!                    boot-core
//!                        |
//!                     boot-fs
//! ```
//!
//! # Example
//!
//! ```no_run
//! use boot_core::{BootstrapConfig, Result};
//!
//! fn example() -> Result<()> {
//!     let cwd = std::env::current_dir().map_err(|e| boot_fs::Error::io(".", e))?;
//!     let config = BootstrapConfig::from_args(["-modulesdir=/app/modules"], &cwd)?;
//!     for entry in config.class_load_paths()? {
//!         println!("{entry}");
//!     }
//!     Ok(())
//! }
//! ```

pub mod args;
pub mod bootstrap;
pub mod classpath;
pub mod discovery;
pub mod error;
pub mod extractor;
pub mod ordering;
pub mod settings;

pub use args::ArgumentStore;
pub use bootstrap::BootstrapConfig;
pub use classpath::ClassPath;
pub use discovery::discover_config_files;
pub use error::{ArgsError, Error, Result};
pub use extractor::{ExplodedModuleExtractor, ExtractionResult, ModuleExtractor};
pub use ordering::{PriorityComparator, order_config_uris, to_config_uris};
pub use settings::LauncherSettings;
