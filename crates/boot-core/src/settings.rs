//! Launcher settings

use serde::{Deserialize, Serialize};

/// Keyword marking configuration that must load before its siblings.
pub const DEFAULT_PRIORITY_KEYWORD: &str = "pipeline";

/// Extension of configuration files, compared case-insensitively.
pub const DEFAULT_CONFIG_EXTENSION: &str = "xml";

/// Tunables for configuration discovery and ordering.
///
/// Every field is optional in a settings file; missing fields take the
/// defaults above.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LauncherSettings {
    /// Substring (matched against lowercased URIs) identifying the priority subsystem
    pub priority_keyword: String,
    /// Configuration file extension without the leading dot
    pub config_extension: String,
}

impl Default for LauncherSettings {
    fn default() -> Self {
        Self {
            priority_keyword: DEFAULT_PRIORITY_KEYWORD.to_string(),
            config_extension: DEFAULT_CONFIG_EXTENSION.to_string(),
        }
    }
}
