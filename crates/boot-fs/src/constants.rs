//! Well-known directory names of an installed application.

use std::path::Path;

/// Conventional directory names the bootstrap looks for on disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutPath {
    /// The `modules` directory, default location relative to the working directory
    ModulesDir,
    /// The `labkeywebapp` directory (installer layout)
    LabKeyWebapp,
    /// The `webapp` directory (source checkout layout)
    Webapp,
    /// The `explodedWar` directory (build output layout)
    ExplodedWar,
    /// The `WEB-INF` directory inside a webapp
    WebInf,
    /// The `lib` directory inside `WEB-INF`
    Lib,
}

/// Webapp directory names probed next to the modules directory, in order.
pub const WEBAPP_CANDIDATES: [LayoutPath; 3] = [
    LayoutPath::LabKeyWebapp,
    LayoutPath::Webapp,
    LayoutPath::ExplodedWar,
];

impl LayoutPath {
    /// Get the string representation of the path.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ModulesDir => "modules",
            Self::LabKeyWebapp => "labkeywebapp",
            Self::Webapp => "webapp",
            Self::ExplodedWar => "explodedWar",
            Self::WebInf => "WEB-INF",
            Self::Lib => "lib",
        }
    }
}

impl AsRef<Path> for LayoutPath {
    fn as_ref(&self) -> &Path {
        Path::new(self.as_str())
    }
}

impl AsRef<str> for LayoutPath {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl std::fmt::Display for LayoutPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
