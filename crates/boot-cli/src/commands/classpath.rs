//! Classpath command implementation

use std::path::Path;

use crate::error::{CliError, Result};

/// Run the classpath command
pub fn run_classpath(
    cwd: &Path,
    raw: &[String],
    settings: Option<&Path>,
    search_path: bool,
    json: bool,
) -> Result<()> {
    let config = super::load_bootstrap(cwd, raw, settings)?;
    let class_path = config.class_load_paths()?;

    if search_path {
        let joined = class_path.to_search_path().ok_or_else(|| {
            CliError::user("A classpath entry contains the platform path separator")
        })?;
        println!("{}", joined.to_string_lossy());
    } else if json {
        println!("{}", serde_json::to_string_pretty(class_path)?);
    } else {
        for entry in class_path {
            println!("{entry}");
        }
    }
    Ok(())
}
