//! Config command implementation

use std::path::Path;

use crate::error::Result;

/// Run the config command
pub fn run_config(cwd: &Path, raw: &[String], settings: Option<&Path>, json: bool) -> Result<()> {
    let config = super::load_bootstrap(cwd, raw, settings)?;
    let paths = config.config_paths()?;

    if json {
        println!("{}", serde_json::to_string_pretty(&paths)?);
    } else {
        for path in &paths {
            println!("{path}");
        }
    }
    Ok(())
}
