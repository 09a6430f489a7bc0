//! Layout command implementation

use std::path::Path;

use colored::Colorize;

use crate::error::Result;

/// Run the layout command
pub fn run_layout(cwd: &Path, raw: &[String], settings: Option<&Path>, json: bool) -> Result<()> {
    let config = super::load_bootstrap(cwd, raw, settings)?;

    if json {
        println!("{}", serde_json::to_string_pretty(config.layout())?);
        return Ok(());
    }

    println!("{}", "Layout".bold());
    println!();
    println!("{}:  {}", "Modules".dimmed(), config.modules_dir().display());
    println!("{}:   {}", "Webapp".dimmed(), config.webapp_dir().display());
    println!("{}:  {}", "Library".dimmed(), config.lib_dir().display());
    match config.config_dir() {
        Some(dir) => println!("{}:   {}", "Config".dimmed(), dir.display()),
        None => println!("{}:   {}", "Config".dimmed(), "None".dimmed()),
    }
    Ok(())
}
