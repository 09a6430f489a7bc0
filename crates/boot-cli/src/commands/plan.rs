//! Plan command implementation

use std::path::Path;

use boot_core::{BootstrapConfig, ClassPath};
use boot_fs::ResolvedLayout;
use colored::Colorize;
use serde::Serialize;

use crate::error::Result;

/// Everything the application would be started with.
#[derive(Debug, Serialize)]
pub struct LaunchPlan<'a> {
    pub layout: &'a ResolvedLayout,
    pub class_path: &'a ClassPath,
    pub config_paths: Vec<String>,
    pub program_args: &'a [String],
}

impl<'a> LaunchPlan<'a> {
    pub fn from_config(config: &'a BootstrapConfig) -> Result<Self> {
        Ok(Self {
            layout: config.layout(),
            class_path: config.class_load_paths()?,
            config_paths: config.config_paths()?,
            program_args: config.program_args(),
        })
    }
}

/// Run the plan command
pub fn run_plan(cwd: &Path, raw: &[String], settings: Option<&Path>, json: bool) -> Result<()> {
    let config = super::load_bootstrap(cwd, raw, settings)?;
    let plan = LaunchPlan::from_config(&config)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&plan)?);
        return Ok(());
    }

    println!("{}", "Launch Plan".bold());
    println!();
    println!("{}:  {}", "Modules".dimmed(), plan.layout.modules_dir().display());
    println!("{}:   {}", "Webapp".dimmed(), plan.layout.webapp_dir().display());
    println!("{}:  {}", "Library".dimmed(), plan.layout.lib_dir().display());
    if let Some(dir) = plan.layout.config_dir() {
        println!("{}:   {}", "Config".dimmed(), dir.display());
    }
    println!();

    println!("{} ({}):", "Classpath".bold(), plan.class_path.len());
    for entry in plan.class_path {
        println!("  {entry}");
    }
    println!();

    println!("{} ({}):", "Configuration".bold(), plan.config_paths.len());
    if plan.config_paths.is_empty() {
        println!("  {}", "None".dimmed());
    }
    for path in &plan.config_paths {
        println!("  {path}");
    }
    println!();

    println!("{}:", "Program Arguments".bold());
    if plan.program_args.is_empty() {
        println!("  {}", "None".dimmed());
    }
    for arg in plan.program_args {
        println!("  {arg}");
    }
    Ok(())
}
