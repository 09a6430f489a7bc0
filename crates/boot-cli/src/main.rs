//! Pipeline bootstrap CLI
//!
//! Resolves the runtime environment of a modular application from launcher
//! arguments. This is the only place that reads the process arguments and
//! the current directory.

mod cli;
mod commands;
mod error;

use std::path::Path;

use clap::Parser;
use colored::Colorize;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use cli::{Cli, Commands};
use error::Result;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    // Setup tracing if verbose
    if cli.verbose {
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::DEBUG)
            .with_target(true)
            .with_writer(std::io::stderr)
            .finish();
        if tracing::subscriber::set_global_default(subscriber).is_err() {
            eprintln!("{}: tracing subscriber already set", "warning".yellow().bold());
        }
        tracing::debug!("Verbose mode enabled");
    }

    let cwd = std::env::current_dir()?;
    let command = cli.command.unwrap_or(Commands::Plan {
        launch: cli::LaunchArgs::default(),
    });
    execute_command(&cwd, command, cli.settings.as_deref(), cli.json)
}

fn execute_command(cwd: &Path, cmd: Commands, settings: Option<&Path>, json: bool) -> Result<()> {
    match cmd {
        Commands::Layout { launch } => commands::run_layout(cwd, &launch.raw, settings, json),
        Commands::Classpath {
            search_path,
            launch,
        } => commands::run_classpath(cwd, &launch.raw, settings, search_path, json),
        Commands::Config { launch } => commands::run_config(cwd, &launch.raw, settings, json),
        Commands::Plan { launch } => commands::run_plan(cwd, &launch.raw, settings, json),
    }
}
