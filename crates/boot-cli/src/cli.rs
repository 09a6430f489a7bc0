//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Pipeline bootstrap - resolve the runtime environment of a modular application
#[derive(Parser, Debug)]
#[command(name = "pipeline-boot")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output as JSON for scripting
    #[arg(long, global = true)]
    pub json: bool,

    /// Settings file (TOML, JSON or YAML) overriding the priority keyword
    /// and configuration extension
    #[arg(long, global = true, env = "PIPELINE_BOOT_SETTINGS")]
    pub settings: Option<PathBuf>,

    /// The command to run
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Launcher arguments, passed after `--`.
///
/// Examples:
///   pipeline-boot plan -- -modulesdir=/app/modules -configdir=/app/cfg job.xml
#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct LaunchArgs {
    /// Raw launcher arguments (-modulesdir=, -webappdir=, -configdir=, program arguments)
    #[arg(last = true)]
    pub raw: Vec<String>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Show the resolved modules, webapp, library and config directories
    Layout {
        #[command(flatten)]
        launch: LaunchArgs,
    },

    /// Show the classpath: module archives, then library entries
    Classpath {
        /// Print a single platform search path instead of one URL per line
        #[arg(long)]
        search_path: bool,

        #[command(flatten)]
        launch: LaunchArgs,
    },

    /// Show configuration file URIs in load order
    Config {
        #[command(flatten)]
        launch: LaunchArgs,
    },

    /// Show everything the application would be started with
    Plan {
        #[command(flatten)]
        launch: LaunchArgs,
    },
}
