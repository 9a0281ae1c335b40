//! CLI commands implementation.
//!
//! This module contains the CLI parser and dispatches to command-specific modules.

mod annotate;
mod fields;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use trialbot::config::Settings;

#[derive(Parser)]
#[command(name = "trialbot")]
#[command(about = "Clinical trial study-characteristics annotation system")]
#[command(version)]
pub struct Cli {
    /// Classifier directory (default: robots/study_chars)
    #[arg(short, long, global = true, env = "TRIALBOT_MODELS")]
    models: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Check if verbose mode is enabled (for early logging setup).
pub fn is_verbose() -> bool {
    std::env::args().any(|arg| arg == "-v" || arg == "--verbose")
}

#[derive(Subcommand)]
enum Commands {
    /// Annotate a trial report and print the marginalia envelope as JSON
    Annotate {
        /// Path to the report text file
        file: PathBuf,

        /// Print compact JSON instead of pretty-printed
        #[arg(long)]
        compact: bool,
    },

    /// List the predicted study characteristics and their classifier files
    Fields,
}

pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let settings = Settings::resolve(cli.models);

    match cli.command {
        Commands::Annotate { file, compact } => annotate::cmd_annotate(&settings, &file, compact),
        Commands::Fields => fields::cmd_fields(),
    }
}
