use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(subcommand_value_name = "SUBCOMMAND")]
#[command(subcommand_help_heading = "Subcommands")]
pub struct Cli {
    /// Path to config file (default: `$XDG_CONFIG_HOME/pointer-brakes/config.kdl`).
    ///
    /// This can also be set with the `POINTER_BRAKES_CONFIG` environment variable. If both are
    /// set, the command line argument takes precedence.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub subcommand: Sub,
}

#[derive(Subcommand)]
pub enum Sub {
    /// Replay recorded touch samples and print the simulated motion.
    Replay {
        /// JSON-lines file with one sample per line (default: standard input).
        file: Option<PathBuf>,
        /// Print frames as JSON objects, one per line.
        #[arg(short, long)]
        json: bool,
        /// Override the configured braking deceleration.
        #[arg(long)]
        braking: Option<f64>,
    },
    /// Validate the config file.
    Validate,
}
