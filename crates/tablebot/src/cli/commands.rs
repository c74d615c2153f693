//! CLI command definitions.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Tablebot - Discord bot for the Tableland network
#[derive(Parser, Debug)]
#[command(name = "tablebot")]
#[command(about = "Discord bot for the Tableland network", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the bot and connect to the Discord gateway
    Run {
        /// Path to a TOML config file
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Register the slash commands with Discord
    Deploy {
        /// Path to a TOML config file
        #[arg(long)]
        config: Option<PathBuf>,

        /// Register globally instead of to the configured guild
        #[arg(long)]
        global: bool,
    },
}
