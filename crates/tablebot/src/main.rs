//! Tablebot CLI binary.
//!
//! This binary provides command-line access to Tablebot:
//! - Run the bot against the Discord gateway
//! - Deploy the slash-command set to a guild or globally

use clap::Parser;

mod cli;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    use cli::{Cli, Commands, deploy_commands, run_bot};

    // Pull secrets from a local .env file when present.
    dotenvy::dotenv().ok();

    // Parse command-line arguments
    let cli = Cli::parse();

    // Initialize tracing
    let log_level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };

    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_target(false)
        .init();

    // Execute the requested command
    match cli.command {
        Commands::Run { config } => {
            run_bot(config.as_deref()).await?;
        }

        Commands::Deploy { config, global } => {
            deploy_commands(config.as_deref(), global).await?;
        }
    }

    Ok(())
}
