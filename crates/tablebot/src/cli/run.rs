//! The `run` command handler: start the bot.

use super::wiring::build_registry;
use std::path::Path;
use tablebot::{BotConfig, TablebotBot};
use tracing::info;

/// Load configuration, build the command registry, and run the gateway
/// connection until it ends.
pub async fn run_bot(config_path: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    let config = BotConfig::load(config_path)?;
    let token = BotConfig::discord_token()?;
    let registry = build_registry(&config)?;

    info!(
        gateway = %config.gateway.base_url,
        commands = registry.len(),
        "starting Tablebot"
    );

    let mut bot = TablebotBot::new(token, registry).await?;
    bot.start().await?;
    Ok(())
}
