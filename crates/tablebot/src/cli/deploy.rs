//! The `deploy` command handler: register slash commands with Discord.

use super::wiring::build_registry;
use serenity::all::{Command, GuildId, Http};
use std::path::Path;
use tablebot::BotConfig;
use tracing::info;

/// Fully refresh the application's slash commands, for one guild or
/// globally. Guild registration is immediate; global registration can take
/// up to an hour to propagate.
pub async fn deploy_commands(
    config_path: Option<&Path>,
    global: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = BotConfig::load(config_path)?;
    let token = BotConfig::discord_token()?;
    let registry = build_registry(&config)?;

    let http = Http::new(&token);
    let commands = registry.create_commands();
    info!(count = commands.len(), "refreshing application commands");

    match (global, config.discord.guild_id) {
        (false, Some(guild_id)) => {
            let created = GuildId::new(guild_id).set_commands(&http, commands).await?;
            info!(count = created.len(), guild_id, "registered guild commands");
        }
        _ => {
            let created = Command::set_global_commands(&http, commands).await?;
            info!(count = created.len(), "registered global commands");
        }
    }

    Ok(())
}
