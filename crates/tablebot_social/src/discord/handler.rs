//! Serenity event handler and command dispatch.

use super::CommandRegistry;
use serenity::all::{
    CommandInteraction, Context, CreateInteractionResponse, CreateInteractionResponseFollowup,
    CreateInteractionResponseMessage, EventHandler, Guild, GatewayIntents, Interaction, Ready,
    UnavailableGuild,
};
use serenity::async_trait;
use std::sync::Arc;
use tracing::{debug, error, info, warn};

/// Reply sent when a command cannot be completed for any reason the user
/// cannot fix.
const GENERIC_FAILURE: &str = "Something went wrong while running that command. Please try again.";

/// Event handler for the Tablebot Discord bot.
///
/// Holds the read-only command registry and dispatches each interaction to
/// its handler. Handler failures are isolated per invocation: they are
/// logged, answered with a generic failure reply, and never affect registry
/// state or other in-flight commands.
pub struct TablebotHandler {
    registry: Arc<CommandRegistry>,
}

impl TablebotHandler {
    /// Create a handler over a frozen command registry.
    pub fn new(registry: Arc<CommandRegistry>) -> Self {
        Self { registry }
    }

    /// Required gateway intents for the bot.
    ///
    /// Slash commands arrive over the interactions gateway, so only guild
    /// lifecycle events are subscribed.
    pub fn intents() -> GatewayIntents {
        GatewayIntents::GUILDS
    }

    /// Best-effort generic failure reply.
    ///
    /// Tries the interaction's first response slot; when the handler already
    /// acknowledged (e.g. it deferred before failing), falls back to a
    /// follow-up message. A failure to deliver even that is logged and
    /// dropped.
    async fn send_failure(ctx: &Context, interaction: &CommandInteraction) {
        let response = CreateInteractionResponse::Message(
            CreateInteractionResponseMessage::new()
                .content(GENERIC_FAILURE)
                .ephemeral(true),
        );
        if interaction.create_response(&ctx.http, response).await.is_ok() {
            return;
        }

        let followup = CreateInteractionResponseFollowup::new()
            .content(GENERIC_FAILURE)
            .ephemeral(true);
        if let Err(err) = interaction.create_followup(&ctx.http, followup).await {
            debug!(error = %err, "could not deliver failure reply");
        }
    }
}

#[async_trait]
impl EventHandler for TablebotHandler {
    async fn ready(&self, _ctx: Context, ready: Ready) {
        info!(
            user = %ready.user.tag(),
            commands = self.registry.len(),
            "bot initialized and logged in"
        );
    }

    async fn interaction_create(&self, ctx: Context, interaction: Interaction) {
        // Only chat input commands are dispatched.
        let Interaction::Command(command) = interaction else {
            return;
        };
        let name = command.data.name.clone();

        match self.registry.get(&name) {
            None => {
                warn!(command = %name, "no matching command registered");
                Self::send_failure(&ctx, &command).await;
            }
            Some(handler) => {
                debug!(command = %name, "dispatching command");
                if let Err(err) = handler.run(&ctx, &command).await {
                    error!(command = %name, error = %err, "command execution failed");
                    Self::send_failure(&ctx, &command).await;
                }
            }
        }
    }

    async fn guild_create(&self, _ctx: Context, guild: Guild, is_new: Option<bool>) {
        if is_new.unwrap_or(false) {
            info!(guild = %guild.name, guild_id = %guild.id, "joined a new guild");
        }
    }

    async fn guild_delete(&self, _ctx: Context, incomplete: UnavailableGuild, _full: Option<Guild>) {
        info!(guild_id = %incomplete.id, "left guild");
    }
}
