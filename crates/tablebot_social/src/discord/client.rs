//! Discord bot client setup and lifecycle management.

use super::{CommandRegistry, DiscordError, DiscordErrorKind, TablebotHandler};
use serenity::Client;
use std::sync::Arc;
use tracing::{info, instrument};

/// Main Discord client for Tablebot.
///
/// Wraps the Serenity client with the Tablebot event handler attached.
///
/// # Example
/// ```no_run
/// use std::sync::Arc;
/// use tablebot_social::{CommandRegistry, TablebotBot};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let token = std::env::var("DISCORD_TOKEN")?;
///     let registry = Arc::new(CommandRegistry::new());
///
///     let mut bot = TablebotBot::new(token, registry).await?;
///     bot.start().await?;
///     Ok(())
/// }
/// ```
pub struct TablebotBot {
    client: Client,
}

impl TablebotBot {
    /// Build the Serenity client around a frozen command registry.
    ///
    /// # Errors
    ///
    /// Returns [`DiscordErrorKind::ConnectionFailed`] when the client cannot
    /// be constructed (e.g. a malformed token).
    #[instrument(skip(token, registry), fields(commands = registry.len()))]
    pub async fn new(
        token: String,
        registry: Arc<CommandRegistry>,
    ) -> Result<Self, DiscordError> {
        let handler = TablebotHandler::new(registry);
        let intents = TablebotHandler::intents();

        let client = Client::builder(&token, intents)
            .event_handler(handler)
            .await
            .map_err(|err| {
                DiscordError::new(DiscordErrorKind::ConnectionFailed(format!(
                    "failed to build client: {err}"
                )))
            })?;

        info!("Serenity client built");
        Ok(Self { client })
    }

    /// Connect to the gateway and run until the connection ends.
    pub async fn start(&mut self) -> Result<(), DiscordError> {
        info!("starting gateway connection");
        self.client.start().await.map_err(DiscordError::from)
    }
}
