//! The `rigs-stats` command: marketplace stats for the Rigs collection.

use crate::discord::embeds::stats_embed;
use crate::{DiscordError, DiscordResult, SlashCommand};
use async_trait::async_trait;
use serenity::all::{CommandInteraction, Context, CreateCommand, EditInteractionResponse};
use std::sync::Arc;
use tablebot_market::OpenSeaClient;
use tracing::{debug, error};

const TRY_AGAIN: &str = "Error fetching Rigs stats. Please try again.";

/// Shows weekly, monthly, and all-time marketplace stats for the Rigs
/// collection.
pub struct RigsStatsCommand {
    market: Arc<OpenSeaClient>,
    collection_slug: String,
}

impl RigsStatsCommand {
    /// Create the command around a shared marketplace client.
    pub fn new(market: Arc<OpenSeaClient>, collection_slug: impl Into<String>) -> Self {
        Self {
            market,
            collection_slug: collection_slug.into(),
        }
    }
}

#[async_trait]
impl SlashCommand for RigsStatsCommand {
    fn name(&self) -> &'static str {
        "rigs-stats"
    }

    fn register(&self) -> CreateCommand {
        CreateCommand::new(self.name()).description("Returns Tableland Rigs collection stats")
    }

    async fn run(&self, ctx: &Context, interaction: &CommandInteraction) -> DiscordResult<()> {
        debug!(collection = %self.collection_slug, "fetching collection stats");

        interaction.defer(&ctx.http).await.map_err(DiscordError::from)?;

        let response = match self.market.collection_stats(&self.collection_slug).await {
            Ok(stats) => EditInteractionResponse::new().embed(stats_embed(&stats)),
            Err(err) => {
                error!(collection = %self.collection_slug, error = %err, "stats lookup failed");
                EditInteractionResponse::new().content(TRY_AGAIN)
            }
        };

        interaction
            .edit_response(&ctx.http, response)
            .await
            .map(|_| ())
            .map_err(DiscordError::from)
    }
}
