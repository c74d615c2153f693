//! The `rigs` command: look up one Rig's metadata.

use super::integer_option;
use crate::discord::embeds::rig_embed;
use crate::{DiscordError, DiscordErrorKind, DiscordResult, SlashCommand};
use async_trait::async_trait;
use serenity::all::{
    CommandInteraction, CommandOptionType, Context, CreateCommand, CreateCommandOption,
    EditInteractionResponse,
};
use std::sync::Arc;
use tablebot_market::RigsGraphClient;
use tracing::{debug, error};

const TRY_AGAIN: &str = "Error fetching Rig metadata. Please try again.";

/// Shows a Rig's image and traits by token id.
pub struct RigsCommand {
    rigs: Arc<RigsGraphClient>,
}

impl RigsCommand {
    /// Create the command around a shared metadata client.
    pub fn new(rigs: Arc<RigsGraphClient>) -> Self {
        Self { rigs }
    }
}

#[async_trait]
impl SlashCommand for RigsCommand {
    fn name(&self) -> &'static str {
        "rigs"
    }

    fn register(&self) -> CreateCommand {
        CreateCommand::new(self.name())
            .description("Returns metadata for a Tableland Rig")
            .add_option(
                CreateCommandOption::new(CommandOptionType::Integer, "token_id", "Rig token id")
                    .required(true)
                    .min_int_value(1),
            )
    }

    async fn run(&self, ctx: &Context, interaction: &CommandInteraction) -> DiscordResult<()> {
        let token_id = integer_option(interaction, "token_id").ok_or_else(|| {
            DiscordError::new(DiscordErrorKind::MissingOption("token_id".to_owned()))
        })?;
        debug!(token_id, "looking up rig");

        interaction.defer(&ctx.http).await.map_err(DiscordError::from)?;

        // The option declares a minimum of 1; guard anyway rather than cast
        // a negative id.
        let response = if token_id < 1 {
            EditInteractionResponse::new().content("Token id must be a positive integer.")
        } else {
            match self.rigs.rig(token_id as u64).await {
                Ok(Some(rig)) => EditInteractionResponse::new().embed(rig_embed(&rig)),
                Ok(None) => EditInteractionResponse::new()
                    .content(format!("No Rig found with token id {token_id}.")),
                Err(err) => {
                    error!(token_id, error = %err, "rig lookup failed");
                    EditInteractionResponse::new().content(TRY_AGAIN)
                }
            }
        };

        interaction
            .edit_response(&ctx.http, response)
            .await
            .map(|_| ())
            .map_err(DiscordError::from)
    }
}
