//! The `parse` command: validate a statement without executing it.

use super::string_option;
use crate::discord::embeds::code_block;
use crate::{DiscordError, DiscordErrorKind, DiscordResult, SlashCommand};
use async_trait::async_trait;
use serenity::all::{
    CommandInteraction, CommandOptionType, Context, CreateCommand, CreateCommandOption,
    CreateInteractionResponse, CreateInteractionResponseMessage,
};
use std::sync::Arc;
use tablebot_core::highlight_error_position;
use tablebot_parser::StatementValidator;
use tracing::debug;

/// Checks whether a statement is valid Tableland SQL and shows where the
/// parser stopped when it is not.
pub struct ParseCommand {
    validator: Arc<dyn StatementValidator>,
}

impl ParseCommand {
    /// Create the command around a shared parser handle.
    pub fn new(validator: Arc<dyn StatementValidator>) -> Self {
        Self { validator }
    }

    /// The reply body for a statement, valid or not.
    fn reply_content(&self, statement: &str) -> String {
        match self.validator.normalize(statement) {
            Ok(normalized) => format!(
                "**Valid Tableland SQL!** Classified as a {} statement.{}",
                normalized.kind(),
                code_block(&normalized.statements().join(";\n"))
            ),
            Err(err) => {
                let diagnostic = err.diagnostic();
                let marked = highlight_error_position(&diagnostic, statement);
                format!("**Invalid:** {diagnostic}{}", code_block(&marked))
            }
        }
    }
}

#[async_trait]
impl SlashCommand for ParseCommand {
    fn name(&self) -> &'static str {
        "parse"
    }

    fn register(&self) -> CreateCommand {
        CreateCommand::new(self.name())
            .description("Returns whether or not a SQL statement is valid")
            .add_option(
                CreateCommandOption::new(
                    CommandOptionType::String,
                    "statement",
                    "An attempted SQL read or mutating query",
                )
                .required(true),
            )
    }

    async fn run(&self, ctx: &Context, interaction: &CommandInteraction) -> DiscordResult<()> {
        let statement = string_option(interaction, "statement").ok_or_else(|| {
            DiscordError::new(DiscordErrorKind::MissingOption("statement".to_owned()))
        })?;
        debug!(statement, "parsing statement");

        let message = CreateInteractionResponseMessage::new()
            .content(self.reply_content(statement))
            .ephemeral(true);
        interaction
            .create_response(&ctx.http, CreateInteractionResponse::Message(message))
            .await
            .map_err(DiscordError::from)
    }
}
