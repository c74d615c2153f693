//! The `read` command: run a read query and describe its table.

use super::string_option;
use crate::discord::embeds::{code_block, table_embed};
use crate::{DiscordError, DiscordErrorKind, DiscordResult, SlashCommand};
use async_trait::async_trait;
use serenity::all::{
    CommandInteraction, CommandOptionType, Context, CreateCommand, CreateCommandOption,
    EditInteractionResponse,
};
use std::sync::Arc;
use tablebot_core::highlight_error_position;
use tablebot_error::{GatewayError, GatewayErrorKind};
use tablebot_gateway::{GatewayClient, Row, TableMetadata, TableSchema};
use tablebot_parser::{ReadStatement, StatementValidator};
use tracing::{debug, error};

const TRY_AGAIN: &str = "Error reaching the Tableland network. Please try again.";
const INTERNAL: &str = "Something unexpected went wrong. Please try again later.";

/// Queries the Tableland network across any supported chain and replies
/// with a data sample and table details.
pub struct ReadCommand {
    validator: Arc<dyn StatementValidator>,
    gateway: Arc<GatewayClient>,
}

/// Everything the reply embed needs from the gateway.
struct TableReport {
    rows: Vec<Row>,
    metadata: TableMetadata,
    schema: TableSchema,
}

impl ReadCommand {
    /// Create the command around shared parser and gateway handles.
    pub fn new(validator: Arc<dyn StatementValidator>, gateway: Arc<GatewayClient>) -> Self {
        Self { validator, gateway }
    }

    async fn fetch(&self, read: &ReadStatement) -> Result<TableReport, GatewayError> {
        let rows = self.gateway.query(read.statement()).await?;
        let metadata = self
            .gateway
            .table_metadata(read.table().chain_id(), read.table().table_id())
            .await?;
        let schema = self.gateway.table_schema(read.table()).await?;
        Ok(TableReport {
            rows,
            metadata,
            schema,
        })
    }

    async fn edit(
        ctx: &Context,
        interaction: &CommandInteraction,
        response: EditInteractionResponse,
    ) -> DiscordResult<()> {
        interaction
            .edit_response(&ctx.http, response)
            .await
            .map(|_| ())
            .map_err(DiscordError::from)
    }
}

#[async_trait]
impl SlashCommand for ReadCommand {
    fn name(&self) -> &'static str {
        "read"
    }

    fn register(&self) -> CreateCommand {
        CreateCommand::new(self.name())
            .description("Returns the results from a Tableland read query")
            .add_option(
                CreateCommandOption::new(
                    CommandOptionType::String,
                    "statement",
                    "A SQL compliant SELECT statement",
                )
                .required(true),
            )
    }

    async fn run(&self, ctx: &Context, interaction: &CommandInteraction) -> DiscordResult<()> {
        let statement = string_option(interaction, "statement").ok_or_else(|| {
            DiscordError::new(DiscordErrorKind::MissingOption("statement".to_owned()))
        })?;
        debug!(statement, "running read query");

        // The gateway round-trips take a while; acknowledge immediately.
        interaction.defer(&ctx.http).await.map_err(DiscordError::from)?;

        let read = match self.validator.validate_read(statement) {
            Ok(read) => read,
            Err(err) => {
                let diagnostic = err.diagnostic();
                let marked = highlight_error_position(&diagnostic, statement);
                let content = format!("**Invalid:** {diagnostic}{}", code_block(&marked));
                return Self::edit(ctx, interaction, EditInteractionResponse::new().content(content))
                    .await;
            }
        };

        let report = match self.fetch(&read).await {
            Ok(report) => report,
            Err(err) => {
                error!(table = %read.table(), error = %err, "gateway lookup failed");
                let content = match err.kind() {
                    GatewayErrorKind::Contract(_) => INTERNAL,
                    _ => TRY_AGAIN,
                };
                return Self::edit(ctx, interaction, EditInteractionResponse::new().content(content))
                    .await;
            }
        };

        let embed = match table_embed(
            &read,
            &report.rows,
            &report.metadata,
            &report.schema,
            &self.gateway,
        ) {
            Ok(embed) => embed,
            Err(err) => {
                error!(table = %read.table(), error = %err, "reply construction failed");
                return Self::edit(ctx, interaction, EditInteractionResponse::new().content(INTERNAL))
                    .await;
            }
        };

        let content = format!(
            "**Query:**{}\n**Response:**",
            code_block(read.statement())
        );
        Self::edit(
            ctx,
            interaction,
            EditInteractionResponse::new().content(content).embed(embed),
        )
        .await
    }
}
