//! Reply formatting and embed construction.
//!
//! Pure builders: everything here turns already-fetched data into Discord
//! markdown and embeds, so it can be exercised without a gateway connection.

use serenity::all::{CreateEmbed, CreateEmbedAuthor, CreateEmbedFooter, Timestamp};
use serde_json::Value;
use tablebot_core::row_count_color;
use tablebot_error::GatewayError;
use tablebot_gateway::{GatewayClient, Row, TableMetadata, TableSchema};
use tablebot_market::{Rig, RigsStats};
use tablebot_parser::ReadStatement;

const FOOTER_TEXT: &str = "❤️ TableBot";
const FOOTER_ICON_URL: &str =
    "https://bafkreihrg4iddyor2ei6mxxdy6hqnjsmquzcnllvoqndfb636i5s4yinma.ipfs.nftstorage.link/";

/// Embed field values cap out at 1024 characters; leave room for the code
/// fence around clipped content.
const MAX_FIELD_CHARS: usize = 1000;

/// Wrap content in a Discord code block.
pub fn code_block(content: &str) -> String {
    format!("```\n{content}\n```")
}

/// Wrap content in a JSON-highlighted Discord code block.
pub fn code_block_json(content: &str) -> String {
    format!("```json\n{content}\n```")
}

/// Clip text to at most `max_chars` characters.
fn clip(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_owned();
    }
    let mut clipped: String = text.chars().take(max_chars - 1).collect();
    clipped.push('…');
    clipped
}

/// The shared TableBot footer.
fn footer() -> CreateEmbedFooter {
    CreateEmbedFooter::new(FOOTER_TEXT).icon_url(FOOTER_ICON_URL)
}

/// Embed describing a table and a sample of a read query's results.
///
/// # Errors
///
/// Returns a [`GatewayError`] when the metadata lacks its creation
/// timestamp or the statement cannot form a gateway permalink.
pub fn table_embed(
    read: &ReadStatement,
    rows: &[Row],
    metadata: &TableMetadata,
    schema: &TableSchema,
    gateway: &GatewayClient,
) -> Result<CreateEmbed, GatewayError> {
    let chain_id = read.table().chain_id();
    let table_id = read.table().table_id();
    let row_count = rows.len();
    let column_count = schema.columns.len();
    let created = metadata.created_at()?;
    let query_url = gateway.query_url(read.statement())?;

    let sample = rows
        .first()
        .map(|row| serde_json::to_string_pretty(row).unwrap_or_else(|_| "{}".to_owned()))
        .unwrap_or_else(|| "(no rows)".to_owned());

    Ok(CreateEmbed::new()
        .color(row_count_color(row_count as u64))
        .title("See more at the Tableland gateway")
        .url(query_url.to_string())
        .author(
            CreateEmbedAuthor::new(read.table().to_string())
                .url(gateway.metadata_url(chain_id, table_id)),
        )
        .field("Data Sample", code_block_json(&clip(&sample, MAX_FIELD_CHARS)), false)
        .field(
            "Table Schema",
            code_block(&clip(&schema.describe(), MAX_FIELD_CHARS)),
            false,
        )
        .field("# Rows", row_count.to_string(), true)
        .field("# Columns", column_count.to_string(), true)
        .field("Created At", format!("<t:{created}:D>"), true)
        .field("Chain", read.chain().phrase(), true)
        .field(
            "\u{200b}",
            format!(
                "[See the TABLE NFT]({})",
                gateway.render_url(chain_id, table_id)
            ),
            false,
        )
        .footer(footer())
        .timestamp(Timestamp::now()))
}

/// Embed describing one Rig token.
pub fn rig_embed(rig: &Rig) -> CreateEmbed {
    let mut embed = CreateEmbed::new()
        .title(format!("Rig #{}", rig.id))
        .footer(footer())
        .timestamp(Timestamp::now());

    if let Some(url) = rig.image_url() {
        embed = embed.image(url);
    }
    for attribute in &rig.attributes {
        embed = embed.field(&attribute.trait_type, attribute_value(&attribute.value), true);
    }
    embed
}

/// Embed with Rigs collection marketplace stats, in the total / monthly /
/// weekly layout.
pub fn stats_embed(stats: &RigsStats) -> CreateEmbed {
    CreateEmbed::new()
        .title("Rigs Collection Stats")
        .field("\u{200b}", "*Total, all-time stats & trends*", false)
        .field("Volume", eth(stats.total.volume), true)
        .field("Floor Price", eth(stats.total.floor), true)
        .field("Avg. Price", eth(stats.total.price), true)
        .field("# Sales", format!("{:.0}", stats.total.sales), true)
        .field("# Owners", stats.total.owners.to_string(), true)
        .field("Market Cap", format!("{:.0} ETH", stats.total.market_cap), true)
        .field("\u{200b}", "*Monthly stats & trends*", false)
        .field("Volume", eth(stats.monthly.volume), true)
        .field("Change", eth(stats.monthly.change), true)
        .field("# Sales", format!("{:.0}", stats.monthly.sales), true)
        .field("Avg. Price", eth(stats.monthly.price), true)
        .field("\u{200b}", "*Weekly stats & trends*", false)
        .field("Volume", eth(stats.weekly.volume), true)
        .field("Change", eth(stats.weekly.change), true)
        .field("# Sales", format!("{:.0}", stats.weekly.sales), true)
        .field("Avg. Price", eth(stats.weekly.price), true)
        .footer(footer())
        .timestamp(Timestamp::now())
}

fn eth(value: f64) -> String {
    format!("{value:.2} ETH")
}

/// Render a trait value without JSON quoting noise.
fn attribute_value(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}
