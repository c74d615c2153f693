//! Tablebot - a Discord bot for the Tableland network.
//!
//! Tablebot exposes a handful of slash commands that forward user input to
//! Tableland's collaborators and render the results as formatted replies:
//!
//! - `/parse` - validate and normalize a SQL statement, highlighting the
//!   reported error position when it is invalid
//! - `/read` - run a read query through the query gateway and describe the
//!   table it reads from
//! - `/rigs` - look up one Rig's metadata
//! - `/rigs-stats` - marketplace stats for the Rigs collection
//!
//! # Architecture
//!
//! Tablebot is organized as a workspace with focused crates:
//!
//! - `tablebot_error` - error types
//! - `tablebot_core` - pure domain logic (error-position highlighting,
//!   chain registry, table names, embed colors)
//! - `tablebot_parser` - SQL validation and normalization
//! - `tablebot_gateway` - Tableland query gateway client
//! - `tablebot_market` - marketplace stats and Rig metadata clients
//! - `tablebot_social` - the Discord layer (registry, dispatch, commands)
//!
//! This crate re-exports everything for convenience and carries the binary.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;

pub use config::{BotConfig, DiscordConfig, GatewayConfig, MarketConfig};

pub use tablebot_core::{
    Chain, ERROR_MARKER, SUPPORTED_CHAINS, TableName, error_position, highlight_error_position,
    row_count_color,
};
pub use tablebot_error::{
    ConfigError, GatewayError, GatewayErrorKind, HttpError, JsonError, MarketError,
    MarketErrorKind, SqlError, SqlErrorKind, TablebotError, TablebotErrorKind, TablebotResult,
};
pub use tablebot_gateway::{GatewayClient, Row, TableMetadata, TableSchema};
pub use tablebot_market::{OpenSeaClient, Rig, RigsGraphClient, RigsStats};
pub use tablebot_parser::{
    NormalizedStatements, ReadStatement, StatementKind, StatementValidator, TablelandParser,
};
pub use tablebot_social::{
    CommandRegistry, DiscordError, DiscordErrorKind, DiscordResult, ParseCommand, ReadCommand,
    RigsCommand, RigsStatsCommand, SlashCommand, TablebotBot, TablebotHandler,
};
