//! Discord bot implementation on top of Serenity.
//!
//! # Architecture
//!
//! - **registry**: the `SlashCommand` trait and the immutable name-to-handler
//!   mapping built once at startup
//! - **handler**: Serenity `EventHandler` that dispatches interactions and
//!   isolates handler failures
//! - **client**: Serenity client setup and lifecycle
//! - **commands**: the `parse`, `read`, `rigs`, and `rigs-stats` commands
//! - **embeds**: reply formatting and embed construction
//! - **error**: Discord-specific error types

mod client;
mod commands;
pub mod embeds;
mod error;
mod handler;
mod registry;

pub use client::TablebotBot;
pub use commands::{ParseCommand, ReadCommand, RigsCommand, RigsStatsCommand};
pub use error::{DiscordError, DiscordErrorKind, DiscordResult};
pub use handler::TablebotHandler;
pub use registry::{CommandRegistry, SlashCommand};
