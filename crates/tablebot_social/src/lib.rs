//! Discord integration for Tablebot.
//!
//! This crate provides the Discord-facing layer: the slash-command trait and
//! registry, the Serenity event handler that dispatches interactions, the
//! command implementations, and embed construction.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod discord;

pub use discord::{
    CommandRegistry, DiscordError, DiscordErrorKind, DiscordResult, ParseCommand, ReadCommand,
    RigsCommand, RigsStatsCommand, SlashCommand, TablebotBot, TablebotHandler, embeds,
};
