//! Slash command implementations.

mod parse;
mod read;
mod rigs;
mod rigs_stats;

pub use parse::ParseCommand;
pub use read::ReadCommand;
pub use rigs::RigsCommand;
pub use rigs_stats::RigsStatsCommand;

use serenity::all::{CommandInteraction, ResolvedValue};

/// Extract a required string option from the interaction payload.
pub(crate) fn string_option<'a>(
    interaction: &'a CommandInteraction,
    name: &str,
) -> Option<&'a str> {
    interaction.data.options().into_iter().find_map(|option| {
        if option.name != name {
            return None;
        }
        match option.value {
            ResolvedValue::String(value) => Some(value),
            _ => None,
        }
    })
}

/// Extract a required integer option from the interaction payload.
pub(crate) fn integer_option(interaction: &CommandInteraction, name: &str) -> Option<i64> {
    interaction.data.options().into_iter().find_map(|option| {
        if option.name != name {
            return None;
        }
        match option.value {
            ResolvedValue::Integer(value) => Some(value),
            _ => None,
        }
    })
}
