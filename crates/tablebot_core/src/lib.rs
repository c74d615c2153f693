//! Core domain types and pure logic for Tablebot.
//!
//! Everything in this crate is synchronous, deterministic, and free of I/O:
//! - `highlight` - marks a reported syntax-error offset inside a statement
//! - `chain` - the registry of chains the Tableland network runs on
//! - `table` - parsing of `{prefix}_{chainId}_{tableId}` table names
//! - `color` - the TABLE NFT row-count color scale used for embeds

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod chain;
mod color;
mod highlight;
mod table;

pub use chain::{Chain, SUPPORTED_CHAINS};
pub use color::row_count_color;
pub use highlight::{ERROR_MARKER, error_position, highlight_error_position};
pub use table::TableName;
