//! Tableland query gateway client.
//!
//! The gateway executes validated read statements against the table network
//! and serves TABLE NFT metadata and table schemas over plain HTTPS. This
//! crate wraps those three endpoints behind [`GatewayClient`] and reshapes
//! the column/row response into column-keyed records.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod client;
mod models;

pub use client::{DEFAULT_BASE_URL, GatewayClient, RENDER_BASE_URL};
pub use models::{
    MetadataAttribute, ResultSet, ResultSetColumn, Row, SchemaColumn, TableMetadata, TableSchema,
};
