//! NFT marketplace and metadata collaborators for Tablebot.
//!
//! Two plain request/response JSON clients:
//! - [`OpenSeaClient`] fetches marketplace stats for the Rigs collection
//! - [`RigsGraphClient`] looks up individual Rig metadata over GraphQL

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod opensea;
mod rigs;

pub use opensea::{
    CollectionStats, OPENSEA_BASE_URL, OpenSeaClient, RigsStats, TotalStats, WindowStats,
};
pub use rigs::{Rig, RigAttribute, RigsGraphClient};
