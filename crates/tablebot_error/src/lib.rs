//! Error types for the Tablebot workspace.
//!
//! This crate provides the foundation error types used throughout Tablebot.
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - All errors use `#[track_caller]` for automatic location capture
//!
//! # Examples
//!
//! ```
//! use tablebot_error::{TablebotResult, HttpError};
//!
//! fn fetch_data() -> TablebotResult<String> {
//!     Err(HttpError::new("Connection refused"))?
//! }
//!
//! match fetch_data() {
//!     Ok(data) => println!("Got: {}", data),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod http;
mod json;
mod config;
mod sql;
mod gateway;
mod market;
mod error;

pub use http::HttpError;
pub use json::JsonError;
pub use config::ConfigError;
pub use sql::{SqlError, SqlErrorKind};
pub use gateway::{GatewayError, GatewayErrorKind};
pub use market::{MarketError, MarketErrorKind};
pub use error::{TablebotError, TablebotErrorKind, TablebotResult};
