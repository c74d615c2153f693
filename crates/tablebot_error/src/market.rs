//! NFT marketplace and metadata API error types.

use derive_getters::Getters;

/// Market error variants.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MarketErrorKind {
    /// Request could not be sent or the connection failed.
    #[display("market request failed: {_0}")]
    Request(String),

    /// API answered with a non-success status code.
    #[display("market API returned status {code}: {body}")]
    Status {
        /// HTTP status code.
        code: u16,
        /// Response body, if any.
        body: String,
    },

    /// Response body could not be decoded into the expected shape.
    #[display("failed to decode market response: {_0}")]
    Decode(String),

    /// GraphQL endpoint returned errors in the response envelope.
    #[display("GraphQL error: {_0}")]
    Graph(String),
}

/// Market error with source location tracking.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error, Getters)]
#[display("Market Error: {} at line {} in {}", kind, line, file)]
pub struct MarketError {
    kind: MarketErrorKind,
    line: u32,
    file: &'static str,
}

impl MarketError {
    /// Create a new MarketError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: MarketErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
