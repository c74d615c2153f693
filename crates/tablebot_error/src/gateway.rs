//! Tableland gateway error types.

use derive_getters::Getters;

/// Gateway error variants.
///
/// Represents failure modes of the HTTP query gateway: transport failures,
/// non-success statuses, undecodable bodies, and responses that violate the
/// gateway's documented shape.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum GatewayErrorKind {
    /// Request could not be sent or the connection failed.
    #[display("gateway request failed: {_0}")]
    Request(String),

    /// Gateway answered with a non-success status code.
    #[display("gateway returned status {code}: {body}")]
    Status {
        /// HTTP status code.
        code: u16,
        /// Response body, if any.
        body: String,
    },

    /// Response body could not be decoded into the expected shape.
    #[display("failed to decode gateway response: {_0}")]
    Decode(String),

    /// Response decoded but violated the gateway contract.
    #[display("gateway response missing expected field: {_0}")]
    Contract(String),
}

/// Gateway error with source location tracking.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error, Getters)]
#[display("Gateway Error: {} at line {} in {}", kind, line, file)]
pub struct GatewayError {
    kind: GatewayErrorKind,
    line: u32,
    file: &'static str,
}

impl GatewayError {
    /// Create a new GatewayError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: GatewayErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
