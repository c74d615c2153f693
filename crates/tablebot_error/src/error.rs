//! Top-level error wrapper types.

use crate::{ConfigError, GatewayError, HttpError, JsonError, MarketError, SqlError};

/// This is the foundation error enum. One variant per failing subsystem.
///
/// # Examples
///
/// ```
/// use tablebot_error::{TablebotError, HttpError};
///
/// let http_err = HttpError::new("Connection failed");
/// let err: TablebotError = http_err.into();
/// assert!(format!("{}", err).contains("HTTP Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum TablebotErrorKind {
    /// HTTP error
    #[from(HttpError)]
    Http(HttpError),
    /// JSON serialization/deserialization error
    #[from(JsonError)]
    Json(JsonError),
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
    /// SQL validation error
    #[from(SqlError)]
    Sql(SqlError),
    /// Tableland gateway error
    #[from(GatewayError)]
    Gateway(GatewayError),
    /// NFT marketplace/metadata API error
    #[from(MarketError)]
    Market(MarketError),
}

/// Tablebot error with kind discrimination.
///
/// # Examples
///
/// ```
/// use tablebot_error::{TablebotResult, ConfigError};
///
/// fn might_fail() -> TablebotResult<()> {
///     Err(ConfigError::new("Missing field"))?
/// }
///
/// match might_fail() {
///     Ok(_) => println!("Success"),
///     Err(e) => println!("Error: {}", e),
/// }
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Tablebot Error: {}", _0)]
pub struct TablebotError(Box<TablebotErrorKind>);

impl TablebotError {
    /// Create a new error from a kind.
    pub fn new(kind: TablebotErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &TablebotErrorKind {
        &self.0
    }
}

// Generic From implementation for any type that converts to TablebotErrorKind
impl<T> From<T> for TablebotError
where
    T: Into<TablebotErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Tablebot operations.
pub type TablebotResult<T> = std::result::Result<T, TablebotError>;
