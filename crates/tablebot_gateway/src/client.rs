//! HTTP client for the Tableland gateway.

use crate::{ResultSet, Row, TableMetadata, TableSchema};
use reqwest::{Client, Url};
use serde::de::DeserializeOwned;
use tablebot_core::TableName;
use tablebot_error::{GatewayError, GatewayErrorKind};
use tracing::{debug, error, instrument};

/// Gateway serving the Tableland testnet.
pub const DEFAULT_BASE_URL: &str = "https://testnet.tableland.network";

/// Renderer serving TABLE NFT SVGs.
pub const RENDER_BASE_URL: &str = "https://render.tableland.xyz";

/// Client for the Tableland query gateway.
///
/// One instance is constructed at startup and shared by every handler that
/// reads from the network. Requests are independent; there is no retry,
/// timeout, or backpressure policy here.
///
/// # Examples
///
/// ```no_run
/// use tablebot_gateway::GatewayClient;
///
/// # async fn run() -> Result<(), Box<dyn std::error::Error>> {
/// let gateway = GatewayClient::default();
/// let rows = gateway.query("SELECT * FROM healthbot_80001_1").await?;
/// println!("{} rows", rows.len());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct GatewayClient {
    client: Client,
    base_url: String,
}

impl Default for GatewayClient {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

impl GatewayClient {
    /// Create a client against the given gateway base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        let base_url = base_url.trim_end_matches('/').to_owned();
        debug!(base_url = %base_url, "creating gateway client");
        Self {
            client: Client::new(),
            base_url,
        }
    }

    /// Execute a read statement and return column-keyed records.
    #[instrument(skip(self))]
    pub async fn query(&self, statement: &str) -> Result<Vec<Row>, GatewayError> {
        let url = self.query_url(statement)?;
        let set: ResultSet = self.get_json(url).await?;
        set.into_rows()
    }

    /// Fetch TABLE NFT metadata for a table.
    #[instrument(skip(self))]
    pub async fn table_metadata(
        &self,
        chain_id: u64,
        table_id: u64,
    ) -> Result<TableMetadata, GatewayError> {
        let url = self.parse_url(&self.metadata_url(chain_id, table_id))?;
        self.get_json(url).await
    }

    /// Fetch the schema of a table.
    #[instrument(skip(self))]
    pub async fn table_schema(&self, name: &TableName) -> Result<TableSchema, GatewayError> {
        let url = self.parse_url(&format!("{}/schema/{}", self.base_url, name))?;
        self.get_json(url).await
    }

    /// Permalink for a statement at the gateway, shown in replies.
    pub fn query_url(&self, statement: &str) -> Result<Url, GatewayError> {
        Url::parse_with_params(&format!("{}/query", self.base_url), &[("s", statement)]).map_err(
            |err| {
                GatewayError::new(GatewayErrorKind::Request(format!(
                    "invalid query URL: {err}"
                )))
            },
        )
    }

    /// Gateway URL of a table's TABLE NFT metadata document.
    pub fn metadata_url(&self, chain_id: u64, table_id: u64) -> String {
        format!("{}/chain/{chain_id}/tables/{table_id}", self.base_url)
    }

    /// Renderer URL of a table's TABLE NFT SVG.
    pub fn render_url(&self, chain_id: u64, table_id: u64) -> String {
        format!("{RENDER_BASE_URL}/{chain_id}/{table_id}")
    }

    fn parse_url(&self, url: &str) -> Result<Url, GatewayError> {
        Url::parse(url).map_err(|err| {
            GatewayError::new(GatewayErrorKind::Request(format!("invalid URL {url}: {err}")))
        })
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T, GatewayError> {
        let response = self.client.get(url.clone()).send().await.map_err(|err| {
            error!(url = %url, error = %err, "gateway request failed");
            GatewayError::new(GatewayErrorKind::Request(err.to_string()))
        })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!(url = %url, status = %status, body = %body, "gateway returned error status");
            return Err(GatewayError::new(GatewayErrorKind::Status {
                code: status.as_u16(),
                body,
            }));
        }

        response.json().await.map_err(|err| {
            error!(url = %url, error = %err, "failed to decode gateway response");
            GatewayError::new(GatewayErrorKind::Decode(err.to_string()))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_url_encodes_the_statement() {
        let gateway = GatewayClient::default();
        let url = gateway.query_url("SELECT * FROM healthbot_80001_1").unwrap();

        assert!(url.as_str().starts_with(DEFAULT_BASE_URL));
        let statement: Option<String> = url
            .query_pairs()
            .find(|(key, _)| key == "s")
            .map(|(_, value)| value.into_owned());
        assert_eq!(statement.as_deref(), Some("SELECT * FROM healthbot_80001_1"));
    }

    #[test]
    fn trailing_slash_is_trimmed() {
        let gateway = GatewayClient::new("https://testnet.tableland.network/");
        assert_eq!(
            gateway.metadata_url(80001, 1),
            "https://testnet.tableland.network/chain/80001/tables/1"
        );
    }

    #[test]
    fn render_url_points_at_the_svg_renderer() {
        let gateway = GatewayClient::default();
        assert_eq!(gateway.render_url(5, 42), "https://render.tableland.xyz/5/42");
    }
}
