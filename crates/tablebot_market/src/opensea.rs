//! OpenSea collection-stats client.

use reqwest::Client;
use serde::Deserialize;
use tablebot_error::{MarketError, MarketErrorKind};
use tracing::{debug, error, instrument};

/// OpenSea API base URL.
pub const OPENSEA_BASE_URL: &str = "https://api.opensea.io";

/// Client for OpenSea's collection stats endpoint.
#[derive(Debug, Clone)]
pub struct OpenSeaClient {
    client: Client,
    base_url: String,
    api_key: Option<String>,
}

impl OpenSeaClient {
    /// Create a client. The API key is optional; the public stats endpoint
    /// serves unauthenticated requests at a lower rate.
    pub fn new(api_key: Option<String>) -> Self {
        Self::with_base_url(OPENSEA_BASE_URL, api_key)
    }

    /// Create a client against a non-default base URL.
    pub fn with_base_url(base_url: impl Into<String>, api_key: Option<String>) -> Self {
        let base_url = base_url.into();
        let base_url = base_url.trim_end_matches('/').to_owned();
        debug!(base_url = %base_url, "creating OpenSea client");
        Self {
            client: Client::new(),
            base_url,
            api_key,
        }
    }

    /// Fetch marketplace stats for a collection, reshaped into the weekly /
    /// monthly / total windows the bot displays.
    #[instrument(skip(self))]
    pub async fn collection_stats(&self, slug: &str) -> Result<RigsStats, MarketError> {
        let url = format!("{}/collection/{slug}/stats", self.base_url);

        let mut request = self.client.get(&url);
        if let Some(api_key) = &self.api_key {
            request = request.header("X-API-KEY", api_key);
        }

        let response = request.send().await.map_err(|err| {
            error!(url = %url, error = %err, "OpenSea request failed");
            MarketError::new(MarketErrorKind::Request(err.to_string()))
        })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!(url = %url, status = %status, body = %body, "OpenSea returned error status");
            return Err(MarketError::new(MarketErrorKind::Status {
                code: status.as_u16(),
                body,
            }));
        }

        let envelope: StatsEnvelope = response.json().await.map_err(|err| {
            error!(url = %url, error = %err, "failed to decode OpenSea response");
            MarketError::new(MarketErrorKind::Decode(err.to_string()))
        })?;

        Ok(RigsStats::from(envelope.stats))
    }
}

#[derive(Debug, Deserialize)]
struct StatsEnvelope {
    stats: CollectionStats,
}

/// Raw collection stats as OpenSea reports them.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CollectionStats {
    /// Volume traded over the last seven days, in ETH.
    #[serde(default)]
    pub seven_day_volume: f64,
    /// Seven-day volume change, in ETH.
    #[serde(default)]
    pub seven_day_change: f64,
    /// Sales over the last seven days.
    #[serde(default)]
    pub seven_day_sales: f64,
    /// Average sale price over the last seven days, in ETH.
    #[serde(default)]
    pub seven_day_average_price: f64,
    /// Volume traded over the last thirty days, in ETH.
    #[serde(default)]
    pub thirty_day_volume: f64,
    /// Thirty-day volume change, in ETH.
    #[serde(default)]
    pub thirty_day_change: f64,
    /// Sales over the last thirty days.
    #[serde(default)]
    pub thirty_day_sales: f64,
    /// Average sale price over the last thirty days, in ETH.
    #[serde(default)]
    pub thirty_day_average_price: f64,
    /// All-time volume, in ETH.
    #[serde(default)]
    pub total_volume: f64,
    /// All-time sales count.
    #[serde(default)]
    pub total_sales: f64,
    /// Distinct owners.
    #[serde(default)]
    pub num_owners: u64,
    /// All-time average sale price, in ETH.
    #[serde(default)]
    pub average_price: f64,
    /// Market capitalization, in ETH.
    #[serde(default)]
    pub market_cap: f64,
    /// Current floor price, in ETH.
    #[serde(default)]
    pub floor_price: f64,
}

/// Stats over a trailing window.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WindowStats {
    /// Volume traded in the window, in ETH.
    pub volume: f64,
    /// Volume change over the window, in ETH.
    pub change: f64,
    /// Sales count in the window.
    pub sales: f64,
    /// Average sale price in the window, in ETH.
    pub price: f64,
}

/// All-time stats.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TotalStats {
    /// All-time volume, in ETH.
    pub volume: f64,
    /// All-time sales count.
    pub sales: f64,
    /// Distinct owners.
    pub owners: u64,
    /// All-time average sale price, in ETH.
    pub price: f64,
    /// Market capitalization, in ETH.
    pub market_cap: f64,
    /// Current floor price, in ETH.
    pub floor: f64,
}

/// Collection stats reshaped into the windows the bot displays.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RigsStats {
    /// Trailing seven days.
    pub weekly: WindowStats,
    /// Trailing thirty days.
    pub monthly: WindowStats,
    /// All-time.
    pub total: TotalStats,
}

impl From<CollectionStats> for RigsStats {
    fn from(stats: CollectionStats) -> Self {
        Self {
            weekly: WindowStats {
                volume: stats.seven_day_volume,
                change: stats.seven_day_change,
                sales: stats.seven_day_sales,
                price: stats.seven_day_average_price,
            },
            monthly: WindowStats {
                volume: stats.thirty_day_volume,
                change: stats.thirty_day_change,
                sales: stats.thirty_day_sales,
                price: stats.thirty_day_average_price,
            },
            total: TotalStats {
                volume: stats.total_volume,
                sales: stats.total_sales,
                owners: stats.num_owners,
                price: stats.average_price,
                market_cap: stats.market_cap,
                floor: stats.floor_price,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn reshapes_opensea_stats_into_windows() {
        let envelope: StatsEnvelope = serde_json::from_value(json!({
            "stats": {
                "seven_day_volume": 12.5,
                "seven_day_change": -0.3,
                "seven_day_sales": 9.0,
                "seven_day_average_price": 1.4,
                "thirty_day_volume": 60.0,
                "thirty_day_change": 2.1,
                "thirty_day_sales": 40.0,
                "thirty_day_average_price": 1.5,
                "total_volume": 900.0,
                "total_sales": 600.0,
                "num_owners": 321,
                "average_price": 1.5,
                "market_cap": 4200.0,
                "floor_price": 0.9,
            }
        }))
        .unwrap();

        let stats = RigsStats::from(envelope.stats);
        assert_eq!(stats.weekly.volume, 12.5);
        assert_eq!(stats.weekly.change, -0.3);
        assert_eq!(stats.monthly.sales, 40.0);
        assert_eq!(stats.total.owners, 321);
        assert_eq!(stats.total.floor, 0.9);
    }

    #[test]
    fn missing_fields_default_to_zero() {
        let envelope: StatsEnvelope = serde_json::from_value(json!({"stats": {}})).unwrap();
        let stats = RigsStats::from(envelope.stats);
        assert_eq!(stats.total.volume, 0.0);
        assert_eq!(stats.total.owners, 0);
    }
}
