//! Bot configuration.
//!
//! Non-secret settings come from an optional TOML file; every section has a
//! default, so the bot runs with no file at all. Secrets (the Discord token,
//! the optional OpenSea API key) are read from the environment only.

use serde::{Deserialize, Serialize};
use std::path::Path;
use tablebot_error::{ConfigError, TablebotResult};

/// Configuration for the bot process.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BotConfig {
    /// Discord settings
    pub discord: DiscordConfig,
    /// Tableland gateway settings
    pub gateway: GatewayConfig,
    /// Marketplace and Rig metadata settings
    pub market: MarketConfig,
}

/// Discord settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DiscordConfig {
    /// Guild to deploy commands to; deployment is global when absent.
    pub guild_id: Option<u64>,
}

/// Tableland gateway settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GatewayConfig {
    /// Gateway base URL.
    pub base_url: String,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            base_url: tablebot_gateway::DEFAULT_BASE_URL.to_owned(),
        }
    }
}

/// Marketplace and Rig metadata settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MarketConfig {
    /// OpenSea collection slug for the Rigs collection.
    pub collection_slug: String,
    /// GraphQL endpoint serving Rig metadata.
    pub rigs_endpoint: String,
}

impl Default for MarketConfig {
    fn default() -> Self {
        Self {
            collection_slug: "tableland-rigs".to_owned(),
            rigs_endpoint: "https://rigs.tableland.xyz/graphql".to_owned(),
        }
    }
}

impl BotConfig {
    /// Load bot configuration from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> TablebotResult<Self> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            ConfigError::new(format!("Failed to read config file: {}", e))
        })?;

        toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)).into())
    }

    /// Load from a file when one is given, defaults otherwise.
    pub fn load(path: Option<&Path>) -> TablebotResult<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    /// The Discord bot token, from the `DISCORD_TOKEN` environment variable.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] when the variable is unset.
    pub fn discord_token() -> TablebotResult<String> {
        std::env::var("DISCORD_TOKEN")
            .map_err(|_| ConfigError::new("DISCORD_TOKEN is not set").into())
    }

    /// The optional OpenSea API key, from `OPENSEA_API_KEY`.
    pub fn opensea_api_key() -> Option<String> {
        std::env::var("OPENSEA_API_KEY").ok()
    }
}
