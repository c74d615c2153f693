//! Rigs metadata lookup over GraphQL.
//!
//! The Rigs collection publishes per-token metadata through a GraphQL
//! endpoint. The envelope is plain JSON over HTTPS; no GraphQL client
//! machinery is required beyond the `{query, variables}` / `{data, errors}`
//! shapes.

use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use tablebot_error::{MarketError, MarketErrorKind};
use tracing::{debug, error, instrument};

const RIG_QUERY: &str = "query Rig($id: String!) { rig(id: $id) { id image thumb attributes { traitType value } } }";

/// Public HTTPS gateway used to display `ipfs://` content in embeds.
const IPFS_GATEWAY: &str = "https://ipfs.io/ipfs/";

/// Client for the Rigs GraphQL metadata endpoint.
#[derive(Debug, Clone)]
pub struct RigsGraphClient {
    client: Client,
    endpoint: String,
}

impl RigsGraphClient {
    /// Create a client against the given GraphQL endpoint.
    pub fn new(endpoint: impl Into<String>) -> Self {
        let endpoint = endpoint.into();
        debug!(endpoint = %endpoint, "creating Rigs GraphQL client");
        Self {
            client: Client::new(),
            endpoint,
        }
    }

    /// Look up a Rig by token id. `Ok(None)` means the token does not exist.
    #[instrument(skip(self))]
    pub async fn rig(&self, token_id: u64) -> Result<Option<Rig>, MarketError> {
        let request = GraphRequest {
            query: RIG_QUERY,
            variables: json!({ "id": token_id.to_string() }),
        };

        let response = self
            .client
            .post(&self.endpoint)
            .json(&request)
            .send()
            .await
            .map_err(|err| {
                error!(endpoint = %self.endpoint, error = %err, "Rigs request failed");
                MarketError::new(MarketErrorKind::Request(err.to_string()))
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!(endpoint = %self.endpoint, status = %status, body = %body, "Rigs endpoint returned error status");
            return Err(MarketError::new(MarketErrorKind::Status {
                code: status.as_u16(),
                body,
            }));
        }

        let envelope: GraphResponse<RigData> = response.json().await.map_err(|err| {
            error!(endpoint = %self.endpoint, error = %err, "failed to decode Rigs response");
            MarketError::new(MarketErrorKind::Decode(err.to_string()))
        })?;

        if let Some(graph_error) = envelope.errors.first() {
            error!(endpoint = %self.endpoint, message = %graph_error.message, "Rigs query failed");
            return Err(MarketError::new(MarketErrorKind::Graph(
                graph_error.message.clone(),
            )));
        }

        let data = envelope.data.ok_or_else(|| {
            MarketError::new(MarketErrorKind::Decode(
                "response carried neither data nor errors".to_owned(),
            ))
        })?;
        Ok(data.rig)
    }
}

#[derive(Debug, Serialize)]
struct GraphRequest<'a> {
    query: &'a str,
    variables: Value,
}

#[derive(Debug, Deserialize)]
struct GraphResponse<T> {
    data: Option<T>,
    #[serde(default)]
    errors: Vec<GraphError>,
}

#[derive(Debug, Deserialize)]
struct GraphError {
    message: String,
}

#[derive(Debug, Deserialize)]
struct RigData {
    rig: Option<Rig>,
}

/// Metadata for one Rig token.
#[derive(Debug, Clone, Deserialize)]
pub struct Rig {
    /// Token id.
    pub id: String,
    /// Full-resolution image URI, often `ipfs://`.
    #[serde(default)]
    pub image: Option<String>,
    /// Thumbnail URI.
    #[serde(default)]
    pub thumb: Option<String>,
    /// Trait list.
    #[serde(default)]
    pub attributes: Vec<RigAttribute>,
}

/// One Rig trait.
#[derive(Debug, Clone, Deserialize)]
pub struct RigAttribute {
    /// Trait name.
    #[serde(rename = "traitType")]
    pub trait_type: String,
    /// Trait value; strings and numbers both occur.
    pub value: Value,
}

impl Rig {
    /// Image URL suitable for an embed, preferring the full image and
    /// rewriting `ipfs://` URIs through a public HTTPS gateway.
    pub fn image_url(&self) -> Option<String> {
        self.image
            .as_deref()
            .or(self.thumb.as_deref())
            .map(ipfs_to_https)
    }
}

fn ipfs_to_https(uri: &str) -> String {
    match uri.strip_prefix("ipfs://") {
        Some(path) => format!("{IPFS_GATEWAY}{path}"),
        None => uri.to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn decodes_a_rig_envelope() {
        let envelope: GraphResponse<RigData> = serde_json::from_value(json!({
            "data": {
                "rig": {
                    "id": "1234",
                    "image": "ipfs://bafybeicid/image_full.png",
                    "thumb": "ipfs://bafybeicid/image_thumb.png",
                    "attributes": [
                        {"traitType": "Fleet", "value": "Titans"},
                        {"traitType": "% Original", "value": 72},
                    ],
                }
            }
        }))
        .unwrap();

        let rig = envelope.data.unwrap().rig.unwrap();
        assert_eq!(rig.id, "1234");
        assert_eq!(rig.attributes.len(), 2);
        assert_eq!(
            rig.image_url().unwrap(),
            "https://ipfs.io/ipfs/bafybeicid/image_full.png"
        );
    }

    #[test]
    fn missing_rig_decodes_to_none() {
        let envelope: GraphResponse<RigData> =
            serde_json::from_value(json!({"data": {"rig": null}})).unwrap();
        assert!(envelope.data.unwrap().rig.is_none());
    }

    #[test]
    fn graphql_errors_are_decoded() {
        let envelope: GraphResponse<RigData> = serde_json::from_value(json!({
            "data": null,
            "errors": [{"message": "internal error"}],
        }))
        .unwrap();
        assert_eq!(envelope.errors[0].message, "internal error");
    }

    #[test]
    fn https_uris_pass_through_unchanged() {
        assert_eq!(
            ipfs_to_https("https://example.com/rig.png"),
            "https://example.com/rig.png"
        );
    }

    #[test]
    fn falls_back_to_the_thumbnail() {
        let rig = Rig {
            id: "1".to_owned(),
            image: None,
            thumb: Some("ipfs://cid/thumb.png".to_owned()),
            attributes: Vec::new(),
        };
        assert_eq!(rig.image_url().unwrap(), "https://ipfs.io/ipfs/cid/thumb.png");
    }
}
