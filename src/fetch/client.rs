use reqwest::blocking::Client;
use serde_json::Value;
use tracing::info;

use super::{RecordSource, ResourceKind};
use crate::error::{Error, Result};
use crate::parser::RawRecord;

pub const DEFAULT_API_BASE: &str = "https://api.spacexdata.com/v4";

/// Blocking client for the public SpaceX REST API.
pub struct SpacexClient {
    client: Client,
    base_url: String,
}

impl SpacexClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("mission-logistics-db/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| Error::Config(format!("failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    /// Full URL of the collection for `kind`
    pub fn url_for(&self, kind: ResourceKind) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), kind.path())
    }
}

impl RecordSource for SpacexClient {
    fn fetch(&self, kind: ResourceKind) -> Result<Vec<RawRecord>> {
        let url = self.url_for(kind);
        info!("Fetching {kind} from {url}");

        let transport = |source| Error::Transport {
            kind,
            url: url.clone(),
            source,
        };

        let response = self
            .client
            .get(&url)
            .send()
            .and_then(|r| r.error_for_status())
            .map_err(transport)?;

        let body: Value = response.json().map_err(|e| Error::Payload {
            kind,
            reason: e.to_string(),
        })?;

        records_from_body(kind, body)
    }
}

/// Split a decoded response body into raw records
pub fn records_from_body(kind: ResourceKind, body: Value) -> Result<Vec<RawRecord>> {
    match body {
        Value::Array(items) => Ok(items.into_iter().map(RawRecord::from_value).collect()),
        other => Err(Error::Payload {
            kind,
            reason: format!("expected a JSON array, got {}", json_type(&other)),
        }),
    }
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
