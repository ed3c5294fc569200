//! Upstream subscription service client
//!
//! One outbound call: POST the transformed request body to the subscription
//! system of record. A single attempt with transport defaults, no retry and
//! no timeout override.

use serde_json::Value;

/// Thin client over the upstream subscription API.
#[derive(Debug, Clone)]
pub struct UpstreamClient {
    http: reqwest::Client,
    base_url: String,
}

/// Whatever the upstream replied: its status code plus the body, parsed as
/// JSON when possible and kept as a raw string otherwise.
#[derive(Debug, Clone)]
pub struct UpstreamResponse {
    pub status: u16,
    pub body: Value,
}

impl UpstreamResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

impl UpstreamClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Forward a decamelized subscription body to `POST {base}/subscriptions`.
    ///
    /// A reachable upstream always yields `Ok`, success or not; `Err` means
    /// the transport itself failed (refused connection, dropped socket, ...).
    pub async fn create_subscription(&self, body: &Value) -> Result<UpstreamResponse, reqwest::Error> {
        let url = format!("{}/subscriptions", self.base_url);
        let response = self.http.post(&url).json(body).send().await?;
        let status = response.status().as_u16();
        let text = response.text().await?;
        let body = match serde_json::from_str(&text) {
            Ok(value) => value,
            Err(_) => Value::String(text),
        };
        Ok(UpstreamResponse { status, body })
    }
}
