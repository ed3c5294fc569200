//! Client-facing error translation
//!
//! Maps an upstream outcome to the `{status, body}` pair the caller receives:
//! a reachable upstream that rejected the request is relayed verbatim, while
//! a pure transport failure becomes a 502 with a small JSON error object.

use serde_json::{json, Value};

use crate::upstream::UpstreamResponse;

/// The status/body pair sent back to the caller on a forwarding failure.
#[derive(Debug, Clone, PartialEq)]
pub struct ErrorWrapper {
    pub status: u16,
    pub body: Value,
}

/// Translate a failed forward into a client-visible response.
pub fn format_error(
    error: Option<&reqwest::Error>,
    response: Option<&UpstreamResponse>,
) -> ErrorWrapper {
    if let Some(response) = response {
        return ErrorWrapper {
            status: response.status,
            body: response.body.clone(),
        };
    }

    let detail = match error {
        Some(error) => error.to_string(),
        None => "upstream returned no response".to_string(),
    };
    ErrorWrapper {
        status: 502,
        body: json!({ "error": detail }),
    }
}
