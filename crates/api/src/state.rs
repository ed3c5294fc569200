//! Application state

use middle_subscriptions::UpstreamClient;

use crate::config::Config;

/// Shared application state
///
/// The service is stateless per request; this only carries the configuration
/// and the pooled HTTP client for the upstream call.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub upstream: UpstreamClient,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let upstream = UpstreamClient::new(config.api_base_url());
        Self { config, upstream }
    }
}
