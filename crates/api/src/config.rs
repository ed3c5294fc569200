//! Service configuration
//!
//! Loaded once at startup from the environment (a `.env` file is honored via
//! `dotenvy` in `main`) and read-only afterwards.

use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    /// Scheme of the upstream subscription API ("http" or "https")
    pub api_protocol: String,
    /// Host of the upstream subscription API
    pub api_host: String,
    /// Port of the upstream subscription API
    pub api_port: u16,
    /// Address the HTTP server binds to
    pub bind_address: String,
    /// Origins the CORS layer will accept
    pub allowed_origins: Vec<String>,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        let api_protocol = env::var("API_PROTOCOL").unwrap_or_else(|_| "http".to_string());
        let api_host =
            env::var("API_HOST").map_err(|_| anyhow::anyhow!("API_HOST must be set"))?;
        let api_port = env::var("API_PORT")
            .map_err(|_| anyhow::anyhow!("API_PORT must be set"))?
            .parse::<u16>()
            .map_err(|e| anyhow::anyhow!("API_PORT is not a valid port number: {e}"))?;

        let bind_address =
            env::var("BIND_ADDRESS").unwrap_or_else(|_| "0.0.0.0:8080".to_string());

        let allowed_origins = env::var("ALLOWED_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:3000".to_string())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        Ok(Self {
            api_protocol,
            api_host,
            api_port,
            bind_address,
            allowed_origins,
        })
    }

    /// Base URL of the upstream subscription service.
    pub fn api_base_url(&self) -> String {
        format!("{}://{}:{}", self.api_protocol, self.api_host, self.api_port)
    }
}
