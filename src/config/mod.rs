mod types;

pub use types::*;

use crate::{Error, Result};
use reqwest::Url;
use std::env;
use tracing::debug;

/// Environment variable that replaces `endpoint.url` from the file.
pub const ENDPOINT_ENV: &str = "PREDICTION_ENDPOINT";

pub async fn load() -> Result<Config> {
    let config_path = env::var("CONFIG_PATH").unwrap_or_else(|_| "config.yaml".to_string());

    debug!("Loading configuration from: {}", config_path);

    let config_str = tokio::fs::read_to_string(&config_path).await?;
    let mut config = parse(&config_str)?;

    if let Ok(url) = env::var(ENDPOINT_ENV) {
        debug!("Endpoint overridden by {}", ENDPOINT_ENV);
        config.endpoint.url = url;
    }

    config.validate()?;
    Ok(config)
}

pub fn parse(config_str: &str) -> Result<Config> {
    let config: Config = serde_yaml::from_str(config_str)?;
    Ok(config)
}

impl Config {
    pub fn validate(&self) -> Result<()> {
        self.endpoint.validate()
    }
}

/// Parses an absolute http(s) endpoint URL.
pub fn parse_endpoint_url(url: &str) -> Result<Url> {
    let parsed = Url::parse(url)
        .map_err(|e| Error::config(format!("Invalid endpoint url '{}': {}", url, e)))?;

    match parsed.scheme() {
        "http" | "https" => Ok(parsed),
        other => Err(Error::config(format!(
            "Unsupported endpoint scheme '{}', expected http or https",
            other
        ))),
    }
}

impl EndpointConfig {
    pub fn validate(&self) -> Result<()> {
        self.endpoint_url().map(|_| ())
    }

    /// Validated endpoint URL, checked together with the timeout.
    pub fn endpoint_url(&self) -> Result<Url> {
        let url = parse_endpoint_url(&self.url)?;

        if self.timeout_secs == 0 {
            return Err(Error::config("endpoint.timeout_secs must be greater than 0"));
        }

        Ok(url)
    }
}
