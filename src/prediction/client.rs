use super::types::*;
use crate::{
    Result,
    config::{EndpointConfig, parse_endpoint_url},
    error::ClientError,
};
use async_trait::async_trait;
use reqwest::{Url, redirect};
use std::time::Duration;
use tracing::{debug, warn};

#[async_trait]
pub trait PredictionClient: Send + Sync {
    async fn submit(
        &self,
        request: PredictionRequest,
    ) -> std::result::Result<PredictionResponse, ClientError>;
}

/// Sends each request as a single JSON POST to a fixed endpoint.
#[derive(Debug, Clone)]
pub struct HttpPredictionClient {
    client: reqwest::Client,
    endpoint: Url,
}

impl HttpPredictionClient {
    pub fn new(config: &EndpointConfig) -> Result<Self> {
        let endpoint = config.endpoint_url()?;

        // A 3xx is answered as-is; following it would re-send the body.
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .redirect(redirect::Policy::none())
            .build()?;

        Ok(Self { client, endpoint })
    }

    /// Use a preconfigured `reqwest::Client`, e.g. one shared with other callers.
    ///
    /// The caller owns that client's redirect and timeout policy.
    pub fn with_client(url: &str, client: reqwest::Client) -> Result<Self> {
        let endpoint = parse_endpoint_url(url)?;

        Ok(Self { client, endpoint })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl PredictionClient for HttpPredictionClient {
    async fn submit(
        &self,
        request: PredictionRequest,
    ) -> std::result::Result<PredictionResponse, ClientError> {
        debug!(
            "Submitting prediction request to {}: age={:?} weight={:?} temperature={:?}",
            self.endpoint, request.age, request.weight, request.temperature
        );

        // `json` sets Content-Type: application/json
        let response = self
            .client
            .post(self.endpoint.clone())
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                warn!("Prediction endpoint unreachable: {}", e);
                ClientError::NetworkFailure(e.to_string())
            })?;

        let status = response.status();
        if !status.is_success() {
            warn!("Prediction endpoint returned HTTP {}", status);
            return Err(ClientError::ServerError(status.as_u16()));
        }

        let body = response.bytes().await.map_err(|e| {
            warn!("Failed to read prediction response body: {}", e);
            ClientError::NetworkFailure(e.to_string())
        })?;

        let prediction: PredictionResponse = serde_json::from_slice(&body).map_err(|e| {
            warn!("Malformed prediction response: {}", e);
            ClientError::MalformedResponse(e.to_string())
        })?;

        debug!("Received prediction: {}", prediction.prediction);

        Ok(prediction)
    }
}
