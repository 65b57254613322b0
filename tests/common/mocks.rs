use async_trait::async_trait;
use std::sync::{Arc, Mutex};
use vitallens::{
    ClientError,
    prediction::{PredictionClient, PredictionRequest, PredictionResponse},
};

/// Mock prediction client for testing
#[derive(Debug, Clone)]
pub struct MockPredictionClient {
    pub outcome: Result<PredictionResponse, ClientError>,
    pub requests: Arc<Mutex<Vec<PredictionRequest>>>,
}

impl MockPredictionClient {
    pub fn returning(prediction: &str) -> Self {
        Self {
            outcome: Ok(PredictionResponse {
                prediction: prediction.to_string(),
            }),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn failing(error: ClientError) -> Self {
        Self {
            outcome: Err(error),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn get_requests(&self) -> Vec<PredictionRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl PredictionClient for MockPredictionClient {
    async fn submit(
        &self,
        request: PredictionRequest,
    ) -> Result<PredictionResponse, ClientError> {
        self.requests.lock().unwrap().push(request);
        self.outcome.clone()
    }
}
