use super::types::{ErrorResponse, HealthResponse};
use crate::{
    error::ClientError,
    prediction::{PredictionClient, PredictionRequest, PredictionResponse},
};
use axum::{extract::State, http::StatusCode, response::Json};
use std::sync::Arc;
use tracing::{error, info};
use uuid::Uuid;

#[derive(Clone)]
pub struct AppState {
    pub client: Arc<dyn PredictionClient>,
}

pub async fn predict(
    State(state): State<AppState>,
    Json(request): Json<PredictionRequest>,
) -> Result<Json<PredictionResponse>, (StatusCode, Json<ErrorResponse>)> {
    let request_id = Uuid::new_v4();
    info!(%request_id, "Received prediction request");

    match state.client.submit(request).await {
        Ok(response) => {
            info!(%request_id, "Prediction succeeded: {}", response.prediction);
            Ok(Json(response))
        }
        Err(e) => {
            error!(%request_id, kind = e.kind(), "Prediction failed: {}", e);
            Err((StatusCode::BAD_GATEWAY, Json(error_response(&e))))
        }
    }
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}

fn error_response(err: &ClientError) -> ErrorResponse {
    let upstream_status = match err {
        ClientError::ServerError(status) => Some(*status),
        _ => None,
    };

    ErrorResponse {
        error: err.to_string(),
        kind: err.kind().to_string(),
        upstream_status,
    }
}
