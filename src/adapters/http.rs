use crate::core::inference::InferenceService;
use crate::core::{PredictionRequest, PredictionResponse, RegressionModel};
use crate::utils::error::PredictorError;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub const LIVENESS_MESSAGE: &str = "✅ Car price API is running!";

/// Every failure surfaces to the caller as `400 {"error": "..."}`.
#[derive(Debug)]
pub struct ApiError(pub PredictorError);

impl From<PredictorError> for ApiError {
    fn from(err: PredictorError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = serde_json::json!({ "error": self.0.to_string() });
        (StatusCode::BAD_REQUEST, Json(body)).into_response()
    }
}

pub fn router<M: RegressionModel + 'static>(service: Arc<InferenceService<M>>) -> Router {
    Router::new()
        .route("/", get(home))
        .route("/predict", post(predict::<M>))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(service)
}

async fn home() -> &'static str {
    LIVENESS_MESSAGE
}

// Body is read as raw bytes so JSON is accepted whatever the Content-Type.
async fn predict<M: RegressionModel + 'static>(
    State(service): State<Arc<InferenceService<M>>>,
    body: Bytes,
) -> Result<Json<PredictionResponse>, ApiError> {
    tracing::info!("🔵 /predict hit");
    tracing::debug!("🟢 Raw incoming data: {}", String::from_utf8_lossy(&body));

    let request = PredictionRequest::from_json_bytes(&body).inspect_err(|e| {
        tracing::error!("❌ Rejected prediction request: {}", e);
    })?;

    let result = tokio::task::spawn_blocking(move || service.predict(&request))
        .await
        .map_err(|e| PredictorError::Inference {
            message: format!("inference task failed: {}", e),
        })
        .and_then(|inner| inner);

    match result {
        Ok(response) => {
            tracing::info!(
                "✅ Predicted price {} lakhs (ratio {})",
                response.predicted_price_lakhs,
                response.depreciation_ratio
            );
            Ok(Json(response))
        }
        Err(e) => {
            tracing::error!("❌ Prediction failed: {}", e);
            Err(ApiError(e))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_is_bad_request() {
        let response = ApiError::from(PredictorError::MissingKey {
            key: "owner".to_string(),
        })
        .into_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_home_returns_liveness_message() {
        assert_eq!(home().await, LIVENESS_MESSAGE);
    }
}
