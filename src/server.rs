//! HTTP surface: `POST /predict`, `POST /analyze`, `GET /ranges`,
//! `GET /health`, permissive CORS.

use crate::analysis::{self, Assessment, OPTIMAL_RANGES, OptimalRanges};
use crate::features::SensorReadings;
use crate::predictor::{PredictError, PredictResponse, Predictor};
use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde::Serialize;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};

/// Errors returned to HTTP callers.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The body was not a JSON object with the four numeric readings.
    #[error("invalid request body: {}", .0.body_text())]
    InvalidInput(#[from] JsonRejection),
    #[error(transparent)]
    Predict(#[from] PredictError),
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::InvalidInput(rejection) => rejection.status(),
            ApiError::Predict(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        if status.is_server_error() {
            tracing::error!(error = %self, "prediction failed");
        } else {
            tracing::warn!(error = %self, "rejected request");
        }
        let body = ErrorBody {
            error: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: &'static str,
}

/// Builds the application router around an already loaded predictor.
pub fn router(predictor: Predictor) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/predict", post(predict))
        .route("/analyze", post(analyze))
        .route("/ranges", get(ranges))
        .route("/health", get(health))
        .layer(cors)
        .with_state(predictor)
}

/// Serves `app` on `listener` until ctrl-c.
pub async fn serve(listener: TcpListener, app: Router) -> std::io::Result<()> {
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %err, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutting down");
}

async fn predict(
    State(predictor): State<Predictor>,
    payload: Result<Json<SensorReadings>, JsonRejection>,
) -> Result<Json<PredictResponse>, ApiError> {
    let Json(readings) = payload?;
    let prediction = predictor.predict(&readings.into_features())?;
    Ok(Json(prediction.into()))
}

async fn analyze(
    payload: Result<Json<SensorReadings>, JsonRejection>,
) -> Result<Json<Assessment>, ApiError> {
    let Json(readings) = payload?;
    let assessment = analysis::analyze(&readings);
    tracing::debug!(score = assessment.risk_score, "analyzed sensor readings");
    Ok(Json(assessment))
}

async fn ranges() -> Json<OptimalRanges> {
    Json(OPTIMAL_RANGES)
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}
