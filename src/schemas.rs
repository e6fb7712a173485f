use crate::backend::PredictionBackend;
use common::{PredictionRequest, PredictionResult};
use serde::{Deserialize, Serialize};
use utoipa::{OpenApi, ToSchema};

/// Application state shared across handlers
#[derive(Clone, Debug)]
pub struct AppState {
    /// Client for the model server that answers `/predict`
    pub backend: PredictionBackend,
}

/// Body accepted by the `/predict` proxy.
///
/// Missing fields fall back to the values the model server has always
/// assumed, so older clients keep working.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct PredictBody {
    /// Ticker symbol
    #[serde(default = "default_stock")]
    pub stock: String,
    /// Start of the training window (YYYY-MM-DD)
    #[serde(default = "default_start_date")]
    pub start_date: String,
    /// End of the training window (YYYY-MM-DD)
    #[serde(default = "default_end_date")]
    pub end_date: String,
}

fn default_stock() -> String {
    "RELIANCE.NS".to_string()
}

fn default_start_date() -> String {
    "2022-01-01".to_string()
}

fn default_end_date() -> String {
    "2025-01-01".to_string()
}

impl From<PredictBody> for PredictionRequest {
    fn from(body: PredictBody) -> Self {
        PredictionRequest::new(body.stock, body.start_date, body.end_date)
    }
}

/// Error response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
    /// Error code
    pub code: String,
    /// Success status (always false for errors)
    pub success: bool,
}

impl ErrorResponse {
    pub fn new(code: &str, error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            code: code.to_string(),
            success: false,
        }
    }
}

/// Health check response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    /// Service status
    pub status: String,
    /// Service version
    pub version: String,
    /// Prediction backend this host forwards to
    pub backend: String,
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::health::health_check,
        crate::handlers::predict::predict,
    ),
    components(
        schemas(
            PredictBody,
            PredictionRequest,
            PredictionResult,
            ErrorResponse,
            HealthResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "prediction", description = "Next-day price prediction"),
    ),
    info(
        title = "StockCast API",
        description = "Serving host for the StockCast front-end: forwards prediction requests to the model server",
        version = "0.1.0",
        license(
            name = "MIT",
            url = "https://opensource.org/licenses/MIT"
        )
    )
)]
pub struct ApiDoc;
