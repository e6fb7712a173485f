use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::Json,
};
use common::{PredictionRequest, PredictionResult};
use serde_json::Value;
use tracing::{error, info, instrument, warn};
use crate::schemas::{AppState, ErrorResponse, PredictBody};

/// Forward a prediction request to the model server
///
/// The backend's status code and JSON body are passed through unchanged,
/// including `success: false` bodies.
#[utoipa::path(
    post,
    path = "/predict",
    tag = "prediction",
    request_body = PredictBody,
    responses(
        (status = 200, description = "Prediction result, or an application failure with success = false", body = PredictionResult),
        (status = 400, description = "Request body is not valid JSON", body = ErrorResponse),
        (status = 502, description = "Prediction backend unavailable", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn predict(
    State(state): State<AppState>,
    body: Result<Json<PredictBody>, JsonRejection>,
) -> Result<(StatusCode, Json<Value>), (StatusCode, Json<ErrorResponse>)> {
    let Json(body) = body.map_err(|rejection| {
        warn!("Rejected prediction request: {}", rejection.body_text());
        (
            rejection.status(),
            Json(ErrorResponse::new("INVALID_REQUEST", rejection.body_text())),
        )
    })?;

    let request = PredictionRequest::from(body);
    info!(stock = %request.stock, start = %request.start_date, end = %request.end_date, "Forwarding prediction request");

    match state.backend.forward(&request).await {
        Ok((status, payload)) => {
            if !status.is_success() {
                warn!(%status, "Prediction backend returned non-OK status");
            }
            Ok((status, Json(payload)))
        }
        Err(e) => {
            error!("Prediction backend unavailable: {}", e);
            Err((
                StatusCode::BAD_GATEWAY,
                Json(ErrorResponse::new(
                    "BACKEND_UNAVAILABLE",
                    format!("Prediction backend unavailable: {}", e),
                )),
            ))
        }
    }
}
