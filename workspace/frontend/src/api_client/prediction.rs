use common::{PredictError, PredictionRequest, PredictionResult, PredictionView, PREDICT_PATH};
use crate::api_client;

/// Runs one prediction round trip and prepares everything for display.
pub async fn request_prediction(request: &PredictionRequest) -> Result<PredictionView, PredictError> {
    log::trace!(
        "Requesting prediction for {} from {} to {}",
        request.stock, request.start_date, request.end_date
    );

    let result = api_client::post_json::<PredictionResult, _>(PREDICT_PATH, request)
        .await?
        .into_outcome()
        .map_err(|e| {
            log::warn!("Prediction for {} rejected by backend: {}", request.stock, e);
            e
        })?;

    let view = PredictionView::from_result(&result).map_err(|e| {
        log::error!("Failed to prepare prediction for {}: {}", request.stock, e);
        e
    })?;

    log::info!(
        "Prediction for {}: {} ({}), decision {}",
        request.stock, view.predicted_price, view.price_change, view.decision
    );
    Ok(view)
}
