use anyhow::Result;
use chrono::Utc;
use common::{default_date_range, PredictionRequest, PredictionView, DATE_FORMAT};
use std::fmt::Write;
use std::time::Duration;
use tracing::{debug, info};

use crate::backend::PredictionBackend;

/// Asks `server` for a prediction and prints the same fields the web page
/// shows.
pub async fn predict(
    server: &str,
    stock: String,
    start_date: Option<String>,
    end_date: Option<String>,
    timeout_secs: u64,
) -> Result<()> {
    let (default_start, default_end) = default_date_range(Utc::now().date_naive());
    let request = PredictionRequest::new(
        stock,
        start_date.unwrap_or_else(|| default_start.format(DATE_FORMAT).to_string()),
        end_date.unwrap_or_else(|| default_end.format(DATE_FORMAT).to_string()),
    );
    debug!("Prediction request: {:?}", request);

    let backend = PredictionBackend::new(server, Duration::from_secs(timeout_secs))?;
    info!("Requesting prediction from {}", backend.predict_url());

    let result = backend.predict(&request).await?;
    let view = PredictionView::from_result(&result)?;

    print!("{}", render_summary(&request, &view));
    Ok(())
}

/// Plain-text rendering of a prediction.
pub fn render_summary(request: &PredictionRequest, view: &PredictionView) -> String {
    let chart = &view.chart;
    let history = chart.historical.point_count();
    let mut out = String::new();

    let _ = writeln!(out, "Stock:           {}", request.stock);
    let _ = writeln!(out, "Current price:   {}", view.current_price);
    let _ = writeln!(
        out,
        "Predicted price: {} ({})",
        view.predicted_price,
        chart.predicted_label()
    );
    let _ = writeln!(out, "Change:          {}", view.price_change);
    let _ = writeln!(out, "Decision:        {}", view.decision);
    let _ = writeln!(out, "Confidence:      {}", view.confidence);
    let _ = writeln!(
        out,
        "History:         {} points, {} .. {}",
        history,
        chart.labels[0],
        chart.labels[history.saturating_sub(1)]
    );
    out
}
