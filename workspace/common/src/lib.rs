//! Transport types and the rendering pipeline shared by the serving host and
//! the browser front-end.
//!
//! Everything here is platform neutral so the same formatting and chart
//! construction runs natively (CLI, tests) and in wasm.

mod chart;
mod currency;
mod dates;
mod decision;
mod error;
mod format;
mod session;
mod view;

pub use chart::{AxisSpec, ChartError, ChartModel, SeriesSpec, HISTORICAL_LABEL, PREDICTED_LABEL};
pub use currency::Currency;
pub use dates::{default_date_range, next_day_label, DATE_FORMAT};
pub use decision::Decision;
pub use error::PredictError;
pub use format::{format_change, format_confidence, format_price, ChangeTone};
pub use session::{ChartSlot, ChartTicket, Panels, Phase, RequestGeneration, RequestTicket};
pub use view::PredictionView;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Path of the prediction endpoint, relative to the API base.
pub const PREDICT_PATH: &str = "/predict";

/// Body of `POST /predict`.
///
/// Values are forwarded exactly as entered; the front-end performs no
/// validation of the symbol or the dates.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
pub struct PredictionRequest {
    /// Ticker symbol, e.g. `AAPL` or `RELIANCE.NS`
    pub stock: String,
    /// First day of the training window (YYYY-MM-DD)
    pub start_date: String,
    /// Last day of the training window (YYYY-MM-DD)
    pub end_date: String,
}

impl PredictionRequest {
    pub fn new(
        stock: impl Into<String>,
        start_date: impl Into<String>,
        end_date: impl Into<String>,
    ) -> Self {
        Self {
            stock: stock.into(),
            start_date: start_date.into(),
            end_date: end_date.into(),
        }
    }
}

/// Response body of `POST /predict`.
///
/// Failure bodies only carry `success` and `error`, so every other field
/// falls back to its default when absent.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq, Default)]
pub struct PredictionResult {
    /// Absent means failure
    #[serde(default)]
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Chronological sample dates, one per historical price
    #[serde(default)]
    pub dates: Vec<String>,
    #[serde(default)]
    pub historical_prices: Vec<f64>,
    #[serde(default)]
    pub current_price: f64,
    #[serde(default)]
    pub predicted_price: f64,
    /// Signed percentage change from current to predicted price
    #[serde(default)]
    pub price_change: f64,
    #[serde(default)]
    pub decision: String,
    /// Backend confidence, nominally 0-100
    #[serde(default)]
    pub confidence: f64,
    /// ISO 4217 code of the quote currency, when the backend declares it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
}

impl PredictionResult {
    /// Resolves the display currency for this result.
    pub fn currency(&self) -> Currency {
        Currency::resolve(self.currency.as_deref(), &self.dates)
    }

    /// Splits the payload into the two error channels' success side.
    ///
    /// A `success: false` body becomes [`PredictError::Application`] carrying
    /// the server message verbatim.
    pub fn into_outcome(self) -> Result<Self, PredictError> {
        if self.success {
            Ok(self)
        } else {
            Err(PredictError::Application(self.error.unwrap_or_default()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failure_body_decodes_with_defaults() {
        let body = r#"{"success": false, "error": "Insufficient data for prediction"}"#;
        let result: PredictionResult = serde_json::from_str(body).unwrap();

        assert!(!result.success);
        assert!(result.dates.is_empty());
        assert_eq!(result.current_price, 0.0);

        let err = result.into_outcome().unwrap_err();
        assert_eq!(err.to_string(), "Insufficient data for prediction");
    }

    #[test]
    fn test_body_without_success_flag_is_application_failure() {
        let result: PredictionResult = serde_json::from_str(r#"{"error":"boom"}"#).unwrap();

        let err = result.into_outcome().unwrap_err();
        assert_eq!(err, PredictError::Application("boom".to_string()));
    }

    #[test]
    fn test_success_body_decodes() {
        let body = r#"{
            "success": true,
            "dates": ["2024-01-01", "2024-01-02"],
            "historical_prices": [100.0, 102.5],
            "current_price": 102.5,
            "predicted_price": 104.0,
            "price_change": 1.46,
            "decision": "HOLD",
            "confidence": 65
        }"#;
        let result: PredictionResult = serde_json::from_str(body).unwrap();

        assert_eq!(result.confidence, 65.0);
        assert_eq!(result.currency, None);
        assert!(result.into_outcome().is_ok());
    }

    #[test]
    fn test_request_serializes_backend_field_names() {
        let request = PredictionRequest::new("AAPL", "2021-10-16", "2024-10-16");
        let json = serde_json::to_value(&request).unwrap();

        assert_eq!(json["stock"], "AAPL");
        assert_eq!(json["start_date"], "2021-10-16");
        assert_eq!(json["end_date"], "2024-10-16");
    }
}
