use crate::PredictionResult;
use crate::chart::ChartModel;
use crate::currency::Currency;
use crate::decision::Decision;
use crate::error::PredictError;
use crate::format::{format_change, format_confidence, format_price, ChangeTone};

/// Everything the results panel and the chart need, fully formatted.
///
/// Built in one step so a payload that cannot be charted never leaves a
/// half-rendered page behind.
#[derive(Debug, Clone, PartialEq)]
pub struct PredictionView {
    pub currency: Currency,
    pub current_price: String,
    pub predicted_price: String,
    pub price_change: String,
    pub change_tone: ChangeTone,
    pub decision: Decision,
    pub confidence: String,
    pub chart: ChartModel,
}

impl PredictionView {
    pub fn from_result(result: &PredictionResult) -> Result<Self, PredictError> {
        let currency = result.currency();
        let chart = ChartModel::build(result, currency)?;

        Ok(Self {
            currency,
            current_price: format_price(currency, result.current_price),
            predicted_price: format_price(currency, result.predicted_price),
            price_change: format_change(result.price_change),
            change_tone: ChangeTone::of(result.price_change),
            decision: Decision::parse(&result.decision),
            confidence: format_confidence(result.confidence),
            chart,
        })
    }
}
