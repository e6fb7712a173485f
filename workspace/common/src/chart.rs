//! Library-agnostic description of the prediction chart.
//!
//! The front-end translates a [`ChartModel`] into Plotly traces; the CLI
//! summarizes it. Neither ever touches the raw response arrays directly.

use crate::PredictionResult;
use crate::currency::Currency;
use crate::dates::next_day_label;
use crate::format::{fixed2, format_price};
use thiserror::Error;

pub const HISTORICAL_LABEL: &str = "Historical Price";
pub const PREDICTED_LABEL: &str = "Predicted Price";

/// Maximum number of x-axis labels shown at once.
const MAX_X_TICKS: usize = 10;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChartError {
    #[error("no historical prices to chart")]
    EmptySeries,

    #[error("{dates} dates but {prices} prices")]
    LengthMismatch { dates: usize, prices: usize },

    #[error("invalid date {0:?}")]
    InvalidDate(String),
}

/// One plotted series. `values[i]` belongs to `ChartModel::labels[i]`;
/// `None` leaves a gap.
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesSpec {
    pub label: &'static str,
    pub values: Vec<Option<f64>>,
    pub color: &'static str,
    pub fill_color: &'static str,
    pub border_width: f64,
    pub fill: bool,
    pub show_line: bool,
    pub point_radius: usize,
    pub point_hover_radius: usize,
}

impl SeriesSpec {
    pub fn value_at(&self, index: usize) -> Option<f64> {
        self.values.get(index).copied().flatten()
    }

    /// Number of indices that carry a real value.
    pub fn point_count(&self) -> usize {
        self.values.iter().filter(|v| v.is_some()).count()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AxisSpec {
    pub title: &'static str,
    pub max_ticks: Option<usize>,
    /// Currency symbol prepended to tick labels
    pub tick_prefix: Option<&'static str>,
    pub tick_decimals: Option<usize>,
}

impl AxisSpec {
    /// Renders a numeric tick the way the axis displays it.
    pub fn format_tick(&self, value: f64) -> String {
        let number = match self.tick_decimals {
            Some(2) => fixed2(value),
            Some(decimals) => format!("{:.*}", decimals, value),
            None => value.to_string(),
        };
        format!("{}{}", self.tick_prefix.unwrap_or_default(), number)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChartModel {
    pub currency: Currency,
    /// Historical dates followed by the synthetic next-day label
    pub labels: Vec<String>,
    pub historical: SeriesSpec,
    pub predicted: SeriesSpec,
    pub x_axis: AxisSpec,
    pub y_axis: AxisSpec,
}

impl ChartModel {
    /// Builds the two-series chart for a successful prediction.
    ///
    /// The response is only borrowed; the label list is a fresh vector with
    /// the synthetic date appended.
    pub fn build(result: &PredictionResult, currency: Currency) -> Result<Self, ChartError> {
        let dates = &result.dates;
        let prices = &result.historical_prices;

        if dates.len() != prices.len() {
            return Err(ChartError::LengthMismatch {
                dates: dates.len(),
                prices: prices.len(),
            });
        }
        let last = dates.last().ok_or(ChartError::EmptySeries)?;
        let next_day = next_day_label(last)?;

        let mut labels = Vec::with_capacity(dates.len() + 1);
        labels.extend(dates.iter().cloned());
        labels.push(next_day);

        let historical = SeriesSpec {
            label: HISTORICAL_LABEL,
            values: prices.iter().copied().map(Some).collect(),
            color: "#667eea",
            fill_color: "rgba(102, 126, 234, 0.1)",
            border_width: 2.0,
            fill: true,
            show_line: true,
            point_radius: 0,
            point_hover_radius: 5,
        };

        let mut predicted_values = vec![None; prices.len()];
        predicted_values.push(Some(result.predicted_price));
        let predicted = SeriesSpec {
            label: PREDICTED_LABEL,
            values: predicted_values,
            color: "#10b981",
            fill_color: "#10b981",
            border_width: 0.0,
            fill: false,
            show_line: false,
            point_radius: 8,
            point_hover_radius: 10,
        };

        tracing::debug!(
            points = prices.len(),
            predicted_at = %labels[prices.len()],
            currency = currency.code(),
            "Built prediction chart"
        );

        Ok(Self {
            currency,
            labels,
            historical,
            predicted,
            x_axis: AxisSpec {
                title: "Date",
                max_ticks: Some(MAX_X_TICKS),
                tick_prefix: None,
                tick_decimals: None,
            },
            y_axis: AxisSpec {
                title: "Price",
                max_ticks: None,
                tick_prefix: Some(currency.symbol()),
                tick_decimals: Some(2),
            },
        })
    }

    pub fn series(&self) -> [&SeriesSpec; 2] {
        [&self.historical, &self.predicted]
    }

    /// Index of the synthetic prediction point.
    pub fn predicted_index(&self) -> usize {
        self.labels.len() - 1
    }

    pub fn predicted_label(&self) -> &str {
        &self.labels[self.predicted_index()]
    }

    /// Tooltip line for one series: `Historical Price: $101.00`.
    pub fn tooltip(&self, series: &SeriesSpec, value: Option<f64>) -> String {
        match value {
            Some(value) => format!("{}: {}", series.label, format_price(self.currency, value)),
            None => series.label.to_string(),
        }
    }

    /// Tooltip for a hovered index: one line per series with a value there.
    pub fn tooltip_lines(&self, index: usize) -> Vec<String> {
        self.series()
            .into_iter()
            .filter_map(|series| {
                series
                    .value_at(index)
                    .map(|value| self.tooltip(series, Some(value)))
            })
            .collect()
    }

    /// Per-point hover text for a series, aligned with `labels`.
    pub fn hover_texts(&self, series: &SeriesSpec) -> Vec<String> {
        (0..self.labels.len())
            .map(|index| match series.value_at(index) {
                Some(value) => self.tooltip(series, Some(value)),
                None => String::new(),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(dates: &[&str], prices: &[f64], predicted: f64) -> PredictionResult {
        PredictionResult {
            success: true,
            dates: dates.iter().map(|d| d.to_string()).collect(),
            historical_prices: prices.to_vec(),
            predicted_price: predicted,
            ..Default::default()
        }
    }

    #[test]
    fn test_labels_get_next_day_appended() {
        let input = result(&["2024-01-01", "2024-01-02", "2024-01-03"], &[100.0, 102.0, 101.0], 105.0);
        let chart = ChartModel::build(&input, Currency::usd()).unwrap();

        assert_eq!(
            chart.labels,
            vec!["2024-01-01", "2024-01-02", "2024-01-03", "2024-01-04"]
        );
        assert_eq!(chart.predicted_label(), "2024-01-04");
        // input untouched
        assert_eq!(input.dates.len(), 3);
    }

    #[test]
    fn test_predicted_series_has_single_point_after_history() {
        let input = result(&["2024-02-27", "2024-02-28", "2024-02-29"], &[1.0, 2.0, 3.0], 4.0);
        let chart = ChartModel::build(&input, Currency::usd()).unwrap();

        assert_eq!(chart.predicted.point_count(), 1);
        assert_eq!(chart.predicted.values.len(), 4);
        assert_eq!(chart.predicted.value_at(3), Some(4.0));
        assert!(!chart.predicted.show_line);
        assert_eq!(chart.predicted.point_radius, 8);
        assert_eq!(chart.predicted_label(), "2024-03-01");
    }

    #[test]
    fn test_historical_series_stops_before_synthetic_point() {
        let input = result(&["2024-01-01", "2024-01-02"], &[10.0, 11.0], 12.0);
        let chart = ChartModel::build(&input, Currency::usd()).unwrap();

        assert_eq!(chart.historical.values, vec![Some(10.0), Some(11.0)]);
        assert_eq!(chart.historical.value_at(chart.predicted_index()), None);
    }

    #[test]
    fn test_axes() {
        let input = result(&["2024-01-01"], &[10.0], 12.0);
        let chart = ChartModel::build(&input, Currency::inr()).unwrap();

        assert_eq!(chart.x_axis.title, "Date");
        assert_eq!(chart.x_axis.max_ticks, Some(10));
        assert_eq!(chart.y_axis.title, "Price");
        assert_eq!(chart.y_axis.format_tick(2500.0), "₹2500.00");
    }

    #[test]
    fn test_tooltips_share_currency() {
        let input = result(&["2024-01-01", "2024-01-02"], &[10.0, 11.5], 12.25);
        let chart = ChartModel::build(&input, Currency::usd()).unwrap();

        assert_eq!(chart.tooltip_lines(1), vec!["Historical Price: $11.50"]);
        assert_eq!(chart.tooltip_lines(2), vec!["Predicted Price: $12.25"]);
        assert_eq!(chart.tooltip(&chart.predicted, None), "Predicted Price");

        let texts = chart.hover_texts(&chart.predicted);
        assert_eq!(texts, vec!["", "", "Predicted Price: $12.25"]);
    }

    #[test]
    fn test_empty_history_is_rejected() {
        let input = result(&[], &[], 1.0);
        assert_eq!(
            ChartModel::build(&input, Currency::usd()).unwrap_err(),
            ChartError::EmptySeries
        );
    }

    #[test]
    fn test_length_mismatch_is_rejected() {
        let input = result(&["2024-01-01", "2024-01-02"], &[1.0], 1.0);
        assert_eq!(
            ChartModel::build(&input, Currency::usd()).unwrap_err(),
            ChartError::LengthMismatch { dates: 2, prices: 1 }
        );
    }
}
