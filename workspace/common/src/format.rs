use crate::currency::Currency;
use rust_decimal::prelude::*;

/// Color of the change figure, keyed by the sign of the change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeTone {
    Gain,
    Loss,
}

impl ChangeTone {
    pub fn of(change: f64) -> Self {
        // NaN compares false and lands on Loss, like the browser did
        if change >= 0.0 { Self::Gain } else { Self::Loss }
    }

    pub fn color(&self) -> &'static str {
        match self {
            ChangeTone::Gain => "#10b981",
            ChangeTone::Loss => "#ef4444",
        }
    }
}

/// Formats a number with two decimals, rounding ties away from zero.
///
/// Works on the exact binary value of the float, which is what
/// `Number.prototype.toFixed(2)` does in browsers.
pub(crate) fn fixed2(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }

    // -0.0 prints as 0.00
    let value = if value == 0.0 { 0.0 } else { value };

    match Decimal::from_f64_retain(value) {
        Some(exact) => {
            let rounded = exact.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
            // toFixed keeps the sign of small negatives: -0.001 is "-0.00"
            if rounded.is_zero() && value < 0.0 {
                format!("-{:.2}", rounded.abs())
            } else {
                format!("{:.2}", rounded)
            }
        }
        None => format!("{:.2}", value),
    }
}

/// `$101.00`, `₹2450.35`
pub fn format_price(currency: Currency, value: f64) -> String {
    format!("{}{}", currency.symbol(), fixed2(value))
}

/// Signed percentage; non-negative values get an explicit `+`.
pub fn format_change(change: f64) -> String {
    let sign = if change >= 0.0 { "+" } else { "" };
    format!("{}{}%", sign, fixed2(change))
}

/// Confidence is shown as received: no rounding, no clamping.
pub fn format_confidence(confidence: f64) -> String {
    format!("{}%", confidence)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_price_two_decimals() {
        assert_eq!(format_price(Currency::usd(), 101.0), "$101.00");
        assert_eq!(format_price(Currency::usd(), 105.0), "$105.00");
        assert_eq!(format_price(Currency::inr(), 2450.349), "₹2450.35");
    }

    #[test]
    fn test_fixed2_rounds_like_to_fixed() {
        // 1.005 is stored as 1.00499999..., so it rounds down
        assert_eq!(fixed2(1.005), "1.00");
        // 0.125 is exact, so the tie goes away from zero
        assert_eq!(fixed2(0.125), "0.13");
        assert_eq!(fixed2(-0.125), "-0.13");
        assert_eq!(fixed2(2.5), "2.50");
    }

    #[test]
    fn test_fixed2_non_finite() {
        assert_eq!(fixed2(f64::NAN), "NaN");
        assert_eq!(fixed2(f64::INFINITY), "Infinity");
        assert_eq!(fixed2(f64::NEG_INFINITY), "-Infinity");
    }

    #[test]
    fn test_format_change_sign() {
        assert_eq!(format_change(3.96), "+3.96%");
        assert_eq!(format_change(0.0), "+0.00%");
        assert_eq!(format_change(-0.0), "+0.00%");
        assert_eq!(format_change(-2.5), "-2.50%");
    }

    #[test]
    fn test_small_negatives_keep_their_sign() {
        assert_eq!(fixed2(-0.004), "-0.00");
        assert_eq!(format_change(-0.001), "-0.00%");
        assert_eq!(format_price(Currency::usd(), -0.001), "$-0.00");
        assert_eq!(format_price(Currency::usd(), -0.0), "$0.00");
    }

    #[test]
    fn test_change_tone() {
        assert_eq!(ChangeTone::of(0.0), ChangeTone::Gain);
        assert_eq!(ChangeTone::of(3.96).color(), "#10b981");
        assert_eq!(ChangeTone::of(-0.01).color(), "#ef4444");
    }

    #[test]
    fn test_format_confidence_passes_through() {
        assert_eq!(format_confidence(87.0), "87%");
        assert_eq!(format_confidence(87.5), "87.5%");
        assert_eq!(format_confidence(140.0), "140%");
        assert_eq!(format_confidence(-3.0), "-3%");
    }
}
