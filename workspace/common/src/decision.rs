use std::fmt;

/// Base class every decision badge carries.
const BASE_CLASS: &str = "decision";

/// Trading action returned by the backend.
///
/// Only the closed set selects a dedicated style; anything else is still
/// displayed verbatim but keeps the default badge style.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    Buy,
    Sell,
    Hold,
    Unrecognized(String),
}

impl Decision {
    pub fn parse(raw: &str) -> Self {
        match raw {
            "BUY" => Decision::Buy,
            "SELL" => Decision::Sell,
            "HOLD" => Decision::Hold,
            other => Decision::Unrecognized(other.to_string()),
        }
    }

    /// Text exactly as the backend sent it.
    pub fn label(&self) -> &str {
        match self {
            Decision::Buy => "BUY",
            Decision::Sell => "SELL",
            Decision::Hold => "HOLD",
            Decision::Unrecognized(raw) => raw,
        }
    }

    pub fn is_recognized(&self) -> bool {
        !matches!(self, Decision::Unrecognized(_))
    }

    /// Full class attribute for the decision badge.
    pub fn css_class(&self) -> String {
        if self.is_recognized() {
            format!("{} {}", BASE_CLASS, self.label())
        } else {
            BASE_CLASS.to_string()
        }
    }
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
