use rusty_money::iso;
use std::fmt;

/// Market suffix that marks an NSE listing in the legacy payloads.
const NSE_SUFFIX: &str = ".NS";

/// Display currency of a prediction.
///
/// Resolved once per result and reused by the price fields, the y axis and
/// the chart tooltips, so all of them always agree.
#[derive(Clone, Copy)]
pub struct Currency {
    iso: &'static iso::Currency,
}

impl Currency {
    pub fn usd() -> Self {
        Self { iso: iso::USD }
    }

    pub fn inr() -> Self {
        Self { iso: iso::INR }
    }

    /// Looks up an ISO 4217 code, case-insensitively.
    pub fn from_code(code: &str) -> Option<Self> {
        iso::find(&code.trim().to_uppercase()).map(|iso| Self { iso })
    }

    /// Picks the currency for a response.
    ///
    /// A declared, known ISO code wins. Otherwise the legacy rule applies:
    /// rupees when the first date string carries the `.NS` suffix, dollars
    /// in every other case (including an empty date list).
    pub fn resolve(declared: Option<&str>, dates: &[String]) -> Self {
        if let Some(code) = declared {
            match Self::from_code(code) {
                Some(currency) => return currency,
                None => tracing::warn!("Unknown currency code {:?}, using symbol heuristic", code),
            }
        }

        match dates.first() {
            Some(first) if first.contains(NSE_SUFFIX) => Self::inr(),
            _ => Self::usd(),
        }
    }

    pub fn symbol(&self) -> &'static str {
        self.iso.symbol
    }

    pub fn code(&self) -> &'static str {
        self.iso.iso_alpha_code
    }
}

impl Default for Currency {
    fn default() -> Self {
        Self::usd()
    }
}

impl PartialEq for Currency {
    fn eq(&self, other: &Self) -> bool {
        self.code() == other.code()
    }
}

impl Eq for Currency {}

impl fmt::Debug for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Currency").field(&self.code()).finish()
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}
