use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use super::Rate;

/// first numeric token, optionally preceded by a dollar sign.
static PRICE_TOKEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\$?(\d+(?:\.\d+)?|\.\d+)").expect("price token pattern is valid")
});

/// extracts a price from free-form rate text, e.g. "$3.50/hr" -> 3.5.
///
/// missing text, or text without any numeric token (such as "N/A"), parses
/// to 0. this conflates "free" with "unknown"; use [`price_of`] or
/// [`parse_price_text`] when the difference matters.
pub fn parse_price(text: Option<&str>) -> f64 {
    text.and_then(parse_price_text).unwrap_or(0.0)
}

/// extracts a price from rate text, or None if no numeric token exists.
pub fn parse_price_text(text: &str) -> Option<f64> {
    PRICE_TOKEN
        .captures(text)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse::<f64>().ok())
}

/// numeric price of a resolved rate, keeping "unknown" distinct from zero.
pub fn price_of(rate: &Rate) -> Option<f64> {
    rate.as_posted().and_then(parse_price_text)
}

/// price category used to colour map markers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PriceTier {
    /// below $3
    Low,
    /// $3 up to $4
    Medium,
    /// $4 and above
    High,
}

impl PriceTier {
    pub fn from_price(price: f64) -> PriceTier {
        if price >= 4.0 {
            PriceTier::High
        } else if price >= 3.0 {
            PriceTier::Medium
        } else {
            PriceTier::Low
        }
    }

    pub fn colour_hex(&self) -> &'static str {
        match self {
            PriceTier::Low => "#10b981",
            PriceTier::Medium => "#f59e0b",
            PriceTier::High => "#ef4444",
        }
    }
}

impl std::fmt::Display for PriceTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PriceTier::Low => write!(f, "low"),
            PriceTier::Medium => write!(f, "medium"),
            PriceTier::High => write!(f, "high"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{parse_price, parse_price_text, price_of, PriceTier};
    use crate::rate::Rate;

    #[test]
    fn test_parse_price() {
        assert_eq!(parse_price(Some("$3.50")), 3.5);
        assert_eq!(parse_price(Some("$3.50/hr")), 3.5);
        assert_eq!(parse_price(Some("$4/hr max 2hr")), 4.0);
        assert_eq!(parse_price(Some("1.00")), 1.0);
        assert_eq!(parse_price(Some("N/A")), 0.0);
        assert_eq!(parse_price(Some("")), 0.0);
        assert_eq!(parse_price(None), 0.0);
    }

    #[test]
    fn test_unknown_is_distinguishable() {
        assert_eq!(parse_price_text("N/A"), None);
        assert_eq!(parse_price_text("$0.00"), Some(0.0));
        assert_eq!(price_of(&Rate::NotApplicable), None);
        assert_eq!(price_of(&Rate::Posted("$2.25".into())), Some(2.25));
        assert_eq!(price_of(&Rate::Posted("Free".into())), None);
    }

    #[test]
    fn test_price_tier() {
        assert_eq!(PriceTier::from_price(0.0), PriceTier::Low);
        assert_eq!(PriceTier::from_price(2.99), PriceTier::Low);
        assert_eq!(PriceTier::from_price(3.0), PriceTier::Medium);
        assert_eq!(PriceTier::from_price(4.0), PriceTier::High);
        assert_eq!(PriceTier::High.colour_hex(), "#ef4444");
    }
}
