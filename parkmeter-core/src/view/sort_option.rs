use serde::{Deserialize, Serialize};

/// ordering of a derived view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortOption {
    /// cheapest first, by the rate in effect now
    #[default]
    PriceAsc,
    /// most expensive first, by the rate in effect now
    PriceDesc,
    /// nearest to the reference point first
    Distance,
}

impl std::fmt::Display for SortOption {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SortOption::PriceAsc => write!(f, "price-asc"),
            SortOption::PriceDesc => write!(f, "price-desc"),
            SortOption::Distance => write!(f, "distance"),
        }
    }
}
