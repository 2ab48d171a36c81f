use serde::{Deserialize, Serialize};

/// top of the price slider in the map UI, in dollars.
pub const DEFAULT_SLIDER_MAX: f64 = 10.0;

/// maximum-price filter. a disabled filter keeps every record regardless
/// of threshold.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceFilter {
    pub enabled: bool,
    pub threshold: f64,
}

/// whether a record with no parsable price at the filter time passes an
/// enabled price filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnknownPricePolicy {
    /// unknown prices count as $0, as the source application does
    #[default]
    AsFree,
    /// unknown prices never pass an enabled filter
    Exclude,
}

impl Default for PriceFilter {
    fn default() -> Self {
        PriceFilter::unbounded()
    }
}

impl PriceFilter {
    pub fn unbounded() -> PriceFilter {
        PriceFilter {
            enabled: false,
            threshold: DEFAULT_SLIDER_MAX,
        }
    }

    pub fn at_most(threshold: f64) -> PriceFilter {
        PriceFilter {
            enabled: true,
            threshold,
        }
    }

    /// interprets a slider position: the slider's maximum means "no limit".
    pub fn from_slider(value: f64, slider_max: f64) -> PriceFilter {
        if value < slider_max {
            PriceFilter::at_most(value)
        } else {
            PriceFilter {
                enabled: false,
                threshold: slider_max,
            }
        }
    }

    pub fn accepts(&self, price: Option<f64>, policy: UnknownPricePolicy) -> bool {
        if !self.enabled {
            return true;
        }
        match (price, policy) {
            (Some(p), _) => p <= self.threshold,
            (None, UnknownPricePolicy::AsFree) => 0.0 <= self.threshold,
            (None, UnknownPricePolicy::Exclude) => false,
        }
    }
}
