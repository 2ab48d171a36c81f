use serde::{Deserialize, Serialize};

use super::{PriceFilter, UnknownPricePolicy};
use crate::{
    model::MeterRecord,
    rate::{price_of, resolve_at, ReferenceTime},
};

/// conjunctive record filters. a record is kept only if it passes every
/// active filter.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ViewFilters {
    #[serde(default)]
    pub price: PriceFilter,
    #[serde(default)]
    pub unknown_price: UnknownPricePolicy,
    /// keep only meters that take credit cards
    #[serde(default)]
    pub card_only: bool,
    /// keep only meters in this neighbourhood (exact, case-insensitive)
    #[serde(default)]
    pub area: Option<String>,
}

impl ViewFilters {
    /// tests a record against all filters, pricing it at `time`.
    pub fn matches(&self, record: &MeterRecord, time: &ReferenceTime) -> bool {
        self.matches_price(record, time) && self.matches_card(record) && self.matches_area(record)
    }

    fn matches_price(&self, record: &MeterRecord, time: &ReferenceTime) -> bool {
        if !self.price.enabled {
            return true;
        }
        let price = price_of(&resolve_at(record, time));
        self.price.accepts(price, self.unknown_price)
    }

    fn matches_card(&self, record: &MeterRecord) -> bool {
        !self.card_only || record.accepts_card()
    }

    fn matches_area(&self, record: &MeterRecord) -> bool {
        match &self.area {
            Some(area) => record.area().eq_ignore_ascii_case(area.trim()),
            None => true,
        }
    }
}
