use serde::{Deserialize, Serialize};

use super::{SortOption, ViewFilters};
use crate::{model::GeoPoint, rate::ReferenceTime};

/// everything needed to derive a view from the record collection.
///
/// the filter time is the user-selected day/hour used for price filtering.
/// `now` is the injected clock used for price sorting, which always ranks by
/// the rate currently in effect.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewQuery {
    pub filters: ViewFilters,
    pub sort: SortOption,
    pub filter_time: ReferenceTime,
    pub now: ReferenceTime,
    pub reference_point: Option<GeoPoint>,
}

impl ViewQuery {
    pub fn new(filter_time: ReferenceTime, now: ReferenceTime) -> ViewQuery {
        ViewQuery {
            filters: ViewFilters::default(),
            sort: SortOption::default(),
            filter_time,
            now,
            reference_point: None,
        }
    }

    pub fn with_filters(mut self, filters: ViewFilters) -> ViewQuery {
        self.filters = filters;
        self
    }

    pub fn with_sort(mut self, sort: SortOption) -> ViewQuery {
        self.sort = sort;
        self
    }

    pub fn with_reference_point(mut self, point: Option<GeoPoint>) -> ViewQuery {
        self.reference_point = point;
        self
    }
}
