use serde::{Deserialize, Serialize};

use super::{Notification, ViewMode};
use crate::{
    model::GeoPoint,
    rate::ReferenceTime,
    view::{PriceFilter, SortOption, ViewFilters, ViewQuery, DEFAULT_SLIDER_MAX},
};

pub const VANCOUVER_CENTER: GeoPoint = GeoPoint {
    lat: 49.2827,
    lon: -123.1207,
};
pub const DEFAULT_ZOOM: u8 = 12;
/// zoom after centering on the device location
pub const LOCATION_ZOOM: u8 = 14;
/// zoom after centering on a search result
pub const SEARCH_ZOOM: u8 = 15;

/// everything the map and list views render from. never mutated in place,
/// see [`super::reduce`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppState {
    pub filter_time: ReferenceTime,
    pub filters: ViewFilters,
    pub slider_max: f64,
    pub sort: SortOption,
    pub reference_point: Option<GeoPoint>,
    pub selected_meter: Option<String>,
    pub map_center: GeoPoint,
    pub map_zoom: u8,
    pub view_mode: ViewMode,
    pub notification: Option<Notification>,
}

impl AppState {
    /// initial state, filtering at the current time with no price limit.
    pub fn new(now: ReferenceTime) -> AppState {
        AppState {
            filter_time: now,
            filters: ViewFilters {
                price: PriceFilter::from_slider(DEFAULT_SLIDER_MAX, DEFAULT_SLIDER_MAX),
                ..Default::default()
            },
            slider_max: DEFAULT_SLIDER_MAX,
            sort: SortOption::default(),
            reference_point: None,
            selected_meter: None,
            map_center: VANCOUVER_CENTER,
            map_zoom: DEFAULT_ZOOM,
            view_mode: ViewMode::default(),
            notification: None,
        }
    }

    pub fn with_slider_max(mut self, slider_max: f64) -> AppState {
        self.slider_max = slider_max;
        self.filters.price = PriceFilter::from_slider(slider_max, slider_max);
        self
    }

    /// the view query for this state, ranking prices at `now`.
    pub fn query(&self, now: ReferenceTime) -> ViewQuery {
        ViewQuery::new(self.filter_time, now)
            .with_filters(self.filters.clone())
            .with_sort(self.sort)
            .with_reference_point(self.reference_point)
    }
}
