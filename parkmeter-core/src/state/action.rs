use serde::{Deserialize, Serialize};

use super::ViewMode;
use crate::{
    model::GeoPoint,
    provider::{LocationError, PlaceCandidate},
    view::{PriceFilter, SortOption, UnknownPricePolicy},
};

/// a state transition request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "type", content = "value")]
pub enum Action {
    /// day-of-week index for price filtering, 0 = Sunday
    SetDay(u32),
    /// hour of day for price filtering
    SetHour(u32),
    /// raw slider position, where the slider maximum means "no limit"
    SetPriceSlider(f64),
    SetPriceFilter(PriceFilter),
    SetUnknownPrice(UnknownPricePolicy),
    SetCardOnly(bool),
    SetArea(Option<String>),
    SetSort(SortOption),
    SelectMeter(Option<String>),
    SetViewMode(ViewMode),
    LocationResolved(GeoPoint),
    LocationFailed(LocationError),
    PlaceSelected(PlaceCandidate),
    AreaSearchHit { id: String, point: Option<GeoPoint> },
    AreaSearchMiss,
    GeocodeFailed(String),
    DatasetFailed(String),
    DismissNotification,
}
