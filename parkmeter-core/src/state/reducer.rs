use super::{Action, AppState, Notification, LOCATION_ZOOM, SEARCH_ZOOM};
use crate::{model::GeoPoint, provider::LocationError, rate::ReferenceTime, view::PriceFilter};

/// computes the state following `action`. the input state is left untouched.
/// failed actions only set a notification, all other fields keep their
/// previous values.
pub fn reduce(state: &AppState, action: Action) -> AppState {
    let mut next = state.clone();
    match action {
        Action::SetDay(day) => set_filter_time(&mut next, day, state.filter_time.hour()),
        Action::SetHour(hour) => set_filter_time(&mut next, state.filter_time.day(), hour),
        Action::SetPriceSlider(value) => {
            next.filters.price = PriceFilter::from_slider(value, state.slider_max);
        }
        Action::SetPriceFilter(filter) => next.filters.price = filter,
        Action::SetUnknownPrice(policy) => next.filters.unknown_price = policy,
        Action::SetCardOnly(card_only) => next.filters.card_only = card_only,
        Action::SetArea(area) => {
            next.filters.area = area.filter(|a| !a.trim().is_empty());
        }
        Action::SetSort(sort) => next.sort = sort,
        Action::SelectMeter(id) => next.selected_meter = id,
        Action::SetViewMode(mode) => next.view_mode = mode,
        Action::LocationResolved(point) => {
            if point.is_valid() {
                center_on(&mut next, point, LOCATION_ZOOM);
                next.reference_point = Some(point);
            } else {
                log::warn!("discarding invalid device location {point}");
                next.notification = Some(Notification::Location(
                    LocationError::PositionUnavailable,
                ));
            }
        }
        Action::LocationFailed(error) => next.notification = Some(Notification::Location(error)),
        Action::PlaceSelected(candidate) => {
            let point = candidate.point();
            if point.is_valid() {
                center_on(&mut next, point, SEARCH_ZOOM);
                next.reference_point = Some(point);
            } else {
                next.notification = Some(Notification::GeocodeFailed(format!(
                    "invalid coordinates for '{}'",
                    candidate.display_name
                )));
            }
        }
        Action::AreaSearchHit { id, point } => {
            if let Some(p) = point.filter(|p| p.is_valid()) {
                center_on(&mut next, p, SEARCH_ZOOM);
            }
            next.selected_meter = Some(id);
        }
        Action::AreaSearchMiss => next.notification = Some(Notification::NoSearchResults),
        Action::GeocodeFailed(msg) => next.notification = Some(Notification::GeocodeFailed(msg)),
        Action::DatasetFailed(msg) => {
            next.notification = Some(Notification::DatasetUnavailable(msg))
        }
        Action::DismissNotification => next.notification = None,
    }
    next
}

fn set_filter_time(state: &mut AppState, day: u32, hour: u32) {
    match ReferenceTime::new(day, hour) {
        Ok(time) => state.filter_time = time,
        Err(e) => state.notification = Some(Notification::InvalidInput(e.to_string())),
    }
}

fn center_on(state: &mut AppState, point: GeoPoint, zoom: u8) {
    state.map_center = point;
    state.map_zoom = zoom;
}
