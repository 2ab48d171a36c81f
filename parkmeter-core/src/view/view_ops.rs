use std::cmp::Reverse;

use itertools::Itertools;
use ordered_float::OrderedFloat;

use super::{SortOption, ViewQuery};
use crate::{
    distance::distance_km,
    model::{GeoPoint, MeterRecord},
    rate::{parse_price, resolve_at, ReferenceTime},
};

/// filters and orders the record collection into a new sequence. the input
/// is never modified, and identical inputs always yield identical output.
pub fn derive_view<'a>(records: &'a [MeterRecord], query: &ViewQuery) -> Vec<&'a MeterRecord> {
    let filtered = records
        .iter()
        .filter(|r| query.filters.matches(r, &query.filter_time))
        .collect_vec();
    log::debug!(
        "derive_view: {} of {} records pass filters at {}",
        filtered.len(),
        records.len(),
        query.filter_time
    );
    sort_records(
        filtered,
        query.sort,
        &query.now,
        query.reference_point.as_ref(),
    )
}

/// stable sort of records, ties keep their incoming order.
///
/// price orders use the rate in effect at `now`, with unknown rates
/// counting as $0. distance order is ascending from `reference`, with records
/// lacking a valid location placed last. without a valid reference point,
/// distance ordering leaves the sequence as-is.
pub fn sort_records<'a>(
    records: Vec<&'a MeterRecord>,
    sort: SortOption,
    now: &ReferenceTime,
    reference: Option<&GeoPoint>,
) -> Vec<&'a MeterRecord> {
    let current_price = |r: &&MeterRecord| {
        let rate = resolve_at(r, now);
        OrderedFloat(parse_price(rate.as_posted()))
    };
    match sort {
        SortOption::PriceAsc => records
            .into_iter()
            .sorted_by_cached_key(current_price)
            .collect_vec(),
        SortOption::PriceDesc => records
            .into_iter()
            .sorted_by_cached_key(|r| Reverse(current_price(r)))
            .collect_vec(),
        SortOption::Distance => match reference {
            Some(origin) if origin.is_valid() => records
                .into_iter()
                .sorted_by_cached_key(|r| match r.valid_location() {
                    Some(p) => (false, OrderedFloat(distance_km(origin, p))),
                    None => (true, OrderedFloat(0.0)),
                })
                .collect_vec(),
            Some(origin) => {
                log::warn!("ignoring distance sort from invalid reference point {origin}");
                records
            }
            None => records,
        },
    }
}

/// sorted, de-duplicated neighbourhood names, skipping records without one.
pub fn unique_areas(records: &[MeterRecord]) -> Vec<&str> {
    records
        .iter()
        .map(|r| r.area())
        .filter(|a| !a.is_empty())
        .unique()
        .sorted()
        .collect_vec()
}

/// first record whose neighbourhood contains the query, ignoring case.
pub fn search_area<'a>(records: &'a [MeterRecord], query: &str) -> Option<&'a MeterRecord> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return None;
    }
    records
        .iter()
        .find(|r| r.area().to_lowercase().contains(&query))
}

/// records that can be placed on a map.
pub fn mappable<'a, I>(records: I) -> Vec<&'a MeterRecord>
where
    I: IntoIterator<Item = &'a MeterRecord>,
{
    records
        .into_iter()
        .filter(|r| r.valid_location().is_some())
        .collect_vec()
}
