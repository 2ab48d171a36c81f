use serde::Serialize;

use crate::{
    distance::distance_km,
    model::{GeoPoint, MeterRecord},
    rate::{parse_price, price_of, resolve_at, PriceTier, ReferenceTime},
};

/// flat projection of a meter for list, table and CSV output.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ViewRow {
    pub id: String,
    pub label: String,
    pub area: String,
    /// rate text at the selected time, "N/A" when none is posted
    pub rate: String,
    /// parsed rate, empty when the rate text holds no number
    pub price: Option<f64>,
    pub tier: PriceTier,
    pub distance_km: Option<f64>,
    pub accepts_card: bool,
    pub lat: Option<f64>,
    pub lon: Option<f64>,
    pub google_maps_url: Option<String>,
    pub apple_maps_url: Option<String>,
}

impl ViewRow {
    /// serialized field names, in output order.
    pub const COLUMNS: [&'static str; 12] = [
        "id",
        "label",
        "area",
        "rate",
        "price",
        "tier",
        "distance_km",
        "accepts_card",
        "lat",
        "lon",
        "google_maps_url",
        "apple_maps_url",
    ];

    pub fn new(record: &MeterRecord, time: &ReferenceTime, reference: Option<&GeoPoint>) -> ViewRow {
        let rate = resolve_at(record, time);
        let location = record.valid_location();
        let distance = match (reference.filter(|p| p.is_valid()), location) {
            (Some(origin), Some(p)) => Some(distance_km(origin, p)),
            _ => None,
        };
        ViewRow {
            id: record.id().to_string(),
            label: record.label().to_string(),
            area: record.area().to_string(),
            price: price_of(&rate),
            tier: PriceTier::from_price(parse_price(rate.as_posted())),
            rate: rate.to_string(),
            distance_km: distance,
            accepts_card: record.accepts_card(),
            lat: location.map(|p| p.lat),
            lon: location.map(|p| p.lon),
            google_maps_url: location.map(google_maps_url),
            apple_maps_url: location.map(apple_maps_url),
        }
    }
}

fn google_maps_url(point: &GeoPoint) -> String {
    format!(
        "https://www.google.com/maps/search/?api=1&query={},{}",
        point.lat, point.lon
    )
}

fn apple_maps_url(point: &GeoPoint) -> String {
    format!("http://maps.apple.com/?ll={},{}&q=Parking", point.lat, point.lon)
}

#[cfg(test)]
mod tests {
    use super::ViewRow;
    use crate::model::{GeoPoint, MeterRecord};
    use crate::rate::{DayClass, PriceTier, RateSlot, ReferenceTime, TimeBand};

    #[test]
    fn test_row_projection() {
        let record = MeterRecord::new("42", "Pay Station")
            .with_area("Downtown")
            .with_credit_card("Yes")
            .with_location(GeoPoint::new(49.28, -123.12))
            .with_rate(RateSlot::new(DayClass::Weekday, TimeBand::Morning), "$4.00");
        let time = ReferenceTime::new(1, 9).unwrap();
        let reference = GeoPoint::new(49.28, -123.12);
        let row = ViewRow::new(&record, &time, Some(&reference));
        assert_eq!(row.rate, "$4.00");
        assert_eq!(row.price, Some(4.0));
        assert_eq!(row.tier, PriceTier::High);
        assert_eq!(row.distance_km, Some(0.0));
        assert!(row.accepts_card);
        assert_eq!(
            row.google_maps_url.as_deref(),
            Some("https://www.google.com/maps/search/?api=1&query=49.28,-123.12")
        );
        assert_eq!(
            row.apple_maps_url.as_deref(),
            Some("http://maps.apple.com/?ll=49.28,-123.12&q=Parking")
        );
    }

    #[test]
    fn test_columns_match_serialized_fields() {
        let record = MeterRecord::new("1", "Single");
        let row = ViewRow::new(&record, &ReferenceTime::new(1, 10).unwrap(), None);
        let value = serde_json::to_value(&row).unwrap();
        let mut fields: Vec<&str> = value
            .as_object()
            .unwrap()
            .keys()
            .map(|k| k.as_str())
            .collect();
        let mut columns = ViewRow::COLUMNS.to_vec();
        fields.sort();
        columns.sort();
        assert_eq!(fields, columns);
    }

    #[test]
    fn test_row_without_rate_or_location() {
        let record = MeterRecord::new("7", "Single");
        let time = ReferenceTime::new(0, 23).unwrap();
        let row = ViewRow::new(&record, &time, Some(&GeoPoint::new(49.28, -123.12)));
        assert_eq!(row.rate, "N/A");
        assert_eq!(row.price, None);
        assert_eq!(row.tier, PriceTier::Low);
        assert_eq!(row.distance_km, None);
        assert!(row.google_maps_url.is_none());
    }
}
