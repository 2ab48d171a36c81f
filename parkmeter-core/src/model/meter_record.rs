use serde::{Deserialize, Deserializer, Serialize};

use super::{Bounds, GeoPoint};
use crate::rate::{DayClass, RateSlot, TimeBand};

/// a single street-parking meter, deserialized from the City of Vancouver
/// open data schema. records are read-only once loaded; views are derived
/// from them, never written back.
///
/// every field other than `meterid` may be absent or null in the source data.
/// slot fields holding an empty string are treated the same as absent.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MeterRecord {
    #[serde(rename = "meterid")]
    id: String,
    #[serde(rename = "meterhead", default, deserialize_with = "null_as_default")]
    label: String,
    #[serde(default)]
    r_mf_9a_6p: Option<String>,
    #[serde(default)]
    r_mf_6p_10: Option<String>,
    #[serde(default)]
    r_sa_9a_6p: Option<String>,
    #[serde(default)]
    r_sa_6p_10: Option<String>,
    #[serde(default)]
    r_su_9a_6p: Option<String>,
    #[serde(default)]
    r_su_6p_10: Option<String>,
    #[serde(default)]
    rate_misc: Option<String>,
    #[serde(rename = "timeineffe", default)]
    operating_hours_text: Option<String>,
    #[serde(default)]
    t_mf_9a_6p: Option<String>,
    #[serde(default)]
    t_mf_6p_10: Option<String>,
    #[serde(default)]
    t_sa_9a_6p: Option<String>,
    #[serde(default)]
    t_sa_6p_10: Option<String>,
    #[serde(default)]
    t_su_9a_6p: Option<String>,
    #[serde(default)]
    t_su_6p_10: Option<String>,
    #[serde(default)]
    time_misc: Option<String>,
    #[serde(rename = "creditcard", default)]
    credit_card: Option<String>,
    #[serde(default)]
    pay_phone: Option<String>,
    #[serde(rename = "geo_local_area", default, deserialize_with = "null_as_default")]
    area: String,
    #[serde(rename = "geo_point_2d", default, deserialize_with = "partial_point_as_none")]
    location: Option<GeoPoint>,
}

impl MeterRecord {
    pub fn new(id: &str, label: &str) -> MeterRecord {
        MeterRecord {
            id: id.to_string(),
            label: label.to_string(),
            ..Default::default()
        }
    }

    pub fn with_rate(mut self, slot: RateSlot, rate: &str) -> MeterRecord {
        *self.rate_field_mut(slot) = Some(rate.to_string());
        self
    }

    pub fn with_time_limit(mut self, slot: RateSlot, limit: &str) -> MeterRecord {
        *self.time_limit_field_mut(slot) = Some(limit.to_string());
        self
    }

    pub fn with_location(mut self, location: GeoPoint) -> MeterRecord {
        self.location = Some(location);
        self
    }

    pub fn with_credit_card(mut self, credit_card: &str) -> MeterRecord {
        self.credit_card = Some(credit_card.to_string());
        self
    }

    pub fn with_area(mut self, area: &str) -> MeterRecord {
        self.area = area.to_string();
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// neighbourhood name, empty when the source omits it.
    pub fn area(&self) -> &str {
        &self.area
    }

    pub fn location(&self) -> Option<&GeoPoint> {
        self.location.as_ref()
    }

    /// location, only if it is usable for distance or map placement.
    pub fn valid_location(&self) -> Option<&GeoPoint> {
        self.location.as_ref().filter(|p| p.is_valid())
    }

    /// true when the record has a valid location outside of the plausible
    /// bounds for the dataset.
    pub fn is_location_anomaly(&self, bounds: &Bounds) -> bool {
        match self.valid_location() {
            Some(p) => !bounds.contains(p),
            None => self.location.is_some(),
        }
    }

    pub fn operating_hours_text(&self) -> Option<&str> {
        non_empty(&self.operating_hours_text)
    }

    pub fn rate_misc(&self) -> Option<&str> {
        non_empty(&self.rate_misc)
    }

    pub fn time_misc(&self) -> Option<&str> {
        non_empty(&self.time_misc)
    }

    pub fn pay_phone(&self) -> Option<&str> {
        non_empty(&self.pay_phone)
    }

    /// only an explicit "Yes" counts as card acceptance, absence is "no".
    pub fn accepts_card(&self) -> bool {
        self.credit_card
            .as_deref()
            .map(|s| s.trim().eq_ignore_ascii_case("yes"))
            .unwrap_or(false)
    }

    /// the posted rate text for a slot, if any.
    pub fn rate(&self, slot: RateSlot) -> Option<&str> {
        use DayClass as D;
        use TimeBand as T;
        let field = match (slot.day, slot.band) {
            (D::Weekday, T::Morning) => &self.r_mf_9a_6p,
            (D::Weekday, T::Evening) => &self.r_mf_6p_10,
            (D::Saturday, T::Morning) => &self.r_sa_9a_6p,
            (D::Saturday, T::Evening) => &self.r_sa_6p_10,
            (D::Sunday, T::Morning) => &self.r_su_9a_6p,
            (D::Sunday, T::Evening) => &self.r_su_6p_10,
        };
        non_empty(field)
    }

    /// the maximum-stay text for a slot, if any.
    pub fn time_limit(&self, slot: RateSlot) -> Option<&str> {
        use DayClass as D;
        use TimeBand as T;
        let field = match (slot.day, slot.band) {
            (D::Weekday, T::Morning) => &self.t_mf_9a_6p,
            (D::Weekday, T::Evening) => &self.t_mf_6p_10,
            (D::Saturday, T::Morning) => &self.t_sa_9a_6p,
            (D::Saturday, T::Evening) => &self.t_sa_6p_10,
            (D::Sunday, T::Morning) => &self.t_su_9a_6p,
            (D::Sunday, T::Evening) => &self.t_su_6p_10,
        };
        non_empty(field)
    }

    fn rate_field_mut(&mut self, slot: RateSlot) -> &mut Option<String> {
        use DayClass as D;
        use TimeBand as T;
        match (slot.day, slot.band) {
            (D::Weekday, T::Morning) => &mut self.r_mf_9a_6p,
            (D::Weekday, T::Evening) => &mut self.r_mf_6p_10,
            (D::Saturday, T::Morning) => &mut self.r_sa_9a_6p,
            (D::Saturday, T::Evening) => &mut self.r_sa_6p_10,
            (D::Sunday, T::Morning) => &mut self.r_su_9a_6p,
            (D::Sunday, T::Evening) => &mut self.r_su_6p_10,
        }
    }

    fn time_limit_field_mut(&mut self, slot: RateSlot) -> &mut Option<String> {
        use DayClass as D;
        use TimeBand as T;
        match (slot.day, slot.band) {
            (D::Weekday, T::Morning) => &mut self.t_mf_9a_6p,
            (D::Weekday, T::Evening) => &mut self.t_mf_6p_10,
            (D::Saturday, T::Morning) => &mut self.t_sa_9a_6p,
            (D::Saturday, T::Evening) => &mut self.t_sa_6p_10,
            (D::Sunday, T::Morning) => &mut self.t_su_9a_6p,
            (D::Sunday, T::Evening) => &mut self.t_su_6p_10,
        }
    }
}

fn non_empty(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|s| !s.trim().is_empty())
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    let value = Option::<T>::deserialize(deserializer)?;
    Ok(value.unwrap_or_default())
}

/// `geo_point_2d` as published, where either coordinate may be missing or null.
#[derive(Deserialize)]
struct PartialPoint {
    #[serde(default)]
    lat: Option<f64>,
    #[serde(default)]
    lon: Option<f64>,
}

/// a location is only kept when both coordinates are present.
fn partial_point_as_none<'de, D>(deserializer: D) -> Result<Option<GeoPoint>, D::Error>
where
    D: Deserializer<'de>,
{
    let point = Option::<PartialPoint>::deserialize(deserializer)?;
    Ok(point.and_then(|p| match (p.lat, p.lon) {
        (Some(lat), Some(lon)) => Some(GeoPoint::new(lat, lon)),
        _ => None,
    }))
}

#[cfg(test)]
mod tests {
    use super::MeterRecord;
    use crate::model::{Bounds, GeoPoint};
    use crate::rate::{DayClass, RateSlot, TimeBand};
    use serde_json::json;

    #[test]
    fn test_deserialize_source_schema() {
        let row = json!({
            "meterhead": "Twin",
            "r_mf_9a_6p": "$3.00",
            "r_mf_6p_10": "$1.00",
            "r_sa_9a_6p": "$3.00",
            "r_sa_6p_10": null,
            "r_su_9a_6p": "",
            "rate_misc": null,
            "timeineffe": "METER IN EFFECT: 9:00 AM TO 10:00 PM",
            "t_mf_9a_6p": "2 Hr",
            "creditcard": "Yes",
            "pay_phone": "66-1234",
            "geom": { "type": "Feature", "geometry": { "coordinates": [-123.1, 49.26], "type": "Point" }, "properties": {} },
            "meterid": "670805",
            "geo_local_area": "Kitsilano",
            "geo_point_2d": { "lon": -123.1, "lat": 49.26 }
        });
        let record: MeterRecord = serde_json::from_value(row).expect("test invariant failed");
        assert_eq!(record.id(), "670805");
        assert_eq!(record.label(), "Twin");
        assert_eq!(record.area(), "Kitsilano");
        assert!(record.accepts_card());
        assert_eq!(
            record.rate(RateSlot::new(DayClass::Weekday, TimeBand::Morning)),
            Some("$3.00")
        );
        assert_eq!(
            record.rate(RateSlot::new(DayClass::Saturday, TimeBand::Evening)),
            None
        );
        // empty string is not a posted rate
        assert_eq!(
            record.rate(RateSlot::new(DayClass::Sunday, TimeBand::Morning)),
            None
        );
        assert_eq!(
            record.time_limit(RateSlot::new(DayClass::Weekday, TimeBand::Morning)),
            Some("2 Hr")
        );
        assert_eq!(record.location(), Some(&GeoPoint::new(49.26, -123.1)));
        assert_eq!(record.pay_phone(), Some("66-1234"));
    }

    #[test]
    fn test_deserialize_sparse_record() {
        let row = json!({ "meterid": "1", "meterhead": null, "geo_local_area": null });
        let record: MeterRecord = serde_json::from_value(row).expect("test invariant failed");
        assert_eq!(record.label(), "");
        assert_eq!(record.area(), "");
        assert!(!record.accepts_card());
        assert!(record.location().is_none());
        assert!(record.operating_hours_text().is_none());
        for slot in RateSlot::ALL {
            assert!(record.rate(slot).is_none());
        }
    }

    #[test]
    fn test_partial_location_is_absent() {
        let row = json!({ "meterid": "1", "geo_point_2d": { "lat": 49.28 } });
        let record: MeterRecord = serde_json::from_value(row).expect("test invariant failed");
        assert!(record.location().is_none());
        let row = json!({ "meterid": "2", "geo_point_2d": { "lat": 49.28, "lon": null } });
        let record: MeterRecord = serde_json::from_value(row).expect("test invariant failed");
        assert!(record.location().is_none());
        let row = json!({ "meterid": "3", "geo_point_2d": null });
        let record: MeterRecord = serde_json::from_value(row).expect("test invariant failed");
        assert!(record.location().is_none());
    }

    #[test]
    fn test_card_flag() {
        assert!(MeterRecord::new("a", "a").with_credit_card("yes").accepts_card());
        assert!(!MeterRecord::new("a", "a").with_credit_card("No").accepts_card());
        assert!(!MeterRecord::new("a", "a").accepts_card());
    }

    #[test]
    fn test_location_anomaly() {
        let bounds = Bounds::default();
        let inside = MeterRecord::new("a", "a").with_location(GeoPoint::new(49.28, -123.12));
        let outside = MeterRecord::new("b", "b").with_location(GeoPoint::new(0.0, 0.0));
        let invalid = MeterRecord::new("c", "c").with_location(GeoPoint::new(f64::NAN, 0.0));
        let missing = MeterRecord::new("d", "d");
        assert!(!inside.is_location_anomaly(&bounds));
        assert!(outside.is_location_anomaly(&bounds));
        assert!(invalid.is_location_anomaly(&bounds));
        assert!(invalid.valid_location().is_none());
        assert!(!missing.is_location_anomaly(&bounds));
    }
}
