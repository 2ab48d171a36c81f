use serde::{Deserialize, Serialize};

use super::{RateSlot, ReferenceTime};
use crate::model::MeterRecord;

/// display text of the "no posted rate" sentinel.
pub const NOT_APPLICABLE: &str = "N/A";

/// the rate applying to a meter at some time. `NotApplicable` covers both
/// unenforced hours and slots the record does not post a rate for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rate {
    Posted(String),
    NotApplicable,
}

impl Rate {
    pub fn as_posted(&self) -> Option<&str> {
        match self {
            Rate::Posted(text) => Some(text),
            Rate::NotApplicable => None,
        }
    }
}

impl std::fmt::Display for Rate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Rate::Posted(text) => write!(f, "{text}"),
            Rate::NotApplicable => write!(f, "{NOT_APPLICABLE}"),
        }
    }
}

/// finds the posted rate for a meter at a day-of-week index (0 = Sunday,
/// 6 = Saturday, anything else a weekday) and hour of day.
///
/// hours outside of 9:00-22:00 are unenforced and resolve to
/// [`Rate::NotApplicable`], as does a slot the record leaves empty.
pub fn resolve_rate(record: &MeterRecord, day: u32, hour: u32) -> Rate {
    match RateSlot::at(day, hour) {
        Some(slot) => resolve_slot(record, slot),
        None => Rate::NotApplicable,
    }
}

/// [`resolve_rate`] for a validated [`ReferenceTime`].
pub fn resolve_at(record: &MeterRecord, time: &ReferenceTime) -> Rate {
    resolve_rate(record, time.day(), time.hour())
}

pub(crate) fn resolve_slot(record: &MeterRecord, slot: RateSlot) -> Rate {
    match record.rate(slot) {
        Some(text) => Rate::Posted(text.to_string()),
        None => Rate::NotApplicable,
    }
}

#[cfg(test)]
mod tests {
    use super::{resolve_rate, Rate};
    use crate::model::MeterRecord;
    use crate::rate::{DayClass, RateSlot, TimeBand};

    /// every slot carries a distinct rate so a wrong pick is detectable
    fn fully_posted() -> MeterRecord {
        MeterRecord::new("m1", "Single")
            .with_rate(RateSlot::new(DayClass::Weekday, TimeBand::Morning), "$1.00")
            .with_rate(RateSlot::new(DayClass::Weekday, TimeBand::Evening), "$2.00")
            .with_rate(RateSlot::new(DayClass::Saturday, TimeBand::Morning), "$3.00")
            .with_rate(RateSlot::new(DayClass::Saturday, TimeBand::Evening), "$4.00")
            .with_rate(RateSlot::new(DayClass::Sunday, TimeBand::Morning), "$5.00")
            .with_rate(RateSlot::new(DayClass::Sunday, TimeBand::Evening), "$6.00")
    }

    #[test]
    fn test_every_day_and_hour() {
        let record = fully_posted();
        for day in 0..=6 {
            for hour in 0..=23 {
                let expected = match (day, hour) {
                    (_, h) if !(9..22).contains(&h) => None,
                    (0, h) if h < 18 => Some("$5.00"),
                    (0, _) => Some("$6.00"),
                    (6, h) if h < 18 => Some("$3.00"),
                    (6, _) => Some("$4.00"),
                    (_, h) if h < 18 => Some("$1.00"),
                    _ => Some("$2.00"),
                };
                let result = resolve_rate(&record, day, hour);
                assert_eq!(
                    result.as_posted(),
                    expected,
                    "wrong rate for day {day}, hour {hour}"
                );
            }
        }
    }

    #[test]
    fn test_missing_slot_is_not_applicable() {
        let record = MeterRecord::new("m2", "Twin")
            .with_rate(RateSlot::new(DayClass::Weekday, TimeBand::Morning), "$3.50");
        assert_eq!(resolve_rate(&record, 2, 10), Rate::Posted("$3.50".into()));
        assert_eq!(resolve_rate(&record, 2, 19), Rate::NotApplicable);
        assert_eq!(resolve_rate(&record, 0, 10), Rate::NotApplicable);
        assert_eq!(resolve_rate(&record, 2, 23).to_string(), "N/A");
    }
}
