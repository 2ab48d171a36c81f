use chrono::Weekday;
use serde::{Deserialize, Serialize};

/// posted rates differ between weekdays, Saturdays and Sundays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayClass {
    Weekday,
    Saturday,
    Sunday,
}

impl DayClass {
    /// classifies a day-of-week index where 0 is Sunday and 6 is Saturday.
    /// every other index is treated as a weekday.
    pub fn from_weekday_index(day: u32) -> DayClass {
        match day {
            0 => DayClass::Sunday,
            6 => DayClass::Saturday,
            _ => DayClass::Weekday,
        }
    }
}

impl From<Weekday> for DayClass {
    fn from(value: Weekday) -> Self {
        DayClass::from_weekday_index(value.num_days_from_sunday())
    }
}

impl std::fmt::Display for DayClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DayClass::Weekday => write!(f, "weekday"),
            DayClass::Saturday => write!(f, "saturday"),
            DayClass::Sunday => write!(f, "sunday"),
        }
    }
}
