use chrono::{Datelike, NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};

use super::RateSlot;
use crate::EngineError;

/// a day-of-week index (0 = Sunday .. 6 = Saturday) and hour of day
/// (0..23) used to pick a rate slot. used both for the user-selected
/// filter time and for the injected "now" clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ReferenceTimeFields")]
pub struct ReferenceTime {
    day: u32,
    hour: u32,
}

/// unchecked serialized form, validated through [`ReferenceTime::new`].
#[derive(Deserialize)]
struct ReferenceTimeFields {
    day: u32,
    hour: u32,
}

impl TryFrom<ReferenceTimeFields> for ReferenceTime {
    type Error = EngineError;

    fn try_from(value: ReferenceTimeFields) -> Result<Self, Self::Error> {
        ReferenceTime::new(value.day, value.hour)
    }
}

impl ReferenceTime {
    pub fn new(day: u32, hour: u32) -> Result<ReferenceTime, EngineError> {
        if day > 6 || hour > 23 {
            Err(EngineError::InvalidReferenceTime { day, hour })
        } else {
            Ok(ReferenceTime { day, hour })
        }
    }

    pub fn from_datetime(datetime: &NaiveDateTime) -> ReferenceTime {
        ReferenceTime {
            day: datetime.weekday().num_days_from_sunday(),
            hour: datetime.hour(),
        }
    }

    pub fn day(&self) -> u32 {
        self.day
    }

    pub fn hour(&self) -> u32 {
        self.hour
    }

    pub fn slot(&self) -> Option<RateSlot> {
        RateSlot::at(self.day, self.hour)
    }
}

impl std::fmt::Display for ReferenceTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        const DAYS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];
        let day = DAYS.get(self.day as usize).unwrap_or(&"?");
        write!(f, "{} {:02}:00", day, self.hour)
    }
}
