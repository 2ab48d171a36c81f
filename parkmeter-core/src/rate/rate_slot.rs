use serde::{Deserialize, Serialize};

use super::{DayClass, TimeBand};

/// one of the six (day-class, time-band) rate columns of a meter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RateSlot {
    pub day: DayClass,
    pub band: TimeBand,
}

impl RateSlot {
    /// all slots, in display order.
    pub const ALL: [RateSlot; 6] = [
        RateSlot::new(DayClass::Weekday, TimeBand::Morning),
        RateSlot::new(DayClass::Weekday, TimeBand::Evening),
        RateSlot::new(DayClass::Saturday, TimeBand::Morning),
        RateSlot::new(DayClass::Saturday, TimeBand::Evening),
        RateSlot::new(DayClass::Sunday, TimeBand::Morning),
        RateSlot::new(DayClass::Sunday, TimeBand::Evening),
    ];

    pub const fn new(day: DayClass, band: TimeBand) -> RateSlot {
        RateSlot { day, band }
    }

    /// the slot in effect at a day-of-week index (0 = Sunday) and hour,
    /// or None outside of enforcement hours.
    pub fn at(day: u32, hour: u32) -> Option<RateSlot> {
        TimeBand::from_hour(hour).map(|band| RateSlot::new(DayClass::from_weekday_index(day), band))
    }
}

impl std::fmt::Display for RateSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.day, self.band.window_label())
    }
}
