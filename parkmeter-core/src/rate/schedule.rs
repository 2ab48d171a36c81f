use serde::Serialize;

use super::{rate_resolver::resolve_slot, Rate, RateSlot, ReferenceTime};
use crate::model::MeterRecord;

/// one row of a meter's weekly rate table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScheduleEntry {
    pub slot: RateSlot,
    pub window: &'static str,
    pub rate: Rate,
    pub time_limit: Option<String>,
    /// true for the slot in effect at the time the schedule was built for
    pub is_active: bool,
}

/// lists all six rate slots of a meter, flagging the one active at `now`.
/// outside of enforcement hours no entry is active.
pub fn rate_schedule(record: &MeterRecord, now: &ReferenceTime) -> Vec<ScheduleEntry> {
    let active = now.slot();
    RateSlot::ALL
        .iter()
        .map(|slot| ScheduleEntry {
            slot: *slot,
            window: slot.band.window_label(),
            rate: resolve_slot(record, *slot),
            time_limit: record.time_limit(*slot).map(String::from),
            is_active: active == Some(*slot),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::rate_schedule;
    use crate::model::MeterRecord;
    use crate::rate::{DayClass, Rate, RateSlot, ReferenceTime, TimeBand};

    #[test]
    fn test_schedule_active_slot() {
        let slot = RateSlot::new(DayClass::Saturday, TimeBand::Evening);
        let record = MeterRecord::new("m1", "Single")
            .with_rate(slot, "$2.00")
            .with_time_limit(slot, "4 Hr");
        let now = ReferenceTime::new(6, 20).unwrap();
        let schedule = rate_schedule(&record, &now);
        assert_eq!(schedule.len(), 6);
        let active: Vec<_> = schedule.iter().filter(|e| e.is_active).collect();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].slot, slot);
        assert_eq!(active[0].rate, Rate::Posted("$2.00".into()));
        assert_eq!(active[0].time_limit.as_deref(), Some("4 Hr"));
        assert_eq!(active[0].window, "6pm-10pm");
        assert_eq!(schedule[0].rate, Rate::NotApplicable);
    }

    #[test]
    fn test_schedule_closed() {
        let record = MeterRecord::new("m1", "Single");
        let now = ReferenceTime::new(3, 2).unwrap();
        assert!(rate_schedule(&record, &now).iter().all(|e| !e.is_active));
    }
}
