use parkmeter_core::model::{Bounds, MeterRecord};

/// data-quality counts reported after a dataset load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatasetSummary {
    pub total: usize,
    pub without_location: usize,
    pub location_anomalies: usize,
    pub without_rates: usize,
}

impl DatasetSummary {
    pub fn new(records: &[MeterRecord], bounds: &Bounds) -> DatasetSummary {
        DatasetSummary {
            total: records.len(),
            without_location: records.iter().filter(|r| r.location().is_none()).count(),
            location_anomalies: records
                .iter()
                .filter(|r| r.is_location_anomaly(bounds))
                .count(),
            without_rates: records
                .iter()
                .filter(|r| {
                    parkmeter_core::rate::RateSlot::ALL
                        .iter()
                        .all(|slot| r.rate(*slot).is_none())
                })
                .count(),
        }
    }

    pub fn log(&self) {
        log::info!("loaded {} parking meters", self.total);
        if self.without_location > 0 {
            log::warn!("{} meters have no location", self.without_location);
        }
        if self.location_anomalies > 0 {
            log::warn!(
                "{} meters have a location outside of the expected bounds",
                self.location_anomalies
            );
        }
        if self.without_rates > 0 {
            log::info!("{} meters post no rate in any slot", self.without_rates);
        }
    }
}
