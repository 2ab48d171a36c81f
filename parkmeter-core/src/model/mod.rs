mod geo_point;
mod meter_record;

pub use geo_point::{Bounds, GeoPoint};
pub use meter_record::MeterRecord;
