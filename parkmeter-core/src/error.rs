#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum EngineError {
    #[error("invalid reference time: day {day} must be in [0,6] and hour {hour} in [0,23]")]
    InvalidReferenceTime { day: u32, hour: u32 },
    #[error("invalid coordinate ({lat},{lon}): {msg}")]
    InvalidCoordinate { lat: f64, lon: f64, msg: String },
}
