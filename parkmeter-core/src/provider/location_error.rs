use serde::{Deserialize, Serialize};

/// failure classes of a device geolocation request.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LocationError {
    #[error("location permission was denied")]
    PermissionDenied,
    #[error("location information is unavailable")]
    PositionUnavailable,
    #[error("the location request timed out")]
    Timeout,
    #[error("geolocation is not supported on this device")]
    Unsupported,
}
