use serde::{Deserialize, Serialize};

use crate::provider::LocationError;

/// a message to surface to the user. failures are reported here and never
/// replace the last good state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "type", content = "detail")]
pub enum Notification {
    Location(LocationError),
    NoSearchResults,
    DatasetUnavailable(String),
    GeocodeFailed(String),
    InvalidInput(String),
}

impl std::fmt::Display for Notification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Notification::Location(e) => write!(f, "could not get current location: {e}"),
            Notification::NoSearchResults => write!(f, "no search results"),
            Notification::DatasetUnavailable(msg) => write!(f, "failed to load meter data: {msg}"),
            Notification::GeocodeFailed(msg) => write!(f, "address search failed: {msg}"),
            Notification::InvalidInput(msg) => write!(f, "{msg}"),
        }
    }
}
