use serde::{Deserialize, Serialize};

use crate::model::GeoPoint;

/// one result of a free-text place search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaceCandidate {
    pub lat: f64,
    pub lon: f64,
    pub display_name: String,
}

impl PlaceCandidate {
    pub fn point(&self) -> GeoPoint {
        GeoPoint::new(self.lat, self.lon)
    }
}
