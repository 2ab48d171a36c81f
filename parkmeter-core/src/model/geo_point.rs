use geo::{coord, Intersects, Point, Rect};
use serde::{Deserialize, Serialize};

use crate::EngineError;

/// a WGS84 latitude/longitude pair, matching the `geo_point_2d` object
/// of the source dataset.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

impl GeoPoint {
    pub fn new(lat: f64, lon: f64) -> GeoPoint {
        GeoPoint { lat, lon }
    }

    /// builds a point, rejecting non-finite or out-of-range coordinates.
    pub fn try_new(lat: f64, lon: f64) -> Result<GeoPoint, EngineError> {
        let point = GeoPoint { lat, lon };
        if point.is_valid() {
            Ok(point)
        } else {
            Err(EngineError::InvalidCoordinate {
                lat,
                lon,
                msg: String::from("latitude must be in [-90,90] and longitude in [-180,180]"),
            })
        }
    }

    /// true if both coordinates are finite and within the WGS84 domain.
    /// callers must check this before computing distances or placing markers.
    pub fn is_valid(&self) -> bool {
        self.lat.is_finite()
            && self.lon.is_finite()
            && (-90.0..=90.0).contains(&self.lat)
            && (-180.0..=180.0).contains(&self.lon)
    }
}

impl From<GeoPoint> for Point<f64> {
    fn from(value: GeoPoint) -> Self {
        Point::new(value.lon, value.lat)
    }
}

impl From<Point<f64>> for GeoPoint {
    fn from(value: Point<f64>) -> Self {
        GeoPoint {
            lat: value.y(),
            lon: value.x(),
        }
    }
}

impl std::fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{},{}", self.lat, self.lon)
    }
}

/// plausibility box for a dataset. points outside of it are a data-quality
/// anomaly, not an error.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub min_lat: f64,
    pub max_lat: f64,
    pub min_lon: f64,
    pub max_lon: f64,
}

impl Default for Bounds {
    /// City of Vancouver and surroundings.
    fn default() -> Self {
        Self {
            min_lat: 49.0,
            max_lat: 49.5,
            min_lon: -123.5,
            max_lon: -122.5,
        }
    }
}

impl Bounds {
    /// tests if a point falls within the box, edges inclusive.
    pub fn contains(&self, point: &GeoPoint) -> bool {
        if !point.is_valid() {
            return false;
        }
        let rect = Rect::new(
            coord! { x: self.min_lon, y: self.min_lat },
            coord! { x: self.max_lon, y: self.max_lat },
        );
        rect.intersects(&Point::from(*point))
    }
}
