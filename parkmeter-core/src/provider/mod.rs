//! plain values handed to the engine by reference-point providers. how a
//! point was obtained (device geolocation, free-text place search) is not
//! the engine's concern.
mod location_error;
mod place_candidate;

pub use location_error::LocationError;
pub use place_candidate::PlaceCandidate;
