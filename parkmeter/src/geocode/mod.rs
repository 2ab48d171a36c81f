mod geocode_error;
mod nominatim;

pub use geocode_error::GeocodeError;
pub use nominatim::{parse_search_response, NominatimClient};
