use parkmeter_core::model::Bounds;
use serde::{Deserialize, Serialize};

/// settings for free-text place search against a Nominatim server.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeocoderConfig {
    pub base_url: String,
    /// Nominatim's usage policy requires an identifying User-Agent
    pub user_agent: String,
    /// comma-separated ISO 3166-1 alpha-2 codes
    pub country_codes: Option<String>,
    pub limit: usize,
    /// prefer results inside this box
    pub viewbox: Option<Bounds>,
    /// only return results inside `viewbox`
    pub bounded: bool,
    pub timeout_secs: u64,
}

impl Default for GeocoderConfig {
    fn default() -> Self {
        Self {
            base_url: String::from("https://nominatim.openstreetmap.org"),
            user_agent: format!("parkmeter/{}", env!("CARGO_PKG_VERSION")),
            country_codes: Some(String::from("ca")),
            limit: 5,
            viewbox: Some(Bounds::default()),
            bounded: true,
            timeout_secs: 10,
        }
    }
}
