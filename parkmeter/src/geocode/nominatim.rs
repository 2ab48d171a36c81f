use std::time::Duration;

use parkmeter_core::provider::PlaceCandidate;
use serde::Deserialize;

use super::GeocodeError;
use crate::config::GeocoderConfig;

/// free-text place search against a Nominatim `/search` endpoint.
pub struct NominatimClient {
    config: GeocoderConfig,
    client: reqwest::blocking::Client,
}

/// the subset of a Nominatim JSON result we use. coordinates arrive as
/// strings.
#[derive(Debug, Deserialize)]
struct NominatimPlace {
    lat: String,
    lon: String,
    #[serde(default)]
    display_name: String,
}

impl NominatimClient {
    pub fn new(config: GeocoderConfig) -> Result<NominatimClient, GeocodeError> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(config.user_agent.clone())
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(GeocodeError::ClientBuildError)?;
        Ok(NominatimClient { config, client })
    }

    /// searches for places matching `query`, returning zero or more candidates.
    pub fn search(&self, query: &str) -> Result<Vec<PlaceCandidate>, GeocodeError> {
        let query = query.trim();
        if query.is_empty() {
            return Err(GeocodeError::EmptyQuery);
        }
        let url = format!("{}/search", self.config.base_url.trim_end_matches('/'));
        let params = self.query_params(query);
        log::debug!("geocoding '{query}' via {url}");
        let body = self
            .client
            .get(&url)
            .query(&params)
            .send()?
            .error_for_status()?
            .text()?;
        let candidates = parse_search_response(&body)?;
        log::info!("found {} places for '{query}'", candidates.len());
        Ok(candidates)
    }

    fn query_params(&self, query: &str) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("q", query.to_string()),
            ("format", String::from("json")),
            ("limit", self.config.limit.to_string()),
        ];
        if let Some(codes) = &self.config.country_codes {
            params.push(("countrycodes", codes.clone()));
        }
        if let Some(b) = &self.config.viewbox {
            // x1,y1,x2,y2
            params.push((
                "viewbox",
                format!("{},{},{},{}", b.min_lon, b.max_lat, b.max_lon, b.min_lat),
            ));
            if self.config.bounded {
                params.push(("bounded", String::from("1")));
            }
        }
        params
    }
}

/// parses the JSON array returned by Nominatim. entries with unparsable or
/// invalid coordinates are skipped.
pub fn parse_search_response(body: &str) -> Result<Vec<PlaceCandidate>, GeocodeError> {
    let places: Vec<NominatimPlace> = serde_json::from_str(body)?;
    let candidates = places
        .into_iter()
        .filter_map(|place| {
            let lat = place.lat.trim().parse::<f64>().ok();
            let lon = place.lon.trim().parse::<f64>().ok();
            match (lat, lon) {
                (Some(lat), Some(lon)) => {
                    let candidate = PlaceCandidate {
                        lat,
                        lon,
                        display_name: place.display_name,
                    };
                    if candidate.point().is_valid() {
                        Some(candidate)
                    } else {
                        log::warn!("skipping place with invalid coordinates ({lat},{lon})");
                        None
                    }
                }
                _ => {
                    log::warn!(
                        "skipping place with unparsable coordinates ({},{})",
                        place.lat,
                        place.lon
                    );
                    None
                }
            }
        })
        .collect();
    Ok(candidates)
}
