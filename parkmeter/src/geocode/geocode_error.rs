#[derive(thiserror::Error, Debug)]
pub enum GeocodeError {
    #[error("search query is empty")]
    EmptyQuery,
    #[error("failed to build geocoding client: {0}")]
    ClientBuildError(reqwest::Error),
    #[error("geocoding request failed: {0}")]
    RequestError(#[from] reqwest::Error),
    #[error("failed to parse geocoding response: {0}")]
    ResponseParseError(#[from] serde_json::Error),
}
