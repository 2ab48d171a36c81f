use parkmeter_core::EngineError;

use crate::geocode::GeocodeError;

#[derive(thiserror::Error, Debug)]
pub enum ParkmeterError {
    #[error("failure reading '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("failed to parse meter dataset: {0}")]
    Json(#[from] serde_json::Error),
    #[error("failed to parse configuration: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("failed to download meter dataset: {0}")]
    Http(#[from] reqwest::Error),
    #[error(transparent)]
    Geocode(#[from] GeocodeError),
    #[error(transparent)]
    Engine(#[from] EngineError),
    #[error("failure writing output: {0}")]
    Output(String),
    #[error("{0}")]
    InvalidUserInput(String),
}
