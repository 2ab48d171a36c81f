use std::path::Path;

use parkmeter_core::{model::Bounds, view::UnknownPricePolicy, view::DEFAULT_SLIDER_MAX};
use serde::{Deserialize, Serialize};

use super::{DatasetSource, GeocoderConfig};
use crate::ParkmeterError;

/// application configuration, read from TOML. every field has a default so
/// an empty file (or no file) is valid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParkmeterConfig {
    pub dataset: DatasetSource,
    /// price limit that means "no limit"
    pub slider_max: f64,
    pub unknown_price: UnknownPricePolicy,
    /// plausible extent of the dataset, used to report location anomalies
    pub bounds: Bounds,
    pub geocoder: GeocoderConfig,
}

impl Default for ParkmeterConfig {
    fn default() -> Self {
        Self {
            dataset: DatasetSource::default(),
            slider_max: DEFAULT_SLIDER_MAX,
            unknown_price: UnknownPricePolicy::default(),
            bounds: Bounds::default(),
            geocoder: GeocoderConfig::default(),
        }
    }
}

impl ParkmeterConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<ParkmeterConfig, ParkmeterError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| ParkmeterError::Io {
            path: path.to_str().unwrap_or_default().to_string(),
            source,
        })?;
        let config = Self::from_toml_str(&contents)?;
        log::debug!("loaded configuration from {path:?}");
        Ok(config)
    }

    pub fn from_toml_str(contents: &str) -> Result<ParkmeterConfig, ParkmeterError> {
        let config: ParkmeterConfig = toml::from_str(contents)?;
        if !(config.slider_max > 0.0) {
            return Err(ParkmeterError::InvalidUserInput(format!(
                "slider_max must be positive, found {}",
                config.slider_max
            )));
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::ParkmeterConfig;
    use crate::config::DatasetSource;
    use parkmeter_core::view::UnknownPricePolicy;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = ParkmeterConfig::from_toml_str("").unwrap();
        assert_eq!(config, ParkmeterConfig::default());
        assert_eq!(config.slider_max, 10.0);
    }

    #[test]
    fn test_partial_config() {
        let toml = r#"
            dataset = "https://opendata.vancouver.ca/parking-meters.json"
            unknown_price = "exclude"

            [geocoder]
            limit = 3
            bounded = false
        "#;
        let config = ParkmeterConfig::from_toml_str(toml).unwrap();
        assert!(matches!(config.dataset, DatasetSource::Url(_)));
        assert_eq!(config.unknown_price, UnknownPricePolicy::Exclude);
        assert_eq!(config.geocoder.limit, 3);
        assert!(!config.geocoder.bounded);
        assert_eq!(config.geocoder.country_codes.as_deref(), Some("ca"));
    }

    #[test]
    fn test_invalid_slider_max() {
        assert!(ParkmeterConfig::from_toml_str("slider_max = 0.0").is_err());
    }
}
