use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// where the meter dataset is read from. values starting with http:// or
/// https:// are fetched, anything else is a local file path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum DatasetSource {
    File(PathBuf),
    Url(String),
}

impl Default for DatasetSource {
    fn default() -> Self {
        DatasetSource::File(PathBuf::from("data/parking-meters.json"))
    }
}

impl From<String> for DatasetSource {
    fn from(value: String) -> Self {
        DatasetSource::from(value.as_str())
    }
}

impl From<&str> for DatasetSource {
    fn from(value: &str) -> Self {
        let trimmed = value.trim();
        if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
            DatasetSource::Url(trimmed.to_string())
        } else {
            DatasetSource::File(PathBuf::from(trimmed))
        }
    }
}

impl From<DatasetSource> for String {
    fn from(value: DatasetSource) -> Self {
        value.to_string()
    }
}

impl std::fmt::Display for DatasetSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DatasetSource::File(path) => write!(f, "{}", path.to_str().unwrap_or_default()),
            DatasetSource::Url(url) => write!(f, "{url}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::DatasetSource;
    use std::path::PathBuf;

    #[test]
    fn test_from_str() {
        assert_eq!(
            DatasetSource::from("https://example.com/data/parking-meters.json"),
            DatasetSource::Url(String::from("https://example.com/data/parking-meters.json"))
        );
        assert_eq!(
            DatasetSource::from("data/meters.json"),
            DatasetSource::File(PathBuf::from("data/meters.json"))
        );
    }
}
