mod dataset_source;
mod geocoder_config;
mod parkmeter_config;

pub use dataset_source::DatasetSource;
pub use geocoder_config::GeocoderConfig;
pub use parkmeter_config::ParkmeterConfig;
