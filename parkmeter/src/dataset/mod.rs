mod dataset_summary;
mod loader;

pub use dataset_summary::DatasetSummary;
pub use loader::{load_records, parse_records};
