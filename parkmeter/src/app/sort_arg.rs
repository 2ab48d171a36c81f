use clap::ValueEnum;
use parkmeter_core::view::SortOption;
use serde::{Deserialize, Serialize};

/// command line names for [`SortOption`].
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum SortArg {
    #[default]
    PriceAsc,
    PriceDesc,
    Distance,
}

impl From<SortArg> for SortOption {
    fn from(value: SortArg) -> Self {
        match value {
            SortArg::PriceAsc => SortOption::PriceAsc,
            SortArg::PriceDesc => SortOption::PriceDesc,
            SortArg::Distance => SortOption::Distance,
        }
    }
}
