mod price_filter;
mod sort_option;
mod view_filters;
mod view_ops;
mod view_query;
mod view_row;

pub use price_filter::{PriceFilter, UnknownPricePolicy, DEFAULT_SLIDER_MAX};
pub use sort_option::SortOption;
pub use view_filters::ViewFilters;
pub use view_ops::{derive_view, mappable, search_area, sort_records, unique_areas};
pub use view_query::ViewQuery;
pub use view_row::ViewRow;
