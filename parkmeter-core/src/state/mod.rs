//! UI state as an immutable value. every transition goes through
//! [`reduce`], the rendering layer observes the resulting states.
mod action;
mod app_state;
mod notification;
mod reducer;
mod view_mode;

pub use action::Action;
pub use app_state::{AppState, DEFAULT_ZOOM, LOCATION_ZOOM, SEARCH_ZOOM, VANCOUVER_CENTER};
pub use notification::Notification;
pub use reducer::reduce;
pub use view_mode::ViewMode;
