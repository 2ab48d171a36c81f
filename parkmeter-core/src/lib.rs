pub mod distance;
pub mod error;
pub mod model;
pub mod provider;
pub mod rate;
pub mod state;
pub mod view;

pub use error::EngineError;
