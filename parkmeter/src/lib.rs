pub mod app;
pub mod config;
pub mod dataset;
mod error;
pub mod geocode;

pub use error::ParkmeterError;
