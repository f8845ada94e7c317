//! Custom Axum extractors.

mod catalog_params;
mod required_json;

pub use catalog_params::*;
pub use required_json::*;
