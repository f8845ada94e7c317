//! # Pokedex REST
//!
//! REST API layer using Axum.
//! Serves the paginated catalog, category list, captured flags, cache
//! invalidation, health and the OpenAPI document.

pub mod controllers;
pub mod extractors;
pub mod middleware;
pub mod openapi;
pub mod responses;
pub mod router;
pub mod state;

pub use router::*;
pub use state::*;
