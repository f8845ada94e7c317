//! Application state for Axum handlers.

use pokedex_service::CatalogService;
use std::sync::Arc;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub catalog_service: Arc<dyn CatalogService>,
}

impl AppState {
    /// Creates a new application state.
    pub fn new(catalog_service: Arc<dyn CatalogService>) -> Self {
        Self { catalog_service }
    }
}
