//! Catalog request and response bodies.

use pokedex_core::{Page, Pokemon};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// One page of the filtered, sorted catalog.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PokemonListResponse {
    pub pokemon: Vec<Pokemon>,
    pub total: usize,
    pub page: i64,
    pub page_size: usize,
    pub total_pages: usize,
}

impl From<Page<Pokemon>> for PokemonListResponse {
    fn from(page: Page<Pokemon>) -> Self {
        Self {
            pokemon: page.items,
            total: page.total,
            page: page.page,
            page_size: page.page_size,
            total_pages: page.total_pages,
        }
    }
}

/// Distinct category list.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TypesResponse {
    pub types: Vec<String>,
}

/// Names of every captured Pokémon.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CapturedResponse {
    pub captured: Vec<String>,
}

/// Capture toggle request.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct CaptureRequest {
    /// Pokémon name; required, though an empty string is accepted.
    #[serde(default)]
    pub name: Option<String>,
    /// `true` captures, `false` releases.
    #[serde(default)]
    pub captured: bool,
}

impl CaptureRequest {
    /// Returns the name, `None` only when the field was absent or null.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }
}

/// Generic success acknowledgement.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SuccessResponse {
    pub success: bool,
}

impl SuccessResponse {
    #[must_use]
    pub const fn ok() -> Self {
        Self { success: true }
    }
}

/// Outcome of a cache invalidation.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct InvalidateCacheResponse {
    pub success: bool,
    pub message: String,
}

impl InvalidateCacheResponse {
    /// Builds the response for the given outcome.
    #[must_use]
    pub fn from_outcome(success: bool) -> Self {
        let message = if success {
            "Cache invalidated successfully"
        } else {
            "Cache invalidation failed or Redis is unavailable"
        };
        Self {
            success,
            message: message.to_string(),
        }
    }
}
