//! Catalog service trait definition.

use crate::dto::{CaptureRequest, CapturedResponse, HealthReport, PokemonListResponse, TypesResponse};
use async_trait::async_trait;
use pokedex_core::{CatalogQuery, PokedexResult, Pokemon};

/// Catalog service trait.
#[async_trait]
pub trait CatalogService: Send + Sync {
    /// Lists one page of the catalog after filtering, searching and sorting.
    async fn list_pokemon(&self, query: CatalogQuery) -> PokedexResult<PokemonListResponse>;

    /// Lists the distinct categories.
    async fn list_types(&self) -> PokedexResult<TypesResponse>;

    /// Lists captured names.
    async fn list_captured(&self) -> PokedexResult<CapturedResponse>;

    /// Sets or clears a captured flag.
    async fn set_captured(&self, request: CaptureRequest) -> PokedexResult<()>;

    /// Drops both cache entries. Returns `false` when the cache is unavailable.
    async fn invalidate_cache(&self) -> bool;

    /// Full catalog straight from the provider, bypassing the cache.
    async fn legacy_catalog(&self) -> PokedexResult<Vec<Pokemon>>;

    /// Probes every dependency.
    async fn health(&self) -> HealthReport;
}
