//! Repository and provider trait definitions.

use async_trait::async_trait;
use chrono::NaiveDateTime;
use pokedex_core::{Pokemon, PokedexResult};
use serde::{Deserialize, Serialize};

/// A captured flag as stored in `captured_pokemon`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CapturedPokemon {
    pub pokemon_name: String,
    pub captured_at: Option<NaiveDateTime>,
}

/// Persistence for the captured-flag toggle set.
///
/// Keyed by Pokémon name. At most one row exists per name.
#[async_trait]
pub trait CapturedRepository: Send + Sync {
    /// Lists every captured flag.
    async fn list_captured(&self) -> PokedexResult<Vec<CapturedPokemon>>;

    /// Lists the names of every captured Pokémon.
    async fn list_captured_names(&self) -> PokedexResult<Vec<String>> {
        Ok(self
            .list_captured()
            .await?
            .into_iter()
            .map(|c| c.pokemon_name)
            .collect())
    }

    /// Sets or clears the captured flag for `name`.
    ///
    /// Capturing an already captured name is a no-op, as is releasing one
    /// that was never captured.
    async fn set_captured(&self, name: &str, captured: bool) -> PokedexResult<()>;
}

/// Authoritative source of the full catalog.
#[async_trait]
pub trait CatalogProvider: Send + Sync {
    /// Fetches every record. Expected to be comparatively expensive.
    async fn fetch_all(&self) -> PokedexResult<Vec<Pokemon>>;

    /// Returns true when the backing source can currently be read.
    async fn is_available(&self) -> bool;
}
