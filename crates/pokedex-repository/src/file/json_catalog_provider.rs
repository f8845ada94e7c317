//! Catalog provider reading a JSON array from disk.

use crate::traits::CatalogProvider;
use async_trait::async_trait;
use pokedex_core::{PokedexError, PokedexResult, Pokemon};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Reads the whole catalog from a JSON file on every call.
#[derive(Debug, Clone)]
pub struct JsonFileCatalogProvider {
    path: PathBuf,
}

impl JsonFileCatalogProvider {
    /// Creates a provider for the given file.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the backing file path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl CatalogProvider for JsonFileCatalogProvider {
    async fn fetch_all(&self) -> PokedexResult<Vec<Pokemon>> {
        let contents = tokio::fs::read_to_string(&self.path).await.map_err(|e| {
            PokedexError::Provider(format!("Failed to read {}: {}", self.path.display(), e))
        })?;

        let records: Vec<Pokemon> = serde_json::from_str(&contents).map_err(|e| {
            PokedexError::Provider(format!("Failed to parse {}: {}", self.path.display(), e))
        })?;

        debug!(count = records.len(), path = %self.path.display(), "Loaded catalog from file");
        Ok(records)
    }

    async fn is_available(&self) -> bool {
        match tokio::fs::File::open(&self.path).await {
            Ok(file) => file.metadata().await.map(|m| m.is_file()).unwrap_or(false),
            Err(e) => {
                warn!(path = %self.path.display(), "Catalog file unavailable: {}", e);
                false
            }
        }
    }
}
