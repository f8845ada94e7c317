//! Key-value store abstraction backing the catalog cache.

use async_trait::async_trait;
use pokedex_core::PokedexResult;
use std::time::Duration;

/// A networked key-value store with TTL expiry.
///
/// Every call reports I/O failures as an explicit error; callers decide
/// whether to degrade.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CacheStore: Send + Sync {
    /// Get a raw JSON value from the store.
    ///
    /// Returns `None` if the key doesn't exist or has expired.
    async fn get_raw(&self, key: &str) -> PokedexResult<Option<String>>;

    /// Set a raw JSON value with a TTL.
    async fn set_raw(&self, key: &str, value: &str, ttl: Duration) -> PokedexResult<()>;

    /// Delete the given keys, returning how many existed.
    async fn delete_many(&self, keys: Vec<String>) -> PokedexResult<u64>;

    /// Round-trip liveness probe.
    async fn ping(&self) -> PokedexResult<()>;

    /// Releases the underlying connections.
    async fn close(&self);
}

/// Produces connected [`CacheStore`] handles.
#[async_trait]
pub trait CacheConnector: Send + Sync {
    /// Opens a new store handle. The handle is not yet verified.
    async fn connect(&self) -> PokedexResult<std::sync::Arc<dyn CacheStore>>;
}
