//! Cache-aside manager for the catalog and its category list.

use super::cache_keys::{all_keys, CATALOG_KEY, CATEGORIES_KEY};
use super::{CacheConnector, CacheStore};
use pokedex_core::{PokedexError, PokedexResult, Pokemon};
use pokedex_repository::CatalogProvider;
use pokedex_resilience::RetryPolicy;
use serde::{de::DeserializeOwned, Serialize};
use std::collections::BTreeSet;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;
use tracing::{debug, error, info, warn};

/// Read-through cache over the catalog provider.
///
/// Caching is either enabled or disabled for the whole process. Any I/O
/// error on a read disables it; only a later successful [`initialize`]
/// enables it again. Reads never fail because of the cache.
///
/// [`initialize`]: CatalogCache::initialize
pub struct CatalogCache {
    provider: Arc<dyn CatalogProvider>,
    connector: Arc<dyn CacheConnector>,
    store: RwLock<Option<Arc<dyn CacheStore>>>,
    enabled: AtomicBool,
    ttl: Duration,
}

impl CatalogCache {
    /// Creates a manager with caching disabled until [`initialize`] succeeds.
    ///
    /// [`initialize`]: CatalogCache::initialize
    pub fn new(
        provider: Arc<dyn CatalogProvider>,
        connector: Arc<dyn CacheConnector>,
        ttl: Duration,
    ) -> Self {
        Self {
            provider,
            connector,
            store: RwLock::new(None),
            enabled: AtomicBool::new(false),
            ttl,
        }
    }

    /// Connects and verifies the store with up to `max_retries` attempts.
    ///
    /// Waits `initial_delay * 2^attempt` after each failed attempt except
    /// the last. Returns whether caching ended up enabled.
    pub async fn initialize(&self, max_retries: u32, initial_delay: Duration) -> bool {
        let policy = RetryPolicy::exponential(max_retries, initial_delay);

        let result = policy
            .execute(|attempt| async move {
                let store = self.connector.connect().await?;
                if let Err(e) = store.ping().await {
                    store.close().await;
                    return Err(e);
                }
                info!("Redis connection established (attempt {})", attempt + 1);
                Ok::<_, PokedexError>(store)
            })
            .await;

        let previous = match result {
            Ok(store) => {
                let previous = self.store.write().await.replace(store);
                self.enabled.store(true, Ordering::SeqCst);
                previous
            }
            Err(e) => {
                error!("Redis connection failed after all retries, caching disabled: {}", e);
                self.enabled.store(false, Ordering::SeqCst);
                self.store.write().await.take()
            }
        };

        if let Some(previous) = previous {
            previous.close().await;
        }

        self.is_enabled()
    }

    /// Returns the full catalog, from the cache when possible.
    ///
    /// Fails only when the provider fails.
    pub async fn get_catalog(&self) -> PokedexResult<Vec<Pokemon>> {
        if let Some(records) = self.read::<Vec<Pokemon>>(CATALOG_KEY).await {
            return Ok(records);
        }

        debug!("Fetching catalog from provider");
        let records = self.provider.fetch_all().await?;
        self.write_back(CATALOG_KEY, &records).await;
        Ok(records)
    }

    /// Returns the sorted, deduplicated category list.
    ///
    /// On a miss the list is derived from [`get_catalog`], so it may be
    /// older or newer than the cached catalog entry.
    ///
    /// [`get_catalog`]: CatalogCache::get_catalog
    pub async fn get_categories(&self) -> PokedexResult<Vec<String>> {
        if let Some(categories) = self.read::<Vec<String>>(CATEGORIES_KEY).await {
            return Ok(categories);
        }

        debug!("Deriving categories from catalog");
        let categories = derive_categories(&self.get_catalog().await?);
        self.write_back(CATEGORIES_KEY, &categories).await;
        Ok(categories)
    }

    /// Deletes both cache entries.
    ///
    /// Returns `false` when caching is disabled or the delete fails.
    pub async fn invalidate(&self) -> bool {
        let Some(store) = self.active_store().await else {
            warn!("Cannot invalidate cache - Redis not available");
            return false;
        };

        match store.delete_many(all_keys()).await {
            Ok(deleted) => {
                info!(deleted, "Cache invalidated successfully");
                true
            }
            Err(e) => {
                error!("Failed to invalidate cache: {}", e);
                false
            }
        }
    }

    /// Pings the store. Never changes the enabled state.
    pub async fn health_check(&self) -> bool {
        let Some(store) = self.active_store().await else {
            return false;
        };

        match store.ping().await {
            Ok(()) => true,
            Err(e) => {
                error!("Redis health check failed: {}", e);
                false
            }
        }
    }

    /// Returns whether caching is currently enabled.
    pub fn is_enabled(&self) -> bool {
        self.enabled.load(Ordering::SeqCst)
    }

    /// Entry TTL.
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Disables caching and releases the store handle.
    pub async fn shutdown(&self) {
        self.enabled.store(false, Ordering::SeqCst);
        if let Some(store) = self.store.write().await.take() {
            store.close().await;
        }
        info!("Catalog cache shut down");
    }

    async fn active_store(&self) -> Option<Arc<dyn CacheStore>> {
        if !self.is_enabled() {
            return None;
        }
        self.store.read().await.clone()
    }

    fn disable(&self, reason: &PokedexError) {
        if self.enabled.swap(false, Ordering::SeqCst) {
            warn!("Redis error, caching disabled until reinitialized: {}", reason);
        }
    }

    /// Cache lookup. `None` covers miss, disabled, I/O error and bad payload.
    async fn read<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let store = self.active_store().await?;

        match store.get_raw(key).await {
            Ok(Some(payload)) => match serde_json::from_str(&payload) {
                Ok(value) => {
                    debug!("Cache hit for {}", key);
                    Some(value)
                }
                Err(e) => {
                    warn!("Discarding undecodable cache entry {}: {}", key, e);
                    None
                }
            },
            Ok(None) => {
                debug!("Cache miss for {}", key);
                None
            }
            Err(e) => {
                self.disable(&e);
                None
            }
        }
    }

    /// Best-effort write. Failures are logged and do not disable caching.
    async fn write_back<T: Serialize + ?Sized>(&self, key: &str, value: &T) {
        let Some(store) = self.active_store().await else {
            return;
        };

        let payload = match serde_json::to_string(value) {
            Ok(payload) => payload,
            Err(e) => {
                warn!("Failed to serialize {} for caching: {}", key, e);
                return;
            }
        };

        match store.set_raw(key, &payload, self.ttl).await {
            Ok(()) => debug!("Cached {} with TTL {:?}", key, self.ttl),
            Err(e) => warn!("Failed to cache {}: {}", key, e),
        }
    }
}

/// Collects every non-empty type into a sorted, deduplicated list.
fn derive_categories(records: &[Pokemon]) -> Vec<String> {
    records
        .iter()
        .flat_map(Pokemon::types)
        .map(str::to_string)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}
