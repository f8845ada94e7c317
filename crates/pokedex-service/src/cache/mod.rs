//! Catalog caching.
//!
//! [`CatalogCache`] keeps two derived views of the catalog in a
//! [`CacheStore`] and falls back to the [`CatalogProvider`] whenever the
//! store misses or is unavailable.
//!
//! [`CatalogProvider`]: pokedex_repository::CatalogProvider

pub mod cache_keys;
mod cache_store;
mod catalog_cache;
mod redis_cache;

pub use cache_store::{CacheConnector, CacheStore};
pub use catalog_cache::CatalogCache;
pub use redis_cache::{RedisCacheStore, RedisConnector};

#[cfg(test)]
pub use cache_store::MockCacheStore;
