//! Redis-based cache store.

use super::{CacheConnector, CacheStore};
use async_trait::async_trait;
use deadpool_redis::{Config, Connection, Pool, Runtime};
use pokedex_config::RedisConfig;
use pokedex_core::{PokedexError, PokedexResult};
use pokedex_resilience::with_timeout;
use redis::AsyncCommands;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info};

/// Redis-backed [`CacheStore`] over a deadpool connection pool.
///
/// Pool wait, create and recycle are bounded by the connect timeout; each
/// command, including checkout, is bounded by the command timeout.
pub struct RedisCacheStore {
    pool: Pool,
    command_timeout: Duration,
}

impl RedisCacheStore {
    /// Builds the pool. No connection is opened until the first command.
    pub fn new(config: &RedisConfig) -> PokedexResult<Self> {
        let connect_timeout = Some(config.connect_timeout());

        let pool = Config::from_url(config.url())
            .builder()
            .map_err(|e| PokedexError::Configuration(format!("Invalid Redis config: {}", e)))?
            .max_size(config.pool_size)
            .wait_timeout(connect_timeout)
            .create_timeout(connect_timeout)
            .recycle_timeout(connect_timeout)
            .runtime(Runtime::Tokio1)
            .build()
            .map_err(|e| PokedexError::Configuration(format!("Failed to create Redis pool: {}", e)))?;

        Ok(Self {
            pool,
            command_timeout: config.command_timeout(),
        })
    }

    async fn conn(&self) -> PokedexResult<Connection> {
        self.pool
            .get()
            .await
            .map_err(|e| PokedexError::Cache(format!("Failed to get Redis connection: {}", e)))
    }
}

#[async_trait]
impl CacheStore for RedisCacheStore {
    async fn get_raw(&self, key: &str) -> PokedexResult<Option<String>> {
        with_timeout(self.command_timeout, "GET", async {
            let mut conn = self.conn().await?;
            conn.get::<_, Option<String>>(key)
                .await
                .map_err(|e| PokedexError::Cache(format!("Failed to get key '{}': {}", key, e)))
        })
        .await
    }

    async fn set_raw(&self, key: &str, value: &str, ttl: Duration) -> PokedexResult<()> {
        let ttl_secs = ttl.as_secs().max(1);

        with_timeout(self.command_timeout, "SETEX", async {
            let mut conn = self.conn().await?;
            conn.set_ex::<_, _, ()>(key, value, ttl_secs)
                .await
                .map_err(|e| PokedexError::Cache(format!("Failed to set key '{}': {}", key, e)))
        })
        .await?;

        debug!("Cached key '{}' with TTL {}s", key, ttl_secs);
        Ok(())
    }

    async fn delete_many(&self, keys: Vec<String>) -> PokedexResult<u64> {
        with_timeout(self.command_timeout, "DEL", async {
            let mut conn = self.conn().await?;
            conn.del::<_, u64>(&keys)
                .await
                .map_err(|e| PokedexError::Cache(format!("Failed to delete keys: {}", e)))
        })
        .await
    }

    async fn ping(&self) -> PokedexResult<()> {
        with_timeout(self.command_timeout, "PING", async {
            let mut conn = self.conn().await?;
            redis::cmd("PING")
                .query_async::<String>(&mut conn)
                .await
                .map(|_| ())
                .map_err(|e| PokedexError::Cache(format!("PING failed: {}", e)))
        })
        .await
    }

    async fn close(&self) {
        self.pool.close();
        info!("Redis connection pool closed");
    }
}

/// Opens [`RedisCacheStore`] handles from configuration.
#[derive(Debug, Clone)]
pub struct RedisConnector {
    config: RedisConfig,
}

impl RedisConnector {
    #[must_use]
    pub fn new(config: RedisConfig) -> Self {
        Self { config }
    }
}

#[async_trait]
impl CacheConnector for RedisConnector {
    async fn connect(&self) -> PokedexResult<Arc<dyn CacheStore>> {
        debug!(url = %self.config.url(), "Opening Redis connection pool");
        Ok(Arc::new(RedisCacheStore::new(&self.config)?))
    }
}
