//! PostgreSQL captured-flag repository.

use crate::{traits::CapturedRepository, CapturedPokemon, DatabasePoolInterface};
use async_trait::async_trait;
use chrono::NaiveDateTime;
use pokedex_core::{PokedexError, PokedexResult};
use sqlx::FromRow;
use std::sync::Arc;
use tracing::{debug, warn};

/// PostgreSQL implementation of [`CapturedRepository`].
#[derive(Clone)]
pub struct PgCapturedRepository {
    pool: Arc<dyn DatabasePoolInterface>,
}

impl PgCapturedRepository {
    /// Creates a new PostgreSQL captured repository.
    #[must_use]
    pub fn new(pool: Arc<dyn DatabasePoolInterface>) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct CapturedRow {
    pokemon_name: String,
    captured_at: Option<NaiveDateTime>,
}

impl From<CapturedRow> for CapturedPokemon {
    fn from(row: CapturedRow) -> Self {
        Self {
            pokemon_name: row.pokemon_name,
            captured_at: row.captured_at,
        }
    }
}

#[async_trait]
impl CapturedRepository for PgCapturedRepository {
    async fn list_captured(&self) -> PokedexResult<Vec<CapturedPokemon>> {
        let rows: Vec<CapturedRow> = sqlx::query_as(
            "SELECT pokemon_name, captured_at FROM captured_pokemon ORDER BY pokemon_name",
        )
        .fetch_all(self.pool.inner())
        .await
        .map_err(|e| PokedexError::Database(format!("Failed to list captured: {}", e)))?;

        Ok(rows.into_iter().map(CapturedPokemon::from).collect())
    }

    async fn set_captured(&self, name: &str, captured: bool) -> PokedexResult<()> {
        debug!(pokemon = %name, captured, "Updating captured flag");

        let mut tx = self
            .pool
            .inner()
            .begin()
            .await
            .map_err(|e| PokedexError::Database(format!("Failed to begin transaction: {}", e)))?;

        let query = if captured {
            sqlx::query(
                "INSERT INTO captured_pokemon (pokemon_name, captured_at) \
                 VALUES ($1, CURRENT_TIMESTAMP) \
                 ON CONFLICT (pokemon_name) DO NOTHING",
            )
        } else {
            sqlx::query("DELETE FROM captured_pokemon WHERE pokemon_name = $1")
        };

        if let Err(e) = query.bind(name).execute(&mut *tx).await {
            if let Err(rollback_err) = tx.rollback().await {
                warn!("Rollback failed after captured update error: {}", rollback_err);
            }
            return Err(PokedexError::Database(format!(
                "Failed to update captured flag for {}: {}",
                name, e
            )));
        }

        tx.commit()
            .await
            .map_err(|e| PokedexError::Database(format!("Failed to commit: {}", e)))
    }
}
