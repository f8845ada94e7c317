//! Timeout wrapper for async operations.

use pokedex_core::{PokedexError, PokedexResult};
use std::future::Future;
use std::time::Duration;

/// Wraps an async operation with a timeout.
///
/// `operation` names the call in the resulting [`PokedexError::Timeout`].
pub async fn with_timeout<Fut, T>(duration: Duration, operation: &str, fut: Fut) -> PokedexResult<T>
where
    Fut: Future<Output = PokedexResult<T>>,
{
    tokio::time::timeout(duration, fut).await.map_err(|_| {
        PokedexError::Timeout(format!("{} timed out after {:?}", operation, duration))
    })?
}
