//! Retry policy implementation.

use std::time::Duration;
use tracing::{debug, warn};

/// Retry policy configuration.
#[derive(Debug, Clone)]
pub struct RetryPolicy {
    /// Maximum number of attempts, including the first one.
    pub max_attempts: u32,
    /// Delay after the first failed attempt.
    pub initial_delay: Duration,
    /// Maximum delay between retries.
    pub max_delay: Duration,
    /// Multiplier for exponential backoff.
    pub multiplier: f64,
}

impl RetryPolicy {
    /// Plain doubling backoff: the wait after failed attempt
    /// `n` (zero-based) is `initial_delay * 2^n`.
    #[must_use]
    pub fn exponential(max_attempts: u32, initial_delay: Duration) -> Self {
        Self {
            max_attempts,
            initial_delay,
            max_delay: Duration::from_secs(300),
            multiplier: 2.0,
        }
    }

    /// Calculates the wait after the given zero-based attempt has failed.
    #[must_use]
    pub fn delay_after_failure(&self, attempt: u32) -> Duration {
        let exponent = i32::try_from(attempt).unwrap_or(i32::MAX);
        let base_ms = self.initial_delay.as_millis() as f64 * self.multiplier.powi(exponent);
        let capped_ms = base_ms.min(self.max_delay.as_millis() as f64);
        Duration::from_millis(capped_ms as u64)
    }

    /// Executes a function with retry logic.
    ///
    /// Sleeps between attempts but never after the last one. Returns the
    /// last error when every attempt fails. A policy with zero attempts
    /// still runs the operation once.
    pub async fn execute<F, Fut, T, E>(&self, mut f: F) -> Result<T, E>
    where
        F: FnMut(u32) -> Fut,
        Fut: std::future::Future<Output = Result<T, E>>,
        E: std::fmt::Display,
    {
        let attempts = self.max_attempts.max(1);
        let mut attempt = 0;

        loop {
            match f(attempt).await {
                Ok(result) => return Ok(result),
                Err(e) if attempt + 1 >= attempts => {
                    debug!("Attempt {} failed, no retries left: {}", attempt + 1, e);
                    return Err(e);
                }
                Err(e) => {
                    let delay = self.delay_after_failure(attempt);
                    warn!("Attempt {} failed: {}. Retrying in {:?}...", attempt + 1, e, delay);
                    tokio::time::sleep(delay).await;
                }
            }
            attempt += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};
    use std::sync::Arc;
    use tokio::time::Instant;

    #[tokio::test]
    async fn test_retry_success() {
        let policy = RetryPolicy::exponential(3, Duration::from_millis(100));
        let result: Result<i32, &str> = policy.execute(|_| async { Ok(42) }).await;
        assert_eq!(result.unwrap(), 42);
    }

    #[tokio::test(start_paused = true)]
    async fn test_retry_eventual_success() {
        let policy = RetryPolicy::exponential(3, Duration::from_millis(10));
        let attempts = Arc::new(AtomicU32::new(0));
        let attempts_clone = attempts.clone();

        let result: Result<i32, &str> = policy
            .execute(|_| {
                let attempts = attempts_clone.clone();
                async move {
                    let attempt = attempts.fetch_add(1, Ordering::SeqCst);
                    if attempt < 2 {
                        Err("not yet")
                    } else {
                        Ok(42)
                    }
                }
            })
            .await;

        assert_eq!(result.unwrap(), 42);
        assert_eq!(attempts.load(Ordering::SeqCst), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn test_retry_counts_exact_attempts() {
        let policy = RetryPolicy::exponential(3, Duration::from_millis(1));
        let attempts = Arc::new(AtomicU32::new(0));
        let attempts_clone = attempts.clone();

        let result: Result<i32, &str> = policy
            .execute(|_| {
                let a = attempts_clone.clone();
                async move {
                    a.fetch_add(1, Ordering::SeqCst);
                    Err("fail")
                }
            })
            .await;

        assert_eq!(result.unwrap_err(), "fail");
        assert_eq!(attempts.load(Ordering::SeqCst), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn test_backoff_doubles_and_skips_final_sleep() {
        let policy = RetryPolicy::exponential(3, Duration::from_secs(1));
        let start = Instant::now();

        let result: Result<(), &str> = policy.execute(|_| async { Err("down") }).await;

        assert!(result.is_err());
        // 1s after the first failure, 2s after the second, none after the third
        assert_eq!(start.elapsed(), Duration::from_secs(3));
    }

    #[tokio::test]
    async fn test_attempt_index_is_passed() {
        let policy = RetryPolicy::exponential(2, Duration::ZERO);
        let seen = Arc::new(std::sync::Mutex::new(Vec::new()));
        let seen_clone = seen.clone();

        let _: Result<(), &str> = policy
            .execute(|attempt| {
                seen_clone.lock().unwrap().push(attempt);
                async { Err("fail") }
            })
            .await;

        assert_eq!(*seen.lock().unwrap(), vec![0, 1]);
    }

    #[tokio::test]
    async fn test_zero_attempts_runs_once() {
        let policy = RetryPolicy::exponential(0, Duration::ZERO);
        let result: Result<i32, &str> = policy.execute(|_| async { Ok(7) }).await;
        assert_eq!(result.unwrap(), 7);
    }

    #[test]
    fn test_delay_after_failure_is_exponential() {
        let policy = RetryPolicy::exponential(5, Duration::from_millis(100));
        assert_eq!(policy.delay_after_failure(0), Duration::from_millis(100));
        assert_eq!(policy.delay_after_failure(1), Duration::from_millis(200));
        assert_eq!(policy.delay_after_failure(3), Duration::from_millis(800));
    }

    #[test]
    fn test_delay_capped_at_max() {
        let policy = RetryPolicy {
            multiplier: 1000.0,
            max_delay: Duration::from_millis(500),
            ..RetryPolicy::exponential(3, Duration::from_millis(100))
        };

        assert_eq!(policy.delay_after_failure(10), Duration::from_millis(500));
    }
}
