//! Exponential backoff for transient sheet-fetch failures.

use std::future::Future;
use std::time::Duration;

use crate::error::LoadError;

/// Rate limiting (429) and network-level failures are worth another try;
/// everything else (404, bad status, undecodable body) would fail the same
/// way again.
fn is_retriable(err: &LoadError) -> bool {
    matches!(err, LoadError::RateLimited { .. } | LoadError::Http(_))
}

/// Upper bound on any single wait, including server-requested ones.
const MAX_DELAY_SECS: u64 = 60;

/// Seconds to wait before retrying after `err` on zero-based `attempt`.
///
/// The exponential backoff `backoff_base_secs * 2^attempt`, raised to the
/// server's `Retry-After` for rate limiting, capped at [`MAX_DELAY_SECS`].
fn retry_delay_secs(err: &LoadError, attempt: u32, backoff_base_secs: u64) -> u64 {
    let backoff = backoff_base_secs.saturating_mul(1u64 << attempt.min(10));
    let requested = match err {
        LoadError::RateLimited {
            retry_after_secs, ..
        } => *retry_after_secs,
        _ => 0,
    };
    backoff.max(requested).min(MAX_DELAY_SECS)
}

/// Executes `operation`, retrying retriable errors up to `max_retries`
/// additional times, waiting [`retry_delay_secs`] between attempts.
pub(crate) async fn retry_with_backoff<T, F, Fut>(
    max_retries: u32,
    backoff_base_secs: u64,
    mut operation: F,
) -> Result<T, LoadError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, LoadError>>,
{
    let mut attempt = 0u32;

    loop {
        let err = match operation().await {
            Ok(value) => return Ok(value),
            Err(err) => err,
        };
        if !is_retriable(&err) || attempt >= max_retries {
            return Err(err);
        }

        let delay_secs = retry_delay_secs(&err, attempt, backoff_base_secs);
        tracing::warn!(
            attempt,
            max_retries,
            delay_secs,
            error = %err,
            "transient sheet fetch error, retrying after backoff"
        );
        tokio::time::sleep(Duration::from_secs(delay_secs)).await;
        attempt += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};
    use std::sync::Arc;

    fn rate_limited() -> LoadError {
        LoadError::RateLimited {
            url: "https://example.com/data/list/Feb.json".to_owned(),
            retry_after_secs: 0,
        }
    }

    #[test]
    fn delay_doubles_per_attempt() {
        let err = LoadError::NotFound {
            url: "https://example.com".to_owned(),
        };
        assert_eq!(retry_delay_secs(&err, 0, 2), 2);
        assert_eq!(retry_delay_secs(&err, 1, 2), 4);
        assert_eq!(retry_delay_secs(&err, 2, 2), 8);
    }

    #[test]
    fn delay_honors_retry_after_when_longer() {
        let err = LoadError::RateLimited {
            url: "https://example.com".to_owned(),
            retry_after_secs: 7,
        };
        assert_eq!(retry_delay_secs(&err, 0, 2), 7);
        assert_eq!(retry_delay_secs(&err, 3, 2), 16);
    }

    #[test]
    fn delay_is_capped() {
        let err = LoadError::RateLimited {
            url: "https://example.com".to_owned(),
            retry_after_secs: 3600,
        };
        assert_eq!(retry_delay_secs(&err, 0, 0), MAX_DELAY_SECS);
        assert_eq!(retry_delay_secs(&rate_limited(), 40, 2), MAX_DELAY_SECS);
    }

    #[tokio::test]
    async fn succeeds_immediately_on_first_try() {
        let call_count = Arc::new(AtomicU32::new(0));
        let cc = Arc::clone(&call_count);
        let result = retry_with_backoff(3, 0, || {
            let cc = Arc::clone(&cc);
            async move {
                cc.fetch_add(1, Ordering::SeqCst);
                Ok::<u32, LoadError>(7)
            }
        })
        .await;
        assert_eq!(result.unwrap(), 7);
        assert_eq!(call_count.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn retries_rate_limited_then_succeeds() {
        let call_count = Arc::new(AtomicU32::new(0));
        let cc = Arc::clone(&call_count);
        let result = retry_with_backoff(3, 0, || {
            let cc = Arc::clone(&cc);
            async move {
                if cc.fetch_add(1, Ordering::SeqCst) < 2 {
                    Err(rate_limited())
                } else {
                    Ok::<u32, LoadError>(99)
                }
            }
        })
        .await;
        assert_eq!(result.unwrap(), 99);
        assert_eq!(call_count.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn gives_up_after_max_retries() {
        let call_count = Arc::new(AtomicU32::new(0));
        let cc = Arc::clone(&call_count);
        let result = retry_with_backoff(2, 0, || {
            let cc = Arc::clone(&cc);
            async move {
                cc.fetch_add(1, Ordering::SeqCst);
                Err::<u32, LoadError>(rate_limited())
            }
        })
        .await;
        assert_eq!(call_count.load(Ordering::SeqCst), 3);
        assert!(matches!(result, Err(LoadError::RateLimited { .. })));
    }

    #[tokio::test]
    async fn does_not_retry_not_found() {
        let call_count = Arc::new(AtomicU32::new(0));
        let cc = Arc::clone(&call_count);
        let result = retry_with_backoff(3, 0, || {
            let cc = Arc::clone(&cc);
            async move {
                cc.fetch_add(1, Ordering::SeqCst);
                Err::<u32, LoadError>(LoadError::NotFound {
                    url: "https://example.com/data/list/Feb.json".to_owned(),
                })
            }
        })
        .await;
        assert_eq!(call_count.load(Ordering::SeqCst), 1);
        assert!(matches!(result, Err(LoadError::NotFound { .. })));
    }
}
