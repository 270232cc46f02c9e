//! Bounded retry with exponential backoff for transient fetch failures.
//!
//! The reference behavior performs no retries at all; a nonzero retry budget
//! is an opt-in robustness improvement that must not change the "always
//! returns a tier" contract upstream.

use std::future::Future;
use std::time::Duration;

use crate::error::ListingError;

/// Returns `true` if `err` represents a transient condition worth retrying.
///
/// Retriable: network-level failures and 429/5xx statuses. Everything else
/// (4xx, undecodable bytes, empty images) would fail identically on a
/// second attempt and is propagated immediately.
fn is_retriable(err: &ListingError) -> bool {
    match err {
        ListingError::Http(_) => true,
        ListingError::UnexpectedStatus { status, .. } => *status == 429 || *status >= 500,
        ListingError::Decode { .. } | ListingError::EmptyImage { .. } => false,
    }
}

/// Executes `operation` with exponential backoff retries on transient errors.
///
/// On a retriable error the function sleeps for `backoff_base_secs *
/// 2^attempt` seconds and tries again, up to `max_retries` additional
/// attempts after the first try. Non-retriable errors and exhausted budgets
/// return the last error.
pub(crate) async fn retry_with_backoff<T, F, Fut>(
    max_retries: u32,
    backoff_base_secs: u64,
    mut operation: F,
) -> Result<T, ListingError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, ListingError>>,
{
    let mut attempt = 0u32;

    loop {
        let err = match operation().await {
            Ok(value) => return Ok(value),
            Err(err) => {
                if !is_retriable(&err) || attempt >= max_retries {
                    return Err(err);
                }
                err
            }
        };

        // Exponential backoff: base * 2^attempt seconds, capped against overflow.
        let delay_secs = backoff_base_secs.saturating_mul(1u64 << attempt.min(62));
        tracing::warn!(
            attempt,
            max_retries,
            delay_secs,
            error = %err,
            "transient image fetch error — retrying after backoff"
        );
        tokio::time::sleep(Duration::from_secs(delay_secs)).await;
        attempt += 1;
    }
}
