//! Retry and backoff helpers for the image fetch client.

use std::time::Duration;

/// Default number of retry attempts for transient network errors.
pub const DEFAULT_RETRIES: u32 = 3;

/// Base delay for exponential backoff.
pub const BACKOFF_BASE: Duration = Duration::from_millis(500);

/// Maximum delay cap for exponential backoff.
pub const BACKOFF_MAX: Duration = Duration::from_secs(10);

/// Determine if a reqwest error is a transient network error worth retrying.
///
/// Returns true for connection failures, timeouts, and interrupted body
/// transfers, plus the gateway-side 5xx statuses that typically resolve on
/// their own. Everything else fails immediately.
pub fn is_transient_network_error(error: &reqwest::Error) -> bool {
    if error.is_connect() || error.is_timeout() || error.is_body() {
        return true;
    }

    if let Some(status) = error.status() {
        // 502 Bad Gateway, 503 Service Unavailable, 504 Gateway Timeout
        if matches!(status.as_u16(), 502 | 503 | 504) {
            return true;
        }
    }

    false
}

/// Calculate the backoff delay before retry attempt `attempt` (1-based).
///
/// `min(base * 2^(attempt-1) + jitter, max)`, where the jitter is half the
/// base delay so simultaneous clients do not resynchronize exactly.
pub fn calculate_backoff(attempt: u32, base: Duration, max: Duration) -> Duration {
    let exponent = attempt.saturating_sub(1);
    let exponential = base.saturating_mul(2u32.saturating_pow(exponent));
    let jitter = base / 2;
    exponential.saturating_add(jitter).min(max)
}
