//! Retry policy with exponential backoff for GET and HEAD requests.
//!
//! Retries are driven by the response status (see
//! [`RetryPolicy::should_retry_status`]) or by transport errors. When the
//! attempts run out, the last response is handed back as-is; the caller decides
//! what a non-200 status means.

use std::time::{Duration, SystemTime};

use crate::config::FetchConfig;

/// Statuses for which a `Retry-After` header replaces the computed backoff.
const RETRY_AFTER_STATUSES: [u16; 3] = [413, 429, 503];

/// Bounded retry configuration.
#[derive(Debug, Clone)]
pub struct RetryPolicy {
    /// Maximum number of attempts, including the first.
    max_attempts: u32,

    /// Delay before the first retry.
    backoff_base: Duration,

    /// Cap applied to every delay.
    max_backoff: Duration,

    /// Statuses that are worth another attempt.
    retry_statuses: Vec<u16>,
}

impl RetryPolicy {
    pub fn new(
        max_attempts: u32,
        backoff_base: Duration,
        max_backoff: Duration,
        retry_statuses: Vec<u16>,
    ) -> Self {
        Self {
            max_attempts: max_attempts.max(1),
            backoff_base,
            max_backoff,
            retry_statuses,
        }
    }

    pub fn from_config(config: &FetchConfig) -> Self {
        Self::new(
            config.max_attempts,
            config.backoff_base(),
            config.max_backoff(),
            config.retry_statuses.clone(),
        )
    }

    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    /// Whether a response with this status should be retried.
    pub fn should_retry_status(&self, status: u16) -> bool {
        self.retry_statuses.contains(&status)
    }

    /// Whether another attempt is allowed after `attempt` (1-indexed) failed.
    pub fn has_attempts_left(&self, attempt: u32) -> bool {
        attempt < self.max_attempts
    }

    /// Exponential delay before retry number `retry` (1-indexed).
    ///
    /// `backoff_base * 2^(retry - 1)`, capped at `max_backoff`.
    pub fn backoff(&self, retry: u32) -> Duration {
        let factor = 2u32.saturating_pow(retry.saturating_sub(1));
        self.backoff_base
            .saturating_mul(factor)
            .min(self.max_backoff)
    }

    /// Delay after a retryable status, honoring `Retry-After` where it applies.
    pub fn delay_for_status(&self, retry: u32, status: u16, retry_after: Option<&str>) -> Duration {
        if RETRY_AFTER_STATUSES.contains(&status) {
            if let Some(delay) = retry_after.and_then(parse_retry_after) {
                return delay.min(self.max_backoff);
            }
        }
        self.backoff(retry)
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::from_config(&FetchConfig::default())
    }
}

/// Parse a `Retry-After` value: delay in seconds or an HTTP-date.
///
/// Dates in the past yield a zero delay.
pub fn parse_retry_after(value: &str) -> Option<Duration> {
    let value = value.trim();

    if let Ok(seconds) = value.parse::<u64>() {
        return Some(Duration::from_secs(seconds));
    }

    match httpdate::parse_http_date(value) {
        Ok(when) => Some(
            when.duration_since(SystemTime::now())
                .unwrap_or(Duration::ZERO),
        ),
        Err(_) => {
            tracing::debug!("Unparseable Retry-After value: {}", value);
            None
        }
    }
}

/// Whether a transport error is worth another attempt.
pub fn is_retryable_error(err: &reqwest::Error) -> bool {
    err.is_timeout() || err.is_connect() || err.is_request()
}
