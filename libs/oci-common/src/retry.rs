use crate::error::OciError;
use rand::Rng;
use rand::distr::{Alphanumeric, SampleString};
use std::collections::HashSet;
use std::future::Future;
use std::time::Duration;
use tokio_util::sync::CancellationToken;

/// Length of generated `opc-retry-token` values
const RETRY_TOKEN_LEN: usize = 32;

/// Hard cap on any single wait between attempts
const MAX_DELAY: Duration = Duration::from_secs(86_400);

/// Conditions that trigger a retry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum RetryTrigger {
    /// Transport-level errors (connection refused, DNS failure, reset, etc.)
    TransportError,
    /// Attempt timeout
    Timeout,
    /// Specific HTTP status code
    Status(u16),
    /// Error that is never retryable (render, decode, cancellation, ...)
    NonRetryable,
}

impl RetryTrigger {
    /// HTTP 429 Too Many Requests
    pub const TOO_MANY_REQUESTS: Self = Self::Status(429);
    /// HTTP 500 Internal Server Error
    pub const INTERNAL_SERVER_ERROR: Self = Self::Status(500);
    /// HTTP 502 Bad Gateway
    pub const BAD_GATEWAY: Self = Self::Status(502);
    /// HTTP 503 Service Unavailable
    pub const SERVICE_UNAVAILABLE: Self = Self::Status(503);
    /// HTTP 504 Gateway Timeout
    pub const GATEWAY_TIMEOUT: Self = Self::Status(504);
}

/// Exponential backoff configuration for retries
///
/// Computes delay as: `min(initial * multiplier^attempt, max)` with optional jitter.
#[derive(Debug, Clone)]
pub struct ExponentialBackoff {
    /// Initial backoff duration (default: 100ms)
    pub initial: Duration,

    /// Maximum backoff duration (default: 10s)
    pub max: Duration,

    /// Backoff multiplier for exponential growth (default: 2.0)
    pub multiplier: f64,

    /// Add a random 0-25% delay to each backoff (default: true)
    pub jitter: bool,
}

impl Default for ExponentialBackoff {
    fn default() -> Self {
        Self {
            initial: Duration::from_millis(100),
            max: Duration::from_secs(10),
            multiplier: 2.0,
            jitter: true,
        }
    }
}

impl ExponentialBackoff {
    /// Create backoff with custom initial and max durations
    #[must_use]
    pub fn new(initial: Duration, max: Duration) -> Self {
        Self {
            initial,
            max,
            ..Default::default()
        }
    }

    /// Upper bound for any wait between attempts, `Retry-After` included.
    /// Never more than one day.
    #[must_use]
    pub fn ceiling(&self) -> Duration {
        self.max.min(MAX_DELAY)
    }

    /// Delay before retry `retry_index` (0 = first retry).
    ///
    /// `initial * multiplier^retry_index` plus up to 25% jitter, capped at
    /// [`Self::ceiling`]. A multiplier that is NaN, infinite or negative
    /// counts as 1.0.
    #[must_use]
    pub fn delay(&self, retry_index: usize) -> Duration {
        let ceiling = self.ceiling();
        let multiplier = if self.multiplier.is_finite() && self.multiplier >= 0.0 {
            self.multiplier
        } else {
            1.0
        };
        let factor = multiplier.powi(i32::try_from(retry_index).unwrap_or(i32::MAX));

        // mul_f64 panics on overflow, so stay below the ceiling in f64 first
        let base = if factor.is_finite()
            && self.initial.as_secs_f64() * factor <= ceiling.as_secs_f64()
        {
            self.initial.mul_f64(factor)
        } else {
            ceiling
        };

        let delay = if self.jitter {
            base + base.mul_f64(rand::rng().random_range(0.0..=0.25))
        } else {
            base
        };
        delay.min(ceiling)
    }

    /// Create fast backoff for testing (1ms initial, 100ms max, no jitter)
    #[must_use]
    pub fn fast() -> Self {
        Self {
            initial: Duration::from_millis(1),
            max: Duration::from_millis(100),
            multiplier: 2.0,
            jitter: false,
        }
    }
}

/// Per-call retry policy.
///
/// Attached to a request through [`crate::RequestMetadata::retry_policy`].
/// Requests without a policy make exactly one attempt.
#[derive(Debug, Clone)]
pub struct RetryPolicy {
    /// Total attempts including the first one (values below 1 are treated as 1)
    pub max_attempts: u32,

    /// Backoff strategy between attempts
    pub backoff: ExponentialBackoff,

    /// Error classes that are retried
    /// Default: `[TransportError, Timeout, Status(429), Status(500), Status(502), Status(503), Status(504)]`
    pub retry_on: HashSet<RetryTrigger>,

    /// Use the service's `Retry-After` value instead of the backoff when present,
    /// capped at [`ExponentialBackoff::ceiling`] (default: true)
    pub respect_retry_after: bool,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 8,
            backoff: ExponentialBackoff::default(),
            retry_on: HashSet::from([
                RetryTrigger::TransportError,
                RetryTrigger::Timeout,
                RetryTrigger::TOO_MANY_REQUESTS,
                RetryTrigger::INTERNAL_SERVER_ERROR,
                RetryTrigger::BAD_GATEWAY,
                RetryTrigger::SERVICE_UNAVAILABLE,
                RetryTrigger::GATEWAY_TIMEOUT,
            ]),
            respect_retry_after: true,
        }
    }
}

impl RetryPolicy {
    /// Single attempt, nothing retried
    #[must_use]
    pub fn no_retry() -> Self {
        Self {
            max_attempts: 1,
            retry_on: HashSet::new(),
            ..Default::default()
        }
    }

    /// Default triggers with a custom attempt limit
    #[must_use]
    pub fn with_max_attempts(max_attempts: u32) -> Self {
        Self {
            max_attempts,
            ..Default::default()
        }
    }

    /// Replace the backoff strategy
    #[must_use]
    pub fn backoff(mut self, backoff: ExponentialBackoff) -> Self {
        self.backoff = backoff;
        self
    }

    /// Check if the given trigger should cause a retry
    #[must_use]
    pub fn should_retry(&self, trigger: RetryTrigger) -> bool {
        self.retry_on.contains(&trigger)
    }
}

/// Delay before retry `attempt` (0 = first retry); see [`ExponentialBackoff::delay`].
#[must_use]
pub fn calculate_backoff(backoff: &ExponentialBackoff, attempt: usize) -> Duration {
    backoff.delay(attempt)
}

/// Generate a fresh `opc-retry-token` value.
#[must_use]
pub fn generate_retry_token() -> String {
    Alphanumeric.sample_string(&mut rand::rng(), RETRY_TOKEN_LEN)
}

/// Drive `attempt_fn` under `policy`.
///
/// `attempt_fn` receives the 1-based attempt number. The loop stops on
/// success, on an error whose trigger is not in the policy, or once
/// `max_attempts` is reached; the last error is returned unchanged.
/// The cancellation token is checked before every attempt and raced against
/// both the attempt and the backoff sleep.
///
/// # Errors
/// Returns the last attempt's error, or [`OciError::Cancelled`] when the
/// token fires.
pub async fn retry<T, F, Fut>(
    policy: &RetryPolicy,
    cancellation: Option<&CancellationToken>,
    operation: &'static str,
    mut attempt_fn: F,
) -> Result<T, OciError>
where
    F: FnMut(u32) -> Fut,
    Fut: Future<Output = Result<T, OciError>>,
{
    let max_attempts = policy.max_attempts.max(1);
    let mut attempt: u32 = 1;

    loop {
        if cancellation.is_some_and(CancellationToken::is_cancelled) {
            return Err(OciError::Cancelled);
        }

        let result = match cancellation {
            Some(token) => {
                tokio::select! {
                    biased;
                    () = token.cancelled() => Err(OciError::Cancelled),
                    r = attempt_fn(attempt) => r,
                }
            }
            None => attempt_fn(attempt).await,
        };

        let err = match result {
            Ok(value) => return Ok(value),
            Err(err) => err,
        };

        let trigger = err.retry_trigger();
        if attempt >= max_attempts || !policy.should_retry(trigger) {
            return Err(err);
        }

        let retry_index = usize::try_from(attempt - 1).unwrap_or(usize::MAX);
        let delay = match err.retry_after() {
            Some(after) if policy.respect_retry_after => after.min(policy.backoff.ceiling()),
            _ => calculate_backoff(&policy.backoff, retry_index),
        };

        tracing::debug!(
            attempt,
            max_attempts,
            trigger = ?trigger,
            operation,
            backoff_ms = u64::try_from(delay.as_millis()).unwrap_or(u64::MAX),
            "Retrying request after error"
        );

        match cancellation {
            Some(token) => {
                tokio::select! {
                    biased;
                    () = token.cancelled() => return Err(OciError::Cancelled),
                    () = tokio::time::sleep(delay) => {}
                }
            }
            None => tokio::time::sleep(delay).await,
        }

        attempt += 1;
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use crate::error::ServiceError;
    use crate::response::ResponseMetadata;
    use http::{HeaderMap, StatusCode};
    use std::sync::Arc;
    use std::sync::atomic::{AtomicU32, Ordering};

    fn transport_error() -> OciError {
        OciError::Transport(Box::new(std::io::Error::new(
            std::io::ErrorKind::ConnectionReset,
            "connection reset",
        )))
    }

    fn status_error(status: u16, retry_after: Option<Duration>) -> OciError {
        let status = StatusCode::from_u16(status).unwrap();
        OciError::Service(Box::new(ServiceError {
            status,
            code: "TooManyRequests".to_owned(),
            message: String::new(),
            retry_after,
            metadata: ResponseMetadata::new(status, HeaderMap::new()),
        }))
    }

    fn fast_policy(max_attempts: u32) -> RetryPolicy {
        RetryPolicy::with_max_attempts(max_attempts).backoff(ExponentialBackoff::fast())
    }

    #[tokio::test]
    async fn test_no_retry_policy_makes_single_attempt() {
        let calls = Arc::new(AtomicU32::new(0));
        let counter = calls.clone();

        let result: Result<(), _> = retry(&RetryPolicy::no_retry(), None, "Test", |_| {
            counter.fetch_add(1, Ordering::SeqCst);
            async { Err(transport_error()) }
        })
        .await;

        assert!(matches!(result, Err(OciError::Transport(_))));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_policy_caps_attempts() {
        let calls = Arc::new(AtomicU32::new(0));
        let counter = calls.clone();

        let result: Result<(), _> = retry(&fast_policy(3), None, "Test", |_| {
            counter.fetch_add(1, Ordering::SeqCst);
            async { Err(transport_error()) }
        })
        .await;

        assert!(result.is_err());
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn test_stops_on_first_success() {
        let calls = Arc::new(AtomicU32::new(0));
        let counter = calls.clone();

        let result = retry(&fast_policy(5), None, "Test", |attempt| {
            counter.fetch_add(1, Ordering::SeqCst);
            async move {
                if attempt < 2 {
                    Err(status_error(503, None))
                } else {
                    Ok(attempt)
                }
            }
        })
        .await;

        assert_eq!(result.unwrap(), 2);
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_non_retryable_error_is_returned_immediately() {
        let calls = Arc::new(AtomicU32::new(0));
        let counter = calls.clone();

        let result: Result<(), _> = retry(&fast_policy(5), None, "Test", |_| {
            counter.fetch_add(1, Ordering::SeqCst);
            async { Err(status_error(404, None)) }
        })
        .await;

        assert_eq!(result.unwrap_err().status(), Some(StatusCode::NOT_FOUND));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_retry_after_overrides_backoff() {
        let started = std::time::Instant::now();
        let policy = RetryPolicy::with_max_attempts(2).backoff(ExponentialBackoff {
            max: Duration::from_secs(1),
            ..ExponentialBackoff::fast()
        });

        let result = retry(&policy, None, "Test", |attempt| async move {
            if attempt == 1 {
                Err(status_error(429, Some(Duration::from_millis(150))))
            } else {
                Ok(())
            }
        })
        .await;

        assert!(result.is_ok());
        assert!(started.elapsed() >= Duration::from_millis(150));
    }

    #[tokio::test(start_paused = true)]
    async fn test_retry_after_is_capped_by_backoff_ceiling() {
        let started = tokio::time::Instant::now();
        let policy = RetryPolicy::with_max_attempts(2).backoff(ExponentialBackoff::fast());

        let result = retry(&policy, None, "Test", |attempt| async move {
            if attempt == 1 {
                Err(status_error(503, Some(Duration::from_secs(3600))))
            } else {
                Ok(())
            }
        })
        .await;

        assert!(result.is_ok());
        let elapsed = started.elapsed();
        assert!(elapsed >= Duration::from_millis(100) && elapsed < Duration::from_secs(1));
    }

    #[tokio::test]
    async fn test_cancelled_before_first_attempt() {
        let token = CancellationToken::new();
        token.cancel();
        let calls = Arc::new(AtomicU32::new(0));
        let counter = calls.clone();

        let result: Result<(), _> = retry(&fast_policy(3), Some(&token), "Test", |_| {
            counter.fetch_add(1, Ordering::SeqCst);
            async { Ok(()) }
        })
        .await;

        assert!(matches!(result, Err(OciError::Cancelled)));
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_cancellation_aborts_backoff_sleep() {
        let token = CancellationToken::new();
        let policy = RetryPolicy::with_max_attempts(3).backoff(ExponentialBackoff::new(
            Duration::from_secs(60),
            Duration::from_secs(60),
        ));

        let canceller = token.clone();
        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(20)).await;
            canceller.cancel();
        });

        let result: Result<(), _> =
            retry(&policy, Some(&token), "Test", |_| async { Err(transport_error()) }).await;

        assert!(matches!(result, Err(OciError::Cancelled)));
    }

    #[test]
    fn test_retry_token_shape() {
        let a = generate_retry_token();
        let b = generate_retry_token();
        assert_eq!(a.len(), RETRY_TOKEN_LEN);
        assert!(a.chars().all(|c| c.is_ascii_alphanumeric()));
        assert_ne!(a, b);
    }

    #[test]
    fn test_default_policy_triggers() {
        let policy = RetryPolicy::default();
        assert_eq!(policy.max_attempts, 8);
        assert!(policy.should_retry(RetryTrigger::TransportError));
        assert!(policy.should_retry(RetryTrigger::TOO_MANY_REQUESTS));
        assert!(!policy.should_retry(RetryTrigger::Status(409)));
        assert!(!policy.should_retry(RetryTrigger::NonRetryable));
        assert!(!RetryPolicy::no_retry().should_retry(RetryTrigger::TransportError));
    }

    #[test]
    fn test_calculate_backoff_no_jitter() {
        let backoff = ExponentialBackoff {
            initial: Duration::from_millis(100),
            max: Duration::from_secs(10),
            multiplier: 2.0,
            jitter: false,
        };

        assert_eq!(calculate_backoff(&backoff, 0), Duration::from_millis(100));
        assert_eq!(calculate_backoff(&backoff, 1), Duration::from_millis(200));
        assert_eq!(calculate_backoff(&backoff, 2), Duration::from_millis(400));

        // Should cap at max
        assert_eq!(calculate_backoff(&backoff, 10), Duration::from_secs(10));
    }

    #[test]
    fn test_calculate_backoff_with_jitter() {
        let backoff = ExponentialBackoff::default();

        let backoff0 = calculate_backoff(&backoff, 0);
        assert!(backoff0 >= Duration::from_millis(100));
        assert!(backoff0 <= Duration::from_millis(125));
    }

    #[test]
    fn test_calculate_backoff_with_invalid_multipliers() {
        for multiplier in [f64::NAN, f64::INFINITY, -2.0] {
            let backoff = ExponentialBackoff {
                initial: Duration::from_millis(100),
                max: Duration::from_secs(10),
                multiplier,
                jitter: false,
            };
            assert_eq!(calculate_backoff(&backoff, 0), Duration::from_millis(100));
            assert_eq!(calculate_backoff(&backoff, 3), Duration::from_millis(100));
        }
    }

    #[test]
    fn test_calculate_backoff_with_huge_attempt() {
        let backoff = ExponentialBackoff {
            jitter: false,
            ..Default::default()
        };

        assert_eq!(calculate_backoff(&backoff, usize::MAX), Duration::from_secs(10));
    }

    #[test]
    fn test_ceiling_never_exceeds_one_day() {
        let backoff = ExponentialBackoff {
            initial: Duration::from_secs(60),
            max: Duration::MAX,
            multiplier: 10.0,
            jitter: true,
        };

        assert_eq!(backoff.ceiling(), Duration::from_secs(86_400));
        assert!(backoff.delay(40) <= Duration::from_secs(86_400));
    }
}
