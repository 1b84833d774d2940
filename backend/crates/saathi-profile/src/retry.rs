//! Bounded retry for transient collaborator failures.
//!
//! Only errors that report themselves retryable are retried; everything else
//! is returned on the first failure.

use saathi_core::StoreError;

use std::fmt::Display;
use std::time::Duration;

use tokio::time::sleep;

const DEFAULT_MAX_ATTEMPTS: u32 = 3;
const DEFAULT_INITIAL_DELAY_MS: u64 = 50;
const DEFAULT_MAX_DELAY_MS: u64 = 1000;
const DEFAULT_BACKOFF_MULTIPLIER: f64 = 2.0;

#[derive(Debug, Clone, PartialEq)]
pub struct RetryPolicy {
    /// Total attempts, including the first
    pub max_attempts: u32,
    pub initial_delay: Duration,
    pub max_delay: Duration,
    pub backoff_multiplier: f64,
    /// Scale each delay by a random factor in 0.5..1.5
    pub jitter: bool,
}

impl RetryPolicy {
    /// Single attempt, no waiting
    pub fn none() -> Self {
        Self {
            max_attempts: 1,
            ..Self::default()
        }
    }

    pub(crate) fn next_delay(&self, delay: Duration) -> Duration {
        Duration::from_secs_f64(
            (delay.as_secs_f64() * self.backoff_multiplier).min(self.max_delay.as_secs_f64()),
        )
    }

    fn jittered(&self, delay: Duration) -> Duration {
        if !self.jitter {
            return delay;
        }
        let factor = 0.5 + rand::random::<f64>();
        Duration::from_secs_f64(delay.as_secs_f64() * factor)
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            initial_delay: Duration::from_millis(DEFAULT_INITIAL_DELAY_MS),
            max_delay: Duration::from_millis(DEFAULT_MAX_DELAY_MS),
            backoff_multiplier: DEFAULT_BACKOFF_MULTIPLIER,
            jitter: true,
        }
    }
}

pub trait IsRetryable {
    fn is_retryable(&self) -> bool;
}

impl IsRetryable for StoreError {
    fn is_retryable(&self) -> bool {
        StoreError::is_retryable(self)
    }
}

/// Run `operation` until it succeeds, fails permanently, or attempts run out
pub async fn with_retry<F, Fut, T, E>(
    policy: &RetryPolicy,
    operation_name: &str,
    mut operation: F,
) -> Result<T, E>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: Display + IsRetryable,
{
    let mut attempts = 0;
    let mut delay = policy.initial_delay;

    loop {
        attempts += 1;

        match operation().await {
            Ok(value) => {
                if attempts > 1 {
                    log::info!("{} succeeded on attempt {}", operation_name, attempts);
                }
                return Ok(value);
            }
            Err(e) if !e.is_retryable() || attempts >= policy.max_attempts => {
                if attempts > 1 {
                    log::warn!("{} gave up after {} attempts: {}", operation_name, attempts, e);
                }
                return Err(e);
            }
            Err(e) => {
                let wait = policy.jittered(delay);
                log::debug!(
                    "{} attempt {} failed: {}. Retrying in {:?}",
                    operation_name,
                    attempts,
                    e,
                    wait
                );
                sleep(wait).await;
                delay = policy.next_delay(delay);
            }
        }
    }
}
