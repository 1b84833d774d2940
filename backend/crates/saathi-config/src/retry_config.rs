use crate::{ConfigError, ConfigErrorResult};

use serde::Deserialize;

pub const MIN_MAX_ATTEMPTS: u32 = 1;
pub const MAX_MAX_ATTEMPTS: u32 = 10;
pub const DEFAULT_MAX_ATTEMPTS: u32 = 3;

pub const MIN_INITIAL_DELAY_MS: u64 = 1;
pub const MAX_INITIAL_DELAY_MS: u64 = 5000;
pub const DEFAULT_INITIAL_DELAY_MS: u64 = 50;

pub const MAX_MAX_DELAY_MS: u64 = 30_000;
pub const DEFAULT_MAX_DELAY_MS: u64 = 1000;

pub const MIN_BACKOFF_MULTIPLIER: f64 = 1.0;
pub const MAX_BACKOFF_MULTIPLIER: f64 = 10.0;
pub const DEFAULT_BACKOFF_MULTIPLIER: f64 = 2.0;

/// Bounded retries for transient profile-store failures.
///
/// `max_attempts` counts the first try, so 1 disables retrying.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RetryConfig {
    pub max_attempts: u32,
    pub initial_delay_ms: u64,
    pub max_delay_ms: u64,
    pub backoff_multiplier: f64,
    pub jitter: bool,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            initial_delay_ms: DEFAULT_INITIAL_DELAY_MS,
            max_delay_ms: DEFAULT_MAX_DELAY_MS,
            backoff_multiplier: DEFAULT_BACKOFF_MULTIPLIER,
            jitter: true,
        }
    }
}

impl RetryConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if !(MIN_MAX_ATTEMPTS..=MAX_MAX_ATTEMPTS).contains(&self.max_attempts) {
            return Err(ConfigError::config(format!(
                "retry.max_attempts must be {}-{}, got {}",
                MIN_MAX_ATTEMPTS, MAX_MAX_ATTEMPTS, self.max_attempts
            )));
        }

        if !(MIN_INITIAL_DELAY_MS..=MAX_INITIAL_DELAY_MS).contains(&self.initial_delay_ms) {
            return Err(ConfigError::config(format!(
                "retry.initial_delay_ms must be {}-{}, got {}",
                MIN_INITIAL_DELAY_MS, MAX_INITIAL_DELAY_MS, self.initial_delay_ms
            )));
        }

        if self.max_delay_ms < self.initial_delay_ms || self.max_delay_ms > MAX_MAX_DELAY_MS {
            return Err(ConfigError::config(format!(
                "retry.max_delay_ms must be {}-{} (initial_delay_ms..), got {}",
                self.initial_delay_ms, MAX_MAX_DELAY_MS, self.max_delay_ms
            )));
        }

        if !(MIN_BACKOFF_MULTIPLIER..=MAX_BACKOFF_MULTIPLIER).contains(&self.backoff_multiplier) {
            return Err(ConfigError::config(format!(
                "retry.backoff_multiplier must be {}-{}, got {}",
                MIN_BACKOFF_MULTIPLIER, MAX_BACKOFF_MULTIPLIER, self.backoff_multiplier
            )));
        }

        Ok(())
    }
}
