use crate::{AuthError, RateLimitConfig, Result as AuthErrorResult};

use std::num::NonZeroU32;
use std::panic::Location;
use std::time::Duration;

use error_location::ErrorLocation;
use governor::{
    Quota, RateLimiter,
    clock::DefaultClock,
    state::keyed::DefaultKeyedStateStore,
};

/// Per-email sign-in limiter.
///
/// The full budget is available as a burst and refills evenly over the window.
pub struct SignInRateLimiter {
    limiter: RateLimiter<String, DefaultKeyedStateStore<String>, DefaultClock>,
    config: RateLimitConfig,
}

impl SignInRateLimiter {
    pub fn new(config: RateLimitConfig) -> Self {
        let attempts = NonZeroU32::new(config.max_attempts).unwrap_or(NonZeroU32::MIN);
        let period = Duration::from_secs(config.window_secs.max(1)) / attempts.get();
        let quota = Quota::with_period(period)
            .unwrap_or_else(|| Quota::per_second(attempts))
            .allow_burst(attempts);

        Self {
            limiter: RateLimiter::keyed(quota),
            config,
        }
    }

    /// Consume one attempt for `key`, failing once the budget is spent
    #[track_caller]
    pub fn check(&self, key: &str) -> AuthErrorResult<()> {
        self.limiter
            .check_key(&key.to_string())
            .map_err(|_| AuthError::RateLimitExceeded {
                limit: self.config.max_attempts,
                window_secs: self.config.window_secs,
                location: ErrorLocation::from(Location::caller()),
            })
    }

    /// Drop state for keys whose budget has fully refilled
    pub fn prune(&self) {
        self.limiter.retain_recent();
    }
}

impl Default for SignInRateLimiter {
    fn default() -> Self {
        Self::new(RateLimitConfig::default())
    }
}
