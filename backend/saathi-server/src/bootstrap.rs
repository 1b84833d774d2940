//! Translate validated configuration into collaborator settings.

use saathi_config::Config;
use saathi_core::ValidationLimits;
use saathi_db::IdentityProviderConfig;
use saathi_profile::{ProfileSettings, RetryPolicy};

use std::time::Duration;

/// `None` only when the secret is missing, which `Config::validate` rejects
pub fn identity_provider_config(config: &Config) -> Option<IdentityProviderConfig> {
    let secret = config.auth.jwt_secret.as_ref()?;

    Some(IdentityProviderConfig {
        token_ttl_secs: config.auth.token_ttl_secs,
        issuer: config.auth.issuer.clone(),
        sign_in_rate_limit: saathi_auth::RateLimitConfig {
            max_attempts: config.rate_limit.max_attempts,
            window_secs: config.rate_limit.window_secs,
        },
        verification_url: config.auth.verification_url.clone(),
        verification_ttl_secs: config.auth.verification_ttl_secs,
        ..IdentityProviderConfig::new(secret.clone())
    })
}

pub fn profile_settings(config: &Config) -> ProfileSettings {
    ProfileSettings {
        limits: ValidationLimits {
            max_field_length: config.validation.max_field_length,
            max_bio_length: config.validation.max_bio_length,
            max_list_items: config.validation.max_list_items,
        },
        default_page_size: config.validation.default_page_size,
        max_page_size: config.validation.max_page_size,
        retry: RetryPolicy {
            max_attempts: config.retry.max_attempts,
            initial_delay: Duration::from_millis(config.retry.initial_delay_ms),
            max_delay: Duration::from_millis(config.retry.max_delay_ms),
            backoff_multiplier: config.retry.backoff_multiplier,
            jitter: config.retry.jitter,
        },
    }
}
