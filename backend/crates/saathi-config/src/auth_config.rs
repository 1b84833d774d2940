use crate::{ConfigError, ConfigErrorResult};

use std::fmt;

use serde::Deserialize;

pub const MIN_JWT_SECRET_LENGTH: usize = 32;

pub const MIN_TOKEN_TTL_SECS: u64 = 60;
pub const MAX_TOKEN_TTL_SECS: u64 = 7 * 24 * 3600;
pub const DEFAULT_TOKEN_TTL_SECS: u64 = 3600;

pub const MIN_VERIFICATION_TTL_SECS: u64 = 300;
pub const MAX_VERIFICATION_TTL_SECS: u64 = 30 * 24 * 3600;
pub const DEFAULT_VERIFICATION_TTL_SECS: u64 = 3 * 24 * 3600;

pub const DEFAULT_VERIFICATION_URL: &str = "http://localhost:8000/verify-email";

/// Identity token and verification settings
#[derive(Clone, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    /// HS256 signing secret. Required, at least 32 characters.
    pub jwt_secret: Option<String>,
    pub token_ttl_secs: u64,
    /// Expected `iss` claim, if any
    pub issuer: Option<String>,
    /// Prefix of the link written to the verification outbox
    pub verification_url: String,
    pub verification_ttl_secs: u64,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: None,
            token_ttl_secs: DEFAULT_TOKEN_TTL_SECS,
            issuer: None,
            verification_url: String::from(DEFAULT_VERIFICATION_URL),
            verification_ttl_secs: DEFAULT_VERIFICATION_TTL_SECS,
        }
    }
}

impl AuthConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        match &self.jwt_secret {
            None => {
                return Err(ConfigError::auth(
                    "auth.jwt_secret is required (set SAATHI_AUTH_JWT_SECRET)",
                ));
            }
            Some(secret) if secret.len() < MIN_JWT_SECRET_LENGTH => {
                return Err(ConfigError::auth(format!(
                    "auth.jwt_secret must be at least {} characters",
                    MIN_JWT_SECRET_LENGTH
                )));
            }
            Some(_) => {}
        }

        if !(MIN_TOKEN_TTL_SECS..=MAX_TOKEN_TTL_SECS).contains(&self.token_ttl_secs) {
            return Err(ConfigError::auth(format!(
                "auth.token_ttl_secs must be {}-{}, got {}",
                MIN_TOKEN_TTL_SECS, MAX_TOKEN_TTL_SECS, self.token_ttl_secs
            )));
        }

        if let Some(issuer) = &self.issuer
            && issuer.trim().is_empty()
        {
            return Err(ConfigError::auth("auth.issuer cannot be empty when set"));
        }

        if !self.verification_url.starts_with("http://")
            && !self.verification_url.starts_with("https://")
        {
            return Err(ConfigError::auth(
                "auth.verification_url must be an http(s) URL",
            ));
        }

        if !(MIN_VERIFICATION_TTL_SECS..=MAX_VERIFICATION_TTL_SECS)
            .contains(&self.verification_ttl_secs)
        {
            return Err(ConfigError::auth(format!(
                "auth.verification_ttl_secs must be {}-{}, got {}",
                MIN_VERIFICATION_TTL_SECS, MAX_VERIFICATION_TTL_SECS, self.verification_ttl_secs
            )));
        }

        Ok(())
    }
}

impl fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthConfig")
            .field("jwt_secret", &self.jwt_secret.as_ref().map(|_| "<redacted>"))
            .field("token_ttl_secs", &self.token_ttl_secs)
            .field("issuer", &self.issuer)
            .field("verification_url", &self.verification_url)
            .field("verification_ttl_secs", &self.verification_ttl_secs)
            .finish()
    }
}
