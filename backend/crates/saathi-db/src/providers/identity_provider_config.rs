use saathi_auth::RateLimitConfig;

use std::fmt;

pub const DEFAULT_TOKEN_TTL_SECS: u64 = 3600;
pub const DEFAULT_VERIFICATION_TTL_SECS: u64 = 3 * 24 * 3600;

/// Settings for the SQLite-backed identity provider
#[derive(Clone)]
pub struct IdentityProviderConfig {
    /// HS256 signing secret for identity tokens
    pub jwt_secret: String,
    pub token_ttl_secs: u64,
    pub issuer: Option<String>,
    pub sign_in_rate_limit: RateLimitConfig,
    /// Link prefix written to the verification outbox; the code is appended
    pub verification_url: String,
    pub verification_ttl_secs: u64,
}

impl IdentityProviderConfig {
    pub fn new(jwt_secret: impl Into<String>) -> Self {
        Self {
            jwt_secret: jwt_secret.into(),
            token_ttl_secs: DEFAULT_TOKEN_TTL_SECS,
            issuer: None,
            sign_in_rate_limit: RateLimitConfig::default(),
            verification_url: "http://localhost:8000/verify-email".to_string(),
            verification_ttl_secs: DEFAULT_VERIFICATION_TTL_SECS,
        }
    }
}

impl fmt::Debug for IdentityProviderConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IdentityProviderConfig")
            .field("jwt_secret", &"<redacted>")
            .field("token_ttl_secs", &self.token_ttl_secs)
            .field("issuer", &self.issuer)
            .field("sign_in_rate_limit", &self.sign_in_rate_limit)
            .field("verification_url", &self.verification_url)
            .field("verification_ttl_secs", &self.verification_ttl_secs)
            .finish()
    }
}
