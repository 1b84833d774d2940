use crate::{AuthError, Claims, Result as AuthErrorResult};

use std::panic::Location;

use chrono::Utc;
use error_location::ErrorLocation;
use jsonwebtoken::{Algorithm, EncodingKey, Header, encode};
use saathi_core::Identity;

/// Mints HS256 identity tokens after a successful sign-in
pub struct TokenIssuer {
    encoding_key: EncodingKey,
    ttl_secs: u64,
    issuer: Option<String>,
}

impl TokenIssuer {
    pub fn with_hs256(secret: &[u8], ttl_secs: u64) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            ttl_secs,
            issuer: None,
        }
    }

    pub fn with_issuer(mut self, issuer: &str) -> Self {
        self.issuer = Some(issuer.to_string());
        self
    }

    pub fn ttl_secs(&self) -> u64 {
        self.ttl_secs
    }

    /// Sign a token embedding the identity's current verification and admin state
    #[track_caller]
    pub fn issue(&self, identity: &Identity) -> AuthErrorResult<String> {
        let now = Utc::now().timestamp();
        let claims = Claims {
            sub: identity.uid.clone(),
            email: identity.email.clone(),
            email_verified: identity.email_verified,
            admin: identity.is_admin(),
            iss: self.issuer.clone(),
            exp: now + self.ttl_secs as i64,
            iat: now,
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key).map_err(|source| {
            AuthError::JwtEncode {
                source,
                location: ErrorLocation::from(Location::caller()),
            }
        })
    }
}
