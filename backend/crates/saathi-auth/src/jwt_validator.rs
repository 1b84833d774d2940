use crate::{AuthError, Claims, Result as AuthErrorResult};

use std::panic::Location;

use error_location::ErrorLocation;
use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode, errors::ErrorKind};

/// Clock skew tolerated on `exp` and `nbf`, in seconds
pub const CLOCK_SKEW_LEEWAY_SECS: u64 = 30;

/// Verifies identity tokens minted by [`crate::TokenIssuer`]
pub struct JwtValidator {
    key: DecodingKey,
    rules: Validation,
}

impl JwtValidator {
    pub fn with_hs256(secret: &[u8]) -> Self {
        let mut rules = Validation::new(Algorithm::HS256);
        rules.leeway = CLOCK_SKEW_LEEWAY_SECS;
        rules.validate_nbf = true;

        Self {
            key: DecodingKey::from_secret(secret),
            rules,
        }
    }

    /// Reject tokens whose `iss` differs from `issuer`
    pub fn with_issuer(mut self, issuer: &str) -> Self {
        self.rules.set_issuer(&[issuer]);
        self
    }

    /// Signature, expiry and issuer first, then the claim shape
    #[track_caller]
    pub fn validate(&self, token: &str) -> AuthErrorResult<Claims> {
        let location = ErrorLocation::from(Location::caller());

        let claims = match decode::<Claims>(token, &self.key, &self.rules) {
            Ok(data) => data.claims,
            Err(e) if matches!(e.kind(), ErrorKind::ExpiredSignature) => {
                return Err(AuthError::TokenExpired { location });
            }
            Err(source) => return Err(AuthError::JwtDecode { source, location }),
        };

        claims.validate()?;
        Ok(claims)
    }
}
