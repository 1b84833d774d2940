use crate::{AuthError, Result as AuthErrorResult};

use std::panic::Location;

use error_location::ErrorLocation;
use saathi_core::VerifiedToken;
use serde::{Deserialize, Serialize};

/// JWT claims carried by an identity token
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (identity uid)
    pub sub: String,
    pub email: String,
    #[serde(default)]
    pub email_verified: bool,
    /// Admin claim at issue time. Authorization re-reads the live record.
    #[serde(default)]
    pub admin: bool,
    /// Issuer, checked when the validator is configured with one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iss: Option<String>,
    /// Expiration timestamp (Unix)
    pub exp: i64,
    /// Issued at timestamp (Unix)
    pub iat: i64,
}

impl Claims {
    /// Validate claims after JWT signature verification
    #[track_caller]
    pub fn validate(&self) -> AuthErrorResult<()> {
        if self.sub.is_empty() {
            return Err(AuthError::InvalidClaim {
                claim: "sub".to_string(),
                message: "sub (uid) cannot be empty".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }
        if self.sub.len() > 128 {
            return Err(AuthError::InvalidClaim {
                claim: "sub".to_string(),
                message: "sub exceeds maximum length".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(())
    }

    pub fn into_verified_token(self) -> VerifiedToken {
        VerifiedToken {
            uid: self.sub,
            email: self.email,
            email_verified: self.email_verified,
            admin: self.admin,
        }
    }
}
