use crate::{Caller, INVALID_TOKEN_MESSAGE, NO_TOKEN_MESSAGE, ProfileError, Result};

use saathi_auth::extract_bearer;
use saathi_core::{IdentityError, IdentityProvider};

use std::sync::Arc;

/// Turns an `Authorization` header into a [`Caller`].
///
/// The token is verified first; the identity record is then re-read so the
/// admin claim and disabled flag reflect the current state, not the state at
/// token issue time.
#[derive(Clone)]
pub struct Authenticator {
    identity: Arc<dyn IdentityProvider>,
}

impl Authenticator {
    pub fn new(identity: Arc<dyn IdentityProvider>) -> Self {
        Self { identity }
    }

    pub async fn authenticate(&self, authorization: Option<&str>) -> Result<Caller> {
        let bearer = extract_bearer(authorization).map_err(|e| {
            log::debug!("Rejected request without bearer token: {}", e);
            ProfileError::unauthorized(NO_TOKEN_MESSAGE)
        })?;

        let token = self
            .identity
            .verify_token(bearer)
            .await
            .map_err(Self::reject)?;

        let identity = self
            .identity
            .get_identity(&token.uid)
            .await
            .map_err(Self::reject)?;

        if identity.disabled {
            log::warn!("Rejected token for disabled identity {}", identity.uid);
            return Err(ProfileError::unauthorized(INVALID_TOKEN_MESSAGE));
        }

        Ok(Caller::from_live_identity(&token, &identity))
    }

    /// Backend outages stay distinguishable from bad credentials
    fn reject(err: IdentityError) -> ProfileError {
        if err.is_backend() {
            return err.into();
        }
        log::warn!("Token verification error: {}", err);
        ProfileError::unauthorized(INVALID_TOKEN_MESSAGE)
    }
}
