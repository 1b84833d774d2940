//! Account lifecycle: signup, sign-in and email verification.

use crate::{Caller, ProfileError, ProfileWarning, Result};

use saathi_core::validation::validate_email;
use saathi_core::{
    Identity, IdentityProvider, ProfileStore, SignIn, SignupRequest, UserProfile, ValidationLimits,
};

use std::sync::Arc;

use chrono::Utc;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupOutcome {
    pub uid: String,
    pub profile: UserProfile,
    pub warnings: Vec<ProfileWarning>,
}

#[derive(Clone)]
pub struct AccountService {
    identity: Arc<dyn IdentityProvider>,
    store: Arc<dyn ProfileStore>,
    limits: ValidationLimits,
}

impl AccountService {
    pub fn new(
        identity: Arc<dyn IdentityProvider>,
        store: Arc<dyn ProfileStore>,
        limits: ValidationLimits,
    ) -> Self {
        Self {
            identity,
            store,
            limits,
        }
    }

    /// Create an identity and its profile together.
    ///
    /// Input is validated before any collaborator is called. If the profile
    /// write fails, the new identity is deleted once so the email can be
    /// reused; a failed deletion is logged and the original error returned.
    /// A failed verification email is reported as a warning.
    pub async fn sign_up(&self, request: &SignupRequest) -> Result<SignupOutcome> {
        request.validate(self.limits.max_field_length)?;

        let identity = self
            .identity
            .create_identity(&request.to_new_identity())
            .await?;
        log::info!("Created identity {} for {}", identity.uid, identity.email);

        let mut profile = UserProfile::for_identity(&identity, Utc::now());
        profile.apply(&request.profile_seed());

        if let Err(store_err) = self.store.set(&profile).await {
            log::error!(
                "Profile creation failed for {}, removing identity: {}",
                identity.uid,
                store_err
            );
            if let Err(delete_err) = self.identity.delete_identity(&identity.uid).await {
                log::error!(
                    "Compensating deletion of identity {} failed, identity left without profile: {}",
                    identity.uid,
                    delete_err
                );
            }
            return Err(store_err.into());
        }

        let mut warnings = Vec::new();
        if let Err(e) = self.identity.send_verification_email(&identity.uid).await {
            log::warn!("Verification email for {} not sent: {}", identity.uid, e);
            warnings.push(ProfileWarning::VerificationEmailFailed {
                message: e.user_message(),
            });
        }

        Ok(SignupOutcome {
            uid: identity.uid,
            profile,
            warnings,
        })
    }

    pub async fn sign_in(&self, email: &str, password: &str) -> Result<SignIn> {
        validate_email(email)?;
        if password.is_empty() {
            return Err(ProfileError::validation("password", "Password is required"));
        }

        let session = self.identity.sign_in(email, password).await?;
        log::info!("Signed in {}", session.uid);

        Ok(session)
    }

    /// Consume a verification code; the verified flag only ever becomes true
    pub async fn confirm_email(&self, code: &str) -> Result<Identity> {
        let code = code.trim();
        if code.is_empty() {
            return Err(ProfileError::validation(
                "code",
                "Verification code is required",
            ));
        }

        let identity = self.identity.confirm_email_verification(code).await?;
        log::info!("Email verified for {}", identity.uid);

        Ok(identity)
    }

    /// Returns false without sending when the caller is already verified
    pub async fn resend_verification(&self, caller: &Caller) -> Result<bool> {
        if caller.email_verified {
            return Ok(false);
        }

        self.identity.send_verification_email(&caller.uid).await?;
        Ok(true)
    }
}
