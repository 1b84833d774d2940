use crate::{CustomClaims, Identity, IdentityError, IdentityUpdate, NewIdentity, SignIn, VerifiedToken};

use async_trait::async_trait;

pub type IdentityResult<T> = Result<T, IdentityError>;

/// Issues and validates bearer tokens and owns canonical identity attributes
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Fails with `EmailAlreadyExists`, `WeakPassword`, `InvalidEmail` or `InvalidPhoneNumber`
    async fn create_identity(&self, new_identity: &NewIdentity) -> IdentityResult<Identity>;

    /// Signature and expiry check; fails with `InvalidToken` or `TokenExpired`
    async fn verify_token(&self, bearer: &str) -> IdentityResult<VerifiedToken>;

    /// Live identity record, including current custom claims
    async fn get_identity(&self, uid: &str) -> IdentityResult<Identity>;

    async fn update_identity(&self, uid: &str, update: &IdentityUpdate) -> IdentityResult<Identity>;

    async fn delete_identity(&self, uid: &str) -> IdentityResult<()>;

    async fn set_custom_claims(&self, uid: &str, claims: CustomClaims) -> IdentityResult<()>;

    async fn send_verification_email(&self, uid: &str) -> IdentityResult<()>;

    /// Email/password sign-in returning a fresh bearer token
    async fn sign_in(&self, email: &str, password: &str) -> IdentityResult<SignIn>;

    /// Consume a verification code and flip `email_verified` to true
    async fn confirm_email_verification(&self, code: &str) -> IdentityResult<Identity>;
}
