//! Local identity provider: argon2 credentials, HS256 tokens and a
//! verification-code outbox, all in the same SQLite database.

use crate::{IdentityProviderConfig, IdentityRepository, VerificationCodeRepository};

use error_location::ErrorLocation;

use std::panic::Location;

use async_trait::async_trait;
use chrono::{TimeDelta, Utc};
use log::{debug, info, warn};
use saathi_auth::{JwtValidator, SignInRateLimiter, TokenIssuer, hash_password, verify_password};
use saathi_core::ports::identity_provider::IdentityResult;
use saathi_core::validation::{
    is_strong_password, is_valid_email, normalize_email, validate_phone_number,
};
use saathi_core::{
    CustomClaims, Identity, IdentityError, IdentityProvider, IdentityUpdate, NewIdentity, SignIn,
    VerifiedToken,
};
use sqlx::SqlitePool;
use uuid::Uuid;

pub struct SqliteIdentityProvider {
    identities: IdentityRepository,
    codes: VerificationCodeRepository,
    validator: JwtValidator,
    issuer: TokenIssuer,
    limiter: SignInRateLimiter,
    verification_url: String,
    verification_ttl: TimeDelta,
}

impl SqliteIdentityProvider {
    pub fn new(pool: SqlitePool, config: IdentityProviderConfig) -> Self {
        let secret = config.jwt_secret.as_bytes();
        let mut validator = JwtValidator::with_hs256(secret);
        let mut issuer = TokenIssuer::with_hs256(secret, config.token_ttl_secs);
        if let Some(iss) = &config.issuer {
            validator = validator.with_issuer(iss);
            issuer = issuer.with_issuer(iss);
        }

        Self {
            identities: IdentityRepository::new(pool.clone()),
            codes: VerificationCodeRepository::new(pool),
            validator,
            issuer,
            limiter: SignInRateLimiter::new(config.sign_in_rate_limit),
            verification_url: config.verification_url,
            verification_ttl: TimeDelta::seconds(
                i64::try_from(config.verification_ttl_secs).unwrap_or(i64::MAX / 1000),
            ),
        }
    }

    /// Enable or disable an account; disabled accounts cannot sign in
    pub async fn set_disabled(&self, uid: &str, disabled: bool) -> IdentityResult<()> {
        if !self.identities.set_disabled(uid, disabled).await? {
            return Err(IdentityError::user_not_found(uid));
        }
        info!("Identity {} disabled={}", uid, disabled);
        Ok(())
    }

    pub async fn find_by_email(&self, email: &str) -> IdentityResult<Identity> {
        self.identities
            .find_by_email(&normalize_email(email))
            .await?
            .map(|stored| stored.identity)
            .ok_or_else(|| IdentityError::user_not_found(email))
    }

    /// Latest outstanding verification code in the outbox for `uid`
    pub async fn pending_verification_code(&self, uid: &str) -> IdentityResult<Option<String>> {
        Ok(self.codes.find_pending(uid, Utc::now()).await?)
    }

    fn verification_link(&self, code: &str) -> String {
        let separator = if self.verification_url.contains('?') {
            '&'
        } else {
            '?'
        };
        format!("{}{}code={}", self.verification_url, separator, code)
    }
}

#[async_trait]
impl IdentityProvider for SqliteIdentityProvider {
    async fn create_identity(&self, new_identity: &NewIdentity) -> IdentityResult<Identity> {
        let email = normalize_email(&new_identity.email);
        if !is_valid_email(&email) {
            return Err(IdentityError::InvalidEmail {
                email,
                location: ErrorLocation::from(Location::caller()),
            });
        }
        if !is_strong_password(&new_identity.password) {
            return Err(IdentityError::WeakPassword {
                message: "password does not meet the strength policy".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }
        if let Some(phone_number) = &new_identity.phone_number
            && validate_phone_number(phone_number).is_err()
        {
            return Err(IdentityError::InvalidPhoneNumber {
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let password_hash = hash_password(&new_identity.password)?;
        let identity = Identity {
            uid: Uuid::new_v4().simple().to_string(),
            email: email.clone(),
            email_verified: false,
            display_name: new_identity.display_name.clone(),
            photo_url: None,
            phone_number: new_identity.phone_number.clone(),
            disabled: false,
            custom_claims: CustomClaims::default(),
            created_at: Utc::now(),
        };

        match self.identities.create(&identity, &password_hash).await {
            Ok(()) => {}
            Err(e) if e.is_unique_violation() => {
                return Err(IdentityError::EmailAlreadyExists {
                    email,
                    location: ErrorLocation::from(Location::caller()),
                });
            }
            Err(e) => return Err(e.into()),
        }

        info!("Created identity {} for {}", identity.uid, identity.email);
        Ok(identity)
    }

    async fn verify_token(&self, bearer: &str) -> IdentityResult<VerifiedToken> {
        let claims = self.validator.validate(bearer)?;
        Ok(claims.into_verified_token())
    }

    async fn get_identity(&self, uid: &str) -> IdentityResult<Identity> {
        self.identities
            .find_by_uid(uid)
            .await?
            .map(|stored| stored.identity)
            .ok_or_else(|| IdentityError::user_not_found(uid))
    }

    async fn update_identity(&self, uid: &str, update: &IdentityUpdate) -> IdentityResult<Identity> {
        if !update.is_empty() && !self.identities.update_display(uid, update).await? {
            return Err(IdentityError::user_not_found(uid));
        }
        self.get_identity(uid).await
    }

    async fn delete_identity(&self, uid: &str) -> IdentityResult<()> {
        if !self.identities.delete(uid).await? {
            return Err(IdentityError::user_not_found(uid));
        }
        info!("Deleted identity {}", uid);
        Ok(())
    }

    async fn set_custom_claims(&self, uid: &str, claims: CustomClaims) -> IdentityResult<()> {
        if !self.identities.set_custom_claims(uid, claims).await? {
            return Err(IdentityError::user_not_found(uid));
        }
        info!("Custom claims for {} set to admin={}", uid, claims.admin);
        Ok(())
    }

    async fn send_verification_email(&self, uid: &str) -> IdentityResult<()> {
        let identity = self.get_identity(uid).await?;
        if identity.email_verified {
            debug!("Identity {} already verified, no email sent", uid);
            return Ok(());
        }

        let now = Utc::now();
        let code = Uuid::new_v4().simple().to_string();
        self.codes
            .create(&code, uid, now, now + self.verification_ttl)
            .await?;

        info!(
            "Verification email for {}: {}",
            identity.email,
            self.verification_link(&code)
        );
        Ok(())
    }

    async fn sign_in(&self, email: &str, password: &str) -> IdentityResult<SignIn> {
        let email = normalize_email(email);
        if !is_valid_email(&email) {
            return Err(IdentityError::InvalidEmail {
                email,
                location: ErrorLocation::from(Location::caller()),
            });
        }

        self.limiter.check(&email)?;

        let stored = self
            .identities
            .find_by_email(&email)
            .await?
            .ok_or_else(|| IdentityError::user_not_found(&email))?;

        if !verify_password(password, &stored.password_hash)? {
            warn!("Failed sign-in for {}", email);
            return Err(IdentityError::WrongPassword {
                location: ErrorLocation::from(Location::caller()),
            });
        }
        if stored.identity.disabled {
            return Err(IdentityError::UserDisabled {
                uid: stored.identity.uid,
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let id_token = self.issuer.issue(&stored.identity)?;
        Ok(SignIn {
            uid: stored.identity.uid,
            id_token,
            expires_in: self.issuer.ttl_secs(),
            email_verified: stored.identity.email_verified,
        })
    }

    async fn confirm_email_verification(&self, code: &str) -> IdentityResult<Identity> {
        let uid = self
            .codes
            .consume(code, Utc::now())
            .await?
            .ok_or_else(|| IdentityError::InvalidVerificationCode {
                location: ErrorLocation::from(Location::caller()),
            })?;

        info!("Email verified for {}", uid);
        self.get_identity(&uid).await
    }
}
