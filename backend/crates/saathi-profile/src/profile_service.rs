//! Self-service and admin profile operations.
//!
//! Every operation authorizes the caller before the store is touched.
//! Reads are strictly not-found; updates self-heal a missing document from
//! the live identity record.

use crate::access::{authorize_self_or_admin, require_admin};
use crate::{
    Caller, EMAIL_QUERY_REQUIRED_MESSAGE, PROFILE_NOT_FOUND_MESSAGE, ProfileError,
    ProfileSettings, ProfileWarning, Result, USER_NOT_FOUND_MESSAGE, with_retry,
};

use saathi_core::validation::normalize_email;
use saathi_core::{
    CustomClaims, IdentityError, IdentityProvider, ProfilePage, ProfilePatch,
    ProfileStore, ProfileUpdate, StoreError, UserProfile,
};

use std::sync::Arc;

use chrono::Utc;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateOutcome {
    pub profile: UserProfile,
    pub warnings: Vec<ProfileWarning>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EnsureOutcome {
    pub profile: UserProfile,
    /// True when the document was missing and has just been written
    pub created: bool,
}

/// What a client needs on every session load
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionSummary {
    pub uid: String,
    pub email: String,
    pub email_verified: bool,
    pub admin: bool,
    pub profile_exists: bool,
    pub profile_complete: bool,
}

#[derive(Clone)]
pub struct ProfileService {
    identity: Arc<dyn IdentityProvider>,
    store: Arc<dyn ProfileStore>,
    settings: ProfileSettings,
}

impl ProfileService {
    pub fn new(
        identity: Arc<dyn IdentityProvider>,
        store: Arc<dyn ProfileStore>,
        settings: ProfileSettings,
    ) -> Self {
        Self {
            identity,
            store,
            settings,
        }
    }

    pub fn settings(&self) -> &ProfileSettings {
        &self.settings
    }

    pub async fn get_profile(&self, caller: &Caller, uid: &str) -> Result<UserProfile> {
        authorize_self_or_admin(caller, uid)?;

        self.fetch(uid)
            .await?
            .ok_or_else(|| ProfileError::not_found(PROFILE_NOT_FOUND_MESSAGE))
    }

    /// Return the caller's profile, creating the default one if it is missing
    pub async fn ensure_profile(&self, caller: &Caller) -> Result<EnsureOutcome> {
        if let Some(profile) = self.fetch(&caller.uid).await? {
            return Ok(EnsureOutcome {
                profile,
                created: false,
            });
        }

        if let Some(profile) = self
            .create_from_identity(&caller.uid, &ProfileUpdate::default())
            .await?
        {
            log::info!("Created missing profile for {}", caller.uid);
            return Ok(EnsureOutcome {
                profile,
                created: true,
            });
        }

        // Another request created it between the read and the write
        let profile = self
            .fetch(&caller.uid)
            .await?
            .ok_or_else(|| ProfileError::not_found(PROFILE_NOT_FOUND_MESSAGE))?;
        Ok(EnsureOutcome {
            profile,
            created: false,
        })
    }

    /// Merge the present fields of `update` into the profile for `uid`.
    ///
    /// Display name and photo URL are mirrored to the identity record after
    /// the profile write; a mirror failure becomes a warning and the profile
    /// write stands.
    pub async fn update_profile(
        &self,
        caller: &Caller,
        uid: &str,
        update: &ProfileUpdate,
    ) -> Result<UpdateOutcome> {
        authorize_self_or_admin(caller, uid)?;
        update.validate(&self.settings.limits)?;

        let patch = ProfilePatch::from_update(update)?;
        let profile = match self.merge(uid, &patch).await? {
            Some(profile) => profile,
            None => {
                log::warn!("No profile for {}, rebuilding from identity", uid);
                match self.create_from_identity(uid, update).await? {
                    Some(profile) => profile,
                    None => self
                        .merge(uid, &patch)
                        .await?
                        .ok_or_else(|| ProfileError::not_found(PROFILE_NOT_FOUND_MESSAGE))?,
                }
            }
        };

        let mut warnings = Vec::new();
        if update.touches_mirrored_fields()
            && let Err(e) = self
                .identity
                .update_identity(uid, &update.identity_update())
                .await
        {
            log::warn!("Profile {} saved but identity attributes not updated: {}", uid, e);
            warnings.push(ProfileWarning::MirrorUpdateFailed {
                message: e.user_message(),
            });
        }

        Ok(UpdateOutcome { profile, warnings })
    }

    /// Set `profileComplete`; the flag is never cleared
    pub async fn complete_profile(&self, caller: &Caller, uid: &str) -> Result<UpdateOutcome> {
        self.update_profile(caller, uid, &ProfileUpdate::completion())
            .await
    }

    /// Delete the profile, then the identity.
    ///
    /// The store goes first so a failure part way leaves an identity without a
    /// profile, which the next session load repairs, never the reverse.
    pub async fn delete_profile(&self, caller: &Caller, uid: &str) -> Result<()> {
        authorize_self_or_admin(caller, uid)?;

        let profile_removed = self.store.delete(uid).await?;

        let identity_removed = match self.identity.delete_identity(uid).await {
            Ok(()) => true,
            Err(IdentityError::UserNotFound { .. }) => false,
            Err(e) => {
                log::error!("Profile {} deleted but identity deletion failed: {}", uid, e);
                return Err(e.into());
            }
        };

        if !profile_removed && !identity_removed {
            return Err(ProfileError::not_found(PROFILE_NOT_FOUND_MESSAGE));
        }

        log::info!(
            "Deleted user {} (profile: {}, identity: {}) by {}",
            uid,
            profile_removed,
            identity_removed,
            caller.uid
        );
        Ok(())
    }

    /// Admin listing, newest first; `cursor` is the last uid of the previous page
    pub async fn list_profiles(
        &self,
        caller: &Caller,
        limit: Option<usize>,
        cursor: Option<&str>,
    ) -> Result<ProfilePage> {
        require_admin(caller)?;

        let limit = limit.unwrap_or(self.settings.default_page_size);
        if limit == 0 || limit > self.settings.max_page_size {
            return Err(ProfileError::validation(
                "limit",
                format!("limit must be between 1 and {}", self.settings.max_page_size),
            ));
        }
        let cursor = cursor.map(str::trim).filter(|c| !c.is_empty());

        let store = &self.store;
        with_retry(&self.settings.retry, "list profiles", move || {
            store.list_page(limit, cursor)
        })
        .await
        .map_err(|e| match e {
            StoreError::InvalidCursor { cursor, .. } => ProfileError::validation(
                "lastDocId",
                format!("Unknown pagination cursor: {}", cursor),
            ),
            other => other.into(),
        })
    }

    pub async fn search_by_email(&self, caller: &Caller, email: &str) -> Result<Vec<UserProfile>> {
        require_admin(caller)?;

        let email = normalize_email(email);
        if email.is_empty() {
            return Err(ProfileError::validation(
                "email",
                EMAIL_QUERY_REQUIRED_MESSAGE,
            ));
        }

        let store = &self.store;
        let email = email.as_str();
        Ok(with_retry(&self.settings.retry, "search profiles", move || {
            store.query_by_email(email)
        })
        .await?)
    }

    pub async fn session(&self, caller: &Caller) -> Result<SessionSummary> {
        let profile = self.fetch(&caller.uid).await?;

        Ok(SessionSummary {
            uid: caller.uid.clone(),
            email: caller.email.clone(),
            email_verified: caller.email_verified,
            admin: caller.admin,
            profile_exists: profile.is_some(),
            profile_complete: profile.is_some_and(|p| p.profile_complete),
        })
    }

    /// Grant or revoke the admin claim; takes effect on the target's next request
    pub async fn set_admin(&self, caller: &Caller, uid: &str, admin: bool) -> Result<()> {
        require_admin(caller)?;

        self.identity
            .set_custom_claims(uid, CustomClaims::admin(admin))
            .await
            .map_err(not_found_as_missing_user)?;
        log::info!("Admin claim for {} set to {} by {}", uid, admin, caller.uid);

        Ok(())
    }

    async fn fetch(&self, uid: &str) -> Result<Option<UserProfile>> {
        let store = &self.store;
        Ok(with_retry(&self.settings.retry, "get profile", move || store.get(uid)).await?)
    }

    async fn merge(&self, uid: &str, patch: &ProfilePatch) -> Result<Option<UserProfile>> {
        let store = &self.store;
        Ok(with_retry(&self.settings.retry, "merge profile", move || store.merge(uid, patch)).await?)
    }

    /// Default profile from the live identity, with `update` applied on top.
    ///
    /// `None` when a document for `uid` already exists; it is left as it is.
    async fn create_from_identity(
        &self,
        uid: &str,
        update: &ProfileUpdate,
    ) -> Result<Option<UserProfile>> {
        let identity = self
            .identity
            .get_identity(uid)
            .await
            .map_err(not_found_as_missing_user)?;

        let mut profile = UserProfile::for_identity(&identity, Utc::now());
        profile.apply(update);

        Ok(self.store.create(&profile).await?.then_some(profile))
    }
}

fn not_found_as_missing_user(err: IdentityError) -> ProfileError {
    match err {
        IdentityError::UserNotFound { .. } => ProfileError::not_found(USER_NOT_FOUND_MESSAGE),
        other => other.into(),
    }
}
