//! In-memory collaborators with failure injection and call counters.

use saathi_core::{
    CustomClaims, ErrorLocation, Identity, IdentityError, IdentityProvider, IdentityUpdate,
    NewIdentity, ProfilePage, ProfilePatch, ProfileStore, SignIn, StoreError, UserProfile,
    VerifiedToken,
};

use std::collections::HashMap;
use std::panic::Location;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, AtomicU32, AtomicUsize, Ordering};

use async_trait::async_trait;
use chrono::{Duration, Utc};
use serde_json::{Value, json};

type IdentityResult<T> = Result<T, IdentityError>;
type StoreResult<T> = Result<T, StoreError>;

pub(crate) fn token_for(uid: &str) -> String {
    format!("token-{}", uid)
}

/// Token whose embedded admin claim is true, whatever the live record says
pub(crate) fn admin_token_for(uid: &str) -> String {
    format!("admin-token-{}", uid)
}

#[derive(Default)]
pub(crate) struct FakeIdentityProvider {
    identities: Mutex<HashMap<String, Identity>>,
    next_uid: AtomicUsize,
    pub fail_delete: AtomicBool,
    pub fail_update: AtomicBool,
    pub fail_send_verification: AtomicBool,
    pub fail_backend: AtomicBool,
    pub delete_calls: AtomicUsize,
    pub update_calls: AtomicUsize,
    pub verification_emails: AtomicUsize,
}

impl FakeIdentityProvider {
    pub(crate) fn insert(&self, uid: &str, email: &str, display_name: &str) -> Identity {
        let identity = Identity {
            uid: uid.to_string(),
            email: email.to_string(),
            email_verified: false,
            display_name: display_name.to_string(),
            photo_url: None,
            phone_number: None,
            disabled: false,
            custom_claims: CustomClaims::default(),
            created_at: Utc::now(),
        };
        self.identities
            .lock()
            .unwrap()
            .insert(uid.to_string(), identity.clone());
        identity
    }

    pub(crate) fn get(&self, uid: &str) -> Option<Identity> {
        self.identities.lock().unwrap().get(uid).cloned()
    }

    pub(crate) fn count(&self) -> usize {
        self.identities.lock().unwrap().len()
    }

    pub(crate) fn set_disabled(&self, uid: &str) {
        if let Some(identity) = self.identities.lock().unwrap().get_mut(uid) {
            identity.disabled = true;
        }
    }

    fn check_backend(&self) -> IdentityResult<()> {
        if self.fail_backend.load(Ordering::SeqCst) {
            return Err(IdentityError::backend("identity service offline"));
        }
        Ok(())
    }
}

#[async_trait]
impl IdentityProvider for FakeIdentityProvider {
    async fn create_identity(&self, new_identity: &NewIdentity) -> IdentityResult<Identity> {
        self.check_backend()?;
        let exists = self
            .identities
            .lock()
            .unwrap()
            .values()
            .any(|i| i.email == new_identity.email);
        if exists {
            return Err(IdentityError::EmailAlreadyExists {
                email: new_identity.email.clone(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let uid = format!("uid-{}", self.next_uid.fetch_add(1, Ordering::SeqCst));
        let mut identity = self.insert(&uid, &new_identity.email, &new_identity.display_name);
        identity.phone_number = new_identity.phone_number.clone();
        self.identities
            .lock()
            .unwrap()
            .insert(uid, identity.clone());
        Ok(identity)
    }

    async fn verify_token(&self, bearer: &str) -> IdentityResult<VerifiedToken> {
        self.check_backend()?;
        let (uid, admin) = match bearer.strip_prefix("admin-token-") {
            Some(uid) => (uid, true),
            None => match bearer.strip_prefix("token-") {
                Some(uid) => (uid, false),
                None => return Err(IdentityError::invalid_token("malformed")),
            },
        };
        Ok(VerifiedToken {
            uid: uid.to_string(),
            email: format!("{}@example.com", uid),
            email_verified: false,
            admin,
        })
    }

    async fn get_identity(&self, uid: &str) -> IdentityResult<Identity> {
        self.check_backend()?;
        self.get(uid)
            .ok_or_else(|| IdentityError::user_not_found(uid))
    }

    async fn update_identity(&self, uid: &str, update: &IdentityUpdate) -> IdentityResult<Identity> {
        self.update_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_update.load(Ordering::SeqCst) {
            return Err(IdentityError::backend("update rejected"));
        }
        let mut identities = self.identities.lock().unwrap();
        let identity = identities
            .get_mut(uid)
            .ok_or_else(|| IdentityError::user_not_found(uid))?;
        if let Some(display_name) = &update.display_name {
            identity.display_name = display_name.clone();
        }
        if let Some(photo_url) = &update.photo_url {
            identity.photo_url = Some(photo_url.clone());
        }
        Ok(identity.clone())
    }

    async fn delete_identity(&self, uid: &str) -> IdentityResult<()> {
        self.delete_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_delete.load(Ordering::SeqCst) {
            return Err(IdentityError::backend("delete rejected"));
        }
        match self.identities.lock().unwrap().remove(uid) {
            Some(_) => Ok(()),
            None => Err(IdentityError::user_not_found(uid)),
        }
    }

    async fn set_custom_claims(&self, uid: &str, claims: CustomClaims) -> IdentityResult<()> {
        let mut identities = self.identities.lock().unwrap();
        let identity = identities
            .get_mut(uid)
            .ok_or_else(|| IdentityError::user_not_found(uid))?;
        identity.custom_claims = claims;
        Ok(())
    }

    async fn send_verification_email(&self, _uid: &str) -> IdentityResult<()> {
        if self.fail_send_verification.load(Ordering::SeqCst) {
            return Err(IdentityError::backend("mailer offline"));
        }
        self.verification_emails.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    async fn sign_in(&self, email: &str, _password: &str) -> IdentityResult<SignIn> {
        let identity = self
            .identities
            .lock()
            .unwrap()
            .values()
            .find(|i| i.email == email)
            .cloned()
            .ok_or_else(|| IdentityError::user_not_found(email))?;
        Ok(SignIn {
            id_token: token_for(&identity.uid),
            uid: identity.uid,
            expires_in: 3600,
            email_verified: identity.email_verified,
        })
    }

    async fn confirm_email_verification(&self, code: &str) -> IdentityResult<Identity> {
        let mut identities = self.identities.lock().unwrap();
        let identity = identities
            .get_mut(code)
            .ok_or_else(|| IdentityError::InvalidVerificationCode {
                location: ErrorLocation::from(Location::caller()),
            })?;
        identity.email_verified = true;
        Ok(identity.clone())
    }
}

#[derive(Default)]
pub(crate) struct FakeProfileStore {
    docs: Mutex<HashMap<String, UserProfile>>,
    /// Every trait call, reads and writes alike
    pub calls: AtomicUsize,
    pub fail_set: AtomicBool,
    /// Number of upcoming `get` calls that fail with a retryable error
    pub transient_get_failures: AtomicU32,
    /// Written just before the next `create`, as if another request got there first
    pub concurrent_writer: Mutex<Option<UserProfile>>,
}

impl FakeProfileStore {
    pub(crate) fn put(&self, profile: UserProfile) {
        self.docs
            .lock()
            .unwrap()
            .insert(profile.uid.clone(), profile);
    }

    pub(crate) fn doc(&self, uid: &str) -> Option<UserProfile> {
        self.docs.lock().unwrap().get(uid).cloned()
    }

    pub(crate) fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ProfileStore for FakeProfileStore {
    async fn get(&self, uid: &str) -> StoreResult<Option<UserProfile>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let remaining = self.transient_get_failures.load(Ordering::SeqCst);
        if remaining > 0 {
            self.transient_get_failures
                .store(remaining - 1, Ordering::SeqCst);
            return Err(StoreError::backend("database is locked", true));
        }
        Ok(self.doc(uid))
    }

    async fn set(&self, profile: &UserProfile) -> StoreResult<()> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_set.load(Ordering::SeqCst) {
            return Err(StoreError::backend("disk full", false));
        }
        let mut docs = self.docs.lock().unwrap();
        let created_at = docs
            .get(&profile.uid)
            .map_or(profile.created_at, |existing| existing.created_at);
        docs.insert(
            profile.uid.clone(),
            UserProfile {
                created_at,
                ..profile.clone()
            },
        );
        Ok(())
    }

    async fn create(&self, profile: &UserProfile) -> StoreResult<bool> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_set.load(Ordering::SeqCst) {
            return Err(StoreError::backend("disk full", false));
        }
        if let Some(winner) = self.concurrent_writer.lock().unwrap().take() {
            self.put(winner);
        }

        let mut docs = self.docs.lock().unwrap();
        if docs.contains_key(&profile.uid) {
            return Ok(false);
        }
        docs.insert(profile.uid.clone(), profile.clone());
        Ok(true)
    }

    async fn merge(&self, uid: &str, patch: &ProfilePatch) -> StoreResult<Option<UserProfile>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let mut docs = self.docs.lock().unwrap();
        let Some(existing) = docs.get(uid) else {
            return Ok(None);
        };

        let updated_at = (existing.updated_at + Duration::microseconds(1)).max(Utc::now());
        let mut document = match serde_json::to_value(existing) {
            Ok(Value::Object(map)) => map,
            _ => return Err(StoreError::corrupt(uid, "not an object")),
        };
        patch.apply_to(&mut document, json!(updated_at));
        let merged: UserProfile = serde_json::from_value(Value::Object(document))
            .map_err(|e| StoreError::corrupt(uid, e.to_string()))?;

        docs.insert(uid.to_string(), merged.clone());
        Ok(Some(merged))
    }

    async fn delete(&self, uid: &str) -> StoreResult<bool> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.docs.lock().unwrap().remove(uid).is_some())
    }

    async fn query_by_email(&self, email: &str) -> StoreResult<Vec<UserProfile>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self
            .docs
            .lock()
            .unwrap()
            .values()
            .filter(|p| p.email == email)
            .cloned()
            .collect())
    }

    async fn list_page(&self, limit: usize, cursor: Option<&str>) -> StoreResult<ProfilePage> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let mut all: Vec<UserProfile> = self.docs.lock().unwrap().values().cloned().collect();
        all.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| b.uid.cmp(&a.uid))
        });

        let start = match cursor {
            Some(cursor) => match all.iter().position(|p| p.uid == cursor) {
                Some(index) => index + 1,
                None => {
                    return Err(StoreError::InvalidCursor {
                        cursor: cursor.to_string(),
                        location: ErrorLocation::from(Location::caller()),
                    });
                }
            },
            None => 0,
        };

        let users = all.into_iter().skip(start).take(limit).collect();
        Ok(ProfilePage::new(users, limit))
    }
}
