use crate::{ProfilePage, ProfilePatch, StoreError, UserProfile};

use async_trait::async_trait;

pub type StoreResult<T> = Result<T, StoreError>;

/// Document store holding one profile per identity uid
#[async_trait]
pub trait ProfileStore: Send + Sync {
    async fn get(&self, uid: &str) -> StoreResult<Option<UserProfile>>;

    /// Write the full document, replacing any existing one.
    ///
    /// An existing document keeps its original `createdAt`.
    async fn set(&self, profile: &UserProfile) -> StoreResult<()>;

    /// Write `profile` only if no document exists for its uid.
    ///
    /// Returns `false`, leaving the stored document untouched, when one does.
    async fn create(&self, profile: &UserProfile) -> StoreResult<bool>;

    /// Shallow-merge `patch` into an existing document and stamp `updatedAt`.
    ///
    /// Returns `None` without writing when no document exists for `uid`.
    async fn merge(&self, uid: &str, patch: &ProfilePatch) -> StoreResult<Option<UserProfile>>;

    /// Returns whether a document was removed
    async fn delete(&self, uid: &str) -> StoreResult<bool>;

    async fn query_by_email(&self, email: &str) -> StoreResult<Vec<UserProfile>>;

    /// Profiles ordered by creation time descending, starting after `cursor`
    async fn list_page(&self, limit: usize, cursor: Option<&str>) -> StoreResult<ProfilePage>;
}
