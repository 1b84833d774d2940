use crate::ProfileRepository;

use async_trait::async_trait;
use saathi_core::ports::profile_store::StoreResult;
use saathi_core::{ProfilePage, ProfilePatch, ProfileStore, UserProfile};
use sqlx::SqlitePool;

/// `ProfileStore` over the `profiles` table
pub struct SqliteProfileStore {
    repo: ProfileRepository,
}

impl SqliteProfileStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            repo: ProfileRepository::new(pool),
        }
    }
}

#[async_trait]
impl ProfileStore for SqliteProfileStore {
    async fn get(&self, uid: &str) -> StoreResult<Option<UserProfile>> {
        Ok(self.repo.find(uid).await?)
    }

    async fn set(&self, profile: &UserProfile) -> StoreResult<()> {
        Ok(self.repo.upsert(profile).await?)
    }

    async fn create(&self, profile: &UserProfile) -> StoreResult<bool> {
        Ok(self.repo.insert_if_absent(profile).await?)
    }

    async fn merge(&self, uid: &str, patch: &ProfilePatch) -> StoreResult<Option<UserProfile>> {
        Ok(self.repo.merge(uid, patch).await?)
    }

    async fn delete(&self, uid: &str) -> StoreResult<bool> {
        Ok(self.repo.delete(uid).await?)
    }

    async fn query_by_email(&self, email: &str) -> StoreResult<Vec<UserProfile>> {
        Ok(self.repo.find_by_email(email).await?)
    }

    async fn list_page(&self, limit: usize, cursor: Option<&str>) -> StoreResult<ProfilePage> {
        let users = self.repo.page(limit, cursor).await?;
        Ok(ProfilePage::new(users, limit))
    }
}
