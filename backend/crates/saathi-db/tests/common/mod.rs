#![allow(dead_code)]

use chrono::{DateTime, TimeDelta, Utc};
use saathi_core::{CustomClaims, Identity, NewIdentity, UserProfile};
use saathi_db::{IdentityProviderConfig, SqliteIdentityProvider, connect, connect_in_memory};
use sqlx::SqlitePool;
use tempfile::TempDir;

pub const TEST_SECRET: &str = "test-secret-key-at-least-32-bytes!!";

/// Creates an in-memory SQLite pool with migrations run
pub async fn create_test_pool() -> SqlitePool {
    connect_in_memory().await.expect("Failed to create test pool")
}

/// WAL database file in a fresh directory, with a multi-connection pool.
///
/// The directory is removed when the returned `TempDir` drops.
pub async fn create_file_pool(max_connections: u32) -> (TempDir, SqlitePool) {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let pool = connect(&dir.path().join("data").join("saathi.db"), max_connections)
        .await
        .expect("Failed to create file pool");
    (dir, pool)
}

pub fn test_provider(pool: SqlitePool) -> SqliteIdentityProvider {
    SqliteIdentityProvider::new(pool, IdentityProviderConfig::new(TEST_SECRET))
}

pub fn new_identity(email: &str) -> NewIdentity {
    NewIdentity {
        email: email.to_string(),
        password: "Passw0rd".to_string(),
        display_name: "A B".to_string(),
        phone_number: None,
    }
}

/// Profile for `uid` created `offset_secs` after a fixed epoch
pub fn test_profile(uid: &str, email: &str, offset_secs: i64) -> UserProfile {
    let created_at: DateTime<Utc> =
        DateTime::from_timestamp(1_790_000_000, 0).unwrap() + TimeDelta::seconds(offset_secs);
    let identity = Identity {
        uid: uid.to_string(),
        email: email.to_string(),
        email_verified: false,
        display_name: "A B".to_string(),
        photo_url: None,
        phone_number: None,
        disabled: false,
        custom_claims: CustomClaims::default(),
        created_at,
    };
    UserProfile::for_identity(&identity, created_at)
}
