mod common;

use common::{create_file_pool, new_identity, test_profile, test_provider};

use googletest::prelude::*;
use saathi_core::{IdentityError, IdentityProvider, ProfilePatch, ProfileStore, ProfileUpdate};
use saathi_db::SqliteProfileStore;

use std::sync::Arc;

use chrono::TimeDelta;

fn patch(update: ProfileUpdate) -> ProfilePatch {
    ProfilePatch::from_update(&update).unwrap()
}

#[tokio::test]
async fn given_nested_path_when_connecting_then_directory_created_in_wal_mode() {
    let (dir, pool) = create_file_pool(4).await;

    let journal_mode: String = sqlx::query_scalar("PRAGMA journal_mode")
        .fetch_one(&pool)
        .await
        .unwrap();

    assert!(dir.path().join("data").join("saathi.db").exists());
    assert_that!(journal_mode.as_str(), eq("wal"));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn given_concurrent_merges_on_file_pool_when_applied_then_all_succeed_and_fields_survive() {
    // Given
    let (_dir, pool) = create_file_pool(8).await;
    let store = Arc::new(SqliteProfileStore::new(pool));
    let uids: Vec<String> = (0..8).map(|i| format!("u{}", i)).collect();
    for uid in &uids {
        store.set(&test_profile(uid, "x@y.com", 0)).await.unwrap();
    }

    // When: 20 merges per uid, alternating between two fields
    let mut tasks = Vec::new();
    for i in 0..160 {
        let store = store.clone();
        let uid = uids[i % uids.len()].clone();
        tasks.push(tokio::spawn(async move {
            let update = if i % 2 == 0 {
                ProfileUpdate {
                    bio: Some(format!("bio {}", i)),
                    ..ProfileUpdate::default()
                }
            } else {
                ProfileUpdate {
                    location: Some(format!("city {}", i)),
                    ..ProfileUpdate::default()
                }
            };
            store.merge(&uid, &patch(update)).await
        }));
    }

    let mut failures = Vec::new();
    for task in tasks {
        match task.await.unwrap() {
            Ok(Some(_)) => {}
            Ok(None) => failures.push("document missing".to_string()),
            Err(e) => failures.push(e.to_string()),
        }
    }

    // Then
    assert!(failures.is_empty(), "failed merges: {:?}", failures);
    for uid in &uids {
        let stored = store.get(uid).await.unwrap().unwrap();
        assert!(stored.bio.starts_with("bio "));
        assert!(stored.location.starts_with("city "));
        assert!(stored.updated_at > stored.created_at);
    }
}

#[tokio::test]
async fn given_existing_document_when_set_again_then_created_at_preserved() {
    // Given
    let (_dir, pool) = create_file_pool(2).await;
    let store = SqliteProfileStore::new(pool);
    let first = test_profile("u1", "a@b.com", 0);
    store.set(&first).await.unwrap();

    // When a later full write carries a newer creation time
    let mut later = test_profile("u1", "a@b.com", 3600);
    later.bio = "rewritten".to_string();
    store.set(&later).await.unwrap();

    // Then
    let stored = store.get("u1").await.unwrap().unwrap();
    assert_that!(stored.created_at, eq(first.created_at));
    assert_that!(stored.bio.as_str(), eq("rewritten"));
}

#[tokio::test]
async fn given_existing_document_when_create_then_false_and_untouched() {
    let (_dir, pool) = create_file_pool(2).await;
    let store = SqliteProfileStore::new(pool);
    let mut first = test_profile("u1", "a@b.com", 0);
    first.skills = vec!["React".to_string()];
    assert!(store.create(&first).await.unwrap());

    let mut second = test_profile("u1", "a@b.com", 0);
    second.created_at += TimeDelta::hours(1);
    let written = store.create(&second).await.unwrap();

    assert!(!written);
    assert_that!(store.get("u1").await.unwrap(), some(eq(&first)));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn given_one_code_redeemed_concurrently_when_confirming_then_exactly_one_succeeds() {
    // Given
    let (_dir, pool) = create_file_pool(8).await;
    let provider = Arc::new(test_provider(pool));
    let identity = provider.create_identity(&new_identity("a@b.com")).await.unwrap();
    provider.send_verification_email(&identity.uid).await.unwrap();
    let code = provider
        .pending_verification_code(&identity.uid)
        .await
        .unwrap()
        .unwrap();

    // When
    let mut tasks = Vec::new();
    for _ in 0..8 {
        let provider = provider.clone();
        let code = code.clone();
        tasks.push(tokio::spawn(async move {
            provider.confirm_email_verification(&code).await
        }));
    }

    let mut confirmed = 0;
    for task in tasks {
        match task.await.unwrap() {
            Ok(identity) => {
                assert!(identity.email_verified);
                confirmed += 1;
            }
            Err(IdentityError::InvalidVerificationCode { .. }) => {}
            Err(e) => panic!("unexpected error: {}", e),
        }
    }

    // Then
    assert_eq!(confirmed, 1);
    assert!(provider.get_identity(&identity.uid).await.unwrap().email_verified);
}
