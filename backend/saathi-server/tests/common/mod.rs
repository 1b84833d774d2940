#![allow(dead_code)]

//! Test infrastructure for saathi-server API tests

use saathi_core::{CustomClaims, IdentityProvider};
use saathi_db::{IdentityProviderConfig, SqliteIdentityProvider, SqliteProfileStore};
use saathi_profile::{ProfileSettings, RetryPolicy};
use saathi_server::{AppState, build_router};

use std::sync::Arc;

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use sqlx::SqlitePool;
use tower::ServiceExt;

pub const TEST_SECRET: &str = "test-secret-key-at-least-32-bytes!!";
pub const PASSWORD: &str = "Passw0rd";

pub struct TestApp {
    pub router: Router,
    pub identity: Arc<SqliteIdentityProvider>,
    pub pool: SqlitePool,
}

/// Router over an in-memory database
pub async fn create_test_app() -> TestApp {
    let pool = saathi_db::connect_in_memory()
        .await
        .expect("Failed to create test database");
    let identity = Arc::new(SqliteIdentityProvider::new(
        pool.clone(),
        IdentityProviderConfig::new(TEST_SECRET),
    ));
    let store = Arc::new(SqliteProfileStore::new(pool.clone()));
    let settings = ProfileSettings {
        retry: RetryPolicy::none(),
        ..ProfileSettings::default()
    };

    TestApp {
        router: build_router(AppState::new(identity.clone(), store, settings), &[]),
        identity,
        pool,
    }
}

impl TestApp {
    /// Send a request and decode the JSON body (Null for empty bodies)
    pub async fn send(
        &self,
        method: &str,
        uri: &str,
        token: Option<&str>,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
        }
        let request = match body {
            Some(body) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);

        (status, json)
    }

    /// Sign up and return the new uid
    pub async fn signup(&self, email: &str, display_name: &str) -> String {
        let (status, json) = self
            .send(
                "POST",
                "/api/auth/signup",
                None,
                Some(json!({
                    "email": email,
                    "password": PASSWORD,
                    "displayName": display_name,
                })),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED, "signup failed: {}", json);
        json["uid"].as_str().unwrap().to_string()
    }

    /// Sign in and return the bearer token
    pub async fn login(&self, email: &str) -> String {
        let (status, json) = self
            .send(
                "POST",
                "/api/auth/login",
                None,
                Some(json!({"email": email, "password": PASSWORD})),
            )
            .await;
        assert_eq!(status, StatusCode::OK, "login failed: {}", json);
        json["idToken"].as_str().unwrap().to_string()
    }

    /// Sign up and sign in; returns (uid, token)
    pub async fn user(&self, email: &str) -> (String, String) {
        let uid = self.signup(email, "Test User").await;
        let token = self.login(email).await;
        (uid, token)
    }

    /// Sign up, grant admin directly through the provider, and sign in
    pub async fn admin(&self, email: &str) -> (String, String) {
        let (uid, token) = self.user(email).await;
        self.identity
            .set_custom_claims(&uid, CustomClaims::admin(true))
            .await
            .unwrap();
        (uid, token)
    }
}
