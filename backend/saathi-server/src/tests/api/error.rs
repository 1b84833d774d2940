use crate::ApiError;

use saathi_core::{IdentityError, StoreError};
use saathi_profile::ProfileError;

use std::panic::Location;

use axum::response::IntoResponse;
use error_location::ErrorLocation;
use http::StatusCode;
use http_body_util::BodyExt;

async fn body_json(error: ApiError) -> (StatusCode, serde_json::Value) {
    let response = error.into_response();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&body).unwrap())
}

#[tokio::test]
async fn test_validation_error_returns_400_with_field() {
    let error = ApiError::from(ProfileError::validation("email", "Email is required"));

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"]["code"], "VALIDATION_ERROR");
    assert_eq!(json["error"]["message"], "Email is required");
    assert_eq!(json["error"]["field"], "email");
}

#[tokio::test]
async fn test_unauthorized_returns_401_with_message() {
    let error = ApiError::from(ProfileError::unauthorized("Unauthorized: No token provided"));

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(json["error"]["message"], "Unauthorized: No token provided");
    assert!(json["error"].get("field").is_none());
}

#[tokio::test]
async fn test_access_denied_returns_403() {
    let error = ApiError::from(ProfileError::access_denied("Access denied"));

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(json["error"]["code"], "ACCESS_DENIED");
}

#[tokio::test]
async fn test_not_found_returns_404() {
    let error = ApiError::NotFound {
        message: "User profile not found".into(),
        location: ErrorLocation::from(Location::caller()),
    };

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["error"]["message"], "User profile not found");
}

#[tokio::test]
async fn test_identity_rejection_returns_400_with_sub_code() {
    let error = ApiError::from(ProfileError::from(IdentityError::WrongPassword {
        location: ErrorLocation::from(Location::caller()),
    }));

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"]["code"], "auth/wrong-password");
}

#[tokio::test]
async fn test_identity_backend_failure_returns_500() {
    let error = ApiError::from(ProfileError::from(IdentityError::backend("db down")));

    let (status, _) = body_json(error).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn test_store_failure_returns_500_without_internal_details() {
    let error = ApiError::from(ProfileError::from(StoreError::backend(
        "disk I/O error at /var/lib/saathi.db",
        false,
    )));

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["error"]["code"], "INTERNAL_ERROR");
    let message = json["error"]["message"].as_str().unwrap();
    assert!(!message.contains("/var/lib"));
}
