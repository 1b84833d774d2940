//! Account REST API handlers: signup, sign-in, verification and session.

use crate::{
    ApiResult, AppState, AuthenticatedCaller, JsonBody, LoginRequest, SendVerificationResponse,
    SignupResponse, VerifyEmailRequest, VerifyEmailResponse,
};

use saathi_core::{SignIn, SignupRequest};
use saathi_profile::SessionSummary;

use axum::{Json, extract::State, http::StatusCode};

/// POST /api/auth/signup
///
/// Creates the identity and its profile; a failed verification email is a
/// warning in the body, not an error status.
pub async fn signup(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<SignupRequest>,
) -> ApiResult<(StatusCode, Json<SignupResponse>)> {
    let outcome = state.accounts.sign_up(&request).await?;

    Ok((StatusCode::CREATED, Json(outcome.into())))
}

/// POST /api/auth/login
pub async fn login(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<LoginRequest>,
) -> ApiResult<Json<SignIn>> {
    let session = state
        .accounts
        .sign_in(&request.email, &request.password)
        .await?;

    Ok(Json(session))
}

/// POST /api/auth/verify-email
pub async fn verify_email(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<VerifyEmailRequest>,
) -> ApiResult<Json<VerifyEmailResponse>> {
    let identity = state.accounts.confirm_email(&request.code).await?;

    Ok(Json(VerifyEmailResponse {
        uid: identity.uid,
        email_verified: identity.email_verified,
    }))
}

/// POST /api/auth/send-verification
pub async fn send_verification(
    State(state): State<AppState>,
    AuthenticatedCaller(caller): AuthenticatedCaller,
) -> ApiResult<Json<SendVerificationResponse>> {
    let sent = state.accounts.resend_verification(&caller).await?;

    let message = if sent {
        "Verification email sent"
    } else {
        "Email is already verified"
    };
    Ok(Json(SendVerificationResponse {
        message: message.to_string(),
        sent,
    }))
}

/// GET /api/auth/session
pub async fn session(
    State(state): State<AppState>,
    AuthenticatedCaller(caller): AuthenticatedCaller,
) -> ApiResult<Json<SessionSummary>> {
    Ok(Json(state.profiles.session(&caller).await?))
}
