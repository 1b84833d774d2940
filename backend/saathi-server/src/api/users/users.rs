//! Profile REST API handlers.
//!
//! Self routes act on the authenticated caller; `{uid}` routes are
//! self-or-admin and listing, search and claim changes are admin only.
//! Entitlement is checked by the profile service before any store access.

use crate::{
    ApiResult, AppState, AuthenticatedCaller, JsonBody, ListUsersQuery, MessageResponse,
    ProfileResponse, QueryParams, SearchUsersQuery, SearchUsersResponse, SetAdminRequest,
    UpdateProfileResponse,
};

use saathi_core::{ProfilePage, ProfileUpdate};

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

const UPDATED_MESSAGE: &str = "Profile updated successfully";
const COMPLETED_MESSAGE: &str = "Profile marked complete";

// =============================================================================
// Self-service
// =============================================================================

/// GET /api/users/profile
pub async fn get_own_profile(
    State(state): State<AppState>,
    AuthenticatedCaller(caller): AuthenticatedCaller,
) -> ApiResult<Json<ProfileResponse>> {
    let profile = state.profiles.get_profile(&caller, &caller.uid).await?;

    Ok(Json(ProfileResponse { profile }))
}

/// POST /api/users/profile
///
/// Creates the caller's default profile if it is missing (201), otherwise
/// returns the existing one (200).
pub async fn ensure_own_profile(
    State(state): State<AppState>,
    AuthenticatedCaller(caller): AuthenticatedCaller,
) -> ApiResult<(StatusCode, Json<ProfileResponse>)> {
    let outcome = state.profiles.ensure_profile(&caller).await?;

    let status = if outcome.created {
        StatusCode::CREATED
    } else {
        StatusCode::OK
    };
    Ok((
        status,
        Json(ProfileResponse {
            profile: outcome.profile,
        }),
    ))
}

/// PUT /api/users/profile
pub async fn update_own_profile(
    State(state): State<AppState>,
    AuthenticatedCaller(caller): AuthenticatedCaller,
    JsonBody(update): JsonBody<ProfileUpdate>,
) -> ApiResult<Json<UpdateProfileResponse>> {
    let outcome = state
        .profiles
        .update_profile(&caller, &caller.uid, &update)
        .await?;

    Ok(Json(UpdateProfileResponse::new(UPDATED_MESSAGE, outcome)))
}

/// POST /api/users/profile/complete
pub async fn complete_own_profile(
    State(state): State<AppState>,
    AuthenticatedCaller(caller): AuthenticatedCaller,
) -> ApiResult<Json<UpdateProfileResponse>> {
    let outcome = state.profiles.complete_profile(&caller, &caller.uid).await?;

    Ok(Json(UpdateProfileResponse::new(COMPLETED_MESSAGE, outcome)))
}

// =============================================================================
// By uid (self-or-admin)
// =============================================================================

/// GET /api/users/profile/{uid}
pub async fn get_profile(
    State(state): State<AppState>,
    AuthenticatedCaller(caller): AuthenticatedCaller,
    Path(uid): Path<String>,
) -> ApiResult<Json<ProfileResponse>> {
    let profile = state.profiles.get_profile(&caller, &uid).await?;

    Ok(Json(ProfileResponse { profile }))
}

/// PUT /api/users/profile/{uid}
pub async fn update_profile(
    State(state): State<AppState>,
    AuthenticatedCaller(caller): AuthenticatedCaller,
    Path(uid): Path<String>,
    JsonBody(update): JsonBody<ProfileUpdate>,
) -> ApiResult<Json<UpdateProfileResponse>> {
    let outcome = state.profiles.update_profile(&caller, &uid, &update).await?;

    Ok(Json(UpdateProfileResponse::new(UPDATED_MESSAGE, outcome)))
}

/// POST /api/users/profile/{uid}/complete
pub async fn complete_profile(
    State(state): State<AppState>,
    AuthenticatedCaller(caller): AuthenticatedCaller,
    Path(uid): Path<String>,
) -> ApiResult<Json<UpdateProfileResponse>> {
    let outcome = state.profiles.complete_profile(&caller, &uid).await?;

    Ok(Json(UpdateProfileResponse::new(COMPLETED_MESSAGE, outcome)))
}

/// DELETE /api/users/profile/{uid}
///
/// Removes the profile and then the identity.
pub async fn delete_profile(
    State(state): State<AppState>,
    AuthenticatedCaller(caller): AuthenticatedCaller,
    Path(uid): Path<String>,
) -> ApiResult<Json<MessageResponse>> {
    state.profiles.delete_profile(&caller, &uid).await?;

    Ok(Json(MessageResponse::new("User profile deleted successfully")))
}

// =============================================================================
// Admin
// =============================================================================

/// GET /api/users/all?limit&lastDocId
pub async fn list_users(
    State(state): State<AppState>,
    AuthenticatedCaller(caller): AuthenticatedCaller,
    QueryParams(query): QueryParams<ListUsersQuery>,
) -> ApiResult<Json<ProfilePage>> {
    let page = state
        .profiles
        .list_profiles(&caller, query.limit, query.last_doc_id.as_deref())
        .await?;

    Ok(Json(page))
}

/// GET /api/users/search?email=
pub async fn search_users(
    State(state): State<AppState>,
    AuthenticatedCaller(caller): AuthenticatedCaller,
    QueryParams(query): QueryParams<SearchUsersQuery>,
) -> ApiResult<Json<SearchUsersResponse>> {
    let users = state.profiles.search_by_email(&caller, &query.email).await?;

    Ok(Json(SearchUsersResponse { users }))
}

/// PUT /api/users/{uid}/admin
pub async fn set_admin(
    State(state): State<AppState>,
    AuthenticatedCaller(caller): AuthenticatedCaller,
    Path(uid): Path<String>,
    JsonBody(request): JsonBody<SetAdminRequest>,
) -> ApiResult<Json<MessageResponse>> {
    state.profiles.set_admin(&caller, &uid, request.admin).await?;

    let message = if request.admin {
        format!("Admin access granted to {}", uid)
    } else {
        format!("Admin access revoked from {}", uid)
    };
    Ok(Json(MessageResponse::new(message)))
}
