use crate::{AppState, api::auth::auth, api::users::users, health};

use axum::{
    Router,
    http::HeaderValue,
    routing::{get, post, put},
};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

/// Build the application router with all endpoints
pub fn build_router(state: AppState, cors_origins: &[String]) -> Router {
    Router::new()
        // Health
        .route("/health", get(health::health_check))
        .route("/live", get(health::liveness_check))
        // Account
        .route("/api/auth/signup", post(auth::signup))
        .route("/api/auth/login", post(auth::login))
        .route("/api/auth/verify-email", post(auth::verify_email))
        .route("/api/auth/send-verification", post(auth::send_verification))
        .route("/api/auth/session", get(auth::session))
        // Self-service profile
        .route(
            "/api/users/profile",
            get(users::get_own_profile)
                .post(users::ensure_own_profile)
                .put(users::update_own_profile),
        )
        .route(
            "/api/users/profile/complete",
            post(users::complete_own_profile),
        )
        // Profile by uid
        .route(
            "/api/users/profile/{uid}",
            get(users::get_profile)
                .put(users::update_profile)
                .delete(users::delete_profile),
        )
        .route(
            "/api/users/profile/{uid}/complete",
            post(users::complete_profile),
        )
        // Admin
        .route("/api/users/all", get(users::list_users))
        .route("/api/users/search", get(users::search_users))
        .route("/api/users/{uid}/admin", put(users::set_admin))
        .with_state(state)
        .layer(cors_layer(cors_origins))
}

/// Any origin when none are configured, otherwise only the listed ones
fn cors_layer(origins: &[String]) -> CorsLayer {
    let layer = CorsLayer::new().allow_methods(Any).allow_headers(Any);

    if origins.is_empty() {
        return layer.allow_origin(Any);
    }

    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                log::warn!("Ignoring invalid CORS origin: {}", origin);
                None
            }
        })
        .collect();

    layer.allow_origin(AllowOrigin::list(allowed))
}
