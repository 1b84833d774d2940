pub mod api;
pub mod app_state;
pub mod bootstrap;
pub mod cli;
pub mod error;
pub mod health;
pub mod logger;
pub mod maintenance;
pub mod routes;

#[cfg(test)]
mod tests;

pub use api::{
    auth::{
        login_request::LoginRequest, message_response::MessageResponse,
        send_verification_response::SendVerificationResponse, signup_response::SignupResponse,
        verify_email_request::VerifyEmailRequest, verify_email_response::VerifyEmailResponse,
    },
    error::ApiError,
    error::Result as ApiResult,
    extractors::{
        authenticated_caller::AuthenticatedCaller, json_body::JsonBody, query_params::QueryParams,
    },
    users::{
        list_users_query::ListUsersQuery, profile_response::ProfileResponse,
        search_users_query::SearchUsersQuery, search_users_response::SearchUsersResponse,
        set_admin_request::SetAdminRequest, update_profile_response::UpdateProfileResponse,
    },
};
pub use app_state::AppState;

pub use crate::routes::build_router;
