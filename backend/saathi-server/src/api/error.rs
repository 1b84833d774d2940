//! REST API error types.
//!
//! Every failure becomes `{"error": {"code", "message", "field"?}}` with a
//! status from the profile error taxonomy. The full diagnostic, including
//! the source location, is logged; clients only see the sanitized message.

use saathi_core::IdentityError;
use saathi_profile::ProfileError;

use std::panic::Location;

use axum::{
    Json,
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use error_location::ErrorLocation;
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Serialize)]
pub struct ApiErrorResponse {
    pub error: ApiErrorBody,
}

#[derive(Debug, Serialize)]
pub struct ApiErrorBody {
    /// Machine-readable code, e.g. "NOT_FOUND" or "auth/wrong-password"
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

#[derive(Debug, Error)]
pub enum ApiError {
    /// 400
    #[error("Validation failed: {message} {location}")]
    Validation {
        message: String,
        field: Option<String>,
        location: ErrorLocation,
    },

    /// 401
    #[error("Unauthorized: {message} {location}")]
    Unauthorized {
        message: String,
        location: ErrorLocation,
    },

    /// 403
    #[error("Forbidden: {message} {location}")]
    Forbidden {
        message: String,
        location: ErrorLocation,
    },

    /// 404
    #[error("Not found: {message} {location}")]
    NotFound {
        message: String,
        location: ErrorLocation,
    },

    /// Identity provider rejection, 400 (500 when the provider itself failed)
    #[error("Identity provider: {source} {location}")]
    Identity {
        #[source]
        source: IdentityError,
        location: ErrorLocation,
    },

    /// 500
    #[error("Internal error: {message} {location}")]
    Internal {
        message: String,
        /// Sanitized text returned to the client
        public_message: String,
        location: ErrorLocation,
    },
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation { .. } => StatusCode::BAD_REQUEST,
            ApiError::Unauthorized { .. } => StatusCode::UNAUTHORIZED,
            ApiError::Forbidden { .. } => StatusCode::FORBIDDEN,
            ApiError::NotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::Identity { source, .. } if source.is_backend() => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            ApiError::Identity { .. } => StatusCode::BAD_REQUEST,
            ApiError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            log::error!("{}", self);
        } else {
            log::warn!("{}", self);
        }

        let body = match self {
            ApiError::Validation { message, field, .. } => ApiErrorBody {
                code: "VALIDATION_ERROR".into(),
                message,
                field,
            },
            ApiError::Unauthorized { message, .. } => ApiErrorBody {
                code: "UNAUTHORIZED".into(),
                message,
                field: None,
            },
            ApiError::Forbidden { message, .. } => ApiErrorBody {
                code: "ACCESS_DENIED".into(),
                message,
                field: None,
            },
            ApiError::NotFound { message, .. } => ApiErrorBody {
                code: "NOT_FOUND".into(),
                message,
                field: None,
            },
            ApiError::Identity { source, .. } => ApiErrorBody {
                code: source.code().into(),
                message: source.user_message(),
                field: None,
            },
            ApiError::Internal { public_message, .. } => ApiErrorBody {
                code: "INTERNAL_ERROR".into(),
                message: public_message,
                field: None,
            },
        };

        (status, Json(ApiErrorResponse { error: body })).into_response()
    }
}

impl From<ProfileError> for ApiError {
    #[track_caller]
    fn from(e: ProfileError) -> Self {
        let location = ErrorLocation::from(Location::caller());
        match e {
            ProfileError::Validation { message, field, .. } => ApiError::Validation {
                message,
                field,
                location,
            },
            ProfileError::Unauthorized { message, .. } => {
                ApiError::Unauthorized { message, location }
            }
            ProfileError::AccessDenied { message, .. } => ApiError::Forbidden { message, location },
            ProfileError::NotFound { message, .. } => ApiError::NotFound { message, location },
            ProfileError::IdentityProvider { source, .. } => ApiError::Identity { source, location },
            err @ ProfileError::Store { .. } => ApiError::Internal {
                public_message: err.user_message(),
                message: err.to_string(),
                location,
            },
        }
    }
}

/// Malformed or unknown-field JSON bodies are validation failures
impl From<JsonRejection> for ApiError {
    #[track_caller]
    fn from(rejection: JsonRejection) -> Self {
        ApiError::Validation {
            message: rejection.body_text(),
            field: None,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<QueryRejection> for ApiError {
    #[track_caller]
    fn from(rejection: QueryRejection) -> Self {
        ApiError::Validation {
            message: rejection.body_text(),
            field: None,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
