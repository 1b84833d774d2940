use saathi_core::{CoreError, IdentityError, StoreError};

use std::panic::Location;
use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProfileError {
    #[error("Validation error: {message} {location}")]
    Validation {
        message: String,
        field: Option<String>,
        location: ErrorLocation,
    },

    #[error("{message} {location}")]
    Unauthorized {
        message: String,
        location: ErrorLocation,
    },

    #[error("{message} {location}")]
    AccessDenied {
        message: String,
        location: ErrorLocation,
    },

    #[error("{message} {location}")]
    NotFound {
        message: String,
        location: ErrorLocation,
    },

    #[error("Identity provider error: {source} {location}")]
    IdentityProvider {
        #[source]
        source: IdentityError,
        location: ErrorLocation,
    },

    #[error("Profile store error: {source} {location}")]
    Store {
        #[source]
        source: StoreError,
        location: ErrorLocation,
    },
}

impl ProfileError {
    #[track_caller]
    pub fn validation<F: Into<String>, M: Into<String>>(field: F, message: M) -> Self {
        Self::Validation {
            message: message.into(),
            field: Some(field.into()),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn unauthorized<S: Into<String>>(message: S) -> Self {
        Self::Unauthorized {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn access_denied<S: Into<String>>(message: S) -> Self {
        Self::AccessDenied {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn not_found<S: Into<String>>(message: S) -> Self {
        Self::NotFound {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Stable machine-readable code for clients
    pub fn code(&self) -> &'static str {
        match self {
            Self::Validation { .. } => "VALIDATION_ERROR",
            Self::Unauthorized { .. } => "UNAUTHORIZED",
            Self::AccessDenied { .. } => "ACCESS_DENIED",
            Self::NotFound { .. } => "NOT_FOUND",
            Self::IdentityProvider { source, .. } => source.code(),
            Self::Store { .. } => "STORE_ERROR",
        }
    }

    /// Sanitized message, safe to return to a client
    pub fn user_message(&self) -> String {
        match self {
            Self::Validation { message, .. }
            | Self::Unauthorized { message, .. }
            | Self::AccessDenied { message, .. }
            | Self::NotFound { message, .. } => message.clone(),
            Self::IdentityProvider { source, .. } => source.user_message(),
            Self::Store { .. } => "The profile store is unavailable, please try again".into(),
        }
    }

    pub fn field(&self) -> Option<&str> {
        match self {
            Self::Validation { field, .. } => field.as_deref(),
            _ => None,
        }
    }
}

impl From<CoreError> for ProfileError {
    #[track_caller]
    fn from(err: CoreError) -> Self {
        Self::Validation {
            message: err.message(),
            field: err.field_name().map(String::from),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<IdentityError> for ProfileError {
    #[track_caller]
    fn from(source: IdentityError) -> Self {
        Self::IdentityProvider {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<StoreError> for ProfileError {
    #[track_caller]
    fn from(source: StoreError) -> Self {
        Self::Store {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = StdResult<T, ProfileError>;
