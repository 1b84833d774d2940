use crate::ErrorLocation;

use std::panic::Location;

use thiserror::Error;

/// Failures reported by the identity provider, one variant per known sub-code
#[derive(Error, Debug)]
pub enum IdentityError {
    #[error("Email already in use: {email} {location}")]
    EmailAlreadyExists {
        email: String,
        location: ErrorLocation,
    },

    #[error("Invalid email: {email} {location}")]
    InvalidEmail {
        email: String,
        location: ErrorLocation,
    },

    #[error("Weak password: {message} {location}")]
    WeakPassword {
        message: String,
        location: ErrorLocation,
    },

    #[error("Invalid phone number {location}")]
    InvalidPhoneNumber { location: ErrorLocation },

    #[error("User not found: {lookup} {location}")]
    UserNotFound {
        lookup: String,
        location: ErrorLocation,
    },

    #[error("Wrong password {location}")]
    WrongPassword { location: ErrorLocation },

    #[error("User disabled: {uid} {location}")]
    UserDisabled {
        uid: String,
        location: ErrorLocation,
    },

    #[error("Too many requests for {key} {location}")]
    TooManyRequests {
        key: String,
        location: ErrorLocation,
    },

    #[error("Invalid token: {message} {location}")]
    InvalidToken {
        message: String,
        location: ErrorLocation,
    },

    #[error("Token expired {location}")]
    TokenExpired { location: ErrorLocation },

    #[error("Invalid verification code {location}")]
    InvalidVerificationCode { location: ErrorLocation },

    #[error("Identity backend error: {message} {location}")]
    Backend {
        message: String,
        location: ErrorLocation,
    },
}

impl IdentityError {
    #[track_caller]
    pub fn user_not_found<S: Into<String>>(lookup: S) -> Self {
        IdentityError::UserNotFound {
            lookup: lookup.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn backend<S: Into<String>>(message: S) -> Self {
        IdentityError::Backend {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn invalid_token<S: Into<String>>(message: S) -> Self {
        IdentityError::InvalidToken {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Provider sub-code, stable across releases
    pub fn code(&self) -> &'static str {
        match self {
            Self::EmailAlreadyExists { .. } => "auth/email-already-in-use",
            Self::InvalidEmail { .. } => "auth/invalid-email",
            Self::WeakPassword { .. } => "auth/weak-password",
            Self::InvalidPhoneNumber { .. } => "auth/invalid-phone-number",
            Self::UserNotFound { .. } => "auth/user-not-found",
            Self::WrongPassword { .. } => "auth/wrong-password",
            Self::UserDisabled { .. } => "auth/user-disabled",
            Self::TooManyRequests { .. } => "auth/too-many-requests",
            Self::InvalidToken { .. } => "auth/invalid-id-token",
            Self::TokenExpired { .. } => "auth/id-token-expired",
            Self::InvalidVerificationCode { .. } => "auth/invalid-action-code",
            Self::Backend { .. } => "auth/internal-error",
        }
    }

    /// Message suitable for showing to the end user
    pub fn user_message(&self) -> String {
        match self {
            Self::EmailAlreadyExists { .. } => "An account with this email already exists".into(),
            Self::InvalidEmail { .. } => "Invalid email address".into(),
            Self::WeakPassword { .. } => "Password is too weak. Use at least 8 characters with an uppercase letter, a lowercase letter, and a number".into(),
            Self::InvalidPhoneNumber { .. } => "Invalid phone number".into(),
            Self::UserNotFound { .. } => "No account found with this email address".into(),
            Self::WrongPassword { .. } => "Incorrect password".into(),
            Self::UserDisabled { .. } => "This account has been disabled".into(),
            Self::TooManyRequests { .. } => "Too many failed attempts. Please try again later".into(),
            Self::InvalidToken { .. } | Self::TokenExpired { .. } => {
                "Unauthorized: Invalid token".into()
            }
            Self::InvalidVerificationCode { .. } => {
                "The verification link is invalid or has already been used".into()
            }
            Self::Backend { .. } => "The identity service is unavailable".into(),
        }
    }

    /// True when the token itself was rejected
    pub fn is_token_rejection(&self) -> bool {
        matches!(self, Self::InvalidToken { .. } | Self::TokenExpired { .. })
    }

    pub fn is_backend(&self) -> bool {
        matches!(self, Self::Backend { .. })
    }
}
