use error_location::ErrorLocation;
use saathi_core::IdentityError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Invalid token: {message} {location}")]
    InvalidToken {
        message: String,
        location: ErrorLocation,
    },

    #[error("Token expired {location}")]
    TokenExpired { location: ErrorLocation },

    #[error("Missing authorization header {location}")]
    MissingHeader { location: ErrorLocation },

    #[error("Invalid authorization scheme: expected 'Bearer' {location}")]
    InvalidScheme { location: ErrorLocation },

    #[error("JWT decode failed: {source} {location}")]
    JwtDecode {
        #[source]
        source: jsonwebtoken::errors::Error,
        location: ErrorLocation,
    },

    #[error("JWT encode failed: {source} {location}")]
    JwtEncode {
        #[source]
        source: jsonwebtoken::errors::Error,
        location: ErrorLocation,
    },

    #[error("Rate limit exceeded: {limit} attempts per {window_secs}s {location}")]
    RateLimitExceeded {
        limit: u32,
        window_secs: u64,
        location: ErrorLocation,
    },

    #[error("Invalid claim '{claim}': {message} {location}")]
    InvalidClaim {
        claim: String,
        message: String,
        location: ErrorLocation,
    },

    #[error("Password hashing failed: {message} {location}")]
    PasswordHash {
        message: String,
        location: ErrorLocation,
    },
}

impl AuthError {
    /// Machine-readable code for logs and client responses
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidToken { .. } => "INVALID_TOKEN",
            Self::TokenExpired { .. } => "TOKEN_EXPIRED",
            Self::MissingHeader { .. } => "MISSING_AUTH_HEADER",
            Self::InvalidScheme { .. } => "INVALID_AUTH_SCHEME",
            Self::JwtDecode { .. } => "JWT_DECODE_FAILED",
            Self::JwtEncode { .. } => "JWT_ENCODE_FAILED",
            Self::RateLimitExceeded { .. } => "RATE_LIMIT_EXCEEDED",
            Self::InvalidClaim { .. } => "INVALID_CLAIM",
            Self::PasswordHash { .. } => "PASSWORD_HASH_FAILED",
        }
    }

    /// No credentials were presented at all
    pub fn is_missing_credentials(&self) -> bool {
        matches!(self, Self::MissingHeader { .. })
    }
}

/// Translate token and limiter failures into the identity provider's vocabulary
impl From<AuthError> for IdentityError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::TokenExpired { location } => IdentityError::TokenExpired { location },
            AuthError::InvalidToken { message, location } => {
                IdentityError::InvalidToken { message, location }
            }
            AuthError::JwtDecode { source, location } => IdentityError::InvalidToken {
                message: source.to_string(),
                location,
            },
            AuthError::InvalidClaim {
                claim,
                message,
                location,
            } => IdentityError::InvalidToken {
                message: format!("{}: {}", claim, message),
                location,
            },
            AuthError::MissingHeader { location } | AuthError::InvalidScheme { location } => {
                IdentityError::InvalidToken {
                    message: "malformed bearer token".to_string(),
                    location,
                }
            }
            AuthError::RateLimitExceeded {
                limit,
                window_secs,
                location,
            } => IdentityError::TooManyRequests {
                key: format!("{} attempts per {}s", limit, window_secs),
                location,
            },
            AuthError::JwtEncode { source, location } => IdentityError::Backend {
                message: source.to_string(),
                location,
            },
            AuthError::PasswordHash { message, location } => {
                IdentityError::Backend { message, location }
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, AuthError>;
