pub mod bearer;
pub mod claims;
pub mod error;
pub mod jwt_validator;
pub mod password;
pub mod rate_limit_config;
pub mod sign_in_rate_limiter;
pub mod token_issuer;

pub use bearer::extract_bearer;
pub use claims::Claims;
pub use error::{AuthError, Result};
pub use jwt_validator::JwtValidator;
pub use password::{hash_password, verify_password};
pub use rate_limit_config::RateLimitConfig;
pub use sign_in_rate_limiter::SignInRateLimiter;
pub use token_issuer::TokenIssuer;

#[cfg(test)]
mod tests;
