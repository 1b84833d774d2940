//! Profile reconciliation between the identity provider and the profile store.
//!
//! The services here own every multi-step sequence that touches both
//! collaborators: signup with compensating deletion, self-healing updates,
//! best-effort mirroring of display attributes and paired deletion.
//! Handlers authenticate first, then call a service with the resulting
//! [`Caller`].

pub mod access;
pub mod account_service;
pub mod authenticator;
pub mod caller;
pub mod error;
pub mod profile_service;
pub mod profile_settings;
pub mod retry;
pub mod warning;

pub use account_service::{AccountService, SignupOutcome};
pub use authenticator::Authenticator;
pub use caller::Caller;
pub use error::{ProfileError, Result};
pub use profile_service::{EnsureOutcome, ProfileService, SessionSummary, UpdateOutcome};
pub use profile_settings::ProfileSettings;
pub use retry::{IsRetryable, RetryPolicy, with_retry};
pub use warning::ProfileWarning;

pub const NO_TOKEN_MESSAGE: &str = "Unauthorized: No token provided";
pub const INVALID_TOKEN_MESSAGE: &str = "Unauthorized: Invalid token";
pub const ACCESS_DENIED_MESSAGE: &str = "Access denied";
pub const ADMIN_REQUIRED_MESSAGE: &str = "Admin access required";
pub const PROFILE_NOT_FOUND_MESSAGE: &str = "User profile not found";
pub const USER_NOT_FOUND_MESSAGE: &str = "User not found";
pub const EMAIL_QUERY_REQUIRED_MESSAGE: &str = "Email query parameter is required";

#[cfg(test)]
mod tests;
