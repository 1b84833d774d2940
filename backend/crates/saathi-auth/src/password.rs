//! Argon2id password hashing in PHC string format.

use crate::{AuthError, Result as AuthErrorResult};

use std::panic::Location;

use argon2::Argon2;
use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use error_location::ErrorLocation;

#[track_caller]
pub fn hash_password(password: &str) -> AuthErrorResult<String> {
    let salt_bytes: [u8; 16] = rand::random();
    let salt = SaltString::encode_b64(&salt_bytes).map_err(|e| AuthError::PasswordHash {
        message: e.to_string(),
        location: ErrorLocation::from(Location::caller()),
    })?;

    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| AuthError::PasswordHash {
            message: e.to_string(),
            location: ErrorLocation::from(Location::caller()),
        })
}

/// False on mismatch; an unparseable stored hash is an error
#[track_caller]
pub fn verify_password(password: &str, stored_hash: &str) -> AuthErrorResult<bool> {
    let parsed = PasswordHash::new(stored_hash).map_err(|e| AuthError::PasswordHash {
        message: e.to_string(),
        location: ErrorLocation::from(Location::caller()),
    })?;

    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok())
}
