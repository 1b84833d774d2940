use crate::ErrorLocation;

use std::panic::Location;

use thiserror::Error;

/// Failures reported by the profile store
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Unknown pagination cursor: {cursor} {location}")]
    InvalidCursor {
        cursor: String,
        location: ErrorLocation,
    },

    #[error("Stored profile {uid} is unreadable: {message} {location}")]
    Corrupt {
        uid: String,
        message: String,
        location: ErrorLocation,
    },

    #[error("Profile store error: {message} {location}")]
    Backend {
        message: String,
        /// Transient failure (busy, locked, pool timeout) worth retrying
        retryable: bool,
        location: ErrorLocation,
    },
}

impl StoreError {
    #[track_caller]
    pub fn backend<S: Into<String>>(message: S, retryable: bool) -> Self {
        StoreError::Backend {
            message: message.into(),
            retryable,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn corrupt<U: Into<String>, M: Into<String>>(uid: U, message: M) -> Self {
        StoreError::Corrupt {
            uid: uid.into(),
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    pub fn is_retryable(&self) -> bool {
        matches!(self, StoreError::Backend { retryable: true, .. })
    }
}
