use error_location::ErrorLocation;
use saathi_core::{IdentityError, StoreError};

use std::panic::Location;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DbError {
    #[error("SQLx error: {source} {location}")]
    Sqlx {
        source: sqlx::Error,
        location: ErrorLocation,
    },

    #[error("Migration error: {message} {location}")]
    Migration {
        message: String,
        location: ErrorLocation,
    },

    #[error("Database initialization failed: {message} {location}")]
    Initialization {
        message: String,
        location: ErrorLocation,
    },

    #[error("JSON error: {source} {location}")]
    Json {
        source: serde_json::Error,
        location: ErrorLocation,
    },

    #[error("Corrupt row for {uid}: {message} {location}")]
    Corrupt {
        uid: String,
        message: String,
        location: ErrorLocation,
    },

    #[error("Unknown pagination cursor: {cursor} {location}")]
    InvalidCursor {
        cursor: String,
        location: ErrorLocation,
    },
}

impl DbError {
    #[track_caller]
    pub fn corrupt<U: Into<String>, M: Into<String>>(uid: U, message: M) -> Self {
        Self::Corrupt {
            uid: uid.into(),
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    pub fn is_unique_violation(&self) -> bool {
        match self {
            Self::Sqlx {
                source: sqlx::Error::Database(db),
                ..
            } => db.is_unique_violation(),
            _ => false,
        }
    }

    /// Busy, locked or pool exhaustion: the same call may succeed shortly
    pub fn is_transient(&self) -> bool {
        match self {
            Self::Sqlx { source, .. } => is_transient_sqlx(source),
            _ => false,
        }
    }
}

fn is_transient_sqlx(source: &sqlx::Error) -> bool {
    const SQLITE_BUSY: i32 = 5;
    const SQLITE_LOCKED: i32 = 6;

    match source {
        sqlx::Error::PoolTimedOut => true,
        sqlx::Error::Database(db) => db
            .code()
            .and_then(|code| code.parse::<i32>().ok())
            .map(|code| matches!(code & 0xff, SQLITE_BUSY | SQLITE_LOCKED))
            .unwrap_or(false),
        _ => false,
    }
}

impl From<sqlx::Error> for DbError {
    #[track_caller]
    fn from(source: sqlx::Error) -> Self {
        Self::Sqlx {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<serde_json::Error> for DbError {
    #[track_caller]
    fn from(source: serde_json::Error) -> Self {
        Self::Json {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<DbError> for StoreError {
    fn from(err: DbError) -> Self {
        let retryable = err.is_transient();
        match err {
            DbError::Corrupt {
                uid,
                message,
                location,
            } => StoreError::Corrupt {
                uid,
                message,
                location,
            },
            DbError::InvalidCursor { cursor, location } => {
                StoreError::InvalidCursor { cursor, location }
            }
            DbError::Sqlx { source, location } => StoreError::Backend {
                message: source.to_string(),
                retryable,
                location,
            },
            DbError::Json { source, location } => StoreError::Backend {
                message: source.to_string(),
                retryable: false,
                location,
            },
            DbError::Migration { message, location }
            | DbError::Initialization { message, location } => StoreError::Backend {
                message,
                retryable: false,
                location,
            },
        }
    }
}

impl From<DbError> for IdentityError {
    #[track_caller]
    fn from(err: DbError) -> Self {
        IdentityError::backend(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, DbError>;
