use crate::ErrorLocation;

use std::panic::Location;
use std::result::Result as StdResult;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Validation error: {message} {location}")]
    Validation {
        message: String,
        field: Option<String>,
        location: ErrorLocation,
    },

    #[error("Serialization error: {source} {location}")]
    Serialization {
        #[source]
        source: serde_json::Error,
        location: ErrorLocation,
    },
}

impl CoreError {
    /// Create a validation error for a specific input field
    #[track_caller]
    pub fn field<F: Into<String>, M: Into<String>>(field: F, message: M) -> Self {
        CoreError::Validation {
            message: message.into(),
            field: Some(field.into()),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Name of the offending field, if the error is tied to one
    pub fn field_name(&self) -> Option<&str> {
        match self {
            CoreError::Validation { field, .. } => field.as_deref(),
            CoreError::Serialization { .. } => None,
        }
    }

    /// Message without the location suffix, safe to show to a client
    pub fn message(&self) -> String {
        match self {
            CoreError::Validation { message, .. } => message.clone(),
            CoreError::Serialization { source, .. } => source.to_string(),
        }
    }
}

impl From<serde_json::Error> for CoreError {
    #[track_caller]
    fn from(source: serde_json::Error) -> Self {
        CoreError::Serialization {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = StdResult<T, CoreError>;
