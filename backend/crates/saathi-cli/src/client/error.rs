use error_location::ErrorLocation;
use std::panic::Location;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by the client, before or after talking to the server
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("HTTP request error: {message} {location}")]
    Http {
        message: String,
        location: ErrorLocation,
        #[source]
        source: reqwest::Error,
    },

    #[error("API error: {message} (code: {code}, status: {status}) {location}")]
    Api {
        status: u16,
        code: String,
        message: String,
        field: Option<String>,
        location: ErrorLocation,
    },

    #[error("JSON parse error: {message} {location}")]
    Json {
        message: String,
        location: ErrorLocation,
        #[source]
        source: serde_json::Error,
    },

    /// Rejected locally; no request was sent
    #[error("Invalid input: {message} {location}")]
    Validation {
        message: String,
        field: Option<String>,
        location: ErrorLocation,
    },

    #[error("Invalid server URL {url}: {message} {location}")]
    InvalidUrl {
        url: String,
        message: String,
        location: ErrorLocation,
    },

    #[error("Not signed in. Run `saathi login` first {location}")]
    NotSignedIn { location: ErrorLocation },

    #[error("Session expired. Run `saathi login` again {location}")]
    SessionExpired { location: ErrorLocation },

    #[error("Failed to access {}: {source} {location}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
        location: ErrorLocation,
    },

    #[error("Invalid local state file {}: {message} {location}", path.display())]
    StateFile {
        path: PathBuf,
        message: String,
        location: ErrorLocation,
    },

    #[error("Configuration error: {source} {location}")]
    Config {
        #[source]
        source: saathi_config::ConfigError,
        location: ErrorLocation,
    },
}

impl ClientError {
    /// Convert reqwest error with context
    #[track_caller]
    pub fn from_reqwest(err: reqwest::Error) -> Self {
        ClientError::Http {
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source: err,
        }
    }

    /// Convert JSON error with context
    #[track_caller]
    pub fn from_json(err: serde_json::Error) -> Self {
        ClientError::Json {
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source: err,
        }
    }

    #[track_caller]
    pub fn api_error(status: u16, code: String, message: String, field: Option<String>) -> Self {
        ClientError::Api {
            status,
            code,
            message,
            field,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Local input error; no request is sent
    #[track_caller]
    pub fn validation(field: Option<&str>, message: impl Into<String>) -> Self {
        ClientError::Validation {
            message: message.into(),
            field: field.map(String::from),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn not_signed_in() -> Self {
        ClientError::NotSignedIn {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn session_expired() -> Self {
        ClientError::SessionExpired {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ClientError::Io {
            path: path.into(),
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn state_file(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        ClientError::StateFile {
            path: path.into(),
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Error code reported by the server, if the request reached it
    pub fn code(&self) -> Option<&str> {
        match self {
            ClientError::Api { code, .. } => Some(code),
            _ => None,
        }
    }

    /// Input field the error refers to, local or server-side
    pub fn field(&self) -> Option<&str> {
        match self {
            ClientError::Api { field, .. } | ClientError::Validation { field, .. } => {
                field.as_deref()
            }
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ClientError {
    #[track_caller]
    fn from(err: reqwest::Error) -> Self {
        ClientError::from_reqwest(err)
    }
}

impl From<serde_json::Error> for ClientError {
    #[track_caller]
    fn from(err: serde_json::Error) -> Self {
        ClientError::from_json(err)
    }
}

impl From<saathi_core::CoreError> for ClientError {
    #[track_caller]
    fn from(err: saathi_core::CoreError) -> Self {
        ClientError::Validation {
            message: err.message(),
            field: err.field_name().map(String::from),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<saathi_config::ConfigError> for ClientError {
    #[track_caller]
    fn from(source: saathi_config::ConfigError) -> Self {
        ClientError::Config {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, ClientError>;
