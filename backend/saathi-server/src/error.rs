use saathi_core::IdentityError;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Config error: {0}")]
    Config(#[from] saathi_config::ConfigError),

    #[error("Database error: {0}")]
    Database(#[from] saathi_db::DbError),

    #[error("Identity error: {0}")]
    Identity(#[from] IdentityError),

    #[error("Failed to open log file {path}: {source}")]
    LogFile {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Logger error: {message}")]
    Logger { message: String },

    #[error("Server I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ServerError>;
