mod auth_config;
mod config;
mod database_config;
mod error;
mod log_level;
mod logging_config;
mod rate_limit_config;
mod retry_config;
mod server_config;
mod validation_config;

pub use auth_config::AuthConfig;
pub use config::Config;
pub use database_config::DatabaseConfig;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use rate_limit_config::RateLimitConfig;
pub use retry_config::RetryConfig;
pub use server_config::ServerConfig;
pub use validation_config::ValidationConfig;

pub const CONFIG_DIR_ENV: &str = "SAATHI_CONFIG_DIR";
pub const DEFAULT_CONFIG_DIR_NAME: &str = ".saathi";
pub const CONFIG_FILE_NAME: &str = "config.toml";

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8000;
const MIN_PORT: u16 = 1024;
const DEFAULT_DATABASE_FILENAME: &str = "saathi.db";
const DEFAULT_DATABASE_MAX_CONNECTIONS: u32 = 5;
const MAX_DATABASE_MAX_CONNECTIONS: u32 = 100;
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_DIRECTORY: &str = "log";

#[cfg(test)]
mod tests;
