use crate::{
    AuthConfig, CONFIG_DIR_ENV, CONFIG_FILE_NAME, ConfigError, ConfigErrorResult, DEFAULT_CONFIG_DIR_NAME,
    DatabaseConfig, LoggingConfig, RateLimitConfig, RetryConfig, ServerConfig, ValidationConfig,
};

use std::path::{Path, PathBuf};

use log::info;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub auth: AuthConfig,
    pub logging: LoggingConfig,
    pub rate_limit: RateLimitConfig,
    pub retry: RetryConfig,
    pub validation: ValidationConfig,
}

impl Config {
    /// Load configuration.
    ///
    /// Loading order:
    /// 1. `SAATHI_CONFIG_DIR` env var, else `./.saathi/`
    /// 2. Auto-create the config directory
    /// 3. Parse `config.toml` if present, else defaults
    /// 4. Apply `SAATHI_*` environment overrides
    ///
    /// Does NOT validate; call `validate()` after `load()`.
    pub fn load() -> ConfigErrorResult<Self> {
        let config_dir = Self::config_dir()?;

        if !config_dir.exists() {
            std::fs::create_dir_all(&config_dir).map_err(|e| ConfigError::Io {
                path: config_dir.clone(),
                source: e,
            })?;
        }

        let config_path = config_dir.join(CONFIG_FILE_NAME);

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();

        Ok(config)
    }

    fn load_toml(path: &Path) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Priority: `SAATHI_CONFIG_DIR` > `./.saathi/` (relative to cwd)
    pub fn config_dir() -> ConfigErrorResult<PathBuf> {
        if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::config("Cannot determine current working directory"))?;
        Ok(cwd.join(DEFAULT_CONFIG_DIR_NAME))
    }

    /// Validate every section; call at startup so bad settings fail fast
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.server.validate()?;
        self.database.validate()?;
        self.auth.validate()?;
        self.logging.validate()?;
        self.rate_limit.validate()?;
        self.retry.validate()?;
        self.validation.validate()?;

        Ok(())
    }

    pub fn database_path(&self) -> ConfigErrorResult<PathBuf> {
        Ok(Self::config_dir()?.join(&self.database.path))
    }

    /// Full path of the log file, if file logging is configured
    pub fn log_file_path(&self) -> ConfigErrorResult<Option<PathBuf>> {
        match &self.logging.file {
            Some(file) => Ok(Some(Self::config_dir()?.join(&self.logging.dir).join(file))),
            None => Ok(None),
        }
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Log configuration summary (NEVER logs secrets).
    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!("  server: {}:{}", self.server.host, self.server.port);
        info!(
            "  database: {} (max {} connections)",
            self.database.path, self.database.max_connections
        );
        info!(
            "  auth: HS256 (secret {}), token ttl={}s, issuer={}",
            if self.auth.jwt_secret.is_some() {
                "set"
            } else {
                "missing"
            },
            self.auth.token_ttl_secs,
            self.auth.issuer.as_deref().unwrap_or("<none>")
        );
        info!(
            "  logging: {} (colored: {}, file: {})",
            *self.logging.level,
            self.logging.colored,
            self.logging.file.as_deref().unwrap_or("<console>")
        );
        info!(
            "  rate_limit: {} sign-in attempts/{}s per email",
            self.rate_limit.max_attempts, self.rate_limit.window_secs
        );
        info!(
            "  retry: attempts={}, initial={}ms, max={}ms, backoff={}x",
            self.retry.max_attempts,
            self.retry.initial_delay_ms,
            self.retry.max_delay_ms,
            self.retry.backoff_multiplier
        );
        info!(
            "  validation: field={}, bio={}, list={}, page={}/{}",
            self.validation.max_field_length,
            self.validation.max_bio_length,
            self.validation.max_list_items,
            self.validation.default_page_size,
            self.validation.max_page_size
        );
    }

    fn apply_env_overrides(&mut self) {
        // Server
        Self::apply_env_string("SAATHI_SERVER_HOST", &mut self.server.host);
        Self::apply_env_parse("SAATHI_SERVER_PORT", &mut self.server.port);
        Self::apply_env_list("SAATHI_SERVER_CORS_ORIGINS", &mut self.server.cors_origins);

        // Database
        Self::apply_env_string("SAATHI_DATABASE_PATH", &mut self.database.path);
        Self::apply_env_parse(
            "SAATHI_DATABASE_MAX_CONNECTIONS",
            &mut self.database.max_connections,
        );

        // Auth
        Self::apply_env_option_string("SAATHI_AUTH_JWT_SECRET", &mut self.auth.jwt_secret);
        Self::apply_env_parse("SAATHI_AUTH_TOKEN_TTL_SECS", &mut self.auth.token_ttl_secs);
        Self::apply_env_option_string("SAATHI_AUTH_ISSUER", &mut self.auth.issuer);
        Self::apply_env_string(
            "SAATHI_AUTH_VERIFICATION_URL",
            &mut self.auth.verification_url,
        );
        Self::apply_env_parse(
            "SAATHI_AUTH_VERIFICATION_TTL_SECS",
            &mut self.auth.verification_ttl_secs,
        );

        // Logging
        Self::apply_env_parse("SAATHI_LOG_LEVEL", &mut self.logging.level);
        Self::apply_env_bool("SAATHI_LOG_COLORED", &mut self.logging.colored);
        Self::apply_env_option_string("SAATHI_LOG_FILE", &mut self.logging.file);

        // Rate limit
        Self::apply_env_parse(
            "SAATHI_RATE_LIMIT_MAX_ATTEMPTS",
            &mut self.rate_limit.max_attempts,
        );
        Self::apply_env_parse(
            "SAATHI_RATE_LIMIT_WINDOW_SECS",
            &mut self.rate_limit.window_secs,
        );

        // Retry
        Self::apply_env_parse("SAATHI_RETRY_MAX_ATTEMPTS", &mut self.retry.max_attempts);
        Self::apply_env_parse(
            "SAATHI_RETRY_INITIAL_DELAY_MS",
            &mut self.retry.initial_delay_ms,
        );
        Self::apply_env_parse("SAATHI_RETRY_MAX_DELAY_MS", &mut self.retry.max_delay_ms);
        Self::apply_env_parse(
            "SAATHI_RETRY_BACKOFF_MULTIPLIER",
            &mut self.retry.backoff_multiplier,
        );
        Self::apply_env_bool("SAATHI_RETRY_JITTER", &mut self.retry.jitter);

        // Validation
        Self::apply_env_parse(
            "SAATHI_VALIDATION_MAX_FIELD_LENGTH",
            &mut self.validation.max_field_length,
        );
        Self::apply_env_parse(
            "SAATHI_VALIDATION_MAX_BIO_LENGTH",
            &mut self.validation.max_bio_length,
        );
        Self::apply_env_parse(
            "SAATHI_VALIDATION_MAX_LIST_ITEMS",
            &mut self.validation.max_list_items,
        );
        Self::apply_env_parse(
            "SAATHI_VALIDATION_MAX_PAGE_SIZE",
            &mut self.validation.max_page_size,
        );
        Self::apply_env_parse(
            "SAATHI_VALIDATION_DEFAULT_PAGE_SIZE",
            &mut self.validation.default_page_size,
        );
    }

    fn apply_env_string(var_name: &str, target: &mut String) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val;
        }
    }

    /// Accepts "true"/"1"; anything else is false
    fn apply_env_bool(var_name: &str, target: &mut bool) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val == "true" || val == "1";
        }
    }

    /// Unparseable values leave the target untouched
    fn apply_env_parse<T: std::str::FromStr>(var_name: &str, target: &mut T) {
        if let Ok(val) = std::env::var(var_name)
            && let Ok(parsed) = val.parse()
        {
            *target = parsed;
        }
    }

    fn apply_env_option_string(var_name: &str, target: &mut Option<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = Some(val);
        }
    }

    /// Comma-separated list; blank entries are dropped
    fn apply_env_list(var_name: &str, target: &mut Vec<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(String::from)
                .collect();
        }
    }
}
