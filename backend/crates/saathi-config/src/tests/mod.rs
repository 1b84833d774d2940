
use std::env;

use tempfile::TempDir;

pub(crate) const VALID_SECRET: &str = "0123456789abcdef0123456789abcdef";

/// RAII guard for environment variables - automatically restores on drop
pub(crate) struct EnvGuard {
    key: &'static str,
    original: Option<String>,
}

impl EnvGuard {
    pub(crate) fn set(key: &'static str, value: &str) -> Self {
        unsafe {
            let original = env::var(key).ok();
            env::set_var(key, value);
            Self { key, original }
        }
    }

    pub(crate) fn remove(key: &'static str) -> Self {
        unsafe {
            let original = env::var(key).ok();
            env::remove_var(key);
            Self { key, original }
        }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        unsafe {
            match &self.original {
                Some(val) => env::set_var(self.key, val),
                None => env::remove_var(self.key),
            }
        }
    }
}

/// Temp config directory with SAATHI_CONFIG_DIR pointing at it and a valid secret
pub(crate) fn setup_config_dir() -> (TempDir, EnvGuard, EnvGuard) {
    let temp = TempDir::new().unwrap();
    let dir = EnvGuard::set(crate::CONFIG_DIR_ENV, temp.path().to_str().unwrap());
    let secret = EnvGuard::set("SAATHI_AUTH_JWT_SECRET", VALID_SECRET);
    (temp, dir, secret)
}
