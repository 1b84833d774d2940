use crate::{ConfigError, ConfigErrorResult};

use serde::Deserialize;

pub const MIN_FIELD_LENGTH: usize = 16;
pub const MAX_FIELD_LENGTH: usize = 1000;
pub const DEFAULT_MAX_FIELD_LENGTH: usize = 200;

pub const MIN_BIO_LENGTH: usize = 100;
pub const MAX_BIO_LENGTH: usize = 50000;
pub const DEFAULT_MAX_BIO_LENGTH: usize = 5000;

pub const MIN_LIST_ITEMS: usize = 1;
pub const MAX_LIST_ITEMS: usize = 500;
pub const DEFAULT_MAX_LIST_ITEMS: usize = 50;

pub const MIN_PAGE_SIZE: usize = 1;
pub const MAX_PAGE_SIZE: usize = 1000;
pub const DEFAULT_MAX_PAGE_SIZE: usize = 100;
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Size limits for profile fields and listing pages
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ValidationConfig {
    /// Single-line text fields (names, location, job title, ...)
    pub max_field_length: usize,
    /// Free-text fields (bio, experience)
    pub max_bio_length: usize,
    /// Entries in interests, skills and career goals
    pub max_list_items: usize,
    /// Upper bound for `limit` on the admin listing
    pub max_page_size: usize,
    /// `limit` used when the request has none
    pub default_page_size: usize,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            max_field_length: DEFAULT_MAX_FIELD_LENGTH,
            max_bio_length: DEFAULT_MAX_BIO_LENGTH,
            max_list_items: DEFAULT_MAX_LIST_ITEMS,
            max_page_size: DEFAULT_MAX_PAGE_SIZE,
            default_page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl ValidationConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if !(MIN_FIELD_LENGTH..=MAX_FIELD_LENGTH).contains(&self.max_field_length) {
            return Err(ConfigError::config(format!(
                "validation.max_field_length must be {}-{}, got {}",
                MIN_FIELD_LENGTH, MAX_FIELD_LENGTH, self.max_field_length
            )));
        }

        if !(MIN_BIO_LENGTH..=MAX_BIO_LENGTH).contains(&self.max_bio_length) {
            return Err(ConfigError::config(format!(
                "validation.max_bio_length must be {}-{}, got {}",
                MIN_BIO_LENGTH, MAX_BIO_LENGTH, self.max_bio_length
            )));
        }

        if !(MIN_LIST_ITEMS..=MAX_LIST_ITEMS).contains(&self.max_list_items) {
            return Err(ConfigError::config(format!(
                "validation.max_list_items must be {}-{}, got {}",
                MIN_LIST_ITEMS, MAX_LIST_ITEMS, self.max_list_items
            )));
        }

        if !(MIN_PAGE_SIZE..=MAX_PAGE_SIZE).contains(&self.max_page_size) {
            return Err(ConfigError::config(format!(
                "validation.max_page_size must be {}-{}, got {}",
                MIN_PAGE_SIZE, MAX_PAGE_SIZE, self.max_page_size
            )));
        }

        if self.default_page_size < MIN_PAGE_SIZE || self.default_page_size > self.max_page_size {
            return Err(ConfigError::config(format!(
                "validation.default_page_size must be {}-{} (max_page_size), got {}",
                MIN_PAGE_SIZE, self.max_page_size, self.default_page_size
            )));
        }

        Ok(())
    }
}
