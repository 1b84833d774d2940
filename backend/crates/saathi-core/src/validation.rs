//! Input validation shared by the client and the server.
//!
//! The client runs these checks before any network call; the server runs
//! them again before touching the identity provider or the profile store.

use crate::{CoreError, Result as CoreResult};

use std::sync::LazyLock;

use chrono::{Datelike, NaiveDate, Utc};
use regex::Regex;

pub const MIN_PASSWORD_LENGTH: usize = 8;
pub const DEFAULT_MAX_FIELD_LENGTH: usize = 200;
pub const DEFAULT_MAX_BIO_LENGTH: usize = 5000;
pub const DEFAULT_MAX_LIST_ITEMS: usize = 50;
pub const MIN_GRADUATION_YEAR: i32 = 1900;

static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles"));

// E.164: leading '+', country code without a leading zero, up to 15 digits total
static PHONE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+[1-9]\d{6,14}$").expect("phone pattern compiles"));

/// Size limits applied to profile updates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationLimits {
    /// Maximum length of any single-line text field
    pub max_field_length: usize,
    /// Maximum length of the free-text bio / experience fields
    pub max_bio_length: usize,
    /// Maximum number of entries in interests, skills and career goals
    pub max_list_items: usize,
}

impl Default for ValidationLimits {
    fn default() -> Self {
        Self {
            max_field_length: DEFAULT_MAX_FIELD_LENGTH,
            max_bio_length: DEFAULT_MAX_BIO_LENGTH,
            max_list_items: DEFAULT_MAX_LIST_ITEMS,
        }
    }
}

/// Canonical form used for storage and lookups
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email.trim())
}

/// At least 8 characters with one uppercase letter, one lowercase letter and one digit
pub fn is_strong_password(password: &str) -> bool {
    password.chars().count() >= MIN_PASSWORD_LENGTH
        && password.chars().any(|c| c.is_ascii_uppercase())
        && password.chars().any(|c| c.is_ascii_lowercase())
        && password.chars().any(|c| c.is_ascii_digit())
}

#[track_caller]
pub fn validate_email(email: &str) -> CoreResult<()> {
    if email.trim().is_empty() {
        return Err(CoreError::field("email", "Email is required"));
    }
    if !is_valid_email(email) {
        return Err(CoreError::field(
            "email",
            "Please enter a valid email address",
        ));
    }
    Ok(())
}

#[track_caller]
pub fn validate_password(password: &str) -> CoreResult<()> {
    if password.is_empty() {
        return Err(CoreError::field("password", "Password is required"));
    }
    if password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(CoreError::field(
            "password",
            format!(
                "Password must be at least {} characters long",
                MIN_PASSWORD_LENGTH
            ),
        ));
    }
    if !is_strong_password(password) {
        return Err(CoreError::field(
            "password",
            "Password must contain at least one uppercase letter, one lowercase letter, and one number",
        ));
    }
    Ok(())
}

#[track_caller]
pub fn validate_display_name(display_name: &str, max_length: usize) -> CoreResult<()> {
    if display_name.trim().is_empty() {
        return Err(CoreError::field("displayName", "Display name is required"));
    }
    validate_length("displayName", display_name, max_length)
}

#[track_caller]
pub fn validate_phone_number(phone_number: &str) -> CoreResult<()> {
    if !PHONE_PATTERN.is_match(phone_number) {
        return Err(CoreError::field(
            "phoneNumber",
            "Phone number must be in E.164 format (e.g. +919876543210)",
        ));
    }
    Ok(())
}

/// Empty is allowed (field not filled in yet); otherwise YYYY-MM-DD, not in the future
#[track_caller]
pub fn validate_date_of_birth(date_of_birth: &str) -> CoreResult<()> {
    if date_of_birth.is_empty() {
        return Ok(());
    }
    let date = NaiveDate::parse_from_str(date_of_birth, "%Y-%m-%d").map_err(|_| {
        CoreError::field("dateOfBirth", "Date of birth must be formatted as YYYY-MM-DD")
    })?;
    if date > Utc::now().date_naive() {
        return Err(CoreError::field(
            "dateOfBirth",
            "Date of birth cannot be in the future",
        ));
    }
    Ok(())
}

#[track_caller]
pub fn validate_photo_url(photo_url: &str) -> CoreResult<()> {
    if photo_url.is_empty() || photo_url.starts_with("https://") || photo_url.starts_with("http://")
    {
        return Ok(());
    }
    Err(CoreError::field(
        "photoURL",
        "Photo URL must be an http(s) URL",
    ))
}

#[track_caller]
pub fn validate_graduation_year(year: i32) -> CoreResult<()> {
    let latest = Utc::now().year() + 10;
    if !(MIN_GRADUATION_YEAR..=latest).contains(&year) {
        return Err(CoreError::field(
            "education.graduationYear",
            format!(
                "Graduation year must be between {} and {}",
                MIN_GRADUATION_YEAR, latest
            ),
        ));
    }
    Ok(())
}

#[track_caller]
pub fn validate_length(field: &str, value: &str, max_length: usize) -> CoreResult<()> {
    if value.chars().count() > max_length {
        return Err(CoreError::field(
            field,
            format!("{} must be at most {} characters", field, max_length),
        ));
    }
    Ok(())
}

#[track_caller]
pub fn validate_list(field: &str, values: &[String], limits: &ValidationLimits) -> CoreResult<()> {
    if values.len() > limits.max_list_items {
        return Err(CoreError::field(
            field,
            format!(
                "{} can contain at most {} entries",
                field, limits.max_list_items
            ),
        ));
    }
    for value in values {
        validate_length(field, value, limits.max_field_length)?;
    }
    Ok(())
}

/// Split a display name into first name and the remaining words
///
/// "Asha Rani Verma" becomes ("Asha", "Rani Verma"); a single word leaves the last name empty.
pub fn split_display_name(display_name: &str) -> (String, String) {
    let mut words = display_name.split_whitespace();
    let first = words.next().unwrap_or_default().to_string();
    let last = words.collect::<Vec<_>>().join(" ");
    (first, last)
}
