use crate::validation::{
    normalize_email, validate_display_name, validate_email, validate_password,
    validate_phone_number,
};
use crate::{NewIdentity, ProfileUpdate, Result as CoreResult};

use std::fmt;

use serde::{Deserialize, Serialize};

/// Signup form submitted by a new user
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SignupRequest {
    pub email: String,
    pub password: String,
    pub display_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
}

impl SignupRequest {
    /// Format checks run before any network or provider call
    #[track_caller]
    pub fn validate(&self, max_display_name_length: usize) -> CoreResult<()> {
        validate_email(&self.email)?;
        validate_password(&self.password)?;
        validate_display_name(&self.display_name, max_display_name_length)?;
        if let Some(phone_number) = self.phone() {
            validate_phone_number(phone_number)?;
        }
        Ok(())
    }

    /// Phone number, treating an empty string as absent
    pub fn phone(&self) -> Option<&str> {
        self.phone_number
            .as_deref()
            .map(str::trim)
            .filter(|p| !p.is_empty())
    }

    pub fn to_new_identity(&self) -> NewIdentity {
        NewIdentity {
            email: normalize_email(&self.email),
            password: self.password.clone(),
            display_name: self.display_name.trim().to_string(),
            phone_number: self.phone().map(String::from),
        }
    }

    /// Extra profile fields seeded from the form
    pub fn profile_seed(&self) -> ProfileUpdate {
        ProfileUpdate::signup_seed(self.display_name.trim(), self.phone())
    }
}

impl fmt::Debug for SignupRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SignupRequest")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .field("display_name", &self.display_name)
            .field("phone_number", &self.phone_number)
            .finish()
    }
}
