//! Partial profile update.
//!
//! Only keys present in the request are applied. Unknown keys are rejected
//! at deserialization time, so the enumerated field set below is the whole
//! surface a caller can write.

use crate::validation::{
    ValidationLimits, validate_date_of_birth, validate_display_name, validate_graduation_year,
    validate_length, validate_list, validate_phone_number, validate_photo_url,
};
use crate::{CoreError, Education, IdentityUpdate, Result as CoreResult};

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ProfileUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(rename = "photoURL", default, skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub education: Option<Education>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interests: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skills: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub career_goals: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub job_title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub experience: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<Map<String, Value>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preferences: Option<Map<String, Value>>,
    /// Only `true` is accepted; completion is one-way
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_complete: Option<bool>,
}

impl ProfileUpdate {
    /// Seed used when a profile is created at signup
    pub fn signup_seed(display_name: &str, phone_number: Option<&str>) -> Self {
        let (first_name, last_name) = crate::validation::split_display_name(display_name);
        Self {
            first_name: Some(first_name),
            last_name: Some(last_name),
            phone_number: phone_number.map(String::from),
            ..Self::default()
        }
    }

    /// Update that marks the profile complete
    pub fn completion() -> Self {
        Self {
            profile_complete: Some(true),
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }

    /// True if the update changes an attribute mirrored in the identity record
    pub fn touches_mirrored_fields(&self) -> bool {
        self.display_name.is_some() || self.photo_url.is_some()
    }

    pub fn identity_update(&self) -> IdentityUpdate {
        IdentityUpdate {
            display_name: self.display_name.clone(),
            photo_url: self.photo_url.clone(),
        }
    }

    /// Check every present field against format rules and size limits
    #[track_caller]
    pub fn validate(&self, limits: &ValidationLimits) -> CoreResult<()> {
        if let Some(display_name) = &self.display_name {
            validate_display_name(display_name, limits.max_field_length)?;
        }
        if let Some(photo_url) = &self.photo_url {
            validate_length("photoURL", photo_url, limits.max_bio_length)?;
            validate_photo_url(photo_url)?;
        }
        if let Some(phone_number) = &self.phone_number
            && !phone_number.is_empty()
        {
            validate_phone_number(phone_number)?;
        }
        if let Some(date_of_birth) = &self.date_of_birth {
            validate_date_of_birth(date_of_birth)?;
        }

        let short_fields = [
            ("firstName", &self.first_name),
            ("lastName", &self.last_name),
            ("gender", &self.gender),
            ("location", &self.location),
            ("jobTitle", &self.job_title),
            ("company", &self.company),
        ];
        for (field, value) in short_fields {
            if let Some(value) = value {
                validate_length(field, value, limits.max_field_length)?;
            }
        }

        let long_fields = [("experience", &self.experience), ("bio", &self.bio)];
        for (field, value) in long_fields {
            if let Some(value) = value {
                validate_length(field, value, limits.max_bio_length)?;
            }
        }

        if let Some(education) = &self.education {
            validate_length("education.level", &education.level, limits.max_field_length)?;
            validate_length(
                "education.institution",
                &education.institution,
                limits.max_field_length,
            )?;
            validate_length("education.field", &education.field, limits.max_field_length)?;
            if let Some(year) = education.graduation_year {
                validate_graduation_year(year)?;
            }
        }

        let lists = [
            ("interests", &self.interests),
            ("skills", &self.skills),
            ("careerGoals", &self.career_goals),
        ];
        for (field, values) in lists {
            if let Some(values) = values {
                validate_list(field, values, limits)?;
            }
        }

        if self.profile_complete == Some(false) {
            return Err(CoreError::field(
                "profileComplete",
                "profileComplete can only be set to true",
            ));
        }

        Ok(())
    }
}
