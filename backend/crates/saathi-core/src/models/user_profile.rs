//! Application profile document, keyed by identity uid.

use crate::validation::split_display_name;
use crate::{Education, Identity, ProfileUpdate};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Stored profile.
///
/// Superset of the identity's display fields plus the student's career data.
/// Values that are not set are omitted from the stored document rather than
/// written as null.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub uid: String,
    pub email: String,
    #[serde(default)]
    pub display_name: String,
    #[serde(rename = "photoURL", default, skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,
    #[serde(default)]
    pub phone_number: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub date_of_birth: String,
    #[serde(default)]
    pub gender: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub education: Education,
    #[serde(default)]
    pub interests: Vec<String>,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub career_goals: Vec<String>,
    #[serde(default)]
    pub job_title: String,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub experience: String,
    #[serde(default)]
    pub bio: String,
    #[serde(default)]
    pub address: Map<String, Value>,
    #[serde(default)]
    pub preferences: Map<String, Value>,
    #[serde(default = "default_active")]
    pub is_active: bool,
    #[serde(default)]
    pub profile_complete: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

fn default_active() -> bool {
    true
}

impl UserProfile {
    /// Default profile for an identity.
    ///
    /// Display fields come from the identity; first and last name are split
    /// from the display name. `profile_complete` starts false.
    pub fn for_identity(identity: &Identity, now: DateTime<Utc>) -> Self {
        let (first_name, last_name) = split_display_name(&identity.display_name);

        Self {
            uid: identity.uid.clone(),
            email: identity.email.clone(),
            display_name: identity.display_name.clone(),
            photo_url: identity.photo_url.clone(),
            phone_number: identity.phone_number.clone().unwrap_or_default(),
            first_name,
            last_name,
            date_of_birth: String::new(),
            gender: String::new(),
            location: String::new(),
            education: Education::default(),
            interests: Vec::new(),
            skills: Vec::new(),
            career_goals: Vec::new(),
            job_title: String::new(),
            company: String::new(),
            experience: String::new(),
            bio: String::new(),
            address: Map::new(),
            preferences: Map::new(),
            is_active: true,
            profile_complete: false,
            created_at: now,
            updated_at: now,
        }
    }

    /// Overwrite the fields present in `update`, leaving the rest untouched
    pub fn apply(&mut self, update: &ProfileUpdate) {
        fn set<T: Clone>(target: &mut T, value: &Option<T>) {
            if let Some(v) = value {
                *target = v.clone();
            }
        }

        set(&mut self.display_name, &update.display_name);
        set(&mut self.phone_number, &update.phone_number);
        set(&mut self.first_name, &update.first_name);
        set(&mut self.last_name, &update.last_name);
        set(&mut self.date_of_birth, &update.date_of_birth);
        set(&mut self.gender, &update.gender);
        set(&mut self.location, &update.location);
        set(&mut self.education, &update.education);
        set(&mut self.interests, &update.interests);
        set(&mut self.skills, &update.skills);
        set(&mut self.career_goals, &update.career_goals);
        set(&mut self.job_title, &update.job_title);
        set(&mut self.company, &update.company);
        set(&mut self.experience, &update.experience);
        set(&mut self.bio, &update.bio);
        set(&mut self.address, &update.address);
        set(&mut self.preferences, &update.preferences);
        set(&mut self.profile_complete, &update.profile_complete);

        if let Some(photo_url) = &update.photo_url {
            self.photo_url = Some(photo_url.clone());
        }
    }
}
