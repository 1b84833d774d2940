use saathi_core::UserProfile;
use saathi_profile::{ProfileWarning, UpdateOutcome};

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct UpdateProfileResponse {
    pub message: String,
    pub profile: UserProfile,
    pub warnings: Vec<ProfileWarning>,
}

impl UpdateProfileResponse {
    pub fn new(message: &str, outcome: UpdateOutcome) -> Self {
        Self {
            message: message.to_string(),
            profile: outcome.profile,
            warnings: outcome.warnings,
        }
    }
}
