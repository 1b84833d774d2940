use saathi_core::UserProfile;
use saathi_profile::{ProfileWarning, SignupOutcome};

use serde::Serialize;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupResponse {
    pub message: String,
    pub uid: String,
    pub profile: UserProfile,
    pub warnings: Vec<ProfileWarning>,
}

impl From<SignupOutcome> for SignupResponse {
    fn from(outcome: SignupOutcome) -> Self {
        let message = if outcome.warnings.is_empty() {
            "Account created. Please check your email to verify your address."
        } else {
            "Account created, but the verification email could not be sent."
        };

        Self {
            message: message.to_string(),
            uid: outcome.uid,
            profile: outcome.profile,
            warnings: outcome.warnings,
        }
    }
}
