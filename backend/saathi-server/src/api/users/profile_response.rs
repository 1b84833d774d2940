use saathi_core::UserProfile;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ProfileResponse {
    pub profile: UserProfile,
}
