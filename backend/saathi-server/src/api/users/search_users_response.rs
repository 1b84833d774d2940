use saathi_core::UserProfile;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct SearchUsersResponse {
    pub users: Vec<UserProfile>,
}
