use serde::{Deserialize, Serialize};

/// Result of a successful email/password sign-in
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignIn {
    pub uid: String,
    pub id_token: String,
    /// Token lifetime in seconds
    pub expires_in: u64,
    pub email_verified: bool,
}
