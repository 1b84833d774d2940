//! Identity record owned by the identity provider.

use crate::CustomClaims;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Canonical identity attributes.
///
/// `email_verified` only ever flips from false to true.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Identity {
    pub uid: String,
    pub email: String,
    pub email_verified: bool,
    pub display_name: String,
    #[serde(rename = "photoURL", skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    pub disabled: bool,
    pub custom_claims: CustomClaims,
    pub created_at: DateTime<Utc>,
}

impl Identity {
    pub fn is_admin(&self) -> bool {
        self.custom_claims.admin
    }
}
