use serde::{Deserialize, Serialize};

/// Custom claims attached to an identity by an administrator
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomClaims {
    #[serde(default)]
    pub admin: bool,
}

impl CustomClaims {
    pub fn admin(admin: bool) -> Self {
        Self { admin }
    }
}
