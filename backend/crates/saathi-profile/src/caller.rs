use saathi_core::{Identity, VerifiedToken};

/// Authenticated principal for one request.
///
/// `admin` and `email_verified` come from the live identity record, not the
/// token payload, so a revoked grant takes effect on the next request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Caller {
    pub uid: String,
    pub email: String,
    pub email_verified: bool,
    pub admin: bool,
}

impl Caller {
    pub fn from_live_identity(token: &VerifiedToken, identity: &Identity) -> Self {
        if token.admin != identity.is_admin() {
            log::debug!(
                "Token admin claim for {} is stale (token={}, live={})",
                identity.uid,
                token.admin,
                identity.is_admin()
            );
        }

        Self {
            uid: identity.uid.clone(),
            email: identity.email.clone(),
            email_verified: identity.email_verified,
            admin: identity.is_admin(),
        }
    }

    pub fn is_self(&self, uid: &str) -> bool {
        self.uid == uid
    }
}
