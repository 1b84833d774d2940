//! Entitlement checks, run before any store access.

use crate::{ACCESS_DENIED_MESSAGE, ADMIN_REQUIRED_MESSAGE, Caller, ProfileError, Result};

/// The caller must own `uid` or hold the admin claim
#[track_caller]
pub fn authorize_self_or_admin(caller: &Caller, uid: &str) -> Result<()> {
    if caller.is_self(uid) || caller.admin {
        return Ok(());
    }

    log::warn!("Access denied: {} attempted to reach profile {}", caller.uid, uid);
    Err(ProfileError::access_denied(ACCESS_DENIED_MESSAGE))
}

#[track_caller]
pub fn require_admin(caller: &Caller) -> Result<()> {
    if caller.admin {
        return Ok(());
    }

    log::warn!("Admin access required: {} is not an admin", caller.uid);
    Err(ProfileError::access_denied(ADMIN_REQUIRED_MESSAGE))
}
