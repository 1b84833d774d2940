/// Display attributes mirrored from a profile into the identity record
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IdentityUpdate {
    pub display_name: Option<String>,
    pub photo_url: Option<String>,
}

impl IdentityUpdate {
    pub fn is_empty(&self) -> bool {
        self.display_name.is_none() && self.photo_url.is_none()
    }
}
