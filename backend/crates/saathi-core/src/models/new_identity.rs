use std::fmt;

/// Input for creating an identity
#[derive(Clone)]
pub struct NewIdentity {
    pub email: String,
    pub password: String,
    pub display_name: String,
    pub phone_number: Option<String>,
}

impl fmt::Debug for NewIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NewIdentity")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .field("display_name", &self.display_name)
            .field("phone_number", &self.phone_number)
            .finish()
    }
}
