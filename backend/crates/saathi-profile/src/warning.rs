use serde::Serialize;

/// Non-fatal failure of a follow-up step after the primary write succeeded
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum ProfileWarning {
    /// Signup completed but the verification email was not sent
    VerificationEmailFailed { message: String },
    /// Profile saved but the identity's display attributes were not updated
    MirrorUpdateFailed { message: String },
}

impl ProfileWarning {
    pub fn message(&self) -> &str {
        match self {
            Self::VerificationEmailFailed { message } | Self::MirrorUpdateFailed { message } => {
                message
            }
        }
    }
}
