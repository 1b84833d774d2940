/// Claims recovered from a bearer token after signature and expiry checks
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerifiedToken {
    pub uid: String,
    pub email: String,
    pub email_verified: bool,
    /// Admin claim as embedded at issue time; may be stale
    pub admin: bool,
}
