use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct SendVerificationResponse {
    pub message: String,
    /// False when the address was already verified and nothing was sent
    pub sent: bool,
}
