mod credentials_file;
mod local_state;
mod verification_state;

use saathi_core::SignIn;

pub(crate) fn sign_in(uid: &str, email_verified: bool) -> SignIn {
    SignIn {
        uid: uid.to_string(),
        id_token: format!("token-{uid}"),
        expires_in: 3600,
        email_verified,
    }
}
