pub mod custom_claims;
pub mod education;
pub mod identity;
pub mod identity_update;
pub mod new_identity;
pub mod profile_page;
pub mod profile_patch;
pub mod profile_update;
pub mod sign_in;
pub mod signup_request;
pub mod user_profile;
pub mod verified_token;
