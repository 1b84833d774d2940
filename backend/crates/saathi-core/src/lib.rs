pub mod error;
pub mod models;
pub mod ports;
pub mod validation;

pub use error::{CoreError, Result};
pub use error_location::ErrorLocation;
pub use models::custom_claims::CustomClaims;
pub use models::education::Education;
pub use models::identity::Identity;
pub use models::identity_update::IdentityUpdate;
pub use models::new_identity::NewIdentity;
pub use models::profile_page::ProfilePage;
pub use models::profile_patch::ProfilePatch;
pub use models::profile_update::ProfileUpdate;
pub use models::sign_in::SignIn;
pub use models::signup_request::SignupRequest;
pub use models::user_profile::UserProfile;
pub use models::verified_token::VerifiedToken;
pub use ports::identity_error::IdentityError;
pub use ports::identity_provider::IdentityProvider;
pub use ports::profile_store::ProfileStore;
pub use ports::store_error::StoreError;
pub use validation::ValidationLimits;

#[cfg(test)]
mod tests;
