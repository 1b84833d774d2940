pub mod connection;
pub mod error;
pub mod providers;
pub mod repositories;

pub use connection::{connect, connect_in_memory, run_migrations};
pub use error::{DbError, Result};
pub use providers::identity_provider_config::IdentityProviderConfig;
pub use providers::sqlite_identity_provider::SqliteIdentityProvider;
pub use providers::sqlite_profile_store::SqliteProfileStore;
pub use repositories::identity_repository::{IdentityRepository, StoredIdentity};
pub use repositories::profile_repository::ProfileRepository;
pub use repositories::verification_code_repository::VerificationCodeRepository;

#[cfg(test)]
mod tests;
