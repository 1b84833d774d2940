//! Port implementations over the SQLite repositories.

pub mod identity_provider_config;
pub mod sqlite_identity_provider;
pub mod sqlite_profile_store;
