//! Collaborator interfaces consumed by the profile protocol.
//!
//! Backend crates implement these traits; the protocol only ever sees the
//! trait objects, initialized once per process and shared by reference.

pub mod identity_error;
pub mod identity_provider;
pub mod profile_store;
pub mod store_error;
