//! saathi-cli library
//!
//! HTTP client for the Career Saathi server and the client-local session
//! state (stored token, verification tracker).

pub(crate) mod client;
pub mod session;

#[cfg(test)]
mod tests;

pub use client::{CliClientResult, Client, ClientError};
pub use session::{
    CredentialsFile, FileMarkerStore, LocalState, MarkerStore, StoredSession, VerificationState,
    VerificationTracker,
};
