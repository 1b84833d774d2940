//! Detects the moment an account becomes verified.
//!
//! A marker is stored per uid while the account is known to be unverified.
//! The first session load that reports the account verified while the
//! marker is present yields [`VerificationState::JustVerified`] and removes
//! the marker. The signal stays pending until [`VerificationTracker::acknowledge`]
//! consumes it, after which the same verification never fires again.

use crate::CliClientResult;
use crate::session::{read_json, write_json};

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

const VERIFICATION_FILENAME: &str = "verification.json";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerificationState {
    /// The provider still reports the email unverified
    Unverified,
    /// Verified since the marker was set, not yet acknowledged
    JustVerified,
    /// Verified and nothing left to signal
    Acknowledged,
}

/// Persistence for the "currently unverified" markers
pub trait MarkerStore {
    fn is_marked(&self, uid: &str) -> CliClientResult<bool>;

    fn mark(&mut self, uid: &str) -> CliClientResult<()>;

    /// Remove the marker; returns whether one was present
    fn clear(&mut self, uid: &str) -> CliClientResult<bool>;
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct MarkerFile {
    #[serde(default)]
    unverified: BTreeSet<String>,
}

/// `verification.json` in the CLI state directory
#[derive(Debug, Clone)]
pub struct FileMarkerStore {
    path: PathBuf,
}

impl FileMarkerStore {
    pub fn in_dir(cli_dir: &Path) -> Self {
        Self {
            path: cli_dir.join(VERIFICATION_FILENAME),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read(&self) -> CliClientResult<MarkerFile> {
        Ok(read_json(&self.path)?.unwrap_or_default())
    }
}

impl MarkerStore for FileMarkerStore {
    fn is_marked(&self, uid: &str) -> CliClientResult<bool> {
        Ok(self.read()?.unverified.contains(uid))
    }

    fn mark(&mut self, uid: &str) -> CliClientResult<()> {
        let mut markers = self.read()?;
        if markers.unverified.insert(uid.to_string()) {
            write_json(&self.path, &markers)?;
        }
        Ok(())
    }

    fn clear(&mut self, uid: &str) -> CliClientResult<bool> {
        let mut markers = self.read()?;
        let removed = markers.unverified.remove(uid);
        if removed {
            write_json(&self.path, &markers)?;
        }
        Ok(removed)
    }
}

#[derive(Debug)]
pub struct VerificationTracker<S> {
    store: S,
    pending: Option<String>,
}

impl<S: MarkerStore> VerificationTracker<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            pending: None,
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Record that `uid` was just created and is not verified yet
    pub fn mark_unverified(&mut self, uid: &str) -> CliClientResult<()> {
        self.store.mark(uid)
    }

    /// Feed the provider's verified flag from a session load
    pub fn observe(&mut self, uid: &str, email_verified: bool) -> CliClientResult<VerificationState> {
        if !email_verified {
            // Covers accounts created from another device
            self.store.mark(uid)?;
            return Ok(VerificationState::Unverified);
        }

        if self.pending.as_deref() == Some(uid) {
            return Ok(VerificationState::JustVerified);
        }

        if self.store.clear(uid)? {
            self.pending = Some(uid.to_string());
            Ok(VerificationState::JustVerified)
        } else {
            Ok(VerificationState::Acknowledged)
        }
    }

    pub fn state(&self, uid: &str) -> CliClientResult<VerificationState> {
        if self.pending.as_deref() == Some(uid) {
            return Ok(VerificationState::JustVerified);
        }
        if self.store.is_marked(uid)? {
            return Ok(VerificationState::Unverified);
        }
        Ok(VerificationState::Acknowledged)
    }

    /// Consume a pending `JustVerified` signal; true at most once per verification
    pub fn acknowledge(&mut self, uid: &str) -> bool {
        if self.pending.as_deref() == Some(uid) {
            self.pending = None;
            return true;
        }
        false
    }
}
