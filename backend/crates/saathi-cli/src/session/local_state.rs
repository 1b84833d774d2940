use crate::session::{
    CredentialsFile, FileMarkerStore, StoredSession, VerificationState, VerificationTracker,
    cli_dir,
};
use crate::{CliClientResult, ClientError};

use saathi_core::SignIn;

use std::path::Path;

use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::Value;

pub const PROFILE_COMPLETION_HINT: &str = "Your email is verified. Finish your profile with \
     `saathi profile update --data '{...}'` and then `saathi profile complete`.";

/// The part of a signup response the tracker needs
#[derive(Debug, Deserialize)]
struct SignupCreated {
    uid: String,
}

/// Fields of the session summary the client acts on
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SessionStatus {
    uid: String,
    email_verified: bool,
}

/// Session file plus verification tracker for one state directory
#[derive(Debug)]
pub struct LocalState {
    credentials: CredentialsFile,
    tracker: VerificationTracker<FileMarkerStore>,
}

impl LocalState {
    /// State under the default `<config dir>/cli`
    pub fn open() -> CliClientResult<Self> {
        Ok(Self::in_dir(&cli_dir()?))
    }

    pub fn in_dir(cli_dir: &Path) -> Self {
        Self {
            credentials: CredentialsFile::in_dir(cli_dir),
            tracker: VerificationTracker::new(FileMarkerStore::in_dir(cli_dir)),
        }
    }

    pub fn credentials(&self) -> &CredentialsFile {
        &self.credentials
    }

    pub fn tracker(&self) -> &VerificationTracker<FileMarkerStore> {
        &self.tracker
    }

    /// Stored session if there is one, expired or not
    pub fn stored_session(&self) -> CliClientResult<Option<StoredSession>> {
        self.credentials.load()
    }

    /// Session usable for an authenticated request
    pub fn active_session(&self, now: DateTime<Utc>) -> CliClientResult<StoredSession> {
        let session = self
            .credentials
            .load()?
            .ok_or_else(ClientError::not_signed_in)?;

        if session.is_expired(now) {
            return Err(ClientError::session_expired());
        }
        Ok(session)
    }

    /// A new account starts unverified
    pub fn record_signup(&mut self, signup_response: &Value) -> CliClientResult<String> {
        let SignupCreated { uid } = SignupCreated::deserialize(signup_response)?;

        self.tracker.mark_unverified(&uid)?;
        Ok(uid)
    }

    pub fn record_sign_in(
        &mut self,
        server: &str,
        email: &str,
        sign_in: &SignIn,
        now: DateTime<Utc>,
    ) -> CliClientResult<VerificationState> {
        let session = StoredSession::from_sign_in(server, email, sign_in, now);
        self.credentials.save(&session)?;

        self.tracker.observe(&sign_in.uid, sign_in.email_verified)
    }

    /// Feed a `GET /api/auth/session` body to the tracker
    pub fn record_session(&mut self, summary: &Value) -> CliClientResult<(String, VerificationState)> {
        let status = SessionStatus::deserialize(summary)?;
        let state = self.tracker.observe(&status.uid, status.email_verified)?;

        Ok((status.uid, state))
    }

    /// The completion hint, handed out once per verification
    pub fn take_completion_hint(&mut self, uid: &str) -> Option<&'static str> {
        self.tracker
            .acknowledge(uid)
            .then_some(PROFILE_COMPLETION_HINT)
    }

    /// Returns whether a session was stored
    pub fn sign_out(&self) -> CliClientResult<bool> {
        self.credentials.clear()
    }
}
