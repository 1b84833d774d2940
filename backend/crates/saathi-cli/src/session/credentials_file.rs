use crate::CliClientResult;
use crate::session::{read_json, remove_file, write_json};

use saathi_core::SignIn;

use std::fmt;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

const SESSION_FILENAME: &str = "session.json";

/// Bearer token and the account it belongs to
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredSession {
    pub server: String,
    pub uid: String,
    pub email: String,
    pub id_token: String,
    pub expires_at: DateTime<Utc>,
}

impl StoredSession {
    pub fn from_sign_in(server: &str, email: &str, sign_in: &SignIn, now: DateTime<Utc>) -> Self {
        let lifetime = i64::try_from(sign_in.expires_in).unwrap_or(i64::MAX);

        Self {
            server: server.to_string(),
            uid: sign_in.uid.clone(),
            email: saathi_core::validation::normalize_email(email),
            id_token: sign_in.id_token.clone(),
            expires_at: Duration::try_seconds(lifetime)
                .and_then(|lifetime| now.checked_add_signed(lifetime))
                .unwrap_or(DateTime::<Utc>::MAX_UTC),
        }
    }

    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }
}

impl fmt::Debug for StoredSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StoredSession")
            .field("server", &self.server)
            .field("uid", &self.uid)
            .field("email", &self.email)
            .field("id_token", &"<redacted>")
            .field("expires_at", &self.expires_at)
            .finish()
    }
}

/// `session.json` in the CLI state directory
#[derive(Debug, Clone)]
pub struct CredentialsFile {
    path: PathBuf,
}

impl CredentialsFile {
    pub fn in_dir(cli_dir: &Path) -> Self {
        Self {
            path: cli_dir.join(SESSION_FILENAME),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn load(&self) -> CliClientResult<Option<StoredSession>> {
        read_json(&self.path)
    }

    pub fn save(&self, session: &StoredSession) -> CliClientResult<()> {
        write_json(&self.path, session)?;
        restrict_to_owner(&self.path)
    }

    /// Forget the stored token; returns whether there was one
    pub fn clear(&self) -> CliClientResult<bool> {
        remove_file(&self.path)
    }
}

#[cfg(unix)]
fn restrict_to_owner(path: &Path) -> CliClientResult<()> {
    use std::os::unix::fs::PermissionsExt;

    std::fs::set_permissions(path, std::fs::Permissions::from_mode(0o600))
        .map_err(|e| crate::ClientError::io(path, e))
}

#[cfg(not(unix))]
fn restrict_to_owner(_path: &Path) -> CliClientResult<()> {
    Ok(())
}
