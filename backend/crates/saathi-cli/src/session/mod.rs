//! Client-local state kept under `<config dir>/cli/`.
//!
//! Nothing here is authoritative: the server's identity record decides
//! whether an email is verified, and a deleted or expired session file only
//! means the user has to sign in again.

pub(crate) mod credentials_file;
pub(crate) mod local_state;
pub(crate) mod verification_state;

pub use credentials_file::{CredentialsFile, StoredSession};
pub use local_state::{LocalState, PROFILE_COMPLETION_HINT};
pub use verification_state::{
    FileMarkerStore, MarkerStore, VerificationState, VerificationTracker,
};

use crate::{CliClientResult, ClientError};

use std::path::{Path, PathBuf};

use serde::{Serialize, de::DeserializeOwned};

pub const CLI_DIR_NAME: &str = "cli";

/// `<config dir>/cli`, where config dir follows the server's lookup rules
pub fn cli_dir() -> CliClientResult<PathBuf> {
    Ok(saathi_config::Config::config_dir()?.join(CLI_DIR_NAME))
}

fn ensure_parent_dir(path: &Path) -> CliClientResult<()> {
    if let Some(dir) = path.parent()
        && !dir.exists()
    {
        std::fs::create_dir_all(dir).map_err(|e| ClientError::io(dir, e))?;
    }
    Ok(())
}

/// `Ok(None)` when the file does not exist
fn read_json<T: DeserializeOwned>(path: &Path) -> CliClientResult<Option<T>> {
    if !path.exists() {
        return Ok(None);
    }

    let content = std::fs::read_to_string(path).map_err(|e| ClientError::io(path, e))?;
    let value = serde_json::from_str(&content)
        .map_err(|e| ClientError::state_file(path, e.to_string()))?;

    Ok(Some(value))
}

fn write_json<T: Serialize>(path: &Path, value: &T) -> CliClientResult<()> {
    ensure_parent_dir(path)?;

    let content = serde_json::to_string_pretty(value)?;
    std::fs::write(path, content).map_err(|e| ClientError::io(path, e))
}

/// Returns whether a file was removed
fn remove_file(path: &Path) -> CliClientResult<bool> {
    match std::fs::remove_file(path) {
        Ok(()) => Ok(true),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(false),
        Err(e) => Err(ClientError::io(path, e)),
    }
}
