use crate::session::{CredentialsFile, StoredSession};
use crate::tests::session::sign_in;

use chrono::{Duration, TimeZone, Utc};
use tempfile::TempDir;

const SERVER: &str = "http://127.0.0.1:8000";

#[test]
fn given_no_file_when_load_then_returns_none() {
    let temp = TempDir::new().unwrap();
    let file = CredentialsFile::in_dir(temp.path());

    assert!(file.load().unwrap().is_none());
}

#[test]
fn given_saved_session_when_load_then_round_trips() {
    let temp = TempDir::new().unwrap();
    let cli_dir = temp.path().join("cli");
    let file = CredentialsFile::in_dir(&cli_dir);
    let now = Utc.with_ymd_and_hms(2026, 3, 1, 12, 0, 0).unwrap();
    let session = StoredSession::from_sign_in(SERVER, "Asha@Example.com", &sign_in("u1", false), now);

    file.save(&session).unwrap();

    assert!(file.path().starts_with(&cli_dir));
    assert!(file.path().ends_with("session.json"));
    let loaded = file.load().unwrap().unwrap();
    assert_eq!(loaded, session);
    assert_eq!(loaded.email, "asha@example.com");
    assert_eq!(loaded.expires_at, now + Duration::seconds(3600));
}

#[cfg(unix)]
#[test]
fn given_saved_session_when_inspected_then_only_owner_can_read() {
    use std::os::unix::fs::PermissionsExt;

    let temp = TempDir::new().unwrap();
    let file = CredentialsFile::in_dir(temp.path());
    let session = StoredSession::from_sign_in(SERVER, "a@b.co", &sign_in("u1", true), Utc::now());

    file.save(&session).unwrap();

    let mode = std::fs::metadata(file.path()).unwrap().permissions().mode();
    assert_eq!(mode & 0o777, 0o600);
}

#[test]
fn given_saved_session_when_clear_then_removed_once() {
    let temp = TempDir::new().unwrap();
    let file = CredentialsFile::in_dir(temp.path());
    let session = StoredSession::from_sign_in(SERVER, "a@b.co", &sign_in("u1", true), Utc::now());
    file.save(&session).unwrap();

    assert!(file.clear().unwrap());
    assert!(!file.clear().unwrap());
    assert!(file.load().unwrap().is_none());
}

#[test]
fn given_corrupt_file_when_load_then_error_names_file() {
    let temp = TempDir::new().unwrap();
    let file = CredentialsFile::in_dir(temp.path());
    std::fs::write(file.path(), "not json").unwrap();

    let error = file.load().unwrap_err();

    assert!(error.to_string().contains("session.json"));
}

#[test]
fn given_expiry_when_checked_then_expired_at_and_after_deadline() {
    let now = Utc.with_ymd_and_hms(2026, 3, 1, 12, 0, 0).unwrap();
    let session = StoredSession::from_sign_in(SERVER, "a@b.co", &sign_in("u1", true), now);

    assert!(!session.is_expired(now + Duration::seconds(3599)));
    assert!(session.is_expired(now + Duration::seconds(3600)));
}

#[test]
fn given_session_when_debug_formatted_then_token_redacted() {
    let session = StoredSession::from_sign_in(SERVER, "a@b.co", &sign_in("u1", true), Utc::now());

    let debug = format!("{:?}", session);

    assert!(!debug.contains("token-u1"));
    assert!(debug.contains("<redacted>"));
}
