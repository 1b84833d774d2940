use crate::session::{LocalState, PROFILE_COMPLETION_HINT, VerificationState};
use crate::tests::session::sign_in;
use crate::ClientError;

use chrono::{Duration, Utc};
use serde_json::json;
use tempfile::TempDir;

const SERVER: &str = "http://127.0.0.1:8000";

#[test]
fn given_no_session_when_active_session_then_not_signed_in() {
    let temp = TempDir::new().unwrap();
    let state = LocalState::in_dir(temp.path());

    let error = state.active_session(Utc::now()).unwrap_err();

    assert!(matches!(error, ClientError::NotSignedIn { .. }));
}

#[test]
fn given_expired_session_when_active_session_then_session_expired() {
    let temp = TempDir::new().unwrap();
    let mut state = LocalState::in_dir(temp.path());
    let signed_in_at = Utc::now() - Duration::hours(2);
    state
        .record_sign_in(SERVER, "a@b.co", &sign_in("u1", true), signed_in_at)
        .unwrap();

    let error = state.active_session(Utc::now()).unwrap_err();

    assert!(matches!(error, ClientError::SessionExpired { .. }));
    assert!(state.stored_session().unwrap().is_some());
}

#[test]
fn given_signup_then_verified_login_when_hint_taken_then_shown_once() {
    let temp = TempDir::new().unwrap();
    let mut state = LocalState::in_dir(temp.path());
    let uid = state.record_signup(&json!({ "uid": "u1", "warnings": [] })).unwrap();

    let verification = state
        .record_sign_in(SERVER, "a@b.co", &sign_in(&uid, true), Utc::now())
        .unwrap();

    assert_eq!(verification, VerificationState::JustVerified);
    assert_eq!(state.take_completion_hint("u1"), Some(PROFILE_COMPLETION_HINT));
    assert_eq!(state.take_completion_hint("u1"), None);
}

#[test]
fn given_signup_in_earlier_process_when_session_verified_then_just_verified() {
    let temp = TempDir::new().unwrap();
    LocalState::in_dir(temp.path())
        .record_signup(&json!({ "uid": "u1" }))
        .unwrap();

    let mut state = LocalState::in_dir(temp.path());
    let (uid, verification) = state
        .record_session(&json!({
            "uid": "u1",
            "email": "a@b.co",
            "emailVerified": true,
            "admin": false,
            "profileExists": true,
            "profileComplete": false
        }))
        .unwrap();

    assert_eq!(uid, "u1");
    assert_eq!(verification, VerificationState::JustVerified);

    let mut next_process = LocalState::in_dir(temp.path());
    let (_, again) = next_process
        .record_session(&json!({ "uid": "u1", "emailVerified": true }))
        .unwrap();
    assert_eq!(again, VerificationState::Acknowledged);
}

#[test]
fn given_signup_response_without_uid_when_recorded_then_error() {
    let temp = TempDir::new().unwrap();
    let mut state = LocalState::in_dir(temp.path());

    let error = state.record_signup(&json!({ "profile": {} })).unwrap_err();

    assert!(matches!(error, ClientError::Json { .. }));
    assert!(!state.tracker().store().path().exists());
}

#[test]
fn given_malformed_session_summary_when_recorded_then_json_error() {
    let temp = TempDir::new().unwrap();
    let mut state = LocalState::in_dir(temp.path());

    let error = state.record_session(&json!({ "uid": 7 })).unwrap_err();

    assert!(matches!(error, ClientError::Json { .. }));
}

#[test]
fn given_signed_in_when_sign_out_then_session_gone() {
    let temp = TempDir::new().unwrap();
    let mut state = LocalState::in_dir(temp.path());
    state
        .record_sign_in(SERVER, "a@b.co", &sign_in("u1", true), Utc::now())
        .unwrap();

    assert!(state.sign_out().unwrap());
    assert!(!state.sign_out().unwrap());
    assert!(state.stored_session().unwrap().is_none());
}
