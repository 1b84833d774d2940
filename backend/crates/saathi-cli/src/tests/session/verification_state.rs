use crate::CliClientResult;
use crate::session::{FileMarkerStore, MarkerStore, VerificationState, VerificationTracker};

use std::collections::HashSet;

use tempfile::TempDir;

#[derive(Default)]
struct MemoryMarkerStore {
    marked: HashSet<String>,
}

impl MarkerStore for MemoryMarkerStore {
    fn is_marked(&self, uid: &str) -> CliClientResult<bool> {
        Ok(self.marked.contains(uid))
    }

    fn mark(&mut self, uid: &str) -> CliClientResult<()> {
        self.marked.insert(uid.to_string());
        Ok(())
    }

    fn clear(&mut self, uid: &str) -> CliClientResult<bool> {
        Ok(self.marked.remove(uid))
    }
}

fn tracker() -> VerificationTracker<MemoryMarkerStore> {
    VerificationTracker::new(MemoryMarkerStore::default())
}

#[test]
fn given_signup_when_session_still_unverified_then_unverified() {
    let mut tracker = tracker();
    tracker.mark_unverified("u1").unwrap();

    let state = tracker.observe("u1", false).unwrap();

    assert_eq!(state, VerificationState::Unverified);
    assert!(tracker.store().is_marked("u1").unwrap());
}

#[test]
fn given_marker_when_verified_session_then_just_verified_and_marker_cleared() {
    let mut tracker = tracker();
    tracker.mark_unverified("u1").unwrap();

    let state = tracker.observe("u1", true).unwrap();

    assert_eq!(state, VerificationState::JustVerified);
    assert!(!tracker.store().is_marked("u1").unwrap());
    assert_eq!(tracker.state("u1").unwrap(), VerificationState::JustVerified);
}

#[test]
fn given_just_verified_when_acknowledged_then_signal_fires_once() {
    let mut tracker = tracker();
    tracker.mark_unverified("u1").unwrap();
    tracker.observe("u1", true).unwrap();

    assert!(tracker.acknowledge("u1"));
    assert!(!tracker.acknowledge("u1"));
    assert_eq!(
        tracker.observe("u1", true).unwrap(),
        VerificationState::Acknowledged
    );
}

#[test]
fn given_unacknowledged_signal_when_observed_again_then_still_just_verified() {
    let mut tracker = tracker();
    tracker.mark_unverified("u1").unwrap();
    tracker.observe("u1", true).unwrap();

    let state = tracker.observe("u1", true).unwrap();

    assert_eq!(state, VerificationState::JustVerified);
}

#[test]
fn given_no_marker_when_verified_session_then_acknowledged() {
    let mut tracker = tracker();

    let state = tracker.observe("u1", true).unwrap();

    assert_eq!(state, VerificationState::Acknowledged);
    assert!(!tracker.acknowledge("u1"));
}

#[test]
fn given_unverified_session_without_signup_when_later_verified_then_just_verified() {
    let mut tracker = tracker();

    tracker.observe("u1", false).unwrap();
    let state = tracker.observe("u1", true).unwrap();

    assert_eq!(state, VerificationState::JustVerified);
}

#[test]
fn given_other_uid_pending_when_acknowledge_then_false() {
    let mut tracker = tracker();
    tracker.mark_unverified("u1").unwrap();
    tracker.observe("u1", true).unwrap();

    assert!(!tracker.acknowledge("u2"));
    assert!(tracker.acknowledge("u1"));
}

#[test]
fn given_file_store_when_marker_written_then_visible_to_new_tracker() {
    let temp = TempDir::new().unwrap();
    let mut first = VerificationTracker::new(FileMarkerStore::in_dir(temp.path()));
    first.mark_unverified("u1").unwrap();
    first.mark_unverified("u2").unwrap();

    let mut second = VerificationTracker::new(FileMarkerStore::in_dir(temp.path()));

    assert_eq!(
        second.observe("u1", true).unwrap(),
        VerificationState::JustVerified
    );
    assert!(second.store().path().ends_with("verification.json"));
    assert!(!second.store().is_marked("u1").unwrap());
    assert!(second.store().is_marked("u2").unwrap());
}

#[test]
fn given_missing_file_when_cleared_then_nothing_removed() {
    let temp = TempDir::new().unwrap();
    let mut store = FileMarkerStore::in_dir(temp.path());

    assert!(!store.clear("u1").unwrap());
    assert!(!store.path().exists());
}
