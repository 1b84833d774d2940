use crate::{ProfilePatch, ProfileUpdate};

use serde_json::{Map, Value, json};

#[test]
fn given_update_when_converted_then_patch_holds_only_present_keys() {
    let update = ProfileUpdate {
        display_name: Some("X".into()),
        skills: Some(vec!["React".into()]),
        ..ProfileUpdate::default()
    };

    let patch = ProfilePatch::from_update(&update).unwrap();

    let keys: Vec<&String> = patch.fields().keys().collect();
    assert_eq!(keys.len(), 2);
    assert_eq!(patch.fields()["displayName"], "X");
    assert_eq!(patch.fields()["skills"], json!(["React"]));
}

#[test]
fn given_document_when_patch_applied_then_other_keys_untouched_and_stamped() {
    let mut document: Map<String, Value> = serde_json::from_value(json!({
        "uid": "u1",
        "displayName": "Old",
        "bio": "keep me",
        "createdAt": "2026-10-01T00:00:00Z",
        "updatedAt": "2026-10-01T00:00:00Z"
    }))
    .unwrap();
    let patch = ProfilePatch::from_update(&ProfileUpdate {
        display_name: Some("New".into()),
        ..ProfileUpdate::default()
    })
    .unwrap();

    patch.apply_to(&mut document, json!("2026-10-02T00:00:00Z"));

    assert_eq!(document["displayName"], "New");
    assert_eq!(document["bio"], "keep me");
    assert_eq!(document["createdAt"], "2026-10-01T00:00:00Z");
    assert_eq!(document["updatedAt"], "2026-10-02T00:00:00Z");
}
