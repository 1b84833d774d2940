use crate::{CustomClaims, Education, Identity, ProfileUpdate, UserProfile};

use chrono::Utc;

fn identity(display_name: &str) -> Identity {
    Identity {
        uid: "uid-1".into(),
        email: "a@b.com".into(),
        email_verified: false,
        display_name: display_name.into(),
        photo_url: None,
        phone_number: None,
        disabled: false,
        custom_claims: CustomClaims::default(),
        created_at: Utc::now(),
    }
}

#[test]
fn given_identity_when_default_profile_built_then_names_split_and_incomplete() {
    let now = Utc::now();

    let profile = UserProfile::for_identity(&identity("A B"), now);

    assert_eq!(profile.uid, "uid-1");
    assert_eq!(profile.email, "a@b.com");
    assert_eq!(profile.first_name, "A");
    assert_eq!(profile.last_name, "B");
    assert!(!profile.profile_complete);
    assert!(profile.is_active);
    assert_eq!(profile.created_at, now);
    assert_eq!(profile.updated_at, now);
}

#[test]
fn given_profile_without_photo_when_serialized_then_optional_fields_omitted() {
    let profile = UserProfile::for_identity(&identity("A B"), Utc::now());

    let json = serde_json::to_value(&profile).unwrap();

    assert!(json.get("photoURL").is_none());
    assert!(json["education"].get("graduationYear").is_none());
    assert_eq!(json["profileComplete"], false);
    assert_eq!(json["firstName"], "A");
}

#[test]
fn given_partial_update_when_applied_then_only_present_fields_change() {
    let mut profile = UserProfile::for_identity(&identity("A B"), Utc::now());
    let before = profile.clone();
    let update = ProfileUpdate {
        skills: Some(vec!["React".into()]),
        education: Some(Education {
            level: "Undergraduate".into(),
            institution: "IIT".into(),
            field: "CS".into(),
            graduation_year: Some(2027),
        }),
        ..ProfileUpdate::default()
    };

    profile.apply(&update);

    assert_eq!(profile.skills, vec!["React".to_string()]);
    assert_eq!(profile.education.graduation_year, Some(2027));
    assert_eq!(profile.first_name, before.first_name);
    assert_eq!(profile.interests, before.interests);
    assert_eq!(profile.created_at, before.created_at);
}

#[test]
fn given_stored_document_missing_optional_fields_when_deserialized_then_defaults_apply() {
    let json = serde_json::json!({
        "uid": "uid-1",
        "email": "a@b.com",
        "createdAt": "2026-10-01T00:00:00Z",
        "updatedAt": "2026-10-01T00:00:00Z"
    });

    let profile: UserProfile = serde_json::from_value(json).unwrap();

    assert!(profile.is_active);
    assert!(!profile.profile_complete);
    assert!(profile.skills.is_empty());
    assert_eq!(profile.photo_url, None);
}
