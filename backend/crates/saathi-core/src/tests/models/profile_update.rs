use crate::{CoreError, Education, ProfileUpdate, ValidationLimits};

use googletest::assert_that;
use googletest::prelude::{anything, eq, err, ok, some};

#[test]
fn given_unknown_key_when_deserialized_then_rejected() {
    let result = serde_json::from_str::<ProfileUpdate>(r#"{"displayName":"X","isAdmin":true}"#);

    assert!(result.is_err());
}

#[test]
fn given_null_value_when_deserialized_then_treated_as_absent() {
    let update: ProfileUpdate = serde_json::from_str(r#"{"bio":null,"skills":["Rust"]}"#).unwrap();

    assert_eq!(update.bio, None);
    assert_eq!(update.skills, Some(vec!["Rust".to_string()]));
}

#[test]
fn given_display_name_or_photo_when_checked_then_touches_mirrored_fields() {
    let name = ProfileUpdate {
        display_name: Some("X".into()),
        ..ProfileUpdate::default()
    };
    let skills = ProfileUpdate {
        skills: Some(vec![]),
        ..ProfileUpdate::default()
    };

    assert!(name.touches_mirrored_fields());
    assert_eq!(name.identity_update().display_name.as_deref(), Some("X"));
    assert!(name.identity_update().photo_url.is_none());
    assert!(!skills.touches_mirrored_fields());
    assert!(skills.identity_update().is_empty());
}

#[test]
fn given_profile_complete_false_when_validated_then_rejected() {
    let update = ProfileUpdate {
        profile_complete: Some(false),
        ..ProfileUpdate::default()
    };

    let result = update.validate(&ValidationLimits::default());

    assert_that!(result, err(anything()));
    assert_that!(result.unwrap_err().field_name(), some(eq("profileComplete")));
}

#[test]
fn given_too_many_skills_when_validated_then_rejected() {
    let limits = ValidationLimits {
        max_list_items: 2,
        ..ValidationLimits::default()
    };
    let update = ProfileUpdate {
        skills: Some(vec!["a".into(), "b".into(), "c".into()]),
        ..ProfileUpdate::default()
    };

    let result = update.validate(&limits);

    assert!(matches!(result, Err(CoreError::Validation { .. })));
}

#[test]
fn given_implausible_graduation_year_when_validated_then_rejected() {
    let update = ProfileUpdate {
        education: Some(Education {
            level: "Undergraduate".into(),
            graduation_year: Some(1200),
            ..Education::default()
        }),
        ..ProfileUpdate::default()
    };

    let result = update.validate(&ValidationLimits::default());

    assert_that!(
        result.unwrap_err().field_name(),
        some(eq("education.graduationYear"))
    );
}

#[test]
fn given_empty_phone_when_validated_then_allowed_as_clear() {
    let update = ProfileUpdate {
        phone_number: Some(String::new()),
        ..ProfileUpdate::default()
    };

    assert_that!(update.validate(&ValidationLimits::default()), ok(anything()));
}

#[test]
fn given_default_update_when_checked_then_empty() {
    assert!(ProfileUpdate::default().is_empty());
    assert!(!ProfileUpdate::completion().is_empty());
}
