use crate::ClientError;

use saathi_core::CoreError;

#[test]
fn given_core_validation_error_when_converted_then_field_is_kept() {
    let error: ClientError = CoreError::field("password", "Password is too weak").into();

    assert!(matches!(error, ClientError::Validation { .. }));
    assert_eq!(error.field(), Some("password"));
    assert_eq!(error.code(), None);
}

#[test]
fn given_api_error_when_displayed_then_code_and_status_included() {
    let error = ClientError::api_error(
        403,
        "ACCESS_DENIED".to_string(),
        "Access denied".to_string(),
        None,
    );

    let text = error.to_string();
    assert!(text.contains("ACCESS_DENIED"));
    assert!(text.contains("403"));
    assert_eq!(error.code(), Some("ACCESS_DENIED"));
}

#[test]
fn given_not_signed_in_when_displayed_then_points_at_login() {
    let error = ClientError::not_signed_in();

    assert!(error.to_string().contains("saathi login"));
}
