use crate::{AuthError, hash_password, verify_password};

#[test]
fn given_hashed_password_when_verified_with_same_password_then_true() {
    let hash = hash_password("Passw0rd").unwrap();

    assert!(hash.starts_with("$argon2id$"));
    assert!(verify_password("Passw0rd", &hash).unwrap());
}

#[test]
fn given_hashed_password_when_verified_with_other_password_then_false() {
    let hash = hash_password("Passw0rd").unwrap();

    assert!(!verify_password("passw0rd", &hash).unwrap());
}

#[test]
fn given_same_password_when_hashed_twice_then_salts_differ() {
    let first = hash_password("Passw0rd").unwrap();
    let second = hash_password("Passw0rd").unwrap();

    assert_ne!(first, second);
}

#[test]
fn given_garbage_hash_when_verified_then_error() {
    let result = verify_password("Passw0rd", "not-a-phc-string");

    assert!(matches!(result, Err(AuthError::PasswordHash { .. })));
}
