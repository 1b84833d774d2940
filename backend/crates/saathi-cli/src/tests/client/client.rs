use crate::Client;

#[test]
fn test_base_url_trailing_slash_trimmed() {
    let client = Client::new("http://localhost:8000/", None);
    assert_eq!(client.base_url, "http://localhost:8000");
}

#[test]
fn test_base_url_no_trailing_slash() {
    let client = Client::new("http://localhost:8000", None);
    assert_eq!(client.base_url, "http://localhost:8000");
}

#[test]
fn test_token_stored() {
    let client = Client::new("http://localhost:8000", Some("token-abc"));
    assert_eq!(client.token, Some("token-abc".to_string()));
}

#[test]
fn test_token_none() {
    let client = Client::new("http://localhost:8000", None);
    assert!(client.token.is_none());
}
