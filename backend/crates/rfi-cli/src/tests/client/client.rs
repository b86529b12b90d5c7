use crate::Client;

use rfi_config::ClientConfig;

#[test]
fn test_base_url_trailing_slash_trimmed() {
    let client = Client::new("http://localhost:8080/", None);
    assert_eq!(client.base_url, "http://localhost:8080");
}

#[test]
fn test_base_url_no_trailing_slash() {
    let client = Client::new("http://localhost:8080", None);
    assert_eq!(client.base_url, "http://localhost:8080");
}

#[test]
fn test_token_stored() {
    let client = Client::new("http://localhost:8080", Some("abc"));
    assert_eq!(client.token, Some("abc".to_string()));
}

#[test]
fn test_token_none() {
    let client = Client::new("http://localhost:8080", None);
    assert!(client.token.is_none());
}

#[test]
fn test_from_config() {
    let config = ClientConfig {
        server_url: "https://rfi.example.com/".to_string(),
        token: Some("t".to_string()),
        timeout_secs: 5,
    };

    let client = Client::from_config(&config).unwrap();

    assert_eq!(client.base_url, "https://rfi.example.com");
    assert_eq!(client.token.as_deref(), Some("t"));
}
