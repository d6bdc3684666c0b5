use degiro_client::application::config::{Config, Credentials, RestApiConfig};
use degiro_client::constants::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS};
use degiro_client::error::AppError;
use std::fs;
use std::path::PathBuf;

/// Writes `content` to a file unique to the calling test
fn write_config(name: &str, content: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!(
        "degiro_client_{}_{}.json",
        name,
        std::process::id()
    ));
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn test_from_file_full() {
    let path = write_config(
        "full",
        r#"{
            "int_account": 1234567,
            "username": "user",
            "password": "secret",
            "totp_secret_key": "GEZDGNBVGY3TQOJQ",
            "one_time_password": 123456
        }"#,
    );
    let config = Config::from_file(&path).unwrap();
    fs::remove_file(&path).ok();

    assert_eq!(config.credentials.int_account, Some(1234567));
    assert_eq!(config.credentials.username, "user");
    assert_eq!(config.credentials.password, "secret");
    assert_eq!(
        config.credentials.totp_secret_key.as_deref(),
        Some("GEZDGNBVGY3TQOJQ")
    );
    assert_eq!(config.credentials.one_time_password, Some(123456));
    assert!(config.credentials.uses_two_factor());
}

#[test]
fn test_from_file_optional_keys_absent_or_null() {
    let path = write_config(
        "minimal",
        r#"{"int_account": 42, "username": "user", "password": "secret", "totp_secret_key": null}"#,
    );
    let config = Config::from_file(&path).unwrap();
    fs::remove_file(&path).ok();

    assert_eq!(config.credentials.int_account, Some(42));
    assert!(config.credentials.totp_secret_key.is_none());
    assert!(config.credentials.one_time_password.is_none());
    assert!(!config.credentials.uses_two_factor());
}

#[test]
fn test_from_file_missing_file() {
    let result = Config::from_file("does/not/exist/config.json");
    assert!(matches!(result, Err(AppError::Io(_))));
}

#[test]
fn test_from_file_malformed_json() {
    let path = write_config("malformed", "{ not json");
    let result = Config::from_file(&path);
    fs::remove_file(&path).ok();
    assert!(matches!(result, Err(AppError::Json(_))));
}

#[test]
fn test_from_file_missing_username() {
    let path = write_config("no_username", r#"{"password": "secret"}"#);
    let result = Config::from_file(&path);
    fs::remove_file(&path).ok();
    assert!(matches!(result, Err(AppError::Config(_))));
}

#[test]
fn test_from_file_missing_password() {
    let path = write_config("no_password", r#"{"username": "user"}"#);
    let result = Config::from_file(&path);
    fs::remove_file(&path).ok();
    assert!(matches!(result, Err(AppError::Config(_))));
}

#[test]
fn test_blank_totp_secret_is_unset() {
    let path = write_config(
        "blank_secret",
        r#"{"username": "user", "password": "secret", "totp_secret_key": "  "}"#,
    );
    let config = Config::from_file(&path).unwrap();
    fs::remove_file(&path).ok();

    assert!(config.credentials.totp_secret().is_none());
    assert!(!config.credentials.uses_two_factor());
}

#[test]
fn test_with_credentials_rejects_empty_fields() {
    let credentials = Credentials {
        username: " ".to_string(),
        password: "secret".to_string(),
        ..Default::default()
    };
    assert!(matches!(
        Config::with_credentials(credentials, RestApiConfig::default()),
        Err(AppError::Config(_))
    ));

    let credentials = Credentials {
        username: "user".to_string(),
        ..Default::default()
    };
    assert!(matches!(
        Config::with_credentials(credentials, RestApiConfig::default()),
        Err(AppError::Config(_))
    ));
}

#[test]
fn test_rest_api_defaults() {
    let rest = RestApiConfig::default();
    assert_eq!(rest.base_url, DEFAULT_BASE_URL);
    assert_eq!(rest.timeout, DEFAULT_TIMEOUT_SECS);
}

#[test]
fn test_credentials_debug_hides_secrets() {
    let credentials = Credentials {
        int_account: Some(1),
        username: "user".to_string(),
        password: "hunter2".to_string(),
        totp_secret_key: Some("GEZDGNBVGY3TQOJQ".to_string()),
        one_time_password: None,
    };
    let shown = format!("{credentials:?}");
    assert!(shown.contains("user"));
    assert!(!shown.contains("hunter2"));
    assert!(!shown.contains("GEZDGNBVGY3TQOJQ"));
}
