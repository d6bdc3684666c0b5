use degiro_client::error::AppError;
use reqwest::StatusCode;

#[test]
fn test_app_error_display_rate_limit() {
    let error = AppError::RateLimitExceeded;
    assert_eq!(error.to_string(), "rate limit exceeded");
}

#[test]
fn test_app_error_display_unauthorized() {
    let error = AppError::Unauthorized;
    assert_eq!(error.to_string(), "unauthorized");
}

#[test]
fn test_app_error_display_unexpected() {
    let error = AppError::Unexpected(StatusCode::BAD_REQUEST);
    assert!(error.to_string().contains("400"));
}

#[test]
fn test_app_error_display_invalid_input() {
    let error = AppError::InvalidInput("size must be positive".to_string());
    assert_eq!(error.to_string(), "invalid input: size must be positive");
}

#[test]
fn test_app_error_display_login_failed() {
    let error = AppError::LoginFailed {
        status: 3,
        status_text: Some("badCredentials".to_string()),
    };
    assert_eq!(
        error.to_string(),
        "login failed with status 3: badCredentials"
    );

    let error = AppError::LoginFailed {
        status: 12,
        status_text: None,
    };
    assert_eq!(error.to_string(), "login failed with status 12");
}

#[test]
fn test_app_error_display_rejected() {
    let error = AppError::Rejected("Market closed".to_string());
    assert_eq!(error.to_string(), "request rejected: Market closed");
}

#[test]
fn test_app_error_from_serde() {
    let json = r#"{"invalid": json}"#;
    let serde_error = serde_json::from_str::<serde_json::Value>(json).unwrap_err();
    let app_error: AppError = serde_error.into();

    match app_error {
        AppError::Json(_) => (),
        _ => panic!("Expected Json error"),
    }
}

#[test]
fn test_app_error_from_io() {
    let io_error = std::io::Error::other("test");
    let app_error: AppError = io_error.into();

    match app_error {
        AppError::Io(_) => (),
        _ => panic!("Expected Io error"),
    }
}

#[test]
fn test_app_error_source() {
    use std::error::Error;

    let app_error: AppError = std::io::Error::other("disk").into();
    assert!(app_error.source().is_some());
    assert!(AppError::TotpRequired.source().is_none());
}
