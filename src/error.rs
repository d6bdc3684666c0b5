/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
use reqwest::StatusCode;

/// Main error type of the library
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Transport level failure (connection, timeout, TLS, body decoding)
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),
    /// File system failure, typically while reading the config file
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    /// JSON (de)serialization failure
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    /// Configuration is incomplete or malformed
    #[error("configuration error: {0}")]
    Config(String),
    /// The server answered 401
    #[error("unauthorized")]
    Unauthorized,
    /// The server answered 404
    #[error("not found")]
    NotFound,
    /// The server answered 429
    #[error("rate limit exceeded")]
    RateLimitExceeded,
    /// Any other non success status
    #[error("unexpected http status: {0}")]
    Unexpected(StatusCode),
    /// A request object failed validation before being sent
    #[error("invalid input: {0}")]
    InvalidInput(String),
    /// Login was refused, with the status code and text returned by the server
    #[error(
        "login failed with status {status}{}",
        .status_text.as_deref().map(|t| format!(": {t}")).unwrap_or_default()
    )]
    LoginFailed {
        /// Numeric login status
        status: i32,
        /// Human readable status, when the server sent one
        status_text: Option<String>,
    },
    /// The account requires a one-time password and none was configured
    #[error("one-time password required")]
    TotpRequired,
    /// The server rejected the request and explained why
    #[error("request rejected: {0}")]
    Rejected(String),
}
