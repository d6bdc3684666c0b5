/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
use crate::constants::{LOGIN_STATUS_BAD_CREDENTIALS, LOGIN_STATUS_OK, LOGIN_STATUS_TOTP_NEEDED};
use crate::error::AppError;
use crate::presentation::serialization::option_id;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Response of the login endpoints
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    /// Session identifier, present when the login succeeded
    #[serde(default)]
    pub session_id: Option<String>,
    /// Numeric login status, `0` on success
    pub status: i32,
    /// Textual login status (e.g. `badCredentials`, `totpNeeded`)
    #[serde(default)]
    pub status_text: Option<String>,
    /// Whether the account uses a pass code
    #[serde(default)]
    pub is_pass_code_enabled: Option<bool>,
    /// Locale of the account
    #[serde(default)]
    pub locale: Option<String>,
}

impl LoginResponse {
    /// Returns the session id, or the error matching the login status
    ///
    /// # Errors
    /// * `AppError::TotpRequired` for status 6
    /// * `AppError::LoginFailed` for any other non zero status, or status 0 without session id
    pub fn session_id(&self) -> Result<&str, AppError> {
        match self.status {
            LOGIN_STATUS_OK => self.session_id.as_deref().ok_or_else(|| {
                warn!("Login status is OK but no session id was returned");
                AppError::LoginFailed {
                    status: self.status,
                    status_text: Some("missing sessionId".to_string()),
                }
            }),
            LOGIN_STATUS_TOTP_NEEDED => Err(AppError::TotpRequired),
            LOGIN_STATUS_BAD_CREDENTIALS => Err(AppError::LoginFailed {
                status: self.status,
                status_text: self
                    .status_text
                    .clone()
                    .or_else(|| Some("badCredentials".to_string())),
            }),
            status => Err(AppError::LoginFailed {
                status,
                status_text: self.status_text.clone(),
            }),
        }
    }
}

/// Response of the client details endpoint
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct ClientDetailsResponse {
    /// Client details
    pub data: ClientDetails,
}

/// Details of the logged in client
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ClientDetails {
    /// Internal account number, needed by the trading and reporting endpoints
    pub int_account: i64,
    /// Client identifier
    #[serde(default, with = "option_id")]
    pub id: Option<i64>,
    /// Username
    #[serde(default)]
    pub username: Option<String>,
    /// Contact e-mail
    #[serde(default)]
    pub email: Option<String>,
    /// Role of the client (e.g. `basic`)
    #[serde(default)]
    pub client_role: Option<String>,
}
