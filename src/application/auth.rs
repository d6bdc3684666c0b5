/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! Authentication module for the DEGIRO API
//!
//! This module handles:
//! - Login with username and password
//! - Two-factor login with a configured or generated one-time password
//! - Lookup of the `intAccount` number when it is not configured
//! - Logout

use crate::application::config::Config;
use crate::constants::{CLIENT_DETAILS_PATH, LOGIN_PATH, LOGIN_TOTP_PATH, LOGOUT_PATH};
use crate::error::AppError;
use crate::model::auth::{ClientDetails, ClientDetailsResponse, LoginResponse};
use crate::model::http::{
    endpoint_url, error_for_status, make_http_request, send_request, session_query,
};
use crate::model::requests::LoginRequest;
use crate::utils::totp::generate_totp;
use chrono::{DateTime, Utc};
use reqwest::{Client, Method};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, error, info};

/// Session information for authenticated requests
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    /// Session identifier returned by the login
    pub session_id: String,
    /// Internal account number used by trading and reporting endpoints
    pub int_account: i64,
    /// When the login happened
    pub created_at: DateTime<Utc>,
}

/// Authentication manager for the DEGIRO API
pub struct Auth {
    config: Arc<Config>,
    client: Client,
    session: Arc<RwLock<Option<Session>>>,
}

impl Auth {
    /// Creates a new Auth instance sharing the given HTTP client
    pub fn new(config: Arc<Config>, client: Client) -> Self {
        Self {
            config,
            client,
            session: Arc::new(RwLock::new(None)),
        }
    }

    /// Gets the current session, logging in when there is none
    pub async fn get_session(&self) -> Result<Session, AppError> {
        if let Some(sess) = self.session.read().await.as_ref() {
            return Ok(sess.clone());
        }

        info!("No active session, logging in");
        self.login().await
    }

    /// Logs in and stores the new session
    ///
    /// Uses the two-factor endpoint when the credentials carry a TOTP secret or a
    /// one-time password. The secret wins over a fixed password; a blank secret
    /// counts as unset.
    ///
    /// # Errors
    /// * `AppError::LoginFailed` / `AppError::TotpRequired` when the server refuses the login
    /// * `AppError::InvalidInput` when the TOTP secret is not valid base32
    /// * transport and decoding errors
    pub async fn login(&self) -> Result<Session, AppError> {
        let credentials = &self.config.credentials;
        let one_time_password = match credentials.totp_secret() {
            Some(secret) => Some(generate_totp(secret)?),
            None => credentials.one_time_password,
        };

        let mut body = LoginRequest::new(&credentials.username, &credentials.password);
        let path = match one_time_password {
            Some(otp) => {
                body = body.with_one_time_password(otp);
                LOGIN_TOTP_PATH
            }
            None => LOGIN_PATH,
        };
        let url = endpoint_url(&self.config.rest_api.base_url, path);
        debug!("Sending login request to: {}", url);

        let response = send_request(&self.client, Method::POST, &url, &[], &Some(body)).await?;
        let status = response.status();
        let text = response.text().await?;

        // Refused logins come back as 4xx with a regular login body
        let login: LoginResponse = match serde_json::from_str(&text) {
            Ok(login) => login,
            Err(e) if status.is_success() => return Err(e.into()),
            Err(_) => {
                error!("Login failed with status {}: {}", status, text);
                return Err(error_for_status(status, &text));
            }
        };
        let session_id = login.session_id()?.to_string();

        let int_account = match credentials.int_account {
            Some(int_account) => int_account,
            None => {
                debug!("No int_account configured, fetching client details");
                self.fetch_client_details(&session_id).await?.int_account
            }
        };

        let session = Session {
            session_id,
            int_account,
            created_at: Utc::now(),
        };
        *self.session.write().await = Some(session.clone());

        info!("✓ Login successful, account: {}", session.int_account);
        Ok(session)
    }

    /// Fetches the client details of the current session
    pub async fn get_client_details(&self) -> Result<ClientDetails, AppError> {
        let session = self.get_session().await?;
        self.fetch_client_details(&session.session_id).await
    }

    async fn fetch_client_details(&self, session_id: &str) -> Result<ClientDetails, AppError> {
        let url = endpoint_url(&self.config.rest_api.base_url, CLIENT_DETAILS_PATH);
        let query = [("sessionId", session_id.to_string())];
        let response =
            make_http_request(&self.client, Method::GET, &url, &query, &None::<()>).await?;
        let details: ClientDetailsResponse = response.json().await?;
        Ok(details.data)
    }

    /// Logs out and clears the current session
    ///
    /// Does nothing when there is no session.
    pub async fn logout(&self) -> Result<(), AppError> {
        let Some(session) = self.session.write().await.take() else {
            debug!("Logout requested without an active session");
            return Ok(());
        };

        info!("Logging out");
        let url = format!(
            "{};jsessionid={}",
            endpoint_url(&self.config.rest_api.base_url, LOGOUT_PATH),
            session.session_id
        );
        let query = session_query(&session);
        make_http_request(&self.client, Method::POST, &url, &query, &None::<()>).await?;

        info!("✓ Logged out successfully");
        Ok(())
    }
}
