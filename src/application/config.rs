/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
use crate::constants::{DEFAULT_BASE_URL, DEFAULT_CONFIG_PATH, DEFAULT_TIMEOUT_SECS};
use crate::error::AppError;
use crate::utils::config::{get_env_or_default, get_env_or_none};
use dotenv::dotenv;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;
use tracing::debug;

#[derive(Serialize, Deserialize, Clone, PartialEq, Default)]
/// Login payload for the DEGIRO API, as stored in the JSON config file
pub struct Credentials {
    /// Internal account number, fetched from the client details when absent
    #[serde(default)]
    pub int_account: Option<i64>,
    /// Username of the DEGIRO account
    #[serde(default)]
    pub username: String,
    /// Password of the DEGIRO account
    #[serde(default)]
    pub password: String,
    /// Base32 TOTP seed, used to generate one-time passwords
    #[serde(default)]
    pub totp_secret_key: Option<String>,
    /// A ready-made one-time password
    #[serde(default)]
    pub one_time_password: Option<u32>,
}

impl Credentials {
    /// The TOTP seed, if one is set and not blank
    #[must_use]
    pub fn totp_secret(&self) -> Option<&str> {
        self.totp_secret_key
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }

    /// Whether the login must go through the two-factor endpoint
    #[must_use]
    pub fn uses_two_factor(&self) -> bool {
        self.totp_secret().is_some() || self.one_time_password.is_some()
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("int_account", &self.int_account)
            .field("username", &self.username)
            .field("password", &"***")
            .field(
                "totp_secret_key",
                &self.totp_secret_key.as_ref().map(|_| "***"),
            )
            .field("one_time_password", &self.one_time_password)
            .finish()
    }
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, PartialEq)]
/// Configuration for the REST API
pub struct RestApiConfig {
    /// Base URL of the DEGIRO web trader
    pub base_url: String,
    /// Timeout in seconds for REST API requests
    pub timeout: u64,
}

impl Default for RestApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl RestApiConfig {
    /// Reads the REST settings from `DEGIRO_BASE_URL` and `DEGIRO_TIMEOUT`
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            base_url: get_env_or_default("DEGIRO_BASE_URL", DEFAULT_BASE_URL.to_string()),
            timeout: get_env_or_default("DEGIRO_TIMEOUT", DEFAULT_TIMEOUT_SECS),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
/// Main configuration for the DEGIRO client
pub struct Config {
    /// Authentication credentials
    pub credentials: Credentials,
    /// REST API configuration
    pub rest_api: RestApiConfig,
}

impl Config {
    /// Loads the configuration from the path in `DEGIRO_CONFIG_PATH`
    /// (`config/config.json` when unset)
    ///
    /// # Errors
    /// See [`Config::from_file`].
    pub fn new() -> Result<Self, AppError> {
        match dotenv() {
            Ok(_) => debug!("Successfully loaded .env file"),
            Err(e) => debug!("Failed to load .env file: {e}"),
        }
        let path: String = get_env_or_default("DEGIRO_CONFIG_PATH", DEFAULT_CONFIG_PATH.to_string());
        Self::from_file(path)
    }

    /// Loads credentials from a JSON file and REST settings from the environment
    ///
    /// `DEGIRO_INT_ACCOUNT` fills in the account number when the file has none.
    ///
    /// # Errors
    /// * `AppError::Io` if the file cannot be read
    /// * `AppError::Json` if it is not valid JSON
    /// * `AppError::Config` if `username` or `password` are missing or empty
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, AppError> {
        let path = path.as_ref();
        debug!("Reading configuration from {}", path.display());
        let content = fs::read_to_string(path)?;
        let mut credentials: Credentials = serde_json::from_str(&content)?;
        if credentials.int_account.is_none() {
            credentials.int_account = get_env_or_none("DEGIRO_INT_ACCOUNT");
        }
        Self::with_credentials(credentials, RestApiConfig::from_env())
    }

    /// Builds a configuration from already loaded parts
    ///
    /// # Errors
    /// `AppError::Config` if `username` or `password` are empty
    pub fn with_credentials(
        credentials: Credentials,
        rest_api: RestApiConfig,
    ) -> Result<Self, AppError> {
        if credentials.username.trim().is_empty() {
            return Err(AppError::Config("username is empty".to_string()));
        }
        if credentials.password.is_empty() {
            return Err(AppError::Config("password is empty".to_string()));
        }
        Ok(Self {
            credentials,
            rest_api,
        })
    }
}
