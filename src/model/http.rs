/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
use crate::application::auth::{Auth, Session};
use crate::application::config::Config;
use crate::constants::USER_AGENT;
use crate::error::AppError;
use crate::model::responses::{DataResponse, ErrorsResponse};
use reqwest::{Client, Method, Response, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, error};

/// HTTP client bound to a DEGIRO session
///
/// Builds session aware URLs (`;jsessionid=` path parameter plus the
/// `intAccount`/`sessionId` query) and unwraps the `{"data": ...}` envelope.
/// The session is created on first use if `connect` was not called.
pub struct HttpClient {
    auth: Arc<Auth>,
    http_client: Client,
    config: Arc<Config>,
}

impl HttpClient {
    /// Creates a new client and logs in
    ///
    /// # Errors
    /// Any error of [`HttpClient::new_lazy`] or of the login
    pub async fn new(config: Config) -> Result<Self, AppError> {
        let client = Self::new_lazy(config)?;
        client.connect().await?;
        Ok(client)
    }

    /// Creates a new client without logging in
    ///
    /// # Errors
    /// `AppError::Network` if the underlying HTTP client cannot be built
    pub fn new_lazy(config: Config) -> Result<Self, AppError> {
        let config = Arc::new(config);
        let http_client = build_http_client(&config)?;
        let auth = Arc::new(Auth::new(config.clone(), http_client.clone()));

        Ok(Self {
            auth,
            http_client,
            config,
        })
    }

    /// Logs in, replacing any previous session
    pub async fn connect(&self) -> Result<Session, AppError> {
        self.auth.login().await
    }

    /// Makes a GET request with the session query plus `params`
    pub async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&str, String)],
    ) -> Result<T, AppError> {
        let session = self.auth.get_session().await?;
        let url = self.url(path, None);
        let mut query: Vec<(&str, String)> = session_query(&session);
        query.extend(params.iter().map(|(k, v)| (*k, v.clone())));

        let response =
            make_http_request(&self.http_client, Method::GET, &url, &query, &None::<()>).await?;
        parse_data(response).await
    }

    /// Makes a POST request to a trading endpoint
    ///
    /// Trading endpoints carry the session both as `;jsessionid=` and in the query.
    pub async fn post<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, AppError> {
        let session = self.auth.get_session().await?;
        let url = self.url(path, Some(&session));
        let query = session_query(&session);

        let response =
            make_http_request(&self.http_client, Method::POST, &url, &query, &Some(body)).await?;
        parse_data(response).await
    }

    /// Builds the absolute URL of `path`, with `;jsessionid=` when a session is given
    fn url(&self, path: &str, session: Option<&Session>) -> String {
        let url = endpoint_url(&self.config.rest_api.base_url, path);
        match session {
            Some(s) => format!("{url};jsessionid={}", s.session_id),
            None => url,
        }
    }

    /// Gets the current session, logging in if there is none
    pub async fn get_session(&self) -> Result<Session, AppError> {
        self.auth.get_session().await
    }

    /// Logs out
    pub async fn logout(&self) -> Result<(), AppError> {
        self.auth.logout().await
    }

    /// Gets Auth reference
    pub fn auth(&self) -> &Auth {
        &self.auth
    }
}

/// Builds the shared `reqwest` client with the configured timeout
pub(crate) fn build_http_client(config: &Config) -> Result<Client, AppError> {
    Ok(Client::builder()
        .user_agent(USER_AGENT)
        .timeout(Duration::from_secs(config.rest_api.timeout))
        .build()?)
}

/// Joins the base URL and an endpoint path
#[must_use]
pub fn endpoint_url(base_url: &str, path: &str) -> String {
    if path.starts_with("http") {
        return path.to_string();
    }
    format!(
        "{}/{}",
        base_url.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

/// `intAccount` and `sessionId` query parameters of a session
#[must_use]
pub fn session_query(session: &Session) -> Vec<(&'static str, String)> {
    vec![
        ("intAccount", session.int_account.to_string()),
        ("sessionId", session.session_id.clone()),
    ]
}

/// Sends a request without looking at the response status
pub async fn send_request<B: Serialize>(
    client: &Client,
    method: Method,
    url: &str,
    query: &[(&str, String)],
    body: &Option<B>,
) -> Result<Response, AppError> {
    debug!("{} {}", method, url);

    let mut request = client
        .request(method, url)
        .header("Accept", "application/json");

    if !query.is_empty() {
        request = request.query(query);
    }
    if let Some(b) = body {
        request = request.json(b);
    }

    let response = request.send().await?;
    debug!("Response status: {}", response.status());
    Ok(response)
}

/// Sends a request and turns non success statuses into errors
///
/// * 401 gives `AppError::Unauthorized`
/// * 404 gives `AppError::NotFound`
/// * 429 gives `AppError::RateLimitExceeded`
/// * other 4xx with an `{"errors": [...]}` body give `AppError::Rejected`
/// * anything else gives `AppError::Unexpected`
pub async fn make_http_request<B: Serialize>(
    client: &Client,
    method: Method,
    url: &str,
    query: &[(&str, String)],
    body: &Option<B>,
) -> Result<Response, AppError> {
    let response = send_request(client, method, url, query, body).await?;
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body_text = response.text().await.unwrap_or_default();
    error!("Request failed with status {}: {}", status, body_text);
    Err(error_for_status(status, &body_text))
}

/// Maps a failed status and its body to an error
#[must_use]
pub fn error_for_status(status: StatusCode, body: &str) -> AppError {
    match status {
        StatusCode::UNAUTHORIZED => AppError::Unauthorized,
        StatusCode::NOT_FOUND => AppError::NotFound,
        StatusCode::TOO_MANY_REQUESTS => AppError::RateLimitExceeded,
        s if s.is_client_error() => serde_json::from_str::<ErrorsResponse>(body)
            .ok()
            .and_then(|e| e.message())
            .map(AppError::Rejected)
            .unwrap_or(AppError::Unexpected(s)),
        s => AppError::Unexpected(s),
    }
}

/// Parses a `{"data": ...}` response
async fn parse_data<T: DeserializeOwned>(response: Response) -> Result<T, AppError> {
    let text = response.text().await?;
    let envelope: DataResponse<T> = serde_json::from_str(&text)?;
    Ok(envelope.data)
}
