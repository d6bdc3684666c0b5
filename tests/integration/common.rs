// Common utilities for integration tests

use degiro_client::prelude::*;
use mockito::{Matcher, Mock, ServerGuard};
use serde_json::json;

pub const SESSION_ID: &str = "ABC123.prod_b_112_1";
pub const INT_ACCOUNT: i64 = 1234567;

/// Builds a configuration pointing at the mock server
pub fn config_for(
    server: &ServerGuard,
    int_account: Option<i64>,
    one_time_password: Option<u32>,
) -> Config {
    setup_logger();
    let credentials = Credentials {
        int_account,
        username: "user".to_string(),
        password: "secret".to_string(),
        totp_secret_key: None,
        one_time_password,
    };
    let rest_api = RestApiConfig {
        base_url: server.url(),
        timeout: 5,
    };
    Config::with_credentials(credentials, rest_api).unwrap()
}

/// Registers a successful plain login
pub async fn mock_login(server: &mut ServerGuard) -> Mock {
    server
        .mock("POST", "/login/secure/login")
        .match_body(Matcher::PartialJson(json!({
            "username": "user",
            "password": "secret"
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(json!({"sessionId": SESSION_ID, "status": 0, "statusText": "success"}).to_string())
        .create_async()
        .await
}

/// Creates a lazy client and logs it in against the mock server
pub async fn logged_in_client(server: &mut ServerGuard) -> Client {
    let login = mock_login(server).await;
    let client = Client::new(config_for(server, Some(INT_ACCOUNT), None))
        .await
        .unwrap();
    login.assert_async().await;
    client
}

/// Query parameters every session bound request carries
pub fn session_params() -> Vec<Matcher> {
    vec![
        Matcher::UrlEncoded("intAccount".into(), INT_ACCOUNT.to_string()),
        Matcher::UrlEncoded("sessionId".into(), SESSION_ID.into()),
    ]
}
