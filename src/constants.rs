/// Default location of the JSON credentials file, relative to the working directory
pub const DEFAULT_CONFIG_PATH: &str = "config/config.json";
/// Base URL of the DEGIRO web trader
pub const DEFAULT_BASE_URL: &str = "https://trader.degiro.nl";
/// Default timeout in seconds for REST requests
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
/// User agent string sent with every request
pub const USER_AGENT: &str = "degiro-client/0.1.0";

/// Login endpoint (username and password only)
pub const LOGIN_PATH: &str = "login/secure/login";
/// Login endpoint used when a one-time password is provided
pub const LOGIN_TOTP_PATH: &str = "login/secure/login/totp";
/// Logout endpoint
pub const LOGOUT_PATH: &str = "trading/secure/logout";
/// Client details endpoint, source of the `intAccount` number
pub const CLIENT_DETAILS_PATH: &str = "pa/secure/client";
/// Account overview (cash movements) endpoint
pub const ACCOUNT_OVERVIEW_PATH: &str = "portfolio-reports/secure/v6/accountoverview";
/// First step of order placement
pub const ORDER_CHECK_PATH: &str = "trading/secure/v5/checkOrder";
/// Second step of order placement, followed by `/{confirmation_id}`
pub const ORDER_CONFIRM_PATH: &str = "trading/secure/v5/order";

/// Login status returned on success
pub const LOGIN_STATUS_OK: i32 = 0;
/// Login status returned when username or password are wrong
pub const LOGIN_STATUS_BAD_CREDENTIALS: i32 = 3;
/// Login status returned when the account requires a one-time password
pub const LOGIN_STATUS_TOTP_NEEDED: i32 = 6;

/// Time step in seconds of the TOTP algorithm
pub const TOTP_STEP_SECS: u64 = 30;
/// Number of digits of a one-time password
pub const TOTP_DIGITS: u32 = 6;

/// Date format expected by the reporting endpoints
pub const REPORT_DATE_FORMAT: &str = "%d/%m/%Y";
