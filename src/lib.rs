/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! # DEGIRO Client
//!
//! A small async client for the DEGIRO trading API. It covers what is needed to
//! log in (optionally with two-factor TOTP), read the account overview (cash
//! movements between two dates) and place an order through the two-step
//! check/confirm flow.
//!
//! ## Example
//!
//! ```ignore
//! use degiro_client::prelude::*;
//!
//! let config = Config::from_file("config/config.json")?;
//! let client = Client::new(config).await?;
//!
//! let request = AccountOverviewRequest::year_to_date(chrono::Local::now().date_naive());
//! let overview = client.get_account_overview(&request).await?;
//! for movement in &overview.cash_movements {
//!     println!("{}", movement.date);
//! }
//! ```

/// Application layer: configuration, authentication and the high level client
pub mod application;

/// Global constants: endpoints, defaults and login status codes
pub mod constants;

/// Error type shared by the whole crate
pub mod error;

/// Wire models and the HTTP transport
pub mod model;

/// Commonly used types re-exported in one place
pub mod prelude;

/// Domain enums and formatting of responses for display
pub mod presentation;

/// Helpers: environment lookups, logging and TOTP generation
pub mod utils;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Returns the library version
#[must_use]
pub fn version() -> &'static str {
    VERSION
}
