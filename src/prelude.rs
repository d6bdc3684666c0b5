/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! # DEGIRO Client Prelude
//!
//! Brings the types needed by most programs into scope with a single import.
//!
//! ## Usage
//!
//! ```rust
//! use degiro_client::prelude::*;
//!
//! let order = Order::limit(Action::Buy, 71981, 1.0, 10.0, TimeType::GoodTillDay);
//! assert!(order.validate().is_ok());
//! ```

// ============================================================================
// CORE CONFIGURATION AND SETUP
// ============================================================================

/// Configuration and credentials
pub use crate::application::config::{Config, Credentials, RestApiConfig};

/// Library version information
pub use crate::{VERSION, version};

// ============================================================================
// ERROR HANDLING
// ============================================================================

/// Main error type for the library
pub use crate::error::AppError;

// ============================================================================
// CLIENT, SESSION AND SERVICES
// ============================================================================

/// Authentication and session
pub use crate::application::auth::{Auth, Session};

/// High level client
pub use crate::application::client::Client;

/// Service traits implemented by the client
pub use crate::application::interfaces::account::AccountService;
pub use crate::application::interfaces::order::OrderService;

/// Session bound HTTP transport
pub use crate::model::http::HttpClient;

// ============================================================================
// MODELS
// ============================================================================

/// Request models
pub use crate::model::requests::{AccountOverviewRequest, Order};

/// Response models
pub use crate::model::responses::{
    AccountOverview, CashBalance, CashMovement, CheckingResponse, ConfirmationResponse, Fee,
};

/// Client details
pub use crate::model::auth::ClientDetails;

/// Order enums
pub use crate::presentation::order::{Action, OrderType, TimeType};

// ============================================================================
// PRESENTATION AND UTILITIES
// ============================================================================

/// Rendering of account overviews
pub use crate::presentation::account::{cash_movement_lines, cash_movements_table};

/// Logging utilities
pub use crate::utils::logger::{setup_logger, setup_logger_with_default};

/// Global constants
pub use crate::constants::*;

// ============================================================================
// RE-EXPORTS FROM EXTERNAL CRATES
// ============================================================================

pub use async_trait::async_trait;
pub use chrono::{DateTime, Local, NaiveDate, Utc};
pub use serde::{Deserialize, Serialize};
pub use std::sync::Arc;
pub use tokio;
pub use tracing::{debug, error, info, warn};
