/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
use crate::constants::REPORT_DATE_FORMAT;
use crate::error::AppError;
use crate::presentation::order::{Action, OrderType, TimeType};
use crate::presentation::serialization::id_as_string;
use chrono::{Datelike, NaiveDate};
use pretty_simple_display::DisplaySimple;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Body of the login request
#[derive(Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    /// Account username
    pub username: String,
    /// Account password
    pub password: String,
    /// Always `false`
    pub is_pass_code_reset: bool,
    /// Always `false`
    pub is_redirect_to_mobile: bool,
    /// Always empty
    pub query_params: HashMap<String, String>,
    /// One-time password, only for the two-factor login
    #[serde(skip_serializing_if = "Option::is_none")]
    pub one_time_password: Option<u32>,
}

impl LoginRequest {
    /// Creates a login body without one-time password
    pub fn new(username: &str, password: &str) -> Self {
        Self {
            username: username.to_string(),
            password: password.to_string(),
            is_pass_code_reset: false,
            is_redirect_to_mobile: false,
            query_params: HashMap::new(),
            one_time_password: None,
        }
    }

    /// Adds a one-time password
    pub fn with_one_time_password(mut self, one_time_password: u32) -> Self {
        self.one_time_password = Some(one_time_password);
        self
    }
}

/// Date range of an account overview request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccountOverviewRequest {
    /// First day included in the report
    pub from_date: NaiveDate,
    /// Last day included in the report
    pub to_date: NaiveDate,
}

impl AccountOverviewRequest {
    /// Creates a request for the given range
    ///
    /// # Errors
    /// `AppError::InvalidInput` when `from_date` is after `to_date`
    pub fn new(from_date: NaiveDate, to_date: NaiveDate) -> Result<Self, AppError> {
        if from_date > to_date {
            return Err(AppError::InvalidInput(format!(
                "from_date {from_date} is after to_date {to_date}"
            )));
        }
        Ok(Self { from_date, to_date })
    }

    /// From January 1st of `today`'s year up to `today`
    #[must_use]
    pub fn year_to_date(today: NaiveDate) -> Self {
        let from_date = today.with_ordinal(1).unwrap_or(today);
        Self {
            from_date,
            to_date: today,
        }
    }

    /// The `fromDate`/`toDate` query parameters, formatted `DD/MM/YYYY`
    #[must_use]
    pub fn query_params(&self) -> Vec<(&'static str, String)> {
        vec![
            (
                "fromDate",
                self.from_date.format(REPORT_DATE_FORMAT).to_string(),
            ),
            ("toDate", self.to_date.format(REPORT_DATE_FORMAT).to_string()),
        ]
    }
}

/// An order, as sent to both the check and the confirm endpoints
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq)]
pub struct Order {
    /// Buy or sell
    #[serde(rename = "buySell")]
    pub action: Action,
    /// Type of order (limit, market, ...)
    #[serde(rename = "orderType")]
    pub order_type: OrderType,
    /// Limit price
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    /// Trigger price of stop orders
    #[serde(rename = "stopPrice", default, skip_serializing_if = "Option::is_none")]
    pub stop_price: Option<f64>,
    /// DEGIRO product identifier
    #[serde(rename = "productId", with = "id_as_string")]
    pub product_id: i64,
    /// Quantity
    pub size: f64,
    /// How long the order stays valid
    #[serde(rename = "timeType")]
    pub time_type: TimeType,
}

impl Order {
    /// Creates a limit order
    pub fn limit(
        action: Action,
        product_id: i64,
        size: f64,
        price: f64,
        time_type: TimeType,
    ) -> Self {
        Self {
            action,
            order_type: OrderType::Limit,
            price: Some(price),
            stop_price: None,
            product_id,
            size,
            time_type,
        }
    }

    /// Creates a market order, valid for the day
    pub fn market(action: Action, product_id: i64, size: f64) -> Self {
        Self {
            action,
            order_type: OrderType::Market,
            price: None,
            stop_price: None,
            product_id,
            size,
            time_type: TimeType::GoodTillDay,
        }
    }

    /// Creates a stop loss order
    pub fn stop_loss(
        action: Action,
        product_id: i64,
        size: f64,
        stop_price: f64,
        time_type: TimeType,
    ) -> Self {
        Self {
            action,
            order_type: OrderType::StopLoss,
            price: None,
            stop_price: Some(stop_price),
            product_id,
            size,
            time_type,
        }
    }

    /// Creates a stop limit order
    pub fn stop_limit(
        action: Action,
        product_id: i64,
        size: f64,
        price: f64,
        stop_price: f64,
        time_type: TimeType,
    ) -> Self {
        Self {
            action,
            order_type: OrderType::StopLimit,
            price: Some(price),
            stop_price: Some(stop_price),
            product_id,
            size,
            time_type,
        }
    }

    /// Checks that the order is complete for its type
    ///
    /// # Errors
    /// `AppError::InvalidInput` describing the first problem found
    pub fn validate(&self) -> Result<(), AppError> {
        if !is_positive(self.size) {
            return Err(AppError::InvalidInput(format!(
                "size must be positive, got {}",
                self.size
            )));
        }
        if self.order_type.requires_price() && self.price.is_none() {
            return Err(AppError::InvalidInput(format!(
                "{} order requires a price",
                self.order_type
            )));
        }
        if self.order_type.requires_stop_price() && self.stop_price.is_none() {
            return Err(AppError::InvalidInput(format!(
                "{} order requires a stop price",
                self.order_type
            )));
        }
        for (name, value) in [("price", self.price), ("stop price", self.stop_price)] {
            if let Some(v) = value
                && !is_positive(v)
            {
                return Err(AppError::InvalidInput(format!(
                    "{name} must be positive, got {v}"
                )));
            }
        }
        Ok(())
    }
}

fn is_positive(value: f64) -> bool {
    value.is_finite() && value > 0.0
}
