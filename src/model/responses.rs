/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
use crate::presentation::serialization::option_id;
use chrono::{DateTime, Utc};
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};

/// Envelope of most trading and reporting responses
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DataResponse<T> {
    /// The payload
    pub data: T,
}

/// Error body sent with 4xx answers of the trading endpoints
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ErrorsResponse {
    /// Individual errors
    #[serde(default)]
    pub errors: Vec<ApiErrorItem>,
}

impl ErrorsResponse {
    /// All error texts joined with `"; "`, `None` when there are none
    #[must_use]
    pub fn message(&self) -> Option<String> {
        let texts: Vec<&str> = self
            .errors
            .iter()
            .filter_map(|e| e.text.as_deref())
            .collect();
        if texts.is_empty() {
            None
        } else {
            Some(texts.join("; "))
        }
    }
}

/// One entry of an [`ErrorsResponse`]
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ApiErrorItem {
    /// Human readable message
    #[serde(default)]
    pub text: Option<String>,
}

/// Account overview: cash movements within a date range
#[derive(DebugPretty, DisplaySimple, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AccountOverview {
    /// Cash movements, oldest first as returned by the server
    #[serde(default)]
    pub cash_movements: Vec<CashMovement>,
}

impl AccountOverview {
    /// Number of cash movements
    #[must_use]
    pub fn len(&self) -> usize {
        self.cash_movements.len()
    }

    /// True if there are no cash movements
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cash_movements.is_empty()
    }
}

/// A single cash movement
#[derive(Debug, Clone, Default, DisplaySimple, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CashMovement {
    /// Booking date, ISO 8601 with offset
    pub date: String,
    /// Value date, ISO 8601 with offset
    pub value_date: String,
    /// Product the movement relates to
    #[serde(default, with = "option_id", skip_serializing_if = "Option::is_none")]
    pub product_id: Option<i64>,
    /// Free text description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Currency of `change`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    /// Amount of the movement
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub change: Option<f64>,
    /// Kind of movement (e.g. `CASH_TRANSACTION`)
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub movement_type: Option<String>,
    /// Order that caused the movement
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order_id: Option<String>,
    /// Balance after the movement
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub balance: Option<CashBalance>,
}

impl CashMovement {
    /// Parses `date`, if it is a valid RFC 3339 timestamp
    #[must_use]
    pub fn parsed_date(&self) -> Option<DateTime<Utc>> {
        DateTime::parse_from_rfc3339(&self.date)
            .ok()
            .map(|d| d.with_timezone(&Utc))
    }
}

/// Balance snapshot attached to a cash movement
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CashBalance {
    /// Cash not yet settled
    #[serde(default)]
    pub unsettled_cash: Option<f64>,
    /// Cash held at flatex
    #[serde(default)]
    pub flatex_cash: Option<f64>,
    /// Total balance
    #[serde(default)]
    pub total: Option<f64>,
}

/// A fee or tax line of an order check
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
pub struct Fee {
    /// Fee identifier
    #[serde(default)]
    pub id: Option<i64>,
    /// Amount
    pub amount: f64,
    /// Currency of `amount`
    #[serde(default)]
    pub currency: Option<String>,
}

/// Raw payload of the order check endpoint
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CheckOrderData {
    pub confirmation_id: String,
    #[serde(default)]
    pub free_space_new: Option<f64>,
    #[serde(default)]
    pub transaction_fees: Vec<Fee>,
    #[serde(default)]
    pub transaction_opposite_fees: Vec<Fee>,
    #[serde(default)]
    pub transaction_taxes: Vec<Fee>,
}

/// Result of an order check
#[derive(DebugPretty, DisplaySimple, Clone, Deserialize, Serialize, PartialEq)]
pub struct CheckingResponse {
    /// Identifier to pass to the confirm call
    pub confirmation_id: String,
    /// Free space left after the order
    pub free_space_new: Option<f64>,
    /// When the response was received
    pub response_datetime: DateTime<Utc>,
    /// Fees of the transaction
    pub transaction_fees: Vec<Fee>,
    /// Fees of the opposite transaction
    pub transaction_opposite_fees: Vec<Fee>,
    /// Taxes of the transaction
    pub transaction_taxes: Vec<Fee>,
}

impl CheckingResponse {
    pub(crate) fn from_data(data: CheckOrderData, response_datetime: DateTime<Utc>) -> Self {
        Self {
            confirmation_id: data.confirmation_id,
            free_space_new: data.free_space_new,
            response_datetime,
            transaction_fees: data.transaction_fees,
            transaction_opposite_fees: data.transaction_opposite_fees,
            transaction_taxes: data.transaction_taxes,
        }
    }

    /// Sum of all fee and tax amounts
    #[must_use]
    pub fn total_costs(&self) -> f64 {
        self.transaction_fees
            .iter()
            .chain(&self.transaction_taxes)
            .map(|f| f.amount)
            .sum()
    }
}

/// Raw payload of the order confirm endpoint
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ConfirmOrderData {
    pub order_id: String,
}

/// Result of an order confirmation
#[derive(DebugPretty, DisplaySimple, Clone, Deserialize, Serialize, PartialEq)]
pub struct ConfirmationResponse {
    /// Identifier of the placed order
    pub order_id: String,
    /// When the response was received
    pub response_datetime: DateTime<Utc>,
}
