/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
use pretty_simple_display::DisplaySimple;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Order direction, sent as `buySell`
#[derive(Debug, Clone, Copy, DisplaySimple, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum Action {
    /// Buy
    #[default]
    Buy,
    /// Sell
    Sell,
}

/// Order type, sent as its numeric code
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(into = "u8", try_from = "u8")]
pub enum OrderType {
    /// Executed at the given price or better
    #[default]
    Limit,
    /// Becomes a limit order once the stop price is reached
    StopLimit,
    /// Executed immediately at the market price
    Market,
    /// Becomes a market order once the stop price is reached
    StopLoss,
}

impl OrderType {
    /// Whether the order needs a limit `price`
    #[must_use]
    pub fn requires_price(self) -> bool {
        matches!(self, OrderType::Limit | OrderType::StopLimit)
    }

    /// Whether the order needs a `stop_price`
    #[must_use]
    pub fn requires_stop_price(self) -> bool {
        matches!(self, OrderType::StopLimit | OrderType::StopLoss)
    }
}

impl fmt::Display for OrderType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OrderType::Limit => "LIMIT",
            OrderType::StopLimit => "STOP_LIMIT",
            OrderType::Market => "MARKET",
            OrderType::StopLoss => "STOP_LOSS",
        };
        f.write_str(name)
    }
}

impl From<OrderType> for u8 {
    fn from(value: OrderType) -> Self {
        match value {
            OrderType::Limit => 0,
            OrderType::StopLimit => 1,
            OrderType::Market => 2,
            OrderType::StopLoss => 3,
        }
    }
}

impl TryFrom<u8> for OrderType {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(OrderType::Limit),
            1 => Ok(OrderType::StopLimit),
            2 => Ok(OrderType::Market),
            3 => Ok(OrderType::StopLoss),
            other => Err(format!("unknown order type code {other}")),
        }
    }
}

/// Order duration, sent as its numeric code
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(into = "u8", try_from = "u8")]
pub enum TimeType {
    /// Valid until the end of the trading day
    #[default]
    GoodTillDay,
    /// Valid until cancelled
    GoodTillCanceled,
}

impl fmt::Display for TimeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimeType::GoodTillDay => f.write_str("GOOD_TILL_DAY"),
            TimeType::GoodTillCanceled => f.write_str("GOOD_TILL_CANCELED"),
        }
    }
}

impl From<TimeType> for u8 {
    fn from(value: TimeType) -> Self {
        match value {
            TimeType::GoodTillDay => 1,
            TimeType::GoodTillCanceled => 3,
        }
    }
}

impl TryFrom<u8> for TimeType {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(TimeType::GoodTillDay),
            3 => Ok(TimeType::GoodTillCanceled),
            other => Err(format!("unknown time type code {other}")),
        }
    }
}
