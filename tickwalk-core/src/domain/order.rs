//! Order types: bid/ask actions, broker sides, and the order record itself.

use crate::error::CoreError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which side of the book an order sits on. `Bid` buys, `Ask` sells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderAction {
    Bid,
    Ask,
}

impl OrderAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderAction::Bid => "bid",
            OrderAction::Ask => "ask",
        }
    }

    /// The broker side that executes this action.
    pub fn side(&self) -> Side {
        match self {
            OrderAction::Bid => Side::Buy,
            OrderAction::Ask => Side::Sell,
        }
    }
}

impl fmt::Display for OrderAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrderAction {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "bid" => Ok(OrderAction::Bid),
            "ask" => Ok(OrderAction::Ask),
            other => Err(CoreError::invalid(format!("unknown order action: '{other}'"))),
        }
    }
}

/// Execution side for the simple broker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Buy,
    Sell,
}

impl Side {
    pub fn as_str(&self) -> &'static str {
        match self {
            Side::Buy => "buy",
            Side::Sell => "sell",
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Side {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "buy" => Ok(Side::Buy),
            "sell" => Ok(Side::Sell),
            other => Err(CoreError::invalid(format!("unknown side: '{other}'"))),
        }
    }
}

/// A single order produced by a strategy and consumed once by an order sink.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub timestamp: DateTime<Utc>,
    pub symbol: String,
    pub price: f64,
    pub action: OrderAction,
    pub quantity: f64,
}

impl Order {
    pub fn new(
        timestamp: DateTime<Utc>,
        symbol: impl Into<String>,
        price: f64,
        action: OrderAction,
        quantity: f64,
    ) -> Self {
        Self {
            timestamp,
            symbol: symbol.into(),
            price,
            action,
            quantity,
        }
    }

    /// Gross traded value, `price * quantity`.
    pub fn notional(&self) -> f64 {
        self.price * self.quantity
    }
}
