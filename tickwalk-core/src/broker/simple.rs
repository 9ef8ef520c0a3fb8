//! Frictionless single-asset broker.
//!
//! Buys add shares and spend `quantity * price`; sells remove shares and
//! receive it. No commission, slippage, lot size, or short-sale limits: cash
//! and position may both go negative.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::trace;

use super::OrderSink;
use crate::domain::{Order, Side};
use crate::error::Result;

/// Starting cash when none is given.
pub const DEFAULT_BROKER_CASH: f64 = 1_000_000.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Broker {
    pub cash: f64,
    pub position: f64,
}

impl Broker {
    pub fn new(cash: f64) -> Self {
        Self {
            cash,
            position: 0.0,
        }
    }

    /// Execute a market order at `price`.
    pub fn market_order(&mut self, side: Side, quantity: f64, price: f64) {
        let value = quantity * price;
        match side {
            Side::Buy => {
                self.position += quantity;
                self.cash -= value;
            }
            Side::Sell => {
                self.position -= quantity;
                self.cash += value;
            }
        }
        trace!(%side, quantity, price, cash = self.cash, position = self.position, "market order");
    }

    /// Execute a market order whose side is given as text (`"buy"` / `"sell"`).
    ///
    /// Any other side is rejected before state is touched.
    pub fn execute(&mut self, side: &str, quantity: f64, price: f64) -> Result<()> {
        let side: Side = side.parse()?;
        self.market_order(side, quantity, price);
        Ok(())
    }
}

impl Default for Broker {
    fn default() -> Self {
        Self::new(DEFAULT_BROKER_CASH)
    }
}

impl fmt::Display for Broker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Broker(cash={:.2}, position={})", self.cash, self.position)
    }
}

impl OrderSink for Broker {
    fn submit(&mut self, order: &Order) -> Result<()> {
        self.market_order(order.action.side(), order.quantity, order.price);
        Ok(())
    }

    fn cash(&self) -> f64 {
        self.cash
    }

    fn position(&self, _symbol: &str) -> f64 {
        self.position
    }
}
