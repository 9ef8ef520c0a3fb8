//! Order sinks: where the driver sends its trades.
//!
//! Two implementations share one trait: [`Broker`] executes single-asset
//! market orders and tracks only cash and share count; [`Portfolio`] accounts
//! every order per symbol with running PnL and keeps the order history.

pub mod portfolio;
pub mod simple;

pub use portfolio::Portfolio;
pub use simple::{Broker, DEFAULT_BROKER_CASH};

use crate::domain::Order;
use crate::error::Result;

/// Capability to accept orders and report the resulting holdings.
pub trait OrderSink {
    /// Apply one order. Cash and position change together or not at all.
    fn submit(&mut self, order: &Order) -> Result<()>;

    fn cash(&self) -> f64;

    /// Signed quantity held in `symbol` (0 if never traded).
    fn position(&self, symbol: &str) -> f64;

    /// Mark-to-market value at `price` for `symbol`.
    fn equity(&self, symbol: &str, price: f64) -> f64 {
        self.cash() + self.position(symbol) * price
    }
}

impl<S: OrderSink + ?Sized> OrderSink for Box<S> {
    fn submit(&mut self, order: &Order) -> Result<()> {
        (**self).submit(order)
    }

    fn cash(&self) -> f64 {
        (**self).cash()
    }

    fn position(&self, symbol: &str) -> f64 {
        (**self).position(symbol)
    }
}
