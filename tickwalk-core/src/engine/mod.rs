//! Backtest driver and its result trace.
//!
//! The driver pulls a full signal vector from a [`SignalSource`](crate::strategy::SignalSource),
//! replays the ticks in order, and sends lagged unit orders to an
//! [`OrderSink`](crate::broker::OrderSink).

pub mod backtester;
pub mod trace;

pub use backtester::{Backtester, TRADE_QUANTITY};
pub use trace::{BacktestTrace, Snapshot};
