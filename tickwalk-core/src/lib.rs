//! TickWalk Core: domain types, synthetic prices, strategies, brokers, and the driver.
//!
//! This crate holds everything a single-asset backtest needs:
//! - Domain types (ticks, orders, signals, positions)
//! - Random-walk price source and market CSV files
//! - Moving-average strategies behind the `SignalSource` trait
//! - Simple broker and portfolio accounting behind the `OrderSink` trait
//! - Lagged tick-by-tick driver producing a `BacktestTrace`

pub mod broker;
pub mod data;
pub mod domain;
pub mod engine;
pub mod error;
pub mod rng;
pub mod strategy;

pub use broker::{Broker, OrderSink, Portfolio};
pub use data::{load_prices, read_market_csv, write_market_csv, RandomWalk, WalkParams};
pub use domain::{Order, OrderAction, Position, Side, Signal, Tick};
pub use engine::{BacktestTrace, Backtester, Snapshot};
pub use error::CoreError;
pub use strategy::{SignalSource, StreamingMovingAverage, WindowedMovingAverage};

#[cfg(test)]
mod tests {
    use super::*;

    /// Compile-time check: all core types can cross thread boundaries.
    #[allow(dead_code)]
    fn assert_send_sync() {
        fn require_send<T: Send>() {}
        fn require_sync<T: Sync>() {}

        // Domain types
        require_send::<Tick>();
        require_sync::<Tick>();
        require_send::<Order>();
        require_sync::<Order>();
        require_send::<Signal>();
        require_sync::<Signal>();
        require_send::<Position>();
        require_sync::<Position>();

        // Sinks and strategies
        require_send::<Broker>();
        require_sync::<Broker>();
        require_send::<Portfolio>();
        require_sync::<Portfolio>();
        require_send::<WindowedMovingAverage>();
        require_sync::<WindowedMovingAverage>();
        require_send::<StreamingMovingAverage>();
        require_sync::<StreamingMovingAverage>();

        // Results
        require_send::<BacktestTrace>();
        require_sync::<BacktestTrace>();
        require_send::<CoreError>();
        require_sync::<CoreError>();
    }

    #[test]
    fn send_sync_check_compiles() {
        assert_send_sync();
    }
}
