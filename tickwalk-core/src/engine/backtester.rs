//! Tick-by-tick driver with a one-step execution lag.
//!
//! Signals are computed once over the whole slice. At step `i >= 1` the signal
//! produced for `i - 1` is executed at tick `i`'s price, one unit at a time;
//! step 0 never trades. A snapshot is taken after every step.

use tracing::debug;

use super::trace::{BacktestTrace, Snapshot};
use crate::broker::OrderSink;
use crate::domain::{Order, Tick};
use crate::error::{CoreError, Result};
use crate::strategy::SignalSource;

/// Units traded per executed signal.
pub const TRADE_QUANTITY: f64 = 1.0;

pub struct Backtester<'a> {
    strategy: &'a mut dyn SignalSource,
    sink: &'a mut dyn OrderSink,
}

impl<'a> Backtester<'a> {
    pub fn new(strategy: &'a mut dyn SignalSource, sink: &'a mut dyn OrderSink) -> Self {
        Self { strategy, sink }
    }

    pub fn run(&mut self, ticks: &[Tick]) -> Result<BacktestTrace> {
        let signals = self.strategy.signals(ticks);
        if signals.len() != ticks.len() {
            return Err(CoreError::SignalLength {
                expected: ticks.len(),
                actual: signals.len(),
            });
        }

        let mut trace = BacktestTrace::with_capacity(ticks.len());
        for (i, tick) in ticks.iter().enumerate() {
            if i > 0 {
                if let Some(action) = signals[i - 1].action() {
                    let order = Order::new(
                        tick.timestamp(),
                        tick.symbol(),
                        tick.price(),
                        action,
                        TRADE_QUANTITY,
                    );
                    self.sink.submit(&order)?;
                    debug!(
                        step = i,
                        symbol = tick.symbol(),
                        %action,
                        price = tick.price(),
                        cash = self.sink.cash(),
                        position = self.sink.position(tick.symbol()),
                        "executed trade"
                    );
                }
            }

            trace.push(Snapshot::new(
                tick.timestamp(),
                tick.price(),
                self.sink.cash(),
                self.sink.position(tick.symbol()),
            ));
        }

        debug!(
            strategy = self.strategy.name(),
            steps = trace.len(),
            final_equity = ?trace.final_equity(),
            "backtest finished"
        );
        Ok(trace)
    }
}
