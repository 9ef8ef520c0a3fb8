//! Streaming moving average: one order per incoming tick.
//!
//! Keeps, per symbol, a ring buffer of at most `window` recent prices. A tick
//! identical to the last one stored for its symbol is a repeated snapshot and
//! is not stored again. The mean covers whatever the buffer holds, including
//! the tick just stored, so short histories average over fewer prices.
//!
//! The decision is binary: `Ask` when the price is strictly above the mean,
//! `Bid` otherwise. There is no hold state in this mode.

use std::collections::{HashMap, VecDeque};

use super::{check_window, SignalSource};
use crate::domain::{Order, OrderAction, Signal, Symbol, Tick};
use crate::error::Result;

/// Quantity attached to every streamed order.
pub const ORDER_QUANTITY: f64 = 1.0;

#[derive(Debug, Clone, Default)]
struct SymbolHistory {
    prices: VecDeque<f64>,
    last_tick: Option<Tick>,
}

impl SymbolHistory {
    fn with_capacity(window: usize) -> Self {
        Self {
            prices: VecDeque::with_capacity(window),
            last_tick: None,
        }
    }

    /// Store `tick` unless it repeats the last stored tick. Returns whether it was stored.
    fn record(&mut self, tick: &Tick, window: usize) -> bool {
        if self.last_tick.as_ref() == Some(tick) {
            return false;
        }
        if self.prices.len() == window {
            self.prices.pop_front();
        }
        self.prices.push_back(tick.price());
        self.last_tick = Some(tick.clone());
        true
    }

    fn mean(&self) -> f64 {
        self.prices.iter().sum::<f64>() / self.prices.len() as f64
    }
}

#[derive(Debug, Clone)]
pub struct StreamingMovingAverage {
    window: usize,
    history: HashMap<Symbol, SymbolHistory>,
}

impl StreamingMovingAverage {
    pub fn new(window: usize) -> Result<Self> {
        Ok(Self {
            window: check_window(window)?,
            history: HashMap::new(),
        })
    }

    pub fn window(&self) -> usize {
        self.window
    }

    /// Decide on the incoming tick and return the order to place.
    pub fn generate_order(&mut self, tick: &Tick) -> Order {
        let window = self.window;
        let history = self
            .history
            .entry(tick.symbol().to_string())
            .or_insert_with(|| SymbolHistory::with_capacity(window));
        history.record(tick, window);

        let action = if tick.price() > history.mean() {
            OrderAction::Ask
        } else {
            OrderAction::Bid
        };

        Order::new(
            tick.timestamp(),
            tick.symbol(),
            tick.price(),
            action,
            ORDER_QUANTITY,
        )
    }

    /// Prices currently buffered for `symbol`, oldest first.
    pub fn buffered_prices(&self, symbol: &str) -> Vec<f64> {
        self.history
            .get(symbol)
            .map(|h| h.prices.iter().copied().collect())
            .unwrap_or_default()
    }
}

impl SignalSource for StreamingMovingAverage {
    fn name(&self) -> &str {
        "streaming_ma"
    }

    fn signals(&mut self, ticks: &[Tick]) -> Vec<Signal> {
        ticks
            .iter()
            .map(|tick| Signal::from(self.generate_order(tick).action))
            .collect()
    }
}
