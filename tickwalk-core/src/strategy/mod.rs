//! Signal generation: moving-average strategies behind one trait.
//!
//! Strategies see prices only, never cash or positions. The driver asks a
//! `SignalSource` for the full aligned signal vector once, then applies it with
//! a one-step lag.

pub mod streaming;
pub mod windowed;

pub use streaming::StreamingMovingAverage;
pub use windowed::WindowedMovingAverage;

use crate::domain::{Signal, Tick};
use crate::error::{CoreError, Result};

/// Anything that turns a price history into index-aligned trade decisions.
pub trait SignalSource {
    /// Human-readable name (e.g., "windowed_ma").
    fn name(&self) -> &str;

    /// One signal per tick, same length and order as `ticks`.
    fn signals(&mut self, ticks: &[Tick]) -> Vec<Signal>;
}

impl<S: SignalSource + ?Sized> SignalSource for Box<S> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn signals(&mut self, ticks: &[Tick]) -> Vec<Signal> {
        (**self).signals(ticks)
    }
}

/// Fixed signal vector, replayed as-is. Useful for scripted scenarios.
#[derive(Debug, Clone)]
pub struct ScriptedSignals {
    signals: Vec<Signal>,
}

impl ScriptedSignals {
    pub fn new(signals: Vec<Signal>) -> Self {
        Self { signals }
    }

    /// Build from the `-1 / 0 / +1` integer encoding.
    pub fn from_ints(values: &[i8]) -> Result<Self> {
        let signals = values
            .iter()
            .map(|&v| Signal::try_from(v))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self::new(signals))
    }
}

impl SignalSource for ScriptedSignals {
    fn name(&self) -> &str {
        "scripted"
    }

    fn signals(&mut self, _ticks: &[Tick]) -> Vec<Signal> {
        self.signals.clone()
    }
}

pub(crate) fn check_window(window: usize) -> Result<usize> {
    if window == 0 {
        return Err(CoreError::invalid("window must be a positive integer"));
    }
    Ok(window)
}
