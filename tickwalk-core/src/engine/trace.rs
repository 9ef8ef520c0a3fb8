//! Per-step record of a backtest run.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Account state after one driver step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub timestamp: DateTime<Utc>,
    pub price: f64,
    pub cash: f64,
    pub position: f64,
    /// `cash + position * price`
    pub equity: f64,
}

impl Snapshot {
    pub fn new(timestamp: DateTime<Utc>, price: f64, cash: f64, position: f64) -> Self {
        Self {
            timestamp,
            price,
            cash,
            position,
            equity: cash + position * price,
        }
    }
}

/// Ordered snapshots, one per input tick and index-aligned with it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BacktestTrace {
    snapshots: Vec<Snapshot>,
}

impl BacktestTrace {
    pub fn with_capacity(n: usize) -> Self {
        Self {
            snapshots: Vec::with_capacity(n),
        }
    }

    pub(crate) fn push(&mut self, snapshot: Snapshot) {
        self.snapshots.push(snapshot);
    }

    pub fn snapshots(&self) -> &[Snapshot] {
        &self.snapshots
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    pub fn first(&self) -> Option<&Snapshot> {
        self.snapshots.first()
    }

    pub fn last(&self) -> Option<&Snapshot> {
        self.snapshots.last()
    }

    /// Equity after the last step, or `None` for an empty run.
    pub fn final_equity(&self) -> Option<f64> {
        self.last().map(|s| s.equity)
    }

    pub fn equity_curve(&self) -> Vec<f64> {
        self.snapshots.iter().map(|s| s.equity).collect()
    }

    /// Up to the first `n` snapshots.
    pub fn head(&self, n: usize) -> &[Snapshot] {
        &self.snapshots[..n.min(self.snapshots.len())]
    }

    /// Up to the last `n` snapshots.
    pub fn tail(&self, n: usize) -> &[Snapshot] {
        let start = self.snapshots.len().saturating_sub(n);
        &self.snapshots[start..]
    }
}
