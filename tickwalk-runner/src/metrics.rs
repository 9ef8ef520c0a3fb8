//! Performance summary: pure functions over a finished trace.

use serde::{Deserialize, Serialize};
use tickwalk_core::engine::{BacktestTrace, Snapshot};

/// Headline numbers reported after a run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerformanceSummary {
    pub initial_equity: f64,
    pub final_equity: f64,
    /// Percent, e.g. `2.5` for +2.5%.
    pub total_return_pct: f64,
    pub final_position: f64,
    pub final_cash: f64,
    /// Steps at which the position changed.
    pub trade_count: usize,
    /// Largest peak-to-trough equity decline, as a positive percent of the peak.
    pub max_drawdown_pct: f64,
    pub start_price: f64,
    pub end_price: f64,
}

impl PerformanceSummary {
    pub fn compute(trace: &BacktestTrace, initial_cash: f64) -> Self {
        let snaps = trace.snapshots();
        let final_equity = trace.final_equity().unwrap_or(initial_cash);
        let last = trace.last();
        Self {
            initial_equity: initial_cash,
            final_equity,
            total_return_pct: total_return_pct(initial_cash, final_equity),
            final_position: last.map_or(0.0, |s| s.position),
            final_cash: last.map_or(initial_cash, |s| s.cash),
            trade_count: trade_count(snaps),
            max_drawdown_pct: max_drawdown_pct(&trace.equity_curve()),
            start_price: trace.first().map_or(0.0, |s| s.price),
            end_price: last.map_or(0.0, |s| s.price),
        }
    }
}

// ─── Individual metric functions ────────────────────────────────────

/// `(final - initial) / initial * 100`, or 0 when `initial` is 0.
pub fn total_return_pct(initial: f64, final_equity: f64) -> f64 {
    if initial == 0.0 {
        return 0.0;
    }
    (final_equity - initial) / initial * 100.0
}

pub fn trade_count(snapshots: &[Snapshot]) -> usize {
    snapshots
        .windows(2)
        .filter(|pair| pair[1].position != pair[0].position)
        .count()
}

/// Maximum drawdown as a positive percentage.
///
/// Peaks that are not positive are skipped, so an account that starts at or
/// below zero reports 0.
pub fn max_drawdown_pct(equity_curve: &[f64]) -> f64 {
    let Some(&first) = equity_curve.first() else {
        return 0.0;
    };
    let mut peak = first;
    let mut max_dd = 0.0_f64;

    for &eq in equity_curve {
        if eq > peak {
            peak = eq;
        }
        if peak > 0.0 {
            let dd = (peak - eq) / peak;
            if dd > max_dd {
                max_dd = dd;
            }
        }
    }
    max_dd * 100.0
}
