//! Artifact export: trace CSV, summary JSON, and the replayable tick file.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::SecondsFormat;
use tracing::info;

use tickwalk_core::data::write_ticks_csv;
use tickwalk_core::engine::BacktestTrace;

use crate::metrics::PerformanceSummary;
use crate::runner::RunOutcome;

pub const TRACE_CSV_HEADER: [&str; 5] = ["timestamp", "price", "cash", "position", "equity"];

// ─── CSV export ─────────────────────────────────────────────────────

/// Export the per-step trace.
///
/// Columns: timestamp, price, cash, position, equity
pub fn trace_to_csv(trace: &BacktestTrace) -> Result<String> {
    let mut wtr = csv::Writer::from_writer(vec![]);
    wtr.write_record(TRACE_CSV_HEADER)?;
    for s in trace.snapshots() {
        wtr.write_record([
            &s.timestamp.to_rfc3339_opts(SecondsFormat::Micros, true),
            &format!("{:.2}", s.price),
            &format!("{:.2}", s.cash),
            &s.position.to_string(),
            &format!("{:.2}", s.equity),
        ])?;
    }
    let data = wtr.into_inner().context("failed to flush CSV writer")?;
    String::from_utf8(data).context("CSV output is not valid UTF-8")
}

// ─── JSON export ────────────────────────────────────────────────────

pub fn summary_to_json(summary: &PerformanceSummary) -> Result<String> {
    serde_json::to_string_pretty(summary).context("failed to serialize summary to JSON")
}

// ─── Artifact bundle ────────────────────────────────────────────────

/// Save the artifact set for a run into `output_dir` (created if missing):
/// - `trace.csv`: one row per tick
/// - `summary.json`: the performance summary
/// - `ticks.csv`: the input ticks, replayable with `--prices`
///
/// Returns `output_dir`.
pub fn save_artifacts(outcome: &RunOutcome, output_dir: &Path) -> Result<PathBuf> {
    std::fs::create_dir_all(output_dir)
        .with_context(|| format!("failed to create artifact dir: {}", output_dir.display()))?;

    let trace_path = output_dir.join("trace.csv");
    std::fs::write(&trace_path, trace_to_csv(&outcome.trace)?)
        .with_context(|| format!("failed to write {}", trace_path.display()))?;

    let summary_path = output_dir.join("summary.json");
    std::fs::write(&summary_path, summary_to_json(&outcome.summary)?)
        .with_context(|| format!("failed to write {}", summary_path.display()))?;

    let ticks_path = output_dir.join("ticks.csv");
    write_ticks_csv(&ticks_path, &outcome.ticks)
        .with_context(|| format!("failed to write {}", ticks_path.display()))?;

    info!(dir = %output_dir.display(), "saved artifacts");
    Ok(output_dir.to_path_buf())
}
