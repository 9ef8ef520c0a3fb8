//! TickWalk Runner: backtest orchestration, configuration, metrics, export.
//!
//! This crate builds on `tickwalk-core` to provide:
//! - TOML configuration with defaults and validation
//! - Single-run orchestration (generate or replay ticks, run, summarize)
//! - Performance summary (return, drawdown, trade count)
//! - Artifact export (trace CSV, summary JSON, tick CSV)
//! - Logging setup

pub mod config;
pub mod export;
pub mod logging;
pub mod metrics;
pub mod runner;

pub use config::{BacktestConfig, BrokerKind, ConfigError, StrategyKind};
pub use export::{save_artifacts, summary_to_json, trace_to_csv};
pub use logging::init_logging;
pub use metrics::PerformanceSummary;
pub use runner::{run_backtest, run_backtest_on_ticks, RunError, RunOutcome};
