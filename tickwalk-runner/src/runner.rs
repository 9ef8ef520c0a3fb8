//! Backtest runner: wires config, price source, strategy, sink, and metrics.
//!
//! Two entry points:
//! - `run_backtest()`: generates ticks from the `[market]` table, then runs.
//! - `run_backtest_on_ticks()`: runs over an already-loaded tick series.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

use tickwalk_core::broker::{Broker, OrderSink, Portfolio};
use tickwalk_core::data::load_prices;
use tickwalk_core::domain::Tick;
use tickwalk_core::engine::{BacktestTrace, Backtester};
use tickwalk_core::error::CoreError;
use tickwalk_core::strategy::{SignalSource, StreamingMovingAverage, WindowedMovingAverage};

use crate::config::{BacktestConfig, BrokerKind, ConfigError, StrategyKind};
use crate::metrics::PerformanceSummary;

/// Errors from the runner.
#[derive(Debug, Error)]
pub enum RunError {
    #[error("config error: {0}")]
    Config(#[from] ConfigError),
    #[error("backtest error: {0}")]
    Core(#[from] CoreError),
    #[error("no ticks to run on")]
    NoTicks,
}

/// Complete result of a single backtest run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunOutcome {
    pub config: BacktestConfig,
    pub strategy_name: String,
    pub ticks: Vec<Tick>,
    pub trace: BacktestTrace,
    pub summary: PerformanceSummary,
}

/// Generate ticks from the config's market parameters and run a backtest.
pub fn run_backtest(config: &BacktestConfig) -> Result<RunOutcome, RunError> {
    config.validate()?;
    let ticks = load_prices(config.walk_params()?, config.market.num_ticks)?;
    run_backtest_on_ticks(config, ticks)
}

/// Run a backtest over `ticks`, ignoring the config's `[market]` generator settings.
pub fn run_backtest_on_ticks(
    config: &BacktestConfig,
    ticks: Vec<Tick>,
) -> Result<RunOutcome, RunError> {
    config.validate()?;
    let Some(first) = ticks.first() else {
        return Err(RunError::NoTicks);
    };
    info!(
        symbol = first.symbol(),
        ticks = ticks.len(),
        strategy = ?config.strategy.kind,
        broker = ?config.broker.kind,
        "starting backtest"
    );

    let mut strategy = build_strategy(config)?;
    let mut sink = build_sink(config);
    let trace = Backtester::new(strategy.as_mut(), sink.as_mut()).run(&ticks)?;
    let summary = PerformanceSummary::compute(&trace, config.broker.initial_cash);

    info!(
        final_equity = summary.final_equity,
        total_return_pct = summary.total_return_pct,
        trades = summary.trade_count,
        "backtest finished"
    );

    Ok(RunOutcome {
        config: config.clone(),
        strategy_name: strategy.name().to_string(),
        ticks,
        trace,
        summary,
    })
}

fn build_strategy(config: &BacktestConfig) -> Result<Box<dyn SignalSource>, CoreError> {
    let window = config.strategy.window;
    Ok(match config.strategy.kind {
        StrategyKind::Windowed => Box::new(WindowedMovingAverage::new(window)?),
        StrategyKind::Streaming => Box::new(StreamingMovingAverage::new(window)?),
    })
}

fn build_sink(config: &BacktestConfig) -> Box<dyn OrderSink> {
    let cash = config.broker.initial_cash;
    match config.broker.kind {
        BrokerKind::Simple => Box::new(Broker::new(cash)),
        BrokerKind::Portfolio => Box::new(Portfolio::new(cash)),
    }
}
