//! Integration tests for the runner: TOML configs through to summaries.

use tickwalk_core::data::{read_market_csv, write_market_csv};
use tickwalk_runner::config::{BacktestConfig, BrokerKind, StrategyKind};
use tickwalk_runner::runner::{run_backtest, run_backtest_on_ticks};

fn config(kind: &str, broker: &str) -> BacktestConfig {
    let toml_str = format!(
        r#"[market]
symbol = "SPY"
start_price = 450.0
volatility = 0.01
num_ticks = 120
seed = 2024

[strategy]
kind = "{kind}"
window = 10

[broker]
kind = "{broker}"
initial_cash = 100000.0
"#
    );
    BacktestConfig::from_toml(&toml_str).unwrap()
}

#[test]
fn every_combination_runs() {
    for kind in ["windowed", "streaming"] {
        for broker in ["simple", "portfolio"] {
            let outcome = run_backtest(&config(kind, broker)).unwrap();
            assert_eq!(outcome.trace.len(), 120, "{kind}/{broker}");
            assert!(outcome.ticks.iter().all(|t| t.symbol() == "SPY"));
            let s = &outcome.summary;
            assert_eq!(s.initial_equity, 100_000.0);
            let expected = s.final_cash + s.final_position * s.end_price;
            assert!((s.final_equity - expected).abs() < 1e-6);
            assert!(s.max_drawdown_pct >= 0.0);
        }
    }
}

#[test]
fn sinks_produce_identical_traces() {
    let simple = run_backtest(&config("windowed", "simple")).unwrap();
    let portfolio = run_backtest(&config("windowed", "portfolio")).unwrap();
    assert_eq!(simple.config.broker.kind, BrokerKind::Simple);
    assert_eq!(portfolio.config.broker.kind, BrokerKind::Portfolio);
    assert_eq!(simple.trace, portfolio.trace);
}

#[test]
fn windowed_holds_during_warmup() {
    let outcome = run_backtest(&config("windowed", "simple")).unwrap();
    assert_eq!(outcome.config.strategy.kind, StrategyKind::Windowed);
    assert!(outcome.trace.head(11).iter().all(|s| s.position == 0.0));
}

#[test]
fn replayed_price_file_matches_generated_run() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("spy.csv");
    let cfg = config("windowed", "simple");
    write_market_csv(&path, cfg.walk_params().unwrap(), cfg.market.num_ticks).unwrap();

    let replayed = run_backtest_on_ticks(&cfg, read_market_csv(&path).unwrap()).unwrap();
    let generated = run_backtest(&cfg).unwrap();
    let prices = |o: &tickwalk_runner::RunOutcome| -> Vec<f64> {
        o.ticks.iter().map(|t| t.price()).collect()
    };
    assert_eq!(prices(&replayed), prices(&generated));
    assert_eq!(replayed.summary.final_equity, generated.summary.final_equity);
}
