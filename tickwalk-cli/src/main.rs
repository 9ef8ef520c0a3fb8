//! TickWalk CLI: generate synthetic prices and run moving-average backtests.
//!
//! Commands:
//! - `generate`: write a random-walk market CSV
//! - `run`: execute a backtest from a TOML config (or defaults), optionally on a saved price file

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::time::Duration;
use tracing::info;

use tickwalk_core::data::{read_market_csv, write_market_csv, WalkParams};
use tickwalk_core::engine::Snapshot;
use tickwalk_runner::{
    init_logging, run_backtest, run_backtest_on_ticks, save_artifacts, BacktestConfig, RunOutcome,
};

/// Rows shown from each end of the trace.
const PREVIEW_ROWS: usize = 10;

#[derive(Parser)]
#[command(
    name = "tickwalk",
    about = "TickWalk CLI: random-walk prices and moving-average backtests"
)]
struct Cli {
    /// Log level (overridden by RUST_LOG).
    #[arg(long, global = true, default_value = "info")]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a synthetic random-walk price file.
    Generate {
        #[arg(long, default_value = "AAPL")]
        symbol: String,

        #[arg(long, default_value_t = 100.0)]
        start_price: f64,

        /// Standard deviation of each step's return.
        #[arg(long, default_value_t = 0.01)]
        volatility: f64,

        #[arg(long, default_value_t = 100)]
        num_ticks: usize,

        /// Seconds to wait between ticks.
        #[arg(long, default_value_t = 0.0)]
        interval: f64,

        /// Seed for a reproducible path.
        #[arg(long)]
        seed: Option<u64>,

        #[arg(long, default_value = "market_data.csv")]
        output: PathBuf,
    },
    /// Run a backtest and print the trace and performance summary.
    Run {
        /// Path to a TOML config file. Defaults apply when omitted.
        #[arg(long)]
        config: Option<PathBuf>,

        /// Replay prices from a market CSV instead of generating them.
        #[arg(long)]
        prices: Option<PathBuf>,

        /// Save trace.csv, summary.json, and ticks.csv here.
        #[arg(long)]
        output_dir: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli.log_level)?;

    match cli.command {
        Commands::Generate {
            symbol,
            start_price,
            volatility,
            num_ticks,
            interval,
            seed,
            output,
        } => run_generate(
            symbol,
            start_price,
            volatility,
            num_ticks,
            interval,
            seed,
            output,
        ),
        Commands::Run {
            config,
            prices,
            output_dir,
        } => run_backtest_cmd(config, prices, output_dir),
    }
}

fn run_generate(
    symbol: String,
    start_price: f64,
    volatility: f64,
    num_ticks: usize,
    interval: f64,
    seed: Option<u64>,
    output: PathBuf,
) -> Result<()> {
    let mut params = WalkParams::new(symbol, start_price)
        .with_volatility(volatility)
        .with_interval(parse_interval(interval)?);
    if let Some(seed) = seed {
        params = params.with_seed(seed);
    }

    let rows = write_market_csv(&output, params, num_ticks)
        .with_context(|| format!("failed to write {}", output.display()))?;
    info!(rows, path = %output.display(), "generated market data");
    println!("Wrote {rows} ticks to {}", output.display());
    Ok(())
}

fn parse_interval(secs: f64) -> Result<Duration> {
    match Duration::try_from_secs_f64(secs) {
        Ok(d) => Ok(d),
        Err(e) => bail!("--interval must be a non-negative number of seconds, got {secs}: {e}"),
    }
}

fn run_backtest_cmd(
    config_path: Option<PathBuf>,
    prices: Option<PathBuf>,
    output_dir: Option<PathBuf>,
) -> Result<()> {
    let config = match config_path {
        Some(path) => BacktestConfig::from_file(&path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => BacktestConfig::default(),
    };

    let outcome = match prices {
        Some(path) => {
            let ticks = read_market_csv(&path)
                .with_context(|| format!("failed to read prices from {}", path.display()))?;
            run_backtest_on_ticks(&config, ticks)?
        }
        None => run_backtest(&config)?,
    };

    print_report(&outcome);

    if let Some(dir) = output_dir {
        let run_dir = save_artifacts(&outcome, &dir)?;
        println!("Artifacts saved to: {}", run_dir.display());
    }
    Ok(())
}

fn print_report(outcome: &RunOutcome) {
    let rule = "=".repeat(60);
    let symbol = outcome
        .ticks
        .first()
        .map_or(outcome.config.market.symbol.as_str(), |t| t.symbol());

    println!("{rule}");
    println!("Running Backtest for {symbol}");
    println!("{rule}");
    println!();
    println!("Price points:   {}", outcome.ticks.len());
    println!("Starting price: ${:.2}", outcome.summary.start_price);
    println!("Ending price:   ${:.2}", outcome.summary.end_price);
    println!("Strategy:       {} (window {})", outcome.strategy_name, outcome.config.strategy.window);
    println!("Initial cash:   ${:.2}", outcome.config.broker.initial_cash);

    println!();
    println!("{rule}");
    println!("Backtest Results");
    println!("{rule}");
    println!();
    println!("First {PREVIEW_ROWS} rows:");
    print_rows(outcome.trace.head(PREVIEW_ROWS));
    println!();
    println!("Last {PREVIEW_ROWS} rows:");
    print_rows(outcome.trace.tail(PREVIEW_ROWS));

    let s = &outcome.summary;
    println!();
    println!("{rule}");
    println!("Performance Summary");
    println!("{rule}");
    println!("Initial equity: ${:.2}", s.initial_equity);
    println!("Final equity:   ${:.2}", s.final_equity);
    println!("Total return:   {:.2}%", s.total_return_pct);
    println!("Final position: {} shares", s.final_position);
    println!("Final cash:     ${:.2}", s.final_cash);
    println!("Trades:         {}", s.trade_count);
    println!("Max drawdown:   {:.2}%", s.max_drawdown_pct);
    println!();
}

fn print_rows(rows: &[Snapshot]) {
    println!(
        "{:<28} {:>10} {:>12} {:>9} {:>12}",
        "timestamp", "price", "cash", "position", "equity"
    );
    for s in rows {
        println!(
            "{:<28} {:>10.2} {:>12.2} {:>9} {:>12.2}",
            s.timestamp.format("%Y-%m-%d %H:%M:%S%.6f"),
            s.price,
            s.cash,
            s.position,
            s.equity
        );
    }
}
