//! Integration tests for the driver wired to real strategies and sinks.

use tickwalk_core::broker::{Broker, OrderSink, Portfolio};
use tickwalk_core::data::{load_prices, WalkParams};
use tickwalk_core::domain::{ticks_from_prices, Signal};
use tickwalk_core::engine::Backtester;
use tickwalk_core::strategy::{SignalSource, StreamingMovingAverage, WindowedMovingAverage};

fn seeded_ticks(n: usize) -> Vec<tickwalk_core::Tick> {
    load_prices(
        WalkParams::new("AAPL", 150.0).with_volatility(0.02).with_seed(7),
        n,
    )
    .unwrap()
}

#[test]
fn windowed_run_over_generated_prices() {
    let ticks = seeded_ticks(100);
    let mut strategy = WindowedMovingAverage::new(5).unwrap();
    let mut broker = Broker::new(10_000.0);
    let trace = Backtester::new(&mut strategy, &mut broker)
        .run(&ticks)
        .unwrap();

    assert_eq!(trace.len(), 100);
    // No trade can happen before the signal at index `window` is executed.
    assert!(trace.head(6).iter().all(|s| s.position == 0.0));
    let last = trace.snapshots().last().unwrap();
    assert_eq!(last.cash, broker.cash);
    assert_eq!(last.position, broker.position);
}

#[test]
fn trace_positions_follow_lagged_signals() {
    let ticks = seeded_ticks(60);
    let mut reference = WindowedMovingAverage::new(4).unwrap();
    let signals = reference.signals(&ticks);

    let mut strategy = WindowedMovingAverage::new(4).unwrap();
    let mut broker = Broker::new(10_000.0);
    let trace = Backtester::new(&mut strategy, &mut broker)
        .run(&ticks)
        .unwrap();

    let mut expected = 0.0;
    for (i, snap) in trace.snapshots().iter().enumerate() {
        if i > 0 {
            expected += f64::from(signals[i - 1].as_i8());
        }
        assert_eq!(snap.position, expected, "step {i}");
    }
}

#[test]
fn same_seed_same_trace() {
    let run = || {
        let ticks = seeded_ticks(50);
        let mut strategy = WindowedMovingAverage::new(3).unwrap();
        let mut broker = Broker::new(10_000.0);
        let trace = Backtester::new(&mut strategy, &mut broker)
            .run(&ticks)
            .unwrap();
        let rows: Vec<(f64, f64, f64)> = trace
            .snapshots()
            .iter()
            .map(|s| (s.price, s.cash, s.position))
            .collect();
        rows
    };
    assert_eq!(run(), run());
}

#[test]
fn streaming_strategy_trades_every_step() {
    let ticks = ticks_from_prices("AAPL", &[100.0, 101.0, 99.0, 102.0, 98.0]);
    let mut strategy = StreamingMovingAverage::new(3).unwrap();
    let mut portfolio = Portfolio::new(10_000.0);
    let trace = Backtester::new(&mut strategy, &mut portfolio)
        .run(&ticks)
        .unwrap();

    assert_eq!(trace.len(), 5);
    // One order per step after the first.
    assert_eq!(portfolio.order_history().len(), 4);
    assert_eq!(
        trace.final_equity().unwrap(),
        portfolio.cash() + portfolio.position("AAPL").unwrap().quantity * 98.0
    );
}

#[test]
fn boxed_sink_and_strategy() {
    let ticks = ticks_from_prices("X", &[10.0, 10.0, 10.0]);
    let mut strategy: Box<dyn SignalSource> = Box::new(WindowedMovingAverage::new(1).unwrap());
    let mut sink: Box<dyn OrderSink> = Box::new(Broker::new(100.0));
    let trace = Backtester::new(&mut strategy, &mut sink).run(&ticks).unwrap();
    // Flat prices never leave Hold.
    assert!(trace.snapshots().iter().all(|s| s.position == 0.0));
    assert_eq!(sink.cash(), 100.0);
}

#[test]
fn hold_signal_never_trades() {
    assert_eq!(Signal::Hold.action(), None);
}
