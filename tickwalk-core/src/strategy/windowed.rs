//! Windowed moving average, batch mode.
//!
//! Compares each price with the mean of the `window` prices strictly before it.
//! Above the mean is a Buy, below is a Sell, exactly equal is a Hold. The first
//! `window` positions have no full history and always Hold.

use super::{check_window, SignalSource};
use crate::domain::{Signal, Tick};
use crate::error::Result;

#[derive(Debug, Clone)]
pub struct WindowedMovingAverage {
    window: usize,
}

impl WindowedMovingAverage {
    pub fn new(window: usize) -> Result<Self> {
        Ok(Self {
            window: check_window(window)?,
        })
    }

    pub fn window(&self) -> usize {
        self.window
    }

    /// Signals for a bare price slice. Output is index-aligned with `prices`.
    pub fn compute(&self, prices: &[f64]) -> Vec<Signal> {
        prices
            .iter()
            .enumerate()
            .map(|(i, &price)| {
                if i < self.window {
                    return Signal::Hold;
                }
                let trailing = &prices[i - self.window..i];
                let mean = trailing.iter().sum::<f64>() / self.window as f64;
                if price > mean {
                    Signal::Buy
                } else if price < mean {
                    Signal::Sell
                } else {
                    Signal::Hold
                }
            })
            .collect()
    }
}

impl SignalSource for WindowedMovingAverage {
    fn name(&self) -> &str {
        "windowed_ma"
    }

    fn signals(&mut self, ticks: &[Tick]) -> Vec<Signal> {
        let prices: Vec<f64> = ticks.iter().map(Tick::price).collect();
        self.compute(&prices)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CoreError;

    fn ints(signals: &[Signal]) -> Vec<i8> {
        signals.iter().map(Signal::as_i8).collect()
    }

    #[test]
    fn rejects_zero_window() {
        assert!(matches!(
            WindowedMovingAverage::new(0),
            Err(CoreError::InvalidArgument(_))
        ));
    }

    #[test]
    fn not_enough_data_holds() {
        let s = WindowedMovingAverage::new(5).unwrap();
        assert_eq!(ints(&s.compute(&[100.0, 101.0, 102.0])), vec![0, 0, 0]);
    }

    #[test]
    fn first_window_positions_hold() {
        let s = WindowedMovingAverage::new(5).unwrap();
        let prices: Vec<f64> = (0..10).map(|i| 100.0 + i as f64).collect();
        let sig = s.compute(&prices);
        assert!(sig[..5].iter().all(|&x| x == Signal::Hold));
        assert!(sig[5..].iter().all(|&x| x == Signal::Buy));
    }

    #[test]
    fn buy_when_above_mean() {
        let s = WindowedMovingAverage::new(3).unwrap();
        assert_eq!(
            ints(&s.compute(&[100.0, 100.0, 100.0, 110.0])),
            vec![0, 0, 0, 1]
        );
    }

    #[test]
    fn sell_when_below_mean() {
        let s = WindowedMovingAverage::new(3).unwrap();
        assert_eq!(ints(&s.compute(&[100.0, 100.0, 100.0, 90.0]))[3], -1);
    }

    #[test]
    fn hold_on_exact_equality() {
        let s = WindowedMovingAverage::new(2).unwrap();
        assert_eq!(ints(&s.compute(&[100.0, 100.0, 100.0])), vec![0, 0, 0]);
        let s3 = WindowedMovingAverage::new(3).unwrap();
        assert_eq!(ints(&s3.compute(&[100.0, 100.0, 100.0, 100.0]))[3], 0);
    }

    #[test]
    fn window_excludes_current_price() {
        // mean(prices[1..4]) = (100 + 102 + 104) / 3 = 102, current = 103 → Buy
        let s = WindowedMovingAverage::new(3).unwrap();
        let sig = s.compute(&[200.0, 100.0, 102.0, 104.0, 103.0]);
        assert_eq!(sig[4], Signal::Buy);
    }

    #[test]
    fn window_of_one_tracks_previous_price() {
        let s = WindowedMovingAverage::new(1).unwrap();
        assert_eq!(
            ints(&s.compute(&[100.0, 101.0, 100.5, 102.0])),
            vec![0, 1, -1, 1]
        );
    }

    #[test]
    fn decreasing_trend_sells() {
        let s = WindowedMovingAverage::new(5).unwrap();
        let prices: Vec<f64> = (0..30).map(|i| 200.0 - i as f64).collect();
        let sig = s.compute(&prices);
        assert!(sig[5..].iter().all(|&x| x == Signal::Sell));
    }

    #[test]
    fn flat_prices_hold_everywhere() {
        let s = WindowedMovingAverage::new(5).unwrap();
        assert!(s.compute(&[42.5; 40]).iter().all(|&x| x == Signal::Hold));
    }

    #[test]
    fn empty_input_empty_output() {
        let s = WindowedMovingAverage::new(3).unwrap();
        assert!(s.compute(&[]).is_empty());
    }
}
