//! Random-walk price source.
//!
//! Each step multiplies the previous price by `1 + N(0, volatility)`, rounds to
//! cents, and clamps to a one-cent floor so the walk never reaches zero. The
//! walk is an infinite iterator: take a prefix to get a finite series.

use std::thread;
use std::time::Duration;

use chrono::{DateTime, SubsecRound, Utc};
use rand::rngs::StdRng;
use rand_distr::{Distribution, Normal};
use tracing::warn;

use crate::domain::Tick;
use crate::error::{CoreError, Result};
use crate::rng::rng_for;

/// Smallest price the walk may emit.
pub const PRICE_FLOOR: f64 = 0.01;

/// Parameters for a random walk.
#[derive(Debug, Clone, PartialEq)]
pub struct WalkParams {
    pub symbol: String,
    pub start_price: f64,
    /// Standard deviation of the per-step multiplicative return.
    pub volatility: f64,
    /// Pause between ticks. Zero disables sleeping.
    pub interval: Duration,
    /// Master seed for reproducible paths. `None` draws from OS entropy.
    pub seed: Option<u64>,
}

impl WalkParams {
    pub fn new(symbol: impl Into<String>, start_price: f64) -> Self {
        Self {
            symbol: symbol.into(),
            start_price,
            volatility: 0.01,
            interval: Duration::ZERO,
            seed: None,
        }
    }

    pub fn with_volatility(mut self, volatility: f64) -> Self {
        self.volatility = volatility;
        self
    }

    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.symbol.trim().is_empty() {
            return Err(CoreError::invalid("symbol must not be empty"));
        }
        if !self.start_price.is_finite() || self.start_price <= 0.0 {
            return Err(CoreError::invalid(format!(
                "start_price must be positive, got {}",
                self.start_price
            )));
        }
        if !self.volatility.is_finite() || self.volatility < 0.0 {
            return Err(CoreError::invalid(format!(
                "volatility must be non-negative, got {}",
                self.volatility
            )));
        }
        Ok(())
    }
}

/// Infinite, non-restartable stream of ticks following a random walk.
#[derive(Debug)]
pub struct RandomWalk {
    symbol: String,
    price: f64,
    interval: Duration,
    rng: StdRng,
    noise: Normal<f64>,
    last_timestamp: Option<DateTime<Utc>>,
}

impl RandomWalk {
    pub fn new(params: WalkParams) -> Result<Self> {
        params.validate()?;
        let noise = Normal::new(0.0, params.volatility)
            .map_err(|e| CoreError::invalid(format!("volatility {}: {e}", params.volatility)))?;
        let rng = rng_for(params.seed, &params.symbol);
        Ok(Self {
            symbol: params.symbol,
            price: params.start_price,
            interval: params.interval,
            rng,
            noise,
            last_timestamp: None,
        })
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// Most recently emitted price (the start price before the first tick).
    pub fn last_price(&self) -> f64 {
        self.price
    }

    fn step_price(&mut self) -> f64 {
        let shock = self.noise.sample(&mut self.rng);
        let next = round_cents(self.price * (1.0 + shock));
        if !next.is_finite() {
            warn!(symbol = %self.symbol, raw = next, "price overflowed, holding previous");
            self.price
        } else if next < PRICE_FLOOR {
            warn!(symbol = %self.symbol, raw = next, "price clamped to floor");
            PRICE_FLOOR
        } else {
            next
        }
    }

    // Microsecond resolution, strictly increasing even when the wall clock has not moved.
    fn step_timestamp(&mut self) -> DateTime<Utc> {
        let now = Utc::now().trunc_subsecs(6);
        let ts = match self.last_timestamp {
            Some(prev) if now <= prev => prev + chrono::Duration::microseconds(1),
            _ => now,
        };
        self.last_timestamp = Some(ts);
        ts
    }
}

impl Iterator for RandomWalk {
    type Item = Tick;

    fn next(&mut self) -> Option<Tick> {
        if !self.interval.is_zero() && self.last_timestamp.is_some() {
            thread::sleep(self.interval);
        }
        self.price = self.step_price();
        let timestamp = self.step_timestamp();
        Some(Tick::new(timestamp, self.symbol.clone(), self.price))
    }
}

/// Take the first `num_ticks` ticks of a fresh walk.
pub fn load_prices(params: WalkParams, num_ticks: usize) -> Result<Vec<Tick>> {
    if num_ticks == 0 {
        return Err(CoreError::invalid("num_ticks must be positive"));
    }
    Ok(RandomWalk::new(params)?.take(num_ticks).collect())
}

/// Prices too large to scale by 100 are already coarser than a cent.
pub(crate) fn round_cents(price: f64) -> f64 {
    let scaled = price * 100.0;
    if scaled.is_finite() {
        scaled.round() / 100.0
    } else {
        price
    }
}
