//! Tick, the fundamental market data unit.

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{CoreError, Result};

/// One timestamped price observation for a single symbol.
///
/// Fields are private: a tick never changes after construction. Equality is
/// structural over all three fields. Deserialized ticks go through the same
/// price check as [`Tick::try_new`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawTick")]
pub struct Tick {
    timestamp: DateTime<Utc>,
    symbol: String,
    price: f64,
}

impl Tick {
    pub fn new(timestamp: DateTime<Utc>, symbol: impl Into<String>, price: f64) -> Self {
        Self {
            timestamp,
            symbol: symbol.into(),
            price,
        }
    }

    /// Build a tick, rejecting a price that is not strictly positive and finite.
    pub fn try_new(
        timestamp: DateTime<Utc>,
        symbol: impl Into<String>,
        price: f64,
    ) -> Result<Self> {
        if !price.is_finite() || price <= 0.0 {
            return Err(CoreError::invalid(format!(
                "tick price must be positive and finite, got {price}"
            )));
        }
        Ok(Self::new(timestamp, symbol, price))
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    pub fn price(&self) -> f64 {
        self.price
    }
}

#[derive(Deserialize)]
struct RawTick {
    timestamp: DateTime<Utc>,
    symbol: String,
    price: f64,
}

impl TryFrom<RawTick> for Tick {
    type Error = CoreError;

    fn try_from(raw: RawTick) -> Result<Self> {
        Tick::try_new(raw.timestamp, raw.symbol, raw.price)
    }
}

/// Build a daily tick series from bare prices, starting 2025-01-01 UTC.
///
/// Handy for tests and benches where only the price path matters.
pub fn ticks_from_prices(symbol: &str, prices: &[f64]) -> Vec<Tick> {
    let base = Utc
        .with_ymd_and_hms(2025, 1, 1, 0, 0, 0)
        .single()
        .unwrap_or_default();
    prices
        .iter()
        .enumerate()
        .map(|(i, &p)| Tick::new(base + chrono::Duration::days(i as i64), symbol, p))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Tick {
        Tick::new(Utc.with_ymd_and_hms(2025, 1, 1, 12, 0, 0).unwrap(), "AAPL", 150.0)
    }

    #[test]
    fn tick_accessors() {
        let t = sample();
        assert_eq!(t.symbol(), "AAPL");
        assert_eq!(t.price(), 150.0);
        assert_eq!(t.timestamp(), Utc.with_ymd_and_hms(2025, 1, 1, 12, 0, 0).unwrap());
    }

    #[test]
    fn tick_equality_is_structural() {
        assert_eq!(sample(), sample());
        let other = Tick::new(sample().timestamp(), "AAPL", 151.0);
        assert_ne!(sample(), other);
    }

    #[test]
    fn ticks_from_prices_are_daily() {
        let ticks = ticks_from_prices("SPY", &[1.0, 2.0, 3.0]);
        assert_eq!(ticks.len(), 3);
        assert_eq!(
            ticks[1].timestamp() - ticks[0].timestamp(),
            chrono::Duration::days(1)
        );
        assert_eq!(ticks[2].price(), 3.0);
    }

    #[test]
    fn tick_serialization_roundtrip() {
        let t = sample();
        let json = serde_json::to_string(&t).unwrap();
        let deser: Tick = serde_json::from_str(&json).unwrap();
        assert_eq!(t, deser);
    }

    #[test]
    fn try_new_rejects_bad_prices() {
        let ts = sample().timestamp();
        for price in [0.0, -1.0, f64::INFINITY, f64::NAN] {
            assert!(matches!(
                Tick::try_new(ts, "AAPL", price),
                Err(CoreError::InvalidArgument(_))
            ));
        }
        assert_eq!(Tick::try_new(ts, "AAPL", 150.0).unwrap(), sample());
    }

    #[test]
    fn deserialize_rejects_non_positive_price() {
        let json = r#"{"timestamp":"2025-01-01T12:00:00Z","symbol":"AAPL","price":-3.0}"#;
        let err = serde_json::from_str::<Tick>(json).unwrap_err();
        assert!(err.to_string().contains("positive"));

        let zero = r#"{"timestamp":"2025-01-01T12:00:00Z","symbol":"AAPL","price":0.0}"#;
        assert!(serde_json::from_str::<Tick>(zero).is_err());
    }
}
