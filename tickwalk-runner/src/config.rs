//! Serializable backtest configuration.
//!
//! Loaded from TOML with three tables, `[market]`, `[strategy]`, and
//! `[broker]`. Every field has a default, so an empty document is a valid
//! config describing the stock demo run.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use tickwalk_core::data::WalkParams;

/// Errors from loading or validating a config.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config TOML: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Full configuration for one backtest run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BacktestConfig {
    pub market: MarketConfig,
    pub strategy: StrategyConfig,
    pub broker: BrokerConfig,
}

/// Synthetic market parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MarketConfig {
    pub symbol: String,
    pub start_price: f64,
    pub volatility: f64,
    pub num_ticks: usize,
    /// Seconds to sleep between generated ticks.
    pub interval_secs: f64,
    pub seed: Option<u64>,
}

impl Default for MarketConfig {
    fn default() -> Self {
        Self {
            symbol: "AAPL".into(),
            start_price: 150.0,
            volatility: 0.02,
            num_ticks: 100,
            interval_secs: 0.0,
            seed: None,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StrategyKind {
    #[default]
    Windowed,
    Streaming,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StrategyConfig {
    pub kind: StrategyKind,
    pub window: usize,
}

impl Default for StrategyConfig {
    fn default() -> Self {
        Self {
            kind: StrategyKind::Windowed,
            window: 5,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BrokerKind {
    #[default]
    Simple,
    Portfolio,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BrokerConfig {
    pub kind: BrokerKind,
    pub initial_cash: f64,
}

impl Default for BrokerConfig {
    fn default() -> Self {
        Self {
            kind: BrokerKind::Simple,
            initial_cash: 10_000.0,
        }
    }
}

impl BacktestConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse, and validate a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let m = &self.market;
        if m.symbol.trim().is_empty() {
            return Err(invalid("market.symbol must not be empty"));
        }
        if !m.start_price.is_finite() || m.start_price <= 0.0 {
            return Err(invalid(format!(
                "market.start_price must be positive, got {}",
                m.start_price
            )));
        }
        if !m.volatility.is_finite() || m.volatility < 0.0 {
            return Err(invalid(format!(
                "market.volatility must be non-negative, got {}",
                m.volatility
            )));
        }
        if m.num_ticks == 0 {
            return Err(invalid("market.num_ticks must be positive"));
        }
        self.tick_interval()?;
        if self.strategy.window == 0 {
            return Err(invalid("strategy.window must be positive"));
        }
        if !self.broker.initial_cash.is_finite() {
            return Err(invalid("broker.initial_cash must be finite"));
        }
        Ok(())
    }

    /// Random-walk parameters for the `[market]` table.
    pub fn walk_params(&self) -> Result<WalkParams, ConfigError> {
        let m = &self.market;
        let mut params = WalkParams::new(m.symbol.clone(), m.start_price)
            .with_volatility(m.volatility)
            .with_interval(self.tick_interval()?);
        if let Some(seed) = m.seed {
            params = params.with_seed(seed);
        }
        Ok(params)
    }

    /// `market.interval_secs` as a `Duration`. Negative, non-finite, and
    /// out-of-range values are rejected.
    fn tick_interval(&self) -> Result<Duration, ConfigError> {
        let secs = self.market.interval_secs;
        Duration::try_from_secs_f64(secs).map_err(|e| {
            invalid(format!(
                "market.interval_secs must be a non-negative number of seconds, got {secs}: {e}"
            ))
        })
    }
}

fn invalid(msg: impl Into<String>) -> ConfigError {
    ConfigError::Invalid(msg.into())
}
