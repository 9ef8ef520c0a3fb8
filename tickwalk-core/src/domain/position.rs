use serde::{Deserialize, Serialize};

/// Per-symbol holding tracked by the portfolio.
///
/// `quantity` is signed: positive is long, negative is short. `pnl` is the
/// running sum of cash flows from every order on this symbol.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub symbol: String,
    pub quantity: f64,
    pub pnl: f64,
}

impl Position {
    pub fn new(symbol: impl Into<String>, quantity: f64, pnl: f64) -> Self {
        Self {
            symbol: symbol.into(),
            quantity,
            pnl,
        }
    }

    /// An empty position, as created lazily on the first order for a symbol.
    pub fn flat(symbol: impl Into<String>) -> Self {
        Self::new(symbol, 0.0, 0.0)
    }

    pub fn market_value(&self, current_price: f64) -> f64 {
        self.quantity * current_price
    }
}
