//! Directional trading decision aligned with a price series.

use super::order::OrderAction;
use crate::error::CoreError;
use serde::{Deserialize, Serialize};

/// Buy, sell, or hold. Integer encoding is `+1`, `-1`, `0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Signal {
    Sell,
    #[default]
    Hold,
    Buy,
}

impl Signal {
    pub fn as_i8(&self) -> i8 {
        match self {
            Signal::Sell => -1,
            Signal::Hold => 0,
            Signal::Buy => 1,
        }
    }

    /// The order action this signal trades with, if any.
    pub fn action(&self) -> Option<OrderAction> {
        match self {
            Signal::Buy => Some(OrderAction::Bid),
            Signal::Sell => Some(OrderAction::Ask),
            Signal::Hold => None,
        }
    }
}

impl TryFrom<i8> for Signal {
    type Error = CoreError;

    fn try_from(value: i8) -> Result<Self, Self::Error> {
        match value {
            -1 => Ok(Signal::Sell),
            0 => Ok(Signal::Hold),
            1 => Ok(Signal::Buy),
            other => Err(CoreError::invalid(format!("signal must be -1, 0 or 1, got {other}"))),
        }
    }
}

impl From<OrderAction> for Signal {
    fn from(action: OrderAction) -> Self {
        match action {
            OrderAction::Bid => Signal::Buy,
            OrderAction::Ask => Signal::Sell,
        }
    }
}
