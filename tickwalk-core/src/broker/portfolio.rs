//! Per-symbol order accounting.
//!
//! Every order moves cash by its PnL delta (`-price * quantity` for a bid,
//! `+price * quantity` for an ask) and adjusts the signed quantity of the
//! symbol's position. Positions are created lazily and never removed.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::trace;

use super::OrderSink;
use crate::domain::{Order, OrderAction, Position, Symbol};
use crate::error::Result;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Portfolio {
    cash: f64,
    positions: HashMap<Symbol, Position>,
    order_history: Vec<Order>,
}

impl Portfolio {
    pub fn new(initial_cash: f64) -> Self {
        Self {
            cash: initial_cash,
            positions: HashMap::new(),
            order_history: Vec::new(),
        }
    }

    /// Cash flow produced by `order`: negative when buying, positive when selling.
    pub fn calculate_pnl(&self, order: &Order) -> f64 {
        let notional = order.price * order.quantity;
        match order.action {
            OrderAction::Bid => -notional,
            OrderAction::Ask => notional,
        }
    }

    /// Apply `order` to its symbol's position and to cash, then record it.
    pub fn update_position(&mut self, order: Order) {
        let pnl = self.calculate_pnl(&order);
        let position = self
            .positions
            .entry(order.symbol.clone())
            .or_insert_with(|| Position::flat(order.symbol.clone()));

        match order.action {
            OrderAction::Bid => position.quantity += order.quantity,
            OrderAction::Ask => position.quantity -= order.quantity,
        }
        position.pnl += pnl;
        self.cash += pnl;

        trace!(
            symbol = %order.symbol,
            action = %order.action,
            quantity = position.quantity,
            pnl = position.pnl,
            cash = self.cash,
            "portfolio update"
        );
        self.order_history.push(order);
    }

    pub fn cash(&self) -> f64 {
        self.cash
    }

    pub fn position(&self, symbol: &str) -> Option<&Position> {
        self.positions.get(symbol)
    }

    pub fn positions(&self) -> &HashMap<Symbol, Position> {
        &self.positions
    }

    pub fn order_history(&self) -> &[Order] {
        &self.order_history
    }

    /// Cash plus every position marked at `prices`. Symbols without a mark count as zero.
    pub fn equity(&self, prices: &HashMap<Symbol, f64>) -> f64 {
        self.cash
            + self
                .positions
                .values()
                .map(|p| prices.get(&p.symbol).map_or(0.0, |&px| p.market_value(px)))
                .sum::<f64>()
    }
}

impl OrderSink for Portfolio {
    fn submit(&mut self, order: &Order) -> Result<()> {
        self.update_position(order.clone());
        Ok(())
    }

    fn cash(&self) -> f64 {
        self.cash
    }

    fn position(&self, symbol: &str) -> f64 {
        self.positions.get(symbol).map_or(0.0, |p| p.quantity)
    }
}
