//! Domain types for TickWalk

pub mod order;
pub mod position;
pub mod signal;
pub mod tick;

pub use order::{Order, OrderAction, Side};
pub use position::Position;
pub use signal::Signal;
pub use tick::{ticks_from_prices, Tick};

/// Symbol type alias
pub type Symbol = String;
