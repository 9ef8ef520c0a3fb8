//! Price source: synthetic random walk and market CSV files

pub mod csv_io;
pub mod generator;

pub use csv_io::{read_market_csv, write_market_csv, write_ticks_csv, MARKET_CSV_HEADER};
pub use generator::{load_prices, RandomWalk, WalkParams, PRICE_FLOOR};
