//! Market CSV files: `timestamp,symbol,price`, one row per tick.
//!
//! Writers always truncate the target file. Timestamps are RFC 3339 with
//! microsecond precision.

use std::path::Path;

use chrono::{DateTime, SecondsFormat, Utc};
use serde::Deserialize;
use tracing::debug;

use super::generator::{RandomWalk, WalkParams};
use crate::domain::Tick;
use crate::error::{CoreError, Result};

pub const MARKET_CSV_HEADER: [&str; 3] = ["timestamp", "symbol", "price"];

#[derive(Debug, Deserialize)]
struct MarketRow {
    timestamp: String,
    symbol: String,
    price: f64,
}

/// Generate `num_ticks` ticks and write them to `path`. Returns the row count.
pub fn write_market_csv(path: &Path, params: WalkParams, num_ticks: usize) -> Result<usize> {
    if num_ticks == 0 {
        return Err(CoreError::invalid("num_ticks must be positive"));
    }
    let walk = RandomWalk::new(params)?;
    write_rows(path, walk.take(num_ticks))
}

/// Write an existing tick series to `path`. Returns the row count.
pub fn write_ticks_csv(path: &Path, ticks: &[Tick]) -> Result<usize> {
    write_rows(path, ticks.iter().cloned())
}

fn write_rows(path: &Path, ticks: impl Iterator<Item = Tick>) -> Result<usize> {
    let mut wtr = csv::Writer::from_path(path)?;
    wtr.write_record(MARKET_CSV_HEADER)?;
    let mut rows = 0;
    for tick in ticks {
        wtr.write_record([
            tick.timestamp().to_rfc3339_opts(SecondsFormat::Micros, true),
            tick.symbol().to_string(),
            tick.price().to_string(),
        ])?;
        rows += 1;
    }
    wtr.flush()?;
    debug!(path = %path.display(), rows, "wrote market csv");
    Ok(rows)
}

/// Read a market CSV written by [`write_market_csv`] back into ticks.
pub fn read_market_csv(path: &Path) -> Result<Vec<Tick>> {
    let mut rdr = csv::Reader::from_path(path)?;
    let mut ticks = Vec::new();
    for row in rdr.deserialize() {
        let row: MarketRow = row?;
        let timestamp = DateTime::parse_from_rfc3339(&row.timestamp)
            .map_err(|_| CoreError::Timestamp(row.timestamp.clone()))?
            .with_timezone(&Utc);
        ticks.push(Tick::try_new(timestamp, row.symbol, row.price)?);
    }
    Ok(ticks)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ticks_from_prices;

    fn params() -> WalkParams {
        WalkParams::new("AAPL", 150.0)
    }

    fn read_lines(path: &Path) -> Vec<String> {
        std::fs::read_to_string(path)
            .unwrap()
            .lines()
            .map(str::to_string)
            .collect()
    }

    #[test]
    fn header_and_row_count() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("market.csv");
        let rows = write_market_csv(&path, params(), 20).unwrap();
        assert_eq!(rows, 20);
        let lines = read_lines(&path);
        assert_eq!(lines.len(), 21);
        assert_eq!(lines[0], "timestamp,symbol,price");
    }

    #[test]
    fn overwrites_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("market.csv");
        write_market_csv(&path, params(), 10).unwrap();
        write_market_csv(&path, params(), 5).unwrap();
        assert_eq!(read_lines(&path).len(), 6);
    }

    #[test]
    fn rows_parse_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("market.csv");
        write_market_csv(&path, WalkParams::new("GOOGL", 2800.0), 5).unwrap();
        let ticks = read_market_csv(&path).unwrap();
        assert_eq!(ticks.len(), 5);
        assert!(ticks.iter().all(|t| t.symbol() == "GOOGL" && t.price() > 0.0));
    }

    #[test]
    fn written_ticks_keep_prices_and_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ticks.csv");
        let ticks = ticks_from_prices("SPY", &[100.0, 101.25, 99.5]);
        write_ticks_csv(&path, &ticks).unwrap();
        let read = read_market_csv(&path).unwrap();
        assert_eq!(read, ticks);
    }

    #[test]
    fn zero_ticks_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("market.csv");
        assert!(write_market_csv(&path, params(), 0).is_err());
        assert!(!path.exists());
    }

    #[test]
    fn bad_timestamp_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.csv");
        std::fs::write(&path, "timestamp,symbol,price\nyesterday,AAPL,1.0\n").unwrap();
        assert!(matches!(
            read_market_csv(&path),
            Err(CoreError::Timestamp(ts)) if ts == "yesterday"
        ));
    }

    #[test]
    fn non_positive_price_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.csv");
        std::fs::write(
            &path,
            "timestamp,symbol,price\n2025-01-01T00:00:00Z,AAPL,0\n",
        )
        .unwrap();
        assert!(matches!(
            read_market_csv(&path),
            Err(CoreError::InvalidArgument(_))
        ));
    }
}
