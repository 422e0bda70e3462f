//! CSV trade tables. Expected header: `notional,rate`.

use crate::core::trade::{Trade, TradeSet};
use rust_decimal::Decimal;
use std::io::{Read, Write};
use std::path::Path;
use thiserror::Error;

/// Errors arising from reading or writing a trade table.
///
/// These are the input collaborator's failures; the balancing engine
/// never sees them. They propagate to the caller unchanged.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("failed to read trade file: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed trade table: {0}")]
    Malformed(#[from] csv::Error),
    #[error("invalid {field} value '{value}': {source}")]
    InvalidNumber {
        field: &'static str,
        value: String,
        source: rust_decimal::Error,
    },
    #[error("trade table contains no trades")]
    Empty,
}

#[derive(serde::Deserialize)]
struct CsvRow {
    notional: String,
    rate: String,
}

#[derive(serde::Serialize)]
struct CsvOutRow {
    notional: String,
    rate: String,
}

/// Read a trade table from any reader.
pub fn read_trades_from_reader<R: Read>(reader: R) -> Result<TradeSet, InputError> {
    let mut rdr = csv::ReaderBuilder::new().from_reader(reader);
    let mut set = TradeSet::new();

    for record in rdr.deserialize::<CsvRow>() {
        let row = record?;
        let notional =
            row.notional
                .trim()
                .parse::<Decimal>()
                .map_err(|e| InputError::InvalidNumber {
                    field: "notional",
                    value: row.notional.clone(),
                    source: e,
                })?;
        let rate = row
            .rate
            .trim()
            .parse::<Decimal>()
            .map_err(|e| InputError::InvalidNumber {
                field: "rate",
                value: row.rate.clone(),
                source: e,
            })?;
        set.add(Trade::new(notional, rate));
    }

    if set.is_empty() {
        return Err(InputError::Empty);
    }
    Ok(set)
}

/// Read a trade table from a file path.
pub fn read_trades<P: AsRef<Path>>(path: P) -> Result<TradeSet, InputError> {
    let file = std::fs::File::open(path)?;
    read_trades_from_reader(file)
}

/// Write a trade table, header included.
pub fn write_trades<W: Write>(writer: W, trades: &TradeSet) -> Result<(), InputError> {
    let mut wtr = csv::WriterBuilder::new().from_writer(writer);
    for trade in trades.trades() {
        wtr.serialize(CsvOutRow {
            notional: trade.notional().to_string(),
            rate: trade.rate().to_string(),
        })?;
    }
    wtr.flush()?;
    Ok(())
}
