//! CSV loading and writing
//!
//! Input tables must carry the four OHLC columns, matched case-insensitively
//! against `open`, `high`, `low`, `close`. Every other column passes through
//! to the output untouched and in its original position; the result columns
//! are appended after them.

use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use crate::table::{AnnotatedTable, Row, Table};
use crate::{Candle, PatternError, Result};

/// Required OHLC column names, checked in this order.
const REQUIRED: [&str; 4] = ["open", "high", "low", "close"];

/// Byte positions of the open/high/low/close columns within a header row.
#[derive(Debug, Clone, Copy)]
struct OhlcColumns {
    open: usize,
    high: usize,
    low: usize,
    close: usize,
}

/// Resolve the OHLC column positions, case-insensitively.
///
/// The first required column that cannot be found yields
/// [`PatternError::MissingColumn`] naming it.
fn resolve_columns(headers: &csv::StringRecord) -> Result<OhlcColumns> {
    let find = |name: &'static str| -> Result<usize> {
        headers
            .iter()
            .position(|h| h.trim().eq_ignore_ascii_case(name))
            .ok_or(PatternError::MissingColumn(name))
    };

    Ok(OhlcColumns {
        open: find(REQUIRED[0])?,
        high: find(REQUIRED[1])?,
        low: find(REQUIRED[2])?,
        close: find(REQUIRED[3])?,
    })
}

fn parse_cell(record: &csv::StringRecord, idx: usize, column: &'static str, row: usize) -> Result<f64> {
    let raw = record.get(idx).unwrap_or("");
    raw.trim()
        .parse::<f64>()
        .map_err(|_| PatternError::MalformedNumber {
            row,
            column,
            value: raw.to_string(),
        })
}

/// Read an OHLC table from any CSV source.
pub fn read_table<R: Read>(reader: R) -> Result<Table> {
    let mut reader = csv::Reader::from_reader(reader);

    let headers = reader.headers()?.clone();
    let columns = resolve_columns(&headers)?;

    let mut rows = Vec::new();
    for (i, result) in reader.records().enumerate() {
        let record = result?;
        let row = i + 1; // 1-based data row for error reporting

        let candle = Candle::new(
            parse_cell(&record, columns.open, "open", row)?,
            parse_cell(&record, columns.high, "high", row)?,
            parse_cell(&record, columns.low, "low", row)?,
            parse_cell(&record, columns.close, "close", row)?,
        );

        rows.push(Row {
            candle,
            fields: record.iter().map(|s| s.to_string()).collect(),
        });
    }

    Ok(Table {
        headers: headers.iter().map(|s| s.to_string()).collect(),
        rows,
    })
}

/// Read an OHLC table from a CSV file.
pub fn read_table_path(path: impl AsRef<Path>) -> Result<Table> {
    let file = File::open(path)?;
    read_table(BufReader::new(file))
}

/// Write an annotated table as CSV: original columns, then
/// `Doji,HammerLike,Engulfing,Pattern`.
pub fn write_annotated<W: Write>(table: &AnnotatedTable, writer: W) -> Result<()> {
    let mut writer = csv::Writer::from_writer(writer);

    writer.write_record(table.output_headers())?;
    for (row, detection) in &table.rows {
        writer.write_record(AnnotatedTable::output_record(row, detection))?;
    }
    writer.flush()?;
    Ok(())
}

/// Write an annotated table to a CSV file.
pub fn write_annotated_path(table: &AnnotatedTable, path: impl AsRef<Path>) -> Result<()> {
    let file = File::create(path)?;
    write_annotated(table, BufWriter::new(file))
}
