//! Tabular view over candle sequences
//!
//! A [`Table`] keeps the parsed OHLC values next to the raw row cells so
//! passthrough columns (dates, volumes, anything else) survive the transform
//! untouched. Annotating a table zips each row with its [`Detection`] and
//! fixes the output column contract.

use crate::{Candle, Detection, Ohlc, PatternScan};

/// Names of the columns appended to an annotated table, in output order.
pub const RESULT_COLUMNS: [&str; 4] = ["Doji", "HammerLike", "Engulfing", "Pattern"];

/// One table row: parsed candle plus the original cells
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    pub candle: Candle,
    /// Raw cell values aligned with the table headers, passed through verbatim
    pub fields: Vec<String>,
}

impl Ohlc for Row {
    fn open(&self) -> f64 {
        self.candle.open
    }

    fn high(&self) -> f64 {
        self.candle.high
    }

    fn low(&self) -> f64 {
        self.candle.low
    }

    fn close(&self) -> f64 {
        self.candle.close
    }
}

/// An ordered OHLC table with arbitrary passthrough columns
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    /// Original header names in original order
    pub headers: Vec<String>,
    pub rows: Vec<Row>,
}

impl Table {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn candles(&self) -> impl Iterator<Item = &Candle> {
        self.rows.iter().map(|r| &r.candle)
    }

    /// Run the pattern scan over every row and zip the results in.
    ///
    /// Row order and count are preserved exactly.
    pub fn annotate(self, scan: &PatternScan) -> AnnotatedTable {
        let detections = scan.scan(&self.rows);
        AnnotatedTable {
            headers: self.headers,
            rows: self.rows.into_iter().zip(detections).collect(),
        }
    }
}

/// A table augmented with one [`Detection`] per row
#[derive(Debug, Clone, PartialEq)]
pub struct AnnotatedTable {
    /// Original headers; the result columns are appended on output
    pub headers: Vec<String>,
    pub rows: Vec<(Row, Detection)>,
}

impl AnnotatedTable {
    /// Full output header row: original columns then the result columns.
    pub fn output_headers(&self) -> Vec<String> {
        self.headers
            .iter()
            .cloned()
            .chain(RESULT_COLUMNS.iter().map(|s| s.to_string()))
            .collect()
    }

    /// One output record: passthrough cells then Doji, HammerLike,
    /// Engulfing, Pattern.
    pub fn output_record(row: &Row, detection: &Detection) -> Vec<String> {
        let mut record = row.fields.clone();
        record.push(detection.doji.to_string());
        record.push(detection.hammer_like.to_string());
        record.push(detection.engulfing.as_str().to_string());
        record.push(detection.label());
        record
    }
}
