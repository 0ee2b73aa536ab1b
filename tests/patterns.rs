//! Integration tests for candlesift pattern detection.
//!
//! Covers the concrete classification scenarios and the table/CSV contract.

use candlesift::prelude::*;
use candlesift::table::RESULT_COLUMNS;

/// Minimal caller-side bar type, to exercise the Ohlc trait seam.
#[derive(Debug, Clone, Copy)]
struct TestBar {
    o: f64,
    h: f64,
    l: f64,
    c: f64,
}

impl TestBar {
    fn new(o: f64, h: f64, l: f64, c: f64) -> Self {
        Self { o, h, l, c }
    }
}

impl Ohlc for TestBar {
    fn open(&self) -> f64 {
        self.o
    }

    fn high(&self) -> f64 {
        self.h
    }

    fn low(&self) -> f64 {
        self.l
    }

    fn close(&self) -> f64 {
        self.c
    }
}

// ============================================================
// CONCRETE CLASSIFICATION SCENARIOS
// ============================================================

#[test]
fn test_fully_flat_candle_matches_nothing() {
    let bars = vec![TestBar::new(10.0, 10.0, 10.0, 10.0)];
    let detection = PatternScan::with_defaults().detect_at(&bars, 0);

    assert!(!detection.doji);
    assert!(!detection.hammer_like);
    assert_eq!(detection.engulfing, EngulfingSignal::None);
    assert_eq!(detection.label(), "");
}

#[test]
fn test_small_body_candle_is_doji() {
    // body 0.02, range 0.55, 0.02 < 0.1 * 0.55
    let bars = vec![TestBar::new(10.0, 10.5, 9.95, 10.02)];
    let detection = PatternScan::with_defaults().detect_at(&bars, 0);
    assert!(detection.doji);
}

#[test]
fn test_bullish_engulfing_pair() {
    let bars = vec![
        TestBar::new(12.0, 12.2, 10.0, 10.5), // bearish
        TestBar::new(10.2, 12.5, 10.0, 12.3), // bullish, engulfs
    ];
    let detections = PatternScan::with_defaults().scan(&bars);

    assert_eq!(detections[0].engulfing, EngulfingSignal::None);
    assert_eq!(detections[1].engulfing, EngulfingSignal::Bullish);
    assert_eq!(detections[1].engulfing.as_str(), "Bullish Engulfing");
}

#[test]
fn test_three_row_sequence_pattern_labels() {
    let bars = vec![
        TestBar::new(12.0, 12.2, 10.0, 10.5),
        TestBar::new(10.2, 12.5, 10.0, 12.3),
        TestBar::new(12.4, 12.6, 12.0, 12.2),
    ];
    let labels: Vec<String> = PatternScan::with_defaults()
        .scan(&bars)
        .iter()
        .map(|d| d.label())
        .collect();

    assert_eq!(labels, vec!["", "Bullish Engulfing", ""]);
}

#[test]
fn test_doji_and_hammer_combine_in_order() {
    // tiny body at the top of a long lower wick
    let bars = vec![TestBar::new(10.0, 10.02, 9.0, 10.01)];
    let detection = PatternScan::with_defaults().detect_at(&bars, 0);

    assert!(detection.doji);
    assert!(detection.hammer_like);
    assert_eq!(detection.label(), "Doji, HammerLike");
}

#[test]
fn test_engulfing_is_exclusive_per_record() {
    let bars = vec![
        TestBar::new(12.0, 12.2, 10.0, 10.5),
        TestBar::new(10.2, 12.5, 10.0, 12.3),
    ];
    let detection = PatternScan::with_defaults().detect_at(&bars, 1);
    let tags = detection.tags();

    let engulfing_tags = tags
        .iter()
        .filter(|t| {
            matches!(
                t,
                PatternTag::BullishEngulfing | PatternTag::BearishEngulfing
            )
        })
        .count();
    assert_eq!(engulfing_tags, 1);
}

#[test]
fn test_violated_geometry_does_not_panic() {
    // high below low, low above the body: callers' invariant broken
    let bars = vec![
        TestBar::new(10.0, 8.0, 12.0, 10.5),
        TestBar::new(10.0, 9.0, 11.0, 10.2),
    ];
    let detections = PatternScan::with_defaults().scan(&bars);
    assert_eq!(detections.len(), 2);
}

// ============================================================
// TABLE / CSV CONTRACT
// ============================================================

#[test]
fn test_end_to_end_csv_transform() {
    let input = "Date,Open,High,Low,Close\n\
                 2024-01-02,12.0,12.2,10.0,10.5\n\
                 2024-01-03,10.2,12.5,10.0,12.3\n\
                 2024-01-04,12.4,12.6,12.0,12.2\n";

    let table = read_table(input.as_bytes()).unwrap();
    let annotated = table.annotate(&PatternScan::with_defaults());

    let mut out = Vec::new();
    write_annotated(&annotated, &mut out).unwrap();
    let out = String::from_utf8(out).unwrap();
    let lines: Vec<&str> = out.lines().collect();

    assert_eq!(lines.len(), 4);
    assert_eq!(
        lines[0],
        "Date,Open,High,Low,Close,Doji,HammerLike,Engulfing,Pattern"
    );
    assert!(lines[1].ends_with(",false,false,,"));
    assert!(lines[2].ends_with(",false,false,Bullish Engulfing,Bullish Engulfing"));
    assert!(lines[3].ends_with(",false,false,,"));
    // date column passes through untouched
    assert!(lines[2].starts_with("2024-01-03,"));
}

#[test]
fn test_result_column_contract() {
    assert_eq!(RESULT_COLUMNS, ["Doji", "HammerLike", "Engulfing", "Pattern"]);
}

#[test]
fn test_missing_column_exit_code_is_distinct() {
    let input = "Date,Open,High,Low\n2024-01-02,10.0,11.0,9.5\n";
    let err = read_table(input.as_bytes()).unwrap_err();
    assert_eq!(err.exit_code(), 2);
    assert!(matches!(err, PatternError::MissingColumn("close")));
}

#[test]
fn test_empty_table_scans_to_empty() {
    let input = "Open,High,Low,Close\n";
    let table = read_table(input.as_bytes()).unwrap();
    assert!(table.is_empty());

    let annotated = table.annotate(&PatternScan::with_defaults());
    assert!(annotated.rows.is_empty());
}
