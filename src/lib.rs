//! # candlesift
//!
//! Candlestick pattern detection for ordered OHLC tables.
//!
//! Three classic patterns are detected: Doji, Hammer-like shapes (hammer and
//! hanging man share one undifferentiated tag) and Bullish/Bearish Engulfing.
//! Detection is a pure transform: a sequence of candles in, one [`Detection`]
//! per candle out, in the same order.
//!
//! ## Quick Start
//!
//! ```rust
//! use candlesift::prelude::*;
//!
//! let candles = vec![
//!     Candle::new(12.0, 12.2, 10.0, 10.5),
//!     Candle::new(10.2, 12.5, 10.0, 12.3),
//! ];
//!
//! let scan = PatternScan::with_defaults();
//! let detections = scan.scan(&candles);
//!
//! assert_eq!(detections[1].engulfing, EngulfingSignal::Bullish);
//! assert_eq!(detections[1].label(), "Bullish Engulfing");
//! ```

pub mod chart;
pub mod detectors;
pub mod io;
pub mod table;

pub mod prelude {
    pub use crate::{
        // Detectors
        detectors::{DojiDetector, EngulfingDetector, HammerLikeDetector},
        // I/O
        io::{read_table, write_annotated},
        // Table
        table::{AnnotatedTable, Row, Table},
        // Core types
        Candle,
        Detection,
        EngulfingSignal,
        Ohlc,
        OhlcExt,
        PatternError,
        PatternScan,
        PatternTag,
        Result,
    };
}

// ============================================================
// ERRORS
// ============================================================

pub type Result<T> = std::result::Result<T, PatternError>;

/// Errors that can occur while loading tables or configuring detectors
#[derive(Debug, thiserror::Error)]
pub enum PatternError {
    #[error("missing required column '{0}' (matched case-insensitively)")]
    MissingColumn(&'static str),

    #[error("row {row}: cannot parse {column} value '{value}' as a number")]
    MalformedNumber {
        row: usize,
        column: &'static str,
        value: String,
    },

    #[error("Invalid value: {0}")]
    InvalidValue(&'static str),

    #[error("{field} = {value} out of range [{min}, {max}]")]
    OutOfRange {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("chart: {0}")]
    Chart(&'static str),

    #[error(transparent)]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl PatternError {
    /// Process exit code for the CLI: missing columns get a distinct code.
    pub fn exit_code(&self) -> u8 {
        match self {
            PatternError::MissingColumn(_) => 2,
            _ => 1,
        }
    }
}

// ============================================================
// OHLC TRAITS
// ============================================================

/// Core OHLC data trait.
///
/// Callers are expected to supply `high >= max(open, close)` and
/// `low <= min(open, close)`, but the detectors never enforce this; violated
/// geometry only yields degenerate (possibly all-false) classifications.
pub trait Ohlc {
    fn open(&self) -> f64;
    fn high(&self) -> f64;
    fn low(&self) -> f64;
    fn close(&self) -> f64;
}

/// Blanket impl for references, so borrowed rows scan without cloning
impl<T: Ohlc + ?Sized> Ohlc for &T {
    fn open(&self) -> f64 {
        (**self).open()
    }

    fn high(&self) -> f64 {
        (**self).high()
    }

    fn low(&self) -> f64 {
        (**self).low()
    }

    fn close(&self) -> f64 {
        (**self).close()
    }
}

/// Extension trait with the derived candle geometry
pub trait OhlcExt: Ohlc {
    /// `|open - close|`, the solid part of the candlestick
    #[inline]
    fn body(&self) -> f64 {
        (self.close() - self.open()).abs()
    }

    /// `|high - low|`, the full extent of the candle
    #[inline]
    fn range(&self) -> f64 {
        (self.high() - self.low()).abs()
    }

    /// Distance from the top of the body up to the high
    #[inline]
    fn upper_wick(&self) -> f64 {
        self.high() - self.open().max(self.close())
    }

    /// Distance from the bottom of the body down to the low
    #[inline]
    fn lower_wick(&self) -> f64 {
        self.open().min(self.close()) - self.low()
    }

    #[inline]
    fn is_bullish(&self) -> bool {
        self.close() > self.open()
    }

    #[inline]
    fn is_bearish(&self) -> bool {
        self.close() < self.open()
    }
}

impl<T: Ohlc> OhlcExt for T {}

/// One immutable OHLC record
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Candle {
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
}

impl Candle {
    pub fn new(open: f64, high: f64, low: f64, close: f64) -> Self {
        Self {
            open,
            high,
            low,
            close,
        }
    }
}

impl Ohlc for Candle {
    fn open(&self) -> f64 {
        self.open
    }

    fn high(&self) -> f64 {
        self.high
    }

    fn low(&self) -> f64 {
        self.low
    }

    fn close(&self) -> f64 {
        self.close
    }
}

// ============================================================
// DETECTION RESULT
// ============================================================

/// Fixed vocabulary of pattern tags
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum PatternTag {
    Doji,
    HammerLike,
    BullishEngulfing,
    BearishEngulfing,
}

impl PatternTag {
    /// Human-readable name used in the combined `Pattern` label
    pub fn label(self) -> &'static str {
        match self {
            PatternTag::Doji => "Doji",
            PatternTag::HammerLike => "HammerLike",
            PatternTag::BullishEngulfing => "Bullish Engulfing",
            PatternTag::BearishEngulfing => "Bearish Engulfing",
        }
    }
}

/// Outcome of the two-candle engulfing rule
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum EngulfingSignal {
    #[default]
    None,
    Bullish,
    Bearish,
}

impl EngulfingSignal {
    /// String form used in the `Engulfing` output column
    pub fn as_str(self) -> &'static str {
        match self {
            EngulfingSignal::None => "",
            EngulfingSignal::Bullish => "Bullish Engulfing",
            EngulfingSignal::Bearish => "Bearish Engulfing",
        }
    }

    pub fn tag(self) -> Option<PatternTag> {
        match self {
            EngulfingSignal::None => None,
            EngulfingSignal::Bullish => Some(PatternTag::BullishEngulfing),
            EngulfingSignal::Bearish => Some(PatternTag::BearishEngulfing),
        }
    }
}

/// Per-candle detection result
#[derive(Debug, Clone, Copy, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Detection {
    pub doji: bool,
    pub hammer_like: bool,
    pub engulfing: EngulfingSignal,
}

impl Detection {
    /// Tags in the fixed combiner order: Doji, HammerLike, Engulfing
    pub fn tags(&self) -> Vec<PatternTag> {
        let mut tags = Vec::new();
        if self.doji {
            tags.push(PatternTag::Doji);
        }
        if self.hammer_like {
            tags.push(PatternTag::HammerLike);
        }
        if let Some(tag) = self.engulfing.tag() {
            tags.push(tag);
        }
        tags
    }

    /// Combined human-readable label, tag names joined by `", "`.
    /// Empty string when nothing matched. Order and separator are part of
    /// the external contract.
    pub fn label(&self) -> String {
        self.tags()
            .iter()
            .map(|t| t.label())
            .collect::<Vec<_>>()
            .join(", ")
    }

    pub fn is_empty(&self) -> bool {
        !self.doji && !self.hammer_like && self.engulfing == EngulfingSignal::None
    }
}

// ============================================================
// PATTERN SCAN - the rule combiner
// ============================================================

use detectors::{DojiDetector, EngulfingDetector, HammerLikeDetector};

/// Composes the three rule evaluators into a per-sequence scan.
///
/// Stateless and side-effect free: scanning the same sequence twice yields
/// identical results.
#[derive(Debug, Clone, Copy, Default)]
pub struct PatternScan {
    pub doji: DojiDetector,
    pub hammer: HammerLikeDetector,
    pub engulfing: EngulfingDetector,
}

impl PatternScan {
    pub fn with_defaults() -> Self {
        Self::default()
    }

    pub fn validate_config(&self) -> Result<()> {
        self.doji.validate_config()?;
        self.hammer.validate_config()?;
        Ok(())
    }

    /// Detect patterns for the candle at `index`.
    ///
    /// The engulfing rule reads only the immediate predecessor; the first
    /// candle of a sequence is unconditionally `EngulfingSignal::None`.
    pub fn detect_at<T: Ohlc>(&self, candles: &[T], index: usize) -> Detection {
        let Some(curr) = candles.get(index) else {
            return Detection::default();
        };

        let engulfing = match index.checked_sub(1).and_then(|i| candles.get(i)) {
            Some(prev) => self.engulfing.detect(prev, curr),
            None => EngulfingSignal::None,
        };

        Detection {
            doji: self.doji.detect(curr),
            hammer_like: self.hammer.detect(curr),
            engulfing,
        }
    }

    /// Scan the whole sequence, one result per candle, in input order.
    pub fn scan<T: Ohlc>(&self, candles: &[T]) -> Vec<Detection> {
        (0..candles.len())
            .map(|i| self.detect_at(candles, i))
            .collect()
    }

    /// Parallel scan over rows. Each result depends only on the candle and
    /// its immediate predecessor, so row pairs are independent; rayon's
    /// indexed collect reassembles them in input order.
    pub fn scan_parallel<T: Ohlc + Sync>(&self, candles: &[T]) -> Vec<Detection> {
        use rayon::prelude::*;

        (0..candles.len())
            .into_par_iter()
            .map(|i| self.detect_at(candles, i))
            .collect()
    }
}

// ============================================================
// TESTS
// ============================================================
