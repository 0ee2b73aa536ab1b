//! Single-bar candlestick pattern detectors
//!
//! Both rules classify a candle's shape in isolation. A zero-range candle
//! (flat bar, or all four prices equal) never matches either rule: the
//! ratios that define the silhouettes are undefined on zero range, and the
//! contract maps that case to `false` rather than an error.

use super::BODY_FLOOR;
use crate::{Ohlc, OhlcExt, PatternError, Result};

impl_with_defaults!(DojiDetector, HammerLikeDetector);

/// Doji - body negligible relative to range, signaling indecision
#[derive(Debug, Clone, Copy)]
pub struct DojiDetector {
    /// Body must be below this fraction of the range. Default 0.1.
    pub threshold: f64,
}

impl Default for DojiDetector {
    fn default() -> Self {
        Self { threshold: 0.1 }
    }
}

impl DojiDetector {
    pub fn validate_config(&self) -> Result<()> {
        if self.threshold.is_nan() {
            return Err(PatternError::InvalidValue("threshold cannot be NaN"));
        }
        if !(0.0..=1.0).contains(&self.threshold) {
            return Err(PatternError::OutOfRange {
                field: "threshold",
                value: self.threshold,
                min: 0.0,
                max: 1.0,
            });
        }
        Ok(())
    }

    /// True iff `range > 0` and `body < threshold * range`.
    pub fn detect<T: Ohlc>(&self, candle: &T) -> bool {
        let range = candle.range();
        range > 0.0 && candle.body() < self.threshold * range
    }
}

/// Hammer / Hanging-Man silhouette: small body, long lower wick, short
/// upper wick.
///
/// The rule is direction-agnostic; distinguishing hammer (bullish) from
/// hanging man (bearish) would require the prior trend, which this rule
/// does not consult.
#[derive(Debug, Clone, Copy)]
pub struct HammerLikeDetector {
    /// Body at most this fraction of the range. Default 0.25.
    pub body_to_range: f64,
    /// Lower wick at least this multiple of the body, and upper wick at
    /// most this multiple of the body. Default 2.0.
    pub lower_wick_min: f64,
}

impl Default for HammerLikeDetector {
    fn default() -> Self {
        Self {
            body_to_range: 0.25,
            lower_wick_min: 2.0,
        }
    }
}

impl HammerLikeDetector {
    pub fn validate_config(&self) -> Result<()> {
        if self.body_to_range.is_nan() || self.lower_wick_min.is_nan() {
            return Err(PatternError::InvalidValue("thresholds cannot be NaN"));
        }
        if !(0.0..=1.0).contains(&self.body_to_range) {
            return Err(PatternError::OutOfRange {
                field: "body_to_range",
                value: self.body_to_range,
                min: 0.0,
                max: 1.0,
            });
        }
        if self.lower_wick_min <= 0.0 || self.lower_wick_min.is_infinite() {
            return Err(PatternError::InvalidValue(
                "lower_wick_min must be positive and finite",
            ));
        }
        Ok(())
    }

    /// True iff the body is small relative to the range, the lower wick is
    /// long relative to the body, and the upper wick is short.
    ///
    /// The upper wick is measured from the top of the body to the high and
    /// the lower wick from the low to the bottom of the body; the body floor
    /// keeps the lower-wick comparison satisfiable on zero-body candles.
    pub fn detect<T: Ohlc>(&self, candle: &T) -> bool {
        let range = candle.range();
        if range <= 0.0 {
            return false;
        }

        let body = candle.body();
        let small_body = body <= self.body_to_range * range;
        let strong_lower = candle.lower_wick() >= self.lower_wick_min * body.max(BODY_FLOOR);
        let small_upper = candle.upper_wick() <= body * self.lower_wick_min;

        small_body && strong_lower && small_upper
    }
}
