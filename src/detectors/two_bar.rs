//! Two-bar candlestick pattern detectors
//!
//! The engulfing rule relates a candle to its immediate predecessor. The
//! result attaches to the current row only; the previous row is read-only
//! context and is never re-labeled by this relation.

use crate::{EngulfingSignal, Ohlc, OhlcExt};

impl_with_defaults!(EngulfingDetector);

/// Bullish / Bearish Engulfing: the current candle's body fully contains
/// the previous candle's body in the opposite direction.
///
/// A flat candle (`open == close`) is neither bullish nor bearish and can
/// participate in neither role, so any pair involving one yields
/// [`EngulfingSignal::None`]. The two outcomes are mutually exclusive by
/// construction: they require opposite directions of the same pair.
#[derive(Debug, Clone, Copy, Default)]
pub struct EngulfingDetector;

impl EngulfingDetector {
    pub fn detect<T: Ohlc>(&self, prev: &T, curr: &T) -> EngulfingSignal {
        if prev.is_bearish()
            && curr.is_bullish()
            && curr.open() <= prev.close()
            && curr.close() >= prev.open()
        {
            return EngulfingSignal::Bullish;
        }

        if prev.is_bullish()
            && curr.is_bearish()
            && curr.open() >= prev.close()
            && curr.close() <= prev.open()
        {
            return EngulfingSignal::Bearish;
        }

        EngulfingSignal::None
    }
}
