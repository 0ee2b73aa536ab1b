//! Text candlestick chart rendering
//!
//! Supplementary output for the CLI's `--chart` flag. Rendering is best
//! effort: any failure here is recoverable and must never affect the
//! emitted table or the process exit code, so errors are returned for the
//! caller to log rather than propagate.

use crate::{Ohlc, OhlcExt, PatternError, Result};

/// Number of trailing rows the CLI charts by default.
pub const DEFAULT_WINDOW: usize = 50;

/// Default grid height in character rows.
pub const DEFAULT_HEIGHT: usize = 16;

const BULL_BODY: char = '█';
const BEAR_BODY: char = '░';
const WICK: char = '│';

/// Render candles as a fixed-height character grid, one column per candle,
/// newest candle rightmost.
pub fn render<T: Ohlc>(candles: &[T], height: usize) -> Result<String> {
    if candles.is_empty() {
        return Err(PatternError::Chart("no candles to draw"));
    }
    if height == 0 {
        return Err(PatternError::Chart("chart height must be at least 1"));
    }

    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for c in candles {
        min = min.min(c.low());
        max = max.max(c.high());
    }
    if !min.is_finite() || !max.is_finite() {
        return Err(PatternError::Chart("price range is not finite"));
    }
    let span = max - min;
    if span <= 0.0 {
        return Err(PatternError::Chart("price range is empty"));
    }

    let cell = span / height as f64;
    let mut out = String::with_capacity((candles.len() + 16) * (height + 1));

    for y in 0..height {
        // price band covered by this character row, top row first
        let band_hi = max - y as f64 * cell;
        let band_lo = band_hi - cell;

        for c in candles {
            let body_hi = c.open().max(c.close());
            let body_lo = c.open().min(c.close());

            let ch = if body_lo <= band_hi && body_hi >= band_lo {
                if c.is_bearish() {
                    BEAR_BODY
                } else {
                    BULL_BODY
                }
            } else if c.low() <= band_hi && c.high() >= band_lo {
                WICK
            } else {
                ' '
            };
            out.push(ch);
        }

        if y == 0 {
            out.push_str(&format!("  {max:.4}"));
        } else if y == height - 1 {
            out.push_str(&format!("  {min:.4}"));
        }
        out.push('\n');
    }

    Ok(out)
}

/// Render the trailing `window` candles at the default height.
pub fn render_tail<T: Ohlc>(candles: &[T], window: usize) -> Result<String> {
    let start = candles.len().saturating_sub(window);
    render(&candles[start..], DEFAULT_HEIGHT)
}
