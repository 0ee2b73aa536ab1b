//! Candlestick pattern rule evaluators
//!
//! Each rule is an independent, stateless detector over [`crate::Ohlc`]
//! records:
//!
//! - **Single-bar**: Doji, Hammer-like (hammer / hanging man silhouette)
//! - **Two-bar**: Bullish / Bearish Engulfing

/// Generate `with_defaults()` -> `Self::default()` for multiple detector types.
macro_rules! impl_with_defaults {
  ($($detector:ty),* $(,)?) => {
    $(impl $detector {
      pub fn with_defaults() -> Self { Self::default() }
    })*
  };
}

pub mod single_bar;
pub mod two_bar;

pub use single_bar::*;
pub use two_bar::*;

/// Floor applied to the body when comparing wick lengths against it, so a
/// zero-body candle still yields a well-defined, satisfiable comparison.
pub const BODY_FLOOR: f64 = 1e-9;
