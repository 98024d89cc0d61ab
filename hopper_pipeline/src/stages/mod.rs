//! Builtin compute stages.
//!
//! Each stage appends one `Float64` column derived from a rolling window
//! over an input column. Output positions that fall inside the warm-up
//! window are NaN so downstream consumers can tell "no value yet" apart
//! from a computed zero.

mod ema;
mod rolling_mean;
mod vwap;
mod zscore;

pub use self::{ema::Ema, rolling_mean::RollingMean, vwap::Vwap, zscore::ZScore};
