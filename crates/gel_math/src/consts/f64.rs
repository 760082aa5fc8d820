//! Numeric `f64` constants.

#![allow(clippy::excessive_precision)]

pub use std::f64::consts::*;

/// Relative tolerance used by the epsilon-based comparisons in
/// [`scalar`](crate::scalar).
pub const COMPARISON_EPSILON: f64 = 2.220446e-16;

/// Magic number for the bit-level inverse square root seed.
pub const INVSQRT_MAGIC: u64 = 0x5fe6_eb50_c7b5_37a9;
