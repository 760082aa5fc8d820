//! Numeric `f32` constants.

#![allow(clippy::excessive_precision)]

pub use std::f32::consts::*;

/// Relative tolerance used by the epsilon-based comparisons in
/// [`scalar`](crate::scalar).
pub const COMPARISON_EPSILON: f32 = 1.1920929e-7;

/// Magic number for the bit-level inverse square root seed.
pub const INVSQRT_MAGIC: u32 = 0x5f37_5a86;
