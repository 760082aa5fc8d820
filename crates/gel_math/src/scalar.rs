//! Scalar math utilities.
//!
//! The comparison functions treat two floats as equal when their difference
//! is within [`Float::COMPARISON_EPSILON`] times the larger magnitude.

use crate::num::{Float, Scalar};

/// Returns the absolute value of `x`.
///
/// # Panics
/// In debug builds, if `x` is the minimum value of a signed integer type.
#[inline]
pub fn abs<T: Scalar>(x: T) -> T {
    x.abs_value()
}

/// Returns the smaller of the two values, or `y` if they are unordered.
#[inline]
pub fn min<T: PartialOrd>(x: T, y: T) -> T {
    if x < y { x } else { y }
}

/// Returns the larger of the two values, or `y` if they are unordered.
#[inline]
pub fn max<T: PartialOrd>(x: T, y: T) -> T {
    if x > y { x } else { y }
}

#[inline]
pub fn pow<F: Float>(x: F, exponent: F) -> F {
    x.powf(exponent)
}

#[inline]
pub fn sqrt<F: Float>(x: F) -> F {
    x.sqrt()
}

/// Computes `1 / sqrt(x)`.
///
/// This is exact unless the `legacy-invsqrt` feature is enabled, in which
/// case it is the approximation [`fast_invsqrt`].
#[inline]
pub fn invsqrt<F: Float>(x: F) -> F {
    if cfg!(feature = "legacy-invsqrt") {
        fast_invsqrt(x)
    } else {
        F::ONE / x.sqrt()
    }
}

/// Approximates `1 / sqrt(x)` from a bit-level initial estimate refined by
/// two Newton-Raphson iterations. The relative error is below `1e-5` for
/// positive normal inputs.
#[inline]
pub fn fast_invsqrt<F: Float>(x: F) -> F {
    let half_x = x * F::ONE_HALF;
    let mut y = x.invsqrt_seed();
    y = y * (F::THREE_HALVES - half_x * y * y);
    y = y * (F::THREE_HALVES - half_x * y * y);
    y
}

#[inline]
fn tolerance<F: Float>(x: F, y: F) -> F {
    F::COMPARISON_EPSILON * max(x.abs(), y.abs())
}

/// Whether `x` and `y` are equal within the relative tolerance.
#[inline]
pub fn eq<F: Float>(x: F, y: F) -> bool {
    (x - y).abs() <= tolerance(x, y)
}

/// Whether `x` and `y` differ by more than the relative tolerance.
#[inline]
pub fn neq<F: Float>(x: F, y: F) -> bool {
    (x - y).abs() > tolerance(x, y)
}

/// Whether `x` is greater than `y` by more than the relative tolerance.
#[inline]
pub fn gt<F: Float>(x: F, y: F) -> bool {
    x > y && neq(x, y)
}

/// Whether `x` is greater than or equal to `y` within the relative tolerance.
#[inline]
pub fn gte<F: Float>(x: F, y: F) -> bool {
    x > y || eq(x, y)
}

/// Whether `x` is less than `y` by more than the relative tolerance.
#[inline]
pub fn lt<F: Float>(x: F, y: F) -> bool {
    x < y && neq(x, y)
}

/// Whether `x` is less than or equal to `y` within the relative tolerance.
#[inline]
pub fn lte<F: Float>(x: F, y: F) -> bool {
    x < y || eq(x, y)
}
