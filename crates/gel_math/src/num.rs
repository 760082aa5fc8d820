//! Numbers and numerics.

use bytemuck::Pod;
use num_traits as nt;
use std::{fmt, ops::Neg};

/// A primitive number that can be the element type of a
/// [`Vector`](crate::vector::Vector) or [`Matrix`](crate::matrix::Matrix).
pub trait Scalar:
    Copy
    + Default
    + fmt::Debug
    + fmt::Display
    + PartialOrd
    + Pod
    + nt::Num
    + nt::NumAssign
    + nt::NumCast
    + 'static
{
    const ZERO: Self;
    const ONE: Self;

    /// Whether the two values are equal. Integers compare exactly, floats
    /// within the relative tolerance of [`scalar::eq`](crate::scalar::eq).
    fn approx_eq(self, other: Self) -> bool;

    /// Whether the value may be used as a divisor. Integers must be non-zero,
    /// while every float is accepted and division follows IEEE semantics.
    fn is_valid_divisor(self) -> bool;

    /// Returns the absolute value.
    ///
    /// # Panics
    /// In debug builds, if the value is the minimum of a signed integer type,
    /// whose absolute value is not representable.
    fn abs_value(self) -> Self;
}

/// A [`Scalar`] that can be negated.
pub trait SignedScalar: Scalar + Neg<Output = Self> {}

impl<T: Scalar + Neg<Output = T>> SignedScalar for T {}

/// Gathers traits useful for working with generic floating point types.
pub trait Float:
    Scalar + nt::Float + nt::FloatConst + approx::AbsDiffEq<Epsilon = Self> + approx::RelativeEq
{
    const TWO: Self;
    const ONE_HALF: Self;
    const THREE_HALVES: Self;
    const HALF_TURN_DEGREES: Self;

    /// Relative tolerance for the epsilon-based comparisons.
    const COMPARISON_EPSILON: Self;

    /// Initial estimate of `1 / sqrt(self)` obtained by reinterpreting the
    /// bits of the value as an integer.
    fn invsqrt_seed(self) -> Self;
}

macro_rules! impl_scalar_for_signed_integer {
    ($($t:ty),*) => {
        $(
            impl Scalar for $t {
                const ZERO: Self = 0;
                const ONE: Self = 1;

                #[inline]
                fn approx_eq(self, other: Self) -> bool {
                    self == other
                }

                #[inline]
                fn is_valid_divisor(self) -> bool {
                    self != 0
                }

                #[inline]
                fn abs_value(self) -> Self {
                    debug_assert!(
                        self != <$t>::MIN,
                        "absolute value of {} is not representable",
                        <$t>::MIN
                    );
                    if self < 0 { -self } else { self }
                }
            }
        )*
    };
}

macro_rules! impl_scalar_for_unsigned_integer {
    ($($t:ty),*) => {
        $(
            impl Scalar for $t {
                const ZERO: Self = 0;
                const ONE: Self = 1;

                #[inline]
                fn approx_eq(self, other: Self) -> bool {
                    self == other
                }

                #[inline]
                fn is_valid_divisor(self) -> bool {
                    self != 0
                }

                #[inline]
                fn abs_value(self) -> Self {
                    self
                }
            }
        )*
    };
}

macro_rules! impl_float {
    ($f:tt, $magic:expr) => {
        impl Scalar for $f {
            const ZERO: Self = 0.0;
            const ONE: Self = 1.0;

            #[inline]
            fn approx_eq(self, other: Self) -> bool {
                crate::scalar::eq(self, other)
            }

            #[inline]
            fn is_valid_divisor(self) -> bool {
                true
            }

            #[inline]
            fn abs_value(self) -> Self {
                <$f>::abs(self)
            }
        }

        impl Float for $f {
            const TWO: Self = 2.0;
            const ONE_HALF: Self = 0.5;
            const THREE_HALVES: Self = 1.5;
            const HALF_TURN_DEGREES: Self = 180.0;
            const COMPARISON_EPSILON: Self = crate::consts::$f::COMPARISON_EPSILON;

            #[inline]
            fn invsqrt_seed(self) -> Self {
                <$f>::from_bits($magic.wrapping_sub(self.to_bits() >> 1))
            }
        }
    };
}

impl_scalar_for_signed_integer!(i8, i16, i32, i64, isize);
impl_scalar_for_unsigned_integer!(u8, u16, u32, u64, usize);
impl_float!(f32, crate::consts::f32::INVSQRT_MAGIC);
impl_float!(f64, crate::consts::f64::INVSQRT_MAGIC);
