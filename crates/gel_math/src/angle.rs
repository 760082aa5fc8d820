//! Different units for angles.

use crate::num::Float;
use approx::{AbsDiffEq, RelativeEq};
use bytemuck::{Pod, Zeroable};
use std::{
    cmp::Ordering,
    ops::{Add, Div, Mul, Neg, Sub},
};

/// Represents an angle. Bare floating-point values are interpreted as
/// radians.
pub trait Angle<F: Float = f32>: Copy {
    /// Creates a zero angle.
    fn zero() -> Self;

    /// Returns the angle as degrees.
    fn as_degrees(self) -> Degrees<F>;

    /// Returns the angle as radians.
    fn as_radians(self) -> Radians<F>;

    /// Returns the value of the angle in degrees.
    fn degrees(self) -> F;

    /// Returns the value of the angle in radians.
    fn radians(self) -> F;
}

// An angle in degrees.
#[repr(transparent)]
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
pub struct Degrees<F = f32>(pub F);

// An angle in radians.
#[repr(transparent)]
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
pub struct Radians<F = f32>(pub F);

impl<F: Float> Degrees<F> {
    fn value(self) -> F {
        self.0
    }
}

impl<F: Float> Radians<F> {
    fn value(self) -> F {
        self.0
    }
}

impl<F: Float> Angle<F> for Degrees<F> {
    fn zero() -> Self {
        Self(F::ZERO)
    }

    fn as_degrees(self) -> Degrees<F> {
        self
    }

    fn as_radians(self) -> Radians<F> {
        Radians::from(self)
    }

    fn degrees(self) -> F {
        self.value()
    }

    fn radians(self) -> F {
        Radians::from(self).value()
    }
}

impl<F: Float> Angle<F> for Radians<F> {
    fn zero() -> Self {
        Self(F::ZERO)
    }

    fn as_degrees(self) -> Degrees<F> {
        Degrees::from(self)
    }

    fn as_radians(self) -> Radians<F> {
        self
    }

    fn degrees(self) -> F {
        Degrees::from(self).value()
    }

    fn radians(self) -> F {
        self.value()
    }
}

macro_rules! impl_angle_for_bare_float {
    ($($f:ty),*) => {
        $(
            impl Angle<$f> for $f {
                fn zero() -> Self {
                    0.0
                }

                fn as_degrees(self) -> Degrees<$f> {
                    Radians(self).as_degrees()
                }

                fn as_radians(self) -> Radians<$f> {
                    Radians(self)
                }

                fn degrees(self) -> $f {
                    radians_to_degrees(self)
                }

                fn radians(self) -> $f {
                    self
                }
            }
        )*
    };
}

impl_angle_for_bare_float!(f32, f64);

impl<F: Float> From<Radians<F>> for Degrees<F> {
    fn from(rad: Radians<F>) -> Self {
        Self(radians_to_degrees(rad.value()))
    }
}

impl<F: Float> From<Degrees<F>> for Radians<F> {
    fn from(deg: Degrees<F>) -> Self {
        Self(degrees_to_radians(deg.value()))
    }
}

// SAFETY: Both types are `repr(transparent)` wrappers around a `Pod` float.
unsafe impl<F: Float> Zeroable for Degrees<F> {}
unsafe impl<F: Float> Pod for Degrees<F> {}
unsafe impl<F: Float> Zeroable for Radians<F> {}
unsafe impl<F: Float> Pod for Radians<F> {}

macro_rules! impl_angle_ops {
    ($angle:ident, $other:ident) => {
        impl<F: Float> Add for $angle<F> {
            type Output = Self;
            fn add(self, rhs: Self) -> Self {
                Self(self.value() + rhs.value())
            }
        }

        impl<F: Float> Add<$other<F>> for $angle<F> {
            type Output = Self;
            fn add(self, rhs: $other<F>) -> Self {
                Self(self.value() + Self::from(rhs).value())
            }
        }

        impl<F: Float> Sub for $angle<F> {
            type Output = Self;
            fn sub(self, rhs: Self) -> Self {
                Self(self.value() - rhs.value())
            }
        }

        impl<F: Float> Sub<$other<F>> for $angle<F> {
            type Output = Self;
            fn sub(self, rhs: $other<F>) -> Self {
                Self(self.value() - Self::from(rhs).value())
            }
        }

        impl<F: Float> Neg for $angle<F> {
            type Output = Self;
            fn neg(self) -> Self {
                Self(-self.value())
            }
        }

        impl<F: Float> Mul<F> for $angle<F> {
            type Output = Self;
            fn mul(self, rhs: F) -> Self {
                Self(self.value() * rhs)
            }
        }

        impl<F: Float> Div<F> for $angle<F> {
            type Output = Self;
            fn div(self, rhs: F) -> Self {
                Self(self.value() / rhs)
            }
        }

        impl<F: Float> PartialEq<$other<F>> for $angle<F> {
            fn eq(&self, rhs: &$other<F>) -> bool {
                self.value() == Self::from(*rhs).value()
            }
        }

        impl<F: Float> PartialOrd<$other<F>> for $angle<F> {
            fn partial_cmp(&self, rhs: &$other<F>) -> Option<Ordering> {
                self.value().partial_cmp(&Self::from(*rhs).value())
            }
        }

        impl<F: Float> AbsDiffEq for $angle<F> {
            type Epsilon = F;

            fn default_epsilon() -> F {
                F::default_epsilon()
            }

            fn abs_diff_eq(&self, other: &Self, epsilon: F) -> bool {
                F::abs_diff_eq(&self.value(), &other.value(), epsilon)
            }
        }

        impl<F: Float> AbsDiffEq<$other<F>> for $angle<F> {
            type Epsilon = F;

            fn default_epsilon() -> F {
                F::default_epsilon()
            }

            fn abs_diff_eq(&self, other: &$other<F>, epsilon: F) -> bool {
                F::abs_diff_eq(&self.value(), &Self::from(*other).value(), epsilon)
            }
        }

        impl<F: Float> RelativeEq for $angle<F> {
            fn default_max_relative() -> F {
                F::default_max_relative()
            }

            fn relative_eq(&self, other: &Self, epsilon: F, max_relative: F) -> bool {
                F::relative_eq(&self.value(), &other.value(), epsilon, max_relative)
            }
        }

        impl<F: Float> RelativeEq<$other<F>> for $angle<F> {
            fn default_max_relative() -> F {
                F::default_max_relative()
            }

            fn relative_eq(&self, other: &$other<F>, epsilon: F, max_relative: F) -> bool {
                F::relative_eq(
                    &self.value(),
                    &Self::from(*other).value(),
                    epsilon,
                    max_relative,
                )
            }
        }
    };
}

impl_angle_ops!(Degrees, Radians);
impl_angle_ops!(Radians, Degrees);

pub fn radians_to_degrees<F: Float>(radians: F) -> F {
    radians * (F::HALF_TURN_DEGREES * F::FRAC_1_PI())
}

pub fn degrees_to_radians<F: Float>(degrees: F) -> F {
    degrees * (F::PI() / F::HALF_TURN_DEGREES)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::f32::PI;
    use approx::assert_abs_diff_eq;

    #[test]
    fn degrees_to_radians_for_special_angles_work() {
        assert_abs_diff_eq!(Degrees(0.0_f32).radians(), 0.0);

        assert_abs_diff_eq!(Degrees(90.0_f32).radians(), PI / 2.0);
        assert_abs_diff_eq!(Degrees(180.0_f32).radians(), PI);
        assert_abs_diff_eq!(Degrees(270.0_f32).radians(), 3.0 * PI / 2.0);
        assert_abs_diff_eq!(Degrees(360.0_f32).radians(), 2.0 * PI);

        assert_abs_diff_eq!(Degrees(-90.0_f32).radians(), -PI / 2.0);
        assert_abs_diff_eq!(Degrees(-180.0_f32).radians(), -PI);
        assert_abs_diff_eq!(Degrees(-360.0_f32).radians(), -2.0 * PI);
    }

    #[test]
    fn radians_to_degrees_for_special_angles_work() {
        assert_abs_diff_eq!(Radians(0.0).degrees(), 0.0);

        assert_abs_diff_eq!(Radians(PI / 2.0).degrees(), 90.0);
        assert_abs_diff_eq!(Radians(PI).degrees(), 180.0);
        assert_abs_diff_eq!(Radians(2.0 * PI).degrees(), 360.0);

        assert_abs_diff_eq!(Radians(-PI / 2.0).degrees(), -90.0);
        assert_abs_diff_eq!(Radians(-PI).degrees(), -180.0);
    }

    #[test]
    fn double_precision_conversions_work() {
        use crate::consts::f64::PI;
        assert_abs_diff_eq!(Degrees(180.0_f64).radians(), PI, epsilon = 1e-15);
        assert_abs_diff_eq!(Radians(PI / 4.0).degrees(), 45.0, epsilon = 1e-12);
    }

    #[test]
    fn bare_floats_are_radians() {
        assert_eq!(Angle::<f32>::radians(1.5_f32), 1.5);
        assert_abs_diff_eq!(PI.degrees(), 180.0);
        assert_abs_diff_eq!(PI.as_degrees(), Degrees(180.0));
        assert_eq!(<f64 as Angle<f64>>::zero(), 0.0);
    }

    #[test]
    fn degree_ops_work() {
        assert_abs_diff_eq!(Degrees(42.0) + Degrees(30.0), Degrees(72.0));
        assert_abs_diff_eq!(Degrees(42.0) - Degrees(30.0), Degrees(12.0));
        assert_abs_diff_eq!(Degrees(42.0) * 2.5, Degrees(105.0));
        assert_abs_diff_eq!(Degrees(42.0) / 4.0, Degrees(10.5));
        assert_abs_diff_eq!(-Degrees(42.0), Degrees(-42.0));
    }

    #[test]
    fn radian_ops_work() {
        assert_abs_diff_eq!(Radians(42.0) + Radians(30.0), Radians(72.0));
        assert_abs_diff_eq!(Radians(42.0) - Radians(30.0), Radians(12.0));
        assert_abs_diff_eq!(Radians(42.0) * 2.5, Radians(105.0));
        assert_abs_diff_eq!(Radians(42.0) / 4.0, Radians(10.5));
    }

    #[test]
    fn mixed_degree_radian_ops_work() {
        assert_abs_diff_eq!(Degrees(45.0) + Radians(PI / 2.0), Degrees(135.0));
        assert_abs_diff_eq!(Radians(PI / 2.0) + Degrees(45.0), Radians(3.0 * PI / 4.0));
        assert_abs_diff_eq!(Degrees(45.0) - Radians(PI / 2.0), Degrees(-45.0));
        assert_abs_diff_eq!(Radians(PI / 2.0) - Degrees(45.0), Radians(PI / 4.0));

        assert_eq!(Degrees(0.0), Radians(0.0));
        assert!(Degrees(42.0) > Radians(0.0));
        assert!(Degrees(42.0) < Radians(PI));

        assert_eq!(Radians(0.0), Degrees(0.0));
        assert!(Radians(PI) > Degrees(0.0));
        assert!(Radians(PI) < Degrees(360.0));
    }

    #[test]
    fn mixed_approximate_comparison_works() {
        assert_abs_diff_eq!(Degrees(90.0_f32), Radians(PI / 2.0), epsilon = 1e-4);
        assert!(Radians(PI).relative_eq(&Degrees(180.0_f32), 1e-6, 1e-6));
    }
}
