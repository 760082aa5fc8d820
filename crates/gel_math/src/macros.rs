//! Utility macros for implementing the operator families of vectors and
//! matrices.
//!
//! The macros rely on the target type `$t<T, N>` having the methods `apply`,
//! `zip_apply`, `mapped` and `has_valid_divisors`. Component-wise binary
//! operators are derived from their compound assignment counterparts, while
//! the linear algebra products go the other way.

macro_rules! check_operand {
    (none, $operand:expr) => {};
    (scalar_divisor, $operand:expr) => {
        debug_assert!(
            $crate::num::Scalar::is_valid_divisor($operand),
            "tried to divide by zero"
        )
    };
    (component_divisors, $operand:expr) => {
        debug_assert!($operand.has_valid_divisors(), "tried to divide by a zero component")
    };
}

/// Implements a component-wise operator and its compound assignment form
/// between two values of the target type, for every combination of owned
/// and borrowed operands.
macro_rules! impl_componentwise_binop {
    (
        $t:ident,
        $op:ident, $method:ident,
        $op_assign:ident, $method_assign:ident,
        check = $check:ident,
        where T: $($bound:tt)+
    ) => {
        impl<T, const N: usize> ::std::ops::$op_assign<&$t<T, N>> for $t<T, N>
        where
            T: $($bound)+,
        {
            #[inline]
            fn $method_assign(&mut self, rhs: &$t<T, N>) {
                check_operand!($check, rhs);
                self.zip_apply(rhs, |a, b| ::std::ops::$op::$method(a, b));
            }
        }

        impl<T, const N: usize> ::std::ops::$op_assign<$t<T, N>> for $t<T, N>
        where
            T: $($bound)+,
        {
            #[inline]
            fn $method_assign(&mut self, rhs: $t<T, N>) {
                ::std::ops::$op_assign::$method_assign(self, &rhs);
            }
        }

        impl<'a, T, const N: usize> ::std::ops::$op<&'a $t<T, N>> for &'a $t<T, N>
        where
            T: $($bound)+,
        {
            type Output = $t<T, N>;

            #[inline]
            fn $method(self, rhs: &'a $t<T, N>) -> Self::Output {
                let mut result = *self;
                ::std::ops::$op_assign::$method_assign(&mut result, rhs);
                result
            }
        }

        impl<T, const N: usize> ::std::ops::$op<$t<T, N>> for &$t<T, N>
        where
            T: $($bound)+,
        {
            type Output = $t<T, N>;

            #[inline]
            fn $method(self, rhs: $t<T, N>) -> Self::Output {
                ::std::ops::$op::$method(self, &rhs)
            }
        }

        impl<'a, T, const N: usize> ::std::ops::$op<&'a $t<T, N>> for $t<T, N>
        where
            T: $($bound)+,
        {
            type Output = $t<T, N>;

            #[inline]
            fn $method(self, rhs: &'a $t<T, N>) -> Self::Output {
                ::std::ops::$op::$method(&self, rhs)
            }
        }

        impl<T, const N: usize> ::std::ops::$op<$t<T, N>> for $t<T, N>
        where
            T: $($bound)+,
        {
            type Output = $t<T, N>;

            #[inline]
            fn $method(self, rhs: $t<T, N>) -> Self::Output {
                ::std::ops::$op::$method(&self, &rhs)
            }
        }
    };
}

/// Implements an operator between the target type with element type
/// `$scalar` and a single `$scalar`, applied to every component. This
/// includes the compound assignment form and the forms with the scalar on
/// the left hand side.
macro_rules! impl_scalar_binop {
    (
        $t:ident, $scalar:ty,
        $op:ident, $method:ident,
        $op_assign:ident, $method_assign:ident,
        check = $check:ident,
        reverse_check = $reverse_check:ident
    ) => {
        impl<const N: usize> ::std::ops::$op_assign<$scalar> for $t<$scalar, N> {
            #[inline]
            fn $method_assign(&mut self, rhs: $scalar) {
                check_operand!($check, rhs);
                self.apply(|a| ::std::ops::$op::$method(a, rhs));
            }
        }

        impl<const N: usize> ::std::ops::$op<$scalar> for &$t<$scalar, N> {
            type Output = $t<$scalar, N>;

            #[inline]
            fn $method(self, rhs: $scalar) -> Self::Output {
                let mut result = *self;
                ::std::ops::$op_assign::$method_assign(&mut result, rhs);
                result
            }
        }

        impl<const N: usize> ::std::ops::$op<$scalar> for $t<$scalar, N> {
            type Output = $t<$scalar, N>;

            #[inline]
            fn $method(self, rhs: $scalar) -> Self::Output {
                ::std::ops::$op::$method(&self, rhs)
            }
        }

        impl<const N: usize> ::std::ops::$op<&$t<$scalar, N>> for $scalar {
            type Output = $t<$scalar, N>;

            #[inline]
            fn $method(self, rhs: &$t<$scalar, N>) -> Self::Output {
                check_operand!($reverse_check, rhs);
                rhs.mapped(|b| ::std::ops::$op::$method(self, b))
            }
        }

        impl<const N: usize> ::std::ops::$op<$t<$scalar, N>> for $scalar {
            type Output = $t<$scalar, N>;

            #[inline]
            fn $method(self, rhs: $t<$scalar, N>) -> Self::Output {
                ::std::ops::$op::$method(self, &rhs)
            }
        }
    };
}

/// Implements the arithmetic scalar operators (and the bitwise ones for
/// integer element types) for the target type, for each listed primitive.
macro_rules! impl_scalar_ops {
    ($t:ident, float = [$($f:ty),*], integer = [$($i:ty),*]) => {
        $(
            impl_scalar_ops!(@arithmetic $t, $f);
        )*
        $(
            impl_scalar_ops!(@arithmetic $t, $i);
            impl_scalar_ops!(@bitwise $t, $i);
        )*
    };
    (@arithmetic $t:ident, $scalar:ty) => {
        impl_scalar_binop!($t, $scalar, Add, add, AddAssign, add_assign, check = none, reverse_check = none);
        impl_scalar_binop!($t, $scalar, Sub, sub, SubAssign, sub_assign, check = none, reverse_check = none);
        impl_scalar_binop!($t, $scalar, Mul, mul, MulAssign, mul_assign, check = none, reverse_check = none);
        impl_scalar_binop!(
            $t, $scalar, Div, div, DivAssign, div_assign,
            check = scalar_divisor, reverse_check = component_divisors
        );
        impl_scalar_binop!(
            $t, $scalar, Rem, rem, RemAssign, rem_assign,
            check = scalar_divisor, reverse_check = component_divisors
        );
    };
    (@bitwise $t:ident, $scalar:ty) => {
        impl_scalar_binop!($t, $scalar, BitAnd, bitand, BitAndAssign, bitand_assign, check = none, reverse_check = none);
        impl_scalar_binop!($t, $scalar, BitOr, bitor, BitOrAssign, bitor_assign, check = none, reverse_check = none);
        impl_scalar_binop!($t, $scalar, BitXor, bitxor, BitXorAssign, bitxor_assign, check = none, reverse_check = none);
    };
}

/// Implements a component-wise unary operator for the target type.
macro_rules! impl_componentwise_unary_op {
    ($t:ident, $op:ident, $method:ident) => {
        impl<T, const N: usize> ::std::ops::$op for &$t<T, N>
        where
            T: $crate::num::Scalar + ::std::ops::$op<Output = T>,
        {
            type Output = $t<T, N>;

            #[inline]
            fn $method(self) -> Self::Output {
                self.mapped(|a| ::std::ops::$op::$method(a))
            }
        }

        impl<T, const N: usize> ::std::ops::$op for $t<T, N>
        where
            T: $crate::num::Scalar + ::std::ops::$op<Output = T>,
        {
            type Output = $t<T, N>;

            #[inline]
            fn $method(self) -> Self::Output {
                ::std::ops::$op::$method(&self)
            }
        }
    };
}

/// Implements component-wise bit shifts for the target type, either by a
/// single `u32` amount or by the matching component of a `u32` vector. The
/// vector form indexes the target type, so it must index components.
macro_rules! impl_componentwise_shift {
    ($t:ident, $op:ident, $method:ident, $op_assign:ident, $method_assign:ident) => {
        impl<T, const N: usize> ::std::ops::$op_assign<&$t<u32, N>> for $t<T, N>
        where
            T: $crate::num::Scalar + ::std::ops::$op<u32, Output = T>,
        {
            #[inline]
            fn $method_assign(&mut self, rhs: &$t<u32, N>) {
                for i in 0..N {
                    self[i] = ::std::ops::$op::$method(self[i], rhs[i]);
                }
            }
        }

        impl<T, const N: usize> ::std::ops::$op_assign<$t<u32, N>> for $t<T, N>
        where
            T: $crate::num::Scalar + ::std::ops::$op<u32, Output = T>,
        {
            #[inline]
            fn $method_assign(&mut self, rhs: $t<u32, N>) {
                ::std::ops::$op_assign::$method_assign(self, &rhs);
            }
        }

        impl<'a, T, const N: usize> ::std::ops::$op<&'a $t<u32, N>> for &$t<T, N>
        where
            T: $crate::num::Scalar + ::std::ops::$op<u32, Output = T>,
        {
            type Output = $t<T, N>;

            #[inline]
            fn $method(self, rhs: &'a $t<u32, N>) -> Self::Output {
                let mut result = *self;
                ::std::ops::$op_assign::$method_assign(&mut result, rhs);
                result
            }
        }

        impl<T, const N: usize> ::std::ops::$op<$t<u32, N>> for &$t<T, N>
        where
            T: $crate::num::Scalar + ::std::ops::$op<u32, Output = T>,
        {
            type Output = $t<T, N>;

            #[inline]
            fn $method(self, rhs: $t<u32, N>) -> Self::Output {
                ::std::ops::$op::$method(self, &rhs)
            }
        }

        impl<'a, T, const N: usize> ::std::ops::$op<&'a $t<u32, N>> for $t<T, N>
        where
            T: $crate::num::Scalar + ::std::ops::$op<u32, Output = T>,
        {
            type Output = $t<T, N>;

            #[inline]
            fn $method(self, rhs: &'a $t<u32, N>) -> Self::Output {
                ::std::ops::$op::$method(&self, rhs)
            }
        }

        impl<T, const N: usize> ::std::ops::$op<$t<u32, N>> for $t<T, N>
        where
            T: $crate::num::Scalar + ::std::ops::$op<u32, Output = T>,
        {
            type Output = $t<T, N>;

            #[inline]
            fn $method(self, rhs: $t<u32, N>) -> Self::Output {
                ::std::ops::$op::$method(&self, &rhs)
            }
        }

        impl<T, const N: usize> ::std::ops::$op_assign<u32> for $t<T, N>
        where
            T: $crate::num::Scalar + ::std::ops::$op<u32, Output = T>,
        {
            #[inline]
            fn $method_assign(&mut self, rhs: u32) {
                self.apply(|a| ::std::ops::$op::$method(a, rhs));
            }
        }

        impl<T, const N: usize> ::std::ops::$op<u32> for &$t<T, N>
        where
            T: $crate::num::Scalar + ::std::ops::$op<u32, Output = T>,
        {
            type Output = $t<T, N>;

            #[inline]
            fn $method(self, rhs: u32) -> Self::Output {
                self.mapped(|a| ::std::ops::$op::$method(a, rhs))
            }
        }

        impl<T, const N: usize> ::std::ops::$op<u32> for $t<T, N>
        where
            T: $crate::num::Scalar + ::std::ops::$op<u32, Output = T>,
        {
            type Output = $t<T, N>;

            #[inline]
            fn $method(self, rhs: u32) -> Self::Output {
                ::std::ops::$op::$method(&self, rhs)
            }
        }
    };
}

macro_rules! impl_abs_diff_eq {
    ($t:ident, |$a:ident, $b:ident, $epsilon:ident| $body:expr) => {
        impl<F: $crate::num::Float, const N: usize> ::approx::AbsDiffEq for $t<F, N> {
            type Epsilon = F;

            #[inline]
            fn default_epsilon() -> F {
                F::default_epsilon()
            }

            #[inline]
            fn abs_diff_eq(&self, other: &Self, epsilon: F) -> bool {
                let $a = self;
                let $b = other;
                let $epsilon = epsilon;
                $body
            }
        }
    };
}

macro_rules! impl_relative_eq {
    ($t:ident, |$a:ident, $b:ident, $epsilon:ident, $max_relative:ident| $body:expr) => {
        impl<F: $crate::num::Float, const N: usize> ::approx::RelativeEq for $t<F, N> {
            #[inline]
            fn default_max_relative() -> F {
                F::default_max_relative()
            }

            #[inline]
            fn relative_eq(&self, other: &Self, epsilon: F, max_relative: F) -> bool {
                let $a = self;
                let $b = other;
                let $epsilon = epsilon;
                let $max_relative = max_relative;
                $body
            }
        }
    };
}

/// Implements a binary operator for every combination of owned and borrowed
/// operands, given the body for two borrowed operands.
macro_rules! impl_binop {
    (
        $op:ident, $method:ident,
        $tl:ty, $tr:ty, $to:ty,
        where [$($where:tt)+],
        |$lhs:ident, $rhs:ident| $body:block
    ) => {
        impl<'a, T, const N: usize> ::std::ops::$op<&'a $tr> for &'a $tl
        where
            $($where)+
        {
            type Output = $to;

            #[inline]
            fn $method(self, rhs: &'a $tr) -> Self::Output {
                let $lhs = self;
                let $rhs = rhs;
                $body
            }
        }

        impl<T, const N: usize> ::std::ops::$op<$tr> for &$tl
        where
            $($where)+
        {
            type Output = $to;

            #[inline]
            fn $method(self, rhs: $tr) -> Self::Output {
                ::std::ops::$op::$method(self, &rhs)
            }
        }

        impl<'a, T, const N: usize> ::std::ops::$op<&'a $tr> for $tl
        where
            $($where)+
        {
            type Output = $to;

            #[inline]
            fn $method(self, rhs: &'a $tr) -> Self::Output {
                ::std::ops::$op::$method(&self, rhs)
            }
        }

        impl<T, const N: usize> ::std::ops::$op<$tr> for $tl
        where
            $($where)+
        {
            type Output = $to;

            #[inline]
            fn $method(self, rhs: $tr) -> Self::Output {
                ::std::ops::$op::$method(&self, &rhs)
            }
        }
    };
}

/// Implements a compound assignment operator that replaces the left hand
/// side with the result of the corresponding binary operator.
macro_rules! impl_binop_assign {
    (
        $op_assign:ident, $method_assign:ident, $op:ident, $method:ident,
        $tl:ty, $tr:ty,
        where [$($where:tt)+]
    ) => {
        impl<T, const N: usize> ::std::ops::$op_assign<&$tr> for $tl
        where
            $($where)+
        {
            #[inline]
            fn $method_assign(&mut self, rhs: &$tr) {
                *self = ::std::ops::$op::$method(&*self, rhs);
            }
        }

        impl<T, const N: usize> ::std::ops::$op_assign<$tr> for $tl
        where
            $($where)+
        {
            #[inline]
            fn $method_assign(&mut self, rhs: $tr) {
                ::std::ops::$op_assign::$method_assign(self, &rhs);
            }
        }
    };
}
