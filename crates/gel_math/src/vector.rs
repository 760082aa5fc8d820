//! Vectors.

use crate::{
    num::{Float, Scalar},
    reference::VectorRef,
};
use bytemuck::{Pod, Zeroable};
use num_traits as nt;
use std::{
    array, fmt,
    ops::{BitAnd, BitOr, BitXor, Index, IndexMut},
};

/// A vector with `N` components of type `T`, stored contiguously.
///
/// Equality is evaluated component-wise with [`Scalar::approx_eq`], so float
/// vectors compare equal when every pair of components is equal within the
/// relative tolerance of [`scalar::eq`](crate::scalar::eq).
#[repr(C)]
#[derive(Clone, Copy, Debug)]
pub struct Vector<T, const N: usize> {
    components: [T; N],
}

/// A 1-dimensional vector.
pub type Vector1<T = f32> = Vector<T, 1>;

/// A 2-dimensional vector.
pub type Vector2<T = f32> = Vector<T, 2>;

/// A 3-dimensional vector.
pub type Vector3<T = f32> = Vector<T, 3>;

/// A 4-dimensional vector.
pub type Vector4<T = f32> = Vector<T, 4>;

impl<T: Scalar, const N: usize> Vector<T, N> {
    /// The number of components.
    pub const DIMENSION: usize = N;

    /// Creates a vector with the given components.
    #[inline]
    pub const fn from_array(components: [T; N]) -> Self {
        Self { components }
    }

    /// Creates a vector whose component `i` is `f(i)`.
    #[inline]
    pub fn from_fn(f: impl FnMut(usize) -> T) -> Self {
        Self::from_array(array::from_fn(f))
    }

    /// Creates a vector with all zeros.
    #[inline]
    pub fn zeros() -> Self {
        Self::same(T::ZERO)
    }

    /// Creates a vector with all components equal to the given value.
    #[inline]
    pub fn same(value: T) -> Self {
        Self::from_array([value; N])
    }

    /// Creates a vector with a one at the given axis and zeros elsewhere.
    ///
    /// # Panics
    /// If `axis` is not smaller than `N`.
    #[inline]
    pub fn unit(axis: usize) -> Self {
        let mut unit = Self::zeros();
        unit[axis] = T::ONE;
        unit
    }

    #[inline]
    pub const fn as_array(&self) -> &[T; N] {
        &self.components
    }

    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.components
    }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.components
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.components.iter()
    }

    /// Creates a reference vector aliasing the components of this vector.
    #[inline]
    pub fn referenced(&mut self) -> VectorRef<'_, T, N> {
        VectorRef::new(self.components.each_mut())
    }

    /// Returns the vector obtained by applying the given function to each
    /// component.
    #[inline]
    pub fn mapped<U: Scalar>(&self, mut f: impl FnMut(T) -> U) -> Vector<U, N> {
        Vector::from_fn(|i| f(self.components[i]))
    }

    /// Returns the vector obtained by applying the given function to each
    /// pair of corresponding components.
    #[inline]
    pub fn zip_mapped(&self, other: &Self, mut f: impl FnMut(T, T) -> T) -> Self {
        Self::from_fn(|i| f(self.components[i], other.components[i]))
    }

    #[inline]
    pub(crate) fn apply(&mut self, mut f: impl FnMut(T) -> T) {
        for component in &mut self.components {
            *component = f(*component);
        }
    }

    #[inline]
    pub(crate) fn zip_apply(&mut self, other: &Self, mut f: impl FnMut(T, T) -> T) {
        for (component, &other_component) in self.components.iter_mut().zip(&other.components) {
            *component = f(*component, other_component);
        }
    }

    #[inline]
    pub(crate) fn has_valid_divisors(&self) -> bool {
        self.components.iter().all(|&c| c.is_valid_divisor())
    }

    /// Converts the components to another scalar type, or returns [`None`]
    /// if any component is not representable in the target type.
    pub fn cast<U: Scalar>(&self) -> Option<Vector<U, N>> {
        let mut result = Vector::<U, N>::zeros();
        for (target, &source) in result.components.iter_mut().zip(&self.components) {
            *target = nt::cast(source)?;
        }
        Some(result)
    }

    /// Returns a vector with the leading `M` components of this vector.
    #[inline]
    pub fn truncated<const M: usize>(&self) -> Vector<T, M> {
        const { assert!(M <= N, "truncation cannot increase the dimension") };
        Vector::from_fn(|i| self.components[i])
    }

    /// Returns the vector of dimension `K = N + M` holding the components of
    /// this vector followed by those of `other`.
    #[inline]
    pub fn concat<const M: usize, const K: usize>(&self, other: &Vector<T, M>) -> Vector<T, K> {
        const { assert!(N + M == K, "concatenated dimension must be the sum of the parts") };
        Vector::from_fn(|i| {
            if i < N {
                self.components[i]
            } else {
                other.components[i - N]
            }
        })
    }

    /// Returns this vector scaled by the given factor.
    #[inline]
    pub fn scaled(&self, factor: T) -> Self {
        self.mapped(|c| c * factor)
    }

    #[inline]
    pub fn dot(&self, other: &Self) -> T {
        self.components
            .iter()
            .zip(&other.components)
            .fold(T::ZERO, |sum, (&a, &b)| sum + a * b)
    }

    #[inline]
    pub fn norm_squared(&self) -> T {
        self.dot(self)
    }

    /// Computes the component-wise minimum of the two vectors.
    #[inline]
    pub fn component_min(&self, other: &Self) -> Self {
        self.zip_mapped(other, crate::scalar::min)
    }

    /// Computes the component-wise maximum of the two vectors.
    #[inline]
    pub fn component_max(&self, other: &Self) -> Self {
        self.zip_mapped(other, crate::scalar::max)
    }

    /// Returns the smallest component.
    #[inline]
    pub fn min_component(&self) -> T {
        const { assert!(N > 0, "a vector without components has no minimum") };
        self.components[1..]
            .iter()
            .fold(self.components[0], |min, &c| crate::scalar::min(min, c))
    }

    /// Returns the largest component.
    #[inline]
    pub fn max_component(&self) -> T {
        const { assert!(N > 0, "a vector without components has no maximum") };
        self.components[1..]
            .iter()
            .fold(self.components[0], |max, &c| crate::scalar::max(max, c))
    }

    /// Adds one to every component.
    #[inline]
    pub fn increment(&mut self) -> &mut Self {
        self.apply(|c| c + T::ONE);
        self
    }

    /// Subtracts one from every component.
    #[inline]
    pub fn decrement(&mut self) -> &mut Self {
        self.apply(|c| c - T::ONE);
        self
    }
}

impl<F: Float, const N: usize> Vector<F, N> {
    /// Computes the Euclidean length of the vector.
    #[inline]
    pub fn norm(&self) -> F {
        self.norm_squared().sqrt()
    }

    /// Computes the normalized version of the vector. The result has NaN
    /// components if the vector has zero length.
    #[inline]
    pub fn normalized(&self) -> Self {
        let norm = self.norm();
        self.mapped(|c| c / norm)
    }

    /// Computes the projection of this vector onto the given vector.
    #[inline]
    pub fn projected_onto(&self, other: &Self) -> Self {
        other.scaled(self.dot(other) / other.norm_squared())
    }
}

macro_rules! impl_component_accessors {
    ($($index:literal => [$($name:ident),+]),+ $(,)?) => {
        $(
            $(
                #[inline]
                pub fn $name(&self) -> T {
                    self.components[$index]
                }

                pastey::paste! {
                    #[inline]
                    pub fn [<$name _mut>](&mut self) -> &mut T {
                        &mut self.components[$index]
                    }
                }
            )+
        )+
    };
}

impl<T: Scalar> Vector1<T> {
    #[inline]
    pub const fn new(x: T) -> Self {
        Self::from_array([x])
    }

    /// Creates a 2D vector with this as the first component.
    #[inline]
    pub fn extended(&self, y: T) -> Vector2<T> {
        Vector2::new(self.x(), y)
    }

    impl_component_accessors!(0 => [x, r, s, i, hue]);
}

impl<T: Scalar> Vector2<T> {
    #[inline]
    pub const fn new(x: T, y: T) -> Self {
        Self::from_array([x, y])
    }

    /// Creates a 3D vector from this vector and the given third component.
    #[inline]
    pub fn extended(&self, z: T) -> Vector3<T> {
        Vector3::new(self.x(), self.y(), z)
    }

    /// Creates a 3D vector from the given first component and this vector.
    #[inline]
    pub fn prepended(&self, x: T) -> Vector3<T> {
        Vector3::new(x, self.x(), self.y())
    }

    impl_component_accessors!(
        0 => [x, r, s, i, hue],
        1 => [y, g, t, j, lum],
    );
}

impl<T: Scalar> Vector3<T> {
    #[inline]
    pub const fn new(x: T, y: T, z: T) -> Self {
        Self::from_array([x, y, z])
    }

    /// Creates a 4D vector from this vector and the given fourth component.
    #[inline]
    pub fn extended(&self, w: T) -> Vector4<T> {
        Vector4::new(self.x(), self.y(), self.z(), w)
    }

    /// Creates a 4D vector from the given first component and this vector.
    #[inline]
    pub fn prepended(&self, x: T) -> Vector4<T> {
        Vector4::new(x, self.x(), self.y(), self.z())
    }

    #[inline]
    pub fn xy(&self) -> Vector2<T> {
        self.truncated()
    }

    /// Computes the cross product of this and the given vector.
    #[inline]
    pub fn cross(&self, other: &Self) -> Self {
        Self::new(
            self.y() * other.z() - self.z() * other.y(),
            self.z() * other.x() - self.x() * other.z(),
            self.x() * other.y() - self.y() * other.x(),
        )
    }

    impl_component_accessors!(
        0 => [x, r, s, i, hue],
        1 => [y, g, t, j, lum],
        2 => [z, b, p, k, sat],
    );
}

impl<T: Scalar> Vector4<T> {
    #[inline]
    pub const fn new(x: T, y: T, z: T, w: T) -> Self {
        Self::from_array([x, y, z, w])
    }

    #[inline]
    pub fn xy(&self) -> Vector2<T> {
        self.truncated()
    }

    #[inline]
    pub fn xyz(&self) -> Vector3<T> {
        self.truncated()
    }

    impl_component_accessors!(
        0 => [x, r, s, i, hue],
        1 => [y, g, t, j, lum],
        2 => [z, b, p, k, sat],
        3 => [w, a, q, l, alpha],
    );
}

impl<T: Scalar, const N: usize> Default for Vector<T, N> {
    fn default() -> Self {
        Self::zeros()
    }
}

impl<T: Scalar, const N: usize> From<[T; N]> for Vector<T, N> {
    fn from(components: [T; N]) -> Self {
        Self::from_array(components)
    }
}

impl<T: Scalar, const N: usize> From<Vector<T, N>> for [T; N] {
    fn from(vector: Vector<T, N>) -> Self {
        vector.components
    }
}

impl<T: Scalar, const N: usize> Index<usize> for Vector<T, N> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &T {
        &self.components[index]
    }
}

impl<T: Scalar, const N: usize> IndexMut<usize> for Vector<T, N> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.components[index]
    }
}

impl<'a, T: Scalar, const N: usize> IntoIterator for &'a Vector<T, N> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: Scalar, const N: usize> PartialEq for Vector<T, N> {
    fn eq(&self, other: &Self) -> bool {
        self.components
            .iter()
            .zip(&other.components)
            .all(|(&a, &b)| a.approx_eq(b))
    }
}

impl<T: Scalar, const N: usize> fmt::Display for Vector<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (i, component) in self.components.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{component}")?;
        }
        write!(f, ")")
    }
}

// SAFETY: `Vector` is `repr(C)` with a single array field, so it has no
// padding and is zeroable and plain-old-data whenever `T` is.
unsafe impl<T: Zeroable, const N: usize> Zeroable for Vector<T, N> {}
unsafe impl<T: Pod, const N: usize> Pod for Vector<T, N> {}

impl_componentwise_binop!(Vector, Add, add, AddAssign, add_assign, check = none, where T: Scalar);
impl_componentwise_binop!(Vector, Sub, sub, SubAssign, sub_assign, check = none, where T: Scalar);
impl_componentwise_binop!(Vector, Mul, mul, MulAssign, mul_assign, check = none, where T: Scalar);
impl_componentwise_binop!(
    Vector, Div, div, DivAssign, div_assign,
    check = component_divisors,
    where T: Scalar
);
impl_componentwise_binop!(
    Vector, Rem, rem, RemAssign, rem_assign,
    check = component_divisors,
    where T: Scalar
);
impl_componentwise_binop!(
    Vector, BitAnd, bitand, BitAndAssign, bitand_assign,
    check = none,
    where T: Scalar + BitAnd<Output = T>
);
impl_componentwise_binop!(
    Vector, BitOr, bitor, BitOrAssign, bitor_assign,
    check = none,
    where T: Scalar + BitOr<Output = T>
);
impl_componentwise_binop!(
    Vector, BitXor, bitxor, BitXorAssign, bitxor_assign,
    check = none,
    where T: Scalar + BitXor<Output = T>
);

impl_componentwise_unary_op!(Vector, Neg, neg);
impl_componentwise_unary_op!(Vector, Not, not);

impl_componentwise_shift!(Vector, Shl, shl, ShlAssign, shl_assign);
impl_componentwise_shift!(Vector, Shr, shr, ShrAssign, shr_assign);

impl_scalar_ops!(
    Vector,
    float = [f32, f64],
    integer = [i8, i16, i32, i64, isize, u8, u16, u32, u64, usize]
);

impl_abs_diff_eq!(Vector, |a, b, epsilon| {
    a.components
        .iter()
        .zip(&b.components)
        .all(|(a, b)| a.abs_diff_eq(b, epsilon))
});

impl_relative_eq!(Vector, |a, b, epsilon, max_relative| {
    a.components
        .iter()
        .zip(&b.components)
        .all(|(a, b)| a.relative_eq(b, epsilon, max_relative))
});

#[cfg(test)]
mod tests {
    #![allow(clippy::op_ref)]

    use super::*;
    use approx::assert_abs_diff_eq;
    use proptest::prelude::*;

    const EPSILON: f32 = 1e-6;

    prop_compose! {
        fn vector3_strategy(max_coord: f64)(
            x in -max_coord..max_coord,
            y in -max_coord..max_coord,
            z in -max_coord..max_coord,
        ) -> Vector3<f64> {
            Vector3::new(x, y, z)
        }
    }

    #[test]
    fn default_vector_is_zero() {
        assert_eq!(Vector3::<f32>::default(), Vector3::new(0.0, 0.0, 0.0));
        assert_eq!(Vector4::<i32>::default(), Vector4::zeros());
    }

    #[test]
    fn broadcasting_scalar_fills_all_components() {
        assert_eq!(Vector4::same(7_u8).as_array(), &[7, 7, 7, 7]);
    }

    #[test]
    fn unit_vector_has_one_at_axis() {
        assert_eq!(Vector3::<f64>::unit(1), Vector3::new(0.0, 1.0, 0.0));
    }

    #[test]
    fn component_aliases_name_same_slots() {
        let mut v = Vector4::new(1, 2, 3, 4);
        assert_eq!((v.x(), v.r(), v.s(), v.i(), v.hue()), (1, 1, 1, 1, 1));
        assert_eq!((v.y(), v.g(), v.t(), v.j(), v.lum()), (2, 2, 2, 2, 2));
        assert_eq!((v.z(), v.b(), v.p(), v.k(), v.sat()), (3, 3, 3, 3, 3));
        assert_eq!((v.w(), v.a(), v.q(), v.l(), v.alpha()), (4, 4, 4, 4, 4));

        *v.alpha_mut() = 40;
        *v.r_mut() = 10;
        assert_eq!(v, Vector4::new(10, 2, 3, 40));
    }

    #[test]
    fn indexing_reads_and_writes_components() {
        let mut v = Vector2::new(0.5_f32, 1.5);
        assert_eq!(v[0], 0.5);
        assert_eq!(v[1], 1.5);
        v[1] = -1.0;
        assert_eq!(v.y(), -1.0);
    }

    #[test]
    #[should_panic]
    fn indexing_vector2_at_two_panics() {
        let v = Vector2::new(1.0_f32, 2.0);
        let _ = v[2];
    }

    #[test]
    fn truncating_keeps_leading_components() {
        let v = Vector4::new(1, 2, 3, 4);
        assert_eq!(v.xyz(), Vector3::new(1, 2, 3));
        assert_eq!(v.xy(), Vector2::new(1, 2));
        assert_eq!(v.truncated::<1>(), Vector1::new(1));
        assert_eq!(Vector3::new(5, 6, 7).xy(), Vector2::new(5, 6));
    }

    #[test]
    fn extending_places_new_component_correctly() {
        assert_eq!(Vector1::new(1).extended(2), Vector2::new(1, 2));
        assert_eq!(Vector2::new(1, 2).extended(3), Vector3::new(1, 2, 3));
        assert_eq!(Vector2::new(2, 3).prepended(1), Vector3::new(1, 2, 3));
        assert_eq!(Vector3::new(1, 2, 3).extended(4), Vector4::new(1, 2, 3, 4));
        assert_eq!(Vector3::new(2, 3, 4).prepended(1), Vector4::new(1, 2, 3, 4));
    }

    #[test]
    fn concatenating_vectors_joins_components() {
        let a = Vector2::new(1, 2);
        let b = Vector2::new(3, 4);
        assert_eq!(a.concat::<2, 4>(&b), Vector4::new(1, 2, 3, 4));

        let scalar_vector_scalar: Vector4<i32> = Vector1::new(9).concat::<2, 3>(&a).extended(9);
        assert_eq!(scalar_vector_scalar, Vector4::new(9, 1, 2, 9));
    }

    #[test]
    fn casting_converts_representable_components() {
        let v = Vector3::new(1.0_f64, -2.0, 3.0);
        assert_eq!(v.cast::<i32>(), Some(Vector3::new(1, -2, 3)));
        assert_eq!(Vector2::new(-1_i32, 1).cast::<u8>(), None);
    }

    #[test]
    fn adding_and_subtracting_vectors_works() {
        let a = Vector3::new(1.0_f32, 2.0, 3.0);
        let b = Vector3::new(0.5_f32, -1.0, 4.0);

        assert_abs_diff_eq!(a + b, Vector3::new(1.5, 1.0, 7.0), epsilon = EPSILON);
        assert_abs_diff_eq!(&a - &b, Vector3::new(0.5, 3.0, -1.0), epsilon = EPSILON);
        assert_abs_diff_eq!(a - &b, &a - b, epsilon = EPSILON);
    }

    #[test]
    fn componentwise_multiplication_and_division_work() {
        let a = Vector2::new(6_i32, -8);
        let b = Vector2::new(2_i32, 4);

        assert_eq!(a * b, Vector2::new(12, -32));
        assert_eq!(a / b, Vector2::new(3, -2));
        assert_eq!(a % Vector2::new(4, 3), Vector2::new(2, -2));
    }

    #[test]
    fn scalar_operations_work_on_both_sides() {
        let v = Vector3::new(1.0_f64, 2.0, 4.0);

        assert_eq!(v + 1.0, Vector3::new(2.0, 3.0, 5.0));
        assert_eq!(v - 1.0, Vector3::new(0.0, 1.0, 3.0));
        assert_eq!(v * 2.0, Vector3::new(2.0, 4.0, 8.0));
        assert_eq!(&v / 2.0, Vector3::new(0.5, 1.0, 2.0));
        assert_eq!(v % 3.0, Vector3::new(1.0, 2.0, 1.0));

        assert_eq!(1.0 + v, Vector3::new(2.0, 3.0, 5.0));
        assert_eq!(10.0 - v, Vector3::new(9.0, 8.0, 6.0));
        assert_eq!(2.0 * &v, Vector3::new(2.0, 4.0, 8.0));
        assert_eq!(8.0 / v, Vector3::new(8.0, 4.0, 2.0));
        assert_eq!(5.0 % v, Vector3::new(0.0, 1.0, 1.0));
    }

    #[test]
    fn compound_assignment_updates_in_place() {
        let mut v = Vector2::new(1_i32, 2);
        v += Vector2::new(1, 1);
        v *= 3;
        v -= &Vector2::new(1, 2);
        v /= 2;
        assert_eq!(v, Vector2::new(2, 3));
        v %= 2;
        assert_eq!(v, Vector2::new(0, 1));
    }

    #[test]
    fn bitwise_operations_work_for_integers() {
        let a = Vector3::new(0b1100_u8, 0b1010, 0b1111);
        let b = Vector3::new(0b1010_u8, 0b0110, 0b0000);

        assert_eq!(a & b, Vector3::new(0b1000, 0b0010, 0b0000));
        assert_eq!(a | b, Vector3::new(0b1110, 0b1110, 0b1111));
        assert_eq!(a ^ b, Vector3::new(0b0110, 0b1100, 0b1111));
        assert_eq!(a & 0b0100, Vector3::new(0b0100, 0b0000, 0b0100));
        assert_eq!(0b0001 | a, Vector3::new(0b1101, 0b1011, 0b1111));
        assert_eq!(!Vector1::new(0_u8), Vector1::new(u8::MAX));

        let mut c = a;
        c ^= b;
        c &= 0b1110;
        assert_eq!(c, Vector3::new(0b0110, 0b1100, 0b1110));
    }

    #[test]
    fn shifting_applies_to_every_component() {
        let v = Vector2::new(1_i32, 8);
        assert_eq!(v << 2, Vector2::new(4, 32));
        assert_eq!(v >> 3, Vector2::new(0, 1));

        let mut w = v;
        w <<= 1;
        assert_eq!(w, Vector2::new(2, 16));
    }

    #[test]
    fn shifting_by_vector_shifts_each_component_by_its_own_amount() {
        let v = Vector2::new(1_i32, 8);
        let amounts = Vector2::new(1_u32, 2);
        assert_eq!(v << amounts, Vector2::new(2, 32));
        assert_eq!(&v >> &amounts, Vector2::new(0, 2));

        let mut w = Vector2::new(1_i32, 1);
        w <<= Vector2::new(1_u32, 2);
        assert_eq!(w, Vector2::new(2, 4));
        w >>= &amounts;
        assert_eq!(w, Vector2::new(1, 1));
    }

    #[test]
    fn negating_vector_negates_components() {
        assert_eq!(-Vector3::new(1, -2, 0), Vector3::new(-1, 2, 0));
        assert_eq!(-&Vector2::new(1.5_f32, 0.0), Vector2::new(-1.5, 0.0));
    }

    #[test]
    fn incrementing_and_decrementing_change_every_component() {
        let mut v = Vector3::new(0, 1, 2);
        v.increment().increment();
        assert_eq!(v, Vector3::new(2, 3, 4));
        v.decrement();
        assert_eq!(v, Vector3::new(1, 2, 3));
    }

    #[test]
    #[should_panic]
    fn dividing_integer_vector_by_zero_panics() {
        let _ = Vector2::new(1_i32, 2) / 0;
    }

    #[test]
    #[should_panic]
    fn dividing_by_integer_vector_with_zero_component_panics() {
        let _ = Vector2::new(1_i32, 2) / Vector2::new(1, 0);
    }

    #[test]
    fn dividing_float_vector_by_zero_follows_ieee() {
        let v = Vector2::new(1.0_f32, -1.0) / 0.0;
        assert_eq!(v.x(), f32::INFINITY);
        assert_eq!(v.y(), f32::NEG_INFINITY);
    }

    #[test]
    fn float_equality_tolerates_rounding_in_every_component() {
        let a = Vector3::new(0.1_f64 + 0.2, 1.0, 2.0);
        let b = Vector3::new(0.3_f64, 1.0, 2.0);
        assert_eq!(a, b);
        assert_ne!(a, Vector3::new(0.3, 1.0, 2.1));
    }

    #[test]
    fn equality_requires_all_components_to_match() {
        assert_ne!(Vector3::new(1, 2, 3), Vector3::new(1, 2, 4));
        assert_ne!(Vector3::new(1, 2, 3), Vector3::new(0, 2, 3));
    }

    #[test]
    fn dot_product_and_norm_work() {
        let v = Vector3::new(1.0_f32, 2.0, 2.0);
        assert_abs_diff_eq!(v.dot(&Vector3::new(3.0, -1.0, 0.5)), 2.0, epsilon = EPSILON);
        assert_abs_diff_eq!(v.norm_squared(), 9.0, epsilon = EPSILON);
        assert_abs_diff_eq!(v.norm(), 3.0, epsilon = EPSILON);
        assert_abs_diff_eq!(v.normalized().norm(), 1.0, epsilon = EPSILON);
    }

    #[test]
    fn cross_product_of_axes_gives_third_axis() {
        let x = Vector3::<f32>::unit(0);
        let y = Vector3::<f32>::unit(1);
        assert_eq!(x.cross(&y), Vector3::unit(2));
        assert_eq!(y.cross(&x), -Vector3::<f32>::unit(2));
    }

    #[test]
    fn projecting_onto_axis_keeps_parallel_part() {
        let v = Vector2::new(3.0_f32, 4.0);
        let axis = Vector2::new(2.0_f32, 0.0);
        assert_abs_diff_eq!(v.projected_onto(&axis), Vector2::new(3.0, 0.0), epsilon = EPSILON);
    }

    #[test]
    fn min_and_max_component_of_single_component_vector_is_that_component() {
        let v = Vector1::new(-4.5_f32);
        assert_eq!(v.min_component(), -4.5);
        assert_eq!(v.max_component(), -4.5);
    }

    #[test]
    fn min_and_max_components_are_found() {
        let v = Vector4::new(3, -1, 7, 2);
        assert_eq!(v.min_component(), -1);
        assert_eq!(v.max_component(), 7);
        assert_eq!(
            v.component_min(&Vector4::same(2)),
            Vector4::new(2, -1, 2, 2)
        );
        assert_eq!(
            v.component_max(&Vector4::same(2)),
            Vector4::new(3, 2, 7, 2)
        );
    }

    #[test]
    fn displaying_vector_lists_components() {
        assert_eq!(Vector3::new(1, -2, 3).to_string(), "(1, -2, 3)");
    }

    #[test]
    fn vector_is_plain_old_data() {
        let v = Vector4::new(1.0_f32, 2.0, 3.0, 4.0);
        let floats: &[f32] = bytemuck::cast_slice(std::slice::from_ref(&v));
        assert_eq!(floats, &[1.0, 2.0, 3.0, 4.0]);
    }

    proptest! {
        #[test]
        fn adding_then_subtracting_vector_is_identity(
            u in vector3_strategy(1e3),
            v in vector3_strategy(1e3),
        ) {
            prop_assert!(approx::abs_diff_eq!((u + v) - v, u, epsilon = 1e-9));
        }

        #[test]
        fn scaling_then_dividing_by_scalar_is_identity(
            u in vector3_strategy(1e3),
            s in 0.5_f64..100.0,
        ) {
            prop_assert!(approx::relative_eq!(u * s / s, u, epsilon = 1e-12, max_relative = 1e-12));
        }

        #[test]
        fn cross_product_is_orthogonal_to_operands(
            u in vector3_strategy(10.0),
            v in vector3_strategy(10.0),
        ) {
            let w = u.cross(&v);
            prop_assert!(approx::abs_diff_eq!(w.dot(&u), 0.0, epsilon = 1e-9));
            prop_assert!(approx::abs_diff_eq!(w.dot(&v), 0.0, epsilon = 1e-9));
        }
    }
}
