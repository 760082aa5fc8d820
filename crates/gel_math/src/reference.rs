//! Vectors of references to scalars.

use crate::{num::Scalar, vector::Vector};
use std::ops::{Index, IndexMut};

/// A non-owning vector view whose components are mutable references to
/// scalars stored elsewhere. The scalars need not be adjacent in memory, and
/// the view cannot outlive them.
///
/// Reading a component reads the referenced scalar and compound assignments
/// write through to it.
#[derive(Debug)]
pub struct VectorRef<'a, T, const N: usize> {
    components: [&'a mut T; N],
}

pub type VectorRef1<'a, T = f32> = VectorRef<'a, T, 1>;
pub type VectorRef2<'a, T = f32> = VectorRef<'a, T, 2>;
pub type VectorRef3<'a, T = f32> = VectorRef<'a, T, 3>;
pub type VectorRef4<'a, T = f32> = VectorRef<'a, T, 4>;

impl<'a, T: Scalar, const N: usize> VectorRef<'a, T, N> {
    /// Creates a reference vector from the given component references.
    #[inline]
    pub fn new(components: [&'a mut T; N]) -> Self {
        Self { components }
    }

    /// Creates a shorter-lived reference vector aliasing the same scalars.
    #[inline]
    pub fn reborrow(&mut self) -> VectorRef<'_, T, N> {
        VectorRef::new(self.components.each_mut().map(|component| &mut **component))
    }

    /// Copies the referenced scalars into an owned vector.
    #[inline]
    pub fn to_vector(&self) -> Vector<T, N> {
        Vector::from_fn(|i| *self.components[i])
    }

    /// Writes the components of the given vector to the referenced scalars.
    #[inline]
    pub fn assign(&mut self, vector: &Vector<T, N>) {
        for (component, &value) in self.components.iter_mut().zip(vector.as_array()) {
            **component = value;
        }
    }

    #[inline]
    fn apply(&mut self, mut f: impl FnMut(T) -> T) {
        for component in &mut self.components {
            **component = f(**component);
        }
    }

    #[inline]
    fn zip_apply(&mut self, other: &Vector<T, N>, mut f: impl FnMut(T, T) -> T) {
        for (component, &other_component) in self.components.iter_mut().zip(other.as_array()) {
            **component = f(**component, other_component);
        }
    }

    /// Adds one to every referenced scalar.
    #[inline]
    pub fn increment(&mut self) -> &mut Self {
        self.apply(|c| c + T::ONE);
        self
    }

    /// Subtracts one from every referenced scalar.
    #[inline]
    pub fn decrement(&mut self) -> &mut Self {
        self.apply(|c| c - T::ONE);
        self
    }

    fn equals_all(&self, mut other: impl FnMut(usize) -> T) -> bool {
        self.components
            .iter()
            .enumerate()
            .all(|(i, component)| (**component).approx_eq(other(i)))
    }
}

impl<'a, T: Scalar> VectorRef1<'a, T> {
    #[inline]
    pub fn from_refs(x: &'a mut T) -> Self {
        Self::new([x])
    }
}

impl<'a, T: Scalar> VectorRef2<'a, T> {
    #[inline]
    pub fn from_refs(x: &'a mut T, y: &'a mut T) -> Self {
        Self::new([x, y])
    }
}

impl<'a, T: Scalar> VectorRef3<'a, T> {
    #[inline]
    pub fn from_refs(x: &'a mut T, y: &'a mut T, z: &'a mut T) -> Self {
        Self::new([x, y, z])
    }
}

impl<'a, T: Scalar> VectorRef4<'a, T> {
    #[inline]
    pub fn from_refs(x: &'a mut T, y: &'a mut T, z: &'a mut T, w: &'a mut T) -> Self {
        Self::new([x, y, z, w])
    }
}

impl<'a, T: Scalar, const N: usize> From<&'a mut Vector<T, N>> for VectorRef<'a, T, N> {
    fn from(vector: &'a mut Vector<T, N>) -> Self {
        vector.referenced()
    }
}

impl<T: Scalar, const N: usize> From<&VectorRef<'_, T, N>> for Vector<T, N> {
    fn from(reference: &VectorRef<'_, T, N>) -> Self {
        reference.to_vector()
    }
}

impl<T: Scalar, const N: usize> From<VectorRef<'_, T, N>> for Vector<T, N> {
    fn from(reference: VectorRef<'_, T, N>) -> Self {
        reference.to_vector()
    }
}

impl<T: Scalar, const N: usize> Index<usize> for VectorRef<'_, T, N> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &T {
        &*self.components[index]
    }
}

impl<T: Scalar, const N: usize> IndexMut<usize> for VectorRef<'_, T, N> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut *self.components[index]
    }
}

impl<T: Scalar, const N: usize> PartialEq for VectorRef<'_, T, N> {
    fn eq(&self, other: &Self) -> bool {
        self.equals_all(|i| *other.components[i])
    }
}

impl<T: Scalar, const N: usize> PartialEq<Vector<T, N>> for VectorRef<'_, T, N> {
    fn eq(&self, other: &Vector<T, N>) -> bool {
        self.equals_all(|i| other[i])
    }
}

impl<T: Scalar, const N: usize> PartialEq<VectorRef<'_, T, N>> for Vector<T, N> {
    fn eq(&self, other: &VectorRef<'_, T, N>) -> bool {
        other == self
    }
}

macro_rules! impl_compound_assign_from_vector {
    ($op:ident, $method:ident, $op_assign:ident, $method_assign:ident) => {
        impl<T: Scalar, const N: usize> ::std::ops::$op_assign<&Vector<T, N>>
            for VectorRef<'_, T, N>
        {
            #[inline]
            fn $method_assign(&mut self, rhs: &Vector<T, N>) {
                self.zip_apply(rhs, |a, b| ::std::ops::$op::$method(a, b));
            }
        }

        impl<T: Scalar, const N: usize> ::std::ops::$op_assign<Vector<T, N>>
            for VectorRef<'_, T, N>
        {
            #[inline]
            fn $method_assign(&mut self, rhs: Vector<T, N>) {
                self.$method_assign(&rhs);
            }
        }
    };
}

impl_compound_assign_from_vector!(Add, add, AddAssign, add_assign);
impl_compound_assign_from_vector!(Sub, sub, SubAssign, sub_assign);
impl_compound_assign_from_vector!(Mul, mul, MulAssign, mul_assign);
impl_compound_assign_from_vector!(Div, div, DivAssign, div_assign);
impl_compound_assign_from_vector!(Rem, rem, RemAssign, rem_assign);

macro_rules! impl_compound_assign_from_scalar {
    ($($scalar:ty),*) => {
        $(
            impl_compound_assign_from_scalar!(@op $scalar, Add, add, AddAssign, add_assign);
            impl_compound_assign_from_scalar!(@op $scalar, Sub, sub, SubAssign, sub_assign);
            impl_compound_assign_from_scalar!(@op $scalar, Mul, mul, MulAssign, mul_assign);
            impl_compound_assign_from_scalar!(@op $scalar, Div, div, DivAssign, div_assign);
            impl_compound_assign_from_scalar!(@op $scalar, Rem, rem, RemAssign, rem_assign);
        )*
    };
    (@op $scalar:ty, $op:ident, $method:ident, $op_assign:ident, $method_assign:ident) => {
        impl<const N: usize> ::std::ops::$op_assign<$scalar> for VectorRef<'_, $scalar, N> {
            #[inline]
            fn $method_assign(&mut self, rhs: $scalar) {
                self.apply(|a| ::std::ops::$op::$method(a, rhs));
            }
        }
    };
}

impl_compound_assign_from_scalar!(f32, f64, i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vector::{Vector3, Vector4};

    #[test]
    fn reading_reference_vector_reads_referenced_scalars() {
        let (mut a, mut b, mut c) = (1.0_f32, 2.0, 3.0);
        let reference = VectorRef3::from_refs(&mut a, &mut b, &mut c);
        assert_eq!(reference.to_vector(), Vector3::new(1.0, 2.0, 3.0));
        assert_eq!(reference[2], 3.0);
    }

    #[test]
    fn reference_vectors_of_every_dimension_write_through() {
        let (mut a, mut b, mut c, mut d) = (1_i32, 2, 3, 4);
        VectorRef1::from_refs(&mut a).increment();
        VectorRef2::from_refs(&mut a, &mut b).decrement();
        {
            let mut reference = VectorRef4::from_refs(&mut a, &mut b, &mut c, &mut d);
            reference *= 10;
            assert!(reference == Vector4::new(10, 10, 30, 40));
        }
        assert_eq!((a, b, c, d), (10, 10, 30, 40));
    }

    #[test]
    fn writing_through_reference_vector_updates_scalars() {
        let (mut a, mut b, mut c) = (1_i32, 2, 3);
        {
            let mut reference = VectorRef3::from_refs(&mut a, &mut b, &mut c);
            reference += Vector3::new(10, 20, 30);
            reference *= 2;
            reference[0] = -1;
        }
        assert_eq!((a, b, c), (-1, 44, 66));
    }

    #[test]
    fn reference_vector_over_owned_vector_aliases_its_components() {
        let mut v = Vector3::new(1, 2, 3);
        {
            let mut reference = VectorRef::from(&mut v);
            reference.assign(&Vector3::new(4, 5, 6));
            reference.increment();
            reference -= &Vector3::new(0, 0, 7);
        }
        assert_eq!(v, Vector3::new(5, 6, 0));
    }

    #[test]
    fn reborrowed_reference_vector_writes_to_same_scalars() {
        let mut v = Vector3::new(0.0_f64, 0.0, 0.0);
        let mut reference = v.referenced();
        {
            let mut inner = reference.reborrow();
            inner += 1.5;
        }
        reference.decrement();
        assert_eq!(reference, Vector3::new(0.5, 0.5, 0.5));
    }

    #[test]
    fn equality_with_vector_requires_all_components_to_match() {
        let (mut a, mut b, mut c) = (1_i32, 2, 3);
        let reference = VectorRef3::from_refs(&mut a, &mut b, &mut c);

        assert!(reference == Vector3::new(1, 2, 3));
        assert!(Vector3::new(1, 2, 3) == reference);
        assert!(reference != Vector3::new(1, 2, 4));
        assert!(reference != Vector3::new(9, 2, 3));
    }

    #[test]
    fn equality_between_reference_vectors_compares_values() {
        let mut first = Vector3::new(1, 2, 3);
        let mut second = Vector3::new(1, 2, 3);
        assert!(first.referenced() == second.referenced());

        second[1] = 0;
        assert!(first.referenced() != second.referenced());
    }

    #[test]
    fn converting_reference_vector_gives_owned_copy() {
        let mut v = Vector3::new(7_u8, 8, 9);
        let copy: Vector3<u8> = Vector::from(v.referenced());
        v[0] = 0;
        assert_eq!(copy, Vector3::new(7, 8, 9));
    }
}
