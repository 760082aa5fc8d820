//! Matrices.

use crate::{
    algebra::Invertible,
    num::Scalar,
    vector::{Vector, Vector2, Vector3, Vector4},
};
use bytemuck::{Pod, Zeroable};
use std::{
    array, fmt,
    ops::{BitAnd, BitOr, BitXor, Index, IndexMut},
};

/// A square `N`x`N` matrix stored as `N` column vectors.
///
/// Indexing with `m[c]` gives column `c`, so `m[c][r]` is the element in
/// column `c` and row `r`. The per-dimension `new` constructors take their
/// elements in row-major order, matching how a matrix is written down.
#[repr(C)]
#[derive(Clone, Copy, Debug)]
pub struct Matrix<T, const N: usize> {
    columns: [Vector<T, N>; N],
}

/// A 2x2 matrix.
pub type Matrix2<T = f32> = Matrix<T, 2>;

/// A 3x3 matrix.
pub type Matrix3<T = f32> = Matrix<T, 3>;

/// A 4x4 matrix.
pub type Matrix4<T = f32> = Matrix<T, 4>;

impl<T: Scalar, const N: usize> Matrix<T, N> {
    /// Creates the identity matrix.
    #[inline]
    pub fn identity() -> Self {
        Self::from_diagonal_value(T::ONE)
    }

    /// Creates a matrix with all zeros.
    #[inline]
    pub fn zeros() -> Self {
        Self::from_columns([Vector::zeros(); N])
    }

    /// Creates a diagonal matrix with the given value in every diagonal
    /// element.
    #[inline]
    pub fn from_diagonal_value(value: T) -> Self {
        Self::from_diagonal(&Vector::same(value))
    }

    /// Creates a diagonal matrix with the given vector as the diagonal.
    #[inline]
    pub fn from_diagonal(diagonal: &Vector<T, N>) -> Self {
        Self::from_fn(|column, row| if column == row { diagonal[row] } else { T::ZERO })
    }

    /// Creates a matrix with the given columns.
    #[inline]
    pub const fn from_columns(columns: [Vector<T, N>; N]) -> Self {
        Self { columns }
    }

    /// Creates a matrix with the given rows.
    #[inline]
    pub fn from_rows(rows: [Vector<T, N>; N]) -> Self {
        Self::from_columns(rows).transposed()
    }

    /// Creates a matrix whose element in column `c` and row `r` is
    /// `f(c, r)`.
    #[inline]
    pub fn from_fn(mut f: impl FnMut(usize, usize) -> T) -> Self {
        Self::from_columns(array::from_fn(|column| {
            Vector::from_fn(|row| f(column, row))
        }))
    }

    #[inline]
    pub const fn columns(&self) -> &[Vector<T, N>; N] {
        &self.columns
    }

    /// The column at the given index.
    ///
    /// # Panics
    /// If `index` is not smaller than `N`.
    #[inline]
    pub fn column(&self, index: usize) -> &Vector<T, N> {
        &self.columns[index]
    }

    #[inline]
    pub fn column_mut(&mut self, index: usize) -> &mut Vector<T, N> {
        &mut self.columns[index]
    }

    /// Copies out the row at the given index.
    ///
    /// # Panics
    /// If `index` is not smaller than `N`.
    #[inline]
    pub fn row(&self, index: usize) -> Vector<T, N> {
        Vector::from_fn(|column| self.columns[column][index])
    }

    /// The element in the given column and row.
    ///
    /// # Panics
    /// If `column` or `row` is not smaller than `N`.
    #[inline]
    pub fn element(&self, column: usize, row: usize) -> T {
        self.columns[column][row]
    }

    #[inline]
    pub fn element_mut(&mut self, column: usize, row: usize) -> &mut T {
        &mut self.columns[column][row]
    }

    #[inline]
    pub fn diagonal(&self) -> Vector<T, N> {
        Vector::from_fn(|i| self.columns[i][i])
    }

    /// Computes the sum of the diagonal elements.
    #[inline]
    pub fn trace(&self) -> T {
        self.diagonal().iter().fold(T::ZERO, |sum, &element| sum + element)
    }

    /// Computes the transpose of the matrix.
    #[inline]
    pub fn transposed(&self) -> Self {
        Self::from_fn(|column, row| self.columns[row][column])
    }

    /// The elements in column-major order.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        bytemuck::cast_slice(&self.columns)
    }

    /// Returns a matrix of dimension `K`. Growing embeds this matrix in the
    /// upper left corner of the identity matrix, while shrinking keeps the
    /// upper left `K`x`K` block.
    #[inline]
    pub fn resized<const K: usize>(&self) -> Matrix<T, K> {
        Matrix::from_fn(|column, row| {
            if column < N && row < N {
                self.columns[column][row]
            } else if column == row {
                T::ONE
            } else {
                T::ZERO
            }
        })
    }

    /// Returns the matrix obtained by applying the given function to each
    /// element.
    #[inline]
    pub fn mapped<U: Scalar>(&self, mut f: impl FnMut(T) -> U) -> Matrix<U, N> {
        Matrix::from_columns(array::from_fn(|column| self.columns[column].mapped(&mut f)))
    }

    #[inline]
    pub(crate) fn apply(&mut self, mut f: impl FnMut(T) -> T) {
        for column in &mut self.columns {
            column.apply(&mut f);
        }
    }

    #[inline]
    pub(crate) fn zip_apply(&mut self, other: &Self, mut f: impl FnMut(T, T) -> T) {
        for (column, other_column) in self.columns.iter_mut().zip(&other.columns) {
            column.zip_apply(other_column, &mut f);
        }
    }

    #[inline]
    pub(crate) fn has_valid_divisors(&self) -> bool {
        self.columns.iter().all(Vector::has_valid_divisors)
    }

    /// Converts the elements to another scalar type, or returns [`None`] if
    /// any element is not representable in the target type.
    pub fn cast<U: Scalar>(&self) -> Option<Matrix<U, N>> {
        let mut result = Matrix::<U, N>::zeros();
        for (target, source) in result.columns.iter_mut().zip(&self.columns) {
            *target = source.cast()?;
        }
        Some(result)
    }

    /// Adds one to every element.
    #[inline]
    pub fn increment(&mut self) -> &mut Self {
        self.apply(|element| element + T::ONE);
        self
    }

    /// Subtracts one from every element.
    #[inline]
    pub fn decrement(&mut self) -> &mut Self {
        self.apply(|element| element - T::ONE);
        self
    }
}

impl<T: Scalar> Matrix2<T> {
    /// Creates a matrix from elements given in row-major order.
    #[inline]
    pub const fn new(m00: T, m01: T, m10: T, m11: T) -> Self {
        Self::from_columns([Vector2::new(m00, m10), Vector2::new(m01, m11)])
    }
}

impl<T: Scalar> Matrix3<T> {
    /// Creates a matrix from elements given in row-major order.
    #[rustfmt::skip]
    #[inline]
    pub const fn new(
        m00: T, m01: T, m02: T,
        m10: T, m11: T, m12: T,
        m20: T, m21: T, m22: T,
    ) -> Self {
        Self::from_columns([
            Vector3::new(m00, m10, m20),
            Vector3::new(m01, m11, m21),
            Vector3::new(m02, m12, m22),
        ])
    }
}

impl<T: Scalar> Matrix4<T> {
    /// Creates a matrix from elements given in row-major order.
    #[rustfmt::skip]
    #[inline]
    pub const fn new(
        m00: T, m01: T, m02: T, m03: T,
        m10: T, m11: T, m12: T, m13: T,
        m20: T, m21: T, m22: T, m23: T,
        m30: T, m31: T, m32: T, m33: T,
    ) -> Self {
        Self::from_columns([
            Vector4::new(m00, m10, m20, m30),
            Vector4::new(m01, m11, m21, m31),
            Vector4::new(m02, m12, m22, m32),
            Vector4::new(m03, m13, m23, m33),
        ])
    }
}

macro_rules! impl_widening_from {
    ($($from:literal => $to:literal),*) => {
        $(
            impl<T: Scalar> From<Matrix<T, $from>> for Matrix<T, $to> {
                fn from(matrix: Matrix<T, $from>) -> Self {
                    matrix.resized()
                }
            }
        )*
    };
}

impl_widening_from!(2 => 3, 2 => 4, 3 => 4);

impl<T: Scalar, const N: usize> Default for Matrix<T, N> {
    fn default() -> Self {
        Self::identity()
    }
}

impl<T: Scalar, const N: usize> From<[[T; N]; N]> for Matrix<T, N> {
    /// Creates a matrix from an array of columns.
    fn from(columns: [[T; N]; N]) -> Self {
        Self::from_columns(columns.map(Vector::from_array))
    }
}

impl<T: Scalar, const N: usize> From<Matrix<T, N>> for [[T; N]; N] {
    fn from(matrix: Matrix<T, N>) -> Self {
        matrix.columns.map(<[T; N]>::from)
    }
}

impl<T: Scalar, const N: usize> Index<usize> for Matrix<T, N> {
    type Output = Vector<T, N>;

    #[inline]
    fn index(&self, index: usize) -> &Vector<T, N> {
        &self.columns[index]
    }
}

impl<T: Scalar, const N: usize> IndexMut<usize> for Matrix<T, N> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Vector<T, N> {
        &mut self.columns[index]
    }
}

impl<T: Scalar, const N: usize> PartialEq for Matrix<T, N> {
    fn eq(&self, other: &Self) -> bool {
        self.columns
            .iter()
            .zip(&other.columns)
            .all(|(a, b)| a == b)
    }
}

impl<T: Scalar, const N: usize> fmt::Display for Matrix<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..N {
            if row > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", self.row(row))?;
        }
        Ok(())
    }
}

// SAFETY: `Matrix` is `repr(C)` with a single array field of `Vector`s,
// which are themselves padding-free.
unsafe impl<T: Zeroable, const N: usize> Zeroable for Matrix<T, N> {}
unsafe impl<T: Pod, const N: usize> Pod for Matrix<T, N> {}

impl_binop!(
    Mul, mul,
    Matrix<T, N>, Matrix<T, N>, Matrix<T, N>,
    where [T: Scalar],
    |a, b| {
        Matrix::from_columns(array::from_fn(|column| a * &b.columns[column]))
    }
);

impl_binop!(
    Mul, mul,
    Matrix<T, N>, Vector<T, N>, Vector<T, N>,
    where [T: Scalar],
    |m, v| {
        Vector::from_fn(|row| {
            (0..N).fold(T::ZERO, |sum, column| sum + m.columns[column][row] * v[column])
        })
    }
);

impl_binop!(
    Mul, mul,
    Vector<T, N>, Matrix<T, N>, Vector<T, N>,
    where [T: Scalar],
    |v, m| {
        Vector::from_fn(|column| v.dot(&m.columns[column]))
    }
);

impl_binop!(
    Div, div,
    Matrix<T, N>, Matrix<T, N>, Matrix<T, N>,
    where [T: Scalar, Matrix<T, N>: Invertible<Element = T>],
    |a, b| {
        a * b.inverted()
    }
);

impl_binop!(
    Div, div,
    Matrix<T, N>, Vector<T, N>, Vector<T, N>,
    where [T: Scalar, Matrix<T, N>: Invertible<Element = T>],
    |m, v| {
        m.inverted() * v
    }
);

impl_binop!(
    Div, div,
    Vector<T, N>, Matrix<T, N>, Vector<T, N>,
    where [T: Scalar, Matrix<T, N>: Invertible<Element = T>],
    |v, m| {
        v * m.inverted()
    }
);

impl_binop_assign!(MulAssign, mul_assign, Mul, mul, Matrix<T, N>, Matrix<T, N>, where [T: Scalar]);
impl_binop_assign!(MulAssign, mul_assign, Mul, mul, Vector<T, N>, Matrix<T, N>, where [T: Scalar]);
impl_binop_assign!(
    DivAssign, div_assign, Div, div,
    Matrix<T, N>, Matrix<T, N>,
    where [T: Scalar, Matrix<T, N>: Invertible<Element = T>]
);
impl_binop_assign!(
    DivAssign, div_assign, Div, div,
    Vector<T, N>, Matrix<T, N>,
    where [T: Scalar, Matrix<T, N>: Invertible<Element = T>]
);

impl_componentwise_binop!(Matrix, Add, add, AddAssign, add_assign, check = none, where T: Scalar);
impl_componentwise_binop!(Matrix, Sub, sub, SubAssign, sub_assign, check = none, where T: Scalar);
impl_componentwise_binop!(
    Matrix, Rem, rem, RemAssign, rem_assign,
    check = component_divisors,
    where T: Scalar
);
impl_componentwise_binop!(
    Matrix, BitAnd, bitand, BitAndAssign, bitand_assign,
    check = none,
    where T: Scalar + BitAnd<Output = T>
);
impl_componentwise_binop!(
    Matrix, BitOr, bitor, BitOrAssign, bitor_assign,
    check = none,
    where T: Scalar + BitOr<Output = T>
);
impl_componentwise_binop!(
    Matrix, BitXor, bitxor, BitXorAssign, bitxor_assign,
    check = none,
    where T: Scalar + BitXor<Output = T>
);

impl_componentwise_unary_op!(Matrix, Neg, neg);
impl_componentwise_unary_op!(Matrix, Not, not);

impl_componentwise_shift!(Matrix, Shl, shl, ShlAssign, shl_assign);
impl_componentwise_shift!(Matrix, Shr, shr, ShrAssign, shr_assign);

impl_scalar_ops!(
    Matrix,
    float = [f32, f64],
    integer = [i8, i16, i32, i64, isize, u8, u16, u32, u64, usize]
);

impl_abs_diff_eq!(Matrix, |a, b, epsilon| {
    a.columns
        .iter()
        .zip(&b.columns)
        .all(|(a, b)| a.abs_diff_eq(b, epsilon))
});

impl_relative_eq!(Matrix, |a, b, epsilon, max_relative| {
    a.columns
        .iter()
        .zip(&b.columns)
        .all(|(a, b)| a.relative_eq(b, epsilon, max_relative))
});
