//! Determinants, inverses and affine transforms of square matrices.
//!
//! Inverses are computed by cofactor expansion: the adjugate (the transpose
//! of the cofactor matrix) divided by the determinant. The determinant is the
//! dot product of the first row with its cofactors, and
//! [`Invertible::determinant`] evaluates exactly the same expressions as the
//! inversion so that the two agree bit for bit.

use crate::{
    angle::Angle,
    matrix::{Matrix, Matrix2, Matrix3, Matrix4},
    num::{Float, Scalar, SignedScalar},
    vector::Vector3,
};
use anyhow::{Result, bail};

/// A square matrix with a closed-form determinant and adjugate.
pub trait Invertible: Sized {
    type Element: Scalar;

    /// Computes the determinant of the matrix.
    fn determinant(&self) -> Self::Element;

    /// Computes the adjugate of the matrix together with its determinant.
    fn adjugate_and_determinant(&self) -> (Self, Self::Element);
}

impl<T: Scalar, const N: usize> Matrix<T, N>
where
    Self: Invertible<Element = T>,
{
    /// Computes the inverse of the matrix.
    ///
    /// # Panics
    /// If the determinant is exactly zero.
    #[inline]
    pub fn inverted(&self) -> Self {
        let (adjugate, determinant) = self.adjugate_and_determinant();
        assert!(
            determinant != T::ZERO,
            "tried to invert a singular matrix"
        );
        adjugate.mapped(|element| element / determinant)
    }

    /// Computes the inverse of the matrix.
    ///
    /// # Errors
    /// Returns an error if the determinant is exactly zero.
    #[inline]
    pub fn try_inverted(&self) -> Result<Self> {
        let (adjugate, determinant) = self.adjugate_and_determinant();
        if determinant == T::ZERO {
            bail!("Matrix is singular (determinant is zero):\n{self}");
        }
        Ok(adjugate.mapped(|element| element / determinant))
    }
}

impl<T: SignedScalar> Invertible for Matrix2<T> {
    type Element = T;

    #[inline]
    fn determinant(&self) -> T {
        let [a, b, c, d] = elements2(self);
        a * d - b * c
    }

    #[inline]
    fn adjugate_and_determinant(&self) -> (Self, T) {
        let [a, b, c, d] = elements2(self);
        let adjugate = Matrix2::new(d, -b, -c, a);
        (adjugate, a * d - b * c)
    }
}

/// The elements in row-major order.
#[inline]
fn elements2<T: Scalar>(m: &Matrix2<T>) -> [T; 4] {
    [m[0][0], m[1][0], m[0][1], m[1][1]]
}

/// Elements of a 3x3 matrix named in row-major order.
#[rustfmt::skip]
#[derive(Clone, Copy)]
struct Elements3<T> {
    a: T, b: T, c: T,
    d: T, e: T, f: T,
    g: T, h: T, i: T,
}

impl<T: SignedScalar> Elements3<T> {
    #[rustfmt::skip]
    fn of(m: &Matrix3<T>) -> Self {
        Self {
            a: m[0][0], b: m[1][0], c: m[2][0],
            d: m[0][1], e: m[1][1], f: m[2][1],
            g: m[0][2], h: m[1][2], i: m[2][2],
        }
    }

    /// Cofactors of the first row.
    fn first_row_cofactors(&self) -> [T; 3] {
        let Self { d, e, f, g, h, i, .. } = *self;
        [e * i - f * h, -d * i + f * g, d * h - e * g]
    }

    fn determinant_from(&self, [ca, cb, cc]: [T; 3]) -> T {
        self.a * ca + self.b * cb + self.c * cc
    }
}

impl<T: SignedScalar> Invertible for Matrix3<T> {
    type Element = T;

    #[inline]
    fn determinant(&self) -> T {
        let elements = Elements3::of(self);
        elements.determinant_from(elements.first_row_cofactors())
    }

    fn adjugate_and_determinant(&self) -> (Self, T) {
        let elements = Elements3::of(self);
        let Elements3 { a, b, c, d, e, f, g, h, i } = elements;

        let first_row = elements.first_row_cofactors();
        let [ca, cb, cc] = first_row;

        let cd = -b * i + c * h;
        let ce = a * i - c * g;
        let cf = -a * h + b * g;

        let cg = b * f - c * e;
        let ch = -a * f + c * d;
        let ci = a * e - b * d;

        #[rustfmt::skip]
        let adjugate = Matrix3::new(
            ca, cd, cg,
            cb, ce, ch,
            cc, cf, ci,
        );

        (adjugate, elements.determinant_from(first_row))
    }
}

/// Elements of a 4x4 matrix named in row-major order.
#[rustfmt::skip]
#[derive(Clone, Copy)]
struct Elements4<T> {
    a: T, b: T, c: T, d: T,
    e: T, f: T, g: T, h: T,
    i: T, j: T, k: T, l: T,
    m: T, n: T, o: T, p: T,
}

/// Determinants of the 2x2 submatrices formed by the two bottom rows, named
/// after the four elements involved.
#[derive(Clone, Copy)]
struct LowerMinors<T> {
    klop: T,
    jlnp: T,
    jkno: T,
    ilmp: T,
    ikmo: T,
    ijmn: T,
}

impl<T: SignedScalar> Elements4<T> {
    #[rustfmt::skip]
    fn of(m: &Matrix4<T>) -> Self {
        Self {
            a: m[0][0], b: m[1][0], c: m[2][0], d: m[3][0],
            e: m[0][1], f: m[1][1], g: m[2][1], h: m[3][1],
            i: m[0][2], j: m[1][2], k: m[2][2], l: m[3][2],
            m: m[0][3], n: m[1][3], o: m[2][3], p: m[3][3],
        }
    }

    fn lower_minors(&self) -> LowerMinors<T> {
        let Self { i, j, k, l, m, n, o, p, .. } = *self;
        LowerMinors {
            klop: k * p - o * l,
            jlnp: j * p - n * l,
            jkno: j * o - n * k,
            ilmp: i * p - m * l,
            ikmo: i * o - m * k,
            ijmn: i * n - m * j,
        }
    }

    /// Cofactors of the first row.
    fn first_row_cofactors(&self, minors: &LowerMinors<T>) -> [T; 4] {
        let Self { e, f, g, h, .. } = *self;
        let LowerMinors { klop, jlnp, jkno, ilmp, ikmo, ijmn } = *minors;
        [
            f * klop - g * jlnp + h * jkno,
            -e * klop + g * ilmp - h * ikmo,
            e * jlnp - f * ilmp + h * ijmn,
            -e * jkno + f * ikmo - g * ijmn,
        ]
    }

    fn determinant_from(&self, [ca, cb, cc, cd]: [T; 4]) -> T {
        self.a * ca + self.b * cb + self.c * cc + self.d * cd
    }
}

impl<T: SignedScalar> Invertible for Matrix4<T> {
    type Element = T;

    #[inline]
    fn determinant(&self) -> T {
        let elements = Elements4::of(self);
        let minors = elements.lower_minors();
        elements.determinant_from(elements.first_row_cofactors(&minors))
    }

    fn adjugate_and_determinant(&self) -> (Self, T) {
        let elements = Elements4::of(self);
        #[rustfmt::skip]
        let Elements4 {
            a, b, c, d,
            e, f, g, h,
            i, j, k, l,
            m, n, o, p,
        } = elements;

        let minors = elements.lower_minors();
        let LowerMinors { klop, jlnp, jkno, ilmp, ikmo, ijmn } = minors;

        // Minors from rows 2 and 4
        let ghop = g * p - o * h;
        let fhnp = f * p - n * h;
        let fgno = f * o - n * g;
        let ehmp = e * p - m * h;
        let egmo = e * o - m * g;
        let efmn = e * n - m * f;

        // Minors from rows 2 and 3
        let ghkl = g * l - k * h;
        let fhjl = f * l - j * h;
        let fgjk = f * k - j * g;
        let ehil = e * l - i * h;
        let egik = e * k - i * g;
        let efij = e * j - i * f;

        let first_row = elements.first_row_cofactors(&minors);
        let [ca, cb, cc, cd] = first_row;

        let ce = -b * klop + c * jlnp - d * jkno;
        let cf = a * klop - c * ilmp + d * ikmo;
        let cg = -a * jlnp + b * ilmp - d * ijmn;
        let ch = a * jkno - b * ikmo + c * ijmn;

        let ci = b * ghop - c * fhnp + d * fgno;
        let cj = -a * ghop + c * ehmp - d * egmo;
        let ck = a * fhnp - b * ehmp + d * efmn;
        let cl = -a * fgno + b * egmo - c * efmn;

        let cm = -b * ghkl + c * fhjl - d * fgjk;
        let cn = a * ghkl - c * ehil + d * egik;
        let co = -a * fhjl + b * ehil - d * efij;
        let cp = a * fgjk - b * egik + c * efij;

        #[rustfmt::skip]
        let adjugate = Matrix4::new(
            ca, ce, ci, cm,
            cb, cf, cj, cn,
            cc, cg, ck, co,
            cd, ch, cl, cp,
        );

        (adjugate, elements.determinant_from(first_row))
    }
}

/// Computes the determinant of the given matrix.
#[inline]
pub fn determinant<M: Invertible>(matrix: &M) -> M::Element {
    matrix.determinant()
}

/// Computes the inverse of the given matrix.
///
/// # Panics
/// If the determinant is exactly zero.
#[inline]
pub fn invert<T: Scalar, const N: usize>(matrix: &Matrix<T, N>) -> Matrix<T, N>
where
    Matrix<T, N>: Invertible<Element = T>,
{
    matrix.inverted()
}

/// Computes the inverse of the given matrix, or returns an error if it is
/// singular.
#[inline]
pub fn try_invert<T: Scalar, const N: usize>(matrix: &Matrix<T, N>) -> Result<Matrix<T, N>>
where
    Matrix<T, N>: Invertible<Element = T>,
{
    matrix.try_inverted()
}

#[inline]
pub fn transpose<T: Scalar, const N: usize>(matrix: &Matrix<T, N>) -> Matrix<T, N> {
    matrix.transposed()
}

impl<F: Float> Matrix4<F> {
    /// Creates an affine transform translating by the given displacement.
    #[rustfmt::skip]
    #[inline]
    pub fn translation(displacement: &Vector3<F>) -> Self {
        let (o, l) = (F::ZERO, F::ONE);
        Self::new(
            l, o, o, displacement.x(),
            o, l, o, displacement.y(),
            o, o, l, displacement.z(),
            o, o, o, l,
        )
    }

    /// Creates an affine transform rotating by the given angle about the
    /// x-axis, turning the y-axis towards the z-axis for positive angles.
    #[rustfmt::skip]
    #[inline]
    pub fn rotation_x(angle: impl Angle<F>) -> Self {
        let (sin, cos) = angle.radians().sin_cos();
        let (o, l) = (F::ZERO, F::ONE);
        Self::new(
            l, o,   o,    o,
            o, cos, -sin, o,
            o, sin, cos,  o,
            o, o,   o,    l,
        )
    }

    /// Creates an affine transform rotating by the given angle about the
    /// y-axis, turning the z-axis towards the x-axis for positive angles.
    #[rustfmt::skip]
    #[inline]
    pub fn rotation_y(angle: impl Angle<F>) -> Self {
        let (sin, cos) = angle.radians().sin_cos();
        let (o, l) = (F::ZERO, F::ONE);
        Self::new(
            cos,  o, sin, o,
            o,    l, o,   o,
            -sin, o, cos, o,
            o,    o, o,   l,
        )
    }

    /// Creates an affine transform rotating by the given angle about the
    /// z-axis, turning the x-axis towards the y-axis for positive angles.
    #[rustfmt::skip]
    #[inline]
    pub fn rotation_z(angle: impl Angle<F>) -> Self {
        let (sin, cos) = angle.radians().sin_cos();
        let (o, l) = (F::ZERO, F::ONE);
        Self::new(
            cos, -sin, o, o,
            sin, cos,  o, o,
            o,   o,    l, o,
            o,   o,    o, l,
        )
    }

    /// Creates an affine transform scaling each axis by the corresponding
    /// factor.
    #[inline]
    pub fn scaling(factors: &Vector3<F>) -> Self {
        Self::from_diagonal(&factors.extended(F::ONE))
    }
}

#[inline]
pub fn translate<F: Float>(displacement: &Vector3<F>) -> Matrix4<F> {
    Matrix4::translation(displacement)
}

#[inline]
pub fn rotate_x<F: Float>(angle: impl Angle<F>) -> Matrix4<F> {
    Matrix4::rotation_x(angle)
}

#[inline]
pub fn rotate_y<F: Float>(angle: impl Angle<F>) -> Matrix4<F> {
    Matrix4::rotation_y(angle)
}

#[inline]
pub fn rotate_z<F: Float>(angle: impl Angle<F>) -> Matrix4<F> {
    Matrix4::rotation_z(angle)
}

#[inline]
pub fn scale<F: Float>(factors: &Vector3<F>) -> Matrix4<F> {
    Matrix4::scaling(factors)
}
