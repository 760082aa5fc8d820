//! Fixed-size vectors and square matrices with scalar math utilities.

#[macro_use]
mod macros;

pub mod algebra;
pub mod angle;
#[cfg(feature = "benchmark")]
pub mod benchmark;
pub mod consts;
pub mod matrix;
pub mod num;
pub mod reference;
pub mod scalar;
pub mod vector;

pub use algebra::Invertible;
pub use angle::{Angle, Degrees, Radians};
pub use matrix::{Matrix, Matrix2, Matrix3, Matrix4};
pub use num::{Float, Scalar, SignedScalar};
pub use reference::{VectorRef, VectorRef1, VectorRef2, VectorRef3, VectorRef4};
pub use vector::{Vector, Vector1, Vector2, Vector3, Vector4};

pub type Vec1 = Vector1<f32>;
pub type Vec2 = Vector2<f32>;
pub type Vec3 = Vector3<f32>;
pub type Vec4 = Vector4<f32>;

pub type DVec1 = Vector1<f64>;
pub type DVec2 = Vector2<f64>;
pub type DVec3 = Vector3<f64>;
pub type DVec4 = Vector4<f64>;

pub type IVec1 = Vector1<i32>;
pub type IVec2 = Vector2<i32>;
pub type IVec3 = Vector3<i32>;
pub type IVec4 = Vector4<i32>;

pub type Mat2 = Matrix2<f32>;
pub type Mat3 = Matrix3<f32>;
pub type Mat4 = Matrix4<f32>;

pub type DMat2 = Matrix2<f64>;
pub type DMat3 = Matrix3<f64>;
pub type DMat4 = Matrix4<f64>;

pub type IMat2 = Matrix2<i32>;
pub type IMat3 = Matrix3<i32>;
pub type IMat4 = Matrix4<i32>;
