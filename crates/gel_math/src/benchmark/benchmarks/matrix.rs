use crate::{
    algebra::Invertible,
    matrix::{Matrix2, Matrix3, Matrix4},
    vector::Vector4,
};
use gel_profiling::benchmark::Benchmarker;

pub fn mul_matrix3(benchmarker: impl Benchmarker) {
    let a = create_matrix3();
    let b = create_matrix3();
    benchmarker.benchmark(&mut || a * b);
}

pub fn mul_matrix4(benchmarker: impl Benchmarker) {
    let a = create_matrix4();
    let b = create_matrix4();
    benchmarker.benchmark(&mut || a * b);
}

pub fn mul_matrix4_vector4(benchmarker: impl Benchmarker) {
    let a = create_matrix4();
    let v = Vector4::new(1.0, -2.0, 3.0, 1.0);
    benchmarker.benchmark(&mut || a * v);
}

pub fn transpose_matrix4(benchmarker: impl Benchmarker) {
    let a = create_matrix4();
    benchmarker.benchmark(&mut || a.transposed());
}

pub fn determinant_matrix3(benchmarker: impl Benchmarker) {
    let a = create_matrix3();
    benchmarker.benchmark(&mut || a.determinant());
}

pub fn determinant_matrix4(benchmarker: impl Benchmarker) {
    let a = create_matrix4();
    benchmarker.benchmark(&mut || a.determinant());
}

pub fn invert_matrix2(benchmarker: impl Benchmarker) {
    let a = Matrix2::new(3.0, 5.0, 7.0, 9.0);
    benchmarker.benchmark(&mut || a.inverted());
}

pub fn invert_matrix3(benchmarker: impl Benchmarker) {
    let a = create_matrix3();
    benchmarker.benchmark(&mut || a.inverted());
}

pub fn invert_matrix4(benchmarker: impl Benchmarker) {
    let a = create_matrix4();
    benchmarker.benchmark(&mut || a.inverted());
}

pub fn div_matrix4(benchmarker: impl Benchmarker) {
    let a = create_matrix4();
    let b = create_matrix4().transposed();
    benchmarker.benchmark(&mut || a / b);
}

#[rustfmt::skip]
fn create_matrix3() -> Matrix3 {
    Matrix3::new(
        2.0, 0.0, 1.0,
        1.0, 3.0, 2.0,
        1.0, 1.0, 2.0,
    )
}

#[rustfmt::skip]
fn create_matrix4() -> Matrix4 {
    Matrix4::new(
        4.0, 7.0, 2.0, 3.0,
        0.0, 5.0, 0.0, 1.0,
        1.0, 0.0, 3.0, 0.0,
        2.0, 6.0, 1.0, 8.0,
    )
}
