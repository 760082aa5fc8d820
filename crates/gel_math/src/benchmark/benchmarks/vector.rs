use crate::vector::{Vector3, Vector4};
use gel_profiling::benchmark::Benchmarker;

pub fn add_vector3(benchmarker: impl Benchmarker) {
    let a = create_vector3();
    let b = create_vector3();
    benchmarker.benchmark(&mut || a + b);
}

pub fn add_assign_vector3(benchmarker: impl Benchmarker) {
    let mut a = create_vector3();
    let b = create_vector3();
    benchmarker.benchmark(&mut || {
        a += &b;
        a
    });
}

pub fn dot_vector4(benchmarker: impl Benchmarker) {
    let a = create_vector4();
    let b = create_vector4();
    benchmarker.benchmark(&mut || a.dot(&b));
}

pub fn cross_vector3(benchmarker: impl Benchmarker) {
    let a = create_vector3();
    let b = Vector3::new(-2.0, 0.5, 1.0);
    benchmarker.benchmark(&mut || a.cross(&b));
}

pub fn normalize_vector3(benchmarker: impl Benchmarker) {
    let a = create_vector3();
    benchmarker.benchmark(&mut || a.normalized());
}

pub fn increment_vector_ref3(benchmarker: impl Benchmarker) {
    let (mut x, mut y, mut z) = (1.0_f32, 2.0, 3.0);
    benchmarker.benchmark(&mut || {
        crate::reference::VectorRef3::from_refs(&mut x, &mut y, &mut z).increment();
    });
}

fn create_vector3() -> Vector3 {
    Vector3::new(1.0, 2.0, 3.0)
}

fn create_vector4() -> Vector4 {
    Vector4::new(1.0, 2.0, 3.0, 4.0)
}
