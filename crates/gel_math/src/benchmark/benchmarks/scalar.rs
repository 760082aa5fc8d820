use crate::scalar;
use gel_profiling::benchmark::Benchmarker;
use std::hint::black_box;

pub fn invsqrt_f32(benchmarker: impl Benchmarker) {
    let x = black_box(2.7_f32);
    benchmarker.benchmark(&mut || scalar::invsqrt(x));
}

pub fn fast_invsqrt_f32(benchmarker: impl Benchmarker) {
    let x = black_box(2.7_f32);
    benchmarker.benchmark(&mut || scalar::fast_invsqrt(x));
}

pub fn invsqrt_f64(benchmarker: impl Benchmarker) {
    let x = black_box(2.7_f64);
    benchmarker.benchmark(&mut || scalar::invsqrt(x));
}

pub fn fast_invsqrt_f64(benchmarker: impl Benchmarker) {
    let x = black_box(2.7_f64);
    benchmarker.benchmark(&mut || scalar::fast_invsqrt(x));
}

pub fn eq_f32(benchmarker: impl Benchmarker) {
    let (x, y) = black_box((1.0_f32, 1.0 + 1e-8));
    benchmarker.benchmark(&mut || scalar::eq(x, y));
}
