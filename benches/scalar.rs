use gel::math::benchmark::benchmarks::scalar;
use gel_profiling::{benchmark::criterion, define_criterion_target};

define_criterion_target!(scalar, invsqrt_f32);
define_criterion_target!(scalar, fast_invsqrt_f32);
define_criterion_target!(scalar, invsqrt_f64);
define_criterion_target!(scalar, fast_invsqrt_f64);
define_criterion_target!(scalar, eq_f32);

criterion::criterion_group!(
    name = benches;
    config = criterion::config();
    targets =
        invsqrt_f32,
        fast_invsqrt_f32,
        invsqrt_f64,
        fast_invsqrt_f64,
        eq_f32,
);
criterion::criterion_main!(benches);
