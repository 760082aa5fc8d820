pub mod benchmarks;

gel_profiling::define_target_enum! {
    Target,
    crate::benchmark::benchmarks,
    scalar => {
        invsqrt_f32,
        fast_invsqrt_f32,
        invsqrt_f64,
        fast_invsqrt_f64,
        eq_f32,
    },
    vector => {
        add_vector3,
        add_assign_vector3,
        dot_vector4,
        cross_vector3,
        normalize_vector3,
        increment_vector_ref3,
    },
    matrix => {
        mul_matrix3,
        mul_matrix4,
        mul_matrix4_vector4,
        transpose_matrix4,
        determinant_matrix3,
        determinant_matrix4,
        invert_matrix2,
        invert_matrix3,
        invert_matrix4,
        div_matrix4,
    },
}

pub fn benchmark(target: Target, duration: f64, delay: f64) {
    gel_profiling::benchmark::benchmark(
        |benchmarker| target.execute(benchmarker),
        duration,
        delay,
    );
}
