use approx::assert_abs_diff_eq;
use gel::{
    math::{
        Invertible, Matrix2, Matrix3, Matrix4, Vector2, Vector3, Vector4, algebra,
        scalar::{eq, neq},
    },
    time::{Clock, TimeUnit},
};
use proptest::prelude::*;

prop_compose! {
    fn vector3_strategy(max_component: f64)(
        components in prop::array::uniform3(-max_component..max_component),
    ) -> Vector3<f64> {
        Vector3::from(components)
    }
}

prop_compose! {
    fn matrix4_strategy(max_element: f64)(
        elements in prop::array::uniform16(-max_element..max_element),
    ) -> Matrix4<f64> {
        Matrix4::from_fn(|column, row| elements[4 * row + column])
    }
}

#[test]
fn identity_leaves_vectors_and_matrices_unchanged() {
    let v = Vector3::new(1.0_f32, 2.0, 3.0);
    assert_eq!(Matrix3::identity() * v, Vector3::new(1.0, 2.0, 3.0));

    let m = Matrix3::new(1.0_f32, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0);
    assert_eq!(Matrix3::identity() * m, m);
    assert_eq!(m * Matrix3::identity(), m);
}

#[test]
fn inverting_example_matrix2_gives_expected_result() {
    let m = Matrix2::new(1.0_f32, 2.0, 3.0, 4.0);
    assert_eq!(algebra::determinant(&m), -2.0);
    assert_eq!(algebra::invert(&m), Matrix2::new(-2.0, 1.0, 1.5, -0.5));
}

#[test]
fn inverting_singular_matrix_through_fallible_function_gives_error() {
    let singular = Matrix3::new(1.0_f64, 2.0, 3.0, 2.0, 4.0, 6.0, 0.0, 1.0, 1.0);
    assert!(algebra::try_invert(&singular).is_err());
}

#[test]
fn widening_and_narrowing_identity_gives_identity() {
    assert_eq!(Matrix4::from(Matrix2::<f32>::identity()), Matrix4::identity());
    assert_eq!(Matrix3::from(Matrix2::<f32>::identity()), Matrix3::identity());
    assert_eq!(
        Matrix4::<f32>::identity().resized::<2>(),
        Matrix2::identity()
    );
}

#[test]
fn relative_float_comparison_works() {
    assert!(eq(1.0_f32, 1.0_f32 + 1e-8));
    assert!(!eq(1.0_f32, 1.1_f32));
    assert!(neq(1.0_f32, 1.1_f32));
}

#[test]
#[should_panic]
fn indexing_vector2_out_of_bounds_panics() {
    let v = Vector2::new(1, 2);
    let index = std::hint::black_box(2);
    let _ = v[index];
}

#[test]
fn clock_scaled_update_advances_by_scaled_duration() {
    let mut clock = Clock::with_time_scale(2.0);
    clock.update(25.0);
    assert_abs_diff_eq!(clock.elapsed(), 50.0);
    assert_eq!(clock.time_in(TimeUnit::Seconds), 50);
}

#[test]
fn transforms_compose_as_expected() {
    let transform = algebra::translate(&Vector3::new(1.0_f64, 0.0, 0.0))
        * algebra::rotate_z(gel::math::Degrees(90.0))
        * algebra::scale(&Vector3::new(2.0, 2.0, 2.0));

    let point = Vector4::new(1.0, 0.0, 0.0, 1.0);
    assert_abs_diff_eq!(transform * point, Vector4::new(1.0, 2.0, 0.0, 1.0), epsilon = 1e-12);

    let restored = transform.inverted() * (transform * point);
    assert_abs_diff_eq!(restored, point, epsilon = 1e-12);
}

proptest! {
    #[test]
    fn adding_then_subtracting_vector_gives_original(
        u in vector3_strategy(1e3),
        v in vector3_strategy(1e3),
    ) {
        prop_assert!(approx::abs_diff_eq!((u + v) - v, u, epsilon = 1e-9));
    }

    #[test]
    fn scaling_then_dividing_vector_gives_original(
        u in vector3_strategy(1e3),
        s in 0.1_f64..100.0,
    ) {
        prop_assert!(approx::relative_eq!(u * s / s, u, epsilon = 1e-12, max_relative = 1e-12));
    }

    #[test]
    fn multiplying_matrix_by_inverse_gives_identity(m in matrix4_strategy(10.0)) {
        prop_assume!(m.determinant().abs() > 1.0);
        prop_assert!(approx::abs_diff_eq!(m * algebra::invert(&m), Matrix4::identity(), epsilon = 1e-6));
    }

    #[test]
    fn determinant_equals_inverse_denominator(m in matrix4_strategy(10.0)) {
        let (_, denominator) = m.adjugate_and_determinant();
        prop_assert_eq!(m.determinant().to_bits(), denominator.to_bits());
    }
}
