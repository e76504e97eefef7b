//! Round-trip and closed-form tests for the Lorentz maps.
//!
//! Covers the exp/log inverse relationship and parallel transport isometry.

#[cfg(test)]
mod tests {
    use crate::lorentz::{
        basepoint, distance, exponential, geodesic_parallel_transport, is_on_hyperboloid,
        logarithm, minkowski_dot, minkowski_norm, random_hyperboloid_point,
    };
    use ndarray::{array, Array1};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    /// Point at signed distance `x` from the origin along the first axis.
    fn line_point(x: f64) -> Array1<f64> {
        array![x.sinh(), 0.0, x.cosh()]
    }

    fn assert_close(a: &Array1<f64>, b: &Array1<f64>, tol: f64) {
        assert_eq!(a.len(), b.len());
        for i in 0..a.len() {
            assert!(
                (a[i] - b[i]).abs() < tol,
                "mismatch at index {}: {} vs {}",
                i,
                a[i],
                b[i]
            );
        }
    }

    // ========== ROUND-TRIP TESTS ==========

    #[test]
    fn test_exp_log_roundtrip_random_points() {
        let mut rng = ChaCha8Rng::seed_from_u64(2024);
        for _ in 0..50 {
            let a = random_hyperboloid_point(&mut rng, 5, 0.8).unwrap();
            let b = random_hyperboloid_point(&mut rng, 5, 0.8).unwrap();

            let v = logarithm(a.view(), b.view());
            let recovered = exponential(a.view(), v.view());
            assert_close(&recovered, &b, 1e-6);
        }
    }

    #[test]
    fn test_log_exp_roundtrip_from_origin() {
        let origin = basepoint(4);
        let v = array![0.5, 0.3, -0.2, 0.0];

        let point = exponential(origin.view(), v.view());
        let recovered = logarithm(origin.view(), point.view());
        assert_close(&recovered, &v, 1e-9);
    }

    #[test]
    fn test_exponential_stays_on_hyperboloid() {
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        let base = random_hyperboloid_point(&mut rng, 4, 1.0).unwrap();
        let other = random_hyperboloid_point(&mut rng, 4, 1.0).unwrap();
        let v = logarithm(base.view(), other.view()) * 2.5;

        let p = exponential(base.view(), v.view());
        assert!(is_on_hyperboloid(p.view(), 1e-6));
    }

    // ========== PARALLEL TRANSPORT ==========

    #[test]
    fn test_transport_preserves_norm() {
        let mut rng = ChaCha8Rng::seed_from_u64(99);
        for _ in 0..25 {
            let a = random_hyperboloid_point(&mut rng, 6, 0.6).unwrap();
            let b = random_hyperboloid_point(&mut rng, 6, 0.6).unwrap();
            let c = random_hyperboloid_point(&mut rng, 6, 0.6).unwrap();

            let direction = logarithm(a.view(), c.view());
            let tangent = logarithm(a.view(), b.view());
            let moved = geodesic_parallel_transport(a.view(), direction.view(), tangent.view());

            let before = minkowski_norm(tangent.view());
            let after = minkowski_norm(moved.view());
            assert!(
                (before - after).abs() < 1e-6,
                "norm changed: {} -> {}",
                before,
                after
            );

            // Transported vector is tangent at the endpoint.
            assert!(minkowski_dot(moved.view(), c.view()).abs() < 1e-6);
        }
    }

    #[test]
    fn test_transport_along_own_direction_closed_form() {
        let origin = basepoint(3);
        let d = 1.3_f64;
        let t = 0.4_f64;
        let direction = array![d, 0.0, 0.0];
        let tangent = array![t, 0.0, 0.0];

        let moved = geodesic_parallel_transport(origin.view(), direction.view(), tangent.view());
        let expected = array![t * d.cosh(), 0.0, t * d.sinh()];
        assert_close(&moved, &expected, 1e-12);
    }

    // ========== GEODESIC LINE ==========

    #[test]
    fn test_analogy_steps_along_a_geodesic() {
        // a, b, c on one geodesic at 0, 1, 2: the fourth term lands at 3.
        let a = line_point(0.0);
        let b = line_point(1.0);
        let c = line_point(2.0);

        let d = crate::search::analogy(a.view(), b.view(), c.view());
        assert_close(&d, &line_point(3.0), 1e-6);
        assert!((distance(c.view(), d.view()) - 1.0).abs() < 1e-6);
    }

    // ========== EDGE CASES ==========

    #[test]
    fn test_distance_with_nan_coords_returns_nan() {
        let a = array![f64::NAN, 0.0, 1.0];
        let b = basepoint(3);
        assert!(distance(a.view(), b.view()).is_nan());
    }

    #[test]
    fn test_far_points_stay_finite() {
        let a = line_point(-15.0);
        let b = line_point(15.0);
        let d = distance(a.view(), b.view());
        assert!(d.is_finite());
        assert!((d - 30.0).abs() < 1e-4);
    }
}
