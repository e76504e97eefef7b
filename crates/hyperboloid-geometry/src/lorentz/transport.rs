//! Parallel transport along geodesics.

use ndarray::{Array1, ArrayView1};

use super::numerics::MIN_NORM;
use super::ops::{minkowski_dot, minkowski_norm};

/// Transport `tangent` from `base` along the geodesic with initial direction
/// `direction` for a distance `||direction||_M`.
///
/// Both `direction` and `tangent` are tangent vectors at `base`. The result
/// is tangent at `exp_base(direction)` and has the same Minkowski norm as
/// `tangent`.
///
/// # Mathematical Formula
///
/// With `n = ||direction||_M`, `u = direction / n` and `a = <tangent, u>_M`:
///
/// `P(tangent) = a * (sinh(n) * base + cosh(n) * u) + (tangent - a * u)`
///
/// The component of `tangent` along the geodesic rotates with it; the
/// orthogonal component is carried unchanged. A zero `direction` returns
/// `tangent` unchanged.
pub fn geodesic_parallel_transport(
    base: ArrayView1<'_, f64>,
    direction: ArrayView1<'_, f64>,
    tangent: ArrayView1<'_, f64>,
) -> Array1<f64> {
    debug_assert_eq!(base.len(), direction.len());
    debug_assert_eq!(base.len(), tangent.len());

    let norm = minkowski_norm(direction);
    if norm <= MIN_NORM {
        return tangent.to_owned();
    }

    let unit = &direction / norm;
    let along = minkowski_dot(tangent, unit.view());

    let mut result = tangent.to_owned();
    result.scaled_add(along * norm.sinh(), &base);
    result.scaled_add(along * (norm.cosh() - 1.0), &unit);
    result
}
