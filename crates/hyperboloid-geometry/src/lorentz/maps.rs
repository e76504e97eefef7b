//! Logarithmic and exponential maps on the hyperboloid.
//!
//! - Log map: point on manifold -> tangent vector at a base point
//! - Exp map: tangent vector at a base point -> point on manifold
//!
//! The two maps are mutually inverse: `exp_a(log_a(b)) = b`.

use ndarray::{Array1, ArrayView1};

use super::numerics::{clamped_arcosh, MIN_NORM};
use super::ops::{minkowski_dot, minkowski_norm};

/// Logarithm of `other` in the tangent space at `base`.
///
/// Returns the tangent vector at `base` pointing along the geodesic towards
/// `other`, with Minkowski norm equal to the geodesic distance.
///
/// # Mathematical Formula
///
/// - `mdp = <base, other>_M`
/// - `dist = arccosh(-mdp)` (argument clamped to `>= 1`)
/// - `proj = other + mdp * base` (projection onto the tangent space)
/// - `log = proj * dist / ||proj||_M`
///
/// Coincident points have `dist = 0` and a zero projection; the result is the
/// zero tangent vector.
///
/// # Example
///
/// ```
/// use hyperboloid_geometry::lorentz::logarithm;
/// use ndarray::array;
///
/// let a = array![0.0, 1.0];
/// let v = logarithm(a.view(), a.view());
/// assert!(v.iter().all(|x| *x == 0.0));
/// ```
pub fn logarithm(base: ArrayView1<'_, f64>, other: ArrayView1<'_, f64>) -> Array1<f64> {
    debug_assert_eq!(base.len(), other.len(), "logarithm: length mismatch");
    let mdp = minkowski_dot(base, other);
    let dist = clamped_arcosh(-mdp);

    let mut proj = other.to_owned();
    proj.scaled_add(mdp, &base);

    let norm = minkowski_norm(proj.view());
    if dist <= 0.0 || norm <= MIN_NORM {
        return Array1::zeros(base.len());
    }

    proj *= dist / norm;
    proj
}

/// Exponential of `tangent` (a tangent vector at `base`).
///
/// Follows the geodesic from `base` in the direction of `tangent` for a
/// distance equal to its Minkowski norm.
///
/// # Mathematical Formula
///
/// `exp_base(v) = cosh(||v||_M) * base + sinh(||v||_M) * v / ||v||_M`
///
/// A zero tangent vector returns `base` unchanged.
pub fn exponential(base: ArrayView1<'_, f64>, tangent: ArrayView1<'_, f64>) -> Array1<f64> {
    debug_assert_eq!(base.len(), tangent.len(), "exponential: length mismatch");
    let norm = minkowski_norm(tangent);
    if norm <= MIN_NORM {
        return base.to_owned();
    }

    let mut result = &base * norm.cosh();
    result.scaled_add(norm.sinh() / norm, &tangent);
    result
}
