//! Constructing and checking points on the hyperboloid.

use ndarray::{s, Array1, ArrayView1};

use super::ops::minkowski_dot;

/// The hyperboloid origin `(0, ..., 0, 1)` in an ambient space of dimension `dim`.
pub fn basepoint(dim: usize) -> Array1<f64> {
    let mut p = Array1::zeros(dim);
    if dim > 0 {
        p[dim - 1] = 1.0;
    }
    p
}

/// True if `p` lies on the upper sheet within `tol`.
///
/// Checks `|<p, p>_M + 1| <= tol` and a positive timelike coordinate.
pub fn is_on_hyperboloid(p: ArrayView1<'_, f64>, tol: f64) -> bool {
    match p.iter().last() {
        Some(&time) if time > 0.0 => (minkowski_dot(p, p) + 1.0).abs() <= tol,
        _ => false,
    }
}

/// Rescale a timelike vector back onto the hyperboloid.
///
/// Divides by `sqrt(-<p, p>_M)`. Used to remove drift accumulated by repeated
/// geodesic updates. Returns `None` for spacelike or null input, where no
/// rescaling reaches the hyperboloid.
pub fn project_to_hyperboloid(p: ArrayView1<'_, f64>) -> Option<Array1<f64>> {
    let squared = minkowski_dot(p, p);
    if !(squared < 0.0) {
        return None;
    }
    Some(&p / (-squared).sqrt())
}

/// Map a hyperboloid point to the Poincare ball.
///
/// `x = p_space / (p_time + 1)`. The result has one coordinate fewer than `p`.
pub fn to_poincare_ball(p: ArrayView1<'_, f64>) -> Array1<f64> {
    let n = p.len();
    if n == 0 {
        return Array1::zeros(0);
    }
    let denom = p[n - 1] + 1.0;
    p.slice(s![..n - 1]).mapv(|x| x / denom)
}

/// Map a Poincare ball point back to the hyperboloid.
///
/// Inverse of [`to_poincare_ball`]:
/// `p_space = 2x / (1 - |x|^2)`, `p_time = (1 + |x|^2) / (1 - |x|^2)`.
/// Returns `None` when `x` is not strictly inside the unit ball.
pub fn from_poincare_ball(x: ArrayView1<'_, f64>) -> Option<Array1<f64>> {
    let norm_sq = x.dot(&x);
    if !(norm_sq < 1.0) {
        return None;
    }
    let denom = 1.0 - norm_sq;

    let mut p = Array1::zeros(x.len() + 1);
    p.slice_mut(s![..x.len()]).assign(&(&x * (2.0 / denom)));
    p[x.len()] = (1.0 + norm_sq) / denom;
    Some(p)
}
