//! Minkowski bilinear form, norm and geodesic distance.

use ndarray::{s, Array2, ArrayView1, ArrayView2, Axis};

use super::numerics::clamped_arcosh;

/// Minkowski inner product of two vectors of equal dimension `n`.
///
/// `<u, v>_M = dot(u[..n-1], v[..n-1]) - u[n-1] * v[n-1]`
///
/// The form is indefinite: the result may be negative, zero or positive.
/// NaN and infinite inputs propagate.
///
/// # Example
///
/// ```
/// use hyperboloid_geometry::lorentz::minkowski_dot;
/// use ndarray::array;
///
/// let u = array![1.0, 0.5, -2.0];
/// let v = array![0.0, 0.5, 1.0];
/// assert_eq!(minkowski_dot(u.view(), v.view()), 2.25);
/// ```
#[inline]
pub fn minkowski_dot(u: ArrayView1<'_, f64>, v: ArrayView1<'_, f64>) -> f64 {
    debug_assert_eq!(u.len(), v.len(), "minkowski_dot: length mismatch");
    let n = u.len();
    if n == 0 {
        return 0.0;
    }
    let rank = n - 1;
    u.slice(s![..rank]).dot(&v.slice(s![..rank])) - u[rank] * v[rank]
}

/// Minkowski inner product of every row of `a` with every row of `b`.
///
/// Returns a matrix of shape `(a.nrows(), b.nrows())` computed as
/// `A_space . B_space^T - A_time (x) B_time`, i.e. one matrix product plus one
/// outer product instead of a loop over pairs. Entry `[i, j]` equals
/// `minkowski_dot(a.row(i), b.row(j))`.
pub fn minkowski_dot_matrix(a: ArrayView2<'_, f64>, b: ArrayView2<'_, f64>) -> Array2<f64> {
    debug_assert_eq!(a.ncols(), b.ncols(), "minkowski_dot_matrix: column mismatch");
    let cols = a.ncols();
    if cols == 0 {
        return Array2::zeros((a.nrows(), b.nrows()));
    }
    let rank = cols - 1;

    let spacelike = a.slice(s![.., ..rank]).dot(&b.slice(s![.., ..rank]).t());
    let timelike = a
        .column(rank)
        .insert_axis(Axis(1))
        .dot(&b.column(rank).insert_axis(Axis(0)));

    spacelike - timelike
}

/// Minkowski norm `sqrt(<v, v>_M)` of a tangent vector.
///
/// Tangent vectors are spacelike; a non-positive square (timelike or null
/// input, or rounding noise around zero) yields 0.
#[inline]
pub fn minkowski_norm(v: ArrayView1<'_, f64>) -> f64 {
    let squared = minkowski_dot(v, v);
    if squared <= 0.0 {
        0.0
    } else {
        squared.sqrt()
    }
}

/// Geodesic distance between two points on the hyperboloid.
///
/// `d(a, b) = arccosh(-<a, b>_M)`, with the argument clamped to `>= 1` so that
/// coincident points never produce NaN.
#[inline]
pub fn distance(a: ArrayView1<'_, f64>, b: ArrayView1<'_, f64>) -> f64 {
    clamped_arcosh(-minkowski_dot(a, b))
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::{array, Array1};

    fn hyperbola_point(t: f64) -> Array1<f64> {
        array![t.sinh(), t.cosh()]
    }

    #[test]
    fn test_minkowski_dot_signature() {
        // Only the last coordinate carries the minus sign.
        let u = array![2.0, 1.0, 3.0];
        let v = array![2.0, 1.0, 3.0];
        assert_eq!(minkowski_dot(u.view(), v.view()), 4.0 + 1.0 - 9.0);
    }

    #[test]
    fn test_minkowski_dot_mixed_signs() {
        let u = array![1.0, 0.5, -2.0];
        let v = array![0.0, 0.5, 1.0];
        assert!((minkowski_dot(u.view(), v.view()) - 2.25).abs() < 1e-15);
    }

    #[test]
    fn test_minkowski_dot_propagates_nan() {
        let u = array![f64::NAN, 1.0];
        let v = array![1.0, 1.0];
        assert!(minkowski_dot(u.view(), v.view()).is_nan());
    }

    #[test]
    fn test_point_self_dot_is_minus_one() {
        for t in [0.0, 0.3, 1.0, 4.0] {
            let p = hyperbola_point(t);
            assert!((minkowski_dot(p.view(), p.view()) + 1.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_matrix_matches_scalar_form() {
        let a = array![[0.1, 0.2, -0.3, 1.5], [1.0, 0.0, 2.0, 3.0]];
        let b = array![
            [0.0, 0.0, 0.0, 1.0],
            [0.5, -0.5, 0.25, 2.0],
            [3.0, 1.0, 0.0, -1.0]
        ];

        let m = minkowski_dot_matrix(a.view(), b.view());
        assert_eq!(m.dim(), (2, 3));
        for i in 0..2 {
            for j in 0..3 {
                let scalar = minkowski_dot(a.row(i), b.row(j));
                assert!(
                    (m[[i, j]] - scalar).abs() < 1e-12,
                    "entry [{}, {}]: matrix={} scalar={}",
                    i,
                    j,
                    m[[i, j]],
                    scalar
                );
            }
        }
    }

    #[test]
    fn test_matrix_single_query_row() {
        let query = array![0.5, 0.25, 2.0];
        let table = array![[0.0, 0.0, 1.0], [1.0, 1.0, 1.0]];

        let m = minkowski_dot_matrix(query.view().insert_axis(Axis(0)), table.view());
        assert_eq!(m.dim(), (1, 2));
        assert!((m[[0, 0]] + 2.0).abs() < 1e-15);
        assert!((m[[0, 1]] - (0.5 + 0.25 - 2.0)).abs() < 1e-15);
    }

    #[test]
    fn test_minkowski_norm_of_tangent() {
        let v = array![3.0, 4.0, 0.0];
        assert!((minkowski_norm(v.view()) - 5.0).abs() < 1e-15);
    }

    #[test]
    fn test_minkowski_norm_of_timelike_is_zero() {
        let v = array![0.0, 0.0, 1.0];
        assert_eq!(minkowski_norm(v.view()), 0.0);
    }

    #[test]
    fn test_distance_along_hyperbola() {
        let a = hyperbola_point(0.0);
        let b = hyperbola_point(0.5);
        assert!((distance(a.view(), b.view()) - 0.5).abs() < 1e-9);
        assert!((distance(b.view(), a.view()) - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_distance_same_point_is_zero() {
        let p = hyperbola_point(2.7);
        let d = distance(p.view(), p.view());
        assert!(!d.is_nan());
        assert!(d.abs() < 1e-6);
    }
}
