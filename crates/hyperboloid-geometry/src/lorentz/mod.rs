//! Lorentz (hyperboloid) model of hyperbolic space.
//!
//! Points live on the upper sheet of `<p, p>_M = -1` in Minkowski space, with
//! the timelike coordinate stored LAST. Tangent vectors at `p` satisfy
//! `<v, p>_M = 0` and are spacelike, so their Minkowski norm is real.
//!
//! # Mathematical Formulas
//!
//! - `<u, v>_M = sum_{i<n} u_i v_i - u_n v_n`
//! - `d(a, b) = arccosh(-<a, b>_M)`
//! - `log_a(b) = d(a, b) * proj / ||proj||_M`, with `proj = b + <a, b>_M a`
//! - `exp_a(v) = cosh(||v||_M) a + sinh(||v||_M) v / ||v||_M`
//!
//! All functions are pure and operate on `ndarray` views. Shape mismatches
//! are programming errors and are only checked by debug assertions.

mod maps;
mod numerics;
mod ops;
mod points;
mod sampling;
mod transport;

#[cfg(test)]
mod tests_roundtrip;

pub use maps::{exponential, logarithm};
pub use numerics::{clamped_arcosh, MIN_NORM};
pub use ops::{distance, minkowski_dot, minkowski_dot_matrix, minkowski_norm};
pub use points::{
    basepoint, from_poincare_ball, is_on_hyperboloid, project_to_hyperboloid, to_poincare_ball,
};
pub use sampling::random_hyperboloid_point;
pub use transport::geodesic_parallel_transport;
