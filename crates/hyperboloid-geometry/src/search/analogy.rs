//! Analogy completion `a : b = c : ?` by parallel transport.

use ndarray::{Array1, ArrayView1};
use tracing::trace;

use super::neighbors::{closest_words, Neighbor};
use crate::error::GeometryResult;
use crate::lorentz::{exponential, geodesic_parallel_transport, logarithm};
use crate::table::EmbeddingTable;

/// Number of candidates returned by analogy queries unless told otherwise.
pub const DEFAULT_CANDIDATES: usize = 10;

/// The point that stands to `c` as `b` stands to `a`.
///
/// The displacement `log_a(b)` is parallel transported from `a` to `c` along
/// the geodesic joining them, then followed from `c` with the exponential map.
///
/// # Mathematical Formula
///
/// `exp_c(P_{a->c}(log_a(b)))`
pub fn analogy(
    a: ArrayView1<'_, f64>,
    b: ArrayView1<'_, f64>,
    c: ArrayView1<'_, f64>,
) -> Array1<f64> {
    let tangent = logarithm(a, b);
    let direction = logarithm(a, c);
    let transported = geodesic_parallel_transport(a, direction.view(), tangent.view());
    exponential(c, transported.view())
}

/// Candidates `x` for `a : b = c : x`, nearest first.
///
/// The query words themselves are NOT removed from the result.
///
/// # Errors
///
/// [`crate::GeometryError::WordNotFound`] naming the first of `a`, `b`, `c`
/// missing from `table`.
pub fn word_analogy(
    a: &str,
    b: &str,
    c: &str,
    table: &EmbeddingTable,
    n: usize,
) -> GeometryResult<Vec<Neighbor>> {
    let va = table.lookup(a)?;
    let vb = table.lookup(b)?;
    let vc = table.lookup(c)?;

    trace!(a, b, c, "Solving analogy");
    let target = analogy(va, vb, vc);
    closest_words(target.view(), table, n)
}
