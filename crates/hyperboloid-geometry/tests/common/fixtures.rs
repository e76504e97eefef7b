//! Deterministic fixtures for integration tests.
//!
//! Every generator is seeded, so the same call always yields the same table.

#![allow(dead_code)]

use hyperboloid_geometry::lorentz::random_hyperboloid_point;
use hyperboloid_geometry::EmbeddingTable;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Ambient dimension used by most fixtures (intrinsic dimension 5).
pub const AMBIENT_DIM: usize = 6;

/// Spacing between consecutive words of [`geodesic_line_table`].
pub const LINE_STEP: f64 = 0.5;

/// Point at signed distance `x` from the origin along the first axis.
pub fn line_point(x: f64, ambient_dim: usize) -> Vec<f64> {
    let mut p = vec![0.0; ambient_dim];
    p[0] = x.sinh();
    p[ambient_dim - 1] = x.cosh();
    p
}

/// `count` words `w0, w1, ...` spaced [`LINE_STEP`] apart on one geodesic.
pub fn geodesic_line_table(count: usize) -> EmbeddingTable {
    EmbeddingTable::from_rows(
        (0..count).map(|i| (format!("w{}", i), line_point(i as f64 * LINE_STEP, AMBIENT_DIM))),
    )
    .expect("line fixture is well-formed")
}

/// `count` random hyperboloid points named `word0, word1, ...`.
pub fn random_table(seed: u64, count: usize, ambient_dim: usize, std_dev: f64) -> EmbeddingTable {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    EmbeddingTable::from_rows((0..count).map(|i| {
        let p = random_hyperboloid_point(&mut rng, ambient_dim, std_dev)
            .expect("fixture std dev is valid");
        (format!("word{}", i), p.to_vec())
    }))
    .expect("random fixture is well-formed")
}
