//! Lorentz hyperboloid geometry for word embeddings.
//!
//! This crate provides the numerical core used to evaluate word embeddings
//! trained on the hyperboloid model of hyperbolic space:
//!
//! - **lorentz**: Minkowski bilinear form, geodesic distance, logarithmic and
//!   exponential maps, parallel transport, Poincare ball conversion
//! - **table**: read-only word → vector tables backed by a dense matrix
//! - **search**: nearest-neighbour queries and analogy completion
//! - **error**: [`GeometryError`] for lookup and shape failures
//!
//! # Coordinate Convention
//!
//! The LAST coordinate of every vector is timelike; all preceding coordinates
//! are spacelike. Points on the hyperboloid satisfy `<p, p>_M = -1`.
//!
//! # Example
//!
//! ```
//! use hyperboloid_geometry::lorentz::{basepoint, distance, exponential};
//! use ndarray::array;
//!
//! let origin = basepoint(3);
//! let tangent = array![0.5, 0.0, 0.0];
//! let point = exponential(origin.view(), tangent.view());
//! assert!((distance(origin.view(), point.view()) - 0.5).abs() < 1e-9);
//! ```

pub mod error;
pub mod lorentz;
pub mod search;
pub mod table;

pub use error::{GeometryError, GeometryResult};
pub use lorentz::{
    distance, exponential, geodesic_parallel_transport, logarithm, minkowski_dot,
    minkowski_dot_matrix, minkowski_norm,
};
pub use search::{analogy, closest_words, word_analogy, Neighbor};
pub use table::{EmbeddingTable, Geometry};
