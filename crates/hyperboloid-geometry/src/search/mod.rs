//! Nearest-neighbour queries and analogy completion on the hyperboloid.
//!
//! - [`closest_words`]: the `n` table words nearest to a query point
//! - [`analogy`]: complete `a : b = c : ?` by parallel transport
//! - [`word_analogy`]: [`analogy`] on table words followed by [`closest_words`]

mod analogy;
mod neighbors;

pub use analogy::{analogy, word_analogy, DEFAULT_CANDIDATES};
pub use neighbors::{closest_words, Neighbor};
