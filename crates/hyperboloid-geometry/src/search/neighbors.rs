//! Ranked nearest-neighbour queries over an [`EmbeddingTable`].

use std::cmp::Ordering;

use ndarray::{ArrayView1, Axis};
use serde::Serialize;

use crate::error::{GeometryError, GeometryResult};
use crate::lorentz::{clamped_arcosh, minkowski_dot_matrix};
use crate::table::EmbeddingTable;

/// A table word together with its geodesic distance to the query.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Neighbor {
    /// Row of the word in the table.
    pub index: usize,
    pub word: String,
    pub distance: f64,
}

/// Ascending distance, NaN last, ties by table row.
fn rank_order(a: &(usize, f64), b: &(usize, f64)) -> Ordering {
    let by_distance = match (a.1.is_nan(), b.1.is_nan()) {
        (false, false) => a.1.total_cmp(&b.1),
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
    };
    by_distance.then(a.0.cmp(&b.0))
}

/// The `min(n, table.len())` words nearest to `vec`, closest first.
///
/// Distances to every row are computed with one batched Minkowski product;
/// products above `-1` (rounding near coincident points) are clamped so the
/// distance is 0. Selection is linear in the table size, sorting only the
/// `n` survivors.
///
/// # Errors
///
/// [`GeometryError::DimensionMismatch`] if `vec` does not have the table's
/// dimension.
pub fn closest_words(
    vec: ArrayView1<'_, f64>,
    table: &EmbeddingTable,
    n: usize,
) -> GeometryResult<Vec<Neighbor>> {
    if table.is_empty() || n == 0 {
        return Ok(Vec::new());
    }
    if vec.len() != table.dim() {
        return Err(GeometryError::DimensionMismatch {
            expected: table.dim(),
            actual: vec.len(),
        });
    }

    let mdps = minkowski_dot_matrix(vec.insert_axis(Axis(0)), table.vectors());
    let mut ranked: Vec<(usize, f64)> = mdps
        .row(0)
        .iter()
        .enumerate()
        .map(|(i, &mdp)| (i, clamped_arcosh(-mdp)))
        .collect();

    let n = n.min(ranked.len());
    if n < ranked.len() {
        ranked.select_nth_unstable_by(n - 1, rank_order);
        ranked.truncate(n);
    }
    ranked.sort_unstable_by(rank_order);

    Ok(ranked
        .into_iter()
        .map(|(index, distance)| Neighbor {
            index,
            word: table.words()[index].clone(),
            distance,
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::{array, Array1};

    fn line_point(x: f64) -> Vec<f64> {
        vec![x.sinh(), 0.0, x.cosh()]
    }

    fn line_table() -> EmbeddingTable {
        EmbeddingTable::from_rows(
            [("e", 4.0), ("a", 0.0), ("c", 2.0), ("b", 1.0), ("d", 3.0)]
                .into_iter()
                .map(|(w, x)| (w.to_string(), line_point(x))),
        )
        .unwrap()
    }

    #[test]
    fn test_ranked_by_distance() {
        let table = line_table();
        let query = Array1::from(line_point(0.0));
        let result = closest_words(query.view(), &table, 3).unwrap();

        let words: Vec<&str> = result.iter().map(|n| n.word.as_str()).collect();
        assert_eq!(words, vec!["a", "b", "c"]);
        assert!(result[0].distance.abs() < 1e-9);
        assert!((result[1].distance - 1.0).abs() < 1e-9);
        assert!((result[2].distance - 2.0).abs() < 1e-9);
        assert_eq!(result[0].index, 1);
    }

    #[test]
    fn test_result_size_is_capped() {
        let table = line_table();
        let query = Array1::from(line_point(2.2));
        assert_eq!(closest_words(query.view(), &table, 10).unwrap().len(), 5);
        assert_eq!(closest_words(query.view(), &table, 2).unwrap().len(), 2);
        assert!(closest_words(query.view(), &table, 0).unwrap().is_empty());
    }

    #[test]
    fn test_self_query_distance_zero() {
        let table = line_table();
        for word in table.words() {
            let query = table.lookup(word).unwrap().to_owned();
            let result = closest_words(query.view(), &table, 1).unwrap();
            assert_eq!(&result[0].word, word);
            assert!(result[0].distance.abs() < 1e-4);
        }
    }

    #[test]
    fn test_ties_broken_by_table_order() {
        let table = EmbeddingTable::from_rows(vec![
            ("left".to_string(), line_point(-1.0)),
            ("origin".to_string(), line_point(0.0)),
            ("right".to_string(), line_point(1.0)),
        ])
        .unwrap();
        let query = Array1::from(line_point(0.0));
        let result = closest_words(query.view(), &table, 3).unwrap();
        assert_eq!(result[0].word, "origin");
        assert_eq!(result[1].word, "left");
        assert_eq!(result[2].word, "right");
    }

    #[test]
    fn test_nan_row_ranked_last() {
        let table = EmbeddingTable::from_rows(vec![
            ("broken".to_string(), vec![f64::NAN, 0.0, 1.0]),
            ("far".to_string(), line_point(5.0)),
        ])
        .unwrap();
        let query = Array1::from(line_point(0.0));
        let result = closest_words(query.view(), &table, 2).unwrap();
        assert_eq!(result[0].word, "far");
        assert!(result[1].distance.is_nan());
    }

    #[test]
    fn test_dimension_mismatch() {
        let table = line_table();
        let query = array![0.0, 1.0];
        let err = closest_words(query.view(), &table, 3).unwrap_err();
        assert_eq!(
            err,
            GeometryError::DimensionMismatch {
                expected: 3,
                actual: 2
            }
        );
    }
}
