//! Rank correlation.
//!
//! Spearman ρ is the Pearson correlation of the rank vectors, with tied
//! values sharing the average of the ranks they span. Undefined correlations
//! (fewer than two observations, a constant input, NaN input) are NaN.

use std::cmp::Ordering;

/// 1-based ranks of `values`; ties get the mean of their positions.
///
/// `[10, 20, 20, 30]` ranks as `[1, 2.5, 2.5, 4]`.
pub fn average_ranks(values: &[f64]) -> Vec<f64> {
    let mut order: Vec<usize> = (0..values.len()).collect();
    order.sort_by(|&a, &b| values[a].partial_cmp(&values[b]).unwrap_or(Ordering::Equal));

    let mut ranks = vec![0.0; values.len()];
    let mut start = 0;
    while start < order.len() {
        let mut end = start + 1;
        while end < order.len() && values[order[end]] == values[order[start]] {
            end += 1;
        }
        // Positions start..end (0-based) share ranks start+1..=end.
        let shared = (start + 1 + end) as f64 / 2.0;
        for &i in &order[start..end] {
            ranks[i] = shared;
        }
        start = end;
    }
    ranks
}

/// Pearson correlation coefficient.
pub fn pearson(x: &[f64], y: &[f64]) -> f64 {
    debug_assert_eq!(x.len(), y.len());
    let n = x.len();
    if n < 2 {
        return f64::NAN;
    }

    let mean_x = x.iter().sum::<f64>() / n as f64;
    let mean_y = y.iter().sum::<f64>() / n as f64;

    let mut cov = 0.0;
    let mut var_x = 0.0;
    let mut var_y = 0.0;
    for (a, b) in x.iter().zip(y.iter()) {
        let dx = a - mean_x;
        let dy = b - mean_y;
        cov += dx * dy;
        var_x += dx * dx;
        var_y += dy * dy;
    }

    if var_x == 0.0 || var_y == 0.0 {
        return f64::NAN;
    }
    cov / (var_x.sqrt() * var_y.sqrt())
}

/// Spearman rank correlation between paired observations.
pub fn spearman(x: &[f64], y: &[f64]) -> f64 {
    debug_assert_eq!(x.len(), y.len());
    if x.len() < 2 || x.len() != y.len() {
        return f64::NAN;
    }
    if x.iter().chain(y.iter()).any(|v| v.is_nan()) {
        return f64::NAN;
    }
    pearson(&average_ranks(x), &average_ranks(y))
}

/// Mean of `values` weighted by `weights`.
///
/// Entries with zero weight are ignored, even when their value is NaN. A NaN
/// value with non-zero weight makes the result NaN. All-zero weights give NaN.
pub fn weighted_mean(values: &[f64], weights: &[f64]) -> f64 {
    debug_assert_eq!(values.len(), weights.len());
    let mut total = 0.0;
    let mut weight_sum = 0.0;
    for (&v, &w) in values.iter().zip(weights.iter()) {
        if w == 0.0 {
            continue;
        }
        total += v * w;
        weight_sum += w;
    }

    if weight_sum == 0.0 {
        f64::NAN
    } else {
        total / weight_sum
    }
}
