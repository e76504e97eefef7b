//! On-disk fixtures for integration tests.
//!
//! Files are written into a caller-owned `tempfile::TempDir` so they are
//! removed when the test finishes.

#![allow(dead_code)]

use std::path::{Path, PathBuf};

/// Spacing between consecutive words of [`line_csv`].
pub const LINE_STEP: f64 = 0.5;

pub fn write_file(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, content).expect("fixture file is writable");
    path
}

/// `count` hyperboloid words `w0, w1, ...` spaced [`LINE_STEP`] apart on one
/// geodesic, in the Minkowski trainer's `.csv` layout.
pub fn line_csv(count: usize) -> String {
    (0..count)
        .map(|i| {
            let x = i as f64 * LINE_STEP;
            format!("w{} {} 0 0 {}\n", i, x.sinh(), x.cosh())
        })
        .collect()
}

/// Five hyperboloid words; the two animals are close, the vehicles far away.
pub fn toy_hyperbolic_csv() -> String {
    let rows: [(&str, f64, f64); 5] = [
        ("cat", 0.1, 0.0),
        ("tiger", 0.2, 0.1),
        ("dog", 0.0, 0.3),
        ("car", 2.0, -1.0),
        ("truck", 2.2, -1.1),
    ];
    rows.iter()
        .map(|(word, x, y)| {
            let t = (1.0 + x * x + y * y).sqrt();
            format!("{} {} {} {}\n", word, x, y, t)
        })
        .collect()
}

/// fastText `.vec` file where `queen = king - man + woman` after normalization.
pub fn royal_vec() -> String {
    let s = 1.0 / 3.0_f64.sqrt();
    format!(
        "5 4\nman 1 0 0 0\nwoman 0 1 0 0\nking 0 0 1 0\nqueen {} {} {} 0\napple 0 0 0 1\n",
        -s, s, s
    )
}

pub fn line_questions() -> &'static str {
    ": line\n\
     w0 w1 w2 w3\n\
     W1 W2 W3 W4\n\
     w0 w2 w1 w3\n\
     : unknown\n\
     w0 w1 w2 zebra\n"
}

pub fn royal_questions() -> &'static str {
    ": royal\nman woman king queen\n"
}
