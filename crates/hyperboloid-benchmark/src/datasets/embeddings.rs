//! Embedding file loader.
//!
//! Two whitespace-separated text formats are supported:
//!
//! - **Hyperbolic** (`.csv` from the Minkowski trainer): every line is
//!   `word c_1 ... c_{k+1}`, no header, timelike coordinate last.
//! - **Euclidean** (fastText `.vec`): a `count dim` header line followed by
//!   `word c_1 ... c_k` lines.
//!
//! Words are kept verbatim; `null` and `nan` are ordinary words.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use hyperboloid_geometry::lorentz::is_on_hyperboloid;
use hyperboloid_geometry::{EmbeddingTable, Geometry};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::error::{BenchError, BenchResult};

/// Tolerance on `|<p, p>_M + 1|` before a row is reported as off the hyperboloid.
const OFF_MANIFOLD_TOLERANCE: f64 = 1e-3;

/// An embedding file together with the geometry it is scored in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmbeddingSource {
    pub path: PathBuf,
    pub geometry: Geometry,
}

impl EmbeddingSource {
    pub fn new(path: impl Into<PathBuf>, geometry: Geometry) -> Self {
        Self {
            path: path.into(),
            geometry,
        }
    }

    /// Name used for this file in result files.
    pub fn identifier(&self) -> String {
        self.path.display().to_string()
    }

    pub fn load(&self) -> BenchResult<EmbeddingTable> {
        load_embeddings(&self.path, self.geometry)
    }
}

/// Load an embedding file from disk.
pub fn load_embeddings(path: &Path, geometry: Geometry) -> BenchResult<EmbeddingTable> {
    let file = File::open(path).map_err(|e| BenchError::io(path, e))?;
    let table = read_embeddings(BufReader::new(file), path, geometry)?;
    info!(
        path = %path.display(),
        geometry = %geometry,
        words = table.len(),
        dim = table.dim(),
        "Loaded embeddings"
    );
    Ok(table)
}

/// Parse embeddings from any buffered reader. `path` is used in errors only.
pub fn read_embeddings<R: BufRead>(
    reader: R,
    path: &Path,
    geometry: Geometry,
) -> BenchResult<EmbeddingTable> {
    let mut header: Option<(usize, usize)> = None;
    let mut rows: Vec<(String, Vec<f64>)> = Vec::new();
    let mut dim: Option<usize> = None;

    for (line_idx, line_result) in reader.lines().enumerate() {
        let line_num = line_idx + 1;
        let line = line_result.map_err(|e| BenchError::io(path, e))?;

        if line_num == 1 && geometry == Geometry::Euclidean {
            header = Some(parse_header(&line, path)?);
            continue;
        }

        let mut fields = line.split_whitespace();
        let word = match fields.next() {
            Some(w) => w.to_string(),
            None => continue,
        };

        let coords = fields
            .map(|f| {
                f.parse::<f64>().map_err(|_| {
                    BenchError::parse(path, line_num, format!("invalid coordinate {:?}", f))
                })
            })
            .collect::<BenchResult<Vec<f64>>>()?;

        if coords.is_empty() {
            return Err(BenchError::parse(
                path,
                line_num,
                format!("word {:?} has no coordinates", word),
            ));
        }
        let expected = *dim.get_or_insert(coords.len());
        if coords.len() != expected {
            return Err(BenchError::parse(
                path,
                line_num,
                format!("expected {} coordinates, found {}", expected, coords.len()),
            ));
        }

        rows.push((word, coords));
    }

    if rows.is_empty() {
        return Err(BenchError::EmptyFile(path.to_path_buf()));
    }

    if let Some((count, header_dim)) = header {
        let actual_dim = dim.unwrap_or(0);
        if count != rows.len() || header_dim != actual_dim {
            warn!(
                path = %path.display(),
                header_count = count,
                header_dim,
                actual_count = rows.len(),
                actual_dim,
                "Embedding header does not match file contents"
            );
        }
    }

    let table = EmbeddingTable::from_rows(rows)?;

    if geometry == Geometry::Hyperbolic {
        let off_manifold = table
            .vectors()
            .rows()
            .into_iter()
            .filter(|row| !is_on_hyperboloid(*row, OFF_MANIFOLD_TOLERANCE))
            .count();
        if off_manifold > 0 {
            warn!(
                path = %path.display(),
                off_manifold,
                total = table.len(),
                "Rows are not on the hyperboloid"
            );
        } else {
            debug!(path = %path.display(), "All rows lie on the hyperboloid");
        }
    }

    Ok(table)
}

fn parse_header(line: &str, path: &Path) -> BenchResult<(usize, usize)> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    match fields.as_slice() {
        [count, dim] => {
            let count = count.parse::<usize>();
            let dim = dim.parse::<usize>();
            match (count, dim) {
                (Ok(c), Ok(d)) => Ok((c, d)),
                _ => Err(BenchError::parse(
                    path,
                    1,
                    format!("invalid header {:?}, expected \"count dim\"", line),
                )),
            }
        }
        _ => Err(BenchError::parse(
            path,
            1,
            format!("invalid header {:?}, expected \"count dim\"", line),
        )),
    }
}
