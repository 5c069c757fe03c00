//! Distance Matrix Loader: merge pairwise cosine distances into the nodes.
//!
//! The matrix file has no header; cell (i, j) is the cosine distance between
//! the nodes at source rows i and j. Dimensions are validated against the
//! node count on both axes before any cell is merged.

use cg_common::{Error, Node, Result};
use std::path::Path;

/// Merge the distance matrix at `path` into `nodes` in place.
///
/// For each cell (i, j) the value lands in `nodes[i].distances` keyed by
/// `id_array[j]`, skipping the cell when `nodes[i].id == id_array[j]`. That
/// comparison is an id-equality check standing in for a position-equality
/// check; it excludes exactly the diagonal because `id_array[k]` equals
/// `nodes[k].id` for all k (guaranteed by the builder).
///
/// Returns the number of distance entries merged.
pub fn apply_distances(path: &Path, nodes: &mut [Node], id_array: &[i64]) -> Result<usize> {
    debug_assert_eq!(id_array.len(), nodes.len());

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .from_path(path)
        .map_err(|e| Error::csv(path, e))?;

    let mut rows = Vec::with_capacity(nodes.len());
    for record in reader.records() {
        rows.push(record.map_err(|e| Error::csv(path, e))?);
    }

    if rows.len() != nodes.len() {
        return Err(Error::MatrixHeight {
            actual: rows.len(),
            expected: nodes.len(),
        });
    }
    for (i, row) in rows.iter().enumerate() {
        if row.len() != nodes.len() {
            return Err(Error::MatrixWidth {
                row: i + 1,
                actual: row.len(),
                expected: nodes.len(),
            });
        }
    }

    let mut merged = 0;
    for (i, row) in rows.iter().enumerate() {
        for (j, cell) in row.iter().enumerate() {
            let value: f64 = cell.trim().parse().map_err(|_| Error::Format {
                row: i + 1,
                column: format!("matrix column {}", j + 1),
                value: cell.to_string(),
                expected: "float",
            })?;
            let target_id = id_array[j];
            if nodes[i].id != target_id {
                nodes[i].distances.insert(target_id, value);
                merged += 1;
            }
        }
    }

    Ok(merged)
}
