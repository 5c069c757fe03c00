//! Node Builder: zip the column store row-wise into typed nodes.

use crate::columns::{ColumnStore, COL_DISTANCE_KMEDOIDS, COL_INDEX, COL_LABEL_KMEDOIDS};
use cg_common::{node_label, Error, Node, Result};
use std::collections::BTreeMap;

/// Node Builder output: the nodes plus the position → id mapping consumed by
/// the distance matrix pass.
///
/// Invariant: `id_array[k] == nodes[k].id` for all k. Both are produced in
/// the same pass over the same rows, and the matrix pass relies on it for
/// self-exclusion.
#[derive(Debug, Clone)]
pub struct BuiltNodes {
    pub nodes: Vec<Node>,
    pub id_array: Vec<i64>,
}

/// Build nodes from a validated column store.
///
/// Typed cells (`index`, `label_kmedoids`, `distance_kmedoids`) are trimmed
/// and parsed; any parse failure aborts the whole build with row and column
/// context. Row numbers in errors are 1-based data rows (header excluded).
pub fn build_nodes(store: &ColumnStore) -> Result<BuiltNodes> {
    store.validate()?;

    let mut nodes = Vec::with_capacity(store.len());
    let mut id_array = Vec::with_capacity(store.len());

    for k in 0..store.len() {
        let id = parse_i64(k, COL_INDEX, &store.index[k])?;
        let group = parse_i64(k, COL_LABEL_KMEDOIDS, &store.label_kmedoids[k])?;
        let distance_from_cluster_medoid =
            parse_f64(k, COL_DISTANCE_KMEDOIDS, &store.distance_kmedoids[k])?;

        let node = Node {
            id,
            node_label: node_label(&store.text[k]),
            text: store.text[k].clone(),
            group,
            author: store.author_name[k].clone(),
            published_at: store.published_at[k].clone(),
            distance_from_cluster_medoid,
            distances: BTreeMap::new(),
        };

        id_array.push(node.id);
        nodes.push(node);
        debug_assert_eq!(id_array[k], nodes[k].id);
    }

    Ok(BuiltNodes { nodes, id_array })
}

fn parse_i64(row: usize, column: &'static str, value: &str) -> Result<i64> {
    value.trim().parse().map_err(|_| Error::Format {
        row: row + 1,
        column: column.to_string(),
        value: value.to_string(),
        expected: "integer",
    })
}

fn parse_f64(row: usize, column: &'static str, value: &str) -> Result<f64> {
    value.trim().parse().map_err(|_| Error::Format {
        row: row + 1,
        column: column.to_string(),
        value: value.to_string(),
        expected: "float",
    })
}
