//! Node types published to the front-end force graph.
//!
//! A `Node` is one labeled comment: its text, author, publish timestamp,
//! externally computed cluster assignment, and pairwise cosine distances to
//! the other nodes. The serialized field names and order are a wire contract
//! with the front end and must not change without a schema version bump.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One visualized unit corresponding to a single labeled text record.
///
/// Field declaration order is the serialization order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Node {
    /// Unique identifier, taken verbatim from the source `index` column.
    /// Uniqueness is the caller's responsibility and is not verified here.
    pub id: i64,
    /// Short display label derived from the first tokens of `text`.
    pub node_label: String,
    /// Full comment body, verbatim.
    pub text: String,
    /// Cluster label from the upstream k-medoids run.
    pub group: i64,
    /// Author identifier, verbatim.
    pub author: String,
    /// Publish timestamp, opaque to this system (no parsing or validation).
    pub published_at: String,
    /// Distance from this node to its cluster's medoid.
    pub distance_from_cluster_medoid: f64,
    /// Cosine distance to every other node, keyed by that node's `id`.
    /// Never contains this node's own `id`.
    pub distances: BTreeMap<i64, f64>,
}

/// The published document: a single top-level `nodes` array in source-row
/// order. No other keys.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct NodeDocument {
    pub nodes: Vec<Node>,
}

/// Number of whitespace-separated tokens kept in a node label.
pub const LABEL_TOKENS: usize = 3;

/// Marker appended to every node label, regardless of text length.
pub const LABEL_ELLIPSIS: &str = "...";

/// Derive a display label from comment text: the first [`LABEL_TOKENS`]
/// whitespace-separated tokens rejoined with single spaces, with
/// [`LABEL_ELLIPSIS`] always appended (even when the text has fewer tokens).
pub fn node_label(text: &str) -> String {
    let tokens: Vec<&str> = text.split_whitespace().take(LABEL_TOKENS).collect();
    format!("{}{}", tokens.join(" "), LABEL_ELLIPSIS)
}
