//! The four-phase pipeline: load columns, build nodes, merge distances,
//! publish. Strictly sequential, single pass, fully in memory.

use crate::build::{build_nodes, BuiltNodes};
use crate::columns::ColumnStore;
use crate::config::PipelineConfig;
use crate::matrix::apply_distances;
use crate::publish::publish;
use cg_common::{NodeDocument, Result};
use std::path::PathBuf;
use tracing::{debug, info};

/// Outcome of a pipeline run.
#[derive(Debug, Clone)]
pub struct PipelineSummary {
    /// Nodes built (equals the primary CSV's data-row count).
    pub nodes: usize,
    /// Distance entries merged from the matrix (0 when the matrix pass was
    /// skipped).
    pub distance_entries: usize,
    /// Where the document landed; `None` for a check-only run.
    pub published_to: Option<PathBuf>,
}

/// Run the full pipeline and publish the document.
pub fn run(config: &PipelineConfig) -> Result<PipelineSummary> {
    let (doc, distance_entries) = assemble(config)?;
    publish(&doc, &config.publish_path)?;
    info!(
        nodes = doc.nodes.len(),
        distance_entries,
        path = %config.publish_path.display(),
        "document published"
    );
    Ok(PipelineSummary {
        nodes: doc.nodes.len(),
        distance_entries,
        published_to: Some(config.publish_path.clone()),
    })
}

/// Run everything except the publish step: load, build, and merge in memory,
/// then discard. Used to validate inputs without touching the publish path.
pub fn check(config: &PipelineConfig) -> Result<PipelineSummary> {
    let (doc, distance_entries) = assemble(config)?;
    info!(nodes = doc.nodes.len(), distance_entries, "inputs check out");
    Ok(PipelineSummary {
        nodes: doc.nodes.len(),
        distance_entries,
        published_to: None,
    })
}

fn assemble(config: &PipelineConfig) -> Result<(NodeDocument, usize)> {
    let store = ColumnStore::load(&config.source_path)?;
    debug!(rows = store.len(), path = %config.source_path.display(), "columns loaded");

    let BuiltNodes { mut nodes, id_array } = build_nodes(&store)?;
    debug!(nodes = nodes.len(), "nodes built");

    let distance_entries = match &config.matrix_path {
        Some(matrix_path) => {
            let merged = apply_distances(matrix_path, &mut nodes, &id_array)?;
            debug!(merged, path = %matrix_path.display(), "distances merged");
            merged
        }
        None => {
            debug!("matrix pass skipped");
            0
        }
    };

    Ok((NodeDocument { nodes }, distance_entries))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    const HEADER: &str = "index,publishedAt,label_kmedoids,text,authorName,distance_kmedoids";

    fn two_row_fixture(dir: &std::path::Path) -> PipelineConfig {
        let source = dir.join("data.csv");
        fs::write(
            &source,
            format!(
                "{HEADER}\n0,2020,1,alpha beta gamma delta,X,0.1\n1,2021,2,one two,Y,0.2\n"
            ),
        )
        .unwrap();
        let matrix = dir.join("cosine_distances.csv");
        fs::write(&matrix, "0,0.5\n0.5,0\n").unwrap();

        PipelineConfig {
            source_path: source,
            matrix_path: Some(matrix),
            publish_path: dir.join("data.json"),
        }
    }

    #[test]
    fn test_run_publishes_and_summarizes() {
        let dir = tempdir().unwrap();
        let config = two_row_fixture(dir.path());

        let summary = run(&config).unwrap();
        assert_eq!(summary.nodes, 2);
        assert_eq!(summary.distance_entries, 2);
        assert_eq!(summary.published_to.as_deref(), Some(config.publish_path.as_path()));
        assert!(config.publish_path.exists());
    }

    #[test]
    fn test_check_publishes_nothing() {
        let dir = tempdir().unwrap();
        let config = two_row_fixture(dir.path());

        let summary = check(&config).unwrap();
        assert_eq!(summary.nodes, 2);
        assert!(summary.published_to.is_none());
        assert!(!config.publish_path.exists());
    }

    #[test]
    fn test_matrixless_run_leaves_distances_empty() {
        let dir = tempdir().unwrap();
        let mut config = two_row_fixture(dir.path());
        config.matrix_path = None;

        let summary = run(&config).unwrap();
        assert_eq!(summary.distance_entries, 0);

        let doc: cg_common::NodeDocument =
            serde_json::from_str(&fs::read_to_string(&config.publish_path).unwrap()).unwrap();
        assert!(doc.nodes.iter().all(|n| n.distances.is_empty()));
    }
}
