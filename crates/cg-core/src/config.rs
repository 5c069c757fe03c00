//! Pipeline configuration.
//!
//! All paths are explicit parameters; the pipeline carries no implicit
//! working-directory state. Resolution (CLI flag → environment → default)
//! happens in the binary, not here.

use std::path::PathBuf;

/// Default location of the primary labeled-comment CSV.
pub const DEFAULT_SOURCE: &str = "data.csv";

/// Default location of the pairwise cosine-distance matrix CSV.
pub const DEFAULT_MATRIX: &str = "cosine_distances.csv";

/// Default publish path consumed by the front-end asset pipeline.
pub const DEFAULT_PUBLISH: &str = "../../frontend/public/data/data.json";

/// Resolved input and output paths for one pipeline run.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Primary CSV of labeled comments (header row required).
    pub source_path: PathBuf,
    /// Distance matrix CSV; `None` publishes nodes with empty `distances`.
    pub matrix_path: Option<PathBuf>,
    /// Destination for the published JSON document.
    pub publish_path: PathBuf,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            source_path: PathBuf::from(DEFAULT_SOURCE),
            matrix_path: Some(PathBuf::from(DEFAULT_MATRIX)),
            publish_path: PathBuf::from(DEFAULT_PUBLISH),
        }
    }
}
