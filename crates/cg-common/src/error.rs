//! Error types for the comment graph pipeline.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for comment graph operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Unified error type for the comment graph pipeline.
///
/// Every variant is fatal: the pipeline never retries and never publishes
/// partial output. Variants carry enough context (path, row, column) for the
/// operator to locate the offending input without re-running.
#[derive(Error, Debug)]
pub enum Error {
    // Input shape errors (20-29)
    #[error("column '{column}' missing from header of {}", .path.display())]
    MissingColumn { column: &'static str, path: PathBuf },

    #[error("column '{column}' has {actual} rows, expected {expected}")]
    ColumnLength {
        column: &'static str,
        actual: usize,
        expected: usize,
    },

    #[error("distance matrix has {actual} rows, expected {expected} (one per node)")]
    MatrixHeight { actual: usize, expected: usize },

    #[error("distance matrix row {row} has {actual} cells, expected {expected}")]
    MatrixWidth {
        row: usize,
        actual: usize,
        expected: usize,
    },

    // Cell format errors (30-39)
    #[error("row {row}, column '{column}': cannot parse '{value}' as {expected}")]
    Format {
        row: usize,
        column: String,
        value: String,
        expected: &'static str,
    },

    // I/O errors (60-69)
    #[error("I/O error at {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("CSV error in {}: {source}", .path.display())]
    Csv {
        path: PathBuf,
        source: csv::Error,
    },

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Returns the stable error code for this error type.
    /// Used in operator-facing diagnostics.
    pub fn code(&self) -> u32 {
        match self {
            Error::MissingColumn { .. } => 20,
            Error::ColumnLength { .. } => 21,
            Error::MatrixHeight { .. } => 22,
            Error::MatrixWidth { .. } => 23,
            Error::Format { .. } => 30,
            Error::Io { .. } => 60,
            Error::Csv { .. } => 61,
            Error::Json(_) => 62,
        }
    }

    /// Attach path context to a bare I/O error.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }

    /// Attach path context to a CSV-level error.
    pub fn csv(path: impl Into<PathBuf>, source: csv::Error) -> Self {
        Error::Csv {
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_are_grouped_by_class() {
        let shape = Error::MissingColumn {
            column: "text",
            path: PathBuf::from("data.csv"),
        };
        assert!((20..30).contains(&shape.code()));

        let format = Error::Format {
            row: 3,
            column: "index".into(),
            value: "abc".into(),
            expected: "integer",
        };
        assert!((30..40).contains(&format.code()));

        let io = Error::io("data.csv", std::io::Error::other("gone"));
        assert!((60..70).contains(&io.code()));
    }

    #[test]
    fn test_display_carries_location_context() {
        let err = Error::Format {
            row: 7,
            column: "distance_kmedoids".into(),
            value: "n/a".into(),
            expected: "float",
        };
        let msg = err.to_string();
        assert!(msg.contains("row 7"));
        assert!(msg.contains("distance_kmedoids"));
        assert!(msg.contains("n/a"));
    }

    #[test]
    fn test_missing_column_names_file() {
        let err = Error::MissingColumn {
            column: "authorName",
            path: PathBuf::from("/tmp/labeled.csv"),
        };
        assert!(err.to_string().contains("authorName"));
        assert!(err.to_string().contains("labeled.csv"));
    }
}
