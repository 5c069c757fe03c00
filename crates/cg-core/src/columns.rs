//! Record Loader: primary CSV into an explicit column store.
//!
//! The loader selects a fixed allow-list of columns from the header and
//! accumulates their raw string values in row order, one sequence per
//! column. Columns outside the allow-list are ignored. An allow-listed
//! column missing from the header is fatal at load time, not downstream.

use cg_common::{Error, Result};
use std::path::Path;

/// Allow-listed column names in the primary CSV.
pub const COL_INDEX: &str = "index";
pub const COL_PUBLISHED_AT: &str = "publishedAt";
pub const COL_LABEL_KMEDOIDS: &str = "label_kmedoids";
pub const COL_TEXT: &str = "text";
pub const COL_AUTHOR_NAME: &str = "authorName";
pub const COL_DISTANCE_KMEDOIDS: &str = "distance_kmedoids";

/// Raw string values of the allow-listed columns, index-aligned by source
/// row: position k in every field belongs to the same CSV row.
///
/// One struct field per column — no dynamic key lookup.
#[derive(Debug, Default, Clone)]
pub struct ColumnStore {
    pub index: Vec<String>,
    pub published_at: Vec<String>,
    pub label_kmedoids: Vec<String>,
    pub text: Vec<String>,
    pub author_name: Vec<String>,
    pub distance_kmedoids: Vec<String>,
}

impl ColumnStore {
    /// Load the allow-listed columns from a CSV file with a header row.
    pub fn load(path: &Path) -> Result<Self> {
        let mut reader = csv::ReaderBuilder::new()
            .from_path(path)
            .map_err(|e| Error::csv(path, e))?;

        let headers = reader.headers().map_err(|e| Error::csv(path, e))?.clone();
        let position = |column: &'static str| -> Result<usize> {
            headers
                .iter()
                .position(|h| h == column)
                .ok_or_else(|| Error::MissingColumn {
                    column,
                    path: path.to_path_buf(),
                })
        };

        let idx_index = position(COL_INDEX)?;
        let idx_published_at = position(COL_PUBLISHED_AT)?;
        let idx_label = position(COL_LABEL_KMEDOIDS)?;
        let idx_text = position(COL_TEXT)?;
        let idx_author = position(COL_AUTHOR_NAME)?;
        let idx_distance = position(COL_DISTANCE_KMEDOIDS)?;

        let mut store = ColumnStore::default();
        for record in reader.records() {
            let record = record.map_err(|e| Error::csv(path, e))?;
            // The reader rejects rows whose width differs from the header,
            // so the resolved positions are always in bounds.
            let cell = |idx: usize| record.get(idx).unwrap_or("").to_string();
            store.index.push(cell(idx_index));
            store.published_at.push(cell(idx_published_at));
            store.label_kmedoids.push(cell(idx_label));
            store.text.push(cell(idx_text));
            store.author_name.push(cell(idx_author));
            store.distance_kmedoids.push(cell(idx_distance));
        }

        store.validate()?;
        Ok(store)
    }

    /// Number of data rows loaded.
    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Check that every column sequence has the same length.
    ///
    /// Holds by construction after [`ColumnStore::load`]; kept explicit so a
    /// store assembled any other way fails fast instead of silently zipping
    /// to the shortest column.
    pub fn validate(&self) -> Result<()> {
        let expected = self.index.len();
        let lengths: [(&'static str, usize); 5] = [
            (COL_PUBLISHED_AT, self.published_at.len()),
            (COL_LABEL_KMEDOIDS, self.label_kmedoids.len()),
            (COL_TEXT, self.text.len()),
            (COL_AUTHOR_NAME, self.author_name.len()),
            (COL_DISTANCE_KMEDOIDS, self.distance_kmedoids.len()),
        ];
        for (column, actual) in lengths {
            if actual != expected {
                return Err(Error::ColumnLength {
                    column,
                    actual,
                    expected,
                });
            }
        }
        Ok(())
    }
}
