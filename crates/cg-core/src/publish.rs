//! Serializer/Publisher: write the document atomically to the publish path.

use cg_common::{Error, NodeDocument, Result};
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;
use tracing::debug;

/// Serialize `doc` as compact UTF-8 JSON and move it into place at `dest`.
///
/// The bytes go to a temporary sibling of `dest` first and are renamed into
/// place only after a successful flush, so the publish path never holds a
/// partial document and a failed run leaves any previously published file
/// untouched. The destination directory must already exist.
pub fn publish(doc: &NodeDocument, dest: &Path) -> Result<()> {
    let json = serde_json::to_vec(doc)?;

    // Write atomically
    let tmp_path = dest.with_extension("json.tmp");
    {
        let mut file = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(&tmp_path)
            .map_err(|e| Error::io(&tmp_path, e))?;
        file.write_all(&json).map_err(|e| Error::io(&tmp_path, e))?;
        file.flush().map_err(|e| Error::io(&tmp_path, e))?;
    }

    fs::rename(&tmp_path, dest).map_err(|e| Error::io(dest, e))?;

    debug!(path = %dest.display(), bytes = json.len(), "document published");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use cg_common::Node;
    use std::collections::BTreeMap;
    use tempfile::tempdir;

    fn sample_doc() -> NodeDocument {
        NodeDocument {
            nodes: vec![Node {
                id: 0,
                node_label: "hello world...".into(),
                text: "hello world".into(),
                group: 1,
                author: "X".into(),
                published_at: "2020".into(),
                distance_from_cluster_medoid: 0.1,
                distances: BTreeMap::from([(1, 0.5)]),
            }],
        }
    }

    #[test]
    fn test_publish_writes_parseable_document() {
        let dir = tempdir().unwrap();
        let dest = dir.path().join("data.json");

        publish(&sample_doc(), &dest).unwrap();

        let contents = fs::read_to_string(&dest).unwrap();
        let value: serde_json::Value = serde_json::from_str(&contents).unwrap();
        assert_eq!(value["nodes"][0]["nodeLabel"], "hello world...");
        assert_eq!(value["nodes"][0]["distances"]["1"], 0.5);
        // Single top-level key.
        assert_eq!(value.as_object().unwrap().len(), 1);
    }

    #[test]
    fn test_publish_leaves_no_temp_file() {
        let dir = tempdir().unwrap();
        let dest = dir.path().join("data.json");

        publish(&sample_doc(), &dest).unwrap();

        assert!(!dir.path().join("data.json.tmp").exists());
    }

    #[test]
    fn test_publish_replaces_existing_file() {
        let dir = tempdir().unwrap();
        let dest = dir.path().join("data.json");
        fs::write(&dest, "stale").unwrap();

        publish(&sample_doc(), &dest).unwrap();

        let contents = fs::read_to_string(&dest).unwrap();
        assert!(contents.starts_with("{\"nodes\""));
    }

    #[test]
    fn test_missing_destination_directory_is_fatal() {
        let dir = tempdir().unwrap();
        let dest = dir.path().join("no_such_dir").join("data.json");

        let err = publish(&sample_doc(), &dest).unwrap_err();
        assert!(matches!(err, Error::Io { .. }));
        assert!(!dest.exists());
    }
}
