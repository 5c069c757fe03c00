//! Output document schema versioning.

use crate::node::NodeDocument;
use schemars::schema::RootSchema;
use schemars::schema_for;

/// Current schema version for the published JSON document.
///
/// Follows semver: MAJOR.MINOR.PATCH
/// - MAJOR: Breaking changes (field removals, type changes)
/// - MINOR: Additive changes (new optional fields)
/// - PATCH: Bug fixes, documentation
pub const SCHEMA_VERSION: &str = "1.0.0";

/// JSON Schema for the published document, for front-end consumers.
///
/// Carries [`SCHEMA_VERSION`] as a top-level `version` member so consumers
/// can pin the contract they were generated against.
pub fn document_schema() -> RootSchema {
    let mut schema = schema_for!(NodeDocument);
    schema
        .schema
        .extensions
        .insert("version".to_owned(), serde_json::json!(SCHEMA_VERSION));
    schema
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_describes_nodes_array() {
        let schema = document_schema();
        let json = serde_json::to_value(&schema).unwrap();
        assert!(json["properties"]["nodes"].is_object());
        let required = json["required"].as_array().unwrap();
        assert!(required.iter().any(|v| v == "nodes"));
    }

    #[test]
    fn test_schema_carries_contract_version() {
        let json = serde_json::to_value(&document_schema()).unwrap();
        assert_eq!(json["version"], SCHEMA_VERSION);
    }

    #[test]
    fn test_schema_uses_wire_field_names() {
        let json = serde_json::to_string(&document_schema()).unwrap();
        for key in ["nodeLabel", "publishedAt", "distanceFromClusterMedoid"] {
            assert!(json.contains(key), "schema missing wire field {key}");
        }
    }
}
