//! Comment graph common types and errors.
//!
//! This crate provides foundational types shared across cg-core modules:
//! - The `Node` wire type and the published `NodeDocument`
//! - Node label derivation
//! - Common error types with stable codes
//! - Output schema versioning

pub mod error;
pub mod node;
pub mod schema;

pub use error::{Error, Result};
pub use node::{node_label, Node, NodeDocument};
pub use schema::SCHEMA_VERSION;
