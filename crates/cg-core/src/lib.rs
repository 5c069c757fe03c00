//! Comment graph pipeline.
//!
//! Converts a CSV of labeled comments plus an optional pairwise
//! cosine-distance matrix into the `{"nodes": [...]}` JSON document consumed
//! by the front-end force graph:
//!
//! 1. [`columns`] — load the allow-listed columns into an explicit store
//! 2. [`build`] — zip rows into typed [`cg_common::Node`]s
//! 3. [`matrix`] — merge pairwise distances in place, excluding the diagonal
//! 4. [`publish`] — serialize and move atomically to the publish path
//!
//! Any failure aborts the run before the publish rename; no partial output
//! is ever visible at the destination.

pub mod build;
pub mod columns;
pub mod config;
pub mod exit_codes;
pub mod matrix;
pub mod pipeline;
pub mod publish;

pub use config::PipelineConfig;
pub use exit_codes::ExitCode;
pub use pipeline::{check, run, PipelineSummary};
