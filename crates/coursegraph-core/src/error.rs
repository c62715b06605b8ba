//! Core error types for coursegraph-core.
//!
//! Graph algorithms themselves are total; errors only arise while loading a
//! catalog, on single-course lookups, and on invalid planner input.

use std::path::PathBuf;

use thiserror::Error;

/// Errors produced by the coursegraph-core crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// The catalog file could not be read.
    #[error("failed to read catalog '{path}': {source}", path = path.display())]
    CatalogRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The catalog file is not a valid JSON array of course records.
    #[error("failed to parse catalog '{path}': {source}", path = path.display())]
    CatalogParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// A course code was not found in the graph.
    #[error("course not found: '{code}'")]
    CourseNotFound { code: String },

    /// The planner was called without any target courses.
    #[error("at least one target course is required")]
    EmptyTargets,
}
