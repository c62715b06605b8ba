//! Application state shared by all handlers.
//!
//! The course graph never changes after startup, so it is shared through a
//! plain `Arc` with no lock. Every handler reads it concurrently.

use std::path::Path;
use std::sync::Arc;

use coursegraph_core::{load_catalog, CoreError, CourseGraph, CourseRecord};

use crate::config::QueryLimits;

/// Shared application state for the HTTP server.
#[derive(Clone)]
pub struct AppState {
    /// The immutable course graph.
    pub graph: Arc<CourseGraph>,
    /// Ceilings and defaults applied to query parameters.
    pub limits: QueryLimits,
}

impl AppState {
    /// Loads the catalog at `catalog_path` and builds the graph.
    pub fn load(catalog_path: &Path, limits: QueryLimits) -> Result<Self, CoreError> {
        let records = load_catalog(catalog_path)?;
        Ok(Self::from_records(&records, limits))
    }

    /// Builds the state from in-memory records (used by tests).
    pub fn from_records(records: &[CourseRecord], limits: QueryLimits) -> Self {
        AppState {
            graph: Arc::new(CourseGraph::build(records)),
            limits,
        }
    }
}
