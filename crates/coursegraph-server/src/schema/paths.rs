//! Request/response types for path enumeration.

use coursegraph_core::CourseCode;
use serde::{Deserialize, Serialize};

/// Query string for `GET /api/paths/{start}/{target}`.
///
/// `maxDepth` is kept as raw text: a missing, non-numeric, or zero value
/// falls back to the default depth instead of rejecting the request.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PathsQuery {
    #[serde(default)]
    pub max_depth: Option<String>,
}

impl PathsQuery {
    /// The requested depth, or `default` when absent or unusable.
    pub fn depth_or(&self, default: usize) -> usize {
        self.max_depth
            .as_deref()
            .and_then(|raw| raw.trim().parse::<usize>().ok())
            .filter(|depth| *depth > 0)
            .unwrap_or(default)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct PathsResponse {
    pub paths: Vec<Vec<CourseCode>>,
    pub count: usize,
}
