//! Path enumeration handler.

use axum::extract::{Path, Query, State};
use axum::Json;
use coursegraph_core::DEFAULT_MAX_DEPTH;

use crate::handlers::normalize_code;
use crate::schema::paths::{PathsQuery, PathsResponse};
use crate::state::AppState;

/// Enumerates simple prerequisite paths from `start` to `target`.
///
/// The requested depth is clamped to the configured ceiling before the
/// search starts.
///
/// `GET /api/paths/{start}/{target}?maxDepth=N`
pub async fn find_paths(
    State(state): State<AppState>,
    Path((start, target)): Path<(String, String)>,
    Query(params): Query<PathsQuery>,
) -> Json<PathsResponse> {
    let start = normalize_code(&start);
    let target = normalize_code(&target);
    let max_depth = params
        .depth_or(DEFAULT_MAX_DEPTH)
        .min(state.limits.max_path_depth);

    let paths = state.graph.find_all_paths(&start, &target, max_depth);
    Json(PathsResponse {
        count: paths.len(),
        paths,
    })
}
