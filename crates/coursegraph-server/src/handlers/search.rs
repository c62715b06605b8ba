//! Course search handler.

use axum::extract::{Query, State};
use axum::Json;
use coursegraph_core::CourseNode;

use crate::error::ApiError;
use crate::schema::search::SearchQuery;
use crate::state::AppState;

/// Case-insensitive substring search over course codes and titles.
///
/// `GET /api/search?q=...`
pub async fn search(
    State(state): State<AppState>,
    Query(params): Query<SearchQuery>,
) -> Result<Json<Vec<CourseNode>>, ApiError> {
    let query = params.q.unwrap_or_default();
    if query.is_empty() {
        return Err(ApiError::BadRequest(
            "query parameter \"q\" is required".to_string(),
        ));
    }

    Ok(Json(state.graph.search(&query).into_iter().cloned().collect()))
}
