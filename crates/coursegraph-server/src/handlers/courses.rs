//! Course lookup handlers.

use axum::extract::{Path, State};
use axum::Json;
use coursegraph_core::CourseNode;

use crate::error::ApiError;
use crate::handlers::normalize_code;
use crate::state::AppState;

/// Returns every course in catalog order.
///
/// `GET /api/courses`
pub async fn list_courses(State(state): State<AppState>) -> Json<Vec<CourseNode>> {
    Json(state.graph.courses().cloned().collect())
}

/// Returns a single course.
///
/// `GET /api/courses/{code}`
pub async fn get_course(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<Json<CourseNode>, ApiError> {
    let code = normalize_code(&code);
    let course = state.graph.require_course(&code)?;
    Ok(Json(course.clone()))
}

/// Returns the direct prerequisites of a course. Unknown codes have none.
///
/// `GET /api/courses/{code}/prerequisites`
pub async fn prerequisites(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Json<Vec<CourseNode>> {
    let code = normalize_code(&code);
    let graph = &state.graph;
    Json(
        graph
            .resolve(graph.prerequisites_of(&code))
            .into_iter()
            .cloned()
            .collect(),
    )
}

/// Returns the courses that directly require a course. Unknown codes have none.
///
/// `GET /api/courses/{code}/dependents`
pub async fn dependents(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Json<Vec<CourseNode>> {
    let code = normalize_code(&code);
    let graph = &state.graph;
    Json(
        graph
            .resolve(graph.dependents_of(&code))
            .into_iter()
            .cloned()
            .collect(),
    )
}

/// Returns a course and all of its transitive prerequisites, prerequisites
/// first.
///
/// `GET /api/courses/{code}/required`
pub async fn required(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<Json<Vec<CourseNode>>, ApiError> {
    let code = normalize_code(&code);
    let graph = &state.graph;
    graph.require_course(&code)?;
    Ok(Json(
        graph
            .resolve(graph.required_in_order(&code))
            .into_iter()
            .cloned()
            .collect(),
    ))
}
