//! Specialization planning handler.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use coursegraph_core::{PlanOptions, PlanResult, DEFAULT_MAX_SEMESTERS};

use crate::error::ApiError;
use crate::handlers::normalize_code;
use crate::schema::plans::SpecializationRequest;
use crate::state::AppState;

/// Plans a semester sequence covering all requested target courses.
///
/// Responds with a one-element array so existing clients that expect a list
/// of plans keep working. Bodies that are not valid JSON or do not match
/// [`SpecializationRequest`] are a 400 in the usual error envelope.
///
/// `POST /api/specialization`
pub async fn specialization(
    State(state): State<AppState>,
    body: Result<Json<SpecializationRequest>, JsonRejection>,
) -> Result<Json<Vec<PlanResult>>, ApiError> {
    let Json(req) = body?;
    let targets: Vec<String> = req
        .target_courses
        .unwrap_or_default()
        .iter()
        .map(|code| normalize_code(code))
        .collect();
    if targets.is_empty() {
        return Err(ApiError::BadRequest(
            "targetCourses must be a non-empty array".to_string(),
        ));
    }

    let options = PlanOptions::default()
        .with_max_semesters(
            req.max_semesters
                .filter(|n| *n > 0)
                .unwrap_or(DEFAULT_MAX_SEMESTERS),
        )
        .with_courses_per_semester(state.limits.courses_per_semester);

    let plan = state.graph.plan(targets.as_slice(), options)?;
    Ok(Json(vec![plan]))
}
