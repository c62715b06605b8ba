//! Router assembly for the course graph HTTP API.
//!
//! [`build_router`] wires all handler functions to their routes with
//! CORS and tracing middleware layers.

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// Builds the complete axum router with all API routes.
///
/// Routes use axum 0.8 `/{param}` path syntax.
/// CORS is permissive (the web client is served from another origin).
/// TraceLayer provides request-level logging via tracing.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Courses
        .route("/api/courses", get(handlers::courses::list_courses))
        .route("/api/courses/{code}", get(handlers::courses::get_course))
        .route(
            "/api/courses/{code}/prerequisites",
            get(handlers::courses::prerequisites),
        )
        .route(
            "/api/courses/{code}/dependents",
            get(handlers::courses::dependents),
        )
        .route(
            "/api/courses/{code}/required",
            get(handlers::courses::required),
        )
        // Whole graph
        .route("/api/graph", get(handlers::graph::graph_data))
        .route("/api/graph/cycles", get(handlers::graph::cycles))
        .route(
            "/api/topological-order",
            get(handlers::graph::topological_order),
        )
        // Paths and planning
        .route(
            "/api/paths/{start}/{target}",
            get(handlers::paths::find_paths),
        )
        .route(
            "/api/specialization",
            post(handlers::plans::specialization),
        )
        // Search
        .route("/api/search", get(handlers::search::search))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
