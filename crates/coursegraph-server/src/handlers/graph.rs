//! Whole-graph handlers.

use axum::extract::State;
use axum::Json;
use coursegraph_core::CourseNode;

use crate::schema::courses::{CyclesResponse, GraphResponse};
use crate::state::AppState;

/// Returns all nodes and edges.
///
/// `GET /api/graph`
pub async fn graph_data(State(state): State<AppState>) -> Json<GraphResponse> {
    Json(GraphResponse {
        nodes: state.graph.courses().cloned().collect(),
        edges: state.graph.edges().to_vec(),
    })
}

/// Returns every course in a valid completion order. Courses on or behind a
/// prerequisite cycle are left out; `/api/graph/cycles` names the cycles.
///
/// `GET /api/topological-order`
pub async fn topological_order(State(state): State<AppState>) -> Json<Vec<CourseNode>> {
    let graph = &state.graph;
    Json(
        graph
            .resolve(graph.topological_order())
            .into_iter()
            .cloned()
            .collect(),
    )
}

/// Returns the prerequisite cycles in the catalog.
///
/// `GET /api/graph/cycles`
pub async fn cycles(State(state): State<AppState>) -> Json<CyclesResponse> {
    let cycles = state.graph.cycles();
    Json(CyclesResponse {
        count: cycles.len(),
        cycles,
    })
}
