//! Response types for course and whole-graph queries.

use coursegraph_core::{CourseCode, CourseNode, PrerequisiteEdge};
use serde::Serialize;

/// Every node and edge in the graph.
#[derive(Debug, Clone, Serialize)]
pub struct GraphResponse {
    pub nodes: Vec<CourseNode>,
    pub edges: Vec<PrerequisiteEdge>,
}

/// Prerequisite cycles found in the catalog.
#[derive(Debug, Clone, Serialize)]
pub struct CyclesResponse {
    pub cycles: Vec<Vec<CourseCode>>,
    pub count: usize,
}
