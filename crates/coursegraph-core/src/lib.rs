//! Course prerequisite graph engine.
//!
//! Builds an immutable directed graph from a course catalog whose
//! prerequisites are free text, then answers read-only queries over it:
//! simple paths between courses, topological order, transitive prerequisite
//! closure, cycle groups, search, and semester-bucketed specialization plans.

pub mod closure;
pub mod course;
pub mod cycles;
pub mod edge;
pub mod error;
pub mod extract;
pub mod graph;
pub mod id;
pub mod paths;
pub mod plan;
pub mod search;
pub mod topo;

#[cfg(test)]
mod test_support;

// Re-export commonly used types
pub use course::{load_catalog, parse_credits, CourseNode, CourseRecord};
pub use edge::{EdgeKind, PrerequisiteEdge};
pub use error::CoreError;
pub use extract::extract_course_codes;
pub use graph::CourseGraph;
pub use id::{CourseCode, EdgeId};
pub use paths::DEFAULT_MAX_DEPTH;
pub use plan::{PlanOptions, PlanResult, DEFAULT_COURSES_PER_SEMESTER, DEFAULT_MAX_SEMESTERS};
pub use topo::TopologicalSort;
