//! HTTP handler modules for the course graph API.
//!
//! Handlers are thin: they normalize path/query input, call the read API on
//! the shared [`CourseGraph`](coursegraph_core::CourseGraph), and return JSON.
//! No graph logic lives here.

pub mod courses;
pub mod graph;
pub mod paths;
pub mod plans;
pub mod search;

/// Course codes in URLs are matched case-insensitively.
pub(crate) fn normalize_code(code: &str) -> String {
    code.trim().to_uppercase()
}
