//! Prerequisite edges.
//!
//! An edge points from a prerequisite to the course that requires it, so
//! following edges forward walks "what does this course unlock".

use serde::{Deserialize, Serialize};

use crate::id::{CourseCode, EdgeId};

/// Relationship carried by an edge. The catalog only produces prerequisite
/// relationships today.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EdgeKind {
    #[default]
    Prerequisite,
}

/// A directed `source -> target` edge: `source` must be completed before
/// `target`. Both endpoints are always known catalog courses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrerequisiteEdge {
    pub id: EdgeId,
    pub source: CourseCode,
    pub target: CourseCode,
    #[serde(rename = "type")]
    pub kind: EdgeKind,
}

impl PrerequisiteEdge {
    pub fn new(source: CourseCode, target: CourseCode) -> Self {
        PrerequisiteEdge {
            id: EdgeId::between(&source, &target),
            source,
            target,
            kind: EdgeKind::Prerequisite,
        }
    }
}
