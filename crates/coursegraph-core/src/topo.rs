//! Topological ordering of the catalog (Kahn's algorithm).
//!
//! Courses caught in a prerequisite cycle never reach in-degree zero, so they
//! and everything downstream of them are left out of the order. Those courses
//! are reported as `blocked` instead of being dropped silently.

use std::collections::VecDeque;

use indexmap::IndexMap;
use serde::Serialize;

use crate::graph::CourseGraph;
use crate::id::CourseCode;

/// Result of a topological sort.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TopologicalSort {
    /// Courses in an order where every prerequisite precedes its dependents.
    pub order: Vec<CourseCode>,
    /// Courses omitted from `order` because they sit on or behind a cycle,
    /// in catalog order. Empty for an acyclic catalog.
    pub blocked: Vec<CourseCode>,
}

impl TopologicalSort {
    pub fn is_complete(&self) -> bool {
        self.blocked.is_empty()
    }
}

impl CourseGraph {
    /// Sorts all courses so that every edge's source precedes its target.
    ///
    /// In-degree is the number of direct prerequisites. Courses with none
    /// seed a FIFO queue in catalog order; each dequeued course decrements
    /// its dependents and enqueues those that reach zero.
    pub fn topological_sort(&self) -> TopologicalSort {
        let mut in_degree: IndexMap<&CourseCode, usize> = self
            .codes()
            .map(|code| (code, self.prerequisites_of(code.as_str()).len()))
            .collect();

        let mut queue: VecDeque<&CourseCode> = in_degree
            .iter()
            .filter(|(_, degree)| **degree == 0)
            .map(|(code, _)| *code)
            .collect();

        let mut order = Vec::with_capacity(in_degree.len());
        while let Some(current) = queue.pop_front() {
            order.push(current.clone());
            for dependent in self.dependents_of(current.as_str()) {
                if let Some(degree) = in_degree.get_mut(dependent) {
                    *degree -= 1;
                    if *degree == 0 {
                        queue.push_back(dependent);
                    }
                }
            }
        }

        let blocked: Vec<CourseCode> = in_degree
            .into_iter()
            .filter(|(_, degree)| *degree > 0)
            .map(|(code, _)| code.clone())
            .collect();

        if !blocked.is_empty() {
            tracing::warn!(
                blocked = blocked.len(),
                "prerequisite cycle detected; topological order is partial"
            );
        }

        TopologicalSort { order, blocked }
    }

    /// Just the order from [`topological_sort`](Self::topological_sort).
    pub fn topological_order(&self) -> Vec<CourseCode> {
        self.topological_sort().order
    }
}
