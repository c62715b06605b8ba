//! Prerequisite cycle detection.
//!
//! A well-formed catalog is acyclic. When it is not, the topological sort
//! can only say which courses it could not place; this module names the
//! actual cycles using Tarjan's strongly connected components.

use petgraph::algo::tarjan_scc;
use petgraph::graph::{DiGraph, NodeIndex};

use crate::graph::CourseGraph;
use crate::id::CourseCode;

impl CourseGraph {
    /// Groups of courses that require each other, directly or indirectly.
    ///
    /// A group is a strongly connected component with more than one course,
    /// or a single course that lists itself as a prerequisite. Courses within
    /// a group are in catalog order, and groups are ordered by their first
    /// course. Empty for an acyclic catalog.
    pub fn cycles(&self) -> Vec<Vec<CourseCode>> {
        let mut topology: DiGraph<(), ()> =
            DiGraph::with_capacity(self.course_count(), self.edge_count());
        // Node indices are assigned sequentially, so index == catalog position.
        for _ in self.codes() {
            topology.add_node(());
        }
        for edge in self.edges() {
            if let (Some(source), Some(target)) = (
                self.position(edge.source.as_str()),
                self.position(edge.target.as_str()),
            ) {
                topology.add_edge(NodeIndex::new(source), NodeIndex::new(target), ());
            }
        }

        let mut groups: Vec<Vec<usize>> = tarjan_scc(&topology)
            .into_iter()
            .filter(|component| match component.as_slice() {
                [single] => topology.contains_edge(*single, *single),
                members => members.len() > 1,
            })
            .map(|component| {
                let mut positions: Vec<usize> = component.iter().map(|idx| idx.index()).collect();
                positions.sort_unstable();
                positions
            })
            .collect();
        groups.sort_unstable_by_key(|positions| positions.first().copied());

        groups
            .into_iter()
            .map(|positions| {
                positions
                    .into_iter()
                    .filter_map(|position| self.code_at(position).cloned())
                    .collect()
            })
            .collect()
    }
}
