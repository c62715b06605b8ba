//! Transitive prerequisite closure.

use indexmap::IndexSet;

use crate::graph::CourseGraph;
use crate::id::CourseCode;

impl CourseGraph {
    /// Returns `target` together with every direct and indirect prerequisite,
    /// in depth-first preorder.
    ///
    /// Walks reverse adjacency with an explicit stack. The visited set is
    /// global to the walk, so shared prerequisites (diamonds) and cycles are
    /// expanded once. Unknown `target` yields an empty set.
    pub fn required_courses(&self, target: &str) -> IndexSet<&CourseCode> {
        let mut visited: IndexSet<&CourseCode> = IndexSet::new();
        let Some(target) = self.canonical(target) else {
            return visited;
        };

        let mut stack = vec![target];
        while let Some(code) = stack.pop() {
            if !visited.insert(code) {
                continue;
            }
            // Reversed so the first-listed prerequisite is expanded first.
            stack.extend(
                self.prerequisites_of(code.as_str())
                    .iter()
                    .rev()
                    .filter(|prereq| !visited.contains(*prereq)),
            );
        }

        visited
    }

    /// [`required_courses`](Self::required_courses) arranged so that every
    /// prerequisite precedes its dependents. Courses that sit on a cycle
    /// cannot be ordered and follow at the end in closure order.
    pub fn required_in_order(&self, target: &str) -> Vec<CourseCode> {
        let required = self.required_courses(target);
        if required.is_empty() {
            return Vec::new();
        }

        let mut ordered: IndexSet<CourseCode> = self
            .topological_order()
            .into_iter()
            .filter(|code| required.contains(code))
            .collect();
        ordered.extend(required.into_iter().cloned());
        ordered.into_iter().collect()
    }
}
