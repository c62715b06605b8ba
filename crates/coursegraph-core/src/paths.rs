//! Depth-bounded simple-path enumeration along prerequisite edges.

use indexmap::IndexSet;

use crate::graph::CourseGraph;
use crate::id::CourseCode;

/// Depth used when a caller does not supply one.
pub const DEFAULT_MAX_DEPTH: usize = 10;

impl CourseGraph {
    /// Returns every simple path from `start` to `target` that follows
    /// forward (prerequisite -> dependent) edges and has at most
    /// `max_depth + 1` courses.
    ///
    /// The search is a depth-first walk driven by an explicit frame stack.
    /// Each frame remembers which dependent of its course to try next. A
    /// dependent is skipped when it is already on the current path or would
    /// sit deeper than `max_depth`, so the bound is enforced before descending.
    /// Reaching `target` records the path and does not extend that branch.
    ///
    /// Paths come out in adjacency order. Unknown `start` or `target` yields
    /// no paths.
    pub fn find_all_paths(
        &self,
        start: &str,
        target: &str,
        max_depth: usize,
    ) -> Vec<Vec<CourseCode>> {
        let mut paths = Vec::new();
        let (Some(start), Some(target)) = (self.canonical(start), self.canonical(target)) else {
            return paths;
        };

        if start == target {
            paths.push(vec![start.clone()]);
            return paths;
        }

        let mut path: IndexSet<&CourseCode> = IndexSet::new();
        path.insert(start);
        let mut frames: Vec<usize> = vec![0];

        while let Some(cursor) = frames.last().copied() {
            let Some(&current) = path.last() else {
                break;
            };
            let Some(next) = self.dependents_of(current.as_str()).get(cursor) else {
                frames.pop();
                path.pop();
                continue;
            };
            let top = frames.len() - 1;
            frames[top] += 1;

            // `next` would sit at depth `path.len()`.
            if path.len() > max_depth || path.contains(next) {
                continue;
            }

            if next == target {
                let mut found: Vec<CourseCode> = path.iter().map(|code| (*code).clone()).collect();
                found.push(next.clone());
                paths.push(found);
                continue;
            }

            path.insert(next);
            frames.push(0);
        }

        tracing::debug!(
            %start,
            %target,
            max_depth,
            found = paths.len(),
            "enumerated prerequisite paths"
        );
        paths
    }
}
