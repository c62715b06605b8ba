//! Case-insensitive search over course codes and titles.

use crate::course::CourseNode;
use crate::graph::CourseGraph;

impl CourseGraph {
    /// Courses whose code or title contains `query`, ignoring case, in
    /// catalog order. An empty query matches every course.
    pub fn search(&self, query: &str) -> Vec<&CourseNode> {
        let needle = query.to_lowercase();
        self.courses()
            .filter(|course| {
                course.code.as_str().to_lowercase().contains(&needle)
                    || course.title.to_lowercase().contains(&needle)
            })
            .collect()
    }
}
