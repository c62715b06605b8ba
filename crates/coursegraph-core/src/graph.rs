//! CourseGraph: the immutable prerequisite graph built from a course catalog.
//!
//! [`CourseGraph::build`] is the only constructor. It runs in two passes:
//!
//! 1. Register every catalog course as a node with empty forward and reverse
//!    adjacency entries, in catalog order.
//! 2. Extract each course's prerequisite codes and create an edge for every
//!    code that names a known course. Codes that do not resolve are recorded
//!    on the node as unresolved and otherwise ignored.
//!
//! After construction nothing is mutated, so a graph can be shared behind an
//! `Arc` and queried from any number of threads without locking. The query
//! operations live in sibling modules as further `impl CourseGraph` blocks.

use indexmap::IndexMap;

use crate::course::{CourseNode, CourseRecord};
use crate::edge::PrerequisiteEdge;
use crate::error::CoreError;
use crate::extract::extract_course_codes;
use crate::id::CourseCode;

/// Directed prerequisite graph over a fixed course catalog.
///
/// Both adjacency maps hold an entry for every course, and every entry lists
/// neighbors in the order their edges were created (catalog order of the
/// dependent, then order of mention in its prerequisite text).
#[derive(Debug, Clone, Default)]
pub struct CourseGraph {
    /// Course nodes keyed by code, in catalog order.
    nodes: IndexMap<CourseCode, CourseNode>,
    /// All edges in creation order.
    edges: Vec<PrerequisiteEdge>,
    /// Forward adjacency: course -> courses that require it.
    dependents: IndexMap<CourseCode, Vec<CourseCode>>,
    /// Reverse adjacency: course -> courses it requires.
    prerequisites: IndexMap<CourseCode, Vec<CourseCode>>,
}

impl CourseGraph {
    /// Builds the graph from raw catalog records.
    ///
    /// If two records share a code, the later one replaces the earlier one
    /// but keeps the earlier one's catalog position.
    pub fn build(records: &[CourseRecord]) -> Self {
        let mut graph = CourseGraph::default();
        let mut sources: IndexMap<CourseCode, &CourseRecord> = IndexMap::new();

        for record in records {
            if sources.insert(record.code.clone(), record).is_some() {
                tracing::warn!(
                    code = %record.code,
                    "duplicate course code in catalog; later record wins"
                );
            }
            graph
                .nodes
                .insert(record.code.clone(), CourseNode::from_record(record));
            graph.dependents.entry(record.code.clone()).or_default();
            graph.prerequisites.entry(record.code.clone()).or_default();
        }

        let mut unresolved_total = 0;
        for (code, record) in &sources {
            let mut unresolved = Vec::new();
            for prereq in extract_course_codes(&record.prereq) {
                if graph.nodes.contains_key(&prereq) {
                    graph.add_edge(prereq, code.clone());
                } else {
                    unresolved.push(prereq);
                }
            }
            unresolved_total += unresolved.len();
            if let Some(node) = graph.nodes.get_mut(code) {
                node.unresolved_prerequisites = unresolved;
            }
        }

        for (code, node) in graph.nodes.iter_mut() {
            node.prerequisites = graph.prerequisites.get(code).cloned().unwrap_or_default();
        }

        tracing::info!(
            courses = graph.nodes.len(),
            edges = graph.edges.len(),
            unresolved = unresolved_total,
            "built course prerequisite graph"
        );
        graph
    }

    fn add_edge(&mut self, source: CourseCode, target: CourseCode) {
        if let Some(forward) = self.dependents.get_mut(&source) {
            forward.push(target.clone());
        }
        if let Some(reverse) = self.prerequisites.get_mut(&target) {
            reverse.push(source.clone());
        }
        self.edges.push(PrerequisiteEdge::new(source, target));
    }

    // -----------------------------------------------------------------------
    // Read-only accessors
    // -----------------------------------------------------------------------

    /// All course nodes, in catalog order.
    pub fn courses(&self) -> impl ExactSizeIterator<Item = &CourseNode> + '_ {
        self.nodes.values()
    }

    /// All course codes, in catalog order.
    pub fn codes(&self) -> impl ExactSizeIterator<Item = &CourseCode> + '_ {
        self.nodes.keys()
    }

    /// Looks up a single course. `None` means the code is not in the catalog.
    pub fn course(&self, code: &str) -> Option<&CourseNode> {
        self.nodes.get(code)
    }

    /// Like [`course`](Self::course), but unknown codes are an error.
    pub fn require_course(&self, code: &str) -> Result<&CourseNode, CoreError> {
        self.course(code).ok_or_else(|| CoreError::CourseNotFound {
            code: code.to_string(),
        })
    }

    pub fn contains(&self, code: &str) -> bool {
        self.nodes.contains_key(code)
    }

    /// All edges, in creation order.
    pub fn edges(&self) -> &[PrerequisiteEdge] {
        &self.edges
    }

    /// Direct prerequisites of `code`. Empty for leaves and unknown codes.
    pub fn prerequisites_of(&self, code: &str) -> &[CourseCode] {
        self.prerequisites.get(code).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Courses that list `code` as a direct prerequisite. Empty for leaves
    /// and unknown codes.
    pub fn dependents_of(&self, code: &str) -> &[CourseCode] {
        self.dependents.get(code).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn course_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Catalog position of `code`.
    pub(crate) fn position(&self, code: &str) -> Option<usize> {
        self.nodes.get_index_of(code)
    }

    /// Code at catalog position `index`.
    pub(crate) fn code_at(&self, index: usize) -> Option<&CourseCode> {
        self.nodes.get_index(index).map(|(code, _)| code)
    }

    /// The graph's own copy of `code`, borrowed for the graph's lifetime.
    pub(crate) fn canonical(&self, code: &str) -> Option<&CourseCode> {
        self.nodes.get_key_value(code).map(|(code, _)| code)
    }

    /// Resolves a sequence of codes to nodes, skipping unknown codes.
    pub fn resolve<'a, I>(&'a self, codes: I) -> Vec<&'a CourseNode>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        codes
            .into_iter()
            .filter_map(|code| self.course(code.as_ref()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{abc_catalog, codes};

    #[test]
    fn build_abc_catalog() {
        let graph = CourseGraph::build(&abc_catalog());

        assert_eq!(graph.course_count(), 3);
        assert_eq!(graph.edge_count(), 3);

        let ids: Vec<&str> = graph.edges().iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["AAA 1000-BBB 1000", "AAA 1000-CCC 1000", "BBB 1000-CCC 1000"]);
    }

    #[test]
    fn adjacency_initialized_for_every_course() {
        let records = vec![CourseRecord::new("SOLO 1000", "Alone", "3")];
        let graph = CourseGraph::build(&records);

        assert!(graph.prerequisites_of("SOLO 1000").is_empty());
        assert!(graph.dependents_of("SOLO 1000").is_empty());
        assert!(graph.dependents.contains_key("SOLO 1000"));
        assert!(graph.prerequisites.contains_key("SOLO 1000"));
    }

    #[test]
    fn forward_and_reverse_adjacency_agree() {
        let graph = CourseGraph::build(&abc_catalog());

        assert_eq!(codes(graph.dependents_of("AAA 1000")), vec!["BBB 1000", "CCC 1000"]);
        assert_eq!(codes(graph.dependents_of("BBB 1000")), vec!["CCC 1000"]);
        assert_eq!(codes(graph.prerequisites_of("CCC 1000")), vec!["AAA 1000", "BBB 1000"]);
        assert!(graph.prerequisites_of("AAA 1000").is_empty());
    }

    #[test]
    fn unknown_prerequisites_are_dropped_from_edges_and_node() {
        let records = vec![
            CourseRecord::new("COMP 1130", "Intro", "3"),
            CourseRecord::new("COMP 2130", "Data Structures", "3")
                .with_prereq("COMP 1130 and MATH 9999"),
        ];
        let graph = CourseGraph::build(&records);

        let node = graph.course("COMP 2130").unwrap();
        assert_eq!(codes(&node.prerequisites), vec!["COMP 1130"]);
        assert_eq!(codes(&node.unresolved_prerequisites), vec!["MATH 9999"]);
        assert_eq!(graph.edge_count(), 1);
        assert!(!graph.contains("MATH 9999"));
    }

    #[test]
    fn node_prerequisites_match_reverse_adjacency() {
        let graph = CourseGraph::build(&abc_catalog());
        for node in graph.courses() {
            assert_eq!(node.prerequisites.as_slice(), graph.prerequisites_of(node.code.as_str()));
        }
    }

    #[test]
    fn prerequisite_declared_after_dependent_still_resolves() {
        let records = vec![
            CourseRecord::new("COMP 2130", "Data Structures", "3").with_prereq("COMP 1130"),
            CourseRecord::new("COMP 1130", "Intro", "3"),
        ];
        let graph = CourseGraph::build(&records);
        assert_eq!(codes(graph.dependents_of("COMP 1130")), vec!["COMP 2130"]);
    }

    #[test]
    fn duplicate_codes_keep_first_position_and_last_record() {
        let records = vec![
            CourseRecord::new("COMP 1130", "Old title", "3"),
            CourseRecord::new("COMP 2130", "Data Structures", "3").with_prereq("COMP 1130"),
            CourseRecord::new("COMP 1130", "New title", "4"),
        ];
        let graph = CourseGraph::build(&records);

        assert_eq!(graph.course_count(), 2);
        assert_eq!(graph.edge_count(), 1);
        let order: Vec<&str> = graph.codes().map(CourseCode::as_str).collect();
        assert_eq!(order, vec!["COMP 1130", "COMP 2130"]);
        assert_eq!(graph.course("COMP 1130").unwrap().title, "New title");
    }

    #[test]
    fn lookup_unknown_course() {
        let graph = CourseGraph::build(&abc_catalog());

        assert!(graph.course("ZZZ 0000").is_none());
        assert!(matches!(
            graph.require_course("ZZZ 0000"),
            Err(CoreError::CourseNotFound { .. })
        ));
        assert!(graph.prerequisites_of("ZZZ 0000").is_empty());
        assert!(graph.dependents_of("ZZZ 0000").is_empty());
    }

    #[test]
    fn resolve_skips_unknown_codes() {
        let graph = CourseGraph::build(&abc_catalog());
        let nodes = graph.resolve(["CCC 1000", "ZZZ 0000", "AAA 1000"]);
        let titles: Vec<&str> = nodes.iter().map(|n| n.title.as_str()).collect();
        assert_eq!(titles, vec!["Course C", "Course A"]);
    }

    #[test]
    fn empty_catalog() {
        let graph = CourseGraph::build(&[]);
        assert_eq!(graph.course_count(), 0);
        assert!(graph.edges().is_empty());
    }
}
