//! Specialization planning: semester-bucketed sequences for target courses.
//!
//! A plan is the union of the targets' prerequisite closures, laid out in
//! topological order and cut into fixed-size semesters. It is one valid
//! sequence, not a minimal or credit-balanced one.

use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

use crate::course::CourseNode;
use crate::error::CoreError;
use crate::graph::CourseGraph;
use crate::id::CourseCode;

pub const DEFAULT_MAX_SEMESTERS: usize = 8;
pub const DEFAULT_COURSES_PER_SEMESTER: usize = 4;

/// Knobs for [`CourseGraph::plan`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanOptions {
    /// Hard cap on the number of semesters returned.
    pub max_semesters: usize,
    /// Maximum courses per semester. Values below 1 are treated as 1.
    pub courses_per_semester: usize,
}

impl Default for PlanOptions {
    fn default() -> Self {
        PlanOptions {
            max_semesters: DEFAULT_MAX_SEMESTERS,
            courses_per_semester: DEFAULT_COURSES_PER_SEMESTER,
        }
    }
}

impl PlanOptions {
    pub fn with_max_semesters(mut self, max_semesters: usize) -> Self {
        self.max_semesters = max_semesters;
        self
    }

    pub fn with_courses_per_semester(mut self, courses_per_semester: usize) -> Self {
        self.courses_per_semester = courses_per_semester;
        self
    }
}

/// One plan covering all requested targets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanResult {
    /// Required courses in topological order.
    pub path: Vec<CourseCode>,
    /// Sum of the numeric credit values of every required course.
    pub total_credits: u64,
    /// `path` cut into semesters, truncated to the semester cap.
    pub semesters: Vec<Vec<CourseCode>>,
    /// Required courses that did not make it into `semesters`: those past the
    /// semester cap, then those left out of `path` by a prerequisite cycle.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub unscheduled: Vec<CourseCode>,
    /// Requested targets that are not in the catalog.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub unknown_targets: Vec<CourseCode>,
}

impl CourseGraph {
    /// Plans a semester sequence that reaches every course in `targets`.
    ///
    /// Fails only when `targets` is empty. Unknown targets contribute
    /// nothing to the plan and are listed in `unknown_targets`.
    pub fn plan<S: AsRef<str>>(
        &self,
        targets: &[S],
        options: PlanOptions,
    ) -> Result<PlanResult, CoreError> {
        if targets.is_empty() {
            return Err(CoreError::EmptyTargets);
        }

        let mut required: IndexSet<&CourseCode> = IndexSet::new();
        let mut unknown_targets = Vec::new();
        for target in targets {
            let target = target.as_ref();
            if self.contains(target) {
                required.extend(self.required_courses(target));
            } else {
                unknown_targets.push(CourseCode::from(target));
            }
        }

        let path: Vec<CourseCode> = self
            .topological_order()
            .into_iter()
            .filter(|code| required.contains(code))
            .collect();

        let per_semester = options.courses_per_semester.max(1);
        let semesters: Vec<Vec<CourseCode>> = path
            .chunks(per_semester)
            .take(options.max_semesters)
            .map(<[CourseCode]>::to_vec)
            .collect();

        let scheduled: usize = semesters.iter().map(Vec::len).sum();
        let ordered: IndexSet<&CourseCode> = path.iter().collect();
        let mut unscheduled: Vec<CourseCode> = path[scheduled..].to_vec();
        unscheduled.extend(
            required
                .iter()
                .filter(|code| !ordered.contains(**code))
                .map(|code| (*code).clone()),
        );

        let total_credits: u64 = required
            .iter()
            .filter_map(|code| self.course(code.as_str()))
            .map(CourseNode::credit_value)
            .fold(0, u64::saturating_add);

        tracing::debug!(
            targets = targets.len(),
            required = required.len(),
            semesters = semesters.len(),
            unscheduled = unscheduled.len(),
            total_credits,
            "planned specialization"
        );

        Ok(PlanResult {
            path,
            total_credits,
            semesters,
            unscheduled,
            unknown_targets,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::course::CourseRecord;
    use crate::test_support::{abc_catalog, codes};

    fn chain(len: usize) -> Vec<CourseRecord> {
        (0..len)
            .map(|i| {
                let record =
                    CourseRecord::new(format!("SEQ {}", 1000 + i), format!("Step {}", i), "3");
                if i == 0 {
                    record
                } else {
                    record.with_prereq(format!("SEQ {}", 1000 + i - 1))
                }
            })
            .collect()
    }

    #[test]
    fn abc_plan_for_single_target() {
        let graph = CourseGraph::build(&abc_catalog());
        let plan = graph.plan(&["CCC 1000"], PlanOptions::default()).unwrap();

        assert_eq!(codes(&plan.path), vec!["AAA 1000", "BBB 1000", "CCC 1000"]);
        assert_eq!(plan.semesters.len(), 1);
        assert_eq!(codes(&plan.semesters[0]), vec!["AAA 1000", "BBB 1000", "CCC 1000"]);
        // "3 credits" + "4" + "(3,1,0)"
        assert_eq!(plan.total_credits, 10);
        assert!(plan.unscheduled.is_empty());
        assert!(plan.unknown_targets.is_empty());
    }

    #[test]
    fn empty_targets_rejected() {
        let graph = CourseGraph::build(&abc_catalog());
        let targets: [&str; 0] = [];
        assert!(matches!(
            graph.plan(&targets, PlanOptions::default()),
            Err(CoreError::EmptyTargets)
        ));
    }

    #[test]
    fn closures_of_multiple_targets_are_merged() {
        let mut records = abc_catalog();
        records.push(CourseRecord::new("DDD 1000", "Course D", "2").with_prereq("AAA 1000"));
        let graph = CourseGraph::build(&records);

        let plan = graph
            .plan(&["BBB 1000", "DDD 1000"], PlanOptions::default())
            .unwrap();
        assert_eq!(codes(&plan.path), vec!["AAA 1000", "BBB 1000", "DDD 1000"]);
        assert_eq!(plan.total_credits, 3 + 4 + 2);
    }

    #[test]
    fn semesters_are_chunked() {
        let graph = CourseGraph::build(&chain(10));
        let plan = graph.plan(&["SEQ 1009"], PlanOptions::default()).unwrap();

        let sizes: Vec<usize> = plan.semesters.iter().map(Vec::len).collect();
        assert_eq!(sizes, vec![4, 4, 2]);
        assert_eq!(plan.total_credits, 30);
    }

    #[test]
    fn semester_cap_truncates_and_reports_unscheduled() {
        let graph = CourseGraph::build(&chain(10));
        let options = PlanOptions::default().with_max_semesters(2);
        let plan = graph.plan(&["SEQ 1009"], options).unwrap();

        assert_eq!(plan.semesters.len(), 2);
        assert_eq!(plan.path.len(), 10);
        assert_eq!(codes(&plan.unscheduled), vec!["SEQ 1008", "SEQ 1009"]);
        // Credits still cover the whole closure.
        assert_eq!(plan.total_credits, 30);
    }

    #[test]
    fn zero_courses_per_semester_treated_as_one() {
        let graph = CourseGraph::build(&abc_catalog());
        let options = PlanOptions::default().with_courses_per_semester(0);
        let plan = graph.plan(&["CCC 1000"], options).unwrap();
        assert_eq!(plan.semesters.len(), 3);
    }

    #[test]
    fn unknown_targets_reported() {
        let graph = CourseGraph::build(&abc_catalog());
        let plan = graph
            .plan(&["BBB 1000", "ZZZ 0000"], PlanOptions::default())
            .unwrap();
        assert_eq!(codes(&plan.path), vec!["AAA 1000", "BBB 1000"]);
        assert_eq!(codes(&plan.unknown_targets), vec!["ZZZ 0000"]);
    }

    #[test]
    fn cyclic_requirements_are_unscheduled() {
        let records = vec![
            CourseRecord::new("BASE 1000", "Base", "3"),
            CourseRecord::new("XX 1000", "X", "3").with_prereq("BASE 1000 and YY 1000"),
            CourseRecord::new("YY 1000", "Y", "3").with_prereq("XX 1000"),
        ];
        let graph = CourseGraph::build(&records);

        let plan = graph.plan(&["XX 1000"], PlanOptions::default()).unwrap();
        assert_eq!(codes(&plan.path), vec!["BASE 1000"]);
        assert_eq!(codes(&plan.unscheduled), vec!["XX 1000", "YY 1000"]);
        assert_eq!(plan.total_credits, 9);
    }

    #[test]
    fn large_credit_values_are_summed() {
        let records = vec![
            CourseRecord::new("BIG 1000", "Big", "5000000000 credits"),
            CourseRecord::new("BIG 2000", "Bigger", "3").with_prereq("BIG 1000"),
        ];
        let graph = CourseGraph::build(&records);

        let plan = graph.plan(&["BIG 2000"], PlanOptions::default()).unwrap();
        assert_eq!(plan.total_credits, 5_000_000_003);
    }

    #[test]
    fn plan_serializes_camel_case() {
        let graph = CourseGraph::build(&abc_catalog());
        let plan = graph.plan(&["AAA 1000"], PlanOptions::default()).unwrap();
        let json = serde_json::to_value(&plan).unwrap();
        assert_eq!(json["totalCredits"], 3);
        assert!(json.get("unscheduled").is_none());
        assert!(json.get("unknownTargets").is_none());
    }
}
