//! Shared fixtures for unit tests.

use crate::course::CourseRecord;
use crate::id::CourseCode;

/// A -> B, A -> C, B -> C.
pub(crate) fn abc_catalog() -> Vec<CourseRecord> {
    vec![
        CourseRecord::new("AAA 1000", "Course A", "3 credits").with_prereq("None"),
        CourseRecord::new("BBB 1000", "Course B", "4").with_prereq("AAA 1000"),
        CourseRecord::new("CCC 1000", "Course C", "(3,1,0)")
            .with_prereq("AAA 1000 and BBB 1000"),
    ]
}

pub(crate) fn codes(list: &[CourseCode]) -> Vec<&str> {
    list.iter().map(CourseCode::as_str).collect()
}
