//! Request types for specialization planning.

use serde::Deserialize;

/// Body of `POST /api/specialization`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpecializationRequest {
    /// Target course codes. Missing and empty are both rejected.
    #[serde(default)]
    pub target_courses: Option<Vec<String>>,
    /// Semester cap; missing or zero means the default of 8.
    #[serde(default)]
    pub max_semesters: Option<usize>,
}
