//! Course records (raw catalog input) and course nodes (graph vertices).
//!
//! A [`CourseRecord`] is what the catalog file contains: free-text credits and
//! prerequisite descriptions. A [`CourseNode`] is what the graph exposes after
//! the prerequisite text has been parsed and resolved against the catalog.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::id::CourseCode;

/// One raw catalog entry, as read from the catalog JSON file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourseRecord {
    pub code: CourseCode,
    pub title: String,
    /// Free-form credit description, e.g. `"3 credits"` or `"(3,1,0)"`.
    pub credits: String,
    #[serde(default)]
    pub description: String,
    /// Free-text prerequisite description.
    #[serde(default)]
    pub prereq: String,
}

impl CourseRecord {
    pub fn new(
        code: impl Into<CourseCode>,
        title: impl Into<String>,
        credits: impl Into<String>,
    ) -> Self {
        CourseRecord {
            code: code.into(),
            title: title.into(),
            credits: credits.into(),
            description: String::new(),
            prereq: String::new(),
        }
    }

    pub fn with_prereq(mut self, prereq: impl Into<String>) -> Self {
        self.prereq = prereq.into();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}

/// A course vertex in the prerequisite graph.
///
/// `prerequisites` only ever holds codes that resolved to catalog courses, so
/// it always equals the course's reverse adjacency. Codes mentioned in the
/// prerequisite text that are not in the catalog are kept separately in
/// `unresolved_prerequisites`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseNode {
    /// Same value as `code`; kept for clients that key nodes by `id`.
    pub id: CourseCode,
    pub code: CourseCode,
    pub title: String,
    pub credits: String,
    pub description: String,
    pub prerequisites: Vec<CourseCode>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub unresolved_prerequisites: Vec<CourseCode>,
}

impl CourseNode {
    /// Numeric credit value embedded in the credit string.
    pub fn credit_value(&self) -> u64 {
        parse_credits(&self.credits)
    }

    pub(crate) fn from_record(record: &CourseRecord) -> Self {
        CourseNode {
            id: record.code.clone(),
            code: record.code.clone(),
            title: record.title.clone(),
            credits: record.credits.clone(),
            description: record.description.clone(),
            prerequisites: Vec::new(),
            unresolved_prerequisites: Vec::new(),
        }
    }
}

/// Parses the first run of ASCII digits in `credits`.
///
/// Returns 0 when there are no digits or the run does not fit in a `u64`.
pub fn parse_credits(credits: &str) -> u64 {
    let digits: String = credits
        .chars()
        .skip_while(|c| !c.is_ascii_digit())
        .take_while(|c| c.is_ascii_digit())
        .collect();
    digits.parse().unwrap_or(0)
}

/// Reads a catalog file: a JSON array of [`CourseRecord`]s.
pub fn load_catalog(path: impl AsRef<Path>) -> Result<Vec<CourseRecord>, CoreError> {
    let path = path.as_ref();
    let raw = std::fs::read_to_string(path).map_err(|source| CoreError::CatalogRead {
        path: path.to_path_buf(),
        source,
    })?;
    let records: Vec<CourseRecord> =
        serde_json::from_str(&raw).map_err(|source| CoreError::CatalogParse {
            path: path.to_path_buf(),
            source,
        })?;
    tracing::debug!(path = %path.display(), records = records.len(), "loaded course catalog");
    Ok(records)
}
