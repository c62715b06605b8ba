//! Identifier newtypes for graph entities.
//!
//! A [`CourseCode`] is both the course's identity and its vertex key in the
//! graph. An [`EdgeId`] is the synthetic `source-target` key of a prerequisite
//! edge. Both wrap owned strings and serialize transparently.

use std::borrow::Borrow;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Course code such as `"COMP 1130"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CourseCode(String);

impl CourseCode {
    pub fn new(code: impl Into<String>) -> Self {
        CourseCode(code.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Synthetic edge identifier, formatted as `"{source}-{target}"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EdgeId(String);

impl EdgeId {
    pub fn between(source: &CourseCode, target: &CourseCode) -> Self {
        EdgeId(format!("{}-{}", source, target))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CourseCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Display for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// Lets `IndexMap<CourseCode, _>` be queried with a plain `&str`.
impl Borrow<str> for CourseCode {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for CourseCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for CourseCode {
    fn from(code: &str) -> Self {
        CourseCode(code.to_string())
    }
}

impl From<String> for CourseCode {
    fn from(code: String) -> Self {
        CourseCode(code)
    }
}

impl PartialEq<str> for CourseCode {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for CourseCode {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}
