//! API schema types for request/response definitions.
//!
//! Field names are camelCase on the wire to match the existing web client.

pub mod courses;
pub mod paths;
pub mod plans;
pub mod search;
