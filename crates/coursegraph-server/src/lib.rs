//! HTTP/JSON API over the course prerequisite graph.
//!
//! The graph is built once at startup and shared read-only by every handler.
//! This crate contains the configuration, API schema types, error mapping,
//! handlers, and route definitions.

pub mod config;
pub mod error;
pub mod handlers;
pub mod router;
pub mod schema;
pub mod state;
