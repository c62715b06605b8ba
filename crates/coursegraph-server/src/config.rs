//! Server configuration read from environment variables.
//!
//! - `COURSEGRAPH_CATALOG`: catalog JSON path (default: "data/courses.json")
//! - `COURSEGRAPH_PORT`: listen port (default: "3000")
//! - `COURSEGRAPH_MAX_PATH_DEPTH`: ceiling applied to `maxDepth` (default: "20")
//! - `COURSEGRAPH_COURSES_PER_SEMESTER`: planner chunk size (default: "4")

use std::path::PathBuf;
use std::str::FromStr;

use coursegraph_core::DEFAULT_COURSES_PER_SEMESTER;

pub const CATALOG_VAR: &str = "COURSEGRAPH_CATALOG";
pub const PORT_VAR: &str = "COURSEGRAPH_PORT";
pub const MAX_PATH_DEPTH_VAR: &str = "COURSEGRAPH_MAX_PATH_DEPTH";
pub const COURSES_PER_SEMESTER_VAR: &str = "COURSEGRAPH_COURSES_PER_SEMESTER";

const DEFAULT_CATALOG: &str = "data/courses.json";
const DEFAULT_PORT: u16 = 3000;
const DEFAULT_MAX_PATH_DEPTH_CEILING: usize = 20;

/// Invalid configuration value.
#[derive(Debug, thiserror::Error)]
#[error("invalid value '{value}' for {var}: {reason}")]
pub struct ConfigError {
    pub var: &'static str,
    pub value: String,
    pub reason: String,
}

/// Limits applied to query parameters before they reach the graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueryLimits {
    /// Largest `maxDepth` a path query may use; larger requests are clamped.
    pub max_path_depth: usize,
    pub courses_per_semester: usize,
}

impl Default for QueryLimits {
    fn default() -> Self {
        QueryLimits {
            max_path_depth: DEFAULT_MAX_PATH_DEPTH_CEILING,
            courses_per_semester: DEFAULT_COURSES_PER_SEMESTER,
        }
    }
}

/// Complete server configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub catalog_path: PathBuf,
    pub port: u16,
    pub limits: QueryLimits,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            catalog_path: PathBuf::from(DEFAULT_CATALOG),
            port: DEFAULT_PORT,
            limits: QueryLimits::default(),
        }
    }
}

impl ServerConfig {
    /// Reads the configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Reads the configuration through `lookup`, which maps a variable name
    /// to its value if set.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = ServerConfig::default();

        let catalog_path = lookup(CATALOG_VAR)
            .map(PathBuf::from)
            .unwrap_or(defaults.catalog_path);
        let port = parse_var(&lookup, PORT_VAR)?.unwrap_or(defaults.port);
        let max_path_depth =
            parse_var(&lookup, MAX_PATH_DEPTH_VAR)?.unwrap_or(defaults.limits.max_path_depth);
        let courses_per_semester = parse_var(&lookup, COURSES_PER_SEMESTER_VAR)?
            .unwrap_or(defaults.limits.courses_per_semester);

        if courses_per_semester == 0 {
            return Err(ConfigError {
                var: COURSES_PER_SEMESTER_VAR,
                value: "0".to_string(),
                reason: "must be at least 1".to_string(),
            });
        }

        Ok(ServerConfig {
            catalog_path,
            port,
            limits: QueryLimits {
                max_path_depth,
                courses_per_semester,
            },
        })
    }
}

fn parse_var<T>(
    lookup: &impl Fn(&str) -> Option<String>,
    var: &'static str,
) -> Result<Option<T>, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(var) {
        None => Ok(None),
        Some(raw) => raw.trim().parse().map(Some).map_err(|e: T::Err| ConfigError {
            var,
            value: raw.clone(),
            reason: e.to_string(),
        }),
    }
}
