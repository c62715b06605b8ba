//! Course graph command-line tool.
//!
//! Provides the `coursegraph` binary: loads a catalog file, builds the
//! prerequisite graph, runs one query, and prints the result as JSON.
//!
//! Uses the same `CourseGraph` read API as the HTTP server, so both entry
//! points answer identically.
//!
//! Exit codes: 0 = success, 1 = unknown course or invalid input,
//! 3 = catalog could not be read or parsed.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use serde::Serialize;

use coursegraph_core::{
    load_catalog, CoreError, CourseGraph, PlanOptions, DEFAULT_COURSES_PER_SEMESTER,
    DEFAULT_MAX_DEPTH, DEFAULT_MAX_SEMESTERS,
};

/// Exit code for unknown courses and invalid input.
const EXIT_INVALID: i32 = 1;
/// Exit code for catalog I/O and parse failures.
const EXIT_CATALOG: i32 = 3;

/// Course prerequisite graph queries.
#[derive(Parser)]
#[command(name = "coursegraph", about = "Query a course prerequisite graph")]
struct Cli {
    /// Path to the catalog JSON file.
    #[arg(short, long, global = true, default_value = "data/courses.json")]
    catalog: PathBuf,

    /// Log graph construction and query details to stderr.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands.
#[derive(Subcommand)]
enum Commands {
    /// Show a single course.
    Show { code: String },

    /// List a course's direct prerequisites.
    Prereqs { code: String },

    /// List the courses that directly require a course.
    Dependents { code: String },

    /// Enumerate prerequisite paths from one course to another.
    Paths {
        start: String,
        target: String,

        /// Maximum number of edges in a path (0 means the default).
        #[arg(short = 'd', long, default_value_t = DEFAULT_MAX_DEPTH)]
        max_depth: usize,
    },

    /// Print every course in a valid completion order.
    Order,

    /// List a course and all its transitive prerequisites.
    Required { code: String },

    /// Plan semesters that reach all target courses.
    Plan {
        #[arg(required = true)]
        targets: Vec<String>,

        /// Maximum number of semesters (0 means the default).
        #[arg(short = 's', long, default_value_t = DEFAULT_MAX_SEMESTERS)]
        max_semesters: usize,

        /// Maximum courses per semester.
        #[arg(short = 'p', long, default_value_t = DEFAULT_COURSES_PER_SEMESTER)]
        per_semester: usize,
    },

    /// Search course codes and titles (case-insensitive).
    Search { query: String },

    /// Report prerequisite cycles.
    Cycles,
}

fn main() {
    let cli = Cli::parse();

    if cli.verbose {
        tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_max_level(tracing_subscriber::filter::LevelFilter::DEBUG)
            .init();
    }

    let graph = match load_catalog(&cli.catalog) {
        Ok(records) => CourseGraph::build(&records),
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(EXIT_CATALOG);
        }
    };

    if let Err(e) = run(&graph, cli.command) {
        eprintln!("Error: {}", e);
        process::exit(EXIT_INVALID);
    }
}

/// Errors from a single subcommand.
#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("{0}")]
    Invalid(String),

    #[error("failed to encode output: {0}")]
    Output(#[source] serde_json::Error),
}

/// Execute one subcommand against the built graph.
fn run(graph: &CourseGraph, command: Commands) -> Result<(), CliError> {
    match command {
        Commands::Show { code } => print_json(graph.require_course(&normalize(&code))?),
        // Unknown codes simply have no neighbors and no paths.
        Commands::Prereqs { code } => {
            print_json(&graph.resolve(graph.prerequisites_of(&normalize(&code))))
        }
        Commands::Dependents { code } => {
            print_json(&graph.resolve(graph.dependents_of(&normalize(&code))))
        }
        Commands::Paths {
            start,
            target,
            max_depth,
        } => {
            let depth = or_default(max_depth, DEFAULT_MAX_DEPTH);
            print_json(&graph.find_all_paths(&normalize(&start), &normalize(&target), depth))
        }
        Commands::Order => print_json(&graph.topological_sort()),
        Commands::Required { code } => {
            let code = normalize(&code);
            graph.require_course(&code)?;
            print_json(&graph.required_in_order(&code))
        }
        Commands::Plan {
            targets,
            max_semesters,
            per_semester,
        } => {
            let targets: Vec<String> = targets.iter().map(|t| normalize(t)).collect();
            let options = plan_options(max_semesters, per_semester);
            print_json(&graph.plan(targets.as_slice(), options)?)
        }
        Commands::Search { query } => {
            if query.is_empty() {
                return Err(CliError::Invalid("search query must not be empty".to_string()));
            }
            print_json(&graph.search(&query))
        }
        Commands::Cycles => print_json(&graph.cycles()),
    }
}

/// Zero means "not set", matching the HTTP query parameters.
fn or_default(value: usize, default: usize) -> usize {
    if value == 0 {
        default
    } else {
        value
    }
}

fn plan_options(max_semesters: usize, per_semester: usize) -> PlanOptions {
    PlanOptions::default()
        .with_max_semesters(or_default(max_semesters, DEFAULT_MAX_SEMESTERS))
        .with_courses_per_semester(per_semester)
}

fn normalize(code: &str) -> String {
    code.trim().to_uppercase()
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<(), CliError> {
    let out = serde_json::to_string_pretty(value).map_err(CliError::Output)?;
    println!("{}", out);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use coursegraph_core::CourseRecord;

    fn graph() -> CourseGraph {
        CourseGraph::build(&[
            CourseRecord::new("COMP 1130", "Intro", "3"),
            CourseRecord::new("COMP 2130", "Data Structures", "3").with_prereq("COMP 1130"),
        ])
    }

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_plan_arguments() {
        let cli = Cli::try_parse_from([
            "coursegraph",
            "--catalog",
            "catalog.json",
            "plan",
            "COMP 2130",
            "COMP 3130",
            "--max-semesters",
            "2",
        ])
        .unwrap();

        assert_eq!(cli.catalog, PathBuf::from("catalog.json"));
        match cli.command {
            Commands::Plan {
                targets,
                max_semesters,
                per_semester,
            } => {
                assert_eq!(targets, vec!["COMP 2130", "COMP 3130"]);
                assert_eq!(max_semesters, 2);
                assert_eq!(per_semester, DEFAULT_COURSES_PER_SEMESTER);
            }
            _ => panic!("expected plan subcommand"),
        }
    }

    #[test]
    fn plan_requires_a_target() {
        assert!(Cli::try_parse_from(["coursegraph", "plan"]).is_err());
    }

    #[test]
    fn unknown_course_is_an_error() {
        let err = run(&graph(), Commands::Show { code: "biol 1000".into() }).unwrap_err();
        assert!(matches!(err, CliError::Core(CoreError::CourseNotFound { .. })));
    }

    #[test]
    fn known_course_lookups_succeed() {
        let graph = graph();
        assert!(run(&graph, Commands::Show { code: "comp 2130".into() }).is_ok());
        assert!(run(&graph, Commands::Required { code: "COMP 2130".into() }).is_ok());
        assert!(run(&graph, Commands::Cycles).is_ok());
    }

    #[test]
    fn zero_limits_fall_back_to_defaults() {
        assert_eq!(or_default(0, DEFAULT_MAX_SEMESTERS), DEFAULT_MAX_SEMESTERS);
        assert_eq!(or_default(0, DEFAULT_MAX_DEPTH), DEFAULT_MAX_DEPTH);
        assert_eq!(or_default(2, DEFAULT_MAX_SEMESTERS), 2);

        let options = plan_options(0, DEFAULT_COURSES_PER_SEMESTER);
        assert_eq!(options.max_semesters, DEFAULT_MAX_SEMESTERS);
        let plan = graph().plan(&["COMP 2130"], options).unwrap();
        assert_eq!(plan.semesters.len(), 1);
        assert!(plan.unscheduled.is_empty());
    }

    #[test]
    fn empty_search_is_invalid() {
        let err = run(&graph(), Commands::Search { query: String::new() }).unwrap_err();
        assert!(matches!(err, CliError::Invalid(_)));
    }
}
