//! Implementation of `tred reach <file> <from> [to]`.
//!
//! With one vertex: performs a BFS from `from` and writes the reachable
//! vertex labels to stdout, one per line, sorted. The source itself appears
//! only when it lies on a cycle (or carries a self-loop).
//!
//! With two vertices: answers the single-pair path question. A vertex
//! trivially reaches itself. Prints `yes` or `no` (human mode) or
//! `{"path_exists": bool}` (JSON mode) and exits 1 when no path exists.
//!
//! Exit codes: 0 = success, 1 = unknown vertex or absent path,
//! 2 = read/parse failure.
use std::io::Write as _;

use tred_core::{QueryError, TredGraph, build_graph, has_path, reachable_from};

use crate::InputFormat;
use crate::OutputFormat;
use crate::error::CliError;
use crate::input::parse_graph;
use crate::render::stdout_error;

/// Runs the `reach` command.
///
/// # Errors
///
/// - [`CliError`] exit code 2 if the content cannot be parsed.
/// - [`CliError`] exit code 1 if a named vertex is unknown, or if `to` is
///   given and no path exists.
pub fn run(
    content: &str,
    from: &str,
    to: Option<&str>,
    input: InputFormat,
    format: &OutputFormat,
) -> Result<(), CliError> {
    let doc = parse_graph(content, input)?;
    let graph = build_graph(&doc);

    match to {
        Some(target) => run_pair(&graph, from, target, format),
        None => run_set(&graph, from, format),
    }
}

/// Single-pair mode: print the answer, then signal an absent path via the
/// exit code.
fn run_pair(
    graph: &TredGraph,
    from: &str,
    to: &str,
    format: &OutputFormat,
) -> Result<(), CliError> {
    let exists = has_path(graph, from, to).map_err(query_error_to_cli)?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    match format {
        OutputFormat::Human => writeln!(out, "{}", if exists { "yes" } else { "no" }),
        OutputFormat::Json => writeln!(out, "{{\"path_exists\": {exists}}}"),
    }
    .map_err(stdout_error)?;

    if exists { Ok(()) } else { Err(CliError::PathAbsent) }
}

/// Set mode: print every vertex reachable from `from`, sorted by label.
fn run_set(graph: &TredGraph, from: &str, format: &OutputFormat) -> Result<(), CliError> {
    let reached = reachable_from(graph, from).map_err(query_error_to_cli)?;

    let mut labels: Vec<String> = reached
        .into_iter()
        .filter_map(|idx| graph.label(idx).map(str::to_owned))
        .collect();
    labels.sort();

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    match format {
        OutputFormat::Human => print_human(&mut out, &labels),
        OutputFormat::Json => print_json(&mut out, &labels),
    }
    .map_err(stdout_error)
}

/// Writes reachable labels in human-readable format (one per line).
fn print_human<W: std::io::Write>(w: &mut W, labels: &[String]) -> std::io::Result<()> {
    for label in labels {
        writeln!(w, "{label}")?;
    }
    Ok(())
}

/// Writes reachable labels as a JSON object.
fn print_json<W: std::io::Write>(w: &mut W, labels: &[String]) -> std::io::Result<()> {
    let array: Vec<serde_json::Value> = labels
        .iter()
        .map(|s| serde_json::Value::String(s.clone()))
        .collect();

    let mut obj = serde_json::Map::new();
    obj.insert("vertices".to_owned(), serde_json::Value::Array(array));
    obj.insert(
        "count".to_owned(),
        serde_json::Value::Number(labels.len().into()),
    );

    let json = serde_json::to_string_pretty(&serde_json::Value::Object(obj))
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
    writeln!(w, "{json}")
}

/// Converts a [`QueryError`] to the appropriate [`CliError`].
fn query_error_to_cli(e: QueryError) -> CliError {
    match e {
        QueryError::VertexNotFound(label) => CliError::VertexNotFound { label },
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
