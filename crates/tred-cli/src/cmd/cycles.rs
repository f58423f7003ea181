//! Implementation of `tred cycles <file>`.
//!
//! Parses a graph description and reports whether it is acyclic, which
//! self-loops it carries, and which back edges a cycle-breaking pass would
//! remove. The input graph itself is not modified; this is a dry run of the
//! breaking pass.
//!
//! Output (human mode):
//!
//! ```text
//! acyclic: no
//! self-loops: a
//! removed: c -> a
//! ```
//!
//! Output (JSON mode):
//! `{"acyclic": bool, "self_loops": [...], "removed_edges": [[from, to], ...]}`.
//!
//! Exit codes: 0 = success, 2 = read/parse failure.

use tred_core::{break_cycles, build_graph, is_acyclic};

use crate::InputFormat;
use crate::OutputFormat;
use crate::error::CliError;
use crate::input::parse_graph;
use crate::render::{edge_pairs_json, stdout_error};

/// Runs the `cycles` command.
///
/// # Errors
///
/// Returns [`CliError`] exit code 2 if the content cannot be parsed.
pub fn run(content: &str, input: InputFormat, format: &OutputFormat) -> Result<(), CliError> {
    let doc = parse_graph(content, input)?;
    let graph = build_graph(&doc);
    let acyclic = is_acyclic(&graph);
    let outcome = break_cycles(&graph);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match format {
        OutputFormat::Human => print_human(&mut out, acyclic, &outcome),
        OutputFormat::Json => print_json(&mut out, acyclic, &outcome),
    }
    .map_err(stdout_error)
}

/// Writes the dry-run report in human-readable form.
fn print_human<W: std::io::Write>(
    w: &mut W,
    acyclic: bool,
    outcome: &tred_core::CycleBreakOutcome,
) -> std::io::Result<()> {
    writeln!(w, "acyclic: {}", if acyclic { "yes" } else { "no" })?;
    if !outcome.self_loops.is_empty() {
        writeln!(w, "self-loops: {}", outcome.self_loops.join(" "))?;
    }
    for (from, to) in &outcome.removed_edges {
        writeln!(w, "removed: {from} -> {to}")?;
    }
    Ok(())
}

/// Writes the dry-run report as a single JSON object.
fn print_json<W: std::io::Write>(
    w: &mut W,
    acyclic: bool,
    outcome: &tred_core::CycleBreakOutcome,
) -> std::io::Result<()> {
    let self_loops: Vec<serde_json::Value> = outcome
        .self_loops
        .iter()
        .map(|s| serde_json::Value::String(s.clone()))
        .collect();

    let mut obj = serde_json::Map::new();
    obj.insert("acyclic".to_owned(), serde_json::Value::Bool(acyclic));
    obj.insert("self_loops".to_owned(), serde_json::Value::Array(self_loops));
    obj.insert(
        "removed_edges".to_owned(),
        edge_pairs_json(&outcome.removed_edges),
    );

    let json = serde_json::to_string_pretty(&serde_json::Value::Object(obj))
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
    writeln!(w, "{json}")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
