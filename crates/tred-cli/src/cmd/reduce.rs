//! Implementation of `tred reduce <file>`.
//!
//! Full pipeline: parse, build, strip self-loops and break cycles, then
//! compute the transitive reduction of the resulting DAG. Two reduction
//! algorithms are available via `--algorithm`; they keep the same edges on
//! every DAG.
//!
//! Output (human mode): the reduced graph as sorted adjacency lines. With
//! `--show-removed`, self-loops, back edges, and redundant edges are listed
//! afterwards.
//! Output (JSON mode): a single object with the reduced graph plus the
//! `self_loops`, `removed_edges`, and `redundant_edges` arrays.
//!
//! Exit codes: 0 = success, 2 = read/parse failure.

use tred_core::{CycleBreakOutcome, Reduction, break_cycles, build_graph, reduce_via_closure,
    reduce_via_incidence};

use crate::Algorithm;
use crate::InputFormat;
use crate::OutputFormat;
use crate::error::CliError;
use crate::input::parse_graph;
use crate::render::{edge_pairs_json, graph_json, stdout_error, write_graph_human};

/// Runs the `reduce` command.
///
/// # Errors
///
/// Returns [`CliError`] exit code 2 if the content cannot be parsed.
pub fn run(
    content: &str,
    input: InputFormat,
    algorithm: Algorithm,
    show_removed: bool,
    format: &OutputFormat,
) -> Result<(), CliError> {
    let doc = parse_graph(content, input)?;
    let graph = build_graph(&doc);
    let outcome = break_cycles(&graph);
    let reduction = match algorithm {
        Algorithm::Closure => reduce_via_closure(&outcome.dag),
        Algorithm::Matrix => reduce_via_incidence(&outcome.dag),
    };

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match format {
        OutputFormat::Human => print_human(&mut out, &outcome, &reduction, show_removed),
        OutputFormat::Json => print_json(&mut out, &outcome, &reduction),
    }
    .map_err(stdout_error)
}

/// Writes the reduced graph, optionally followed by the removed-edge report.
fn print_human<W: std::io::Write>(
    w: &mut W,
    outcome: &CycleBreakOutcome,
    reduction: &Reduction,
    show_removed: bool,
) -> std::io::Result<()> {
    write_graph_human(w, &reduction.graph)?;
    if !show_removed {
        return Ok(());
    }
    if !outcome.self_loops.is_empty() {
        writeln!(w, "self-loops: {}", outcome.self_loops.join(" "))?;
    }
    for (from, to) in &outcome.removed_edges {
        writeln!(w, "cycle edge removed: {from} -> {to}")?;
    }
    for (from, to) in &reduction.redundant_edges {
        writeln!(w, "redundant edge removed: {from} -> {to}")?;
    }
    Ok(())
}

/// Writes the full pipeline result as a single JSON object. The removal
/// arrays are always present in JSON mode.
fn print_json<W: std::io::Write>(
    w: &mut W,
    outcome: &CycleBreakOutcome,
    reduction: &Reduction,
) -> std::io::Result<()> {
    let self_loops: Vec<serde_json::Value> = outcome
        .self_loops
        .iter()
        .map(|s| serde_json::Value::String(s.clone()))
        .collect();

    let mut obj = serde_json::Map::new();
    obj.insert("reduction".to_owned(), graph_json(&reduction.graph));
    obj.insert("self_loops".to_owned(), serde_json::Value::Array(self_loops));
    obj.insert(
        "removed_edges".to_owned(),
        edge_pairs_json(&outcome.removed_edges),
    );
    obj.insert(
        "redundant_edges".to_owned(),
        edge_pairs_json(&reduction.redundant_edges),
    );

    let json = serde_json::to_string_pretty(&serde_json::Value::Object(obj))
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
    writeln!(w, "{json}")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used)]

    use tred_core::{GraphDoc, break_cycles, build_graph, reduce_via_closure};

    use super::*;

    fn triangle_report(show_removed: bool) -> String {
        let g = build_graph(&GraphDoc::from_parts(
            &["a", "b", "c"],
            &[("a", "b"), ("b", "c"), ("a", "c")],
        ));
        let outcome = break_cycles(&g);
        let reduction = reduce_via_closure(&outcome.dag);
        let mut buf: Vec<u8> = Vec::new();
        print_human(&mut buf, &outcome, &reduction, show_removed).expect("write");
        String::from_utf8(buf).expect("utf8")
    }

    #[test]
    fn shortcut_edge_is_dropped_from_output() {
        let s = triangle_report(false);
        assert!(s.contains("a -> b"), "output: {s}");
        assert!(s.contains("b -> c"), "output: {s}");
        assert!(!s.contains("a -> b c"), "a -> c must be gone: {s}");
    }

    #[test]
    fn show_removed_lists_redundant_edge() {
        let s = triangle_report(true);
        assert!(s.contains("redundant edge removed: a -> c"), "output: {s}");
    }

    #[test]
    fn without_show_removed_no_removal_lines() {
        let s = triangle_report(false);
        assert!(!s.contains("removed"), "output: {s}");
    }

    #[test]
    fn json_report_has_all_sections() {
        let g = build_graph(&GraphDoc::from_parts(
            &["a", "b", "c"],
            &[("a", "a"), ("a", "b"), ("b", "c"), ("c", "a")],
        ));
        let outcome = break_cycles(&g);
        let reduction = reduce_via_closure(&outcome.dag);
        let mut buf: Vec<u8> = Vec::new();
        print_json(&mut buf, &outcome, &reduction).expect("write");
        let s = String::from_utf8(buf).expect("utf8");
        assert!(s.contains("\"reduction\""), "output: {s}");
        assert!(s.contains("\"self_loops\""), "output: {s}");
        assert!(s.contains("\"removed_edges\""), "output: {s}");
        assert!(s.contains("\"redundant_edges\""), "output: {s}");
    }

    #[test]
    fn both_algorithms_accept_cyclic_input() {
        let content = "V a\nV b\nV c\nE a b\nE b c\nE c a\n";
        run(
            content,
            InputFormat::Auto,
            Algorithm::Closure,
            false,
            &OutputFormat::Human,
        )
        .expect("closure algorithm");
        run(
            content,
            InputFormat::Auto,
            Algorithm::Matrix,
            false,
            &OutputFormat::Human,
        )
        .expect("matrix algorithm");
    }
}
