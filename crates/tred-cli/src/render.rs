/// Graph output formatting: human-readable and JSON modes.
///
/// Human mode prints one adjacency line per vertex, sorted by label:
///
/// ```text
/// a -> b c
/// b -> c
/// c ->
/// ```
///
/// JSON mode emits a single object with sorted `vertices` and `edges`
/// arrays. Both modes are deterministic for a given graph.
use std::io::Write;

use tred_core::TredGraph;

use crate::OutputFormat;
use crate::error::CliError;

/// Writes `graph` to stdout in the requested format.
///
/// # Errors
///
/// Returns [`CliError::IoError`] only if writing to stdout fails.
pub fn emit_graph(graph: &TredGraph, format: &OutputFormat) -> Result<(), CliError> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    match format {
        OutputFormat::Human => write_graph_human(&mut out, graph),
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&graph_json(graph)).map_err(|e| {
                std::io::Error::new(std::io::ErrorKind::InvalidData, e)
            });
            json.and_then(|s| writeln!(out, "{s}"))
        }
    }
    .map_err(stdout_error)
}

/// Writes one `label -> succ1 succ2 ...` line per vertex, sorted by label.
/// Vertices with no successors still get a line, with an empty right side.
pub fn write_graph_human<W: Write>(w: &mut W, graph: &TredGraph) -> std::io::Result<()> {
    let mut rows: Vec<(String, Vec<String>)> = Vec::with_capacity(graph.vertex_count());
    for idx in graph.node_indices() {
        let Some(label) = graph.label(idx) else {
            continue;
        };
        let mut succs: Vec<String> = graph
            .successors(idx)
            .into_iter()
            .filter_map(|s| graph.label(s).map(str::to_owned))
            .collect();
        succs.sort();
        rows.push((label.to_owned(), succs));
    }
    rows.sort();

    for (label, succs) in rows {
        if succs.is_empty() {
            writeln!(w, "{label} ->")?;
        } else {
            writeln!(w, "{label} -> {}", succs.join(" "))?;
        }
    }
    Ok(())
}

/// Builds the JSON value for `graph`: sorted vertex and edge arrays.
pub fn graph_json(graph: &TredGraph) -> serde_json::Value {
    let vertices: Vec<serde_json::Value> = graph
        .vertex_labels()
        .into_iter()
        .map(serde_json::Value::String)
        .collect();
    let edges: Vec<serde_json::Value> = graph
        .edge_pairs()
        .into_iter()
        .map(|(from, to)| {
            serde_json::Value::Array(vec![
                serde_json::Value::String(from),
                serde_json::Value::String(to),
            ])
        })
        .collect();

    let mut obj = serde_json::Map::new();
    obj.insert("vertices".to_owned(), serde_json::Value::Array(vertices));
    obj.insert("edges".to_owned(), serde_json::Value::Array(edges));
    serde_json::Value::Object(obj)
}

/// Builds a JSON array of `[from, to]` pairs from label pairs.
pub fn edge_pairs_json(pairs: &[(String, String)]) -> serde_json::Value {
    serde_json::Value::Array(
        pairs
            .iter()
            .map(|(from, to)| {
                serde_json::Value::Array(vec![
                    serde_json::Value::String(from.clone()),
                    serde_json::Value::String(to.clone()),
                ])
            })
            .collect(),
    )
}

/// Maps a stdout write failure to a [`CliError`].
pub fn stdout_error(e: std::io::Error) -> CliError {
    CliError::IoError {
        source: "stdout".to_owned(),
        detail: e.to_string(),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
