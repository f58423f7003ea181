//! Implementation of `tred closure <file>`.
//!
//! Parses a graph description, builds the graph, and writes its transitive
//! closure to stdout. Works on cyclic input: vertices on a cycle gain
//! self-edges in the closure.
//!
//! Output (human mode): one sorted adjacency line per vertex.
//! Output (JSON mode): `{"vertices": [...], "edges": [[from, to], ...]}`.
//!
//! Exit codes: 0 = success, 2 = read/parse failure.
use tred_core::{build_graph, closure};

use crate::InputFormat;
use crate::OutputFormat;
use crate::error::CliError;
use crate::input::parse_graph;
use crate::render::emit_graph;

/// Runs the `closure` command.
///
/// # Errors
///
/// Returns [`CliError`] exit code 2 if the content cannot be parsed.
pub fn run(content: &str, input: InputFormat, format: &OutputFormat) -> Result<(), CliError> {
    let doc = parse_graph(content, input)?;
    let graph = build_graph(&doc);
    let closed = closure(&graph);
    emit_graph(&closed, format)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used)]

    use super::*;

    #[test]
    fn closure_of_chain_succeeds() {
        let content = "V a\nV b\nV c\nE a b\nE b c\n";
        run(content, InputFormat::Auto, &OutputFormat::Human).expect("closure should succeed");
    }

    #[test]
    fn malformed_input_is_exit_2() {
        let err =
            run("garbage here\n", InputFormat::Auto, &OutputFormat::Human).expect_err("must fail");
        assert_eq!(err.exit_code(), 2);
    }
}
