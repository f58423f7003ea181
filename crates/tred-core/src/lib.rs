#![deny(clippy::print_stdout, clippy::print_stderr)]

pub mod doc;
pub mod graph;
pub mod matrix;
pub mod parse;

pub use doc::GraphDoc;
pub use graph::closure::closure;
pub use graph::cycles::{CycleBreakOutcome, break_cycles, is_acyclic};
pub use graph::queries::{QueryError, all_pairs_reachable, has_path, reachable_from};
pub use graph::reduction::{Reduction, reduce_via_closure, reduce_via_incidence};
pub use graph::{TredGraph, build_graph, graphs_equal};
pub use matrix::{AdjMatrix, CountMatrix, MatrixError, matrix_from_edges};
pub use parse::{ParseError, parse_edge_list, parse_json, parse_matrix};

/// Returns the current version of the tred-core library.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
