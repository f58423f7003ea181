/// Transitive closure of a directed graph.
///
/// Closure is plain reachability, so it is well-defined whether or not the
/// input is acyclic — on a cyclic graph a vertex's closure successors may
/// include the vertex itself.
use std::collections::BTreeSet;

use petgraph::stable_graph::NodeIndex;

use crate::graph::queries::reach_set;
use crate::graph::TredGraph;

/// Returns the transitive closure of `graph`: same vertex set, with an edge
/// `u → v` exactly when a nonempty directed path `u ⇝ v` exists.
///
/// One BFS per vertex over the sparse graph, O(V·E). The result is
/// idempotent: `closure(closure(g))` equals `closure(g)` under
/// [`crate::graph::graphs_equal`].
pub fn closure(graph: &TredGraph) -> TredGraph {
    let mut edges: BTreeSet<(NodeIndex, NodeIndex)> = BTreeSet::new();

    for v in graph.node_indices() {
        for reached in reach_set(graph, v) {
            edges.insert((v, reached));
        }
    }

    graph.rebuild_with_edges(&edges)
}
