/// Transitive reduction of a DAG.
///
/// Two independent algorithms produce a minimal edge subset whose closure
/// equals the input's closure:
///
/// - [`reduce_via_closure`] — for each edge `(i, j)`, look for an
///   intermediate `k` that already realizes the connection through the
///   closure; if found, the edge is redundant.
/// - [`reduce_via_incidence`] — multiply the adjacency matrix by the
///   closure's incidence pattern to count length-≥2 paths; any edge with a
///   positive count is redundant.
///
/// Both require an acyclic input: the transitive reduction is unique only
/// for DAGs, so callers holding a cyclic graph must run
/// [`crate::graph::cycles::break_cycles`] first. The precondition is
/// documented rather than checked — on cyclic input the result is still a
/// subgraph with the right closure but neither minimal nor unique.
use crate::graph::TredGraph;
use crate::matrix::AdjMatrix;

/// The result of a reduction pass.
///
/// `graph.edges ∪ redundant_edges` equals the input's edge set exactly;
/// with the cycle breaker's removed set unioned in as well, the original
/// pre-break graph is reconstructed for auditing.
#[derive(Debug, Clone)]
pub struct Reduction {
    /// The reduced graph.
    pub graph: TredGraph,
    /// Edges discarded as redundant, as `(from, to)` label pairs sorted by
    /// matrix position.
    pub redundant_edges: Vec<(String, String)>,
}

// ---------------------------------------------------------------------------
// Closure-elimination
// ---------------------------------------------------------------------------

/// Reduces `graph` by closure-based edge elimination.
///
/// Computes the Floyd-Warshall closure `C`, then discards each edge
/// `(i, j)` for which some intermediate `k` (`k ≠ i, j`) satisfies
/// `C[i][k] ∧ C[k][j] ∧ ¬C[j][k]`. On a true DAG the `¬C[j][k]` guard
/// never fires; on input that still contains cycles it stops a
/// mutually-reachable intermediate from counting as evidence of redundancy.
pub fn reduce_via_closure(graph: &TredGraph) -> Reduction {
    let (adj, labels) = AdjMatrix::from_graph(graph);
    let closure = adj.transitive_closure();
    let n = adj.size();

    let mut keep = adj.clone();
    let mut redundant_edges: Vec<(String, String)> = Vec::new();

    for i in 0..n {
        for j in 0..n {
            if !adj.get(i, j) {
                continue;
            }
            for k in 0..n {
                if k != i && k != j && closure.get(i, k) && closure.get(k, j) && !closure.get(j, k)
                {
                    keep.set(i, j, false);
                    redundant_edges.push((labels[i].clone(), labels[j].clone()));
                    break;
                }
            }
        }
    }

    Reduction {
        graph: rebuild(graph, &keep),
        redundant_edges,
    }
}

// ---------------------------------------------------------------------------
// Incidence-elimination
// ---------------------------------------------------------------------------

/// Reduces `graph` by incidence-matrix elimination.
///
/// Computes the closure `GT`, takes its nonzero pattern as an incidence
/// mask, and forms `M3 = A · mask` — `M3[i][j]` counts the vertices `k`
/// with a direct edge `i → k` and a nonempty path `k ⇝ j`, i.e. the
/// length-≥2 realizations of `i ⇝ j`. An edge of `A` with a positive count
/// is already realized by a longer path and is stripped.
pub fn reduce_via_incidence(graph: &TredGraph) -> Reduction {
    let (adj, labels) = AdjMatrix::from_graph(graph);
    let incidence = adj.transitive_closure();
    let n = adj.size();

    // Same-source matrices always agree on size, so the product cannot
    // fail; a mismatch would mean from_graph handed back inconsistent
    // views, and falling through to the unreduced graph keeps the audit
    // identity intact.
    let Ok(counts) = adj.path_counts(&incidence) else {
        return Reduction {
            graph: rebuild(graph, &adj),
            redundant_edges: Vec::new(),
        };
    };

    let mut keep = adj.clone();
    let mut redundant_edges: Vec<(String, String)> = Vec::new();

    for i in 0..n {
        for j in 0..n {
            if adj.get(i, j) && counts.get(i, j) > 0 {
                keep.set(i, j, false);
                redundant_edges.push((labels[i].clone(), labels[j].clone()));
            }
        }
    }

    Reduction {
        graph: rebuild(graph, &keep),
        redundant_edges,
    }
}

/// Rebuilds a [`TredGraph`] over `graph`'s vertex space from the kept
/// cells. Matrix rows map to node indices positionally.
fn rebuild(graph: &TredGraph, keep: &AdjMatrix) -> TredGraph {
    use petgraph::stable_graph::NodeIndex;
    use std::collections::BTreeSet;

    let n = keep.size();
    let mut edges: BTreeSet<(NodeIndex, NodeIndex)> = BTreeSet::new();
    for i in 0..n {
        for j in 0..n {
            if keep.get(i, j) {
                edges.insert((NodeIndex::new(i), NodeIndex::new(j)));
            }
        }
    }
    graph.rebuild_with_edges(&edges)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
