/// Reachability queries: point-to-point and all-pairs.
///
/// [`has_path`] and [`reachable_from`] run BFS over the sparse graph;
/// [`all_pairs_reachable`] computes the same relation for every pair at
/// once via Floyd-Warshall on the dense view, preferred when a matrix is
/// already in play.
use std::collections::{BTreeSet, HashSet, VecDeque};

use petgraph::stable_graph::NodeIndex;

use crate::graph::TredGraph;
use crate::matrix::AdjMatrix;

// ---------------------------------------------------------------------------
// Error type
// ---------------------------------------------------------------------------

/// Errors from reachability queries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryError {
    /// A query referenced a vertex label absent from the graph.
    ///
    /// An unknown vertex is an explicit failure, never silently treated as
    /// unreachable.
    VertexNotFound(String),
}

impl std::fmt::Display for QueryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            QueryError::VertexNotFound(label) => write!(f, "vertex not found: {label:?}"),
        }
    }
}

impl std::error::Error for QueryError {}

// ---------------------------------------------------------------------------
// Point-to-point
// ---------------------------------------------------------------------------

/// Returns `true` if a directed path exists from `from` to `to`.
///
/// BFS from `from`; each reachable vertex is visited at most once, and the
/// search stops the moment `to` is dequeued. The start vertex is enqueued
/// before expansion and compared on dequeue, so `from == to` is reflexively
/// `true` — callers that want strict (nonempty-path) reachability must
/// exclude the trivial case themselves.
///
/// # Errors
///
/// [`QueryError::VertexNotFound`] if either endpoint is unknown.
pub fn has_path(graph: &TredGraph, from: &str, to: &str) -> Result<bool, QueryError> {
    let from_idx = graph
        .node_index(from)
        .ok_or_else(|| QueryError::VertexNotFound(from.to_owned()))?;
    let to_idx = graph
        .node_index(to)
        .ok_or_else(|| QueryError::VertexNotFound(to.to_owned()))?;

    let mut visited: HashSet<NodeIndex> = HashSet::new();
    let mut queue: VecDeque<NodeIndex> = VecDeque::new();
    visited.insert(from_idx);
    queue.push_back(from_idx);

    while let Some(current) = queue.pop_front() {
        if current == to_idx {
            return Ok(true);
        }
        for neighbour in graph.successors(current) {
            if visited.insert(neighbour) {
                queue.push_back(neighbour);
            }
        }
    }

    Ok(false)
}

// ---------------------------------------------------------------------------
// Single-source
// ---------------------------------------------------------------------------

/// Returns the set of vertices reachable from `start` via a nonempty path.
///
/// The start vertex appears in the result only when some edge re-enters it
/// (it lies on a cycle); on an acyclic graph the result never contains the
/// start.
///
/// # Errors
///
/// [`QueryError::VertexNotFound`] if `start` is unknown.
pub fn reachable_from(graph: &TredGraph, start: &str) -> Result<BTreeSet<NodeIndex>, QueryError> {
    let start_idx = graph
        .node_index(start)
        .ok_or_else(|| QueryError::VertexNotFound(start.to_owned()))?;
    Ok(reach_set(graph, start_idx))
}

/// BFS core shared with the closure engine: everything reachable from
/// `start` through at least one edge.
pub(crate) fn reach_set(graph: &TredGraph, start: NodeIndex) -> BTreeSet<NodeIndex> {
    let mut reached: BTreeSet<NodeIndex> = BTreeSet::new();
    let mut visited: HashSet<NodeIndex> = HashSet::new();
    let mut queue: VecDeque<NodeIndex> = VecDeque::new();

    visited.insert(start);
    queue.push_back(start);

    while let Some(current) = queue.pop_front() {
        for neighbour in graph.successors(current) {
            // Recorded even when already visited: an edge back to the start
            // puts the start itself into the reached set.
            reached.insert(neighbour);
            if visited.insert(neighbour) {
                queue.push_back(neighbour);
            }
        }
    }

    reached
}

// ---------------------------------------------------------------------------
// All-pairs
// ---------------------------------------------------------------------------

/// Returns the all-pairs reachability matrix together with its index→label
/// table.
///
/// Floyd-Warshall over the dense adjacency view, O(V³); produces the same
/// relation as running [`reachable_from`] per vertex.
pub fn all_pairs_reachable(graph: &TredGraph) -> (AdjMatrix, Vec<String>) {
    let (adj, labels) = AdjMatrix::from_graph(graph);
    (adj.transitive_closure(), labels)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used)]

    use super::*;
    use crate::doc::GraphDoc;
    use crate::graph::build_graph;

    fn chain() -> TredGraph {
        build_graph(&GraphDoc::from_parts(
            &["a", "b", "c", "d"],
            &[("a", "b"), ("b", "c"), ("c", "d")],
        ))
    }

    #[test]
    fn has_path_follows_chain() {
        let g = chain();
        assert!(has_path(&g, "a", "d").expect("known vertices"));
        assert!(has_path(&g, "b", "c").expect("known vertices"));
    }

    #[test]
    fn has_path_respects_direction() {
        let g = chain();
        assert!(!has_path(&g, "d", "a").expect("known vertices"));
    }

    #[test]
    fn has_path_is_reflexive() {
        let g = chain();
        assert!(has_path(&g, "a", "a").expect("known vertices"));
        // Even with no self-loop and no cycle back to the vertex.
        assert!(has_path(&g, "d", "d").expect("known vertices"));
    }

    #[test]
    fn has_path_unknown_vertex_is_an_error() {
        let g = chain();
        assert_eq!(
            has_path(&g, "a", "ghost"),
            Err(QueryError::VertexNotFound("ghost".to_owned()))
        );
        assert_eq!(
            has_path(&g, "ghost", "a"),
            Err(QueryError::VertexNotFound("ghost".to_owned()))
        );
    }

    #[test]
    fn reachable_from_excludes_start_on_dag() {
        let g = chain();
        let reached = reachable_from(&g, "a").expect("known vertex");
        let names: Vec<&str> = reached.iter().filter_map(|&i| g.label(i)).collect();
        assert_eq!(names, vec!["b", "c", "d"]);
    }

    #[test]
    fn reachable_from_includes_start_on_cycle() {
        let g = build_graph(&GraphDoc::from_parts(
            &["a", "b", "c"],
            &[("a", "b"), ("b", "c"), ("c", "a")],
        ));
        let reached = reachable_from(&g, "a").expect("known vertex");
        let a = g.node_index("a").expect("a exists");
        assert!(reached.contains(&a), "cycle routes back to the origin");
    }

    #[test]
    fn reachable_from_leaf_is_empty() {
        let g = chain();
        let reached = reachable_from(&g, "d").expect("known vertex");
        assert!(reached.is_empty());
    }

    #[test]
    fn all_pairs_matches_per_vertex_bfs() {
        let g = build_graph(&GraphDoc::from_parts(
            &["a", "b", "c", "d"],
            &[("a", "b"), ("b", "c"), ("a", "d"), ("d", "c")],
        ));
        let (reach, labels) = all_pairs_reachable(&g);

        for (i, from) in labels.iter().enumerate() {
            let bfs = reachable_from(&g, from).expect("known vertex");
            for (j, to) in labels.iter().enumerate() {
                let to_idx = g.node_index(to).expect("known vertex");
                assert_eq!(
                    reach.get(i, j),
                    bfs.contains(&to_idx),
                    "disagreement on {from} → {to}"
                );
            }
        }
    }
}
