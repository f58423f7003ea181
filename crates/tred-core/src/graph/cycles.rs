/// Cycle detection and cycle breaking.
///
/// [`is_acyclic`] answers the yes/no question with Kahn's algorithm
/// (BFS-based topological sort). [`break_cycles`] converts an arbitrary
/// directed graph into a DAG by depth-first traversal: any edge into a
/// vertex currently on the DFS path is a back edge, and removing every back
/// edge of a DFS forest leaves an acyclic graph.
///
/// # Canonical Traversal Order
///
/// Start vertices are taken in ascending node-index order and successor
/// lists are scanned in ascending target-index order. *Which* edges are
/// chosen as back edges when several cycles share vertices depends on this
/// order; a different order may remove a different (equally valid) set.
use std::collections::{BTreeSet, VecDeque};

use petgraph::stable_graph::NodeIndex;

use crate::graph::TredGraph;

// ---------------------------------------------------------------------------
// Acyclicity check
// ---------------------------------------------------------------------------

/// Returns `true` if the graph contains no directed cycle.
///
/// Kahn's algorithm: seed a queue with the zero-in-degree vertices, then
/// repeatedly consume a vertex and decrement its successors' in-degrees.
/// The graph is acyclic iff every vertex is consumed. Self-loops count as
/// cycles.
pub fn is_acyclic(graph: &TredGraph) -> bool {
    let n = graph.vertex_count();
    let mut in_degree: Vec<usize> = vec![0; n];

    for idx in graph.node_indices() {
        for succ in graph.successors(idx) {
            in_degree[succ.index()] += 1;
        }
    }

    let mut queue: VecDeque<NodeIndex> = graph
        .node_indices()
        .into_iter()
        .filter(|idx| in_degree[idx.index()] == 0)
        .collect();

    let mut consumed: usize = 0;
    while let Some(node) = queue.pop_front() {
        consumed += 1;
        for succ in graph.successors(node) {
            let deg = &mut in_degree[succ.index()];
            if *deg > 0 {
                *deg -= 1;
                if *deg == 0 {
                    queue.push_back(succ);
                }
            }
        }
    }

    consumed == n
}

// ---------------------------------------------------------------------------
// Cycle breaking
// ---------------------------------------------------------------------------

/// The result of [`break_cycles`]: the acyclic graph, the back edges
/// removed to make it acyclic, and the vertices whose self-loops were
/// stripped beforehand.
///
/// `dag.edges ∪ removed_edges` reconstructs the input's edge set minus its
/// self-loops; the two sets are disjoint. Self-loops are structurally
/// invalid for reduction rather than cycle-forming in the traversal sense,
/// so they are reported separately and never appear in `removed_edges`.
#[derive(Debug, Clone)]
pub struct CycleBreakOutcome {
    /// The input graph with self-loops and back edges removed.
    pub dag: TredGraph,
    /// Back edges removed during traversal, as `(from, to)` label pairs in
    /// removal order.
    pub removed_edges: Vec<(String, String)>,
    /// Labels of vertices that carried a self-loop, in ascending index
    /// order.
    pub self_loops: Vec<String>,
}

/// Breaks every directed cycle in `graph`, returning the resulting DAG and
/// the removed edges.
///
/// Self-loops are stripped unconditionally before traversal. The DFS keeps
/// two markers per vertex: `on_path`, set on entry to a vertex's frame and
/// cleared when the frame is popped (the recursion-stack marker), and
/// `done`, set permanently once a vertex's out-edges are fully explored. An
/// edge into an `on_path` vertex closes a cycle and is removed; an edge
/// into a `done` vertex is a forward/cross edge and is kept — a fully
/// explored vertex off the current path cannot lead back onto it.
pub fn break_cycles(graph: &TredGraph) -> CycleBreakOutcome {
    let n = graph.vertex_count();

    // Working adjacency, self-loops stripped up front.
    let mut self_loops: Vec<String> = Vec::new();
    let mut succ: Vec<Vec<NodeIndex>> = vec![Vec::new(); n];
    for idx in graph.node_indices() {
        for target in graph.successors(idx) {
            if target == idx {
                if let Some(label) = graph.label(idx) {
                    self_loops.push(label.to_owned());
                }
            } else {
                succ[idx.index()].push(target);
            }
        }
    }

    let mut removed_edges: Vec<(String, String)> = Vec::new();
    let mut removed_set: BTreeSet<(NodeIndex, NodeIndex)> = BTreeSet::new();
    let mut on_path: Vec<bool> = vec![false; n];
    let mut done: Vec<bool> = vec![false; n];

    for start in graph.node_indices() {
        if done[start.index()] {
            continue;
        }

        // Iterative DFS. Stack entry: (vertex, next successor position).
        let mut stack: Vec<(NodeIndex, usize)> = vec![(start, 0)];
        on_path[start.index()] = true;

        while let Some(&mut (node, ref mut next)) = stack.last_mut() {
            if *next >= succ[node.index()].len() {
                stack.pop();
                on_path[node.index()] = false;
                done[node.index()] = true;
                continue;
            }

            let child = succ[node.index()][*next];
            *next += 1;

            if on_path[child.index()] {
                // Back edge: remove it to break the cycle.
                removed_set.insert((node, child));
                if let (Some(from), Some(to)) = (graph.label(node), graph.label(child)) {
                    removed_edges.push((from.to_owned(), to.to_owned()));
                }
                continue;
            }

            if done[child.index()] {
                continue;
            }

            on_path[child.index()] = true;
            stack.push((child, 0));
        }
    }

    // Surviving edges: everything except self-loops and removed back edges.
    let mut kept: BTreeSet<(NodeIndex, NodeIndex)> = BTreeSet::new();
    for (i, targets) in succ.iter().enumerate() {
        let from = NodeIndex::new(i);
        for &to in targets {
            if !removed_set.contains(&(from, to)) {
                kept.insert((from, to));
            }
        }
    }

    CycleBreakOutcome {
        dag: graph.rebuild_with_edges(&kept),
        removed_edges,
        self_loops,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
