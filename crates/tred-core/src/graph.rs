/// Graph construction from a [`GraphDoc`] using `petgraph`.
///
/// This module wraps a `StableDiGraph` with string vertex labels, builds it
/// from an in-memory [`GraphDoc`], and exposes the accessors the traversal
/// and reduction algorithms need.
///
/// # Normalization During Construction
///
/// [`build_graph`] runs two passes over the document:
/// 1. **Vertex pass** — inserts every label into the `StableDiGraph` and
///    records the `label → NodeIndex` mapping. Duplicate labels are
///    collapsed to the first occurrence.
/// 2. **Edge pass** — resolves endpoint labels and inserts edges. Edges
///    whose endpoints are not in the vertex set are dropped, and parallel
///    edges are collapsed, so the edge relation is a set.
///
/// The `label ↔ NodeIndex` mapping is fixed at construction and never
/// changes afterwards; no vertex is ever removed from a built graph, so
/// indices are dense in `0..vertex_count`.
use std::collections::{BTreeSet, HashMap};

use petgraph::stable_graph::{NodeIndex, StableDiGraph};
use petgraph::visit::{EdgeRef, IntoEdgeReferences};

use crate::doc::GraphDoc;

pub mod closure;
pub mod cycles;
pub mod queries;
pub mod reduction;

// ---------------------------------------------------------------------------
// TredGraph
// ---------------------------------------------------------------------------

/// A directed graph with string-labeled vertices and unweighted edges.
///
/// Wraps a `petgraph` [`StableDiGraph`] and maintains a
/// `HashMap<String, NodeIndex>` for O(1) lookup of vertices by label.
/// Values of this type are immutable once built: the cycle breaker, closure
/// engine, and reduction engine all produce new owned graphs rather than
/// mutating their input.
///
/// Construct with [`build_graph`].
#[derive(Debug, Clone)]
pub struct TredGraph {
    graph: StableDiGraph<String, ()>,
    id_to_index: HashMap<String, NodeIndex>,
}

impl TredGraph {
    /// Returns the number of vertices in the graph.
    pub fn vertex_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Returns the number of directed edges in the graph.
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Looks up the [`NodeIndex`] for a vertex label.
    ///
    /// Returns `None` if no vertex with that label exists.
    pub fn node_index(&self, label: &str) -> Option<NodeIndex> {
        self.id_to_index.get(label).copied()
    }

    /// Returns the label for the given index, or `None` if the index is out
    /// of bounds.
    pub fn label(&self, idx: NodeIndex) -> Option<&str> {
        self.graph.node_weight(idx).map(String::as_str)
    }

    /// Returns all vertex indices in ascending index order.
    ///
    /// Ascending index order is the canonical traversal order throughout
    /// this crate; it equals the declaration order of the vertex list.
    pub fn node_indices(&self) -> Vec<NodeIndex> {
        let mut indices: Vec<NodeIndex> = self.graph.node_indices().collect();
        indices.sort();
        indices
    }

    /// Returns the successors of `node` in ascending index order.
    pub fn successors(&self, node: NodeIndex) -> Vec<NodeIndex> {
        let mut out: Vec<NodeIndex> = self.graph.edges(node).map(|e| e.target()).collect();
        out.sort();
        out
    }

    /// Returns `true` if the edge `from → to` is present.
    pub fn contains_edge(&self, from: NodeIndex, to: NodeIndex) -> bool {
        self.graph.find_edge(from, to).is_some()
    }

    /// Returns the vertex label set.
    pub fn vertex_labels(&self) -> BTreeSet<String> {
        self.graph.node_weights().cloned().collect()
    }

    /// Returns the edge set as sorted `(from, to)` label pairs.
    pub fn edge_pairs(&self) -> BTreeSet<(String, String)> {
        self.graph
            .edge_references()
            .filter_map(|e| {
                let from = self.label(e.source())?;
                let to = self.label(e.target())?;
                Some((from.to_owned(), to.to_owned()))
            })
            .collect()
    }

    /// Returns a reference to the underlying [`StableDiGraph`] for use by
    /// traversal algorithms.
    pub fn graph(&self) -> &StableDiGraph<String, ()> {
        &self.graph
    }

    /// Builds a new graph over the same vertex/index space with exactly the
    /// given edge set.
    ///
    /// Because vertices are never removed, indices are dense and insertion
    /// order reproduces them exactly, so [`NodeIndex`] values from `self`
    /// remain valid in the returned graph.
    pub(crate) fn rebuild_with_edges(&self, edges: &BTreeSet<(NodeIndex, NodeIndex)>) -> TredGraph {
        let mut graph: StableDiGraph<String, ()> =
            StableDiGraph::with_capacity(self.vertex_count(), edges.len());
        let mut id_to_index: HashMap<String, NodeIndex> =
            HashMap::with_capacity(self.vertex_count());

        for idx in self.node_indices() {
            if let Some(label) = self.label(idx) {
                let new_idx = graph.add_node(label.to_owned());
                id_to_index.insert(label.to_owned(), new_idx);
            }
        }

        for &(from, to) in edges {
            graph.add_edge(from, to, ());
        }

        TredGraph { graph, id_to_index }
    }
}

// ---------------------------------------------------------------------------
// Construction
// ---------------------------------------------------------------------------

/// Constructs a [`TredGraph`] from a [`GraphDoc`].
///
/// Construction is O(V + E).
///
/// Duplicate vertex labels are collapsed, edges referencing labels absent
/// from the vertex list are silently dropped (upstream parsing guarantees
/// well-formed endpoints; this is a defensive no-op, not a failure mode),
/// and parallel edges are collapsed. Self-loops are retained — stripping
/// them is the cycle breaker's job, not construction's.
pub fn build_graph(doc: &GraphDoc) -> TredGraph {
    let mut graph: StableDiGraph<String, ()> =
        StableDiGraph::with_capacity(doc.vertices.len(), doc.edges.len());
    let mut id_to_index: HashMap<String, NodeIndex> = HashMap::with_capacity(doc.vertices.len());

    // Pass 1: vertices, first occurrence wins.
    for label in &doc.vertices {
        if !id_to_index.contains_key(label) {
            let idx = graph.add_node(label.clone());
            id_to_index.insert(label.clone(), idx);
        }
    }

    // Pass 2: edges with known endpoints, deduplicated.
    for (from, to) in &doc.edges {
        let (Some(&from_idx), Some(&to_idx)) = (id_to_index.get(from), id_to_index.get(to)) else {
            continue;
        };
        if graph.find_edge(from_idx, to_idx).is_none() {
            graph.add_edge(from_idx, to_idx, ());
        }
    }

    TredGraph { graph, id_to_index }
}

// ---------------------------------------------------------------------------
// Comparison
// ---------------------------------------------------------------------------

/// Structural equality: identical vertex sets and, for every vertex,
/// identical successor sets, independent of declaration order.
///
/// Used for verification and testing only; no algorithm in this crate
/// branches on it.
pub fn graphs_equal(a: &TredGraph, b: &TredGraph) -> bool {
    a.vertex_labels() == b.vertex_labels() && a.edge_pairs() == b.edge_pairs()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
