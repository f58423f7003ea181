//! Property-based algebraic tests for closure, cycle breaking, and
//! reduction.
//!
//! Verifies the crate's core invariants over `proptest`-generated graphs
//! (1-10 vertices, 0-40 candidate edges): closure idempotence, the
//! cycle-breaker's partition and acyclicity postconditions, the
//! reduction/closure equivalence, edge minimality, and agreement between
//! the two reduction algorithms.
#![allow(clippy::expect_used)]

use proptest::prelude::*;
use tred_core::{
    GraphDoc, TredGraph, break_cycles, build_graph, closure, graphs_equal, is_acyclic,
    reduce_via_closure, reduce_via_incidence,
};

const MAX_VERTICES: usize = 10;

/// Builds a graph over vertices `v0..v{n}` from candidate index pairs,
/// discarding pairs that fall outside `0..n`.
fn graph_from_pairs(n: usize, pairs: &[(usize, usize)]) -> TredGraph {
    let vertices: Vec<String> = (0..n).map(|i| format!("v{i}")).collect();
    let edges: Vec<(String, String)> = pairs
        .iter()
        .filter(|(a, b)| *a < n && *b < n)
        .map(|(a, b)| (format!("v{a}"), format!("v{b}")))
        .collect();
    build_graph(&GraphDoc { vertices, edges })
}

/// An arbitrary directed graph, cycles and self-loops allowed.
fn arb_digraph() -> impl Strategy<Value = TredGraph> {
    (1..=MAX_VERTICES, prop::collection::vec((0..MAX_VERTICES, 0..MAX_VERTICES), 0..40))
        .prop_map(|(n, pairs)| graph_from_pairs(n, &pairs))
}

/// An arbitrary DAG: candidate pairs are oriented low→high index, so no
/// cycle can form.
fn arb_dag() -> impl Strategy<Value = TredGraph> {
    (1..=MAX_VERTICES, prop::collection::vec((0..MAX_VERTICES, 0..MAX_VERTICES), 0..40))
        .prop_map(|(n, pairs)| {
            let oriented: Vec<(usize, usize)> = pairs
                .into_iter()
                .filter(|(a, b)| a != b)
                .map(|(a, b)| (a.min(b), a.max(b)))
                .collect();
            graph_from_pairs(n, &oriented)
        })
}

proptest! {
    /// closure(closure(g)) == closure(g) for every graph, cyclic or not.
    #[test]
    fn closure_is_idempotent(g in arb_digraph()) {
        let once = closure(&g);
        let twice = closure(&once);
        prop_assert!(graphs_equal(&once, &twice));
    }

    /// The cycle breaker always yields an acyclic graph, and its kept and
    /// removed edges partition the input's loopless edge set.
    #[test]
    fn cycle_breaker_postconditions(g in arb_digraph()) {
        let outcome = break_cycles(&g);
        prop_assert!(is_acyclic(&outcome.dag));

        let mut reunion = outcome.dag.edge_pairs();
        for edge in &outcome.removed_edges {
            prop_assert!(!reunion.contains(edge), "edge {edge:?} both kept and removed");
            reunion.insert(edge.clone());
        }
        let loopless: std::collections::BTreeSet<(String, String)> = g
            .edge_pairs()
            .into_iter()
            .filter(|(u, v)| u != v)
            .collect();
        prop_assert_eq!(reunion, loopless);
    }

    /// Breaking an already-acyclic graph removes nothing.
    #[test]
    fn cycle_breaker_is_identity_on_dags(g in arb_dag()) {
        let outcome = break_cycles(&g);
        prop_assert!(outcome.removed_edges.is_empty());
        prop_assert!(graphs_equal(&outcome.dag, &g));
    }

    /// closure(reduction(g)) == closure(g) for acyclic g, both algorithms.
    #[test]
    fn reduction_preserves_closure(g in arb_dag()) {
        let expected = closure(&g);
        let by_closure = reduce_via_closure(&g);
        prop_assert!(graphs_equal(&closure(&by_closure.graph), &expected));
        let by_incidence = reduce_via_incidence(&g);
        prop_assert!(graphs_equal(&closure(&by_incidence.graph), &expected));
    }

    /// On a DAG the two reduction algorithms keep exactly the same edges.
    #[test]
    fn reduction_algorithms_agree(g in arb_dag()) {
        let by_closure = reduce_via_closure(&g);
        let by_incidence = reduce_via_incidence(&g);
        prop_assert!(graphs_equal(&by_closure.graph, &by_incidence.graph));
    }

    /// No edge of the reduction is itself redundant: removing any one edge
    /// strictly shrinks the closure.
    #[test]
    fn reduction_is_minimal(g in arb_dag()) {
        let reduction = reduce_via_closure(&g);
        let reduced_closure = closure(&reduction.graph);

        for dropped in reduction.graph.edge_pairs() {
            let remaining: Vec<(String, String)> = reduction
                .graph
                .edge_pairs()
                .into_iter()
                .filter(|e| *e != dropped)
                .collect();
            let weakened = build_graph(&GraphDoc {
                vertices: reduction.graph.vertex_labels().into_iter().collect(),
                edges: remaining,
            });
            prop_assert!(
                !graphs_equal(&closure(&weakened), &reduced_closure),
                "edge {:?} was removable after reduction", dropped
            );
        }
    }

    /// Full pipeline on arbitrary (possibly cyclic) input: break cycles,
    /// reduce, and check equivalence against the acyclic intermediate.
    #[test]
    fn pipeline_preserves_dag_closure(g in arb_digraph()) {
        let outcome = break_cycles(&g);
        let expected = closure(&outcome.dag);
        let reduction = reduce_via_closure(&outcome.dag);
        prop_assert!(graphs_equal(&closure(&reduction.graph), &expected));
    }
}
