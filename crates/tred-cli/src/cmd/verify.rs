//! Implementation of `tred verify <file>`.
//!
//! Runs the full break/reduce pipeline on the input and checks every
//! structural invariant the pipeline promises. Intended as a self-audit on
//! real inputs: if any check fails on a graph, that graph is a bug report.
//!
//! Checks:
//! 1. the cycle-breaking pass yields an acyclic graph
//! 2. kept and removed edges partition the loopless input edge set
//! 3. the transitive closure is idempotent
//! 4. closure-elimination reduction preserves the closure
//! 5. incidence-elimination reduction preserves the closure
//! 6. both reduction algorithms keep the same edges
//! 7. reduced plus redundant edges reconstruct the broken graph
//!
//! Output (human mode): one `ok`/`FAIL` line per check.
//! Output (JSON mode): `{"checks": [{"name", "passed"}, ...], "passed": bool}`.
//!
//! Exit codes: 0 = all checks hold, 1 = at least one failed,
//! 2 = read/parse failure.
use std::collections::BTreeSet;

use tred_core::{break_cycles, build_graph, closure, graphs_equal, is_acyclic,
    reduce_via_closure, reduce_via_incidence};

use crate::InputFormat;
use crate::OutputFormat;
use crate::error::CliError;
use crate::input::parse_graph;
use crate::render::stdout_error;

/// One named check outcome.
struct Check {
    name: &'static str,
    passed: bool,
}

/// Runs the `verify` command.
///
/// # Errors
///
/// - [`CliError`] exit code 2 if the content cannot be parsed.
/// - [`CliError::VerificationFailed`] (exit code 1) if any check fails.
pub fn run(content: &str, input: InputFormat, format: &OutputFormat) -> Result<(), CliError> {
    let doc = parse_graph(content, input)?;
    let graph = build_graph(&doc);
    let checks = run_checks(&graph);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    match format {
        OutputFormat::Human => print_human(&mut out, &checks),
        OutputFormat::Json => print_json(&mut out, &checks),
    }
    .map_err(stdout_error)?;

    let failed = checks.iter().filter(|c| !c.passed).count();
    if failed == 0 {
        Ok(())
    } else {
        Err(CliError::VerificationFailed { failed })
    }
}

/// Runs the pipeline on `graph` and evaluates every invariant.
fn run_checks(graph: &tred_core::TredGraph) -> Vec<Check> {
    let outcome = break_cycles(graph);
    let dag = &outcome.dag;

    let acyclic = is_acyclic(dag);

    let mut reunion = dag.edge_pairs();
    let mut disjoint = true;
    for edge in &outcome.removed_edges {
        if !reunion.insert(edge.clone()) {
            disjoint = false;
        }
    }
    let loopless: BTreeSet<(String, String)> = graph
        .edge_pairs()
        .into_iter()
        .filter(|(u, v)| u != v)
        .collect();
    let partition = disjoint && reunion == loopless;

    let closed = closure(dag);
    let idempotent = graphs_equal(&closure(&closed), &closed);

    let by_closure = reduce_via_closure(dag);
    let by_incidence = reduce_via_incidence(dag);
    let closure_preserved = graphs_equal(&closure(&by_closure.graph), &closed);
    let incidence_preserved = graphs_equal(&closure(&by_incidence.graph), &closed);
    let agree = graphs_equal(&by_closure.graph, &by_incidence.graph);

    let mut rebuilt = by_closure.graph.edge_pairs();
    for edge in &by_closure.redundant_edges {
        rebuilt.insert(edge.clone());
    }
    let reconstructs = rebuilt == dag.edge_pairs();

    vec![
        Check {
            name: "cycle break yields an acyclic graph",
            passed: acyclic,
        },
        Check {
            name: "kept and removed edges partition the input",
            passed: partition,
        },
        Check {
            name: "transitive closure is idempotent",
            passed: idempotent,
        },
        Check {
            name: "closure-elimination reduction preserves the closure",
            passed: closure_preserved,
        },
        Check {
            name: "incidence-elimination reduction preserves the closure",
            passed: incidence_preserved,
        },
        Check {
            name: "reduction algorithms agree",
            passed: agree,
        },
        Check {
            name: "reduced plus redundant edges reconstruct the graph",
            passed: reconstructs,
        },
    ]
}

/// Writes one line per check: `ok - <name>` or `FAIL - <name>`.
fn print_human<W: std::io::Write>(w: &mut W, checks: &[Check]) -> std::io::Result<()> {
    for check in checks {
        let tag = if check.passed { "ok" } else { "FAIL" };
        writeln!(w, "{tag} - {}", check.name)?;
    }
    Ok(())
}

/// Writes the check results as a single JSON object.
fn print_json<W: std::io::Write>(w: &mut W, checks: &[Check]) -> std::io::Result<()> {
    let entries: Vec<serde_json::Value> = checks
        .iter()
        .map(|c| {
            let mut obj = serde_json::Map::new();
            obj.insert(
                "name".to_owned(),
                serde_json::Value::String(c.name.to_owned()),
            );
            obj.insert("passed".to_owned(), serde_json::Value::Bool(c.passed));
            serde_json::Value::Object(obj)
        })
        .collect();

    let all_passed = checks.iter().all(|c| c.passed);
    let mut obj = serde_json::Map::new();
    obj.insert("checks".to_owned(), serde_json::Value::Array(entries));
    obj.insert("passed".to_owned(), serde_json::Value::Bool(all_passed));

    let json = serde_json::to_string_pretty(&serde_json::Value::Object(obj))
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
    writeln!(w, "{json}")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
