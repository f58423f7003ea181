//! Integration tests for `tred closure`.
#![allow(clippy::expect_used)]

use std::path::PathBuf;
use std::process::Command;

/// Path to the compiled `tred` binary.
fn tred_bin() -> PathBuf {
    let mut path = std::env::current_exe().expect("current exe");
    path.pop();
    if path.ends_with("deps") {
        path.pop();
    }
    path.push("tred");
    path
}

/// Path to a shared fixture file.
fn fixture(name: &str) -> PathBuf {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("tests/fixtures");
    path.push(name);
    path
}

// ---------------------------------------------------------------------------
// closure: human mode
// ---------------------------------------------------------------------------

#[test]
fn closure_of_chain_exits_0() {
    let out = Command::new(tred_bin())
        .args(["closure", fixture("chain.txt").to_str().expect("path")])
        .output()
        .expect("run tred closure");
    assert!(out.status.success(), "exit code: {:?}", out.status.code());
}

#[test]
fn closure_of_chain_adds_shortcut_edge() {
    let out = Command::new(tred_bin())
        .args(["closure", fixture("chain.txt").to_str().expect("path")])
        .output()
        .expect("run tred closure");
    let stdout = String::from_utf8_lossy(&out.stdout);
    // a -> b -> c, so the closure gains a -> c.
    assert!(stdout.contains("a -> b c"), "stdout: {stdout}");
    assert!(stdout.contains("b -> c"), "stdout: {stdout}");
}

#[test]
fn closure_of_cycle_gives_every_vertex_every_edge() {
    let out = Command::new(tred_bin())
        .args(["closure", fixture("cycle.txt").to_str().expect("path")])
        .output()
        .expect("run tred closure");
    let stdout = String::from_utf8_lossy(&out.stdout);
    // On a 3-cycle every vertex reaches every vertex, itself included.
    assert!(stdout.contains("a -> a b c"), "stdout: {stdout}");
    assert!(stdout.contains("b -> a b c"), "stdout: {stdout}");
    assert!(stdout.contains("c -> a b c"), "stdout: {stdout}");
}

// ---------------------------------------------------------------------------
// closure: input formats
// ---------------------------------------------------------------------------

#[test]
fn closure_accepts_json_input() {
    let out = Command::new(tred_bin())
        .args(["closure", fixture("triangle.json").to_str().expect("path")])
        .output()
        .expect("run tred closure");
    assert!(out.status.success(), "exit code: {:?}", out.status.code());
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("a -> b c"), "stdout: {stdout}");
}

#[test]
fn closure_accepts_matrix_input() {
    let out = Command::new(tred_bin())
        .args(["closure", fixture("cyclic-6.txt").to_str().expect("path")])
        .output()
        .expect("run tred closure");
    assert!(out.status.success(), "exit code: {:?}", out.status.code());
}

// ---------------------------------------------------------------------------
// closure: JSON output
// ---------------------------------------------------------------------------

#[test]
fn closure_json_output_is_valid_json() {
    let out = Command::new(tred_bin())
        .args([
            "closure",
            fixture("chain.txt").to_str().expect("path"),
            "--format",
            "json",
        ])
        .output()
        .expect("run tred closure");
    let stdout = String::from_utf8_lossy(&out.stdout);
    let value: serde_json::Value = serde_json::from_str(&stdout).expect("valid JSON");
    assert!(value.get("vertices").is_some(), "stdout: {stdout}");
    assert!(value.get("edges").is_some(), "stdout: {stdout}");
}

// ---------------------------------------------------------------------------
// closure: failures
// ---------------------------------------------------------------------------

#[test]
fn closure_of_malformed_input_exits_2() {
    let out = Command::new(tred_bin())
        .args(["closure", fixture("malformed.txt").to_str().expect("path")])
        .output()
        .expect("run tred closure");
    assert_eq!(out.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("error:"), "stderr: {stderr}");
}

#[test]
fn closure_of_missing_file_exits_2() {
    let out = Command::new(tred_bin())
        .args(["closure", "/no/such/file.txt"])
        .output()
        .expect("run tred closure");
    assert_eq!(out.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("not found"), "stderr: {stderr}");
}
