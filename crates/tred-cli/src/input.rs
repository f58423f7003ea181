/// Input format detection and parsing.
///
/// Bridges the `--input` flag to the `tred-core` parsers. Auto-detection
/// looks only at the first non-blank content:
///
/// - `{` → JSON graph document
/// - a line whose first token is an integer → matrix format
///   (`numVertices numEdges` header)
/// - anything else → `V` / `E` edge-list records
use tred_core::{GraphDoc, parse_edge_list, parse_json, parse_matrix};

use crate::InputFormat;
use crate::error::CliError;

/// Parses `content` into a [`GraphDoc`] according to `format`.
///
/// # Errors
///
/// Returns [`CliError::ParseFailed`] (exit code 2) when the content does not
/// conform to the selected (or detected) format.
pub fn parse_graph(content: &str, format: InputFormat) -> Result<GraphDoc, CliError> {
    let resolved = match format {
        InputFormat::Auto => detect_format(content),
        InputFormat::EdgeList | InputFormat::Matrix | InputFormat::Json => format,
    };

    let result = match resolved {
        InputFormat::Json => parse_json(content),
        InputFormat::Matrix => parse_matrix(content),
        // Auto has been resolved above; treat it as edge-list defensively.
        InputFormat::EdgeList | InputFormat::Auto => parse_edge_list(content),
    };

    result.map_err(|e| CliError::ParseFailed {
        detail: e.to_string(),
    })
}

/// Picks a concrete format for `content` by inspecting its first non-blank
/// line. Never returns [`InputFormat::Auto`].
fn detect_format(content: &str) -> InputFormat {
    let Some(first) = content.lines().find(|l| !l.trim().is_empty()) else {
        // Empty input parses as an empty edge-list graph.
        return InputFormat::EdgeList;
    };
    let trimmed = first.trim_start();
    if trimmed.starts_with('{') {
        return InputFormat::Json;
    }
    let first_token = trimmed.split_whitespace().next().unwrap_or("");
    if first_token.parse::<usize>().is_ok() {
        return InputFormat::Matrix;
    }
    InputFormat::EdgeList
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
