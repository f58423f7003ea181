/// Parsers for the three graph description formats.
///
/// Every parser yields a [`GraphDoc`]; normalization (duplicate collapse,
/// endpoint filtering) is construction's job, not parsing's.
///
/// # Formats
///
/// **Edge-list text** — line-oriented, two record kinds:
/// ```text
/// V a
/// V b
/// E a b
/// ```
/// Blank lines are ignored. Any other record fails with
/// [`ParseError::MalformedRecord`].
///
/// **Matrix text** — header `numVertices numEdges`, then one `from to` line
/// per edge in **1-based** vertex numbering:
/// ```text
/// 3 2
/// 1 2
/// 2 3
/// ```
/// Vertices are labeled `"1"…"V"`. The 1-based→0-based translation happens
/// here and nowhere else.
///
/// **JSON** — a serialized [`GraphDoc`].
use crate::doc::GraphDoc;

// ---------------------------------------------------------------------------
// Error type
// ---------------------------------------------------------------------------

/// Errors from parsing a graph description.
#[derive(Debug)]
pub enum ParseError {
    /// A line did not match any record kind the format defines.
    MalformedRecord {
        /// 1-based line number.
        line: usize,
        /// The offending line, trimmed.
        content: String,
    },
    /// The matrix header was missing or did not read as two counts.
    MalformedHeader {
        /// 1-based line number.
        line: usize,
        /// The offending line, trimmed.
        content: String,
    },
    /// A matrix edge referenced a vertex number outside `1..=numVertices`.
    VertexOutOfRange {
        /// 1-based line number.
        line: usize,
        /// The out-of-range vertex number as written.
        vertex: usize,
        /// The declared vertex count.
        max: usize,
    },
    /// The matrix body ended before `numEdges` edge records were read.
    MissingEdges {
        /// Edges declared in the header.
        declared: usize,
        /// Edges actually present.
        found: usize,
    },
    /// The input was not a valid JSON [`GraphDoc`].
    Json(serde_json::Error),
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseError::MalformedRecord { line, content } => {
                write!(f, "line {line}: malformed record: {content:?}")
            }
            ParseError::MalformedHeader { line, content } => {
                write!(f, "line {line}: expected `numVertices numEdges` header, got {content:?}")
            }
            ParseError::VertexOutOfRange { line, vertex, max } => {
                write!(f, "line {line}: vertex {vertex} out of range 1..={max}")
            }
            ParseError::MissingEdges { declared, found } => {
                write!(f, "matrix body ended early: {found} of {declared} declared edges")
            }
            ParseError::Json(e) => write!(f, "invalid JSON graph document: {e}"),
        }
    }
}

impl std::error::Error for ParseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ParseError::Json(e) => Some(e),
            ParseError::MalformedRecord { .. }
            | ParseError::MalformedHeader { .. }
            | ParseError::VertexOutOfRange { .. }
            | ParseError::MissingEdges { .. } => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Edge-list text
// ---------------------------------------------------------------------------

/// Parses the `V <label>` / `E <from> <to>` edge-list format.
///
/// An `E` record may reference labels declared later in the file; ordering
/// between record kinds is not significant.
///
/// # Errors
///
/// [`ParseError::MalformedRecord`] for any non-blank line that is not a
/// well-formed `V` or `E` record.
pub fn parse_edge_list(input: &str) -> Result<GraphDoc, ParseError> {
    let mut doc = GraphDoc::default();

    for (line_no, raw) in input.lines().enumerate() {
        let line = line_no + 1;
        let mut tokens = raw.split_whitespace();
        match tokens.next() {
            None => {} // blank line
            Some("V") => match (tokens.next(), tokens.next()) {
                (Some(label), None) => doc.vertices.push(label.to_owned()),
                _ => return Err(malformed(line, raw)),
            },
            Some("E") => match (tokens.next(), tokens.next(), tokens.next()) {
                (Some(from), Some(to), None) => doc.edges.push((from.to_owned(), to.to_owned())),
                _ => return Err(malformed(line, raw)),
            },
            Some(_) => return Err(malformed(line, raw)),
        }
    }

    Ok(doc)
}

fn malformed(line: usize, raw: &str) -> ParseError {
    ParseError::MalformedRecord {
        line,
        content: raw.trim().to_owned(),
    }
}

// ---------------------------------------------------------------------------
// Matrix text
// ---------------------------------------------------------------------------

/// Parses the 1-based matrix format into a [`GraphDoc`] labeled `"1"…"V"`.
///
/// # Errors
///
/// - [`ParseError::MalformedHeader`] — first non-blank line is not two
///   counts.
/// - [`ParseError::MalformedRecord`] — an edge line is not two numbers.
/// - [`ParseError::VertexOutOfRange`] — an endpoint outside
///   `1..=numVertices`.
/// - [`ParseError::MissingEdges`] — fewer edge lines than the header
///   declares.
pub fn parse_matrix(input: &str) -> Result<GraphDoc, ParseError> {
    let mut lines = input
        .lines()
        .enumerate()
        .map(|(i, l)| (i + 1, l))
        .filter(|(_, l)| !l.trim().is_empty());

    let Some((header_line, header)) = lines.next() else {
        return Err(ParseError::MalformedHeader {
            line: 1,
            content: String::new(),
        });
    };

    let (num_vertices, num_edges) =
        parse_pair(header).ok_or_else(|| ParseError::MalformedHeader {
            line: header_line,
            content: header.trim().to_owned(),
        })?;

    let vertices: Vec<String> = (1..=num_vertices).map(|i| i.to_string()).collect();
    let mut edges: Vec<(String, String)> = Vec::with_capacity(num_edges);

    for (line, raw) in lines.by_ref().take(num_edges) {
        let (from, to) = parse_pair(raw).ok_or_else(|| malformed(line, raw))?;
        for endpoint in [from, to] {
            if endpoint == 0 || endpoint > num_vertices {
                return Err(ParseError::VertexOutOfRange {
                    line,
                    vertex: endpoint,
                    max: num_vertices,
                });
            }
        }
        // 1-based on the wire; the internal labels are the 1-based numbers
        // themselves, so no further translation is needed downstream.
        edges.push((from.to_string(), to.to_string()));
    }

    if edges.len() < num_edges {
        return Err(ParseError::MissingEdges {
            declared: num_edges,
            found: edges.len(),
        });
    }

    Ok(GraphDoc { vertices, edges })
}

/// Parses a line of exactly two non-negative integers.
fn parse_pair(raw: &str) -> Option<(usize, usize)> {
    let mut tokens = raw.split_whitespace();
    let a: usize = tokens.next()?.parse().ok()?;
    let b: usize = tokens.next()?.parse().ok()?;
    if tokens.next().is_some() {
        return None;
    }
    Some((a, b))
}

// ---------------------------------------------------------------------------
// JSON
// ---------------------------------------------------------------------------

/// Parses a JSON-serialized [`GraphDoc`].
///
/// # Errors
///
/// [`ParseError::Json`] for any deserialization failure.
pub fn parse_json(input: &str) -> Result<GraphDoc, ParseError> {
    serde_json::from_str(input).map_err(ParseError::Json)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used)]

    use super::*;

    // ── edge-list ───────────────────────────────────────────────────────────

    #[test]
    fn edge_list_basic() {
        let doc = parse_edge_list("V a\nV b\nE a b\n").expect("valid input");
        assert_eq!(doc.vertices, vec!["a", "b"]);
        assert_eq!(doc.edges, vec![("a".to_owned(), "b".to_owned())]);
    }

    #[test]
    fn edge_list_ignores_blank_lines() {
        let doc = parse_edge_list("\nV a\n\n\nV b\nE a b\n\n").expect("valid input");
        assert_eq!(doc.vertices.len(), 2);
        assert_eq!(doc.edges.len(), 1);
    }

    #[test]
    fn edge_list_allows_forward_references() {
        let doc = parse_edge_list("E a b\nV a\nV b\n").expect("valid input");
        assert_eq!(doc.edges.len(), 1);
    }

    #[test]
    fn edge_list_rejects_unknown_record_kind() {
        let err = parse_edge_list("V a\nX what\n").expect_err("must fail");
        assert!(
            matches!(
                &err,
                ParseError::MalformedRecord { line: 2, content } if content == "X what"
            ),
            "got {err:?}"
        );
    }

    #[test]
    fn edge_list_rejects_truncated_edge_record() {
        assert!(parse_edge_list("E a\n").is_err());
    }

    #[test]
    fn edge_list_rejects_overlong_vertex_record() {
        assert!(parse_edge_list("V a b\n").is_err());
    }

    #[test]
    fn empty_input_is_an_empty_document() {
        let doc = parse_edge_list("").expect("valid input");
        assert!(doc.vertices.is_empty());
        assert!(doc.edges.is_empty());
    }

    // ── matrix ──────────────────────────────────────────────────────────────

    #[test]
    fn matrix_basic_with_one_based_translation() {
        let doc = parse_matrix("3 2\n1 2\n2 3\n").expect("valid input");
        assert_eq!(doc.vertices, vec!["1", "2", "3"]);
        assert_eq!(
            doc.edges,
            vec![
                ("1".to_owned(), "2".to_owned()),
                ("2".to_owned(), "3".to_owned()),
            ]
        );
    }

    #[test]
    fn matrix_rejects_zero_endpoint() {
        let err = parse_matrix("2 1\n0 1\n").expect_err("must fail");
        assert!(
            matches!(err, ParseError::VertexOutOfRange { vertex: 0, max: 2, .. }),
            "got {err:?}"
        );
    }

    #[test]
    fn matrix_rejects_endpoint_above_vertex_count() {
        assert!(parse_matrix("2 1\n1 3\n").is_err());
    }

    #[test]
    fn matrix_rejects_bad_header() {
        assert!(parse_matrix("three two\n").is_err());
        assert!(parse_matrix("").is_err());
    }

    #[test]
    fn matrix_rejects_short_body() {
        let err = parse_matrix("3 2\n1 2\n").expect_err("must fail");
        assert!(
            matches!(err, ParseError::MissingEdges { declared: 2, found: 1 }),
            "got {err:?}"
        );
    }

    #[test]
    fn matrix_round_trips_through_graph() {
        let doc = parse_matrix("3 3\n1 2\n2 3\n1 3\n").expect("valid input");
        let g = crate::graph::build_graph(&doc);
        assert_eq!(g.vertex_count(), 3);
        assert_eq!(g.edge_count(), 3);
    }

    // ── json ────────────────────────────────────────────────────────────────

    #[test]
    fn json_round_trip() {
        let doc = GraphDoc::from_parts(&["a", "b"], &[("a", "b")]);
        let text = serde_json::to_string(&doc).expect("serializable");
        let back = parse_json(&text).expect("valid JSON");
        assert_eq!(doc, back);
    }

    #[test]
    fn json_rejects_garbage() {
        assert!(parse_json("not json").is_err());
        assert!(parse_json("{\"vertices\": 3}").is_err());
    }
}
