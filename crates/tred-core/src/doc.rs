/// The graph description document: a vertex list plus a directed edge list.
///
/// A [`GraphDoc`] is what every input format parses into and what
/// [`crate::graph::build_graph`] consumes. Labels are free-form strings;
/// the matrix input format produces the labels `"1"…"V"`.
use serde::{Deserialize, Serialize};

/// A parsed vertex/edge list.
///
/// The document is deliberately permissive: duplicate vertices, parallel
/// edges, and edges naming unknown vertices are all representable here and
/// are normalized away during graph construction, not during parsing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphDoc {
    /// Vertex labels, in declaration order.
    pub vertices: Vec<String>,
    /// Directed `(from, to)` edges, in declaration order.
    pub edges: Vec<(String, String)>,
}

impl GraphDoc {
    /// Builds a document from string-slice literals. Test and fixture helper.
    pub fn from_parts(vertices: &[&str], edges: &[(&str, &str)]) -> Self {
        GraphDoc {
            vertices: vertices.iter().map(|v| (*v).to_owned()).collect(),
            edges: edges
                .iter()
                .map(|(u, v)| ((*u).to_owned(), (*v).to_owned()))
                .collect(),
        }
    }
}
