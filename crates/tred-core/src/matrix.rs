/// Dense boolean adjacency-matrix view of a [`TredGraph`].
///
/// The sparse label-keyed graph and this dense 0-indexed matrix are two
/// views of the same entity: [`AdjMatrix::from_graph`] fixes an index→label
/// table (ascending node-index order) and [`AdjMatrix::to_graph`] converts
/// back, round-tripping exactly because built graphs never hold parallel
/// edges. All matrix input starts 0-indexed; the 1-indexed matrix file
/// format is translated at the parse boundary, nowhere else.
///
/// Binary operations ([`union`](AdjMatrix::union),
/// [`difference`](AdjMatrix::difference),
/// [`path_counts`](AdjMatrix::path_counts)) fail with
/// [`MatrixError::DimensionMismatch`] on differently-sized operands rather
/// than truncating or padding.
use crate::doc::GraphDoc;
use crate::graph::{TredGraph, build_graph};

// ---------------------------------------------------------------------------
// Error type
// ---------------------------------------------------------------------------

/// Errors from matrix-level operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatrixError {
    /// Two matrices passed to a binary operation have different sizes.
    DimensionMismatch {
        /// Size (vertex count) of the left operand.
        left: usize,
        /// Size (vertex count) of the right operand.
        right: usize,
    },
    /// The label table handed to [`AdjMatrix::to_graph`] does not cover the
    /// matrix dimension.
    LabelCountMismatch {
        /// Matrix size.
        size: usize,
        /// Number of labels supplied.
        labels: usize,
    },
}

impl std::fmt::Display for MatrixError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MatrixError::DimensionMismatch { left, right } => {
                write!(f, "matrix dimension mismatch: {left}x{left} vs {right}x{right}")
            }
            MatrixError::LabelCountMismatch { size, labels } => {
                write!(f, "label table has {labels} entries for a {size}x{size} matrix")
            }
        }
    }
}

impl std::error::Error for MatrixError {}

// ---------------------------------------------------------------------------
// AdjMatrix
// ---------------------------------------------------------------------------

/// A V×V boolean matrix in row-major order.
///
/// `cells[i * size + j]` is `true` iff the edge (or relation) `i → j` holds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdjMatrix {
    size: usize,
    cells: Vec<bool>,
}

impl AdjMatrix {
    /// Creates an all-false matrix of the given size.
    pub fn new(size: usize) -> Self {
        AdjMatrix {
            size,
            cells: vec![false; size * size],
        }
    }

    /// Returns the matrix dimension (vertex count).
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns the cell `(i, j)`.
    pub fn get(&self, i: usize, j: usize) -> bool {
        self.cells[i * self.size + j]
    }

    /// Sets the cell `(i, j)`.
    pub fn set(&mut self, i: usize, j: usize, value: bool) {
        self.cells[i * self.size + j] = value;
    }

    /// Returns the number of set cells (edge count for an adjacency matrix).
    pub fn count_ones(&self) -> usize {
        self.cells.iter().filter(|&&c| c).count()
    }

    /// Builds the dense view of `graph` together with its index→label table.
    ///
    /// Row/column `i` corresponds to the vertex at [`NodeIndex`] `i`; the
    /// returned label table is in the same order, so
    /// `to_graph(&labels)` round-trips exactly.
    pub fn from_graph(graph: &TredGraph) -> (AdjMatrix, Vec<String>) {
        let n = graph.vertex_count();
        let mut matrix = AdjMatrix::new(n);
        let mut labels: Vec<String> = Vec::with_capacity(n);

        for idx in graph.node_indices() {
            if let Some(label) = graph.label(idx) {
                labels.push(label.to_owned());
            }
            for succ in graph.successors(idx) {
                matrix.set(idx.index(), succ.index(), true);
            }
        }

        (matrix, labels)
    }

    /// Converts the matrix back into a sparse labeled graph.
    ///
    /// `labels[i]` names row/column `i`.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::LabelCountMismatch`] if the label table does
    /// not have exactly one entry per row.
    pub fn to_graph(&self, labels: &[String]) -> Result<TredGraph, MatrixError> {
        if labels.len() != self.size {
            return Err(MatrixError::LabelCountMismatch {
                size: self.size,
                labels: labels.len(),
            });
        }

        let mut edges: Vec<(String, String)> = Vec::new();
        for i in 0..self.size {
            for j in 0..self.size {
                if self.get(i, j) {
                    edges.push((labels[i].clone(), labels[j].clone()));
                }
            }
        }

        Ok(build_graph(&GraphDoc {
            vertices: labels.to_vec(),
            edges,
        }))
    }

    /// Floyd-Warshall transitive closure:
    /// `reach[i][j] |= reach[i][k] && reach[k][j]` over every intermediate
    /// `k` in ascending order. O(V³).
    ///
    /// The diagonal is not seeded, so `closure[i][i]` is set only when `i`
    /// lies on a directed cycle.
    pub fn transitive_closure(&self) -> AdjMatrix {
        let n = self.size;
        let mut reach = self.clone();
        for k in 0..n {
            for i in 0..n {
                if !reach.get(i, k) {
                    continue;
                }
                for j in 0..n {
                    if reach.get(k, j) {
                        reach.set(i, j, true);
                    }
                }
            }
        }
        reach
    }

    /// Cell-wise boolean OR of two same-sized matrices.
    ///
    /// # Errors
    ///
    /// [`MatrixError::DimensionMismatch`] if the sizes differ.
    pub fn union(&self, other: &AdjMatrix) -> Result<AdjMatrix, MatrixError> {
        self.check_size(other)?;
        let mut out = self.clone();
        for (cell, &o) in out.cells.iter_mut().zip(other.cells.iter()) {
            *cell = *cell || o;
        }
        Ok(out)
    }

    /// Cells set in `self` and clear in `other`.
    ///
    /// # Errors
    ///
    /// [`MatrixError::DimensionMismatch`] if the sizes differ.
    pub fn difference(&self, other: &AdjMatrix) -> Result<AdjMatrix, MatrixError> {
        self.check_size(other)?;
        let mut out = AdjMatrix::new(self.size);
        for (i, (&a, &b)) in self.cells.iter().zip(other.cells.iter()).enumerate() {
            out.cells[i] = a && !b;
        }
        Ok(out)
    }

    /// Integer matrix product treating cells as 0/1.
    ///
    /// `result[i][j]` counts the intermediates `k` with `self[i][k]` and
    /// `other[k][j]` both set. The reduction engine uses this with the
    /// closure's incidence pattern as `other` to count length-≥2 paths.
    ///
    /// # Errors
    ///
    /// [`MatrixError::DimensionMismatch`] if the sizes differ.
    pub fn path_counts(&self, other: &AdjMatrix) -> Result<CountMatrix, MatrixError> {
        self.check_size(other)?;
        let n = self.size;
        let mut counts = CountMatrix::new(n);
        for i in 0..n {
            for k in 0..n {
                if !self.get(i, k) {
                    continue;
                }
                for j in 0..n {
                    if other.get(k, j) {
                        counts.cells[i * n + j] += 1;
                    }
                }
            }
        }
        Ok(counts)
    }

    /// Clears the main diagonal, returning the new matrix and the row
    /// indices whose diagonal cell was set (the self-loop vertices).
    pub fn strip_diagonal(&self) -> (AdjMatrix, Vec<usize>) {
        let mut out = self.clone();
        let mut stripped = Vec::new();
        for i in 0..self.size {
            if out.get(i, i) {
                out.set(i, i, false);
                stripped.push(i);
            }
        }
        (out, stripped)
    }

    fn check_size(&self, other: &AdjMatrix) -> Result<(), MatrixError> {
        if self.size == other.size {
            Ok(())
        } else {
            Err(MatrixError::DimensionMismatch {
                left: self.size,
                right: other.size,
            })
        }
    }
}

/// Builds an [`AdjMatrix`] directly from index pairs. Test and parse helper.
pub fn matrix_from_edges(size: usize, edges: &[(usize, usize)]) -> AdjMatrix {
    let mut m = AdjMatrix::new(size);
    for &(i, j) in edges {
        m.set(i, j, true);
    }
    m
}

// ---------------------------------------------------------------------------
// CountMatrix
// ---------------------------------------------------------------------------

/// A V×V matrix of path counts produced by [`AdjMatrix::path_counts`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountMatrix {
    size: usize,
    cells: Vec<u32>,
}

impl CountMatrix {
    fn new(size: usize) -> Self {
        CountMatrix {
            size,
            cells: vec![0; size * size],
        }
    }

    /// Returns the matrix dimension.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns the count at `(i, j)`.
    pub fn get(&self, i: usize, j: usize) -> u32 {
        self.cells[i * self.size + j]
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
