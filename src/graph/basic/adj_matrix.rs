//! Dense adjacency-matrix storage for simple undirected graphs.
//!
//! The matrix is a row-major `V x V` bit grid kept symmetric on every
//! insertion. It is insert-only; the Euler builder copies any graph into an
//! [`AdjListGraph`](super::AdjListGraph) before it starts removing edges.
//!
//! ### Performance Characteristics
//! | Operation | Complexity | Notes |
//! |-----------|------------|-------|
//! | `insert` | \(O(1)\) | Sets both symmetric cells |
//! | `has_edge` | \(O(1)\) | Single cell lookup |
//! | `degree` | \(O(1)\) | Cached per vertex |
//! | `neighbors` | \(O(V)\) | Scans one row |
//! | space | \(O(V^2)\) | One `bool` per ordered pair |

use crate::error::GraphError;
use crate::graph::{Edge, UndirectedGraph};

/// A fixed-size undirected graph stored as a symmetric boolean matrix.
///
/// Self-loops and parallel edges are not representable: the lenient
/// [`insert`](Self::insert) ignores them and [`try_insert`](Self::try_insert)
/// reports them, so `degree(v)` always equals the number of set cells in row `v`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdjMatrixGraph {
    cells: Vec<bool>,
    degree: Vec<usize>,
    edge_count: usize,
}

impl AdjMatrixGraph {
    /// Creates a graph with `vertex_count` isolated vertices.
    pub fn new(vertex_count: usize) -> Self {
        Self {
            cells: vec![false; vertex_count * vertex_count],
            degree: vec![0; vertex_count],
            edge_count: 0,
        }
    }

    /// Creates a graph and inserts every edge leniently.
    pub fn from_edges<I, E>(vertex_count: usize, edges: I) -> Self
    where
        I: IntoIterator<Item = E>,
        E: Into<Edge>,
    {
        let mut graph = Self::new(vertex_count);
        for edge in edges {
            let Edge { u, v } = edge.into();
            graph.insert(u, v);
        }
        graph
    }

    #[inline(always)]
    fn n(&self) -> usize {
        self.degree.len()
    }

    #[inline(always)]
    fn cell(&self, u: usize, v: usize) -> bool {
        self.cells[u * self.n() + v]
    }

    #[inline(always)]
    fn set(&mut self, u: usize, v: usize) {
        let n = self.n();
        self.cells[u * n + v] = true;
    }

    /// Inserts `{u, v}`, silently ignoring out-of-range ids, self-loops, and
    /// edges that are already present.
    pub fn insert(&mut self, u: usize, v: usize) {
        // Lenient: rejected edges are dropped.
        self.try_insert(u, v).ok();
    }

    /// Inserts `{u, v}`, reporting why the edge was rejected.
    ///
    /// # Errors
    /// - [`GraphError::VertexOutOfRange`] if an endpoint is not a vertex
    /// - [`GraphError::SelfLoop`] if `u == v`
    /// - [`GraphError::DuplicateEdge`] if the edge already exists
    pub fn try_insert(&mut self, u: usize, v: usize) -> Result<(), GraphError> {
        GraphError::check_endpoints(u, v, self.n())?;
        if u == v {
            return Err(GraphError::SelfLoop { vertex: u });
        }
        if self.cell(u, v) {
            return Err(GraphError::DuplicateEdge { u, v });
        }
        self.set(u, v);
        self.set(v, u);
        self.degree[u] += 1;
        self.degree[v] += 1;
        self.edge_count += 1;
        Ok(())
    }

    /// Returns `true` if `{u, v}` is stored. Out-of-range ids yield `false`.
    #[inline]
    pub fn has_edge(&self, u: usize, v: usize) -> bool {
        u < self.n() && v < self.n() && self.cell(u, v)
    }
}

impl UndirectedGraph for AdjMatrixGraph {
    type Neighbors<'a> = MatrixNeighbors<'a>;

    #[inline]
    fn vertex_count(&self) -> usize {
        self.n()
    }

    #[inline]
    fn edge_count(&self) -> usize {
        self.edge_count
    }

    #[inline]
    fn degree(&self, vertex: usize) -> usize {
        self.degree.get(vertex).copied().unwrap_or(0)
    }

    fn neighbors(&self, vertex: usize) -> MatrixNeighbors<'_> {
        let n = self.n();
        let row: &[bool] = if vertex < n {
            &self.cells[vertex * n..(vertex + 1) * n]
        } else {
            &[]
        };
        MatrixNeighbors { row, idx: 0 }
    }
}

/// Iterator over the set cells of one matrix row, in increasing vertex order.
pub struct MatrixNeighbors<'a> {
    row: &'a [bool],
    idx: usize,
}

impl Iterator for MatrixNeighbors<'_> {
    type Item = usize;

    #[inline]
    fn next(&mut self) -> Option<usize> {
        while self.idx < self.row.len() {
            let w = self.idx;
            self.idx += 1;
            if self.row[w] {
                return Some(w);
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.row.len() - self.idx))
    }
}
