//! Undirected graph storage, traversal, and the analyses built on top.
//!
//! Graph code is organized into categories:
//! - `basic`: the two storage backends (adjacency matrix, half-edge list)
//! - `traversal`: the frontier-driven DFS/BFS engine
//! - `algorithms`: connected components, loop extraction, Euler walks

pub mod algorithms;
pub mod basic;
pub mod traversal;
pub(crate) mod access;

use serde::{Deserialize, Serialize};

pub use algorithms::{
    classify, shortest_path, shortest_path_avoiding, ConnectedComponents, EulerKind, EulerWalk,
    Loops,
};
pub use basic::{AdjListGraph, AdjMatrixGraph, HalfEdgeId};
pub use traversal::{Bfs, Dfs, Traversal};

/// Read-only view of an undirected graph with vertices `0..vertex_count()`.
///
/// Every analysis in this crate is generic over this trait, so both storage
/// backends can be analysed interchangeably. Queries with an out-of-range
/// vertex are lenient: `degree` reports 0 and `neighbors` yields nothing.
pub trait UndirectedGraph {
    /// Iterator over the neighbors of one vertex.
    type Neighbors<'a>: Iterator<Item = usize>
    where
        Self: 'a;

    /// Number of vertices, fixed at construction.
    fn vertex_count(&self) -> usize;

    /// Number of undirected edges currently stored.
    fn edge_count(&self) -> usize;

    /// Number of edge endpoints at `vertex` (a self-loop counts twice).
    fn degree(&self, vertex: usize) -> usize;

    /// Neighbors of `vertex`, one entry per incident half-edge.
    fn neighbors(&self, vertex: usize) -> Self::Neighbors<'_>;

    /// Returns `true` if `vertex` is a valid id.
    #[inline]
    fn contains_vertex(&self, vertex: usize) -> bool {
        vertex < self.vertex_count()
    }
}

/// An unordered pair of vertices.
///
/// The fields keep the orientation the edge was created with, but equality
/// checks that matter for undirected graphs go through [`Edge::joins`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Edge {
    /// First endpoint.
    pub u: usize,
    /// Second endpoint.
    pub v: usize,
}

impl Edge {
    /// Creates the edge `{u, v}`.
    #[inline]
    pub const fn new(u: usize, v: usize) -> Self {
        Self { u, v }
    }

    /// Returns `true` if this edge connects `a` and `b`, in either direction.
    #[inline]
    pub fn joins(&self, a: usize, b: usize) -> bool {
        (self.u == a && self.v == b) || (self.u == b && self.v == a)
    }

    /// Returns the endpoint opposite to `vertex`, or `None` if `vertex` is not
    /// an endpoint.
    #[inline]
    pub fn other(&self, vertex: usize) -> Option<usize> {
        if self.u == vertex {
            Some(self.v)
        } else if self.v == vertex {
            Some(self.u)
        } else {
            None
        }
    }

    /// Returns `true` for `{v, v}`.
    #[inline]
    pub fn is_loop(&self) -> bool {
        self.u == self.v
    }
}

impl From<(usize, usize)> for Edge {
    fn from((u, v): (usize, usize)) -> Self {
        Self::new(u, v)
    }
}

/// A non-tree edge found by depth-first search.
///
/// `descendant` was finalized after `ancestor` and sits below it in the DFS
/// tree, so the edge closes a cycle through the tree path between them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BackEdge {
    /// The deeper endpoint (the "bottom" of the cycle).
    pub descendant: usize,
    /// The shallower endpoint (the "top" of the cycle).
    pub ancestor: usize,
}

impl BackEdge {
    /// The back edge as an unordered [`Edge`].
    #[inline]
    pub fn edge(&self) -> Edge {
        Edge::new(self.descendant, self.ancestor)
    }
}
