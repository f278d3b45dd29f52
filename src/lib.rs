//! # `halo-graph` - Undirected Graph Traversal Toolkit
//!
//! Storage backends and a single frontier-driven traversal engine for
//! undirected graphs, plus the analyses built on that engine.
//!
//! ## Key Features
//!
//! - **Two backends**: a dense adjacency matrix for simple graphs and a
//!   half-edge adjacency list with \(O(1)\) edge removal for multigraphs
//! - **One engine, two disciplines**: DFS (erasable stack, back-edge capture)
//!   and BFS (FIFO, optional excluded edge) share the same visit bookkeeping
//! - **Analyses**: connected components, fundamental loops, Euler
//!   paths/circuits, shortest hop-count paths
//!
//! ## Architecture
//!
//! ### Core Abstractions
//!
//! 1. **`UndirectedGraph`**: read-only vertex/degree/neighbor view that every
//!    algorithm is generic over.
//! 2. **`Traversal<'g, G, F>`**: borrows a graph, owns per-vertex visit marks,
//!    delegates ordering to a `Frontier` strategy.
//! 3. **Analyses** (`ConnectedComponents`, `Loops`, `EulerWalk`): computed once
//!    at construction, immutable afterwards.
//!
//! ### Invariants
//!
//! **Invariant 1 (Single finalization)**: within one traversal engine every
//! vertex is finalized at most once, and its parent chain ends at a root that
//! is its own parent.
//!
//! **Invariant 2 (Twin symmetry)**: in the adjacency list, every live
//! half-edge has a live twin pointing back at its source, so
//! `sum(degree) == 2 * edge_count`.
//!
//! **Invariant 3 (Cyclomatic count)**: on a simple graph the number of loops
//! equals `E - V + C`.
//!
//! ## Example
//!
//! ```rust
//! use halo_graph::{AdjListGraph, ConnectedComponents, EulerWalk, Loops};
//!
//! // Two triangles sharing vertex 0.
//! let g = AdjListGraph::from_edges(5, [(0, 1), (1, 2), (2, 0), (0, 3), (3, 4), (4, 0)]);
//!
//! assert!(ConnectedComponents::new(&g).is_connected());
//! assert_eq!(Loops::new(&g).count(), 2);
//!
//! let euler = EulerWalk::new(&g, 0);
//! assert!(euler.has_circuit());
//! assert_eq!(euler.len(), 7);
//! assert_eq!(euler[0], euler[6]);
//! ```

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod error;
pub mod graph;

pub use error::GraphError;
pub use graph::{
    classify, shortest_path, shortest_path_avoiding, AdjListGraph, AdjMatrixGraph, BackEdge, Bfs,
    ConnectedComponents, Dfs, Edge, EulerKind, EulerWalk, HalfEdgeId, Loops, Traversal,
    UndirectedGraph,
};

// Compile-time assertions for memory layout
const _: () = {
    use core::mem;

    // Handles are plain slot indices.
    assert!(mem::size_of::<HalfEdgeId>() == mem::size_of::<usize>());
    assert!(mem::size_of::<Option<HalfEdgeId>>() <= mem::size_of::<usize>() * 2);

    assert!(mem::size_of::<Edge>() == mem::size_of::<usize>() * 2);
};
