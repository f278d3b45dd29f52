//! Storage backends.
//!
//! Both backends implement [`UndirectedGraph`](crate::graph::UndirectedGraph)
//! and keep degree counts up to date, so `degree` is \(O(1)\) on either.
//!
//! ### Performance Characteristics
//!
//! | Operation        | `AdjMatrixGraph` | `AdjListGraph` |
//! |------------------|------------------|----------------|
//! | insert           | \(O(1)\)         | \(O(1)\)       |
//! | has_edge         | \(O(1)\)         | n/a            |
//! | neighbors (full) | \(O(V)\)         | \(O(\deg)\)    |
//! | remove edge      | n/a              | \(O(1)\)       |
//! | memory           | \(O(V^2)\)       | \(O(V + E)\)   |

pub mod adj_list;
pub mod adj_matrix;

pub use adj_list::{AdjIter, AdjListGraph, HalfEdgeId, HalfEdges};
pub use adj_matrix::{AdjMatrixGraph, MatrixNeighbors};
