//! Error type for the checked graph mutation API.
//!
//! Only `try_insert` reports errors. The lenient `insert` entry points drop
//! invalid edges silently, and analysis results never fail: an absent cycle
//! or Euler walk is ordinary data.

use thiserror::Error;

/// Reasons an edge could not be inserted into a graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GraphError {
    /// An endpoint lies outside `0..vertex_count`.
    #[error("vertex {vertex} is out of range for a graph with {vertex_count} vertices")]
    VertexOutOfRange {
        /// The offending vertex id.
        vertex: usize,
        /// Number of vertices the graph was built with.
        vertex_count: usize,
    },

    /// The backend stores simple graphs only and rejects `{v, v}`.
    #[error("self-loop on vertex {vertex} is not supported by this storage")]
    SelfLoop {
        /// The vertex the loop would attach to.
        vertex: usize,
    },

    /// The backend stores simple graphs only and the edge already exists.
    #[error("edge {{{u}, {v}}} is already present")]
    DuplicateEdge {
        /// First endpoint.
        u: usize,
        /// Second endpoint.
        v: usize,
    },
}

impl GraphError {
    /// Checks that both endpoints are valid vertex ids.
    pub(crate) fn check_endpoints(u: usize, v: usize, vertex_count: usize) -> Result<(), Self> {
        for vertex in [u, v] {
            if vertex >= vertex_count {
                return Err(Self::VertexOutOfRange {
                    vertex,
                    vertex_count,
                });
            }
        }
        Ok(())
    }
}
