//! Connected components by repeated depth-first traversal.

use std::ops::ControlFlow;

use serde::{Deserialize, Serialize};

use crate::graph::traversal::Dfs;
use crate::graph::UndirectedGraph;

/// Partition of a graph's vertices into connected components.
///
/// Components are numbered in the order their roots were chosen: the
/// lowest-numbered vertex not yet covered starts the next component, and its
/// vertices are listed in DFS finalization order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectedComponents {
    components: Vec<Vec<usize>>,
    membership: Vec<usize>,
}

impl ConnectedComponents {
    /// Computes the components of `graph`.
    ///
    /// # Panics
    /// Panics if the traversal fails to cover every vertex exactly once.
    pub fn new<G>(graph: &G) -> Self
    where
        G: UndirectedGraph + ?Sized,
    {
        let n = graph.vertex_count();
        let mut components: Vec<Vec<usize>> = Vec::new();
        let mut membership = vec![usize::MAX; n];
        let mut covered = 0;

        let mut dfs = Dfs::new(graph);
        for root in 0..n {
            if covered == n {
                break;
            }
            if dfs.is_visited(root) {
                continue;
            }

            let id = components.len();
            let mut bucket = Vec::new();
            dfs.traverse(root, |_, v| {
                bucket.push(v);
                membership[v] = id;
                ControlFlow::Continue(())
            });
            covered += bucket.len();
            components.push(bucket);
        }
        assert_eq!(covered, n, "components cover {covered} of {n} vertices");

        #[cfg(feature = "tracing")]
        tracing::debug!(vertices = n, components = components.len(), "connected components");

        Self {
            components,
            membership,
        }
    }

    /// Number of components.
    #[inline]
    pub fn count(&self) -> usize {
        self.components.len()
    }

    /// Vertices of component `index`.
    ///
    /// # Panics
    /// Panics if `index >= count()`.
    #[inline]
    pub fn component(&self, index: usize) -> &[usize] {
        &self.components[index]
    }

    /// Iterates over all components in root order.
    pub fn iter(&self) -> impl Iterator<Item = &[usize]> + '_ {
        self.components.iter().map(Vec::as_slice)
    }

    /// Index of the component containing `vertex`.
    #[inline]
    pub fn component_of(&self, vertex: usize) -> Option<usize> {
        self.membership.get(vertex).copied()
    }

    /// Returns `true` iff the graph has exactly one component.
    #[inline]
    pub fn is_connected(&self) -> bool {
        self.count() == 1
    }

    /// Size of the largest component (0 for an empty graph).
    pub fn largest(&self) -> usize {
        self.components.iter().map(Vec::len).max().unwrap_or(0)
    }
}
