//! Fundamental cycles ("loops") derived from DFS back edges.
//!
//! Each back edge `(bottom, top)` closes exactly one loop: the shortest path
//! from `top` to `bottom` that avoids the back edge itself, followed by the
//! back edge. On a simple graph the number of loops equals the cyclomatic
//! number `E - V + C`.

use serde::{Deserialize, Serialize};

use crate::graph::traversal::{Bfs, Dfs};
use crate::graph::{BackEdge, UndirectedGraph};

/// The loops of a graph, one per DFS back edge.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Loops {
    loops: Vec<Vec<usize>>,
    back_edges: Vec<BackEdge>,
}

impl Loops {
    /// Finds one loop per back edge of a depth-first traversal of `graph`.
    ///
    /// # Panics
    /// Panics if the traversal does not cover every vertex, or if a back
    /// edge's endpoints are not connected once the edge is excluded.
    pub fn new<G>(graph: &G) -> Self
    where
        G: UndirectedGraph + ?Sized,
    {
        let n = graph.vertex_count();
        if n < 2 {
            return Self::default();
        }

        let mut dfs = Dfs::new(graph);
        for root in 0..n {
            if dfs.visited_count() == n {
                break;
            }
            dfs.walk(root);
        }
        assert_eq!(dfs.visited_count(), n, "DFS did not cover every vertex");

        let back_edges = dfs.back_edges().to_vec();
        let loops: Vec<Vec<usize>> = back_edges
            .iter()
            .map(|back| close_loop(graph, *back))
            .collect();

        #[cfg(feature = "tracing")]
        tracing::debug!(
            vertices = n,
            edges = graph.edge_count(),
            loops = loops.len(),
            "loops extracted"
        );

        Self { loops, back_edges }
    }

    /// Number of loops.
    #[inline]
    pub fn count(&self) -> usize {
        self.loops.len()
    }

    /// Loop `index` as a closed walk `[bottom, .., top, bottom]`.
    ///
    /// # Panics
    /// Panics if `index >= count()`.
    #[inline]
    pub fn cycle(&self, index: usize) -> &[usize] {
        &self.loops[index]
    }

    /// Iterates over all loops in back-edge discovery order.
    pub fn iter(&self) -> impl Iterator<Item = &[usize]> + '_ {
        self.loops.iter().map(Vec::as_slice)
    }

    /// The back edge that produced each loop, index-aligned with [`cycle`](Self::cycle).
    #[inline]
    pub fn back_edges(&self) -> &[BackEdge] {
        &self.back_edges
    }

    /// Returns `true` if the graph is a forest.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.loops.is_empty()
    }
}

fn close_loop<G>(graph: &G, back: BackEdge) -> Vec<usize>
where
    G: UndirectedGraph + ?Sized,
{
    let BackEdge {
        descendant: bottom,
        ancestor: top,
    } = back;

    let mut bfs = Bfs::excluding(graph, back.edge());
    bfs.walk(top);

    let mut cycle = Vec::new();
    let mut v = bottom;
    while v != top {
        cycle.push(v);
        v = match bfs.parent(v) {
            Some(p) => p,
            None => panic!("back edge {bottom}-{top} has no alternative path"),
        };
    }
    cycle.push(top);
    cycle.push(bottom);
    cycle
}
