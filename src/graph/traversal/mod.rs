//! Frontier-driven graph exploration shared by DFS and BFS.
//!
//! A [`Traversal`] borrows a graph, owns the per-vertex [`VisitMarks`], and
//! delegates ordering to a [`Frontier`] strategy chosen at construction:
//! [`DepthFirst`] (erasable stack, records back edges) or [`BreadthFirst`]
//! (FIFO queue, optionally excluding one edge).
//!
//! Visited state accumulates across [`traverse`](Traversal::traverse) calls,
//! so one engine can cover a disconnected graph root by root.
//!
//! Vertical split:
//! - `frontier`: the two frontier strategies
//! - `tests`: module tests

use std::ops::ControlFlow;

use crate::graph::{BackEdge, Edge, UndirectedGraph};

mod frontier;

pub use crate::graph::access::visited::VisitMarks;
pub use frontier::{BreadthFirst, DepthFirst, Frontier};

/// Depth-first traversal engine.
pub type Dfs<'g, G> = Traversal<'g, G, DepthFirst>;

/// Breadth-first traversal engine.
pub type Bfs<'g, G> = Traversal<'g, G, BreadthFirst>;

/// A reusable exploration of one graph with a pluggable frontier.
///
/// A vertex is finalized (parent recorded, visit callback invoked) exactly
/// once, before its neighbors are offered to the frontier. The root of each
/// traversal is its own parent.
pub struct Traversal<'g, G: ?Sized, F> {
    graph: &'g G,
    marks: VisitMarks,
    frontier: F,
}

impl<'g, G, F> Traversal<'g, G, F>
where
    G: UndirectedGraph + ?Sized,
    F: Frontier,
{
    /// Creates an engine over `graph` using the given frontier.
    ///
    /// Frontiers mutate crate-private visit state, so outside callers use
    /// [`Dfs::new`], [`Bfs::new`] or [`Bfs::excluding`].
    pub(crate) fn with_frontier(graph: &'g G, frontier: F) -> Self {
        Self {
            graph,
            marks: VisitMarks::new(graph.vertex_count()),
            frontier,
        }
    }

    /// Explores everything reachable from `start`, calling
    /// `visit(parent, vertex)` for each newly finalized vertex.
    ///
    /// Returning [`ControlFlow::Break`] from `visit` stops the traversal after
    /// that vertex is finalized; its neighbors are not examined and pending
    /// candidates are dropped.
    ///
    /// Does nothing if `start` is out of range or already visited. Returns the
    /// number of vertices finalized by this call.
    pub fn traverse<V>(&mut self, start: usize, mut visit: V) -> usize
    where
        V: FnMut(usize, usize) -> ControlFlow<()>,
    {
        if !self.graph.contains_vertex(start) || self.marks.is_visited(start) {
            return 0;
        }

        let graph = self.graph;
        let mut finalized = 0;
        self.frontier.offer(&mut self.marks, start, start);

        while let Some((parent, vertex)) = self.frontier.take() {
            self.marks.finalize(parent, vertex);
            finalized += 1;

            if visit(parent, vertex).is_break() {
                self.frontier.abandon(&mut self.marks);
                break;
            }

            for w in graph.neighbors(vertex) {
                self.frontier.offer(&mut self.marks, vertex, w);
            }
        }

        #[cfg(feature = "tracing")]
        tracing::trace!(start, finalized, "traversal finished");

        finalized
    }

    /// [`traverse`](Self::traverse) without a visit callback.
    #[inline]
    pub fn walk(&mut self, start: usize) -> usize {
        self.traverse(start, |_, _| ControlFlow::Continue(()))
    }

    /// The graph this engine explores.
    #[inline]
    pub fn graph(&self) -> &'g G {
        self.graph
    }

    /// Accumulated per-vertex state.
    #[inline]
    pub fn marks(&self) -> &VisitMarks {
        &self.marks
    }

    /// Tree parent of `vertex`, or `None` if it has not been visited.
    #[inline]
    pub fn parent(&self, vertex: usize) -> Option<usize> {
        self.marks.parent(vertex)
    }

    /// Returns `true` once `vertex` has been finalized.
    #[inline]
    pub fn is_visited(&self, vertex: usize) -> bool {
        self.marks.is_visited(vertex)
    }

    /// Global finalization index of `vertex`.
    #[inline]
    pub fn discovery(&self, vertex: usize) -> Option<usize> {
        self.marks.discovery(vertex)
    }

    /// Finalized vertices in finalization order, across all calls.
    #[inline]
    pub fn order(&self) -> &[usize] {
        self.marks.order()
    }

    /// Number of vertices finalized so far.
    #[inline]
    pub fn visited_count(&self) -> usize {
        self.marks.visited_count()
    }

    /// The parent chain from `vertex` up to the root of its traversal,
    /// both ends included. `None` if `vertex` has not been visited.
    pub fn path_to_root(&self, vertex: usize) -> Option<Vec<usize>> {
        let mut path = vec![vertex];
        let mut cur = vertex;
        loop {
            let parent = self.parent(cur)?;
            if parent == cur {
                return Some(path);
            }
            assert!(
                path.len() <= self.marks.len(),
                "parent chain from {vertex} does not terminate"
            );
            path.push(parent);
            cur = parent;
        }
    }
}

impl<'g, G> Traversal<'g, G, DepthFirst>
where
    G: UndirectedGraph + ?Sized,
{
    /// Creates a depth-first engine over `graph`.
    pub fn new(graph: &'g G) -> Self {
        Self::with_frontier(graph, DepthFirst::new(graph.vertex_count()))
    }

    /// Non-tree edges found so far, in discovery order, never duplicated.
    #[inline]
    pub fn back_edges(&self) -> &[BackEdge] {
        self.frontier.back_edges()
    }
}

impl<'g, G> Traversal<'g, G, BreadthFirst>
where
    G: UndirectedGraph + ?Sized,
{
    /// Creates a breadth-first engine over `graph`.
    pub fn new(graph: &'g G) -> Self {
        Self::with_frontier(graph, BreadthFirst::new())
    }

    /// Creates a breadth-first engine that never crosses `edge`.
    pub fn excluding(graph: &'g G, edge: Edge) -> Self {
        Self::with_frontier(graph, BreadthFirst::excluding(edge))
    }
}
