//! Frontier strategies: the pending-work structures behind DFS and BFS.
//!
//! A frontier holds discovered-but-not-finalized `(parent, vertex)`
//! candidates. The traversal engine offers every edge incident to a freshly
//! finalized vertex and takes the next candidate to finalize; the strategy
//! alone decides the resulting order.

use std::collections::VecDeque;

use crate::graph::access::visited::VisitMarks;
use crate::graph::{BackEdge, Edge};

/// Pending-work discipline of a traversal.
///
/// Implemented by [`DepthFirst`] and [`BreadthFirst`]; only the crate's
/// [`Traversal`](super::Traversal) constructors can plug one in.
pub trait Frontier {
    /// Considers the edge `(parent, vertex)` as a way to reach `vertex`.
    fn offer(&mut self, marks: &mut VisitMarks, parent: usize, vertex: usize);

    /// Removes the next `(parent, vertex)` candidate to finalize.
    fn take(&mut self) -> Option<(usize, usize)>;

    /// Drops every pending candidate and clears its queued flag.
    fn abandon(&mut self, marks: &mut VisitMarks);
}

/// Link record of a vertex currently pending in a [`DepthFirst`] frontier.
#[derive(Clone, Copy, Debug, Default)]
struct PendingLink {
    parent: usize,
    prev: Option<usize>,
    next: Option<usize>,
}

/// Depth-first frontier: an erasable stack with back-edge capture.
///
/// Each vertex has at most one pending entry, so the doubly linked sequence
/// is intrusive and indexed by vertex id: push-to-front and eviction of an
/// arbitrary pending vertex are both \(O(1)\).
///
/// For an offered edge `(v, w)`:
/// - `w` finalized and not `v`'s tree parent: `(v, w)` is recorded as a back edge
/// - `w` pending: its stale entry is evicted and `(v, w)` goes to the front
/// - `w` unseen: `(v, w)` goes to the front and `w` becomes pending
///
/// Self-loops are ignored.
#[derive(Clone, Debug)]
pub struct DepthFirst {
    links: Vec<PendingLink>,
    head: Option<usize>,
    back_edges: Vec<BackEdge>,
}

impl DepthFirst {
    /// Creates an empty frontier for a graph with `vertex_count` vertices.
    pub fn new(vertex_count: usize) -> Self {
        Self {
            links: vec![PendingLink::default(); vertex_count],
            head: None,
            back_edges: Vec::new(),
        }
    }

    /// Non-tree edges seen so far, in discovery order.
    #[inline]
    pub fn back_edges(&self) -> &[BackEdge] {
        &self.back_edges
    }

    fn push_front(&mut self, parent: usize, vertex: usize) {
        self.links[vertex] = PendingLink {
            parent,
            prev: None,
            next: self.head,
        };
        if let Some(old) = self.head {
            self.links[old].prev = Some(vertex);
        }
        self.head = Some(vertex);
    }

    fn unlink(&mut self, vertex: usize) {
        let PendingLink { prev, next, .. } = self.links[vertex];
        match prev {
            Some(p) => self.links[p].next = next,
            None => self.head = next,
        }
        if let Some(n) = next {
            self.links[n].prev = prev;
        }
    }
}

impl Frontier for DepthFirst {
    fn offer(&mut self, marks: &mut VisitMarks, parent: usize, vertex: usize) {
        if marks.is_visited(vertex) {
            if vertex != parent && marks.parent(parent) != Some(vertex) {
                self.back_edges.push(BackEdge {
                    descendant: parent,
                    ancestor: vertex,
                });
            }
            return;
        }
        if marks.is_queued(vertex) {
            self.unlink(vertex);
        }
        self.push_front(parent, vertex);
        marks.mark_queued(vertex);
    }

    fn take(&mut self) -> Option<(usize, usize)> {
        let vertex = self.head?;
        self.unlink(vertex);
        Some((self.links[vertex].parent, vertex))
    }

    fn abandon(&mut self, marks: &mut VisitMarks) {
        while let Some((_, vertex)) = self.take() {
            marks.clear_queued(vertex);
        }
    }
}

/// Breadth-first frontier: a FIFO queue, optionally refusing one edge.
///
/// A vertex is enqueued only the first time it is offered, which yields a
/// shortest-hop-count tree. With an excluded edge the traversal never crosses
/// that edge in either direction.
#[derive(Clone, Debug, Default)]
pub struct BreadthFirst {
    queue: VecDeque<(usize, usize)>,
    excluded: Option<Edge>,
}

impl BreadthFirst {
    /// Creates an empty frontier.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty frontier that refuses to traverse `edge`.
    pub fn excluding(edge: Edge) -> Self {
        Self {
            queue: VecDeque::new(),
            excluded: Some(edge),
        }
    }

    /// The edge this frontier refuses to traverse, if any.
    #[inline]
    pub fn excluded(&self) -> Option<Edge> {
        self.excluded
    }
}

impl Frontier for BreadthFirst {
    fn offer(&mut self, marks: &mut VisitMarks, parent: usize, vertex: usize) {
        if self.excluded.is_some_and(|e| e.joins(parent, vertex)) {
            return;
        }
        if !marks.is_queued(vertex) {
            self.queue.push_back((parent, vertex));
            marks.mark_queued(vertex);
        }
    }

    #[inline]
    fn take(&mut self) -> Option<(usize, usize)> {
        self.queue.pop_front()
    }

    fn abandon(&mut self, marks: &mut VisitMarks) {
        for (_, vertex) in self.queue.drain(..) {
            marks.clear_queued(vertex);
        }
    }
}
