use serde::{Deserialize, Serialize};

use super::store::HalfEdgeStore;

/// Handle to one half-edge of an [`AdjListGraph`](super::AdjListGraph).
///
/// Obtained from [`half_edges`](super::AdjListGraph::half_edges) or
/// [`first_half_edge`](super::AdjListGraph::first_half_edge). A handle is
/// invalidated when its edge is removed; its slot may be reused by a later
/// insertion.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct HalfEdgeId(pub(super) usize);

impl HalfEdgeId {
    /// The arena slot this handle addresses.
    #[inline]
    pub fn index(self) -> usize {
        self.0
    }
}

/// Forward cursor over one vertex's half-edge list.
///
/// The cursor stops when it wraps around to the vertex's sentinel slot.
pub struct HalfEdges<'a> {
    store: &'a HalfEdgeStore,
    sentinel: usize,
    cur: usize,
}

impl<'a> HalfEdges<'a> {
    #[inline]
    pub(super) fn new(store: &'a HalfEdgeStore, sentinel: usize) -> Self {
        Self {
            store,
            sentinel,
            cur: sentinel,
        }
    }

    /// An exhausted cursor, used for out-of-range vertices.
    #[inline]
    pub(super) fn empty(store: &'a HalfEdgeStore) -> Self {
        Self {
            store,
            sentinel: usize::MAX,
            cur: usize::MAX,
        }
    }
}

impl Iterator for HalfEdges<'_> {
    type Item = (HalfEdgeId, usize);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.sentinel == usize::MAX {
            return None;
        }
        let next = self.store.get(self.cur).next;
        if next == self.sentinel {
            self.sentinel = usize::MAX;
            return None;
        }
        self.cur = next;
        Some((HalfEdgeId(next), self.store.get(next).target))
    }
}

/// Iterator over the neighbor ids of one vertex, in insertion order.
pub struct AdjIter<'a> {
    inner: HalfEdges<'a>,
}

impl<'a> AdjIter<'a> {
    #[inline]
    pub(super) fn new(inner: HalfEdges<'a>) -> Self {
        Self { inner }
    }
}

impl Iterator for AdjIter<'_> {
    type Item = usize;

    #[inline]
    fn next(&mut self) -> Option<usize> {
        self.inner.next().map(|(_, target)| target)
    }
}
