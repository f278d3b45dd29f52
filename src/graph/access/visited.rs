//! Per-vertex traversal bookkeeping.
//!
//! `VisitMarks` keeps the state a traversal accumulates across repeated
//! calls from different roots:
//! - `parent`: the tree parent of every finalized vertex (a root is its own parent)
//! - `discovery`: the global finalization index of every finalized vertex
//! - `queued`: whether the vertex has ever been offered to the frontier
//!
//! Keeping this in one place lets the frontier strategies share the same
//! visited logic while owning structurally different pending-work storage.

/// Dense per-vertex traversal state, indexed by vertex id.
#[derive(Debug, Clone)]
pub struct VisitMarks {
    parent: Vec<Option<usize>>,
    discovery: Vec<Option<usize>>,
    queued: Vec<bool>,
    order: Vec<usize>,
}

impl VisitMarks {
    pub(crate) fn new(len: usize) -> Self {
        Self {
            parent: vec![None; len],
            discovery: vec![None; len],
            queued: vec![false; len],
            order: Vec::with_capacity(len),
        }
    }

    /// Number of vertices tracked.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    /// Returns `true` if no vertices are tracked.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Returns `true` once `vertex` has been finalized.
    #[inline(always)]
    pub fn is_visited(&self, vertex: usize) -> bool {
        matches!(self.parent.get(vertex), Some(Some(_)))
    }

    /// Tree parent of a finalized vertex.
    #[inline(always)]
    pub fn parent(&self, vertex: usize) -> Option<usize> {
        self.parent.get(vertex).copied().flatten()
    }

    /// Finalization index of `vertex`, counted across every traversal call.
    #[inline(always)]
    pub fn discovery(&self, vertex: usize) -> Option<usize> {
        self.discovery.get(vertex).copied().flatten()
    }

    /// Returns `true` while `vertex` has been offered to the frontier.
    #[inline(always)]
    pub fn is_queued(&self, vertex: usize) -> bool {
        self.queued.get(vertex).copied().unwrap_or(false)
    }

    /// Finalized vertices in finalization order.
    #[inline]
    pub fn order(&self) -> &[usize] {
        &self.order
    }

    /// Number of finalized vertices.
    #[inline]
    pub fn visited_count(&self) -> usize {
        self.order.len()
    }

    #[inline(always)]
    pub(crate) fn mark_queued(&mut self, vertex: usize) {
        self.queued[vertex] = true;
    }

    #[inline(always)]
    pub(crate) fn clear_queued(&mut self, vertex: usize) {
        self.queued[vertex] = false;
    }

    /// Records `vertex` as finalized with tree parent `parent`.
    ///
    /// # Panics
    /// Panics if `vertex` was already finalized.
    pub(crate) fn finalize(&mut self, parent: usize, vertex: usize) {
        assert!(
            self.parent[vertex].is_none(),
            "vertex {vertex} finalized twice"
        );
        self.parent[vertex] = Some(parent);
        self.discovery[vertex] = Some(self.order.len());
        self.order.push(vertex);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finalize_records_parent_and_order() {
        let mut marks = VisitMarks::new(3);
        assert!(!marks.is_visited(1));
        marks.finalize(1, 1);
        marks.finalize(1, 2);
        assert_eq!(marks.parent(1), Some(1));
        assert_eq!(marks.parent(2), Some(1));
        assert_eq!(marks.parent(0), None);
        assert_eq!(marks.discovery(2), Some(1));
        assert_eq!(marks.order(), &[1, 2]);
        assert_eq!(marks.visited_count(), 2);
    }

    #[test]
    fn out_of_range_queries_are_lenient() {
        let marks = VisitMarks::new(2);
        assert!(!marks.is_visited(9));
        assert!(!marks.is_queued(9));
        assert_eq!(marks.parent(9), None);
        assert_eq!(marks.discovery(9), None);
    }

    #[test]
    #[should_panic(expected = "finalized twice")]
    fn double_finalize_panics() {
        let mut marks = VisitMarks::new(2);
        marks.finalize(0, 0);
        marks.finalize(0, 0);
    }
}
