//! Slot arena for paired half-edges.
//!
//! Slots `0..vertex_count` hold one sentinel per vertex; each sentinel heads
//! a circular doubly linked list of that vertex's half-edges. Every other
//! slot is either an occupied half-edge or a member of the free list.

/// Target id stored in sentinel slots.
pub(super) const NULL_VERTEX: usize = usize::MAX;

/// One endpoint's record of an undirected edge.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(super) struct HalfEdge {
    pub target: usize,
    pub prev: usize,
    pub next: usize,
    pub twin: usize,
}

/// Internal slot for half-edge data.
#[derive(Clone, Copy, Debug)]
enum EdgeSlot {
    Occupied(HalfEdge),
    Free(Option<usize>),
}

/// Index-addressed storage for sentinels and half-edges.
#[derive(Clone, Debug)]
pub(super) struct HalfEdgeStore {
    slots: Vec<EdgeSlot>,
    sentinels: usize,
    free_head: Option<usize>,
    len: usize,
}

impl HalfEdgeStore {
    /// Creates `vertex_count` empty circular lists.
    pub(super) fn with_sentinels(vertex_count: usize) -> Self {
        let slots = (0..vertex_count)
            .map(|s| {
                EdgeSlot::Occupied(HalfEdge {
                    target: NULL_VERTEX,
                    prev: s,
                    next: s,
                    twin: s,
                })
            })
            .collect();
        Self {
            slots,
            sentinels: vertex_count,
            free_head: None,
            len: 0,
        }
    }

    /// Number of live half-edges (sentinels excluded).
    #[inline]
    pub(super) fn len(&self) -> usize {
        self.len
    }

    /// Total slots, including sentinels and free slots.
    #[cfg(test)]
    pub(super) fn capacity(&self) -> usize {
        self.slots.len()
    }

    #[inline(always)]
    pub(super) fn is_sentinel(&self, idx: usize) -> bool {
        idx < self.sentinels
    }

    #[inline(always)]
    pub(super) fn is_occupied(&self, idx: usize) -> bool {
        matches!(self.slots.get(idx), Some(EdgeSlot::Occupied(_)))
    }

    /// # Panics
    /// Panics if `idx` is a free slot.
    #[inline(always)]
    pub(super) fn get(&self, idx: usize) -> &HalfEdge {
        match &self.slots[idx] {
            EdgeSlot::Occupied(e) => e,
            EdgeSlot::Free(_) => panic!("half-edge slot {idx} is free"),
        }
    }

    #[inline(always)]
    fn get_mut(&mut self, idx: usize) -> &mut HalfEdge {
        match &mut self.slots[idx] {
            EdgeSlot::Occupied(e) => e,
            EdgeSlot::Free(_) => panic!("half-edge slot {idx} is free"),
        }
    }

    /// Allocates a half-edge pointing at `target` and appends it to the list
    /// headed by `sentinel`. The twin link initially points at itself.
    pub(super) fn push_back(&mut self, sentinel: usize, target: usize) -> usize {
        let tail = self.get(sentinel).prev;
        let edge = HalfEdge {
            target,
            prev: tail,
            next: sentinel,
            twin: NULL_VERTEX,
        };
        let idx = self.alloc(edge);
        self.get_mut(idx).twin = idx;
        self.get_mut(tail).next = idx;
        self.get_mut(sentinel).prev = idx;
        idx
    }

    /// Makes `a` and `b` mutual twins.
    pub(super) fn pair(&mut self, a: usize, b: usize) {
        assert_ne!(a, b, "a half-edge cannot be its own twin");
        self.get_mut(a).twin = b;
        self.get_mut(b).twin = a;
    }

    /// Unlinks `idx` from its list and returns the slot to the free list.
    pub(super) fn unlink(&mut self, idx: usize) -> HalfEdge {
        assert!(!self.is_sentinel(idx), "cannot unlink sentinel slot {idx}");
        let edge = *self.get(idx);
        self.get_mut(edge.prev).next = edge.next;
        self.get_mut(edge.next).prev = edge.prev;
        self.free(idx);
        edge
    }

    fn alloc(&mut self, edge: HalfEdge) -> usize {
        self.len += 1;
        if let Some(idx) = self.free_head {
            match self.slots[idx] {
                EdgeSlot::Free(next_free) => self.free_head = next_free,
                EdgeSlot::Occupied(_) => panic!("Free head points to occupied slot"),
            }
            self.slots[idx] = EdgeSlot::Occupied(edge);
            idx
        } else {
            self.slots.push(EdgeSlot::Occupied(edge));
            self.slots.len() - 1
        }
    }

    fn free(&mut self, idx: usize) {
        self.len -= 1;
        self.slots[idx] = EdgeSlot::Free(self.free_head);
        self.free_head = Some(idx);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list(store: &HalfEdgeStore, sentinel: usize) -> Vec<usize> {
        let mut out = Vec::new();
        let mut cur = store.get(sentinel).next;
        while cur != sentinel {
            out.push(store.get(cur).target);
            cur = store.get(cur).next;
        }
        out
    }

    #[test]
    fn push_back_appends_in_order() {
        let mut store = HalfEdgeStore::with_sentinels(2);
        store.push_back(0, 5);
        store.push_back(0, 6);
        store.push_back(1, 7);
        assert_eq!(list(&store, 0), vec![5, 6]);
        assert_eq!(list(&store, 1), vec![7]);
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn freed_slots_are_reused() {
        let mut store = HalfEdgeStore::with_sentinels(1);
        let a = store.push_back(0, 1);
        let b = store.push_back(0, 2);
        store.unlink(a);
        assert!(!store.is_occupied(a));
        assert_eq!(list(&store, 0), vec![2]);

        let c = store.push_back(0, 3);
        assert_eq!(c, a);
        assert_eq!(store.capacity(), 3);
        assert_eq!(list(&store, 0), vec![2, 3]);
        assert!(store.is_occupied(b));
    }

    #[test]
    #[should_panic(expected = "sentinel")]
    fn sentinels_cannot_be_unlinked() {
        let mut store = HalfEdgeStore::with_sentinels(1);
        store.unlink(0);
    }
}
