//! Euler path / circuit detection and construction.
//!
//! Classification counts odd-degree vertices among those a BFS reaches from
//! the start vertex. Edges outside that reachable subgraph are never
//! examined: callers who need a walk over the whole graph must pass a graph
//! whose edges form a single component (see [`EulerWalk::covers_all_edges`]).
//!
//! Construction is Hierholzer's algorithm with an explicit stack, run on a
//! private [`AdjListGraph`] copy whose edges are removed as they are used.

use std::ops::{ControlFlow, Index};

use serde::{Deserialize, Serialize};

use crate::graph::traversal::Bfs;
use crate::graph::{AdjListGraph, UndirectedGraph};

/// What kind of Euler walk exists from a start vertex.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EulerKind {
    /// No walk uses every reachable edge exactly once.
    #[default]
    None,
    /// A walk between the two odd-degree vertices.
    Path,
    /// A closed walk; every reachable vertex has even degree.
    Circuit,
}

/// Classifies the Euler walk available in the subgraph reachable from `start`.
///
/// Returns [`EulerKind::None`] if `start` is out of range or isolated.
pub fn classify<G>(graph: &G, start: usize) -> EulerKind
where
    G: UndirectedGraph + ?Sized,
{
    survey(graph, start).0
}

/// Kind plus the first odd-degree vertex the BFS met.
fn survey<G>(graph: &G, start: usize) -> (EulerKind, Option<usize>)
where
    G: UndirectedGraph + ?Sized,
{
    if graph.degree(start) == 0 {
        return (EulerKind::None, None);
    }

    let mut odd = 0usize;
    let mut first_odd = None;
    let mut bfs = Bfs::new(graph);
    bfs.traverse(start, |_, v| {
        if graph.degree(v) % 2 == 1 {
            odd += 1;
            first_odd.get_or_insert(v);
            if odd > 2 {
                return ControlFlow::Break(());
            }
        }
        ControlFlow::Continue(())
    });

    let kind = match odd {
        0 => EulerKind::Circuit,
        2 => EulerKind::Path,
        _ => EulerKind::None,
    };
    (kind, first_odd)
}

/// An Euler path or circuit, computed once at construction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EulerWalk {
    kind: EulerKind,
    walk: Vec<usize>,
    iterations: usize,
    edge_count: usize,
}

impl EulerWalk {
    /// Classifies and, when possible, builds an Euler walk starting at `start`.
    ///
    /// If a path exists but `start` has even degree, the walk starts at the
    /// first odd-degree vertex reached from `start` instead, since a path
    /// must begin at one of its two odd endpoints.
    ///
    /// `graph` is not modified; edges are consumed from a private copy.
    pub fn new<G>(graph: &G, start: usize) -> Self
    where
        G: UndirectedGraph + ?Sized,
    {
        let edge_count = graph.edge_count();
        let (kind, first_odd) = survey(graph, start);

        let origin = match kind {
            EulerKind::None => {
                return Self {
                    kind,
                    edge_count,
                    ..Self::default()
                };
            }
            EulerKind::Circuit => start,
            EulerKind::Path if graph.degree(start) % 2 == 1 => start,
            EulerKind::Path => first_odd.unwrap_or(start),
        };

        let (walk, iterations) = hierholzer(AdjListGraph::from_graph(graph), origin);

        #[cfg(feature = "tracing")]
        tracing::debug!(
            ?kind,
            start,
            origin,
            length = walk.len(),
            iterations,
            "euler walk built"
        );

        Self {
            kind,
            walk,
            iterations,
            edge_count,
        }
    }

    /// The classification.
    #[inline]
    pub fn kind(&self) -> EulerKind {
        self.kind
    }

    /// Returns `true` if an open Euler path was found.
    #[inline]
    pub fn has_path(&self) -> bool {
        self.kind == EulerKind::Path
    }

    /// Returns `true` if an Euler circuit was found.
    #[inline]
    pub fn has_circuit(&self) -> bool {
        self.kind == EulerKind::Circuit
    }

    /// Number of vertices in the walk (edges used + 1, or 0 without a walk).
    #[inline]
    pub fn len(&self) -> usize {
        self.walk.len()
    }

    /// Returns `true` if no walk was built.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.walk.is_empty()
    }

    /// The walk as a vertex sequence.
    #[inline]
    pub fn walk(&self) -> &[usize] {
        &self.walk
    }

    /// Number of walk-then-backtrack rounds construction needed.
    #[inline]
    pub fn iterations(&self) -> usize {
        self.iterations
    }

    /// Returns `true` if the walk used every edge of the graph, i.e. the
    /// reachable subgraph held all of them.
    #[inline]
    pub fn covers_all_edges(&self) -> bool {
        self.kind != EulerKind::None && self.walk.len() == self.edge_count + 1
    }
}

impl Index<usize> for EulerWalk {
    type Output = usize;

    #[inline]
    fn index(&self, index: usize) -> &usize {
        &self.walk[index]
    }
}

/// Consumes `work` while walking; returns the walk from `origin` and the
/// number of rounds.
fn hierholzer(mut work: AdjListGraph, origin: usize) -> (Vec<usize>, usize) {
    let mut walk = Vec::with_capacity(work.edge_count() + 1);
    let mut pending: Vec<usize> = Vec::new();
    let mut iterations = 0;
    let mut v = origin;

    while work.degree(v) > 0 || !pending.is_empty() {
        iterations += 1;

        // Follow any unused edge until stuck.
        while let Some(edge) = work.first_half_edge(v) {
            pending.push(v);
            v = work.target(edge);
            work.remove(edge);
        }
        pending.push(v);

        // Retire exhausted vertices; resume from the first one with edges left.
        while let Some(u) = pending.pop() {
            v = u;
            if work.degree(u) > 0 {
                break;
            }
            walk.push(u);
        }
    }

    walk.reverse();
    (walk, iterations)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::AdjMatrixGraph;

    #[test]
    fn triangle_is_a_circuit() {
        let g = AdjListGraph::from_edges(3, [(0, 1), (1, 2), (2, 0)]);
        let euler = EulerWalk::new(&g, 0);
        assert!(euler.has_circuit());
        assert_eq!(euler.walk(), &[0, 1, 2, 0]);
        assert_eq!(euler.iterations(), 1);
        assert!(euler.covers_all_edges());
        assert_eq!(euler[2], 2);
    }

    #[test]
    fn backtracking_splices_detours() {
        // Triangle 0-1-2 plus triangle 1-3-4 hanging off vertex 1.
        let g = AdjListGraph::from_edges(5, [(0, 1), (1, 2), (2, 0), (1, 3), (3, 4), (4, 1)]);
        let euler = EulerWalk::new(&g, 0);
        assert!(euler.has_circuit());
        assert_eq!(euler.walk(), &[0, 1, 3, 4, 1, 2, 0]);
        assert_eq!(euler.iterations(), 2);
    }

    #[test]
    fn path_from_even_start_begins_at_odd_vertex() {
        let g = AdjMatrixGraph::from_edges(3, [(0, 1), (1, 2)]);
        let euler = EulerWalk::new(&g, 1);
        assert!(euler.has_path());
        assert_eq!(euler.walk(), &[0, 1, 2]);
    }

    #[test]
    fn isolated_or_invalid_start_has_no_walk() {
        let g = AdjListGraph::from_edges(3, [(0, 1)]);
        assert_eq!(classify(&g, 2), EulerKind::None);
        assert_eq!(classify(&g, 9), EulerKind::None);
        let euler = EulerWalk::new(&g, 2);
        assert!(euler.is_empty());
        assert!(!euler.covers_all_edges());
        assert_eq!(euler.iterations(), 0);
    }

    #[test]
    fn too_many_odd_vertices() {
        let g = AdjListGraph::from_edges(4, [(0, 1), (0, 2), (0, 3)]);
        assert_eq!(classify(&g, 0), EulerKind::None);
        assert!(EulerWalk::new(&g, 0).is_empty());
    }

    #[test]
    fn caller_graph_is_untouched() {
        let g = AdjListGraph::from_edges(4, [(0, 1), (1, 2), (2, 3), (3, 0)]);
        let euler = EulerWalk::new(&g, 0);
        assert_eq!(euler.len(), 5);
        assert_eq!(g.edge_count(), 4);
        for v in 0..4 {
            assert_eq!(g.degree(v), 2);
        }
    }
}
