//! Unweighted shortest paths, optionally avoiding one edge.

use crate::graph::traversal::{Bfs, BreadthFirst, Traversal};
use crate::graph::{Edge, UndirectedGraph};

/// Shortest path from `from` to `to` by hop count.
///
/// Returns the vertex sequence `from, .., to`, or `None` if `to` is
/// unreachable or either id is out of range.
pub fn shortest_path<G>(graph: &G, from: usize, to: usize) -> Option<Vec<usize>>
where
    G: UndirectedGraph + ?Sized,
{
    let mut bfs = Bfs::new(graph);
    search(&mut bfs, from, to)
}

/// Shortest path from `from` to `to` that never crosses `avoid`.
///
/// Applied to the endpoints of a back edge, this is exactly the tree-side of
/// the smallest cycle through that edge.
pub fn shortest_path_avoiding<G>(
    graph: &G,
    from: usize,
    to: usize,
    avoid: Edge,
) -> Option<Vec<usize>>
where
    G: UndirectedGraph + ?Sized,
{
    let mut bfs = Bfs::excluding(graph, avoid);
    search(&mut bfs, from, to)
}

fn search<G>(bfs: &mut Traversal<'_, G, BreadthFirst>, from: usize, to: usize) -> Option<Vec<usize>>
where
    G: UndirectedGraph + ?Sized,
{
    if !bfs.graph().contains_vertex(to) {
        return None;
    }
    bfs.walk(from);
    let mut path = bfs.path_to_root(to)?;
    if path.last() != Some(&from) {
        return None;
    }
    path.reverse();
    Some(path)
}
