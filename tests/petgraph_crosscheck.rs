use halo_graph::{
    shortest_path, AdjListGraph, AdjMatrixGraph, ConnectedComponents, Loops, UndirectedGraph,
};
use petgraph::algo::{connected_components, dijkstra};
use petgraph::graph::{NodeIndex, UnGraph};
use proptest::prelude::*;

fn to_petgraph(n: usize, edges: &[(usize, usize)]) -> UnGraph<(), ()> {
    let mut g = UnGraph::with_capacity(n, edges.len());
    for _ in 0..n {
        g.add_node(());
    }
    for &(u, v) in edges {
        g.add_edge(NodeIndex::new(u), NodeIndex::new(v), ());
    }
    g
}

fn graph_input() -> impl Strategy<Value = (usize, Vec<(usize, usize)>)> {
    (1usize..16).prop_flat_map(|n| (Just(n), proptest::collection::vec((0..n, 0..n), 0..40)))
}

proptest! {
    #[test]
    fn component_count_matches_petgraph((n, edges) in graph_input()) {
        let reference = connected_components(&to_petgraph(n, &edges));
        let list = AdjListGraph::from_edges(n, edges.iter().copied());
        let matrix = AdjMatrixGraph::from_edges(n, edges.iter().copied());
        prop_assert_eq!(ConnectedComponents::new(&list).count(), reference);
        prop_assert_eq!(ConnectedComponents::new(&matrix).count(), reference);
    }

    #[test]
    fn hop_distances_match_petgraph((n, edges) in graph_input(), pick in any::<prop::sample::Index>()) {
        let from = pick.index(n);
        let reference = dijkstra(&to_petgraph(n, &edges), NodeIndex::new(from), None, |_| 1usize);
        let g = AdjListGraph::from_edges(n, edges.iter().copied());
        for to in 0..n {
            let ours = shortest_path(&g, from, to).map(|p| p.len() - 1);
            prop_assert_eq!(ours, reference.get(&NodeIndex::new(to)).copied());
        }
    }
}

#[test]
fn petersen_graph_has_six_loops() {
    let edges = [
        (0, 1), (1, 2), (2, 3), (3, 4), (4, 0),
        (0, 5), (1, 6), (2, 7), (3, 8), (4, 9),
        (5, 7), (7, 9), (9, 6), (6, 8), (8, 5),
    ];
    let g = AdjMatrixGraph::from_edges(10, edges);
    assert_eq!(connected_components(&to_petgraph(10, &edges)), 1);

    let loops = Loops::new(&g);
    assert_eq!(loops.count(), g.edge_count() - g.vertex_count() + 1);
    // Girth 5: no fundamental cycle can be shorter.
    for cycle in loops.iter() {
        assert!(cycle.len() >= 6);
    }
}
