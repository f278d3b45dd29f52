use std::collections::BTreeMap;

use halo_graph::{
    shortest_path, AdjListGraph, AdjMatrixGraph, Bfs, ConnectedComponents, Dfs, EulerKind,
    EulerWalk, Loops, UndirectedGraph,
};
use proptest::prelude::*;

fn graph_input() -> impl Strategy<Value = (usize, Vec<(usize, usize)>)> {
    (1usize..12).prop_flat_map(|n| {
        (
            Just(n),
            proptest::collection::vec((0..n, 0..n), 0..30),
        )
    })
}

fn key(a: usize, b: usize) -> (usize, usize) {
    (a.min(b), a.max(b))
}

fn check_parent_chains<G: UndirectedGraph>(g: &G) {
    let n = g.vertex_count();
    let mut dfs = Dfs::new(g);
    let mut bfs = Bfs::new(g);
    for root in 0..n {
        dfs.walk(root);
        bfs.walk(root);
    }
    assert_eq!(dfs.visited_count(), n);
    assert_eq!(bfs.visited_count(), n);

    for v in 0..n {
        for chain in [dfs.path_to_root(v), bfs.path_to_root(v)] {
            let chain = chain.expect("every vertex is visited");
            assert!(chain.len() <= n);
            for pair in chain.windows(2) {
                assert!(g.neighbors(pair[0]).any(|w| w == pair[1]));
            }
        }
    }
}

proptest! {
    #[test]
    fn parent_chains_reach_a_root((n, edges) in graph_input()) {
        check_parent_chains(&AdjListGraph::from_edges(n, edges.iter().copied()));
        check_parent_chains(&AdjMatrixGraph::from_edges(n, edges.iter().copied()));
    }

    #[test]
    fn single_root_dfs_covers_its_component((n, edges) in graph_input()) {
        let g = AdjListGraph::from_edges(n, edges.iter().copied());
        let cc = ConnectedComponents::new(&g);

        for root in 0..n {
            let mut dfs = Dfs::new(&g);
            let count = dfs.walk(root);
            let mut reached = dfs.order().to_vec();
            reached.sort_unstable();

            let id = cc.component_of(root).expect("every vertex has a component");
            let mut expected = cc.component(id).to_vec();
            expected.sort_unstable();

            prop_assert_eq!(count, expected.len());
            prop_assert_eq!(reached, expected);
        }
    }

    #[test]
    fn components_partition_vertices((n, edges) in graph_input()) {
        let g = AdjListGraph::from_edges(n, edges.iter().copied());
        let cc = ConnectedComponents::new(&g);

        let mut seen = vec![0usize; n];
        for (id, component) in cc.iter().enumerate() {
            prop_assert!(!component.is_empty());
            for &v in component {
                seen[v] += 1;
                prop_assert_eq!(cc.component_of(v), Some(id));
            }
        }
        prop_assert!(seen.iter().all(|&c| c == 1));

        for &(u, v) in &edges {
            prop_assert_eq!(cc.component_of(u), cc.component_of(v));
        }
    }

    #[test]
    fn loop_count_is_cyclomatic_number((n, edges) in graph_input()) {
        prop_assume!(n >= 2);
        let matrix = AdjMatrixGraph::from_edges(n, edges.iter().copied());
        let list = AdjListGraph::from_graph(&matrix);
        let components = ConnectedComponents::new(&matrix).count();
        let expected = matrix.edge_count() + components - n;

        for loops in [Loops::new(&matrix), Loops::new(&list)] {
            prop_assert_eq!(loops.count(), expected);
            for cycle in loops.iter() {
                prop_assert!(cycle.len() >= 4);
                prop_assert_eq!(cycle.first(), cycle.last());
                for pair in cycle.windows(2) {
                    prop_assert!(matrix.has_edge(pair[0], pair[1]));
                }

                let mut interior = cycle[..cycle.len() - 1].to_vec();
                interior.sort_unstable();
                interior.dedup();
                prop_assert_eq!(interior.len(), cycle.len() - 1, "loop {:?} repeats a vertex", cycle);
            }
        }
        prop_assert_eq!(Loops::new(&matrix), Loops::new(&list));
    }

    #[test]
    fn euler_walk_uses_each_reachable_edge_once(
        (n, edges) in graph_input(),
        pick in any::<prop::sample::Index>(),
    ) {
        let g = AdjListGraph::from_edges(n, edges.iter().copied());
        let start = pick.index(n);
        let euler = EulerWalk::new(&g, start);
        if euler.kind() == EulerKind::None {
            return Ok(());
        }

        let cc = ConnectedComponents::new(&g);
        let home = cc.component_of(start);
        let mut expected: BTreeMap<(usize, usize), usize> = BTreeMap::new();
        for &(u, v) in &edges {
            if cc.component_of(u) == home {
                *expected.entry(key(u, v)).or_default() += 1;
            }
        }
        let mut used: BTreeMap<(usize, usize), usize> = BTreeMap::new();
        for pair in euler.walk().windows(2) {
            *used.entry(key(pair[0], pair[1])).or_default() += 1;
        }
        prop_assert_eq!(used, expected);

        let walk = euler.walk();
        let (first, last) = (walk[0], walk[walk.len() - 1]);
        if euler.has_circuit() {
            prop_assert_eq!(first, last);
            prop_assert_eq!(first, start);
        } else {
            prop_assert_eq!(g.degree(first) % 2, 1);
            prop_assert_eq!(g.degree(last) % 2, 1);
            if g.degree(start) % 2 == 1 {
                prop_assert_eq!(first, start);
            }
        }
    }

    #[test]
    fn analyses_are_deterministic((n, edges) in graph_input(), start in 0usize..12) {
        let g = AdjListGraph::from_edges(n, edges.iter().copied());
        prop_assert_eq!(ConnectedComponents::new(&g), ConnectedComponents::new(&g));
        prop_assert_eq!(Loops::new(&g), Loops::new(&g));
        prop_assert_eq!(EulerWalk::new(&g, start), EulerWalk::new(&g, start));

        let copy = g.clone();
        let (a, b) = (EulerWalk::new(&g, start), EulerWalk::new(&copy, start));
        prop_assert_eq!(a.kind(), b.kind());
        prop_assert_eq!(a.len(), b.len());
    }

    #[test]
    fn shortest_paths_are_walks((n, edges) in graph_input(), from in 0usize..12, to in 0usize..12) {
        let g = AdjListGraph::from_edges(n, edges.iter().copied());
        if let Some(path) = shortest_path(&g, from, to) {
            prop_assert_eq!(path.first(), Some(&from));
            prop_assert_eq!(path.last(), Some(&to));
            for pair in path.windows(2) {
                prop_assert!(g.neighbors(pair[0]).any(|w| w == pair[1]));
            }
        } else {
            let cc = ConnectedComponents::new(&g);
            prop_assert!(
                to >= n || from >= n || cc.component_of(from) != cc.component_of(to)
            );
        }
    }
}
