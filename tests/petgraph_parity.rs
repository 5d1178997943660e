//! Cross-checks degrees, edge membership and erasure against `petgraph`.

use digraph::DirectedGraph;
use petgraph::stable_graph::{NodeIndex, StableDiGraph};
use petgraph::Direction;
use proptest::prelude::*;

fn assert_parity(ours: &DirectedGraph<u32>, theirs: &StableDiGraph<u32, ()>) {
    // Our positions are petgraph's surviving indices in ascending order.
    let live: Vec<NodeIndex> = theirs.node_indices().collect();
    assert_eq!(ours.len(), live.len());
    assert_eq!(ours.edge_count(), theirs.edge_count());

    for (k, &idx) in live.iter().enumerate() {
        assert_eq!(ours[k], theirs[idx], "value at {k}");
        assert_eq!(
            ours.outdegree(k).unwrap(),
            theirs.edges_directed(idx, Direction::Outgoing).count(),
            "outdegree of {k}"
        );
        assert_eq!(
            ours.indegree(k).unwrap(),
            theirs.edges_directed(idx, Direction::Incoming).count(),
            "indegree of {k}"
        );
        for (j, &other) in live.iter().enumerate() {
            assert_eq!(
                ours.contains_edge(k, j).unwrap(),
                theirs.find_edge(idx, other).is_some(),
                "edge {k} -> {j}"
            );
        }
    }
}

#[test]
fn small_graph_with_loops_and_parallel_edges() {
    let mut ours = DirectedGraph::from([0u32, 1, 2, 3]);
    let mut theirs = StableDiGraph::new();
    let idx: Vec<_> = (0u32..4).map(|v| theirs.add_node(v)).collect();

    for (a, b) in [(0, 1), (0, 1), (1, 1), (2, 0), (3, 2), (1, 3)] {
        ours.connect(a, b).unwrap();
        theirs.add_edge(idx[a], idx[b], ());
    }
    assert_parity(&ours, &theirs);

    ours.erase(1).unwrap();
    theirs.remove_node(idx[1]);
    assert_parity(&ours, &theirs);
}

proptest! {
    #[test]
    fn test_parity_under_connect_and_erase(
        n in 1usize..10,
        edges in proptest::collection::vec((0usize..10, 0usize..10), 0..30),
        erasures in proptest::collection::vec(0usize..10, 0..5),
    ) {
        let mut ours: DirectedGraph<u32> = DirectedGraph::new();
        let mut theirs = StableDiGraph::new();
        for v in 0..n {
            let v = u32::try_from(v).unwrap();
            ours.push_back(v);
            theirs.add_node(v);
        }

        for (a, b) in edges {
            let (a, b) = (a % n, b % n);
            ours.connect(a, b).unwrap();
            theirs.add_edge(NodeIndex::new(a), NodeIndex::new(b), ());
        }
        assert_parity(&ours, &theirs);

        for k in erasures {
            if ours.is_empty() {
                break;
            }
            let k = k % ours.len();
            let victim = theirs.node_indices().nth(k).unwrap();
            let value = ours.erase(k).unwrap();
            prop_assert_eq!(theirs.remove_node(victim), Some(value));
            assert_parity(&ours, &theirs);
        }
    }
}
