//! `proptest` strategies producing arbitrary graphs.
//!
//! Available with the `proptest` feature.

use core::fmt::Debug;

use proptest::collection::vec;
use proptest::prelude::*;

use super::DirectedGraph;

/// Graphs with `1..=max_nodes` nodes drawn from `value` and up to
/// `max_edges` edges between uniformly chosen positions.
///
/// Loops and parallel edges are generated as readily as any other edge.
pub fn arb_graph<S>(
    value: S,
    max_nodes: usize,
    max_edges: usize,
) -> impl Strategy<Value = DirectedGraph<S::Value>>
where
    S: Strategy,
    S::Value: Clone + Debug,
{
    vec(value, 1..=max_nodes.max(1))
        .prop_flat_map(move |values| {
            let n = values.len();
            (Just(values), vec((0..n, 0..n), 0..=max_edges))
        })
        .prop_map(|(values, edges)| {
            let mut graph = DirectedGraph::from(values);
            for (from, to) in edges {
                graph
                    .connect(from, to)
                    .expect("generated positions are in range");
            }
            graph
        })
}

/// Sequences of `(from, to)` position pairs valid for a graph of `nodes`
/// nodes. Useful for driving `connect`/`disconnect` against a model.
pub fn arb_edges(nodes: usize, max_edges: usize) -> impl Strategy<Value = Vec<(usize, usize)>> {
    let n = nodes.max(1);
    vec((0..n, 0..n), 0..=max_edges)
}

#[cfg(test)]
mod tests {
    use super::*;

    proptest! {
        #[test]
        fn generated_graphs_stay_within_bounds(graph in arb_graph(any::<u8>(), 6, 12)) {
            prop_assert!((1..=6).contains(&graph.len()));
            prop_assert!(graph.edge_count() <= 12);
            prop_assert!(graph.edges().iter().all(|e| e.head() < graph.len() && e.tail() < graph.len()));
        }

        #[test]
        fn generated_edges_connect(edges in arb_edges(4, 10)) {
            let mut graph = DirectedGraph::from([(); 4]);
            for (a, b) in edges {
                prop_assert!(graph.connect(a, b).is_ok());
            }
        }
    }
}
