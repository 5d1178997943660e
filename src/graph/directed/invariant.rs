//! Debug-only consistency checks between the two edge representations.
//!
//! Compiled to nothing in release builds.

use super::DirectedGraph;

/// Debug-asserts a structural invariant with a message.
#[cfg(debug_assertions)]
#[inline(always)]
fn invariant_assert(condition: bool, message: &str) {
    debug_assert!(condition, "Graph invariant violated: {message}");
}

/// Checks every invariant that must hold between public calls.
///
/// - each positional key resolves, and the arena holds nothing else;
/// - the edge list is sorted by head;
/// - adjacency and edge list describe the same multiset of position pairs.
#[cfg(debug_assertions)]
pub(super) fn check<T>(graph: &DirectedGraph<T>) {
    use std::collections::HashMap;

    invariant_assert(
        graph.arena.len() == graph.order.len(),
        "arena holds nodes that have no position",
    );

    let mut position = HashMap::with_capacity(graph.order.len());
    for (i, &key) in graph.order.iter().enumerate() {
        invariant_assert(graph.arena.contains(key), "positional key does not resolve");
        position.insert(key, i);
    }

    invariant_assert(graph.edges.is_sorted_by_head(), "edge list is not sorted by head");

    let mut from_adjacency = Vec::with_capacity(graph.edges.len());
    for (head, &key) in graph.order.iter().enumerate() {
        for target in &graph.node(key).out {
            match position.get(target) {
                Some(&tail) => from_adjacency.push((head, tail)),
                None => invariant_assert(false, "adjacency entry names an erased node"),
            }
        }
    }

    let mut from_list: Vec<_> = graph.edges().iter().map(|e| (e.head(), e.tail())).collect();
    from_adjacency.sort_unstable();
    from_list.sort_unstable();
    invariant_assert(
        from_adjacency == from_list,
        "adjacency lists and edge list disagree",
    );
}

#[cfg(not(debug_assertions))]
#[inline(always)]
pub(super) fn check<T>(_graph: &DirectedGraph<T>) {}
