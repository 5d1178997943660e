//! Degree queries, simplicity, statistics and equality.

use std::collections::HashSet;

use super::{DirectedEdge, DirectedGraph};
use crate::error::{IndexRole, Result};

impl<T> DirectedGraph<T> {
    /// Number of edges ending at `k`, counting loops and duplicates.
    ///
    /// # Errors
    /// `IndexOutOfRange` with role `Node`.
    pub fn indegree(&self, k: usize) -> Result<usize> {
        let key = self.key_at(k, IndexRole::Node)?;
        Ok(self
            .order
            .iter()
            .map(|&other| self.node(other).count_to(key))
            .sum())
    }

    /// Number of edges starting at `k`, counting loops and duplicates.
    ///
    /// # Errors
    /// `IndexOutOfRange` with role `Node`.
    pub fn outdegree(&self, k: usize) -> Result<usize> {
        let key = self.key_at(k, IndexRole::Node)?;
        Ok(self.node(key).out.len())
    }

    /// Returns `true` if there is at least one edge `from -> to`.
    ///
    /// # Errors
    /// `IndexOutOfRange` with role `StartingNode` or `EndingNode`.
    pub fn contains_edge(&self, from: usize, to: usize) -> Result<bool> {
        self.key_at(from, IndexRole::StartingNode)?;
        self.key_at(to, IndexRole::EndingNode)?;
        Ok(self.edges.contains(DirectedEdge::new(from, to)))
    }

    /// Returns `true` if the graph has no self-loops and no parallel edges.
    pub fn simple(&self) -> bool {
        let mut seen = HashSet::new();
        self.order.iter().all(|&key| {
            seen.clear();
            self.node(key)
                .out
                .iter()
                .all(|&target| target != key && seen.insert(target))
        })
    }

    /// Computes basic graph statistics.
    pub fn statistics(&self) -> GraphStatistics {
        let mut min_outdegree = usize::MAX;
        let mut max_outdegree = 0;
        for &key in &self.order {
            let d = self.node(key).out.len();
            min_outdegree = min_outdegree.min(d);
            max_outdegree = max_outdegree.max(d);
        }
        if self.order.is_empty() {
            min_outdegree = 0;
        }

        GraphStatistics {
            node_count: self.len(),
            edge_count: self.edge_count(),
            min_outdegree,
            max_outdegree,
            self_loops: self.edges().iter().filter(|e| e.is_loop()).count(),
            simple: self.simple(),
        }
    }
}

/// Statistics about a graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GraphStatistics {
    /// Number of nodes.
    pub node_count: usize,
    /// Number of edges, counting duplicates.
    pub edge_count: usize,
    /// Minimum out-degree over all nodes (0 for an empty graph).
    pub min_outdegree: usize,
    /// Maximum out-degree over all nodes.
    pub max_outdegree: usize,
    /// Number of `k -> k` edges.
    pub self_loops: usize,
    /// Whether the graph has neither loops nor parallel edges.
    pub simple: bool,
}

/// Position-sensitive structural equality.
///
/// Equal size, equal values position by position, and element-wise equal
/// edge lists. Since ties among equal-head edges keep insertion order, two
/// graphs with the same edge multiset can still differ if those edges were
/// connected in a different order.
impl<T: PartialEq> PartialEq for DirectedGraph<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.values().eq(other.values()) && self.edges == other.edges
    }
}

impl<T: Eq> Eq for DirectedGraph<T> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn degrees_count_loops_and_duplicates() {
        let mut g = DirectedGraph::from([1, 2]);
        g.connect(0, 0).unwrap();
        g.connect(0, 1).unwrap();
        g.connect(0, 1).unwrap();

        assert_eq!(g.outdegree(0), Ok(3));
        assert_eq!(g.indegree(0), Ok(1));
        assert_eq!(g.indegree(1), Ok(2));
        assert_eq!(g.outdegree(1), Ok(0));
    }

    #[test]
    fn contains_edge_is_directional() {
        let mut g = DirectedGraph::from(['a', 'b']);
        g.connect(0, 1).unwrap();
        assert_eq!(g.contains_edge(0, 1), Ok(true));
        assert_eq!(g.contains_edge(1, 0), Ok(false));
        assert!(g.contains_edge(2, 0).is_err());
    }

    #[test]
    fn statistics_summary() {
        let mut g = DirectedGraph::from([0, 1, 2, 3]);
        for (a, b) in [(0, 1), (0, 2), (0, 3), (1, 2), (3, 1), (3, 2), (2, 2)] {
            g.connect(a, b).unwrap();
        }
        let stats = g.statistics();
        assert_eq!(stats.node_count, 4);
        assert_eq!(stats.edge_count, 7);
        assert_eq!(stats.min_outdegree, 1);
        assert_eq!(stats.max_outdegree, 3);
        assert_eq!(stats.self_loops, 1);
        assert!(!stats.simple);

        let empty = DirectedGraph::<u8>::new().statistics();
        assert_eq!(empty.min_outdegree, 0);
        assert!(empty.simple);
    }
}
