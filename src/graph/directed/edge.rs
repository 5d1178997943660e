//! Position-keyed edge records and the canonical head-sorted edge list.
//!
//! The list is the second of the graph's two representations. It is kept
//! sorted by `head` at all times and ties keep insertion order, which is
//! what makes both the text dump ordering and graph equality deterministic.

use core::fmt;
use core::ops::Range;

/// A directed edge between two node positions.
///
/// Equality compares both endpoints. There is intentionally no `Ord`
/// implementation: the list orders edges by `head` alone, which would be
/// inconsistent with `Eq`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DirectedEdge {
    head: usize,
    tail: usize,
}

impl DirectedEdge {
    /// Creates the edge `head -> tail`.
    #[inline]
    pub const fn new(head: usize, tail: usize) -> Self {
        Self { head, tail }
    }

    /// Position of the starting node.
    #[inline]
    pub const fn head(&self) -> usize {
        self.head
    }

    /// Position of the ending node.
    #[inline]
    pub const fn tail(&self) -> usize {
        self.tail
    }

    /// Returns `true` if either endpoint is `position`.
    #[inline]
    pub const fn touches(&self, position: usize) -> bool {
        self.head == position || self.tail == position
    }

    /// Returns `true` for a self-loop.
    #[inline]
    pub const fn is_loop(&self) -> bool {
        self.head == self.tail
    }
}

impl fmt::Display for DirectedEdge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.head, self.tail)
    }
}

impl From<(usize, usize)> for DirectedEdge {
    fn from((head, tail): (usize, usize)) -> Self {
        Self::new(head, tail)
    }
}

/// Edge records sorted by head, stable with respect to insertion order.
///
/// ### Performance Characteristics
/// | Operation | Complexity | Notes |
/// |-----------|------------|-------|
/// | `insert` | \(O(m)\) | binary search + shift |
/// | `remove_last` | \(O(m)\) | reverse scan |
/// | `remove_touching` | \(O(m)\) | single `retain` pass |
/// | `contains` | \(O(\log m + d)\) | searches only the head's run |
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct EdgeList {
    edges: Vec<DirectedEdge>,
}

impl EdgeList {
    pub(crate) const fn new() -> Self {
        Self { edges: Vec::new() }
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.edges.len()
    }

    #[inline]
    pub(crate) fn as_slice(&self) -> &[DirectedEdge] {
        &self.edges
    }

    /// Inserts after every edge with a head `<=` the new one.
    ///
    /// Produces the same sequence as appending and then stably sorting by
    /// head, without the sort.
    pub(crate) fn insert(&mut self, edge: DirectedEdge) {
        let at = self.edges.partition_point(|e| e.head <= edge.head);
        self.edges.insert(at, edge);
    }

    /// Removes the last record equal to `edge`.
    pub(crate) fn remove_last(&mut self, edge: DirectedEdge) -> bool {
        let run = self.head_run(edge.head);
        match self.edges[run.clone()].iter().rposition(|e| *e == edge) {
            Some(offset) => {
                self.edges.remove(run.start + offset);
                true
            }
            None => false,
        }
    }

    /// Drops every record with `position` at either end.
    pub(crate) fn remove_touching(&mut self, position: usize) -> usize {
        let before = self.edges.len();
        self.edges.retain(|e| !e.touches(position));
        before - self.edges.len()
    }

    /// Shifts every endpoint above `erased` down by one.
    ///
    /// Must run after `remove_touching(erased)`. A uniform decrement keeps
    /// relative order, so the list stays sorted.
    pub(crate) fn close_gap(&mut self, erased: usize) {
        for e in &mut self.edges {
            debug_assert!(!e.touches(erased), "edge {e} still touches erased node {erased}");
            if e.head > erased {
                e.head -= 1;
            }
            if e.tail > erased {
                e.tail -= 1;
            }
        }
    }

    pub(crate) fn contains(&self, edge: DirectedEdge) -> bool {
        self.edges[self.head_run(edge.head)].iter().any(|e| e.tail == edge.tail)
    }

    /// Index range of the records whose head is `head`.
    pub(crate) fn head_run(&self, head: usize) -> Range<usize> {
        let start = self.edges.partition_point(|e| e.head < head);
        let end = start + self.edges[start..].partition_point(|e| e.head == head);
        start..end
    }

    #[cfg_attr(not(debug_assertions), allow(dead_code))]
    pub(crate) fn is_sorted_by_head(&self) -> bool {
        self.edges.windows(2).all(|w| w[0].head <= w[1].head)
    }

    pub(crate) fn clear(&mut self) {
        self.edges.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list(pairs: &[(usize, usize)]) -> EdgeList {
        let mut l = EdgeList::new();
        for &p in pairs {
            l.insert(p.into());
        }
        l
    }

    fn pairs(l: &EdgeList) -> Vec<(usize, usize)> {
        l.as_slice().iter().map(|e| (e.head(), e.tail())).collect()
    }

    #[test]
    fn insert_matches_append_then_stable_sort() {
        let input = [(2, 0), (0, 3), (1, 1), (0, 1), (2, 2), (0, 0)];
        let l = list(&input);

        let mut expected = input.to_vec();
        expected.sort_by_key(|&(h, _)| h);
        assert_eq!(pairs(&l), expected);
        assert!(l.is_sorted_by_head());
    }

    #[test]
    fn remove_last_takes_latest_duplicate() {
        let mut l = list(&[(0, 1), (0, 2), (0, 1)]);
        assert!(l.remove_last(DirectedEdge::new(0, 1)));
        assert_eq!(pairs(&l), vec![(0, 1), (0, 2)]);
        assert!(!l.remove_last(DirectedEdge::new(1, 0)));
    }

    #[test]
    fn remove_touching_drops_both_directions() {
        let mut l = list(&[(0, 1), (1, 2), (2, 0), (2, 2)]);
        assert_eq!(l.remove_touching(1), 2);
        assert_eq!(pairs(&l), vec![(2, 0), (2, 2)]);
    }

    #[test]
    fn close_gap_shifts_higher_positions() {
        let mut l = list(&[(0, 3), (2, 0), (3, 2)]);
        l.close_gap(1);
        assert_eq!(pairs(&l), vec![(0, 2), (1, 0), (2, 1)]);
        assert!(l.is_sorted_by_head());
    }

    #[test]
    fn contains_and_head_run() {
        let l = list(&[(0, 1), (1, 2), (1, 0), (3, 3)]);
        assert_eq!(l.head_run(1), 1..3);
        assert_eq!(l.head_run(2), 3..3);
        assert!(l.contains(DirectedEdge::new(1, 0)));
        assert!(!l.contains(DirectedEdge::new(2, 1)));
        assert!(l.contains(DirectedEdge::new(3, 3)));
    }
}
