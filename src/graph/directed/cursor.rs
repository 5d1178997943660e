//! Identity-based traversal handle.
//!
//! A [`Cursor`] does not borrow its graph. It records the graph's brand and
//! the arena key of the node it sits on, and every operation takes the graph
//! explicitly. The graph can therefore be mutated between steps; the cursor
//! keeps pointing at the same node no matter how positions shift, and only
//! becomes stale when that node itself is erased.

use super::{DirectedGraph, GraphId, Node};
use crate::alloc::NodeKey;
use crate::error::{GraphError, IndexRole, Result};

/// Where a cursor currently points.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub(crate) enum CursorState {
    #[default]
    Unbound,
    Bound { graph: GraphId, node: NodeKey },
}

/// A manual walker over outgoing edges.
///
/// Obtained from [`DirectedGraph::begin`] or [`DirectedGraph::cursor_at`];
/// `Cursor::default()` is unbound. Moving is done one branch at a time with
/// [`next`](Self::next). There is no `Iterator` implementation.
///
/// Two cursors are equal when both are unbound, or both sit on the same node
/// of the same graph.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Cursor {
    state: CursorState,
}

impl Cursor {
    /// Creates an unbound cursor.
    pub const fn new() -> Self {
        Self {
            state: CursorState::Unbound,
        }
    }

    #[inline]
    pub(crate) const fn bound(graph: GraphId, node: NodeKey) -> Self {
        Self {
            state: CursorState::Bound { graph, node },
        }
    }

    /// Returns `true` if the cursor was issued by a graph.
    #[inline]
    pub const fn is_bound(&self) -> bool {
        matches!(self.state, CursorState::Bound { .. })
    }

    /// Moves to the target of the `k`-th outgoing edge of the current node.
    ///
    /// On error the cursor does not move.
    ///
    /// # Errors
    /// `NullCursor`, `ForeignCursor` or `StaleCursor` if the cursor cannot be
    /// resolved against `graph`; `IndexOutOfRange` with role `TailIndex` if
    /// `k >= outdegree`.
    pub fn next<T>(&mut self, graph: &DirectedGraph<T>, k: usize) -> Result<()> {
        let node = graph.cursor_node(self)?;
        let target = *node
            .out
            .get(k)
            .ok_or(GraphError::out_of_range(IndexRole::TailIndex, k))?;
        self.state = CursorState::Bound {
            graph: graph.id,
            node: target,
        };
        Ok(())
    }

    /// Value of the current node.
    ///
    /// # Errors
    /// `NullCursor`, `ForeignCursor` or `StaleCursor`.
    pub fn get<'g, T>(&self, graph: &'g DirectedGraph<T>) -> Result<&'g T> {
        graph.cursor_node(self).map(|node| &node.value)
    }

    /// Mutable value of the current node.
    ///
    /// # Errors
    /// `NullCursor`, `ForeignCursor` or `StaleCursor`.
    pub fn get_mut<'g, T>(&self, graph: &'g mut DirectedGraph<T>) -> Result<&'g mut T> {
        let key = graph.cursor_key(self)?;
        Ok(&mut graph.node_mut(key).value)
    }

    /// Out-degree of the current node.
    ///
    /// # Errors
    /// `NullCursor`, `ForeignCursor` or `StaleCursor`.
    pub fn outdegree<T>(&self, graph: &DirectedGraph<T>) -> Result<usize> {
        graph.cursor_node(self).map(|node| node.out.len())
    }

    /// Current position of the node under the cursor. \(O(n)\).
    ///
    /// # Errors
    /// `NullCursor`, `ForeignCursor` or `StaleCursor`.
    pub fn position<T>(&self, graph: &DirectedGraph<T>) -> Result<usize> {
        let key = graph.cursor_key(self)?;
        graph.position_of(key).ok_or(GraphError::StaleCursor)
    }
}

impl<T> DirectedGraph<T> {
    fn cursor_key(&self, cursor: &Cursor) -> Result<NodeKey> {
        match cursor.state {
            CursorState::Unbound => Err(GraphError::NullCursor),
            CursorState::Bound { graph, .. } if graph != self.id => Err(GraphError::ForeignCursor),
            CursorState::Bound { node, .. } if self.arena.contains(node) => Ok(node),
            CursorState::Bound { .. } => Err(GraphError::StaleCursor),
        }
    }

    fn cursor_node(&self, cursor: &Cursor) -> Result<&Node<T>> {
        let key = self.cursor_key(cursor)?;
        Ok(self.node(key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chain() -> DirectedGraph<&'static str> {
        let mut g = DirectedGraph::from(["A", "B", "C"]);
        g.connect(0, 1).unwrap();
        g.connect(1, 2).unwrap();
        g.connect(1, 0).unwrap();
        g
    }

    #[test]
    fn default_cursor_is_unbound() {
        let g = chain();
        let mut c = Cursor::default();
        assert!(!c.is_bound());
        assert_eq!(c, Cursor::new());
        assert_eq!(c.get(&g), Err(GraphError::NullCursor));
        assert_eq!(c.outdegree(&g), Err(GraphError::NullCursor));
        assert_eq!(c.next(&g, 0), Err(GraphError::NullCursor));
        assert_eq!(c.position(&g), Err(GraphError::NullCursor));
    }

    #[test]
    fn walks_selected_branches() {
        let g = chain();
        let mut c = g.begin().unwrap();
        assert_eq!(*c.get(&g).unwrap(), "A");
        assert_eq!(c.outdegree(&g), Ok(1));

        c.next(&g, 0).unwrap();
        assert_eq!(*c.get(&g).unwrap(), "B");
        assert_eq!(c.outdegree(&g), Ok(2));

        c.next(&g, 1).unwrap();
        assert_eq!(*c.get(&g).unwrap(), "A");
        assert_eq!(c, g.begin().unwrap());
    }

    #[test]
    fn next_past_outdegree_is_rejected_without_moving() {
        let g = chain();
        let mut c = g.cursor_at(2).unwrap();
        assert_eq!(
            c.next(&g, 0),
            Err(GraphError::IndexOutOfRange {
                role: IndexRole::TailIndex,
                index: 0
            })
        );
        assert_eq!(c.position(&g), Ok(2));
    }

    #[test]
    fn get_mut_writes_through() {
        let mut g = chain();
        let c = g.cursor_at(1).unwrap();
        *c.get_mut(&mut g).unwrap() = "b";
        assert_eq!(g[1], "b");
    }

    #[test]
    fn foreign_and_stale_cursors() {
        let mut g = chain();
        let copy = g.clone();
        let c = g.cursor_at(2).unwrap();
        assert_eq!(c.get(&copy), Err(GraphError::ForeignCursor));

        g.erase(2).unwrap();
        assert_eq!(c.get(&g), Err(GraphError::StaleCursor));

        let d = g.begin().unwrap();
        g.clear();
        assert_eq!(d.outdegree(&g), Err(GraphError::StaleCursor));
    }
}
