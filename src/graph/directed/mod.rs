//! A positional directed graph with two synchronized edge representations.
//!
//! Every node lives in a generational `NodeArena` owned by the graph, and
//! positions are a dense `Vec<NodeKey>` over that arena. Edges are recorded
//! twice:
//! - per node, as a list of observing `NodeKey`s to its successors (used by
//!   traversal and degree queries), and
//! - graph-wide, as [`DirectedEdge`] position pairs kept sorted by head (used
//!   for equality, edge lookup and deterministic output).
//!
//! Each public mutation validates all of its positions first and then
//! updates both representations before returning. Adjacency keys never own
//! their target, so mutually adjacent nodes do not form ownership cycles,
//! and a key naming an erased node simply stops resolving.
//!
//! ```rust
//! use digraph::DirectedGraph;
//!
//! let mut g = DirectedGraph::from(["A", "B", "C"]);
//! g.connect(0, 1)?;
//! g.connect(1, 2)?;
//! assert_eq!(g.to_string(), "A -> B\nB -> C\n");
//!
//! let mut cursor = g.begin()?;
//! cursor.next(&g, 0)?;
//! assert_eq!(*cursor.get(&g)?, "B");
//! # Ok::<(), digraph::GraphError>(())
//! ```

mod cursor;
mod edge;
mod display;
mod invariant;
mod node;
mod query;
#[cfg(feature = "proptest")]
pub mod strategy;

use core::ops::{Index, IndexMut};
use core::sync::atomic::{AtomicU64, Ordering};

use crate::alloc::{NodeArena, NodeKey};
use crate::error::{GraphError, IndexRole, Result};
use crate::trace::graph_trace;

pub use cursor::Cursor;
pub use edge::DirectedEdge;
pub use query::GraphStatistics;

use edge::EdgeList;
use node::Node;

/// Runtime brand distinguishing one graph instance from another.
///
/// Cursors record the brand of the graph that issued them so they cannot
/// silently resolve against a clone or an unrelated graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct GraphId(u64);

impl GraphId {
    fn fresh() -> Self {
        static NEXT: AtomicU64 = AtomicU64::new(0);
        GraphId(NEXT.fetch_add(1, Ordering::Relaxed))
    }
}

/// An ordered collection of values connected by directed edges.
///
/// Self-loops and parallel edges are allowed. Positions are dense
/// (`0..len()`) and shift down when a node is erased.
///
/// ### Performance Characteristics
/// | Operation | Complexity | Notes |
/// |-----------|------------|-------|
/// | `push_back` | \(O(1)\) amortized | |
/// | `connect` | \(O(m)\) | sorted insert into the edge list |
/// | `disconnect` | \(O(d + m)\) | last match in both representations |
/// | `disconnect_all` | \(O(n + m)\) | scans every adjacency list |
/// | `erase` | \(O(n + m)\) | `disconnect_all` + compaction |
/// | `outdegree` | \(O(1)\) | |
/// | `indegree` | \(O(n + m)\) | scans every adjacency list |
/// | `contains_edge` | \(O(\log m + d)\) | binary search on the edge list |
pub struct DirectedGraph<T> {
    id: GraphId,
    arena: NodeArena<Node<T>>,
    order: Vec<NodeKey>,
    edges: EdgeList,
}

impl<T> DirectedGraph<T> {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self {
            id: GraphId::fresh(),
            arena: NodeArena::new(),
            order: Vec::new(),
            edges: EdgeList::new(),
        }
    }

    /// Creates an empty graph with room for `capacity` nodes.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            id: GraphId::fresh(),
            arena: NodeArena::with_capacity(capacity),
            order: Vec::with_capacity(capacity),
            edges: EdgeList::new(),
        }
    }

    /// Creates a graph of `n` default-valued, unconnected nodes.
    pub fn with_default(n: usize) -> Self
    where
        T: Default,
    {
        core::iter::repeat_with(T::default).take(n).collect()
    }

    /// Creates a graph of `n` unconnected copies of `value`.
    pub fn from_elem(n: usize, value: T) -> Self
    where
        T: Clone,
    {
        core::iter::repeat(value).take(n).collect()
    }

    /// Number of nodes.
    #[inline]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Alias of [`len`](Self::len).
    #[inline]
    pub fn size(&self) -> usize {
        self.len()
    }

    /// Returns `true` if the graph has no nodes.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Alias of [`is_empty`](Self::is_empty).
    #[inline]
    pub fn empty(&self) -> bool {
        self.is_empty()
    }

    /// Appends an unconnected node and returns its position.
    pub fn push_back(&mut self, value: T) -> usize {
        let position = self.order.len();
        let key = self.arena.insert(Node::new(value));
        self.order.push(key);
        graph_trace!(position, "push_back");
        position
    }

    /// Adds the edge `from -> to`.
    ///
    /// The new record is placed after every existing edge with the same head,
    /// so the edge list stays stably sorted. Loops and duplicates are kept.
    ///
    /// # Errors
    /// `IndexOutOfRange` with role `StartingNode` or `EndingNode`.
    pub fn connect(&mut self, from: usize, to: usize) -> Result<()> {
        let head = self.key_at(from, IndexRole::StartingNode)?;
        let tail = self.key_at(to, IndexRole::EndingNode)?;

        if let Some(node) = self.arena.get_mut(head) {
            node.out.push(tail);
        }
        self.edges.insert(DirectedEdge::new(from, to));

        graph_trace!(from, to, edges = self.edges.len(), "connect");
        invariant::check(self);
        Ok(())
    }

    /// Removes one occurrence of the edge `from -> to`.
    ///
    /// The last matching adjacency entry and the last matching edge record are
    /// dropped, so parallel edges are peeled off one at a time. Returns
    /// `false` (and changes nothing) if no such edge exists.
    ///
    /// # Errors
    /// `IndexOutOfRange` with role `StartingNode` or `EndingNode`.
    pub fn disconnect(&mut self, from: usize, to: usize) -> Result<bool> {
        let head = self.key_at(from, IndexRole::StartingNode)?;
        let tail = self.key_at(to, IndexRole::EndingNode)?;

        let in_adjacency = self
            .arena
            .get_mut(head)
            .is_some_and(|node| node.remove_last_to(tail));
        let in_list = self.edges.remove_last(DirectedEdge::new(from, to));
        debug_assert_eq!(in_adjacency, in_list, "edge {from} -> {to} present in one representation only");

        graph_trace!(from, to, removed = in_list, "disconnect");
        invariant::check(self);
        Ok(in_list)
    }

    /// Removes every edge that starts or ends at `k`. The node itself stays.
    ///
    /// Returns the number of edges removed.
    ///
    /// # Errors
    /// `IndexOutOfRange` with role `Node`.
    pub fn disconnect_all(&mut self, k: usize) -> Result<usize> {
        let key = self.key_at(k, IndexRole::Node)?;
        let removed = self.isolate(k, key);

        graph_trace!(node = k, removed, "disconnect_all");
        invariant::check(self);
        Ok(removed)
    }

    fn isolate(&mut self, k: usize, key: NodeKey) -> usize {
        if let Some(node) = self.arena.get_mut(key) {
            node.out.clear();
        }
        for &other in &self.order {
            if let Some(node) = self.arena.get_mut(other) {
                node.remove_all_to(key);
            }
        }
        self.edges.remove_touching(k)
    }

    /// Removes the node at `k` with all of its edges and returns its value.
    ///
    /// Later nodes move down one position, and the edge list is renumbered to
    /// match, so position pairs keep naming the same nodes they did before.
    ///
    /// # Errors
    /// `IndexOutOfRange` with role `Node`.
    pub fn erase(&mut self, k: usize) -> Result<T> {
        let key = self.key_at(k, IndexRole::Node)?;
        self.isolate(k, key);

        self.order.remove(k);
        self.edges.close_gap(k);
        let Some(node) = self.arena.remove(key) else {
            unreachable!("positional key {key:?} does not resolve");
        };

        graph_trace!(node = k, size = self.order.len(), "erase");
        invariant::check(self);
        Ok(node.value)
    }

    /// Removes all nodes and edges.
    ///
    /// Cursors issued before the call report `StaleCursor` afterwards.
    pub fn clear(&mut self) {
        self.edges.clear();
        self.arena.clear();
        self.order.clear();
        graph_trace!("clear");
        invariant::check(self);
    }

    /// Exchanges the contents of two graphs, cursors included: a cursor keeps
    /// following its nodes into the other value.
    pub fn swap(&mut self, other: &mut Self) {
        core::mem::swap(self, other);
    }

    /// First node's value.
    ///
    /// # Errors
    /// `EmptyContainer` if the graph has no nodes.
    pub fn front(&self) -> Result<&T> {
        let key = *self.order.first().ok_or(GraphError::EmptyContainer)?;
        Ok(&self.node(key).value)
    }

    /// Mutable counterpart of [`front`](Self::front).
    ///
    /// # Errors
    /// `EmptyContainer` if the graph has no nodes.
    pub fn front_mut(&mut self) -> Result<&mut T> {
        let key = *self.order.first().ok_or(GraphError::EmptyContainer)?;
        Ok(&mut self.node_mut(key).value)
    }

    /// Value at position `k`.
    ///
    /// # Errors
    /// `IndexOutOfRange` with role `Node`.
    pub fn at(&self, k: usize) -> Result<&T> {
        let key = self.key_at(k, IndexRole::Node)?;
        Ok(&self.node(key).value)
    }

    /// Mutable counterpart of [`at`](Self::at).
    ///
    /// # Errors
    /// `IndexOutOfRange` with role `Node`.
    pub fn at_mut(&mut self, k: usize) -> Result<&mut T> {
        let key = self.key_at(k, IndexRole::Node)?;
        Ok(&mut self.node_mut(key).value)
    }

    /// Value at position `k`, or `None` if out of range.
    pub fn get(&self, k: usize) -> Option<&T> {
        self.at(k).ok()
    }

    /// Mutable value at position `k`, or `None` if out of range.
    pub fn get_mut(&mut self, k: usize) -> Option<&mut T> {
        self.at_mut(k).ok()
    }

    /// Iterates over node values in position order.
    pub fn values(&self) -> impl ExactSizeIterator<Item = &T> + '_ {
        self.order.iter().map(move |&key| &self.node(key).value)
    }

    /// The canonical edge list: sorted by head, ties in insertion order.
    pub fn edges(&self) -> &[DirectedEdge] {
        self.edges.as_slice()
    }

    /// Total number of edges, counting loops and duplicates.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Returns a cursor on the first node.
    ///
    /// # Errors
    /// `EmptyContainer` if the graph has no nodes.
    pub fn begin(&self) -> Result<Cursor> {
        let key = *self.order.first().ok_or(GraphError::EmptyContainer)?;
        Ok(Cursor::bound(self.id, key))
    }

    /// Returns a cursor on the node at position `k`.
    ///
    /// # Errors
    /// `IndexOutOfRange` with role `Node`.
    pub fn cursor_at(&self, k: usize) -> Result<Cursor> {
        let key = self.key_at(k, IndexRole::Node)?;
        Ok(Cursor::bound(self.id, key))
    }

    #[inline]
    fn key_at(&self, k: usize, role: IndexRole) -> Result<NodeKey> {
        self.order
            .get(k)
            .copied()
            .ok_or(GraphError::out_of_range(role, k))
    }

    /// Resolves a key taken from `order`. Those always name live nodes.
    #[inline]
    fn node(&self, key: NodeKey) -> &Node<T> {
        match self.arena.get(key) {
            Some(node) => node,
            None => unreachable!("positional key {key:?} does not resolve"),
        }
    }

    #[inline]
    fn node_mut(&mut self, key: NodeKey) -> &mut Node<T> {
        match self.arena.get_mut(key) {
            Some(node) => node,
            None => unreachable!("positional key {key:?} does not resolve"),
        }
    }

    fn position_of(&self, key: NodeKey) -> Option<usize> {
        self.order.iter().position(|&k| k == key)
    }
}

impl<T> Default for DirectedGraph<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for DirectedGraph<T> {
    /// Deep copy under a fresh identity.
    ///
    /// The arena is copied slot for slot, so adjacency keys (and their order)
    /// carry over unchanged; cursors of `self` do not resolve in the copy.
    fn clone(&self) -> Self {
        Self {
            id: GraphId::fresh(),
            arena: self.arena.clone(),
            order: self.order.clone(),
            edges: self.edges.clone(),
        }
    }

    fn clone_from(&mut self, source: &Self) {
        self.id = GraphId::fresh();
        self.arena.clone_from(&source.arena);
        self.order.clone_from(&source.order);
        self.edges.clone_from(&source.edges);
    }
}

impl<T> Index<usize> for DirectedGraph<T> {
    type Output = T;

    /// # Panics
    /// Panics if `k >= len()`. Use [`DirectedGraph::at`] for a checked lookup.
    fn index(&self, k: usize) -> &T {
        &self.node(self.order[k]).value
    }
}

impl<T> IndexMut<usize> for DirectedGraph<T> {
    /// # Panics
    /// Panics if `k >= len()`.
    fn index_mut(&mut self, k: usize) -> &mut T {
        let key = self.order[k];
        &mut self.node_mut(key).value
    }
}

impl<T> Extend<T> for DirectedGraph<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        let (lower, _) = iter.size_hint();
        self.arena.reserve(lower);
        self.order.reserve(lower);
        for value in iter {
            self.push_back(value);
        }
    }
}

impl<T> FromIterator<T> for DirectedGraph<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut graph = Self::new();
        graph.extend(iter);
        graph
    }
}

impl<T> From<Vec<T>> for DirectedGraph<T> {
    fn from(values: Vec<T>) -> Self {
        values.into_iter().collect()
    }
}

impl<T: Clone> From<&[T]> for DirectedGraph<T> {
    fn from(values: &[T]) -> Self {
        values.iter().cloned().collect()
    }
}

impl<T, const N: usize> From<[T; N]> for DirectedGraph<T> {
    fn from(values: [T; N]) -> Self {
        values.into_iter().collect()
    }
}
