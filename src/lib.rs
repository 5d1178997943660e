//! # `digraph` - Dual-Representation Directed Graph
//!
//! A generic directed-graph container: an ordered collection of values
//! connected by directed edges, with insertion, erasure,
//! connection/disconnection, degree queries, structural equality and a
//! branch-selecting cursor.
//!
//! ## Architecture
//!
//! Edges are stored twice and kept in lockstep by every public call:
//!
//! 1. **Adjacency** (`Node::out`):
//!    - per-node list of successor handles, in connection order
//!    - handles are generational `NodeKey`s into the graph's `NodeArena`
//!    - drives traversal, `outdegree` and `indegree`
//!
//! 2. **Edge list** ([`DirectedEdge`]):
//!    - graph-wide `(head, tail)` position pairs
//!    - sorted by head; ties stay in insertion order
//!    - drives equality, edge lookup and deterministic ordering
//!
//! ### Ownership
//!
//! The arena is the only owner of node values. Adjacency entries and cursors
//! hold keys that never keep a node alive, so mutually adjacent nodes form
//! no ownership cycle, and a key to an erased node resolves to "absent"
//! instead of dangling.
//!
//! ### Invariants
//!
//! - Positions are dense `0..len()`; erasing compacts them and renumbers the
//!   edge list.
//! - Adjacency and edge list describe the same multiset of edges.
//! - Every call validates its positions before mutating; an error leaves the
//!   graph untouched.
//!
//! Debug builds re-check these after every mutation.
//!
//! ## Features
//!
//! - `tracing`: emit `trace`-level events for structural mutations
//! - `proptest`: export strategies generating arbitrary graphs
//!
//! ## Example
//!
//! ```rust
//! use digraph::DirectedGraph;
//!
//! let mut graph = DirectedGraph::from(["A", "B", "C"]);
//! graph.connect(0, 1)?;
//! graph.connect(1, 2)?;
//!
//! assert_eq!(graph.indegree(2)?, 1);
//! assert!(graph.simple());
//! assert_eq!(graph.to_string(), "A -> B\nB -> C\n");
//!
//! graph.disconnect_all(1)?;
//! assert_eq!(graph.to_string(), "A\nB\nC\n");
//! # Ok::<(), digraph::GraphError>(())
//! ```

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

mod alloc;
pub mod error;
pub mod graph;
mod trace;

use alloc::NodeKey;
pub use error::{GraphError, IndexRole, Result};
pub use graph::{Cursor, DirectedEdge, DirectedGraph, GraphStatistics};

// Compile-time assertions for memory layout
const _: () = {
    use core::mem;

    // Keys are two 32-bit words.
    assert!(mem::size_of::<NodeKey>() == 8);

    // Edges are two positions, no padding.
    assert!(mem::size_of::<DirectedEdge>() == 2 * mem::size_of::<usize>());

    // A cursor is a tag plus a graph brand and a key.
    assert!(mem::size_of::<Cursor>() <= 3 * mem::size_of::<u64>());
};
