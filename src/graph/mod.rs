//! Graph containers.
//!
//! - `directed`: positional directed graph with per-node adjacency plus a
//!   canonical head-sorted edge list

pub mod directed;

pub use directed::{Cursor, DirectedEdge, DirectedGraph, GraphStatistics};
