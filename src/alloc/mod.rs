//! Node storage.
//!
//! The graph owns its nodes through a generational arena; every other
//! reference to a node is a copyable, non-owning `NodeKey`.

mod node_arena;

pub use node_arena::{NodeArena, NodeKey};
