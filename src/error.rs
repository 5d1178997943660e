//! Error types shared by the graph container and its cursor.

use core::fmt;

/// The role an out-of-range index played in the rejected call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IndexRole {
    /// A node position (`at`, `erase`, `indegree`, ...).
    Node,
    /// The head position of `connect`/`disconnect`.
    StartingNode,
    /// The tail position of `connect`/`disconnect`.
    EndingNode,
    /// An adjacency slot passed to `Cursor::next`.
    TailIndex,
}

impl IndexRole {
    fn describe(self) -> &'static str {
        match self {
            IndexRole::Node => "invalid node index in directed graph",
            IndexRole::StartingNode => "invalid starting node index in directed graph",
            IndexRole::EndingNode => "invalid ending node index in directed graph",
            IndexRole::TailIndex => "invalid tail node index for cursor",
        }
    }
}

/// Errors reported by [`DirectedGraph`](crate::DirectedGraph) and [`Cursor`](crate::Cursor).
///
/// Every fallible operation validates its arguments before touching either
/// representation, so receiving an error means the graph is unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GraphError {
    /// A position was `>= size()` (or `>= outdegree` for a cursor step).
    IndexOutOfRange {
        /// Which argument was rejected.
        role: IndexRole,
        /// The rejected value.
        index: usize,
    },
    /// `front`/`begin` on a graph with no nodes.
    EmptyContainer,
    /// A cursor operation was invoked on an unbound cursor.
    NullCursor,
    /// The cursor's node has been erased from its graph.
    StaleCursor,
    /// The cursor is bound to a different graph than the one supplied.
    ForeignCursor,
}

impl GraphError {
    #[inline]
    pub(crate) const fn out_of_range(role: IndexRole, index: usize) -> Self {
        GraphError::IndexOutOfRange { role, index }
    }

    /// Returns `true` for cursor misuse (null, stale or foreign cursor).
    ///
    /// These are programming errors, as opposed to range and emptiness
    /// failures which depend on the graph's current contents.
    pub const fn is_logic_error(&self) -> bool {
        matches!(
            self,
            GraphError::NullCursor | GraphError::StaleCursor | GraphError::ForeignCursor
        )
    }
}

impl fmt::Display for GraphError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GraphError::IndexOutOfRange { role, index } => {
                write!(f, "{}: {index}", role.describe())
            }
            GraphError::EmptyContainer => f.write_str("empty directed graph"),
            GraphError::NullCursor => f.write_str("cursor does not point to a directed graph"),
            GraphError::StaleCursor => f.write_str("cursor points to a node that has been erased"),
            GraphError::ForeignCursor => f.write_str("cursor belongs to a different directed graph"),
        }
    }
}

impl std::error::Error for GraphError {}

/// Result alias used throughout the crate.
pub type Result<T, E = GraphError> = core::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_role_and_index() {
        let err = GraphError::out_of_range(IndexRole::StartingNode, 7);
        assert_eq!(err.to_string(), "invalid starting node index in directed graph: 7");

        let err = GraphError::out_of_range(IndexRole::TailIndex, 2);
        assert_eq!(err.to_string(), "invalid tail node index for cursor: 2");
    }

    #[test]
    fn cursor_errors_are_logic_errors() {
        assert!(GraphError::NullCursor.is_logic_error());
        assert!(GraphError::StaleCursor.is_logic_error());
        assert!(GraphError::ForeignCursor.is_logic_error());
        assert!(!GraphError::EmptyContainer.is_logic_error());
        assert!(!GraphError::out_of_range(IndexRole::Node, 0).is_logic_error());
    }
}
