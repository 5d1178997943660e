//! Node storage record.

use crate::alloc::NodeKey;

/// A stored value together with its outgoing adjacency.
///
/// `out` holds observing keys into the owning graph's arena. Duplicates and
/// a key naming the node itself are legal (multi-edges and self-loops).
#[derive(Debug, Clone)]
pub(crate) struct Node<T> {
    pub(crate) value: T,
    pub(crate) out: Vec<NodeKey>,
}

impl<T> Node<T> {
    #[inline]
    pub(crate) fn new(value: T) -> Self {
        Self { value, out: Vec::new() }
    }

    /// Number of adjacency entries resolving to `target`.
    #[inline]
    pub(crate) fn count_to(&self, target: NodeKey) -> usize {
        self.out.iter().filter(|&&k| k == target).count()
    }

    /// Removes the highest-index entry for `target`. Returns whether one was found.
    pub(crate) fn remove_last_to(&mut self, target: NodeKey) -> bool {
        match self.out.iter().rposition(|&k| k == target) {
            Some(pos) => {
                self.out.remove(pos);
                true
            }
            None => false,
        }
    }

    /// Removes every entry for `target`, returning how many were dropped.
    pub(crate) fn remove_all_to(&mut self, target: NodeKey) -> usize {
        let before = self.out.len();
        self.out.retain(|&k| k != target);
        before - self.out.len()
    }
}
