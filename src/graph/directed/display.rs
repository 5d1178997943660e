//! Diagnostic text output.

use core::fmt;
use std::collections::HashSet;

use super::DirectedGraph;

/// Line-oriented dump, one line per edge or isolated node.
///
/// Nodes are visited in position order. A node with neither incoming nor
/// outgoing edges prints its value alone; otherwise one
/// `"<value> -> <target value>"` line is printed per adjacency entry, in
/// adjacency order. A node with only incoming edges prints nothing itself.
/// Every line ends in `\n`. Values are not escaped.
impl<T: fmt::Display> fmt::Display for DirectedGraph<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let has_incoming: HashSet<_> = self
            .order
            .iter()
            .flat_map(|&key| self.node(key).out.iter().copied())
            .collect();

        for &key in &self.order {
            let node = self.node(key);
            if node.out.is_empty() && !has_incoming.contains(&key) {
                writeln!(f, "{}", node.value)?;
                continue;
            }
            for &target in &node.out {
                if let Some(target) = self.arena.get(target) {
                    writeln!(f, "{} -> {}", node.value, target.value)?;
                }
            }
        }
        Ok(())
    }
}

struct Values<'a, T>(&'a DirectedGraph<T>);

impl<T: fmt::Debug> fmt::Debug for Values<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.0.values()).finish()
    }
}

impl<T: fmt::Debug> fmt::Debug for DirectedGraph<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DirectedGraph")
            .field("nodes", &Values(self))
            .field("edges", &self.edges())
            .finish()
    }
}
