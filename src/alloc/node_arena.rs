//! `NodeArena` — owning node storage with generational observing keys.
//!
//! The arena is the only owner of the values placed in it. Everything else
//! refers to a value through a [`NodeKey`], which is `Copy`, never keeps the
//! value alive, and resolves to `None` once the slot it names has been freed.
//! Freed slots are recycled through an intrusive free list; the generation
//! stored alongside each slot is bumped on every release so an old key never
//! resolves to the slot's next occupant (ABA protection).

/// A non-owning handle to a value stored in a [`NodeArena`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeKey {
    index: u32,
    generation: u32,
}

impl NodeKey {
    #[inline(always)]
    const fn new(index: u32, generation: u32) -> Self {
        Self { index, generation }
    }

    /// Slot index inside the arena. Not a graph position.
    #[inline(always)]
    pub fn slot(self) -> usize {
        self.index as usize
    }
}

#[derive(Debug, Clone)]
enum Slot<T> {
    Occupied { generation: u32, value: T },
    Vacant { generation: u32, next_free: Option<u32> },
}

/// Generational slot storage.
///
/// | Operation | Complexity |
/// |-----------|------------|
/// | `insert` | \(O(1)\) amortized |
/// | `get` / `get_mut` | \(O(1)\) |
/// | `remove` | \(O(1)\) |
/// | `clear` | \(O(\text{slots})\) |
#[derive(Debug, Clone)]
pub struct NodeArena<T> {
    slots: Vec<Slot<T>>,
    free_head: Option<u32>,
    len: usize,
}

impl<T> NodeArena<T> {
    /// Creates an empty arena.
    pub const fn new() -> Self {
        Self {
            slots: Vec::new(),
            free_head: None,
            len: 0,
        }
    }

    /// Creates an empty arena with room for `capacity` values.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            free_head: None,
            len: 0,
        }
    }

    /// Number of live values.
    #[cfg_attr(not(debug_assertions), allow(dead_code))]
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Reserves room for at least `additional` more values.
    pub fn reserve(&mut self, additional: usize) {
        let free = self.slots.len() - self.len;
        if additional > free {
            self.slots.reserve(additional - free);
        }
    }

    /// Stores `value`, reusing a released slot when one is available.
    ///
    /// # Panics
    /// Panics if more than `u32::MAX` slots would be required.
    pub fn insert(&mut self, value: T) -> NodeKey {
        self.len += 1;

        if let Some(idx) = self.free_head {
            let slot = &mut self.slots[idx as usize];
            let (generation, next_free) = match *slot {
                Slot::Vacant { generation, next_free } => (generation, next_free),
                Slot::Occupied { .. } => unreachable!("free list points at an occupied slot"),
            };
            self.free_head = next_free;
            *slot = Slot::Occupied { generation, value };
            return NodeKey::new(idx, generation);
        }

        let idx = u32::try_from(self.slots.len()).expect("node arena exceeded u32::MAX slots");
        self.slots.push(Slot::Occupied { generation: 0, value });
        NodeKey::new(idx, 0)
    }

    /// Resolves `key`, or `None` if its value has been removed.
    #[inline]
    pub fn get(&self, key: NodeKey) -> Option<&T> {
        match self.slots.get(key.slot()) {
            Some(Slot::Occupied { generation, value }) if *generation == key.generation => Some(value),
            _ => None,
        }
    }

    /// Mutable counterpart of [`get`](Self::get).
    #[inline]
    pub fn get_mut(&mut self, key: NodeKey) -> Option<&mut T> {
        match self.slots.get_mut(key.slot()) {
            Some(Slot::Occupied { generation, value }) if *generation == key.generation => Some(value),
            _ => None,
        }
    }

    /// Returns `true` if `key` still resolves.
    #[inline]
    pub fn contains(&self, key: NodeKey) -> bool {
        self.get(key).is_some()
    }

    /// Removes and returns the value behind `key`.
    ///
    /// The slot's generation is bumped, so `key` and every copy of it
    /// resolve to `None` from now on.
    pub fn remove(&mut self, key: NodeKey) -> Option<T> {
        let slot = self.slots.get_mut(key.slot())?;
        match slot {
            Slot::Occupied { generation, .. } if *generation == key.generation => {}
            _ => return None,
        }

        let vacant = Slot::Vacant {
            generation: key.generation.wrapping_add(1),
            next_free: self.free_head,
        };
        let Slot::Occupied { value, .. } = core::mem::replace(slot, vacant) else {
            unreachable!("slot checked occupied above");
        };
        self.free_head = Some(key.index);
        self.len -= 1;
        Some(value)
    }

    /// Drops every value. Outstanding keys all become absent.
    pub fn clear(&mut self) {
        if self.slots.is_empty() {
            return;
        }

        let mut next_free = None;
        for idx in (0..self.slots.len()).rev() {
            let slot = &mut self.slots[idx];
            let generation = match slot {
                Slot::Occupied { generation, .. } => generation.wrapping_add(1),
                Slot::Vacant { generation, .. } => *generation,
            };
            *slot = Slot::Vacant { generation, next_free };
            // Slot count never exceeds u32::MAX, see `insert`.
            next_free = Some(idx as u32);
        }

        self.free_head = next_free;
        self.len = 0;
    }
}

impl<T> Default for NodeArena<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_get_remove() {
        let mut arena = NodeArena::new();
        let a = arena.insert("a");
        let b = arena.insert("b");

        assert_eq!(arena.len(), 2);
        assert_eq!(arena.get(a), Some(&"a"));
        assert_eq!(arena.get(b), Some(&"b"));

        assert_eq!(arena.remove(a), Some("a"));
        assert_eq!(arena.get(a), None);
        assert_eq!(arena.remove(a), None);
        assert_eq!(arena.len(), 1);
    }

    #[test]
    fn reused_slot_does_not_resolve_old_key() {
        let mut arena = NodeArena::new();
        let old = arena.insert(1);
        arena.remove(old);

        let new = arena.insert(2);
        assert_eq!(new.slot(), old.slot());
        assert_ne!(new.generation, old.generation);
        assert_eq!(arena.get(old), None);
        assert_eq!(arena.get(new), Some(&2));
        assert_eq!(arena.slots.len(), 1);
    }

    #[test]
    fn clear_invalidates_every_key() {
        let mut arena = NodeArena::new();
        let keys: Vec<_> = (0..4).map(|i| arena.insert(i)).collect();
        arena.clear();

        assert_eq!(arena.len(), 0);
        assert!(keys.iter().all(|&k| !arena.contains(k)));

        // Free list is rebuilt in slot order.
        let k = arena.insert(10);
        assert_eq!(k.slot(), 0);
        let k = arena.insert(11);
        assert_eq!(k.slot(), 1);
        assert_eq!(arena.slots.len(), 4);
    }

    #[test]
    fn get_mut_updates_value() {
        let mut arena = NodeArena::new();
        let k = arena.insert(String::from("x"));
        arena.get_mut(k).unwrap().push('y');
        assert_eq!(arena.get(k).map(String::as_str), Some("xy"));
    }
}
