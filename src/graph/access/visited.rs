//! Search-local visited markers.
//!
//! Markers live outside the vertices, keyed by a vertex's slot in the ordered
//! collection. Each search owns (or borrows exclusively) its own set, so any
//! number of searches may run over the same graph at once. Outside the crate
//! a set can only be created, reset and counted; marking is left to the
//! searches, which index it with slots from the list they are walking.

/// A dense visited flag per vertex slot.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VisitedSet {
    flags: Vec<bool>,
}

impl VisitedSet {
    /// Creates a set sized for `len` vertices, all unvisited.
    pub fn new(len: usize) -> Self {
        Self {
            flags: vec![false; len],
        }
    }

    /// Number of slots tracked.
    #[inline]
    pub fn len(&self) -> usize {
        self.flags.len()
    }

    /// Returns `true` if no slots are tracked.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.flags.is_empty()
    }

    /// Unmarks every slot and resizes to `len`.
    pub fn reset(&mut self, len: usize) {
        self.flags.clear();
        self.flags.resize(len, false);
    }

    /// Returns `true` iff `slot` was unvisited, marking it visited.
    #[inline]
    pub(crate) fn try_visit(&mut self, slot: usize) -> bool {
        !core::mem::replace(&mut self.flags[slot], true)
    }

    /// Marks `slot` visited.
    #[inline]
    pub(crate) fn mark(&mut self, slot: usize) {
        self.flags[slot] = true;
    }

    /// Clears the mark on `slot`.
    #[inline]
    pub(crate) fn unmark(&mut self, slot: usize) {
        self.flags[slot] = false;
    }

    /// Whether `slot` is currently marked.
    #[inline]
    pub(crate) fn is_visited(&self, slot: usize) -> bool {
        self.flags[slot]
    }

    /// Number of marked slots.
    pub fn count(&self) -> usize {
        self.flags.iter().filter(|&&f| f).count()
    }
}
