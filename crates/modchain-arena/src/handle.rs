//! Node handles.
//!
//! A [`NodeId`] names one slot inside a node allocator. It carries the
//! generation the slot had when it was handed out, so a handle that is used
//! after `free()` is caught on the next access instead of aliasing whatever
//! node reused the slot.

use std::fmt;

/// Handle to a node slot owned by a [`NodeAllocator`](crate::NodeAllocator).
///
/// Handles are plain `Copy` values. They are only meaningful to the
/// allocator that produced them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[must_use]
pub struct NodeId {
    /// Flat slot index across all pages.
    pub(crate) index: u32,
    /// Slot generation at allocation time.
    pub(crate) generation: u32,
}

impl NodeId {
    /// Create a new handle.
    pub(crate) fn new(index: u32, generation: u32) -> Self {
        Self { index, generation }
    }

    /// Flat slot index inside the allocator.
    pub fn index(&self) -> u32 {
        self.index
    }

    /// Generation of the slot when this handle was issued.
    pub fn generation(&self) -> u32 {
        self.generation
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NodeId(idx={}, gen={})", self.index, self.generation)
    }
}
