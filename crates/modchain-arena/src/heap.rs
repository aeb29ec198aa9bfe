//! Growable heap-backed node slab.
//!
//! [`HeapNodes`] is the fallback strategy for callers that have a working
//! heap and no fixed budget: a single `Vec` of slots that grows on demand.
//! It shares slot bookkeeping with [`NodeArena`](crate::NodeArena), so
//! freed slots are still recycled through the free-list before the `Vec`
//! grows.

use crate::allocator::NodeAllocator;
use crate::error::ArenaError;
use crate::handle::NodeId;
use crate::slot::Entry;

/// Unbounded slot slab.
///
/// Only fails once the `u32` slot index range is used up.
pub struct HeapNodes<N> {
    entries: Vec<Entry<N>>,
    free_head: Option<u32>,
    live: usize,
}

impl<N> HeapNodes<N> {
    /// Create an empty slab.
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Create an empty slab with room for `nodes` slots before reallocating.
    pub fn with_capacity(nodes: usize) -> Self {
        Self {
            entries: Vec::with_capacity(nodes),
            free_head: None,
            live: 0,
        }
    }

    /// Total slots ever created (occupied plus vacant).
    pub fn total_slots(&self) -> usize {
        self.entries.len()
    }

    /// Vacant slots waiting on the free-list.
    pub fn free_count(&self) -> usize {
        self.entries.len() - self.live
    }
}

impl<N> Default for HeapNodes<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N> NodeAllocator<N> for HeapNodes<N> {
    fn try_alloc(&mut self, node: N) -> Result<NodeId, ArenaError> {
        let index = match self.free_head {
            Some(index) => index,
            None => {
                let index =
                    u32::try_from(self.entries.len()).map_err(|_| ArenaError::CapacityExceeded {
                        capacity: u32::MAX as usize,
                    })?;
                self.entries.push(Entry::vacant(None));
                index
            }
        };
        let entry = &mut self.entries[index as usize];
        self.free_head = entry.occupy(node);
        self.live += 1;
        Ok(NodeId::new(index, entry.generation))
    }

    fn free(&mut self, id: NodeId) -> N {
        let next_free = self.free_head;
        let node = self
            .entries
            .get_mut(id.index as usize)
            .and_then(|e| e.vacate(id.generation, next_free));
        match node {
            Some(node) => {
                self.free_head = Some(id.index);
                self.live -= 1;
                node
            }
            None => panic!("free of stale or vacant node handle {id}"),
        }
    }

    fn get(&self, id: NodeId) -> &N {
        match self
            .entries
            .get(id.index as usize)
            .and_then(|e| e.get(id.generation))
        {
            Some(node) => node,
            None => panic!("access through stale or vacant node handle {id}"),
        }
    }

    fn get_mut(&mut self, id: NodeId) -> &mut N {
        match self
            .entries
            .get_mut(id.index as usize)
            .and_then(|e| e.get_mut(id.generation))
        {
            Some(node) => node,
            None => panic!("access through stale or vacant node handle {id}"),
        }
    }

    fn live_count(&self) -> usize {
        self.live
    }

    fn capacity(&self) -> Option<usize> {
        None
    }
}
