//! The [`NodeAllocator`] trait.
//!
//! Lists are generic over their allocator and receive it at construction,
//! so arena-backed and heap-backed strategies are interchangeable.

use crate::error::ArenaError;
use crate::handle::NodeId;

/// Storage policy for list nodes of type `N`.
///
/// Implementations own node storage only. They never inspect whatever a
/// node refers to.
///
/// Handle misuse (freeing twice, freeing or reading a handle after its slot
/// was reused, passing a handle from another allocator) is a caller bug.
/// Implementations in this crate detect it through slot generations and
/// panic rather than corrupt their free-list.
pub trait NodeAllocator<N> {
    /// Store `node` in a free slot.
    ///
    /// Returns [`ArenaError::CapacityExceeded`] if no slot is available.
    fn try_alloc(&mut self, node: N) -> Result<NodeId, ArenaError>;

    /// Store `node` in a free slot, aborting the process on exhaustion.
    ///
    /// This is the entry point lists use. See [`exhausted`].
    fn alloc(&mut self, node: N) -> NodeId {
        match self.try_alloc(node) {
            Ok(id) => id,
            Err(err) => exhausted(&err),
        }
    }

    /// Release the slot behind `id` and hand back the node it held.
    ///
    /// # Panics
    ///
    /// Panics if `id` is stale or its slot is already vacant.
    fn free(&mut self, id: NodeId) -> N;

    /// Shared access to a live node.
    ///
    /// # Panics
    ///
    /// Panics if `id` is stale or its slot is vacant.
    fn get(&self, id: NodeId) -> &N;

    /// Mutable access to a live node.
    ///
    /// # Panics
    ///
    /// Panics if `id` is stale or its slot is vacant.
    fn get_mut(&mut self, id: NodeId) -> &mut N;

    /// Number of occupied slots.
    fn live_count(&self) -> usize;

    /// Maximum number of slots, or `None` if the allocator is unbounded.
    fn capacity(&self) -> Option<usize>;
}

impl<N, A: NodeAllocator<N> + ?Sized> NodeAllocator<N> for &mut A {
    fn try_alloc(&mut self, node: N) -> Result<NodeId, ArenaError> {
        (**self).try_alloc(node)
    }

    fn alloc(&mut self, node: N) -> NodeId {
        (**self).alloc(node)
    }

    fn free(&mut self, id: NodeId) -> N {
        (**self).free(id)
    }

    fn get(&self, id: NodeId) -> &N {
        (**self).get(id)
    }

    fn get_mut(&mut self, id: NodeId) -> &mut N {
        (**self).get_mut(id)
    }

    fn live_count(&self) -> usize {
        (**self).live_count()
    }

    fn capacity(&self) -> Option<usize> {
        (**self).capacity()
    }
}

/// Fatal exit for allocator exhaustion.
///
/// Logs the error and aborts. Abort rather than panic: `alloc` may run
/// during process bring-up or under a loader lock, where unwinding through
/// half-linked bookkeeping is worse than stopping.
#[cold]
#[inline(never)]
pub fn exhausted(err: &ArenaError) -> ! {
    tracing::error!(error = %err, "node allocation failed; aborting");
    std::process::abort()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ArenaConfig, NodeArena};

    fn fill<A: NodeAllocator<u32>>(alloc: &mut A, n: u32) -> Vec<NodeId> {
        (0..n).map(|v| alloc.alloc(v)).collect()
    }

    #[test]
    fn mutable_reference_forwards_to_allocator() {
        let mut arena = NodeArena::<u32>::new(ArenaConfig::with_capacity(4)).unwrap();
        let ids = fill(&mut &mut arena, 3);
        assert_eq!(arena.live_count(), 3);
        assert_eq!(*arena.get(ids[2]), 2);
    }

    #[test]
    fn try_alloc_through_reference_reports_exhaustion() {
        fn exhaust<A: NodeAllocator<u32>>(mut alloc: A) -> ArenaError {
            loop {
                if let Err(err) = alloc.try_alloc(0) {
                    return err;
                }
            }
        }

        let mut arena = NodeArena::<u32>::new(ArenaConfig::with_capacity(2)).unwrap();
        let err = exhaust(&mut arena);
        assert_eq!(err, ArenaError::CapacityExceeded { capacity: 2 });
        assert_eq!(arena.live_count(), 2);
    }
}
