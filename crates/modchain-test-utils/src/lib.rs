//! Test allocators and fixtures for modchain development.
//!
//! [`CountingAllocator`] wraps any [`NodeAllocator`] and records how many
//! nodes went through it, so tests can check that list operations free
//! exactly what they allocate. [`fixtures`] builds module records.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

use modchain_arena::{ArenaError, NodeAllocator, NodeId};

/// Forwards to `A`, counting successful allocations, failed allocations
/// and frees.
#[derive(Debug, Default)]
pub struct CountingAllocator<A> {
    inner: A,
    allocs: usize,
    failed: usize,
    frees: usize,
}

impl<A> CountingAllocator<A> {
    pub fn new(inner: A) -> Self {
        Self {
            inner,
            allocs: 0,
            failed: 0,
            frees: 0,
        }
    }

    /// Successful allocations so far.
    pub fn allocs(&self) -> usize {
        self.allocs
    }

    /// Allocation attempts that returned an error.
    pub fn failed(&self) -> usize {
        self.failed
    }

    pub fn frees(&self) -> usize {
        self.frees
    }

    /// Allocations not yet matched by a free.
    pub fn outstanding(&self) -> usize {
        self.allocs - self.frees
    }

    /// Zero the counters without touching the wrapped allocator.
    pub fn reset_counts(&mut self) {
        self.allocs = 0;
        self.failed = 0;
        self.frees = 0;
    }

    pub fn inner(&self) -> &A {
        &self.inner
    }
}

impl<N, A: NodeAllocator<N>> NodeAllocator<N> for CountingAllocator<A> {
    fn try_alloc(&mut self, node: N) -> Result<NodeId, ArenaError> {
        let result = self.inner.try_alloc(node);
        match result {
            Ok(_) => self.allocs += 1,
            Err(_) => self.failed += 1,
        }
        result
    }

    fn free(&mut self, id: NodeId) -> N {
        let node = self.inner.free(id);
        self.frees += 1;
        node
    }

    fn get(&self, id: NodeId) -> &N {
        self.inner.get(id)
    }

    fn get_mut(&mut self, id: NodeId) -> &mut N {
        self.inner.get_mut(id)
    }

    fn live_count(&self) -> usize {
        self.inner.live_count()
    }

    fn capacity(&self) -> Option<usize> {
        self.inner.capacity()
    }
}
