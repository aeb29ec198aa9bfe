//! The [`IntrusiveList`] container.

use std::fmt;
use std::marker::PhantomData;

use modchain_arena::{NodeAllocator, NodeId};

use crate::iter::Iter;
use crate::node::Node;

/// Singly-linked list of borrowed `&'a T`, with node storage supplied by an
/// injected allocator `A`.
///
/// Invariants:
/// - `tail` is `None` iff `head` is `None`.
/// - every node reachable from `head` was allocated from `alloc` and is
///   reachable exactly once.
/// - the node at `tail` has no successor.
///
/// The list is not `Clone`: two lists must never share a chain.
pub struct IntrusiveList<'a, T: ?Sized, A: NodeAllocator<Node<'a, T>>> {
    head: Option<NodeId>,
    tail: Option<NodeId>,
    /// Structural node count, tombstones included.
    nodes: usize,
    /// Nodes whose element slot is still populated.
    live: usize,
    alloc: A,
    _elements: PhantomData<&'a T>,
}

impl<'a, T: ?Sized, A: NodeAllocator<Node<'a, T>>> IntrusiveList<'a, T, A> {
    /// Create an empty list drawing nodes from `alloc`.
    pub fn new(alloc: A) -> Self {
        Self {
            head: None,
            tail: None,
            nodes: 0,
            live: 0,
            alloc,
            _elements: PhantomData,
        }
    }

    /// Link `element` in as the new head. O(1).
    ///
    /// Aborts the process if the allocator is exhausted.
    pub fn push_front(&mut self, element: &'a T) {
        let id = self.alloc.alloc(Node::new(element, self.head));
        self.head = Some(id);
        if self.tail.is_none() {
            self.tail = Some(id);
        }
        self.nodes += 1;
        self.live += 1;
    }

    /// Link `element` in as the new tail. O(1).
    ///
    /// Aborts the process if the allocator is exhausted.
    pub fn push_back(&mut self, element: &'a T) {
        let id = self.alloc.alloc(Node::new(element, None));
        match self.tail {
            None => self.head = Some(id),
            Some(tail) => self.alloc.get_mut(tail).next = Some(id),
        }
        self.tail = Some(id);
        self.nodes += 1;
        self.live += 1;
    }

    /// Unlink and free the head node. O(1).
    ///
    /// Returns `None` if the list is empty, and also if the head node was a
    /// tombstone; use [`is_empty`](Self::is_empty) to tell the two apart.
    pub fn pop_front(&mut self) -> Option<&'a T> {
        let id = self.head?;
        let node = self.alloc.free(id);
        self.head = node.next;
        if self.head.is_none() {
            self.tail = None;
        }
        self.nodes -= 1;
        if node.element.is_some() {
            self.live -= 1;
        }
        node.element
    }

    /// Pop tombstones off the front until the head is live or the list is
    /// empty. Returns how many nodes were reclaimed.
    pub fn prune_front(&mut self) -> usize {
        let mut pruned = 0;
        while let Some(id) = self.head {
            if self.alloc.get(id).element.is_some() {
                break;
            }
            self.pop_front();
            pruned += 1;
        }
        pruned
    }

    /// Free every node, tombstones included. O(n). A no-op on an empty list.
    pub fn clear(&mut self) {
        let mut cursor = self.head.take();
        while let Some(id) = cursor {
            cursor = self.alloc.free(id).next;
        }
        self.tail = None;
        self.nodes = 0;
        self.live = 0;
    }

    /// Call `visitor` on every live element, head to tail.
    pub fn for_each<F>(&self, visitor: F)
    where
        F: FnMut(&'a T),
    {
        self.iter().for_each(visitor);
    }

    /// Like [`for_each`](Self::for_each), but stops as soon as `visitor`
    /// returns `false`.
    ///
    /// Returns `false` if the traversal was stopped early.
    pub fn visit<F>(&self, mut visitor: F) -> bool
    where
        F: FnMut(&'a T) -> bool,
    {
        self.iter().all(|element| visitor(element))
    }

    /// Tombstone every live node whose element satisfies `predicate`.
    ///
    /// Matching nodes stay linked, so the structural node count does not
    /// change; only [`pop_front`](Self::pop_front) and
    /// [`clear`](Self::clear) reclaim them. Returns the number of nodes
    /// tombstoned by this call.
    pub fn remove_if<F>(&mut self, mut predicate: F) -> usize
    where
        F: FnMut(&'a T) -> bool,
    {
        let mut removed = 0;
        let mut cursor = self.head;
        while let Some(id) = cursor {
            let node = self.alloc.get_mut(id);
            cursor = node.next;
            if let Some(element) = node.element {
                if predicate(element) {
                    node.element = None;
                    self.live -= 1;
                    removed += 1;
                }
            }
        }
        removed
    }

    /// Tombstone every node referring to exactly `element` (address
    /// identity, not equality). Returns how many nodes matched.
    pub fn remove(&mut self, element: &T) -> usize {
        self.remove_if(|candidate| std::ptr::addr_eq(candidate, element))
    }

    /// First live element satisfying `predicate`.
    pub fn find_if<F>(&self, mut predicate: F) -> Option<&'a T>
    where
        F: FnMut(&'a T) -> bool,
    {
        self.iter().find(|element| predicate(*element))
    }

    /// Whether some live node refers to exactly `element`.
    pub fn contains(&self, element: &T) -> bool {
        self.iter()
            .any(|candidate| std::ptr::addr_eq(candidate, element))
    }

    /// First live element, skipping leading tombstones.
    pub fn front(&self) -> Option<&'a T> {
        self.iter().next()
    }

    /// Copy live elements in order into `out`, stopping when it is full.
    ///
    /// Returns the number of slots written.
    pub fn copy_to_slice(&self, out: &mut [&'a T]) -> usize {
        let mut written = 0;
        for (slot, element) in out.iter_mut().zip(self.iter()) {
            *slot = element;
            written += 1;
        }
        written
    }

    /// Restartable iterator over live elements, head to tail.
    pub fn iter(&self) -> Iter<'_, 'a, T, A> {
        Iter::new(&self.alloc, self.head)
    }

    /// Whether the chain holds no nodes at all (live or tombstoned).
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Nodes in the chain, tombstones included.
    pub fn node_count(&self) -> usize {
        self.nodes
    }

    /// Nodes whose element has not been removed.
    pub fn live_count(&self) -> usize {
        self.live
    }

    /// Nodes removed by `remove_if` that still occupy a slot.
    ///
    /// Tombstones are only reclaimed from the front or by `clear`, so a
    /// workload that removes without ever popping or clearing grows this
    /// without bound.
    pub fn tombstone_count(&self) -> usize {
        self.nodes - self.live
    }

    /// The injected allocator.
    pub fn allocator(&self) -> &A {
        &self.alloc
    }

    #[cfg(test)]
    pub(crate) fn ends(&self) -> (Option<NodeId>, Option<NodeId>) {
        (self.head, self.tail)
    }
}

impl<'a, T: ?Sized, A: NodeAllocator<Node<'a, T>>> Drop for IntrusiveList<'a, T, A> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<'a, T: ?Sized, A: NodeAllocator<Node<'a, T>>> Extend<&'a T> for IntrusiveList<'a, T, A> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        for element in iter {
            self.push_back(element);
        }
    }
}

impl<'l, 'a, T: ?Sized, A: NodeAllocator<Node<'a, T>>> IntoIterator
    for &'l IntrusiveList<'a, T, A>
{
    type Item = &'a T;
    type IntoIter = Iter<'l, 'a, T, A>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T, A> fmt::Debug for IntrusiveList<'a, T, A>
where
    T: ?Sized + fmt::Debug,
    A: NodeAllocator<Node<'a, T>>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
