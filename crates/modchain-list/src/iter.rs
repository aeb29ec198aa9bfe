//! Borrowing traversal over live elements.

use std::iter::FusedIterator;
use std::marker::PhantomData;

use modchain_arena::{NodeAllocator, NodeId};

use crate::node::Node;

/// Iterator over the live elements of an
/// [`IntrusiveList`](crate::IntrusiveList), head to tail.
///
/// Tombstoned nodes are stepped over silently. Holding an `Iter` borrows
/// the list, so the chain cannot be mutated mid-traversal.
pub struct Iter<'l, 'a, T: ?Sized, A: NodeAllocator<Node<'a, T>>> {
    alloc: &'l A,
    cursor: Option<NodeId>,
    _elements: PhantomData<&'a T>,
}

impl<'l, 'a, T: ?Sized, A: NodeAllocator<Node<'a, T>>> Iter<'l, 'a, T, A> {
    pub(crate) fn new(alloc: &'l A, head: Option<NodeId>) -> Self {
        Self {
            alloc,
            cursor: head,
            _elements: PhantomData,
        }
    }
}

impl<'a, T: ?Sized, A: NodeAllocator<Node<'a, T>>> Iterator for Iter<'_, 'a, T, A> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        while let Some(id) = self.cursor {
            let node = self.alloc.get(id);
            self.cursor = node.next;
            if node.element.is_some() {
                return node.element;
            }
        }
        None
    }
}

impl<'a, T: ?Sized, A: NodeAllocator<Node<'a, T>>> FusedIterator for Iter<'_, 'a, T, A> {}

impl<'a, T: ?Sized, A: NodeAllocator<Node<'a, T>>> Clone for Iter<'_, 'a, T, A> {
    fn clone(&self) -> Self {
        Self {
            alloc: self.alloc,
            cursor: self.cursor,
            _elements: PhantomData,
        }
    }
}
