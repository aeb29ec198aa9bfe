//! List node layout.

use std::fmt;

use modchain_arena::NodeId;

/// One link of an [`IntrusiveList`](crate::IntrusiveList).
///
/// `element` is `None` once the node has been tombstoned by
/// `remove_if`; the node keeps its place in the chain until popped or
/// cleared.
pub struct Node<'a, T: ?Sized> {
    pub(crate) next: Option<NodeId>,
    pub(crate) element: Option<&'a T>,
}

impl<'a, T: ?Sized> Node<'a, T> {
    pub(crate) fn new(element: &'a T, next: Option<NodeId>) -> Self {
        Self {
            next,
            element: Some(element),
        }
    }

    /// Successor in the chain.
    pub fn next(&self) -> Option<NodeId> {
        self.next
    }

    /// The referenced element, or `None` for a tombstone.
    pub fn element(&self) -> Option<&'a T> {
        self.element
    }

    /// Whether the element has been soft-deleted.
    pub fn is_tombstone(&self) -> bool {
        self.element.is_none()
    }
}

impl<T: ?Sized> Clone for Node<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: ?Sized> Copy for Node<'_, T> {}

impl<T: ?Sized + fmt::Debug> fmt::Debug for Node<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("next", &self.next)
            .field("element", &self.element)
            .finish()
    }
}
