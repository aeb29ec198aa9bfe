//! Allocator-backed singly-linked lists of borrowed elements.
//!
//! An [`IntrusiveList`] links nodes that live inside an injected
//! [`NodeAllocator`](modchain_arena::NodeAllocator). Each node holds a
//! borrowed `&'a T`; the list owns the chain of nodes, never the elements.
//!
//! Removal is soft: [`IntrusiveList::remove_if`] clears the element slot of
//! matching nodes (a tombstone) but leaves the node linked. Tombstones are
//! skipped by traversal and reclaimed when they reach the front and are
//! popped, or when the list is cleared.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod iter;
pub mod list;
pub mod node;

pub use iter::Iter;
pub use list::IntrusiveList;
pub use node::Node;
