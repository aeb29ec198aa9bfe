//! Node allocators for modchain intrusive lists.
//!
//! List nodes never live on the general heap one-by-one. Instead every node
//! occupies a fixed-size slot inside an allocator, and lists link nodes
//! together through [`NodeId`] handles rather than pointers.
//!
//! # Architecture
//!
//! ```text
//! NodeAllocator<N> (trait, injected into each list)
//! ├── NodeArena<N>   pages of slots, bounded by ArenaConfig, fatal when full
//! └── HeapNodes<N>   single growable Vec of slots, never exhausts
//!     └── Entry<N>   generation + Vacant { next_free } | Occupied(N)
//! ```
//!
//! Both strategies thread vacant slots into an intrusive free-list, so
//! `alloc` and `free` are O(1) and `free` never allocates.
//!
//! # Exhaustion
//!
//! [`NodeAllocator::try_alloc`] reports exhaustion as
//! [`ArenaError::CapacityExceeded`]. [`NodeAllocator::alloc`] treats it as
//! fatal: it logs and aborts the process. List bookkeeping that has been
//! half-updated cannot be trusted by the loader, so there is no unwinding
//! path out of `alloc`.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod allocator;
pub mod arena;
pub mod config;
pub mod error;
pub mod handle;
pub mod heap;
mod slot;

// Public re-exports for the primary API surface.
pub use allocator::{exhausted, NodeAllocator};
pub use arena::NodeArena;
pub use config::ArenaConfig;
pub use error::ArenaError;
pub use handle::NodeId;
pub use heap::HeapNodes;
