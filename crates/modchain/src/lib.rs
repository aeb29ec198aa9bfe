//! Modchain: arena-backed intrusive lists and ELF architecture gating for
//! dynamic loaders.
//!
//! This is the top-level facade crate that re-exports the public API from
//! all modchain sub-crates.
//!
//! # Quick start
//!
//! ```rust
//! use modchain::prelude::*;
//!
//! let libc = LoadedModule::new("libc.so", ElfMachine::X86_64.code(), 0x7f00_0000);
//! let libarm = LoadedModule::new("libarm.so", ElfMachine::Arm.code(), 0x7f10_0000);
//!
//! let gate = ArchitectureGate::empty().with(ElfMachine::X86_64);
//! let mut registry = ModuleRegistry::from_config(&RegistryConfig::new(gate)).unwrap();
//!
//! registry.admit(&libc).unwrap();
//! assert!(matches!(
//!     registry.admit(&libarm),
//!     Err(AdmitError::Rejected { .. })
//! ));
//! assert_eq!(registry.len(), 1);
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`arena`] | `modchain-arena` | Node handles, the allocator trait, arena and heap allocators |
//! | [`list`] | `modchain-list` | `IntrusiveList` and its iterator |
//! | [`arch`] | `modchain-arch` | `ElfMachine` table and `ArchitectureGate` |
//! | [`registry`] | `modchain-registry` | Loaded-module and cleanup-handler registry |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Node storage (`modchain-arena`).
///
/// [`arena::NodeAllocator`] is the seam lists are generic over;
/// [`arena::NodeArena`] and [`arena::HeapNodes`] implement it.
pub use modchain_arena as arena;

/// Singly-linked lists of borrowed elements (`modchain-list`).
pub use modchain_list as list;

/// ELF machine codes and architecture gating (`modchain-arch`).
///
/// [`arch::HOST_MACHINE`] is the machine this build targets, if it is one
/// the table knows.
pub use modchain_arch as arch;

/// Module and cleanup bookkeeping (`modchain-registry`).
pub use modchain_registry as registry;

/// Common imports for typical modchain usage.
///
/// ```rust
/// use modchain::prelude::*;
/// ```
pub mod prelude {
    // Arena
    pub use modchain_arena::{ArenaConfig, ArenaError, HeapNodes, NodeAllocator, NodeArena, NodeId};

    // List
    pub use modchain_list::{IntrusiveList, Node};

    // Architecture
    pub use modchain_arch::{ArchitectureGate, ElfMachine, GateError};

    // Registry
    pub use modchain_registry::{
        AdmitError, Cleanup, CleanupHandler, LoadedModule, ModuleRegistry, RegistryConfig,
    };
}
