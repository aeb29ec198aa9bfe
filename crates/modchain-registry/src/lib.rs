//! Loaded-module and cleanup-handler bookkeeping for a dynamic loader.
//!
//! A [`ModuleRegistry`] is what the loader consults when it brings a module
//! in or tears it down:
//!
//! ```text
//! candidate LoadedModule
//!   └─ ArchitectureGate::check(e_machine)   rejected → AdmitError
//!        └─ modules: IntrusiveList<LoadedModule>   push_back
//! register_cleanup(handler)
//!   └─ cleanups: IntrusiveList<dyn CleanupHandler> push_front (LIFO)
//! ```
//!
//! Both lists borrow their payloads. The registry never constructs or drops
//! a [`LoadedModule`] or a [`CleanupHandler`]; it only tracks membership.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod cleanup;
pub mod config;
pub mod error;
pub mod module;
pub mod registry;

pub use cleanup::{Cleanup, CleanupHandler};
pub use config::RegistryConfig;
pub use error::AdmitError;
pub use module::LoadedModule;
pub use registry::{CleanupNode, ModuleNode, ModuleRegistry};
