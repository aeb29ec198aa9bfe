//! ELF machine codes and the architecture admission gate.
//!
//! [`ElfMachine`] is the closed set of `e_machine` values this build
//! recognises. [`ArchitectureGate`] answers whether a module built for a
//! given code may be loaded into the running process. The gate is a pure
//! lookup: it holds no state beyond its fixed supported set.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod gate;
pub mod machine;

pub use error::GateError;
pub use gate::ArchitectureGate;
pub use machine::{ElfMachine, HOST_MACHINE};
