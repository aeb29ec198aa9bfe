//! Module record fixtures.
//!
//! Records are returned by value; callers keep them alive for as long as a
//! registry borrows them.

use modchain_arch::{ArchitectureGate, ElfMachine};
use modchain_registry::LoadedModule;

/// Base address of the first fixture module.
pub const FIXTURE_BASE: u64 = 0x7f00_0000_0000;

/// Address stride between consecutive fixture modules.
pub const FIXTURE_STRIDE: u64 = 0x10_0000;

/// `count` modules named `lib0.so`, `lib1.so`, ... built for `machine`,
/// mapped at consecutive strides from [`FIXTURE_BASE`].
pub fn modules_for(machine: ElfMachine, count: usize) -> Vec<LoadedModule> {
    (0..count as u64)
        .map(|i| {
            LoadedModule::new(
                format!("lib{i}.so"),
                machine.code(),
                FIXTURE_BASE + i * FIXTURE_STRIDE,
            )
        })
        .collect()
}

/// A gate accepting only `machine`, independent of the build host.
pub fn gate_for(machine: ElfMachine) -> ArchitectureGate {
    ArchitectureGate::empty().with(machine)
}

/// A module whose header declares raw code `code`, known or not.
pub fn module_with_code(name: &str, code: u16) -> LoadedModule {
    LoadedModule::new(name, code, FIXTURE_BASE)
}
