//! The loaded-module record tracked by the registry.

use std::fmt;

/// Loader-side record for one mapped module.
///
/// Owned by the loader. The registry only holds `&LoadedModule`, so a
/// module must stay alive for as long as it is registered.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoadedModule {
    name: String,
    machine: u16,
    base: u64,
}

impl LoadedModule {
    /// Describe a module mapped at `base`, built for raw `e_machine` code
    /// `machine`.
    pub fn new(name: impl Into<String>, machine: u16, base: u64) -> Self {
        Self {
            name: name.into(),
            machine,
            base,
        }
    }

    /// Module name (soname or path).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Raw `e_machine` code from the module header.
    pub fn machine_code(&self) -> u16 {
        self.machine
    }

    /// Load base address.
    pub fn base(&self) -> u64 {
        self.base
    }
}

impl fmt::Display for LoadedModule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{:#x}", self.name, self.base)
    }
}
