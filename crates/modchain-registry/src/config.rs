//! Registry configuration.

use modchain_arch::ArchitectureGate;
use modchain_arena::{ArenaConfig, ArenaError};

/// Configuration for an arena-backed [`ModuleRegistry`](crate::ModuleRegistry).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RegistryConfig {
    /// Node arena geometry for the loaded-module list.
    ///
    /// Default: 64 nodes per page, 16 pages, preallocated.
    pub modules: ArenaConfig,

    /// Node arena geometry for the cleanup-handler list.
    ///
    /// Default: 32 nodes per page, 4 pages, preallocated.
    pub cleanup: ArenaConfig,

    /// Machines modules may be built for.
    ///
    /// Default: [`ArchitectureGate::host`].
    pub gate: ArchitectureGate,
}

impl RegistryConfig {
    /// Default module-list page size.
    pub const DEFAULT_MODULE_PAGE_NODES: u32 = 64;

    /// Default module-list page limit.
    pub const DEFAULT_MODULE_MAX_PAGES: u16 = 16;

    /// Default cleanup-list page size.
    pub const DEFAULT_CLEANUP_PAGE_NODES: u32 = 32;

    /// Default cleanup-list page limit.
    pub const DEFAULT_CLEANUP_MAX_PAGES: u16 = 4;

    /// Default arenas with the given gate.
    pub fn new(gate: ArchitectureGate) -> Self {
        Self {
            modules: ArenaConfig::new(
                Self::DEFAULT_MODULE_PAGE_NODES,
                Self::DEFAULT_MODULE_MAX_PAGES,
            )
            .preallocated(),
            cleanup: ArenaConfig::new(
                Self::DEFAULT_CLEANUP_PAGE_NODES,
                Self::DEFAULT_CLEANUP_MAX_PAGES,
            )
            .preallocated(),
            gate,
        }
    }

    /// Validate both arena configs.
    pub fn validate(&self) -> Result<(), ArenaError> {
        self.modules.validate()?;
        self.cleanup.validate()
    }
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self::new(ArchitectureGate::host())
    }
}
