//! Loader walkthrough.
//!
//! Demonstrates: gate → admit a mixed batch → unload → reap → register
//! cleanups → teardown. Run with `RUST_LOG=debug` to see per-module events.

use modchain_arch::{ArchitectureGate, ElfMachine, HOST_MACHINE};
use modchain_arena::NodeAllocator;
use modchain_bench::module_batch;
use modchain_registry::{Cleanup, ModuleRegistry, RegistryConfig};
use tracing_subscriber::{fmt, EnvFilter};

fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt().with_env_filter(filter).init();

    let native = HOST_MACHINE.unwrap_or(ElfMachine::X86_64);
    let foreign = if native == ElfMachine::Arm {
        ElfMachine::Aarch64
    } else {
        ElfMachine::Arm
    };
    let gate = ArchitectureGate::empty().with(native);
    tracing::info!(%native, "gate configured");

    let modules = module_batch(12, native, foreign, 4);
    let flush = Cleanup::new("flush-stdio", || tracing::info!("stdio flushed"));
    let unmap = Cleanup::new("unmap-modules", || tracing::info!("modules unmapped"));

    let mut registry = match ModuleRegistry::from_config(&RegistryConfig::new(gate)) {
        Ok(registry) => registry,
        Err(err) => {
            tracing::error!(error = %err, "registry config rejected");
            return;
        }
    };

    // --- Load ---
    let mut rejected = 0;
    for module in &modules {
        if let Err(err) = registry.admit(module) {
            tracing::info!(%err, "skipping module");
            rejected += 1;
        }
    }
    tracing::info!(loaded = registry.len(), rejected, "batch loaded");

    // --- Unload the first two and reclaim their nodes ---
    let unloaded = registry.unload_where(|m| m.name() == "lib0.so" || m.name() == "lib1.so");
    let reaped = registry.reap();
    tracing::info!(
        unloaded,
        reaped,
        tombstones = registry.tombstones(),
        arena_live = registry.module_allocator().live_count(),
        "after unload"
    );

    // --- Teardown ---
    registry.register_cleanup(&unmap);
    registry.register_cleanup(&flush);
    let ran = registry.run_cleanups();
    tracing::info!(ran, "teardown complete");
}
