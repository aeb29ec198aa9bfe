//! Benchmark profiles for modchain.
//!
//! - [`bench_arena_config`]: one arena page sized for the largest list a
//!   benchmark builds
//! - [`module_batch`]: a loader-sized batch of module records with a mix of
//!   native and foreign machines

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use modchain_arch::ElfMachine;
use modchain_arena::ArenaConfig;
use modchain_registry::LoadedModule;

/// Largest list any benchmark builds.
pub const MAX_BENCH_NODES: u32 = 4096;

/// Arena geometry for benchmarks: every node on one page, so timings do not
/// include lazy page growth after the first iteration.
pub fn bench_arena_config() -> ArenaConfig {
    ArenaConfig::with_capacity(MAX_BENCH_NODES)
}

/// `count` module records. Every `foreign_every`-th record is built for
/// `foreign`, the rest for `native`. `foreign_every == 0` means none are
/// foreign.
pub fn module_batch(
    count: usize,
    native: ElfMachine,
    foreign: ElfMachine,
    foreign_every: usize,
) -> Vec<LoadedModule> {
    (0..count)
        .map(|i| {
            let machine = if foreign_every != 0 && i % foreign_every == foreign_every - 1 {
                foreign
            } else {
                native
            };
            LoadedModule::new(format!("lib{i}.so"), machine.code(), 0x1000 * i as u64)
        })
        .collect()
}
