//! The [`ModuleRegistry`].

use modchain_arch::ArchitectureGate;
use modchain_arena::{ArenaError, NodeAllocator, NodeArena};
use modchain_list::{IntrusiveList, Iter, Node};

use crate::cleanup::CleanupHandler;
use crate::config::RegistryConfig;
use crate::error::AdmitError;
use crate::module::LoadedModule;

/// List node carrying a loaded module.
pub type ModuleNode<'a> = Node<'a, LoadedModule>;

/// List node carrying a cleanup handler.
pub type CleanupNode<'a> = Node<'a, dyn CleanupHandler + 'a>;

/// Tracks which modules are loaded and which cleanup handlers are pending.
///
/// Modules are kept in admission order. Cleanup handlers are kept newest
/// first, so [`run_cleanups`](Self::run_cleanups) runs them in reverse
/// registration order.
///
/// `A` and `C` supply node storage for the two lists. The default is a
/// [`NodeArena`] each, built by [`from_config`](ModuleRegistry::from_config).
pub struct ModuleRegistry<'a, A = NodeArena<ModuleNode<'a>>, C = NodeArena<CleanupNode<'a>>>
where
    A: NodeAllocator<ModuleNode<'a>>,
    C: NodeAllocator<CleanupNode<'a>>,
{
    gate: ArchitectureGate,
    modules: IntrusiveList<'a, LoadedModule, A>,
    cleanups: IntrusiveList<'a, dyn CleanupHandler + 'a, C>,
}

impl<'a> ModuleRegistry<'a> {
    /// Build an arena-backed registry from `config`.
    pub fn from_config(config: &RegistryConfig) -> Result<Self, ArenaError> {
        config.validate()?;
        let modules = NodeArena::new(config.modules.clone())?;
        let cleanups = NodeArena::new(config.cleanup.clone())?;
        Ok(Self::new(config.gate, modules, cleanups))
    }
}

impl<'a, A, C> ModuleRegistry<'a, A, C>
where
    A: NodeAllocator<ModuleNode<'a>>,
    C: NodeAllocator<CleanupNode<'a>>,
{
    /// Create an empty registry over the given allocators.
    pub fn new(gate: ArchitectureGate, modules: A, cleanups: C) -> Self {
        Self {
            gate,
            modules: IntrusiveList::new(modules),
            cleanups: IntrusiveList::new(cleanups),
        }
    }

    /// Register `module` after checking its machine code against the gate.
    ///
    /// The same record cannot be admitted twice while it is live. Two
    /// distinct records with the same name are both accepted.
    pub fn admit(&mut self, module: &'a LoadedModule) -> Result<(), AdmitError> {
        if let Err(reason) = self.gate.check(i32::from(module.machine_code())) {
            tracing::warn!(
                module = module.name(),
                machine = module.machine_code(),
                %reason,
                "module rejected"
            );
            return Err(AdmitError::Rejected {
                module: module.name().to_owned(),
                reason,
            });
        }
        if self.modules.contains(module) {
            return Err(AdmitError::AlreadyLoaded {
                module: module.name().to_owned(),
            });
        }
        self.modules.push_back(module);
        tracing::debug!(
            module = module.name(),
            base = module.base(),
            loaded = self.modules.live_count(),
            "module admitted"
        );
        Ok(())
    }

    /// Loaded modules in admission order.
    pub fn modules(&self) -> Iter<'_, 'a, LoadedModule, A> {
        self.modules.iter()
    }

    /// First loaded module called `name`.
    pub fn find(&self, name: &str) -> Option<&'a LoadedModule> {
        self.modules.find_if(|m| m.name() == name)
    }

    /// Whether this exact record is loaded.
    pub fn is_loaded(&self, module: &LoadedModule) -> bool {
        self.modules.contains(module)
    }

    /// Number of loaded modules.
    pub fn len(&self) -> usize {
        self.modules.live_count()
    }

    /// Whether no module is loaded.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Unload every module matching `predicate`. Returns how many were
    /// unloaded.
    ///
    /// Unloaded modules leave a tombstone in the module list until
    /// [`reap`](Self::reap) reaches them.
    pub fn unload_where<F>(&mut self, predicate: F) -> usize
    where
        F: FnMut(&'a LoadedModule) -> bool,
    {
        let unloaded = self.modules.remove_if(predicate);
        if unloaded > 0 {
            tracing::debug!(
                unloaded,
                loaded = self.modules.live_count(),
                "modules unloaded"
            );
        }
        unloaded
    }

    /// Unload this exact record. Returns `false` if it was not loaded.
    pub fn unload(&mut self, module: &LoadedModule) -> bool {
        let unloaded = self.modules.remove(module) > 0;
        if unloaded {
            tracing::debug!(module = module.name(), "module unloaded");
        }
        unloaded
    }

    /// Reclaim unloaded entries from the front of the module list.
    ///
    /// Stops at the first loaded module. Returns how many nodes were freed.
    pub fn reap(&mut self) -> usize {
        self.modules.prune_front()
    }

    /// Unloaded entries still holding a node.
    pub fn tombstones(&self) -> usize {
        self.modules.tombstone_count()
    }

    /// Queue `handler` to run at teardown, ahead of every handler already
    /// queued.
    pub fn register_cleanup(&mut self, handler: &'a (dyn CleanupHandler + 'a)) {
        self.cleanups.push_front(handler);
        tracing::trace!(handler = handler.name(), "cleanup registered");
    }

    /// Withdraw a queued handler. Returns `false` if it was not queued.
    pub fn cancel_cleanup(&mut self, handler: &(dyn CleanupHandler + 'a)) -> bool {
        self.cleanups.remove(handler) > 0
    }

    /// Cleanup handlers still queued.
    pub fn pending_cleanups(&self) -> usize {
        self.cleanups.live_count()
    }

    /// Run and dequeue every queued handler, newest first. Cancelled
    /// handlers are dropped without running. Returns how many ran.
    pub fn run_cleanups(&mut self) -> usize {
        let mut ran = 0;
        while !self.cleanups.is_empty() {
            if let Some(handler) = self.cleanups.pop_front() {
                tracing::debug!(handler = handler.name(), "running cleanup");
                handler.run();
                ran += 1;
            }
        }
        ran
    }

    /// The gate modules are checked against.
    pub fn gate(&self) -> &ArchitectureGate {
        &self.gate
    }

    /// Allocator backing the module list.
    pub fn module_allocator(&self) -> &A {
        self.modules.allocator()
    }

    /// Allocator backing the cleanup list.
    pub fn cleanup_allocator(&self) -> &C {
        self.cleanups.allocator()
    }
}
