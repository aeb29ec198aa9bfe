//! Arena configuration parameters.

use crate::error::ArenaError;

/// Configuration for a [`NodeArena`](crate::NodeArena).
///
/// The arena hands out slots from pages of `page_nodes` slots each and
/// never holds more than `max_pages` pages, so total capacity is fixed at
/// `page_nodes * max_pages` node slots.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ArenaConfig {
    /// Number of node slots per page.
    ///
    /// Default: 256. Must be at least 1.
    pub page_nodes: u32,

    /// Maximum number of pages the arena may allocate.
    ///
    /// Default: 64. Must be at least 1. Pages are added lazily, only when
    /// the free-list is empty, unless `preallocate` is set.
    pub max_pages: u16,

    /// Build every page when the arena is created.
    ///
    /// With this set, `alloc` and `free` never call the global allocator.
    /// Without it, the first allocation that finds the free-list empty
    /// allocates a new page from the heap. Default: `false`.
    pub preallocate: bool,
}

impl ArenaConfig {
    /// Default slots per page.
    pub const DEFAULT_PAGE_NODES: u32 = 256;

    /// Default maximum page count.
    pub const DEFAULT_MAX_PAGES: u16 = 64;

    /// Create a config with the given page geometry.
    pub fn new(page_nodes: u32, max_pages: u16) -> Self {
        Self {
            page_nodes,
            max_pages,
            preallocate: false,
        }
    }

    /// This geometry with every page reserved up front.
    pub fn preallocated(self) -> Self {
        Self {
            preallocate: true,
            ..self
        }
    }

    /// A single-page arena holding exactly `nodes` slots.
    pub fn with_capacity(nodes: u32) -> Self {
        Self::new(nodes, 1)
    }

    /// Total number of node slots across all pages.
    pub fn capacity(&self) -> usize {
        self.page_nodes as usize * self.max_pages as usize
    }

    /// Check the geometry constraints.
    ///
    /// Slot indices are `u32`, so the total capacity must fit in one.
    pub fn validate(&self) -> Result<(), ArenaError> {
        if self.page_nodes == 0 {
            return Err(ArenaError::InvalidConfig {
                reason: "page_nodes must be at least 1".into(),
            });
        }
        if self.max_pages == 0 {
            return Err(ArenaError::InvalidConfig {
                reason: "max_pages must be at least 1".into(),
            });
        }
        if self.page_nodes as u64 * self.max_pages as u64 > u32::MAX as u64 {
            return Err(ArenaError::InvalidConfig {
                reason: format!(
                    "capacity {} exceeds the u32 slot index range",
                    self.capacity()
                ),
            });
        }
        Ok(())
    }
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_PAGE_NODES, Self::DEFAULT_MAX_PAGES)
    }
}
