//! Paged, fixed-capacity node arena.
//!
//! A [`NodeArena`] reserves its page table up front and fills it with pages
//! of `page_nodes` slots on demand, or all at once when the config asks for
//! preallocation. Pages are never returned while the arena lives; freed
//! slots go back on the free-list and are reused LIFO.

use crate::allocator::NodeAllocator;
use crate::config::ArenaConfig;
use crate::error::ArenaError;
use crate::handle::NodeId;
use crate::slot::Entry;

/// Fixed-capacity slot arena with a free-list.
///
/// Capacity is bounded by [`ArenaConfig::capacity`]. Once every slot on
/// every permitted page is occupied, [`try_alloc`](NodeAllocator::try_alloc)
/// fails with [`ArenaError::CapacityExceeded`] and
/// [`alloc`](NodeAllocator::alloc) aborts.
pub struct NodeArena<N> {
    /// Allocated pages. The outer `Vec` is reserved to `max_pages` at
    /// construction and never reallocates.
    pages: Vec<Box<[Entry<N>]>>,
    page_nodes: u32,
    max_pages: u16,
    /// Head of the intrusive free-list (flat slot index).
    free_head: Option<u32>,
    /// Occupied slot count.
    live: usize,
}

impl<N> NodeArena<N> {
    /// Create an arena with one page allocated, or every page if
    /// [`ArenaConfig::preallocate`] is set.
    pub fn new(config: ArenaConfig) -> Result<Self, ArenaError> {
        config.validate()?;
        let mut arena = Self {
            pages: Vec::with_capacity(config.max_pages as usize),
            page_nodes: config.page_nodes,
            max_pages: config.max_pages,
            free_head: None,
            live: 0,
        };
        arena.grow()?;
        if config.preallocate {
            while arena.pages.len() < arena.max_pages as usize {
                arena.grow()?;
            }
        }
        Ok(arena)
    }

    /// Number of pages allocated so far.
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Slots on allocated pages that are currently vacant.
    pub fn free_count(&self) -> usize {
        self.allocated_slots() - self.live
    }

    /// Slots on allocated pages, occupied or not.
    pub fn allocated_slots(&self) -> usize {
        self.pages.len() * self.page_nodes as usize
    }

    /// Whether `id` refers to a currently occupied slot of this arena.
    pub fn contains(&self, id: NodeId) -> bool {
        self.entry(id.index)
            .and_then(|e| e.get(id.generation))
            .is_some()
    }

    fn total_capacity(&self) -> usize {
        self.page_nodes as usize * self.max_pages as usize
    }

    fn locate(&self, index: u32) -> (usize, usize) {
        (
            (index / self.page_nodes) as usize,
            (index % self.page_nodes) as usize,
        )
    }

    fn entry(&self, index: u32) -> Option<&Entry<N>> {
        let (page, slot) = self.locate(index);
        self.pages.get(page)?.get(slot)
    }

    fn entry_mut(&mut self, index: u32) -> Option<&mut Entry<N>> {
        let (page, slot) = self.locate(index);
        self.pages.get_mut(page)?.get_mut(slot)
    }

    /// Append a page and thread its slots onto the free-list.
    ///
    /// Only called when the free-list is empty. Returns the first slot
    /// index of the new page.
    fn grow(&mut self) -> Result<u32, ArenaError> {
        if self.pages.len() >= self.max_pages as usize {
            return Err(ArenaError::CapacityExceeded {
                capacity: self.total_capacity(),
            });
        }
        let page_nodes = self.page_nodes;
        // Fits: validate() bounds page_nodes * max_pages by u32::MAX.
        let base = self.pages.len() as u32 * page_nodes;
        let tail = self.free_head;
        let page: Box<[Entry<N>]> = (0..page_nodes)
            .map(|i| {
                let next = if i + 1 < page_nodes {
                    Some(base + i + 1)
                } else {
                    tail
                };
                Entry::vacant(next)
            })
            .collect();
        self.pages.push(page);
        self.free_head = Some(base);
        tracing::trace!(
            page = self.pages.len() - 1,
            page_nodes,
            max_pages = self.max_pages,
            "node arena page added"
        );
        Ok(base)
    }
}

impl<N> NodeAllocator<N> for NodeArena<N> {
    fn try_alloc(&mut self, node: N) -> Result<NodeId, ArenaError> {
        let index = match self.free_head {
            Some(index) => index,
            None => self.grow()?,
        };
        let (page, slot) = self.locate(index);
        let entry = &mut self.pages[page][slot];
        self.free_head = entry.occupy(node);
        self.live += 1;
        Ok(NodeId::new(index, entry.generation))
    }

    fn free(&mut self, id: NodeId) -> N {
        let next_free = self.free_head;
        let node = self
            .entry_mut(id.index)
            .and_then(|e| e.vacate(id.generation, next_free));
        match node {
            Some(node) => {
                self.free_head = Some(id.index);
                self.live -= 1;
                node
            }
            None => panic!("free of stale or vacant node handle {id}"),
        }
    }

    fn get(&self, id: NodeId) -> &N {
        match self.entry(id.index).and_then(|e| e.get(id.generation)) {
            Some(node) => node,
            None => panic!("access through stale or vacant node handle {id}"),
        }
    }

    fn get_mut(&mut self, id: NodeId) -> &mut N {
        match self.entry_mut(id.index).and_then(|e| e.get_mut(id.generation)) {
            Some(node) => node,
            None => panic!("access through stale or vacant node handle {id}"),
        }
    }

    fn live_count(&self) -> usize {
        self.live
    }

    fn capacity(&self) -> Option<usize> {
        Some(self.total_capacity())
    }
}
