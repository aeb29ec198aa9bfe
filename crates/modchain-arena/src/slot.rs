//! Slot bookkeeping shared by every allocator strategy.
//!
//! Vacant slots form an intrusive singly-linked free-list through
//! `next_free`, so returning a slot never touches the heap.

/// State of one slot.
pub(crate) enum Slot<N> {
    Vacant { next_free: Option<u32> },
    Occupied(N),
}

/// A slot plus its generation counter.
///
/// The generation is bumped every time the slot is vacated, which
/// invalidates every [`NodeId`](crate::NodeId) issued for the previous
/// occupant.
pub(crate) struct Entry<N> {
    pub(crate) generation: u32,
    slot: Slot<N>,
}

impl<N> Entry<N> {
    pub(crate) fn vacant(next_free: Option<u32>) -> Self {
        Self {
            generation: 0,
            slot: Slot::Vacant { next_free },
        }
    }

    /// Store `node` in a vacant slot, returning the free-list successor.
    ///
    /// Only called on the free-list head, which is always vacant.
    pub(crate) fn occupy(&mut self, node: N) -> Option<u32> {
        let next_free = match self.slot {
            Slot::Vacant { next_free } => next_free,
            Slot::Occupied(_) => unreachable!("free-list head is occupied"),
        };
        self.slot = Slot::Occupied(node);
        next_free
    }

    /// Take the node out if `generation` matches, linking the slot in
    /// front of `next_free` and bumping the generation.
    ///
    /// Returns `None` (and leaves the slot untouched) for stale handles
    /// and already-vacant slots.
    pub(crate) fn vacate(&mut self, generation: u32, next_free: Option<u32>) -> Option<N> {
        if self.generation != generation || !self.is_occupied() {
            return None;
        }
        let prev = std::mem::replace(&mut self.slot, Slot::Vacant { next_free });
        self.generation = self.generation.wrapping_add(1);
        match prev {
            Slot::Occupied(node) => Some(node),
            Slot::Vacant { .. } => None,
        }
    }

    pub(crate) fn get(&self, generation: u32) -> Option<&N> {
        match &self.slot {
            Slot::Occupied(node) if self.generation == generation => Some(node),
            _ => None,
        }
    }

    pub(crate) fn get_mut(&mut self, generation: u32) -> Option<&mut N> {
        match &mut self.slot {
            Slot::Occupied(node) if self.generation == generation => Some(node),
            _ => None,
        }
    }

    pub(crate) fn is_occupied(&self) -> bool {
        matches!(self.slot, Slot::Occupied(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn occupy_returns_successor() {
        let mut e: Entry<u8> = Entry::vacant(Some(9));
        assert_eq!(e.occupy(1), Some(9));
        assert!(e.is_occupied());
    }

    #[test]
    fn vacate_bumps_generation() {
        let mut e = Entry::vacant(None);
        e.occupy('x');
        assert_eq!(e.vacate(0, Some(3)), Some('x'));
        assert_eq!(e.generation, 1);
        assert!(!e.is_occupied());
    }

    #[test]
    fn stale_generation_is_ignored() {
        let mut e = Entry::vacant(None);
        e.occupy(5u32);
        assert_eq!(e.vacate(1, None), None);
        assert_eq!(e.get(1), None);
        assert_eq!(e.get(0), Some(&5));
    }

    #[test]
    fn double_vacate_is_ignored() {
        let mut e = Entry::vacant(None);
        e.occupy(5u32);
        assert!(e.vacate(0, None).is_some());
        assert!(e.vacate(0, None).is_none());
        assert!(e.vacate(1, None).is_none());
    }
}
