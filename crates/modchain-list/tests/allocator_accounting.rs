//! Node accounting across list operations, observed through a counting
//! allocator.

use modchain_arena::{ArenaConfig, HeapNodes, NodeAllocator, NodeArena};
use modchain_list::{IntrusiveList, Node};
use modchain_test_utils::CountingAllocator;

type Counted<'a> = CountingAllocator<HeapNodes<Node<'a, u32>>>;

fn counted<'a>() -> Counted<'a> {
    CountingAllocator::new(HeapNodes::new())
}

#[test]
fn clear_after_remove_if_frees_every_node() {
    let values = [1u32, 2, 3, 4, 5];
    let mut alloc = counted();
    {
        let mut list = IntrusiveList::new(&mut alloc);
        list.extend(values.iter());
        assert_eq!(list.remove_if(|v| v % 2 == 1), 3);
        assert_eq!(list.live_count(), 2);
        assert_eq!(list.node_count(), 5);
        list.clear();
        assert!(list.is_empty());
    }
    assert_eq!(alloc.allocs(), 5);
    assert_eq!(alloc.frees(), 5);
    assert_eq!(alloc.outstanding(), 0);
}

#[test]
fn pop_front_frees_tombstoned_heads() {
    let values = [10u32, 20, 30];
    let mut alloc = counted();
    {
        let mut list = IntrusiveList::new(&mut alloc);
        list.extend(values.iter());
        list.remove(&values[0]);
        assert_eq!(list.pop_front(), None);
        assert_eq!(list.pop_front(), Some(&20));
    }
    // Two popped, the third freed when the list dropped.
    assert_eq!(alloc.frees(), 3);
}

#[test]
fn dropping_list_returns_nodes_to_borrowed_allocator() {
    let values = [7u32; 4];
    let mut alloc = counted();
    {
        let mut list = IntrusiveList::new(&mut alloc);
        for v in &values {
            list.push_front(v);
        }
    }
    assert_eq!(alloc.outstanding(), 0);
    assert_eq!(alloc.live_count(), 0);
}

#[test]
fn traversal_does_not_allocate() {
    let values = [1u32, 2, 3];
    let mut alloc = counted();
    {
        let mut list = IntrusiveList::new(&mut alloc);
        list.extend(values.iter());
        let mut seen = 0;
        list.for_each(|_| seen += 1);
        assert_eq!(seen, 3);
        assert!(list.contains(&values[1]));
        assert_eq!(list.find_if(|v| *v > 1), Some(&2));
        assert_eq!(list.allocator().allocs(), 3);
        assert_eq!(list.allocator().frees(), 0);
    }
}

#[test]
fn arena_slots_are_reused_after_clear() {
    let values = [1u32, 2, 3, 4];
    let mut arena = NodeArena::<Node<'_, u32>>::new(ArenaConfig::with_capacity(4)).unwrap();
    for _ in 0..3 {
        let mut list = IntrusiveList::new(&mut arena);
        list.extend(values.iter());
        assert_eq!(list.iter().copied().collect::<Vec<_>>(), [1, 2, 3, 4]);
    }
    assert_eq!(arena.live_count(), 0);
    assert_eq!(arena.page_count(), 1);
}

#[test]
fn try_alloc_failures_are_counted() {
    let arena = NodeArena::<u32>::new(ArenaConfig::with_capacity(2)).unwrap();
    let mut alloc = CountingAllocator::new(arena);
    assert!(alloc.try_alloc(1).is_ok());
    assert!(alloc.try_alloc(2).is_ok());
    assert!(alloc.try_alloc(3).is_err());
    assert_eq!(alloc.allocs(), 2);
    assert_eq!(alloc.failed(), 1);
    assert_eq!(alloc.inner().free_count(), 0);
}

#[test]
fn reset_counts_measures_one_phase() {
    let values = [1u32, 2, 3];
    let mut alloc = counted();
    {
        let mut list = IntrusiveList::new(&mut alloc);
        list.extend(values.iter());
    }
    alloc.reset_counts();
    {
        let mut list = IntrusiveList::new(&mut alloc);
        list.push_back(&values[0]);
        list.pop_front();
    }
    assert_eq!(alloc.allocs(), 1);
    assert_eq!(alloc.frees(), 1);
    assert_eq!(alloc.failed(), 0);
    assert_eq!(alloc.inner().total_slots(), 3);
}
