use super::*;
use crate::test_helpers::test_rng;
use crate::Reverse;
use alloc::string::String;
use alloc::vec::Vec;
use rand::Rng;
use std::cell::Cell;

fn max_queue<T: Ord>() -> PriorityQueue<T> {
    PriorityQueue::new(OrdTotalOrder, PartialEqLookup)
}

fn drain_sorted<T, O: TotalOrder<T>, E>(queue: &mut PriorityQueue<T, O, E>) -> Vec<T> {
    let mut out = Vec::new();
    while let Some(value) = queue.pop() {
        out.push(value);
    }
    out
}

/// A value whose priority can be changed while it is queued.
struct Timer {
    id: u32,
    priority: Cell<u32>,
}

fn timer_queue() -> PriorityQueue<
    Timer,
    impl Fn(&Timer, &Timer) -> Ordering,
    impl Fn(&u32, &Timer) -> bool,
> {
    PriorityQueue::new(
        |a: &Timer, b: &Timer| a.priority.get().cmp(&b.priority.get()),
        |id: &u32, timer: &Timer| timer.id == *id,
    )
}

#[test]
fn test_empty() {
    let mut queue = max_queue::<i32>();
    assert_eq!(queue.len(), 0);
    assert!(queue.is_empty());
    assert_eq!(queue.find(&3), None);
    assert_eq!(queue.top(), None);
    assert_eq!(queue.pop(), None);
    assert!(!queue.erase(&3));
    assert_eq!(queue.iter().next(), None);
}

#[test]
fn test_push_pop() {
    let mut queue = max_queue::<i32>();
    for x in [2, 4, 6, 2, 1, 8, 10, 3, 5, 7, 0, 9, 1] {
        queue.push(x);
        assert!(queue.is_heap());
    }
    assert_eq!(queue.top(), Some(&10));
    assert_eq!(queue.len(), 13);

    let mut popped = Vec::new();
    while let Some(x) = queue.pop() {
        assert!(queue.is_heap());
        popped.push(x);
    }
    assert_eq!(popped, [10, 9, 8, 7, 6, 5, 4, 3, 2, 2, 1, 1, 0]);
}

#[test]
fn test_min_heap() {
    let mut queue = PriorityQueue::new(Reverse(OrdTotalOrder), PartialEqLookup);
    for x in [5, 1, 8, 3, 2] {
        queue.push(x);
    }
    assert_eq!(drain_sorted(&mut queue), [1, 2, 3, 5, 8]);
}

#[test]
fn test_fifo_among_ties() {
    let by_priority = |a: &(u8, char), b: &(u8, char)| a.0.cmp(&b.0);
    let mut queue = PriorityQueue::new(by_priority, PartialEqLookup);
    queue.push((7, 'A'));
    queue.push((7, 'B'));
    queue.push((7, 'C'));

    assert_eq!(queue.pop(), Some((7, 'A')));
    assert_eq!(queue.pop(), Some((7, 'B')));
    assert_eq!(queue.pop(), Some((7, 'C')));
    assert_eq!(queue.pop(), None);
}

#[test]
fn test_fifo_among_ties_interleaved() {
    let by_priority = |a: &(u8, char), b: &(u8, char)| a.0.cmp(&b.0);
    let mut queue = PriorityQueue::new(by_priority, PartialEqLookup);
    for item in [(1, 'a'), (3, 'x'), (1, 'b'), (2, 'm'), (3, 'y'), (1, 'c'), (2, 'n'), (3, 'z')] {
        queue.push(item);
    }

    let popped: String = drain_sorted(&mut queue).into_iter().map(|(_, c)| c).collect();
    assert_eq!(popped, "xyzmnabc");
}

#[test]
fn test_fifo_among_ties_random() {
    let mut rng = test_rng();
    let by_priority = |a: &(u32, usize), b: &(u32, usize)| a.0.cmp(&b.0);
    let mut queue = PriorityQueue::new(by_priority, PartialEqLookup);

    for i in 0..500 {
        queue.push((rng.gen_range(0..8), i));
        if rng.gen_bool(0.2) {
            queue.pop();
        }
    }

    let popped = drain_sorted(&mut queue);
    for pair in popped.windows(2) {
        let ((p0, i0), (p1, i1)) = (pair[0], pair[1]);
        assert!(p0 > p1 || (p0 == p1 && i0 < i1), "{:?} before {:?}", pair[0], pair[1]);
    }
}

#[test]
fn test_sequence_numbers() {
    let mut queue = max_queue::<i32>();
    queue.push(4);
    queue.push(4);
    let mut sequences: Vec<u64> = queue.data.iter().map(|entry| entry.sequence).collect();
    sequences.sort_unstable();
    assert_eq!(sequences, [1, 2]);

    queue.clear();
    assert!(queue.is_empty());
    queue.push(4);
    assert_eq!(queue.data[0].sequence, 3);

    queue.drain().for_each(drop);
    queue.push(4);
    assert_eq!(queue.data[0].sequence, 4);
}

#[test]
fn test_clear_keeps_tie_order() {
    let by_priority = |a: &(u8, char), b: &(u8, char)| a.0.cmp(&b.0);
    let mut queue = PriorityQueue::new(by_priority, PartialEqLookup);
    queue.push((1, 'x'));
    queue.push((1, 'a'));
    queue.pop();
    queue.clear();
    queue.push((1, 'b'));
    queue.push((1, 'c'));
    assert_eq!(queue.pop(), Some((1, 'b')));
}

#[test]
fn test_multiset() {
    let mut queue = max_queue::<i32>();
    queue.push(3);
    queue.push(9);
    let len = queue.len();
    queue.push(5);
    queue.push(5);
    assert_eq!(queue.len(), len + 2);

    assert!(queue.erase(&5));
    assert_eq!(queue.len(), len + 1);
    assert!(queue.find(&5).is_some());
    assert!(queue.erase(&5));
    assert_eq!(queue.find(&5), None);
    assert!(!queue.erase(&5));

    queue.push(5);
    queue.push(5);
    assert_eq!(drain_sorted(&mut queue), [9, 5, 5, 3]);
}

#[test]
fn test_find() {
    let mut queue = PriorityQueue::new(OrdTotalOrder, |key: &i32, value: &i32| value % 10 == *key);
    for x in [13, 24, 35, 44] {
        queue.push(x);
    }

    let position = queue.find(&4).unwrap();
    let found = *queue.get(position).unwrap();
    assert!(found == 24 || found == 44);
    assert_eq!(queue.find(&7), None);
    assert_eq!(queue.find_by(|&x| x > 40).map(|p| *queue.get(p).unwrap()), Some(44));
    assert_eq!(queue.get(Position(queue.len())), None);
}

#[test]
fn test_find_follows_array_order() {
    let mut queue = max_queue::<i32>();
    for x in [1, 2, 3, 4, 5] {
        queue.push(x);
    }
    let first_match = queue.iter().position(|&x| x % 2 == 0).unwrap();
    assert_eq!(queue.find_by(|&x| x % 2 == 0), Some(Position(first_match)));
}

#[test]
fn test_erase_round_trip() {
    let mut rng = test_rng();
    let mut queue = max_queue::<i32>();
    for _ in 0..100 {
        queue.push(rng.gen_range(0..1000));
    }
    queue.push(5000);
    let len = queue.len();

    assert!(queue.erase(&5000));
    assert_eq!(queue.find(&5000), None);
    assert_eq!(queue.len(), len - 1);
    assert!(queue.is_heap());
}

#[test]
fn test_erase_interior_random() {
    let mut rng = test_rng();
    let mut queue = max_queue::<i32>();
    let mut expected = Vec::new();
    for _ in 0..200 {
        let x = rng.gen_range(0..100);
        queue.push(x);
        expected.push(x);
    }

    for _ in 0..100 {
        let x = expected.swap_remove(rng.gen_range(0..expected.len()));
        assert_eq!(queue.remove(&x), Some(x));
        assert!(queue.is_heap());
    }

    expected.sort_unstable_by(|a, b| b.cmp(a));
    assert_eq!(drain_sorted(&mut queue), expected);
}

#[test]
fn test_erase_elevated() {
    let mut queue = timer_queue();
    for (id, priority) in [(1, 10), (2, 50), (3, 30), (4, 20), (5, 40)] {
        queue.push(Timer { id, priority: Cell::new(priority) });
    }

    let position = queue.find(&4).unwrap();
    queue.get(position).unwrap().priority.set(100);
    let erased = queue.erase_elevated(position);
    assert_eq!(erased.id, 4);
    assert_eq!(queue.len(), 4);

    let ids: Vec<u32> = drain_sorted(&mut queue).into_iter().map(|t| t.id).collect();
    assert_eq!(ids, [2, 5, 3, 1]);
}

#[test]
fn test_erase_elevated_random() {
    let mut rng = test_rng();
    for _ in 0..20 {
        let mut queue = timer_queue();
        for id in 0..64 {
            queue.push(Timer { id, priority: Cell::new(rng.gen_range(0..1000)) });
        }

        let victim = rng.gen_range(0..64);
        let position = queue.find(&victim).unwrap();
        queue.get(position).unwrap().priority.set(1000);
        assert_eq!(queue.erase_elevated(position).id, victim);
        assert!(queue.is_heap());

        let popped: Vec<u32> =
            drain_sorted(&mut queue).into_iter().map(|t| t.priority.get()).collect();
        assert_eq!(popped.len(), 63);
        assert!(popped.windows(2).all(|w| w[0] >= w[1]));
    }
}

#[test]
fn test_erase_elevated_contract_violation() {
    let mut queue = timer_queue();
    for id in 0..10 {
        queue.push(Timer { id, priority: Cell::new(id) });
    }

    // not raised to the top: structurally fine, but no ordering is promised
    let position = queue.find(&3).unwrap();
    queue.erase_elevated(position);
    assert_eq!(queue.len(), 9);
    assert_eq!(queue.find(&3), None);
    assert_eq!(drain_sorted(&mut queue).len(), 9);
}

#[test]
#[should_panic(expected = "should be < len")]
fn test_erase_elevated_out_of_bounds() {
    let mut queue = max_queue::<i32>();
    queue.push(1);
    let position = queue.find(&1).unwrap();
    queue.pop();
    queue.erase_elevated(position);
}

#[test]
fn test_popper() {
    let mut queue = max_queue::<i32>();
    for x in [3, 1, 5] {
        queue.push(x);
    }

    let popped: Vec<i32> = queue_popper(&mut queue, |&top| top < 2).collect();
    assert_eq!(popped, [5, 3]);
    assert_eq!(queue.len(), 1);
    assert_eq!(queue.top(), Some(&1));
}

#[test]
fn test_popper_empty() {
    let mut queue = max_queue::<i32>();
    let mut popper = queue.pop_until(|_| false);
    assert_eq!(popper.size_hint(), (0, Some(0)));
    assert_eq!(popper.next(), None);
}

#[test]
fn test_popper_drains_everything() {
    let mut queue = max_queue::<i32>();
    queue.extend([4, 8, 2, 6]);
    assert_eq!(queue.pop_until(|_| false).size_hint(), (0, Some(4)));
    assert_eq!(queue.pop_until(|_| false).collect::<Vec<_>>(), [8, 6, 4, 2]);
    assert!(queue.is_empty());
}

#[test]
fn test_popper_stops_immediately() {
    let mut queue = max_queue::<i32>();
    queue.extend([4, 8]);
    let mut calls = 0;
    let popped: Vec<i32> = queue
        .pop_until(|_| {
            calls += 1;
            true
        })
        .collect();
    assert!(popped.is_empty());
    assert_eq!(calls, 1);
    assert_eq!(queue.len(), 2);
}

#[test]
fn test_popper_stays_exhausted() {
    let mut queue = max_queue::<i32>();
    queue.extend([3, 2, 1]);
    let mut calls = 0;
    let mut popper = queue.pop_until(|_| {
        calls += 1;
        calls == 2
    });
    assert_eq!(popper.next(), Some(3));
    assert_eq!(popper.next(), None);
    // `stop` would now say "go on", but the sequence has already ended
    assert_eq!(popper.next(), None);
    assert_eq!(popper.next(), None);
    assert_eq!(popper.size_hint(), (0, Some(0)));
    drop(popper);
    assert_eq!(calls, 2);
    assert_eq!(queue.len(), 2);
    assert_eq!(queue.top(), Some(&2));
}

#[test]
fn test_popper_stays_exhausted_when_emptied() {
    let mut queue = max_queue::<i32>();
    queue.push(1);
    let mut popper = queue.pop_until(|_| false);
    assert_eq!(popper.next(), Some(1));
    assert_eq!(popper.next(), None);
    assert_eq!(popper.next(), None);
}

#[test]
fn test_popper_partial_consumption() {
    let mut queue = max_queue::<i32>();
    queue.extend(&[1, 2, 3, 4, 5]);
    {
        let mut popper = queue.pop_until(|&x| x < 3);
        assert_eq!(popper.next(), Some(5));
    }
    assert_eq!(queue.len(), 4);
    assert_eq!(queue.top(), Some(&4));
}

#[test]
fn test_scale() {
    let mut rng = test_rng();
    let n = if cfg!(miri) { 100 } else { 10_000 };

    let mut queue = max_queue::<i32>();
    for _ in 0..n {
        queue.push(rng.gen::<u32>() as i32);
    }
    let popped = drain_sorted(&mut queue);
    assert_eq!(popped.len(), n);
    assert!(popped.windows(2).all(|w| w[0] >= w[1]));

    let mut queue = PriorityQueue::new(Reverse(OrdTotalOrder), PartialEqLookup);
    for _ in 0..n {
        queue.push(rng.gen_range(0u16..100));
    }
    let popped = drain_sorted(&mut queue);
    assert!(popped.windows(2).all(|w| w[0] <= w[1]));
}

#[test]
fn test_random_operations_keep_heap() {
    let mut rng = test_rng();
    let mut queue = max_queue::<i32>();
    let mut len = 0;
    for _ in 0..2000 {
        match rng.gen_range(0..4) {
            0 | 1 => {
                queue.push(rng.gen_range(0..50));
                len += 1;
            }
            2 => {
                if queue.pop().is_some() {
                    len -= 1;
                }
            }
            _ => {
                if queue.erase(&rng.gen_range(0..50)) {
                    len -= 1;
                }
            }
        }
        assert_eq!(queue.len(), len);
        assert!(queue.is_heap());
    }
}

#[test]
fn test_iter_and_drain() {
    let mut queue = max_queue::<i32>();
    queue.extend([1, 3, 2]);

    let mut seen: Vec<i32> = queue.iter().copied().collect();
    seen.sort_unstable();
    assert_eq!(seen, [1, 2, 3]);
    assert_eq!(queue.iter().len(), 3);
    assert_eq!((&queue).into_iter().count(), 3);

    let mut drained: Vec<i32> = queue.drain().collect();
    drained.sort_unstable();
    assert_eq!(drained, [1, 2, 3]);
    assert!(queue.is_empty());
}

#[test]
fn test_into_vec() {
    let mut queue = max_queue::<i32>();
    queue.extend([7, 3, 9]);
    let raw: Vec<i32> = queue.iter().copied().collect();
    assert_eq!(queue.into_vec(), raw);
}

#[test]
fn test_clone_is_independent() {
    let mut queue = max_queue::<i32>();
    queue.extend([1, 2]);
    let mut copy = queue.clone();
    copy.push(3);
    assert_eq!(queue.len(), 2);
    assert_eq!(copy.pop(), Some(3));
    assert_eq!(queue.pop(), Some(2));
}

#[test]
fn test_debug() {
    let mut queue = max_queue::<i32>();
    queue.push(1);
    assert_eq!(format!("{:?}", queue), "[1]");
    assert_eq!(format!("{:?}", queue.iter()), "[1]");
    assert_eq!(format!("{:?}", queue.pop_until(|_| true)), "QueuePopper { queue: [1], .. }");
}

#[test]
fn test_default_and_capacity() {
    let mut queue: PriorityQueue<u8> = PriorityQueue::default();
    assert!(queue.is_empty());
    queue.reserve(16);
    assert!(queue.capacity() >= 16);
    queue.shrink_to_fit();

    let queue: PriorityQueue<u8> = PriorityQueue::with_capacity(OrdTotalOrder, PartialEqLookup, 8);
    assert!(queue.capacity() >= 8);
    assert_eq!(queue.order(), &OrdTotalOrder);
    assert_eq!(queue.lookup(), &PartialEqLookup);
}

#[test]
fn test_position() {
    let a = Position(1);
    let b = Position(1);
    let c = Position(2);
    assert!(a == b);
    assert!(!(a != b));
    assert!(a != c);
    assert!(!(a == c));
    assert_eq!(c.index(), 2);
}

#[cfg(feature = "tracing")]
#[test]
fn test_removals_with_tracing() {
    let mut queue = timer_queue();
    for id in 0..8 {
        queue.push(Timer { id, priority: Cell::new(id * 10) });
    }

    assert!(queue.erase(&3));
    let position = queue.find(&5).unwrap();
    queue.get(position).unwrap().priority.set(1000);
    assert_eq!(queue.erase_elevated(position).id, 5);

    let ids: Vec<u32> = drain_sorted(&mut queue).into_iter().map(|t| t.id).collect();
    assert_eq!(ids, [7, 6, 4, 2, 1, 0]);
}
