//! A priority queue implemented with a binary heap.
//!
//! Pushing and popping have *O*(log(*n*)) time complexity and checking the top
//! element is *O*(1). Values of equal priority are popped in the order in which
//! they were pushed. Looking up or removing an element by key is a linear scan
//! followed by an *O*(*n*) rebuild of the heap, which is acceptable for the
//! modest number of pending items the queue is meant to hold.

use core::cmp::Ordering;
use core::fmt;
use core::iter::FusedIterator;
use core::mem::{swap, ManuallyDrop};
use core::ptr;

use alloc::slice;
use alloc::vec::{self, Vec};

use crate::{Lookup, OrdTotalOrder, PartialEqLookup, TotalOrder};

mod popper;
pub use popper::{queue_popper, QueuePopper};

#[cfg(test)]
mod tests;

/// A stored value with the sequence number it was pushed under.
#[derive(Clone)]
struct Entry<T> {
    value: T,
    sequence: u64,
}

/// The caller's order, with ties broken in favour of the entry pushed first.
///
/// Sequence numbers are unique, so no two distinct entries ever compare equal.
#[derive(Clone)]
struct SequencedOrder<O>(O);

impl<T, O: TotalOrder<T>> TotalOrder<Entry<T>> for SequencedOrder<O> {
    #[inline]
    fn cmp(&self, this: &Entry<T>, that: &Entry<T>) -> Ordering {
        self.0.cmp(&this.value, &that.value).then_with(|| that.sequence.cmp(&this.sequence))
    }
}

/// A priority queue implemented with a binary heap, ordered by a runtime
/// [`TotalOrder`].
///
/// This will be a max-heap: the greatest value under `O` is on top. Values
/// that `O` considers equal come out first-in, first-out. Use [`Reverse`] to
/// make it a min-heap.
///
/// The queue is a multiset: pushing the same value twice stores it twice, and
/// each copy can be popped or erased on its own. Values are found by a search
/// key through the [`Lookup`] `E`, which is independent of the order.
///
/// It is a logic error for an item to be modified in such a way that its
/// ordering relative to any other item, as determined by `O`, changes while it
/// is in the queue, except as described for [`erase_elevated`]. This is
/// normally only possible through [`Cell`], [`RefCell`], global state, I/O, or
/// unsafe code. The behavior resulting from such a logic error is not
/// specified, but will be encapsulated to the `PriorityQueue` that observed it
/// and not result in undefined behavior.
///
/// # Examples
///
/// ```
/// use sequeue::{OrdTotalOrder, PartialEqLookup, PriorityQueue};
///
/// let mut queue = PriorityQueue::new(OrdTotalOrder, PartialEqLookup);
/// assert_eq!(queue.top(), None);
///
/// queue.push(1);
/// queue.push(5);
/// queue.push(2);
/// queue.push(5);
///
/// assert_eq!(queue.top(), Some(&5));
/// assert_eq!(queue.len(), 4);
///
/// // iteration follows the backing array, not priority order
/// for x in &queue {
///     println!("{x}");
/// }
///
/// assert!(queue.erase(&2));
/// assert_eq!(queue.pop(), Some(5));
/// assert_eq!(queue.pop(), Some(5));
/// assert_eq!(queue.pop(), Some(1));
/// assert_eq!(queue.pop(), None);
/// ```
///
/// ## Ties
///
/// ```
/// use sequeue::{PartialEqLookup, PriorityQueue};
///
/// let by_priority = |a: &(u8, char), b: &(u8, char)| a.0.cmp(&b.0);
/// let mut queue = PriorityQueue::new(by_priority, PartialEqLookup);
///
/// queue.push((1, 'a'));
/// queue.push((1, 'b'));
/// queue.push((2, 'z'));
/// queue.push((1, 'c'));
///
/// let popped: String = queue.pop_until(|_| false).map(|(_, c)| c).collect();
/// assert_eq!(popped, "zabc");
/// ```
///
/// # Time complexity
///
/// | [push]        | [pop]         | [top] | [find]     | [erase]    |
/// |---------------|---------------|-------|------------|------------|
/// | *O*(log(*n*)) | *O*(log(*n*)) | *O*(1)| *O*(*n*)   | *O*(*n*)   |
///
/// [`Reverse`]: crate::Reverse
/// [`erase_elevated`]: PriorityQueue::erase_elevated
/// [`Cell`]: core::cell::Cell
/// [`RefCell`]: core::cell::RefCell
/// [push]: PriorityQueue::push
/// [pop]: PriorityQueue::pop
/// [top]: PriorityQueue::top
/// [find]: PriorityQueue::find
/// [erase]: PriorityQueue::erase
#[derive(Clone)]
pub struct PriorityQueue<T, O = OrdTotalOrder, E = PartialEqLookup> {
    data: Vec<Entry<T>>,
    next_sequence: u64,
    order: SequencedOrder<O>,
    lookup: E,
}

/// The location of an element in the backing array of a [`PriorityQueue`].
///
/// Returned by [`PriorityQueue::find`]. A position only stays meaningful until
/// the queue is next modified.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position(usize);

impl Position {
    /// The index into the backing array.
    #[must_use]
    pub fn index(self) -> usize {
        self.0
    }
}

impl<T: fmt::Debug, O, E> fmt::Debug for PriorityQueue<T, O, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T, O: Default, E: Default> Default for PriorityQueue<T, O, E> {
    /// Creates an empty `PriorityQueue` with the default order and lookup.
    #[inline]
    fn default() -> PriorityQueue<T, O, E> {
        PriorityQueue::new(O::default(), E::default())
    }
}

impl<T, O, E> PriorityQueue<T, O, E> {
    /// Creates an empty `PriorityQueue` ordered by `order` and searched with
    /// `lookup`.
    ///
    /// Does not allocate anything on its own.
    ///
    /// # Examples
    ///
    /// ```
    /// use sequeue::{PartialEqLookup, PriorityQueue};
    ///
    /// // order strings by length, longest first
    /// let mut queue = PriorityQueue::new(|a: &&str, b: &&str| a.len().cmp(&b.len()), PartialEqLookup);
    /// queue.push("abc");
    /// queue.push("abcde");
    /// assert_eq!(queue.top(), Some(&"abcde"));
    /// ```
    #[must_use]
    pub const fn new(order: O, lookup: E) -> PriorityQueue<T, O, E> {
        PriorityQueue { data: Vec::new(), next_sequence: 0, order: SequencedOrder(order), lookup }
    }

    /// Creates an empty `PriorityQueue` with at least the specified capacity.
    #[must_use]
    pub fn with_capacity(order: O, lookup: E, capacity: usize) -> PriorityQueue<T, O, E> {
        PriorityQueue {
            data: Vec::with_capacity(capacity),
            next_sequence: 0,
            order: SequencedOrder(order),
            lookup,
        }
    }

    /// Returns the highest-priority value, or `None` if the queue is empty.
    ///
    /// # Time complexity
    ///
    /// Cost is *O*(1) in the worst case.
    #[must_use]
    pub fn top(&self) -> Option<&T> {
        self.data.first().map(|entry| &entry.value)
    }

    /// Returns the value at `position`, or `None` if it is out of bounds.
    #[must_use]
    pub fn get(&self, position: Position) -> Option<&T> {
        self.data.get(position.0).map(|entry| &entry.value)
    }

    /// Returns the position of the first value matching `key`, or `None` if
    /// there is none.
    ///
    /// The scan follows the backing array, so with several matches the one
    /// found is not necessarily the one with the highest priority.
    ///
    /// # Examples
    ///
    /// ```
    /// use sequeue::{OrdTotalOrder, PriorityQueue};
    ///
    /// let mut queue = PriorityQueue::new(OrdTotalOrder, |key: &i32, value: &i32| value % 10 == *key);
    /// queue.push(13);
    /// queue.push(24);
    ///
    /// let position = queue.find(&4).unwrap();
    /// assert_eq!(queue.get(position), Some(&24));
    /// assert_eq!(queue.find(&5), None);
    /// ```
    pub fn find<K: ?Sized>(&self, key: &K) -> Option<Position>
    where
        E: Lookup<K, T>,
    {
        self.find_by(|value| self.lookup.matches(key, value))
    }

    /// Returns the position of the first value satisfying `predicate`, in
    /// backing array order.
    pub fn find_by<F>(&self, mut predicate: F) -> Option<Position>
    where
        F: FnMut(&T) -> bool,
    {
        self.data.iter().position(|entry| predicate(&entry.value)).map(Position)
    }

    /// Returns an iterator visiting all values in the underlying vector, in
    /// arbitrary order.
    ///
    /// This is **not** priority order.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter { iter: self.data.iter() }
    }

    /// Returns the number of elements the queue can hold without reallocating.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.data.capacity()
    }

    /// Reserves capacity for at least `additional` more elements.
    ///
    /// # Panics
    ///
    /// Panics if the new capacity overflows [`usize`].
    pub fn reserve(&mut self, additional: usize) {
        self.data.reserve(additional);
    }

    /// Discards as much additional capacity as possible.
    pub fn shrink_to_fit(&mut self) {
        self.data.shrink_to_fit();
    }

    /// Returns the number of elements in the queue.
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Checks if the queue is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Clears the queue, returning an iterator over the removed values in
    /// arbitrary order.
    ///
    /// Sequence numbers keep counting from where they were, so values pushed
    /// afterwards still tie-break after any value pushed before.
    #[inline]
    pub fn drain(&mut self) -> Drain<'_, T> {
        Drain { iter: self.data.drain(..) }
    }

    /// Drops all values from the queue.
    ///
    /// Like [`drain`](Self::drain), this does not reset sequence numbers.
    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// Consumes the queue and returns its values in backing array order.
    #[must_use = "`self` will be dropped if the result is not used"]
    pub fn into_vec(self) -> Vec<T> {
        self.data.into_iter().map(|entry| entry.value).collect()
    }

    /// Borrow this queue's order.
    pub fn order(&self) -> &O {
        &self.order.0
    }

    /// Borrow this queue's lookup.
    pub fn lookup(&self) -> &E {
        &self.lookup
    }
}

impl<T, O: TotalOrder<T>, E> PriorityQueue<T, O, E> {
    /// Pushes a value onto the queue.
    ///
    /// The value is stamped with the next sequence number, so among values of
    /// equal priority it will be popped after every one already pushed.
    ///
    /// # Time complexity
    ///
    /// The worst case cost of a *single* call to `push` is *O*(*n*), when
    /// capacity is exhausted and needs a resize. Otherwise it is
    /// *O*(log(*n*)).
    pub fn push(&mut self, value: T) {
        self.next_sequence += 1;
        let old_len = self.len();
        self.data.push(Entry { value, sequence: self.next_sequence });
        // SAFETY: Since we pushed a new item it means that
        //  old_len = self.len() - 1 < self.len()
        unsafe { self.sift_up(0, old_len) };
    }

    /// Removes the highest-priority value from the queue and returns it, or
    /// `None` if it is empty.
    ///
    /// # Time complexity
    ///
    /// The worst case cost of `pop` on a queue containing *n* elements is
    /// *O*(log(*n*)).
    pub fn pop(&mut self) -> Option<T> {
        self.data.pop().map(|mut item| {
            if !self.is_empty() {
                swap(&mut item, &mut self.data[0]);
                // SAFETY: !self.is_empty() means that self.len() > 0
                unsafe { self.sift_down(0) };
            }
            item.value
        })
    }

    /// Removes the first value matching `key` and returns whether there was
    /// one.
    ///
    /// See [`remove`](Self::remove).
    pub fn erase<K: ?Sized>(&mut self, key: &K) -> bool
    where
        E: Lookup<K, T>,
    {
        self.remove(key).is_some()
    }

    /// Removes the first value matching `key`, in backing array order, and
    /// returns it.
    ///
    /// The remaining values are rebuilt into a heap from scratch.
    ///
    /// # Examples
    ///
    /// ```
    /// use sequeue::{OrdTotalOrder, PartialEqLookup, PriorityQueue};
    ///
    /// let mut queue = PriorityQueue::new(OrdTotalOrder, PartialEqLookup);
    /// queue.push(3);
    /// queue.push(3);
    ///
    /// assert_eq!(queue.remove(&3), Some(3));
    /// assert_eq!(queue.len(), 1);
    /// assert_eq!(queue.remove(&4), None);
    /// ```
    pub fn remove<K: ?Sized>(&mut self, key: &K) -> Option<T>
    where
        E: Lookup<K, T>,
    {
        let position = self.find(key)?;
        trace!(position = position.0, len = self.data.len(), "removing entry by key");
        Some(self.remove_and_rebuild(position.0))
    }

    /// Removes the value at `position`, which the caller has just raised to
    /// strictly the highest priority in the queue, and returns it.
    ///
    /// This is how an element is cancelled after its ordering fields were
    /// changed in place (through a [`Cell`], say): promote it, find it, then
    /// erase it. The remaining values are rebuilt into a heap from scratch.
    ///
    /// If the element does *not* hold the highest priority, the queue is left
    /// structurally intact but the order in which later pops return values is
    /// unspecified. This is not detected.
    ///
    /// # Panics
    ///
    /// Panics if `position` is out of bounds.
    ///
    /// # Examples
    ///
    /// ```
    /// use sequeue::{PriorityQueue, Reverse};
    /// use std::cell::Cell;
    ///
    /// struct Timer {
    ///     id: u32,
    ///     deadline: Cell<u64>,
    /// }
    ///
    /// let mut timers = PriorityQueue::new(
    ///     Reverse(|a: &Timer, b: &Timer| a.deadline.get().cmp(&b.deadline.get())),
    ///     |id: &u32, t: &Timer| t.id == *id,
    /// );
    /// timers.push(Timer { id: 1, deadline: Cell::new(10) });
    /// timers.push(Timer { id: 2, deadline: Cell::new(20) });
    /// timers.push(Timer { id: 3, deadline: Cell::new(30) });
    ///
    /// let position = timers.find(&3).unwrap();
    /// timers.get(position).unwrap().deadline.set(0);
    /// assert_eq!(timers.erase_elevated(position).id, 3);
    ///
    /// assert_eq!(timers.pop().map(|t| t.id), Some(1));
    /// assert_eq!(timers.pop().map(|t| t.id), Some(2));
    /// ```
    ///
    /// [`Cell`]: core::cell::Cell
    pub fn erase_elevated(&mut self, position: Position) -> T {
        let len = self.len();
        if position.0 >= len {
            panic!("position (is {}) should be < len (is {})", position.0, len);
        }
        trace!(position = position.0, len = len, "removing elevated entry");
        self.remove_and_rebuild(position.0)
    }

    /// Returns an iterator that pops values for as long as the top value does
    /// not satisfy `stop`.
    ///
    /// See [`queue_popper`].
    pub fn pop_until<P>(&mut self, stop: P) -> QueuePopper<'_, T, O, E, P>
    where
        P: FnMut(&T) -> bool,
    {
        queue_popper(self, stop)
    }

    fn remove_and_rebuild(&mut self, index: usize) -> T {
        let entry = self.data.swap_remove(index);
        self.rebuild();
        debug_assert!(self.is_heap());
        entry.value
    }

    // The implementations of sift_up and sift_down use unsafe blocks in
    // order to move an element out of the vector (leaving behind a
    // hole), shift along the others and move the removed element back into the
    // vector at the final location of the hole.
    // The `Hole` type is used to represent this, and make sure
    // the hole is filled back at the end of its scope, even on panic.
    // Using a hole reduces the constant factor compared to using swaps,
    // which involves twice as many moves.

    /// # Safety
    ///
    /// The caller must guarantee that `pos < self.len()`.
    unsafe fn sift_up(&mut self, start: usize, pos: usize) -> usize {
        // Take out the value at `pos` and create a hole.
        // SAFETY: The caller guarantees that pos < self.len()
        let mut hole = unsafe { Hole::new(&mut self.data, pos) };

        while hole.pos() > start {
            let parent = (hole.pos() - 1) / 2;

            // SAFETY: hole.pos() > start >= 0, which means hole.pos() > 0
            //  and so hole.pos() - 1 can't underflow.
            //  This guarantees that parent < hole.pos() so
            //  it's a valid index and also != hole.pos().
            if self.order.le(hole.element(), unsafe { hole.get(parent) }) {
                break;
            }

            // SAFETY: Same as above
            unsafe { hole.move_to(parent) };
        }

        hole.pos()
    }

    /// Take an element at `pos` and move it down the heap,
    /// while its children are larger.
    ///
    /// # Safety
    ///
    /// The caller must guarantee that `pos < end <= self.len()`.
    unsafe fn sift_down_range(&mut self, pos: usize, end: usize) {
        // SAFETY: The caller guarantees that pos < end <= self.len().
        let mut hole = unsafe { Hole::new(&mut self.data, pos) };
        let mut child = 2 * hole.pos() + 1;

        // Loop invariant: child == 2 * hole.pos() + 1.
        while child <= end.saturating_sub(2) {
            // compare with the greater of the two children
            // SAFETY: child < end - 1 < self.len() and
            //  child + 1 < end <= self.len(), so they're valid indexes.
            //  child == 2 * hole.pos() + 1 != hole.pos() and
            //  child + 1 == 2 * hole.pos() + 2 != hole.pos().
            child += unsafe { self.order.le(hole.get(child), hole.get(child + 1)) } as usize;

            // if we are already in order, stop.
            // SAFETY: child is now either the old child or the old child+1
            //  We already proven that both are < self.len() and != hole.pos()
            if self.order.ge(hole.element(), unsafe { hole.get(child) }) {
                return;
            }

            // SAFETY: same as above.
            unsafe { hole.move_to(child) };
            child = 2 * hole.pos() + 1;
        }

        // SAFETY: && short circuit, which means that in the
        //  second condition it's already true that child == end - 1 < self.len().
        if child == end - 1 && self.order.lt(hole.element(), unsafe { hole.get(child) }) {
            // SAFETY: child is already proven to be a valid index and
            //  child == 2 * hole.pos() + 1 != hole.pos().
            unsafe { hole.move_to(child) };
        }
    }

    /// # Safety
    ///
    /// The caller must guarantee that `pos < self.len()`.
    unsafe fn sift_down(&mut self, pos: usize) {
        let len = self.len();
        // SAFETY: pos < len is guaranteed by the caller and
        //  obviously len = self.len() <= self.len().
        unsafe { self.sift_down_range(pos, len) };
    }

    fn rebuild(&mut self) {
        let mut n = self.len() / 2;
        while n > 0 {
            n -= 1;
            // SAFETY: n starts from self.len() / 2 and goes down to 0.
            //  The only case when !(n < self.len()) is if
            //  self.len() == 0, but it's ruled out by the loop condition.
            unsafe { self.sift_down(n) };
        }
    }

    /// Whether every parent is ordered not-worse than its children.
    fn is_heap(&self) -> bool {
        (1..self.len()).all(|i| self.order.ge(&self.data[(i - 1) / 2], &self.data[i]))
    }
}

/// Hole represents a hole in a slice i.e., an index without valid value
/// (because it was moved from or duplicated).
/// In drop, `Hole` will restore the slice by filling the hole
/// position with the value that was originally removed.
struct Hole<'a, T: 'a> {
    data: &'a mut [T],
    elt: ManuallyDrop<T>,
    pos: usize,
}

impl<'a, T> Hole<'a, T> {
    /// Create a new `Hole` at index `pos`.
    ///
    /// Unsafe because pos must be within the data slice.
    #[inline]
    unsafe fn new(data: &'a mut [T], pos: usize) -> Self {
        debug_assert!(pos < data.len());
        // SAFE: pos should be inside the slice
        let elt = unsafe { ptr::read(data.get_unchecked(pos)) };
        Hole { data, elt: ManuallyDrop::new(elt), pos }
    }

    #[inline]
    fn pos(&self) -> usize {
        self.pos
    }

    /// Returns a reference to the element removed.
    #[inline]
    fn element(&self) -> &T {
        &self.elt
    }

    /// Returns a reference to the element at `index`.
    ///
    /// Unsafe because index must be within the data slice and not equal to pos.
    #[inline]
    unsafe fn get(&self, index: usize) -> &T {
        debug_assert!(index != self.pos);
        debug_assert!(index < self.data.len());
        unsafe { self.data.get_unchecked(index) }
    }

    /// Move hole to new location
    ///
    /// Unsafe because index must be within the data slice and not equal to pos.
    #[inline]
    unsafe fn move_to(&mut self, index: usize) {
        debug_assert!(index != self.pos);
        debug_assert!(index < self.data.len());
        unsafe {
            let ptr = self.data.as_mut_ptr();
            let index_ptr: *const _ = ptr.add(index);
            let hole_ptr = ptr.add(self.pos);
            ptr::copy_nonoverlapping(index_ptr, hole_ptr, 1);
        }
        self.pos = index;
    }
}

impl<T> Drop for Hole<'_, T> {
    #[inline]
    fn drop(&mut self) {
        // fill the hole again
        unsafe {
            let pos = self.pos;
            ptr::copy_nonoverlapping(&*self.elt, self.data.get_unchecked_mut(pos), 1);
        }
    }
}

/// An iterator over the values of a `PriorityQueue`, in backing array order.
///
/// This `struct` is created by [`PriorityQueue::iter()`]. See its
/// documentation for more.
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Iter<'a, T: 'a> {
    iter: slice::Iter<'a, Entry<T>>,
}

impl<T: fmt::Debug> fmt::Debug for Iter<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Iter { iter: self.iter.clone() }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<&'a T> {
        self.iter.next().map(|entry| &entry.value)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
    #[inline]
    fn next_back(&mut self) -> Option<&'a T> {
        self.iter.next_back().map(|entry| &entry.value)
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {
    fn len(&self) -> usize {
        self.iter.len()
    }
}

impl<T> FusedIterator for Iter<'_, T> {}

/// A draining iterator over the values of a `PriorityQueue`, in backing array
/// order.
///
/// This `struct` is created by [`PriorityQueue::drain()`]. See its
/// documentation for more.
pub struct Drain<'a, T: 'a> {
    iter: vec::Drain<'a, Entry<T>>,
}

impl<T: fmt::Debug> fmt::Debug for Drain<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter.as_slice().iter().map(|entry| &entry.value)).finish()
    }
}

impl<T> Iterator for Drain<'_, T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        self.iter.next().map(|entry| entry.value)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

impl<T> DoubleEndedIterator for Drain<'_, T> {
    #[inline]
    fn next_back(&mut self) -> Option<T> {
        self.iter.next_back().map(|entry| entry.value)
    }
}

impl<T> ExactSizeIterator for Drain<'_, T> {
    fn len(&self) -> usize {
        self.iter.len()
    }
}

impl<T> FusedIterator for Drain<'_, T> {}

impl<'a, T, O, E> IntoIterator for &'a PriorityQueue<T, O, E> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<T, O: TotalOrder<T>, E> Extend<T> for PriorityQueue<T, O, E> {
    #[inline]
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iterator = iter.into_iter();
        let (lower, _) = iterator.size_hint();

        self.reserve(lower);

        iterator.for_each(move |elem| self.push(elem));
    }
}

impl<'a, T: 'a + Copy, O: TotalOrder<T>, E> Extend<&'a T> for PriorityQueue<T, O, E> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().cloned());
    }
}
