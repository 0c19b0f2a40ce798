use core::fmt;
use core::iter::FusedIterator;

use super::PriorityQueue;
use crate::TotalOrder;

/// An iterator that pops values off a [`PriorityQueue`] until its top value
/// satisfies a stop predicate.
///
/// This `struct` is created by [`queue_popper`] or
/// [`PriorityQueue::pop_until`]. See their documentation for more.
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct QueuePopper<'a, T, O, E, P> {
    queue: &'a mut PriorityQueue<T, O, E>,
    stop: P,
    finished: bool,
}

/// Creates an iterator that pops values off `queue` for as long as the top
/// value does not satisfy `stop`.
///
/// Each call to `next` checks the current top value. If the queue is empty or
/// `stop` returns `true` for it, iteration ends and that value stays in the
/// queue. Once that happens the iterator is exhausted for good, even if `stop`
/// would later answer differently. Otherwise the value is popped and yielded.
/// Consuming the iterator therefore mutates the queue, and whatever is left
/// over once it ends is still there afterwards.
///
/// # Examples
///
/// Firing every timer that is due:
///
/// ```
/// use sequeue::{queue_popper, OrdTotalOrder, PartialEqLookup, PriorityQueue, Reverse};
///
/// let mut deadlines = PriorityQueue::new(Reverse(OrdTotalOrder), PartialEqLookup);
/// for deadline in [40, 10, 30, 20] {
///     deadlines.push(deadline);
/// }
///
/// let now = 25;
/// let fired: Vec<u64> = queue_popper(&mut deadlines, |&deadline| deadline > now).collect();
///
/// assert_eq!(fired, [10, 20]);
/// assert_eq!(deadlines.len(), 2);
/// assert_eq!(deadlines.top(), Some(&30));
/// ```
pub fn queue_popper<T, O, E, P>(
    queue: &mut PriorityQueue<T, O, E>,
    stop: P,
) -> QueuePopper<'_, T, O, E, P>
where
    O: TotalOrder<T>,
    P: FnMut(&T) -> bool,
{
    QueuePopper { queue, stop, finished: false }
}

impl<T: fmt::Debug, O, E, P> fmt::Debug for QueuePopper<'_, T, O, E, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QueuePopper").field("queue", &self.queue).finish_non_exhaustive()
    }
}

impl<T, O, E, P> Iterator for QueuePopper<'_, T, O, E, P>
where
    O: TotalOrder<T>,
    P: FnMut(&T) -> bool,
{
    type Item = T;

    fn next(&mut self) -> Option<T> {
        if self.finished {
            return None;
        }
        let stop = match self.queue.top() {
            Some(top) => (self.stop)(top),
            None => true,
        };
        if stop {
            // once the sequence ends it stays ended, whatever `stop` says later
            self.finished = true;
            return None;
        }
        self.queue.pop()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.finished { (0, Some(0)) } else { (0, Some(self.queue.len())) }
    }
}

impl<T, O, E, P> FusedIterator for QueuePopper<'_, T, O, E, P>
where
    O: TotalOrder<T>,
    P: FnMut(&T) -> bool,
{
}
