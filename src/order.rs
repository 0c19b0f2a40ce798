//! Total orders by which a [`PriorityQueue`] ranks its values.
//!
//! [`PriorityQueue`]: crate::PriorityQueue

use core::cmp::Ordering;

/// A total order over `T`, supplied at runtime.
///
/// The queue pops the *greatest* value under this order first: a value `a` for
/// which `cmp(a, b)` returns [`Ordering::Greater`] has higher priority than
/// `b`. Wrap an order in [`Reverse`] to pop the least value first instead.
///
/// Any `Fn(&T, &T) -> Ordering` closure is a total order.
///
/// It is a logic error for the order to be inconsistent, e.g. non-transitive,
/// or to change while values are in a queue. The behavior resulting from such
/// a logic error is not specified, but will be encapsulated to the queue that
/// observed it and not result in undefined behavior.
pub trait TotalOrder<T: ?Sized> {
    /// Compare two values.
    fn cmp(&self, this: &T, that: &T) -> Ordering;

    /// Whether `this` and `that` have equal priority.
    fn eq(&self, this: &T, that: &T) -> bool {
        self.cmp(this, that).is_eq()
    }
    /// Whether `this` and `that` have different priority.
    fn ne(&self, this: &T, that: &T) -> bool {
        self.cmp(this, that).is_ne()
    }

    /// Whether `this` has priority at least that of `that`.
    fn ge(&self, this: &T, that: &T) -> bool {
        self.cmp(this, that).is_ge()
    }
    /// Whether `this` has strictly higher priority than `that`.
    fn gt(&self, this: &T, that: &T) -> bool {
        self.cmp(this, that).is_gt()
    }
    /// Whether `this` has priority at most that of `that`.
    fn le(&self, this: &T, that: &T) -> bool {
        self.cmp(this, that).is_le()
    }
    /// Whether `this` has strictly lower priority than `that`.
    fn lt(&self, this: &T, that: &T) -> bool {
        self.cmp(this, that).is_lt()
    }
}

impl<T: ?Sized, F> TotalOrder<T> for F
where
    F: Fn(&T, &T) -> Ordering,
{
    fn cmp(&self, this: &T, that: &T) -> Ordering {
        self(this, that)
    }
}

/// A zero-sized total order that delegates to the [`Ord`] implementation of
/// the values, so that the greatest value is popped first.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct OrdTotalOrder;

impl<T: ?Sized + Ord> TotalOrder<T> for OrdTotalOrder {
    fn cmp(&self, this: &T, that: &T) -> Ordering {
        this.cmp(that)
    }

    // Delegate to `T`'s own comparison operators rather than going through
    // `Ord::cmp`, in case they are cheaper.
    fn eq(&self, this: &T, that: &T) -> bool {
        this == that
    }
    fn ne(&self, this: &T, that: &T) -> bool {
        this != that
    }

    fn ge(&self, this: &T, that: &T) -> bool {
        this >= that
    }
    fn gt(&self, this: &T, that: &T) -> bool {
        this > that
    }
    fn le(&self, this: &T, that: &T) -> bool {
        this <= that
    }
    fn lt(&self, this: &T, that: &T) -> bool {
        this < that
    }
}

/// Reverses a total order, turning the queue's max-heap into a min-heap.
///
/// ```
/// use sequeue::{OrdTotalOrder, PartialEqLookup, PriorityQueue, Reverse};
///
/// let mut queue = PriorityQueue::new(Reverse(OrdTotalOrder), PartialEqLookup);
/// for x in [5, 1, 3] {
///     queue.push(x);
/// }
///
/// assert_eq!(queue.pop(), Some(1));
/// assert_eq!(queue.pop(), Some(3));
/// assert_eq!(queue.pop(), Some(5));
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Reverse<O>(pub O);

impl<T: ?Sized, O: TotalOrder<T>> TotalOrder<T> for Reverse<O> {
    fn cmp(&self, this: &T, that: &T) -> Ordering {
        self.0.cmp(that, this)
    }
}
