/// Matches a search key of type `K` against a value stored in a
/// [`PriorityQueue`].
///
/// Used by [`find`] and [`erase`]. It is independent of the queue's
/// [`TotalOrder`]: a timer queue ordered by deadline is typically searched by
/// timer id.
///
/// Any `Fn(&K, &T) -> bool` closure is a lookup.
///
/// [`PriorityQueue`]: crate::PriorityQueue
/// [`TotalOrder`]: crate::TotalOrder
/// [`find`]: crate::PriorityQueue::find
/// [`erase`]: crate::PriorityQueue::erase
pub trait Lookup<K: ?Sized, T: ?Sized> {
    /// Whether `value` is identified by `key`.
    fn matches(&self, key: &K, value: &T) -> bool;
}

impl<K: ?Sized, T: ?Sized, F> Lookup<K, T> for F
where
    F: Fn(&K, &T) -> bool,
{
    fn matches(&self, key: &K, value: &T) -> bool {
        self(key, value)
    }
}

/// A zero-sized lookup that delegates to the values' [`PartialEq`]
/// implementation against the key type.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PartialEqLookup;

impl<K: ?Sized, T: ?Sized + PartialEq<K>> Lookup<K, T> for PartialEqLookup {
    fn matches(&self, key: &K, value: &T) -> bool {
        value == key
    }
}
