//! A priority queue implemented with a binary heap that sorts according to a
//! specified comparator rather than the [`Ord`] trait.
//!
//! Values that compare equal under that comparator are popped in the order in
//! which they were pushed. Stored values can also be looked up and removed by
//! key, which makes the queue a good fit for the pending-events table of a
//! timer or scheduler tick loop.
//!
//! ```
//! use sequeue::{PriorityQueue, Reverse};
//!
//! #[derive(Debug, PartialEq)]
//! struct Timer {
//!     deadline: u64,
//!     id: u32,
//! }
//!
//! // earliest deadline first
//! let by_deadline = Reverse(|a: &Timer, b: &Timer| a.deadline.cmp(&b.deadline));
//! let by_id = |id: &u32, timer: &Timer| timer.id == *id;
//! let mut timers = PriorityQueue::new(by_deadline, by_id);
//!
//! timers.push(Timer { deadline: 30, id: 1 });
//! timers.push(Timer { deadline: 10, id: 2 });
//! timers.push(Timer { deadline: 20, id: 3 });
//!
//! assert!(timers.erase(&3u32));
//!
//! let due: Vec<u32> = timers.pop_until(|t| t.deadline > 15).map(|t| t.id).collect();
//! assert_eq!(due, [2]);
//! assert_eq!(timers.top().map(|t| t.id), Some(1));
//! ```

#![cfg_attr(not(any(feature = "std", test)), no_std)]
// documentation controls
#![cfg_attr(docsrs, feature(doc_auto_cfg, doc_cfg))]
#![deny(missing_docs)]
#![cfg_attr(
    test,
    allow(
        clippy::bool_assert_comparison,
        clippy::needless_range_loop,
        clippy::redundant_clone,
        clippy::useless_vec,
    )
)]

extern crate alloc;

#[macro_use]
mod polyfill;

mod lookup;
mod order;
pub mod priority_queue;

pub use lookup::{Lookup, PartialEqLookup};
pub use order::{OrdTotalOrder, Reverse, TotalOrder};
pub use priority_queue::{queue_popper, Drain, Iter, Position, PriorityQueue, QueuePopper};
