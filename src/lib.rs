//! # Linked Queue
//!
//! FIFO queues with exclusive node ownership: every element lives in exactly one
//! node, every node belongs to exactly one queue, and teardown releases each node
//! exactly once.
//!
//! This crate provides [`OwnedQueue`] (heap nodes linked in insertion order) and
//! [`HeaplessQueue`] (a fixed-capacity arena of slots linked by compact indices),
//! plus the [`AnyQueue`] trait for writing code that is generic over the backend.
//!
//! ## Key Features
//!
//! * **Ownership transfer on dequeue:** `dequeue` moves the element out to the
//!   caller and frees its node in the same step — no reference into freed memory
//!   can exist, and the caller has nothing to release.
//! * **Absence is not an error:** dequeuing an empty queue yields `None`,
//!   distinguishable from a present-but-default element.
//! * **No implicit copies:** queues move on assignment; duplication is the
//!   explicit deep [`Clone`].
//! * **Order-preserving `map`:** transform every element into a new queue,
//!   front to back, without touching the source.
//! * **Zero-allocation option:** [`HeaplessQueue`] runs entirely in slot arrays
//!   with a free-list, returning the item on overflow instead of allocating.
//!
//! ## Examples
//!
//! ### OwnedQueue
//!
//! ```rust
//! use linked_queue::OwnedQueue;
//!
//! let mut q = OwnedQueue::new();
//! q.enqueue("a".to_string());
//! q.enqueue("b".to_string());
//!
//! let upper = q.map(|s| s.to_uppercase());
//! assert_eq!(upper.into_iter().collect::<Vec<_>>(), ["A", "B"]);
//!
//! // The source queue is untouched.
//! assert_eq!(q.dequeue().as_deref(), Some("a"));
//! assert_eq!(q.dequeue().as_deref(), Some("b"));
//! assert_eq!(q.dequeue(), None);
//! ```
//!
//! ### HeaplessQueue
//!
//! ```rust
//! use linked_queue::HeaplessQueue;
//!
//! let mut q: HeaplessQueue<i32, 4> = HeaplessQueue::new();
//! for i in 0..4 {
//!     assert!(q.try_enqueue(i).is_ok());
//! }
//!
//! // Full: the item is handed back, nothing is lost.
//! assert_eq!(q.try_enqueue(99), Err(99));
//!
//! assert_eq!(q.dequeue(), Some(0));
//! assert!(q.try_enqueue(99).is_ok()); // slot recycled
//! ```
//!
//! ### Backend-generic code
//!
//! ```rust
//! use linked_queue::{AnyQueue, OwnedQueue};
//! use std::collections::VecDeque;
//!
//! fn drain_sum(q: &mut dyn AnyQueue<i32>) -> i32 {
//!     let mut sum = 0;
//!     while let Some(x) = q.dequeue() {
//!         sum += x;
//!     }
//!     sum
//! }
//!
//! let mut owned: OwnedQueue<i32> = (1..=3).collect();
//! let mut std_deque: VecDeque<i32> = (1..=3).collect();
//! assert_eq!(drain_sum(&mut owned), 6);
//! assert_eq!(drain_sum(&mut std_deque), 6);
//! ```

// --- Module Declarations ---

pub mod heapless_queue;
pub mod queue;
mod utils;

// --- Re-exports ---

pub use heapless_queue::HeaplessQueue;
pub use queue::{AnyQueue, OwnedQueue};
pub use utils::index_type::IndexType;
