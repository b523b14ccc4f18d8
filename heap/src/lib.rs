//! Array-backed d-ary max-heap.
//!
//! Each node has up to `d` children, where `d` (the branching factor) is picked
//! at construction and never changes. Elements live in a single `Vec`, index 0
//! is the root, and the children of node `i` are `d*i+1 ..= d*i+d`.
//!
//! | Operation | Complexity      |
//! |-----------|-----------------|
//! | `insert`  | O(log_d n)      |
//! | `pop_max` | O(d · log_d n)  |
//! | `peek`    | O(1)            |
//!
//! # Example
//!
//! ```rust
//! use dary_max_heap::{DWayHeap, HeapError};
//!
//! let mut heap = DWayHeap::new(4)?;
//! for v in [10, 20, 30, 40, 50] {
//!     heap.insert(v);
//! }
//! assert_eq!(heap.pop_max(), Ok(50));
//! assert_eq!(heap.pop_max(), Ok(40));
//! assert_eq!(heap.len(), 3);
//! # Ok::<(), HeapError>(())
//! ```
//!
//! The heap does no locking of its own. Share it across threads behind a
//! mutex of your choosing.

mod d_way_heap;
mod error;

pub use d_way_heap::DWayHeap;
pub use error::HeapError;
