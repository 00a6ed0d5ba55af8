//! String-keyed hash maps built directly on a fixed-size array of buckets.
//!
//! Two collision strategies share one interface:
//!
//! - [`OpenAddressingMap`] probes quadratically through a flat array and deletes with tombstones.
//!   It doubles its capacity whenever a `put` finds it at least half full.
//! - [`ChainingMap`] keeps an owned chain of entries per bucket and deletes physically. It only
//!   changes capacity when asked to.
//!
//! Both are driven by a caller-supplied [`HashFunction`]. [`find_mode`] uses a [`ChainingMap`] as a
//! frequency table.
//!
//! ```
//! use bucket_maps::{hash_function_1, OpenAddressingMap};
//!
//! let mut map = OpenAddressingMap::new(20, hash_function_1);
//! map.put("key1", 10);
//! map.resize_table(30);
//! assert_eq!(map.get("key1"), Some(&10));
//! assert_eq!(map.capacity(), 30);
//! ```

mod chain;
mod chaining;
mod error;
mod hash;
mod mode;
mod open_addressing;
mod trace;

#[cfg(feature = "serde")]
mod serde_impls;

pub use chaining::ChainingMap;
pub use error::ResizeError;
pub use hash::{hash_function_1, hash_function_2, HashFunction};
pub use mode::find_mode;
pub use open_addressing::{Iter, OpenAddressingMap};
