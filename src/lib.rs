//! An ordered map on an unbalanced binary search tree, with a caller-chosen
//! comparator and a built-in cursor.
//!
//! [`OrderedMap`] stores one key/value pair per node. Insertion walks down
//! from the root and links the new node where the walk falls off the tree;
//! nothing is ever rotated, so the tree's shape is exactly what the insertion
//! order makes of it. Removal uses the classic three cases: a leaf is
//! detached, a node with one child is replaced by that child, and a node with
//! two children takes over its in-order successor's pair while the
//! successor's node is removed instead.
//!
//! Besides the usual `BTreeMap`-style methods, the map carries a cursor on a
//! "current" node that [`search`](OrderedMap::search),
//! [`upper_bound`](OrderedMap::upper_bound), [`first`](OrderedMap::first) and
//! [`next`](OrderedMap::next) move, so a caller can walk the map in key order
//! without holding an iterator borrow.
//!
//! # Example
//!
//! ```
//! use bst_map::OrderedMap;
//!
//! let mut map = OrderedMap::new();
//! for key in [5, 3, 8, 1, 4, 7, 9] {
//!     map.insert(key, key.to_string());
//! }
//!
//! // Removing a node with two children.
//! map.erase(&5);
//!
//! let mut keys = Vec::new();
//! let mut entry = map.first();
//! while let Some((key, _)) = entry {
//!     keys.push(*key);
//!     entry = map.next();
//! }
//! assert_eq!(keys, [1, 3, 4, 7, 8, 9]);
//! ```
//!
//! # Comparators
//!
//! Ordering is injected as a [`Compare`](ordering::Compare) implementation:
//! the key's own [`Ord`] (the default), a closure returning
//! [`Ordering`](core::cmp::Ordering), or a strict less-than predicate wrapped
//! in [`LessThan`].
//!
//! # Implementation
//!
//! Nodes live in an arena and refer to their parent and children by handle,
//! so there is no unsafe code and no reference cycle. Freed slots are reused,
//! and the cursor is cleared whenever the node under it is freed.

#![no_std]
#![forbid(unsafe_code)]
#![forbid(keyword_idents)]
#![forbid(non_ascii_idents)]
#![forbid(unreachable_pub)]
#![warn(clippy::all)]
#![warn(clippy::cargo)]
#![warn(clippy::pedantic)]
// Enable coverage attributes for nightly builds.
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

extern crate alloc;

mod raw;

pub mod ordered_map;
pub mod ordering;

pub use ordered_map::OrderedMap;
pub use ordering::LessThan;
