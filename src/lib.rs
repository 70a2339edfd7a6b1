//! Order-statistic binary search tree map for Rust.
//!
//! This crate provides [`OrderedMap`], an ordered key-value container backed by an
//! unbalanced binary search tree whose nodes cache the size of their subtree. Besides
//! the usual lookups it answers order-statistic queries:
//!
//! - [`rank`](OrderedMap::rank) - Count the keys strictly less than a given key
//! - [`select_key`](OrderedMap::select_key) - Get the key at a given sorted position
//! - [`floor_key`](OrderedMap::floor_key) / [`ceiling_key`](OrderedMap::ceiling_key) - Nearest keys
//! - Indexing by [`Rank`] - e.g., `map[Rank(0)]` for the value of the smallest key
//!
//! # Example
//!
//! ```
//! use ordered_bst::{OrderedMap, Rank};
//!
//! let mut scores = OrderedMap::new();
//! scores.put("Alice", 100);
//! scores.put("Bob", 85);
//! scores.put("Carol", 92);
//!
//! assert_eq!(scores.get("Bob"), Some(&85));
//! assert_eq!(scores.size(), 3);
//!
//! // Order-statistic operations
//! assert_eq!(scores.select_key(1), Some(&"Bob"));
//! assert_eq!(scores.rank("Carol"), Some(2));
//! assert_eq!(scores.floor_key("Bz"), Some(&"Bob"));
//!
//! // Index by rank
//! assert_eq!(scores[Rank(0)], 100);
//! ```
//!
//! # Features
//!
//! - **`no_std` compatible** - Only requires `alloc` when the default `std` feature is disabled
//! - **Order statistics** - Rank and select in O(depth) via subtree size augmentation
//! - **No recursion** - Every operation walks the tree iteratively, so degenerate trees built
//!   from sorted input cannot overflow the call stack
//!
//! # Implementation
//!
//! Nodes are stored in an arena and linked by handles. The tree is never rebalanced: its
//! shape depends on insertion order, and two-child deletions use Hibbard's method of
//! promoting the in-order successor. Depth is O(log n) for random insertion orders and
//! O(n) in the worst case.

#![no_std]
#![forbid(unsafe_code)]
#![forbid(keyword_idents)]
#![forbid(non_ascii_idents)]
#![forbid(unreachable_pub)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::cargo)]
#![warn(clippy::pedantic)]
// Enable coverage attributes for nightly builds.
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

extern crate alloc;

mod error;
mod order_statistic;
mod raw;

pub mod ordered_map;

pub use error::{Error, Result};
pub use order_statistic::Rank;
pub use ordered_map::OrderedMap;
