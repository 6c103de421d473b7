//! Order-statistic augmented AVL trees for Rust.
//!
//! This crate provides an AVL tree over `i32` keys where every node also tracks the size of
//! its subtree. The size augmentation gives O(log n) order-statistic operations:
//!
//! - [`build_tree`](raw::build_tree) - Build a perfectly balanced tree over a contiguous range
//! - [`os_select`](raw::os_select) - Find the node holding the i-th smallest key
//! - [`os_delete`](raw::os_delete) - Delete the i-th smallest key and rebalance
//!
//! The [`raw`] module exposes these as free functions over a root [`Link`], so every call takes
//! and returns the (possibly new) subtree root. [`OSTree`] wraps a root link behind a safe,
//! owning handle.
//!
//! # Example
//!
//! ```
//! use osavl_tree::{OSTree, Rank};
//!
//! let mut tree = OSTree::from_range(1, 7);
//! assert_eq!(tree.len(), 7);
//!
//! // Order statistics are one-based.
//! assert_eq!(tree.select(4), Some(4));
//! assert_eq!(tree[Rank(1)], 1);
//!
//! // Deleting the 4th smallest key rebalances the tree.
//! assert_eq!(tree.delete(4), Some(4));
//! assert_eq!(tree.iter().collect::<Vec<_>>(), [1, 2, 3, 5, 6, 7]);
//! ```
//!
//! # Instrumentation
//!
//! Every operation has a `*_counted` variant that reports elementary operations (comparisons
//! and field writes) to a [`Counter`]. The uncounted variants pass [`Uncounted`], which
//! discards every notification. A [`Profiler`] collects counts per input size for
//! performance measurement.
//!
//! # Features
//!
//! - **`no_std` compatible** - The library only requires `alloc`
//! - **`cli`** (default) - Builds the `ostree` demo and measurement binary

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
#[cfg(test)]
extern crate std;

mod counter;
mod order_statistic;
mod profiler;

pub mod os_tree;
pub mod raw;

pub use counter::{Counter, Uncounted};
pub use order_statistic::Rank;
pub use os_tree::OSTree;
pub use profiler::{Operation, Profiler};
pub use raw::{Link, Node};
