//! An ordered set of unique values backed by a height-balanced (AVL) binary
//! search tree.
//!
//! [`AvlTree`] stores at most one instance of each value, ordered by the
//! value's [`Ord`] implementation. Every insert and remove rebalances the
//! affected path with at most two rotations per level, keeping the tree
//! height (and with it the cost of every lookup, minimum/maximum read and
//! mutation) logarithmic in the number of stored values.
//!
//! ```
//! use avlset::AvlTree;
//!
//! let mut t = AvlTree::default();
//!
//! for v in [37, 19, 41, 7] {
//!     t.insert(v);
//! }
//!
//! assert!(t.contains(&19));
//! assert_eq!(t.min(), Some(&7));
//! assert_eq!(t.max(), Some(&41));
//!
//! // Values iterate in ascending order.
//! assert_eq!(t.iter().copied().collect::<Vec<_>>(), [7, 19, 37, 41]);
//! ```
//!
//! The node layout is observable through
//! [`iter_breadth_first()`](AvlTree::iter_breadth_first), which walks the
//! tree level by level yielding each node's binary-heap position, value and
//! height, for consumers that render or inspect the tree shape.

#![deny(rustdoc::broken_intra_doc_links, rust_2018_idioms)]
#![warn(
    clippy::clone_on_ref_ptr,
    clippy::dbg_macro,
    clippy::todo,
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs
)]

mod iter;
mod node;
mod tree;

pub use iter::{BreadthFirstIter, OwnedIter};
pub use tree::*;
