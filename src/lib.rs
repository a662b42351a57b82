//! Ordered collections backed by an AVL tree.
//!
//! An AVL tree is a self-balancing binary search tree where the heights of the two child subtrees
//! of any node differ by at most one, so lookups, insertions and removals all run in logarithmic
//! time.
//!
//! # Examples
//! ```
//! use avl_collections::avl_tree::AvlSet;
//!
//! let mut set = AvlSet::new();
//! for key in &[5, 3, 7, 2, 1, 6, 8] {
//!     set.insert(*key).unwrap();
//! }
//!
//! assert_eq!(set.in_order(), vec![1, 2, 3, 5, 6, 7, 8]);
//! assert_eq!(set.height(), 2);
//! ```

#[macro_use]
extern crate log;

mod entry;
mod error;
pub mod avl_tree;

pub use crate::error::{Error, Result};
