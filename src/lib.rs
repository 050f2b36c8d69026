//! An ordered set backed by an avl tree.
//!
//! All operations take logarithmic time in the number of elements regardless of the order in
//! which values are inserted or removed.

#[macro_use]
extern crate log;

pub mod avl_tree;

pub use crate::avl_tree::BalancedSet;
