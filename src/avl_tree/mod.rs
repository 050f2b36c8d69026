//! Self-balancing binary search tree where the heights of the two child subtrees of any node
//! differ by at most one.

mod node;
mod set;
mod tree;

pub use self::node::Node;
pub use self::set::BalancedSet;

use std::error;
use std::fmt;
use std::result;

/// An enum representing the ways a `BalancedSet` query can fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The query needs at least one element but the set is empty.
    EmptySet,
}

impl error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::EmptySet => write!(f, "the set is empty"),
        }
    }
}

pub type Result<T> = result::Result<T, Error>;
