use crate::avl_tree::tree::{self, Tree};
use std::cmp;

/// A struct representing an internal node of an avl tree.
///
/// Nodes are only reachable through `BalancedSet::root` and expose no mutable access.
pub struct Node<T> {
    pub(crate) value: T,
    pub(crate) height: i32,
    pub(crate) left: Tree<T>,
    pub(crate) right: Tree<T>,
}

impl<T> Node<T> {
    pub(crate) fn new(value: T) -> Self {
        Node {
            value,
            height: 0,
            left: None,
            right: None,
        }
    }

    pub(crate) fn update(&mut self) {
        self.height = cmp::max(tree::height(&self.left), tree::height(&self.right)) + 1;
    }

    /// Returns the value stored in this node.
    pub fn value(&self) -> &T {
        &self.value
    }

    /// Returns the left child, if any.
    pub fn left(&self) -> Option<&Node<T>> {
        self.left.as_ref().map(|node| &**node)
    }

    /// Returns the right child, if any.
    pub fn right(&self) -> Option<&Node<T>> {
        self.right.as_ref().map(|node| &**node)
    }

    /// Returns the cached height of the subtree rooted at this node. A leaf has height `0`.
    pub fn height(&self) -> i32 {
        self.height
    }

    /// Returns the height of the right subtree minus the height of the left subtree.
    pub fn balance_factor(&self) -> i32 {
        tree::height(&self.right) - tree::height(&self.left)
    }
}
