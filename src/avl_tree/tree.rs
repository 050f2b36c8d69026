use crate::avl_tree::node::Node;
use std::cmp::Ordering;

pub type Tree<T> = Option<Box<Node<T>>>;

pub const EMPTY_HEIGHT: i32 = -1;

pub fn height<T>(tree: &Tree<T>) -> i32 {
    match tree {
        None => EMPTY_HEIGHT,
        Some(ref node) => node.height,
    }
}

fn rotate_left<T>(mut node: Box<Node<T>>) -> Box<Node<T>> {
    trace!("rotating left at node of height {}", node.height);
    let mut child = match node.right.take() {
        Some(child) => child,
        None => unreachable!(),
    };
    node.right = child.left.take();
    node.update();
    child.left = Some(node);
    child.update();
    child
}

fn rotate_right<T>(mut node: Box<Node<T>>) -> Box<Node<T>> {
    trace!("rotating right at node of height {}", node.height);
    let mut child = match node.left.take() {
        Some(child) => child,
        None => unreachable!(),
    };
    node.left = child.right.take();
    node.update();
    child.right = Some(node);
    child.update();
    child
}

// precondition: the heights of `node`'s children are correct and differ by at most two
fn rebalance<T>(mut node: Box<Node<T>>) -> Box<Node<T>> {
    if node.balance_factor() > 1 {
        if let Some(child) = node.right.take() {
            if child.balance_factor() < 0 {
                node.right = Some(rotate_right(child));
            } else {
                node.right = Some(child);
            }
        }
        rotate_left(node)
    } else if node.balance_factor() < -1 {
        if let Some(child) = node.left.take() {
            if child.balance_factor() > 0 {
                node.left = Some(rotate_left(child));
            } else {
                node.left = Some(child);
            }
        }
        rotate_right(node)
    } else {
        node
    }
}

// Detaches the minimum node of the subtree, returning the remaining subtree and the minimum value.
fn remove_min<T>(mut node: Box<Node<T>>) -> (Tree<T>, T) {
    match node.left.take() {
        Some(left) => {
            let (left, min) = remove_min(left);
            node.left = left;
            node.update();
            (Some(rebalance(node)), min)
        },
        None => {
            let Node { value, right, .. } = *node;
            (right, value)
        },
    }
}

/// Inserts `value` into `tree` and returns the new root of the subtree along with whether the
/// value was absent before. A value that is already present is dropped and the tree is returned
/// unchanged.
pub fn insert<T>(tree: Tree<T>, value: T) -> (Box<Node<T>>, bool)
where
    T: Ord,
{
    let mut node = match tree {
        Some(node) => node,
        None => return (Box::new(Node::new(value)), true),
    };

    let inserted = match value.cmp(&node.value) {
        Ordering::Less => {
            let (child, inserted) = insert(node.left.take(), value);
            node.left = Some(child);
            inserted
        },
        Ordering::Greater => {
            let (child, inserted) = insert(node.right.take(), value);
            node.right = Some(child);
            inserted
        },
        Ordering::Equal => return (node, false),
    };

    node.update();
    (rebalance(node), inserted)
}

/// Removes `value` from `tree` and returns the new root of the subtree along with whether the
/// value was present.
///
/// A node with two children is not unlinked. It takes over the value of its in-order successor,
/// which is detached from the right subtree instead.
pub fn remove<T>(tree: Tree<T>, value: &T) -> (Tree<T>, bool)
where
    T: Ord,
{
    let mut node = match tree {
        Some(node) => node,
        None => return (None, false),
    };

    let removed = match value.cmp(&node.value) {
        Ordering::Less => {
            let (child, removed) = remove(node.left.take(), value);
            node.left = child;
            removed
        },
        Ordering::Greater => {
            let (child, removed) = remove(node.right.take(), value);
            node.right = child;
            removed
        },
        Ordering::Equal => match (node.left.take(), node.right.take()) {
            (None, child) | (child, None) => return (child, true),
            (left, Some(right)) => {
                debug!("replacing node of height {} with its successor", node.height);
                let (right, successor) = remove_min(right);
                node.value = successor;
                node.left = left;
                node.right = right;
                true
            },
        },
    };

    node.update();
    (Some(rebalance(node)), removed)
}

pub fn contains<T>(tree: &Tree<T>, value: &T) -> bool
where
    T: Ord,
{
    match tree {
        None => false,
        Some(ref node) => match value.cmp(&node.value) {
            Ordering::Less => contains(&node.left, value),
            Ordering::Greater => contains(&node.right, value),
            Ordering::Equal => true,
        },
    }
}

pub fn min<T>(tree: &Tree<T>) -> Option<&T> {
    tree.as_ref().map(|node| {
        let mut curr = node;
        while let Some(ref left_node) = curr.left {
            curr = left_node;
        }
        &curr.value
    })
}

pub fn max<T>(tree: &Tree<T>) -> Option<&T> {
    tree.as_ref().map(|node| {
        let mut curr = node;
        while let Some(ref right_node) = curr.right {
            curr = right_node;
        }
        &curr.value
    })
}

pub fn enumerate<'a, T>(tree: &'a Tree<T>, values: &mut Vec<&'a T>) {
    if let Some(ref node) = tree {
        enumerate(&node.left, values);
        values.push(&node.value);
        enumerate(&node.right, values);
    }
}

pub fn into_sorted_vec<T>(tree: Tree<T>, values: &mut Vec<T>) {
    if let Some(node) = tree {
        let Node { value, left, right, .. } = *node;
        into_sorted_vec(left, values);
        values.push(value);
        into_sorted_vec(right, values);
    }
}
