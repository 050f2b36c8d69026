use crate::avl_tree::node::Node;
use crate::avl_tree::tree::{self, Tree};
use crate::avl_tree::{Error, Result};
use std::fmt;
use std::iter::FromIterator;
use std::vec;

/// An ordered set implemented using an avl tree.
///
/// An avl tree is a self-balancing binary search tree that maintains the invariant that the
/// heights of two child subtrees of any node differ by at most one.
///
/// # Examples
/// ```
/// use balanced_set::avl_tree::BalancedSet;
///
/// let mut set = BalancedSet::new();
/// set.insert(0);
/// set.insert(3);
///
/// assert_eq!(set.size(), 2);
///
/// assert_eq!(set.min(), Ok(&0));
/// assert_eq!(set.max(), Ok(&3));
///
/// set.remove(&0);
/// assert_eq!(set.enumerate(), vec![&3]);
/// ```
pub struct BalancedSet<T> {
    root: Tree<T>,
    size: usize,
}

impl<T> BalancedSet<T>
where
    T: Ord,
{
    /// Constructs a new, empty `BalancedSet<T>`.
    ///
    /// # Examples
    /// ```
    /// use balanced_set::avl_tree::BalancedSet;
    ///
    /// let set: BalancedSet<u32> = BalancedSet::new();
    /// ```
    pub fn new() -> Self {
        BalancedSet {
            root: None,
            size: 0,
        }
    }

    /// Inserts a value into the set and returns the number of elements afterwards. If the value
    /// already exists in the set, the set is left unchanged.
    ///
    /// # Examples
    /// ```
    /// use balanced_set::avl_tree::BalancedSet;
    ///
    /// let mut set = BalancedSet::new();
    /// assert_eq!(set.insert(1), 1);
    /// assert_eq!(set.insert(2), 2);
    /// assert_eq!(set.insert(1), 2);
    /// ```
    pub fn insert(&mut self, value: T) -> usize {
        let (root, inserted) = tree::insert(self.root.take(), value);
        self.root = Some(root);
        if inserted {
            self.size += 1;
        }
        self.size
    }

    /// Removes a value from the set. Removing a value that does not exist is a no-op.
    ///
    /// # Examples
    /// ```
    /// use balanced_set::avl_tree::BalancedSet;
    ///
    /// let mut set = BalancedSet::new();
    /// set.insert(1);
    /// set.remove(&1);
    /// assert!(!set.exists(&1));
    /// set.remove(&1);
    /// assert!(set.is_empty());
    /// ```
    pub fn remove(&mut self, value: &T) {
        let (root, removed) = tree::remove(self.root.take(), value);
        self.root = root;
        if removed {
            self.size -= 1;
        }
    }

    /// Checks if a value exists in the set.
    ///
    /// # Examples
    /// ```
    /// use balanced_set::avl_tree::BalancedSet;
    ///
    /// let mut set = BalancedSet::new();
    /// set.insert(1);
    /// assert!(!set.exists(&0));
    /// assert!(set.exists(&1));
    /// ```
    pub fn exists(&self, value: &T) -> bool {
        tree::contains(&self.root, value)
    }

    /// Checks if a value exists in the set. Alias of `exists`.
    pub fn contains(&self, value: &T) -> bool {
        self.exists(value)
    }

    /// Returns the number of elements in the set.
    ///
    /// # Examples
    /// ```
    /// use balanced_set::avl_tree::BalancedSet;
    ///
    /// let mut set = BalancedSet::new();
    /// set.insert(1);
    /// assert_eq!(set.size(), 1);
    /// ```
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns the number of elements in the set. Alias of `size`.
    pub fn len(&self) -> usize {
        self.size
    }

    /// Returns `true` if the set is empty.
    ///
    /// # Examples
    /// ```
    /// use balanced_set::avl_tree::BalancedSet;
    ///
    /// let set: BalancedSet<u32> = BalancedSet::new();
    /// assert!(set.is_empty());
    /// ```
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Clears the set, removing all values.
    ///
    /// # Examples
    /// ```
    /// use balanced_set::avl_tree::BalancedSet;
    ///
    /// let mut set = BalancedSet::new();
    /// set.insert(1);
    /// set.insert(2);
    /// set.clear();
    /// assert_eq!(set.is_empty(), true);
    /// ```
    pub fn clear(&mut self) {
        debug!("clearing set of {} elements", self.size);
        self.root = None;
        self.size = 0;
    }

    /// Returns the minimum value of the set, or `Error::EmptySet` if the set is empty.
    ///
    /// # Examples
    /// ```
    /// use balanced_set::avl_tree::{BalancedSet, Error};
    ///
    /// let mut set = BalancedSet::new();
    /// assert_eq!(set.min(), Err(Error::EmptySet));
    /// set.insert(1);
    /// set.insert(3);
    /// assert_eq!(set.min(), Ok(&1));
    /// ```
    pub fn min(&self) -> Result<&T> {
        tree::min(&self.root).ok_or(Error::EmptySet)
    }

    /// Returns the maximum value of the set, or `Error::EmptySet` if the set is empty.
    ///
    /// # Examples
    /// ```
    /// use balanced_set::avl_tree::{BalancedSet, Error};
    ///
    /// let mut set = BalancedSet::new();
    /// assert_eq!(set.max(), Err(Error::EmptySet));
    /// set.insert(1);
    /// set.insert(3);
    /// assert_eq!(set.max(), Ok(&3));
    /// ```
    pub fn max(&self) -> Result<&T> {
        tree::max(&self.root).ok_or(Error::EmptySet)
    }

    /// Returns the values of the set in ascending order.
    ///
    /// # Examples
    /// ```
    /// use balanced_set::avl_tree::BalancedSet;
    ///
    /// let mut set = BalancedSet::new();
    /// set.insert(3);
    /// set.insert(1);
    /// set.insert(2);
    /// assert_eq!(set.enumerate(), vec![&1, &2, &3]);
    /// ```
    pub fn enumerate(&self) -> Vec<&T> {
        let mut values = Vec::with_capacity(self.size);
        tree::enumerate(&self.root, &mut values);
        values
    }

    /// Consumes the set and returns its values in ascending order.
    pub fn into_sorted_vec(self) -> Vec<T> {
        let mut values = Vec::with_capacity(self.size);
        tree::into_sorted_vec(self.root, &mut values);
        values
    }

    /// Returns the height of the tree. An empty set has height `-1` and a set with one element
    /// has height `0`.
    pub fn height(&self) -> i32 {
        tree::height(&self.root)
    }

    /// Returns the root node of the tree. Intended for validating the structure of the tree.
    ///
    /// # Examples
    /// ```
    /// use balanced_set::avl_tree::BalancedSet;
    ///
    /// let mut set = BalancedSet::new();
    /// set.insert(1);
    /// set.insert(2);
    /// set.insert(3);
    ///
    /// let root = set.root().unwrap();
    /// assert_eq!(root.value(), &2);
    /// assert_eq!(root.height(), 1);
    /// assert_eq!(root.left().map(|node| *node.value()), Some(1));
    /// ```
    pub fn root(&self) -> Option<&Node<T>> {
        self.root.as_ref().map(|node| &**node)
    }
}

impl<T> IntoIterator for BalancedSet<T>
where
    T: Ord,
{
    type Item = T;
    type IntoIter = vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.into_sorted_vec().into_iter()
    }
}

impl<T> FromIterator<T> for BalancedSet<T>
where
    T: Ord,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

impl<T> Extend<T> for BalancedSet<T>
where
    T: Ord,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<T> fmt::Debug for BalancedSet<T>
where
    T: Ord + fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_set().entries(self.enumerate()).finish()
    }
}

impl<T> Default for BalancedSet<T>
where
    T: Ord,
{
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::BalancedSet;
    use crate::avl_tree::Error;

    #[test]
    fn test_size_empty() {
        let set: BalancedSet<u32> = BalancedSet::new();
        assert_eq!(set.size(), 0);
        assert_eq!(set.height(), -1);
    }

    #[test]
    fn test_is_empty() {
        let set: BalancedSet<u32> = BalancedSet::new();
        assert!(set.is_empty());
        assert!(set.root().is_none());
    }

    #[test]
    fn test_min_max_empty() {
        let set: BalancedSet<u32> = BalancedSet::new();
        assert_eq!(set.min(), Err(Error::EmptySet));
        assert_eq!(set.max(), Err(Error::EmptySet));
    }

    #[test]
    fn test_insert() {
        let mut set = BalancedSet::new();
        assert_eq!(set.insert(1), 1);
        assert!(set.exists(&1));
        assert!(set.contains(&1));
    }

    #[test]
    fn test_insert_duplicate() {
        let mut set = BalancedSet::new();
        assert_eq!(set.insert(1), 1);
        assert_eq!(set.insert(1), 1);
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_remove() {
        let mut set = BalancedSet::new();
        set.insert(1);
        set.remove(&1);
        assert!(!set.exists(&1));
        assert_eq!(set.size(), 0);
    }

    #[test]
    fn test_remove_missing() {
        let mut set = BalancedSet::new();
        set.insert(1);
        set.remove(&2);
        assert_eq!(set.size(), 1);
        assert_eq!(set.enumerate(), vec![&1]);
    }

    #[test]
    fn test_min_max() {
        let mut set = BalancedSet::new();
        set.insert(1);
        set.insert(3);
        set.insert(5);

        assert_eq!(set.min(), Ok(&1));
        assert_eq!(set.max(), Ok(&5));
    }

    #[test]
    fn test_clear() {
        let mut set: BalancedSet<u32> = (0..10).collect();
        set.clear();
        assert!(set.is_empty());
        assert_eq!(set.min(), Err(Error::EmptySet));
        assert_eq!(set.insert(4), 1);
    }

    #[test]
    fn test_into_iter() {
        let mut set = BalancedSet::new();
        set.insert(1);
        set.insert(5);
        set.insert(3);

        assert_eq!(set.into_iter().collect::<Vec<u32>>(), vec![1, 3, 5]);
    }

    #[test]
    fn test_enumerate() {
        let mut set = BalancedSet::new();
        set.insert(1);
        set.insert(5);
        set.insert(3);

        assert_eq!(set.enumerate(), vec![&1, &3, &5]);
    }

    #[test]
    fn test_from_iter_dedups() {
        let set: BalancedSet<u32> = vec![4, 2, 4, 1, 2].into_iter().collect();
        assert_eq!(set.size(), 3);
        assert_eq!(set.into_sorted_vec(), vec![1, 2, 4]);
    }

    #[test]
    fn test_debug() {
        let set: BalancedSet<u32> = vec![2, 1, 3].into_iter().collect();
        assert_eq!(format!("{:?}", set), "{1, 2, 3}");
    }

    #[test]
    fn test_error_display() {
        assert_eq!(Error::EmptySet.to_string(), "the set is empty");
    }
}
