use core::ops::Index;

use super::OSTree;
use crate::raw::{self, Node};
use crate::{Counter, Rank, Uncounted};

impl OSTree {
    /// Returns the `i`-th smallest key, counting from 1.
    ///
    /// Returns `None` if `i` is 0 or larger than the number of keys.
    ///
    /// # Complexity
    ///
    /// O(log n)
    ///
    /// # Examples
    ///
    /// ```
    /// use osavl_tree::OSTree;
    ///
    /// let tree = OSTree::from_range(10, 20);
    /// assert_eq!(tree.select(1), Some(10));
    /// assert_eq!(tree.select(11), Some(20));
    /// assert_eq!(tree.select(12), None);
    /// ```
    #[must_use]
    pub fn select(&self, i: usize) -> Option<i32> {
        self.select_counted(i, &mut Uncounted)
    }

    /// Like [`select`](OSTree::select), reporting elementary operations to `counter`.
    #[must_use]
    pub fn select_counted<C: Counter + ?Sized>(&self, i: usize, counter: &mut C) -> Option<i32> {
        raw::os_select(self.root(), i, counter).map(Node::key)
    }

    /// Deletes the `i`-th smallest key, counting from 1, and returns it.
    ///
    /// An out-of-range `i` leaves the tree unchanged and returns `None`.
    ///
    /// # Complexity
    ///
    /// O(log n)
    ///
    /// # Examples
    ///
    /// ```
    /// use osavl_tree::OSTree;
    ///
    /// let mut tree = OSTree::from_range(1, 7);
    /// assert_eq!(tree.delete(4), Some(4));
    /// assert_eq!(tree.delete(4), Some(5));
    /// assert_eq!(tree.delete(6), None);
    /// assert_eq!(tree.len(), 5);
    /// ```
    pub fn delete(&mut self, i: usize) -> Option<i32> {
        self.delete_counted(i, &mut Uncounted)
    }

    /// Like [`delete`](OSTree::delete), reporting elementary operations to `counter`.
    pub fn delete_counted<C: Counter + ?Sized>(&mut self, i: usize, counter: &mut C) -> Option<i32> {
        let (root, removed) = raw::os_delete_entry(self.root.take(), i, counter);
        self.root = root;
        removed
    }

    /// Returns the rank of `key` counting from 1, or `None` if the key is absent.
    ///
    /// This is the inverse of [`select`](OSTree::select).
    ///
    /// # Complexity
    ///
    /// O(log n)
    ///
    /// # Examples
    ///
    /// ```
    /// use osavl_tree::OSTree;
    ///
    /// let tree = OSTree::from_range(10, 20);
    /// assert_eq!(tree.rank_of(15), Some(6));
    /// assert_eq!(tree.rank_of(21), None);
    /// ```
    #[must_use]
    pub fn rank_of(&self, key: i32) -> Option<usize> {
        raw::os_rank(self.root(), key, &mut Uncounted)
    }
}

/// Indexes into the tree by rank.
///
/// # Panics
///
/// Panics if `rank` is out of bounds.
///
/// # Examples
///
/// ```
/// use osavl_tree::{OSTree, Rank};
///
/// let tree = OSTree::from_range(5, 9);
/// assert_eq!(tree[Rank(2)], 6);
/// ```
impl Index<Rank> for OSTree {
    type Output = i32;

    fn index(&self, rank: Rank) -> &Self::Output {
        raw::os_select(self.root(), rank.0, &mut Uncounted)
            .map(|node| &node.key)
            .expect("index out of bounds")
    }
}
