use core::fmt;
use core::ops::RangeInclusive;

use tracing::debug;

use crate::raw::{self, Iter, Link, Node, PrettyPrint};
use crate::{Counter, Uncounted};

mod order_statistic;

/// An order-statistic AVL tree over `i32` keys.
///
/// `OSTree` owns the root [`Link`] of a tree and keeps it up to date as operations replace the
/// root. It holds no other state, so its length and height are read straight off the root.
///
/// Trees are built from a contiguous range with [`from_range`](OSTree::from_range), which
/// produces a perfectly balanced tree in linear time. Keys leave the tree through
/// [`delete`](OSTree::delete) (by order statistic) or [`remove`](OSTree::remove) (by key), and
/// both rebalance on the way back up.
///
/// # Examples
///
/// ```
/// use osavl_tree::OSTree;
///
/// let mut tree = OSTree::from_range(1, 10);
///
/// // Drain the tree from the smallest key up.
/// let mut removed = Vec::new();
/// while let Some(key) = tree.delete(1) {
///     removed.push(key);
/// }
///
/// assert_eq!(removed, (1..=10).collect::<Vec<_>>());
/// assert!(tree.is_empty());
/// ```
#[derive(Default)]
pub struct OSTree {
    root: Link,
}

impl OSTree {
    /// Makes a new, empty `OSTree`.
    ///
    /// # Examples
    ///
    /// ```
    /// use osavl_tree::OSTree;
    ///
    /// let tree = OSTree::new();
    /// assert!(tree.is_empty());
    /// assert_eq!(tree.height(), -1);
    /// ```
    #[must_use]
    pub const fn new() -> Self {
        Self { root: None }
    }

    /// Builds a balanced tree holding every key in `[l, r]`.
    ///
    /// An empty range (`l > r`) gives an empty tree.
    ///
    /// # Complexity
    ///
    /// O(n)
    ///
    /// # Examples
    ///
    /// ```
    /// use osavl_tree::OSTree;
    ///
    /// let tree = OSTree::from_range(1, 7);
    /// assert_eq!(tree.len(), 7);
    /// assert_eq!(tree.height(), 2);
    /// ```
    #[must_use]
    pub fn from_range(l: i32, r: i32) -> Self {
        Self::from_range_counted(l, r, &mut Uncounted)
    }

    /// Like [`from_range`](OSTree::from_range), reporting elementary operations to `counter`.
    #[must_use]
    pub fn from_range_counted<C: Counter + ?Sized>(l: i32, r: i32, counter: &mut C) -> Self {
        debug!(l, r, "building tree");
        Self {
            root: raw::build_tree(l, r, counter),
        }
    }

    /// Returns the number of keys in the tree.
    #[must_use]
    pub fn len(&self) -> usize {
        self.root().map_or(0, Node::size)
    }

    /// Returns `true` if the tree holds no keys.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Returns the height of the tree: 0 for a single key, -1 when empty.
    #[must_use]
    pub fn height(&self) -> i32 {
        raw::height(self.root())
    }

    /// Returns the root node, if any.
    #[must_use]
    pub fn root(&self) -> Option<&Node> {
        self.root.as_deref()
    }

    /// Returns `true` if `key` is in the tree.
    ///
    /// # Complexity
    ///
    /// O(log n)
    #[must_use]
    pub fn contains(&self, key: i32) -> bool {
        self.rank_of(key).is_some()
    }

    /// Removes `key` from the tree. Returns whether the key was present.
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
    /// let mut tree = OSTree::from_range(1, 5);
    /// assert!(tree.remove(3));
    /// assert!(!tree.remove(3));
    /// assert_eq!(tree.iter().collect::<Vec<_>>(), [1, 2, 4, 5]);
    /// ```
    pub fn remove(&mut self, key: i32) -> bool {
        if !self.contains(key) {
            return false;
        }

        debug!(key, "removing key");
        self.root = raw::bst_delete(self.root.take(), key, &mut Uncounted);
        true
    }

    /// Destroys every node, leaving the tree empty.
    pub fn clear(&mut self) {
        raw::delete_tree(&mut self.root);
    }

    /// Gets an iterator over the keys of the tree, in ascending order.
    ///
    /// # Examples
    ///
    /// ```
    /// use osavl_tree::OSTree;
    ///
    /// let tree = OSTree::from_range(-1, 1);
    /// assert_eq!(tree.iter().collect::<Vec<_>>(), [-1, 0, 1]);
    /// ```
    pub fn iter(&self) -> Iter<'_> {
        Iter::new(self.root())
    }

    /// Returns a value that displays the tree one node per line, in pre-order.
    ///
    /// See [`pretty_print`](raw::pretty_print) for the format.
    ///
    /// # Examples
    ///
    /// ```
    /// use osavl_tree::OSTree;
    ///
    /// let tree = OSTree::from_range(1, 2);
    /// assert_eq!(tree.pretty().to_string(), "1 (b: 1, h: 1, s: 2)\n   2 (b: 0, h: 0, s: 1)\n");
    /// ```
    pub fn pretty(&self) -> PrettyPrint<'_> {
        PrettyPrint(self.root())
    }

    /// Consumes the tree and returns its root link.
    #[must_use]
    pub fn into_root(self) -> Link {
        self.root
    }
}

impl From<Link> for OSTree {
    fn from(root: Link) -> Self {
        Self { root }
    }
}

impl From<RangeInclusive<i32>> for OSTree {
    /// Builds a balanced tree over the range.
    ///
    /// ```
    /// use osavl_tree::OSTree;
    ///
    /// let tree = OSTree::from(3..=5);
    /// assert_eq!(tree.iter().collect::<Vec<_>>(), [3, 4, 5]);
    /// ```
    fn from(range: RangeInclusive<i32>) -> Self {
        Self::from_range(*range.start(), *range.end())
    }
}

impl<'a> IntoIterator for &'a OSTree {
    type Item = i32;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Iter<'a> {
        self.iter()
    }
}

impl fmt::Debug for OSTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}
