use core::iter::FusedIterator;

use smallvec::SmallVec;

use super::node::Node;

/// An in-order iterator over the keys of a tree.
///
/// This `struct` is created by [`OSTree::iter`](crate::OSTree::iter), or directly from a root
/// with [`Iter::new`]. Keys come out in ascending order.
///
/// # Examples
///
/// ```
/// use osavl_tree::{OSTree, raw::Iter};
///
/// let tree = OSTree::from_range(1, 3);
/// let mut iter = Iter::new(tree.root());
/// assert_eq!(iter.next(), Some(1));
/// assert_eq!(iter.len(), 2);
/// ```
#[must_use = "iterators are lazy and do nothing unless consumed"]
#[derive(Clone, Debug)]
pub struct Iter<'a> {
    // Nodes whose left subtree is exhausted but which have not been yielded yet.
    stack: SmallVec<[&'a Node; 32]>,
    remaining: usize,
}

impl<'a> Iter<'a> {
    /// Creates an iterator over the tree rooted at `root`.
    pub fn new(root: Option<&'a Node>) -> Self {
        let mut iter = Self {
            stack: SmallVec::new(),
            remaining: root.map_or(0, Node::size),
        };
        iter.push_left_spine(root);
        iter
    }

    fn push_left_spine(&mut self, mut node: Option<&'a Node>) {
        while let Some(current) = node {
            self.stack.push(current);
            node = current.left();
        }
    }
}

impl Iterator for Iter<'_> {
    type Item = i32;

    fn next(&mut self) -> Option<i32> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right());
        self.remaining -= 1;
        Some(node.key())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Iter<'_> {
    fn len(&self) -> usize {
        self.remaining
    }
}

impl FusedIterator for Iter<'_> {}
