use alloc::boxed::Box;
use core::cmp::max;

use tracing::trace;

use crate::Counter;

/// An owned, possibly empty subtree.
///
/// Each node exclusively owns its children and carries no parent pointer, so operations that
/// can change which node roots a subtree take a link and hand back the new one.
pub type Link = Option<Box<Node>>;

/// A node of an order-statistic AVL tree.
///
/// Besides its key, a node caches the height and size of the subtree it roots. A leaf has
/// height 0 and the empty subtree has height -1.
#[derive(Debug)]
pub struct Node {
    pub(crate) key: i32,
    height: i32,
    // The number of keys in the subtree rooted at this node, itself included.
    size: usize,
    pub(crate) left: Link,
    pub(crate) right: Link,
}

impl Node {
    /// Creates a leaf holding `key`.
    pub(crate) fn leaf(key: i32) -> Box<Self> {
        Box::new(Self {
            key,
            height: 0,
            size: 1,
            left: None,
            right: None,
        })
    }

    /// Returns the key stored in this node.
    #[inline]
    #[must_use]
    pub fn key(&self) -> i32 {
        self.key
    }

    /// Returns the height of the subtree rooted at this node.
    #[inline]
    #[must_use]
    pub fn height(&self) -> i32 {
        self.height
    }

    /// Returns the number of keys in the subtree rooted at this node.
    #[inline]
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns the left subtree.
    #[inline]
    #[must_use]
    pub fn left(&self) -> Option<&Node> {
        self.left.as_deref()
    }

    /// Returns the right subtree.
    #[inline]
    #[must_use]
    pub fn right(&self) -> Option<&Node> {
        self.right.as_deref()
    }

    #[inline]
    pub(crate) fn set_size(&mut self, size: usize) {
        self.size = size;
    }

    /// Recomputes only the height from the children, leaving the size alone.
    #[inline]
    pub(crate) fn update_height(&mut self) {
        self.height = 1 + max(height(self.left()), height(self.right()));
    }
}

/// Returns the height of `node`, or -1 for the empty subtree.
#[inline]
#[must_use]
pub fn height(node: Option<&Node>) -> i32 {
    node.map_or(-1, Node::height)
}

/// Returns the size of `node`, or 0 for the empty subtree.
///
/// The lookup is reported to `counter` as one unit, since it sits on the hot path of every
/// size update.
#[inline]
pub fn subtree_size<C: Counter + ?Sized>(node: Option<&Node>, counter: &mut C) -> usize {
    counter.count(1);
    node.map_or(0, Node::size)
}

/// Returns `height(right) - height(left)` for `node`, or 0 for the empty subtree.
#[inline]
#[must_use]
pub fn balance_factor(node: Option<&Node>) -> i32 {
    node.map_or(0, |node| height(node.right()) - height(node.left()))
}

/// Recomputes the height and size of `node` from its children.
///
/// The children must already be up to date, so after a structural change this is applied
/// bottom-up.
pub fn update_node<C: Counter + ?Sized>(node: &mut Node, counter: &mut C) {
    node.update_height();

    counter.count(1);
    node.size = 1 + subtree_size(node.left(), counter) + subtree_size(node.right(), counter);
}

/// Rotates `root` left, making its right child the new subtree root.
///
/// The right child's left subtree moves under the old root. If `root` has no right child the
/// rotation does nothing and `root` is returned as is.
pub fn rotate_left<C: Counter + ?Sized>(mut root: Box<Node>, counter: &mut C) -> Box<Node> {
    let Some(mut pivot) = root.right.take() else {
        return root;
    };
    trace!(root = root.key, pivot = pivot.key, "rotate left");

    root.right = pivot.left.take();
    update_node(&mut root, counter);

    pivot.left = Some(root);
    update_node(&mut pivot, counter);

    pivot
}

/// Rotates `root` right, making its left child the new subtree root.
///
/// The left child's right subtree moves under the old root. If `root` has no left child the
/// rotation does nothing and `root` is returned as is.
pub fn rotate_right<C: Counter + ?Sized>(mut root: Box<Node>, counter: &mut C) -> Box<Node> {
    let Some(mut pivot) = root.left.take() else {
        return root;
    };
    trace!(root = root.key, pivot = pivot.key, "rotate right");

    root.left = pivot.right.take();
    update_node(&mut root, counter);

    pivot.right = Some(root);
    update_node(&mut pivot, counter);

    pivot
}

/// Restores the AVL balance of `root` after one of its subtrees changed height by one.
///
/// The height and size of `root` are refreshed first. A left-heavy root whose left child leans
/// right gets a left rotation on that child before the main right rotation, and symmetrically
/// for a right-heavy root. Returns the new subtree root.
pub fn rebalance<C: Counter + ?Sized>(mut root: Box<Node>, counter: &mut C) -> Box<Node> {
    update_node(&mut root, counter);

    let bf = balance_factor(Some(&*root));
    if bf < -1 {
        if balance_factor(root.left()) > 0 {
            root.left = root.left.take().map(|left| rotate_left(left, counter));
        }
        root = rotate_right(root, counter);
    } else if bf > 1 {
        if balance_factor(root.right()) < 0 {
            root.right = root.right.take().map(|right| rotate_right(right, counter));
        }
        root = rotate_left(root, counter);
    }

    root
}
