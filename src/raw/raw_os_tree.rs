use core::cmp::Ordering::{Equal, Greater, Less};

use tracing::debug;

use super::node::{Link, Node, rebalance, subtree_size};
use crate::Counter;

/// Builds a perfectly balanced tree holding every integer in `[l, r]`.
///
/// The midpoint of the range becomes the subtree root and both halves are built recursively,
/// so each key is visited once. Subtree sizes come straight from the range width; heights are
/// filled in as the recursion unwinds. An empty range (`l > r`) yields an empty tree.
pub fn build_tree<C: Counter + ?Sized>(l: i32, r: i32, counter: &mut C) -> Link {
    if l > r {
        return None;
    }

    counter.count(3);
    let (lo, hi) = (i64::from(l), i64::from(r));
    // The midpoint lies within [l, r], so it always fits back into an `i32`.
    #[allow(clippy::cast_possible_truncation)]
    let mid = (lo + hi).div_euclid(2) as i32;
    // Saturates only where the range outgrows the address space, which no allocation could hold.
    let size = usize::try_from(hi - lo + 1).unwrap_or(usize::MAX);

    let mut node = Node::leaf(mid);
    node.set_size(size);
    // Guarded so the bounds never step past `i32::MIN` or `i32::MAX`.
    if mid > l {
        node.left = build_tree(l, mid - 1, counter);
    }
    if mid < r {
        node.right = build_tree(mid + 1, r, counter);
    }
    node.update_height();

    Some(node)
}

/// Returns the node holding the `i`-th smallest key (one-based) under `root`.
///
/// At each node the rank of the node within its own subtree is one more than the size of its
/// left subtree. The search descends left when `i` is smaller and right, with `i` reduced by
/// that rank, when it is larger. An `i` outside `1..=size` runs off the tree and yields `None`.
pub fn os_select<'a, C: Counter + ?Sized>(root: Option<&'a Node>, mut i: usize, counter: &mut C) -> Option<&'a Node> {
    let mut current = root?;

    loop {
        let rank = match current.left() {
            None => {
                counter.count(1);
                1
            }
            Some(left) => {
                counter.count(2);
                left.size() + 1
            }
        };

        current = match i.cmp(&rank) {
            Equal => return Some(current),
            Less => current.left()?,
            Greater => {
                i -= rank;
                current.right()?
            }
        };
    }
}

/// Returns the one-based rank of `key` under `root`, or `None` if it is absent.
pub fn os_rank<C: Counter + ?Sized>(root: Option<&Node>, key: i32, counter: &mut C) -> Option<usize> {
    let mut current = root?;
    let mut skipped = 0;

    loop {
        counter.count(1);
        current = match key.cmp(&current.key()) {
            Equal => return Some(skipped + subtree_size(current.left(), counter) + 1),
            Less => current.left()?,
            Greater => {
                skipped += subtree_size(current.left(), counter) + 1;
                current.right()?
            }
        };
    }
}

/// Returns the in-order successor of `root`: the leftmost node of its right subtree.
///
/// Returns `None` when `root` has no right subtree.
pub fn inorder_succ<'a, C: Counter + ?Sized>(root: &'a Node, counter: &mut C) -> Option<&'a Node> {
    counter.count(2);
    let mut current = root.right()?;
    while let Some(left) = current.left() {
        counter.count(2);
        current = left;
    }

    Some(current)
}

/// Deletes `key` from the tree rooted at `root` and returns the new root.
///
/// A node with at most one child is spliced out. A node with two children takes over its
/// in-order successor's key, and the successor is deleted from the right subtree instead.
/// Every node on the path back up is rebalanced, so the AVL invariant holds on return. A
/// missing key leaves the tree unchanged.
pub fn bst_delete<C: Counter + ?Sized>(root: Link, key: i32, counter: &mut C) -> Link {
    let mut root = root?;

    match key.cmp(&root.key()) {
        Less => {
            counter.count(2);
            root.left = bst_delete(root.left.take(), key, counter);
        }
        Greater => {
            counter.count(2);
            root.right = bst_delete(root.right.take(), key, counter);
        }
        Equal => {
            counter.count(1);
            if root.right.is_none() {
                counter.count(2);
                return root.left.take();
            }

            counter.count(1);
            if root.left.is_none() {
                counter.count(2);
                return root.right.take();
            }

            counter.count(3);
            if let Some(successor) = inorder_succ(&root, counter).map(Node::key) {
                root.key = successor;
                root.right = bst_delete(root.right.take(), successor, counter);
            }
        }
    }

    Some(rebalance(root, counter))
}

/// Deletes the `i`-th smallest key (one-based) and returns the new root along with the removed
/// key. An out-of-range `i` leaves the tree unchanged and removes nothing.
pub fn os_delete_entry<C: Counter + ?Sized>(root: Link, i: usize, counter: &mut C) -> (Link, Option<i32>) {
    counter.count(1);
    let Some(key) = os_select(root.as_deref(), i, counter).map(Node::key) else {
        debug!(i, "order statistic out of range, nothing deleted");
        return (root, None);
    };

    debug!(i, key, "deleting order statistic");
    (bst_delete(root, key, counter), Some(key))
}

/// Deletes the `i`-th smallest key (one-based) and returns the new root.
///
/// An out-of-range `i` leaves the tree unchanged.
pub fn os_delete<C: Counter + ?Sized>(root: Link, i: usize, counter: &mut C) -> Link {
    os_delete_entry(root, i, counter).0
}

/// Destroys the whole tree, children before parents, and leaves `root` empty.
///
/// Calling this on an empty tree does nothing.
pub fn delete_tree(root: &mut Link) {
    if let Some(mut node) = root.take() {
        delete_tree(&mut node.left);
        delete_tree(&mut node.right);
    }
}
