//! The root-link API of the order-statistic AVL tree.
//!
//! A tree is just its root [`Link`]; the empty tree is `None`. Operations that may change which
//! node roots the tree consume the old link and return the new one, so callers reassign:
//!
//! ```
//! use osavl_tree::Uncounted;
//! use osavl_tree::raw::{Iter, build_tree, os_delete, os_select};
//!
//! let mut root = build_tree(1, 7, &mut Uncounted);
//! assert_eq!(os_select(root.as_deref(), 4, &mut Uncounted).map(|node| node.key()), Some(4));
//!
//! root = os_delete(root, 4, &mut Uncounted);
//! assert_eq!(Iter::new(root.as_deref()).collect::<Vec<_>>(), [1, 2, 3, 5, 6, 7]);
//! ```

mod iter;
mod node;
mod print;
mod raw_os_tree;
#[cfg(test)]
pub(crate) mod validate;

pub use iter::Iter;
pub use node::{Link, Node, balance_factor, height, rebalance, rotate_left, rotate_right, subtree_size, update_node};
pub use print::{PrettyPrint, pretty_print};
pub use raw_os_tree::{bst_delete, build_tree, delete_tree, inorder_succ, os_delete, os_delete_entry, os_rank, os_select};
