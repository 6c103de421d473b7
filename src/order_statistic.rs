/// A one-based position into the sorted order of a tree.
///
/// `Rank(1)` is the smallest key. This matches the order-statistic convention used by
/// [`os_select`](crate::raw::os_select) and [`os_delete`](crate::raw::os_delete).
///
/// # Examples
///
/// ```
/// use osavl_tree::{OSTree, Rank};
///
/// let tree = OSTree::from_range(10, 12);
///
/// assert_eq!(tree[Rank(1)], 10);
/// assert_eq!(tree[Rank(3)], 12);
/// ```
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Rank(pub usize);
