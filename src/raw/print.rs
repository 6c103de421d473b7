use core::fmt;

use super::node::{Node, balance_factor};

const SPACES_PER_DEPTH: usize = 3;

/// Writes a pre-order dump of the tree rooted at `root`, one node per line.
///
/// Each line is indented by three spaces per level below `depth` and shows the key, balance
/// factor, height, and size of the node: `4 (b: 0, h: 2, s: 7)`. Nothing is written for an
/// empty tree.
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn pretty_print<W: fmt::Write + ?Sized>(out: &mut W, root: Option<&Node>, depth: usize) -> fmt::Result {
    let Some(node) = root else {
        return Ok(());
    };

    writeln!(
        out,
        "{:indent$}{} (b: {}, h: {}, s: {})",
        "",
        node.key(),
        balance_factor(Some(node)),
        node.height(),
        node.size(),
        indent = depth * SPACES_PER_DEPTH
    )?;
    pretty_print(out, node.left(), depth + 1)?;
    pretty_print(out, node.right(), depth + 1)
}

/// Displays a tree with [`pretty_print`].
///
/// This `struct` is created by [`OSTree::pretty`](crate::OSTree::pretty).
#[derive(Clone, Copy, Debug)]
pub struct PrettyPrint<'a>(pub Option<&'a Node>);

impl fmt::Display for PrettyPrint<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        pretty_print(f, self.0, 0)
    }
}
