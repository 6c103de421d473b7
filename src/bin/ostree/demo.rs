use std::io::Write;
use std::ops::RangeInclusive;

use anyhow::{Context, Result};
use osavl_tree::OSTree;

const SELECTIONS: usize = 3;
const DELETIONS: i32 = 3;

// Order statistics are drawn as keys of the range, which start at 1.
fn as_index(i: i32) -> usize {
    usize::try_from(i).unwrap_or(0)
}

/// Builds `[l, r]`, selects a few order statistics, then deletes a few, writing each step to
/// `out`. `pick` supplies a uniformly drawn integer from the range it is given.
pub(crate) fn demonstrate<W, P>(l: i32, r: i32, out: &mut W, pick: &mut P) -> Result<()>
where
    W: Write + ?Sized,
    P: FnMut(RangeInclusive<i32>) -> i32,
{
    write_demo(l, r, out, pick).context("writing demo output")
}

fn write_demo<W, P>(l: i32, r: i32, out: &mut W, pick: &mut P) -> std::io::Result<()>
where
    W: Write + ?Sized,
    P: FnMut(RangeInclusive<i32>) -> i32,
{
    let mut tree = OSTree::from_range(l, r);
    write!(out, "{}", tree.pretty())?;

    for _ in 0..SELECTIONS {
        let i = pick(l..=r);
        match tree.select(as_index(i)) {
            Some(key) => writeln!(out, "ith({i}) {key}")?,
            None => writeln!(out, "ith({i}) none")?,
        }
    }

    // Each deletion shrinks the range of valid order statistics by one.
    for shrink in 0..DELETIONS {
        let i = pick(l..=r - shrink);
        if let Some(key) = tree.select(as_index(i)) {
            writeln!(out, "\nsel value: {key}")?;
        }
        tree.delete(as_index(i));
        writeln!(out, "After deleting ith({i}):")?;
        write!(out, "{}", tree.pretty())?;
    }

    writeln!(out)?;
    tree.clear();

    Ok(())
}
