/// A sink for elementary operation counts.
///
/// Tree operations notify a counter once per comparison or field read/write that the
/// complexity analysis treats as unit cost. Counting is a side channel only: every operation
/// returns the same result whichever counter it is given.
///
/// Mutable references to counters are counters too, so a caller can lend one out without
/// giving it up.
///
/// # Examples
///
/// ```
/// use osavl_tree::{Counter, OSTree};
///
/// #[derive(Default)]
/// struct Tally(u64);
///
/// impl Counter for Tally {
///     fn count(&mut self, units: u64) {
///         self.0 += units;
///     }
/// }
///
/// let mut tally = Tally::default();
/// let tree = OSTree::from_range_counted(1, 15, &mut tally);
/// assert!(tally.0 > 0);
/// assert_eq!(tree.select(8), Some(8));
/// ```
pub trait Counter {
    /// Records `units` elementary operations.
    fn count(&mut self, units: u64);
}

impl<C: Counter + ?Sized> Counter for &mut C {
    #[inline]
    fn count(&mut self, units: u64) {
        (**self).count(units);
    }
}

/// A counter that discards every notification.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Uncounted;

impl Counter for Uncounted {
    #[inline]
    fn count(&mut self, _units: u64) {}
}

/// Sums every notification. Shared by the unit tests.
#[cfg(test)]
#[derive(Debug, Default)]
pub(crate) struct Tally(pub(crate) u64);

#[cfg(test)]
impl Counter for Tally {
    fn count(&mut self, units: u64) {
        self.0 += units;
    }
}
