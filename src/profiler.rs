use alloc::collections::BTreeMap;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use crate::Counter;

/// A named operation count taken at one input size.
///
/// An `Operation` is a [`Counter`]: hand it to the `*_counted` tree operations, then give it
/// back to a [`Profiler`] with [`Profiler::record`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Operation {
    series: String,
    n: usize,
    count: u64,
}

impl Operation {
    /// Returns the name of the series this count belongs to.
    #[must_use]
    pub fn series(&self) -> &str {
        &self.series
    }

    /// Returns the input size this count was taken at.
    #[must_use]
    pub fn n(&self) -> usize {
        self.n
    }

    /// Returns the number of elementary operations counted so far.
    #[must_use]
    pub fn total(&self) -> u64 {
        self.count
    }
}

impl Counter for Operation {
    #[inline]
    fn count(&mut self, units: u64) {
        self.count += units;
    }
}

/// Collects operation counts into series indexed by input size.
///
/// Counts recorded for the same series and size accumulate, so repeated runs can be averaged
/// with [`divide_values`](Profiler::divide_values). Series are reported in groups: the
/// `Display` implementation renders every group as a CSV table with one row per input size.
///
/// # Examples
///
/// ```
/// use osavl_tree::{OSTree, Profiler};
///
/// let mut profiler = Profiler::new();
/// for _ in 0..2 {
///     let mut build = profiler.create_operation("build", 100);
///     let _tree = OSTree::from_range_counted(1, 100, &mut build);
///     profiler.record(build);
/// }
/// profiler.divide_values("build", 2);
/// profiler.create_group("Operations", &["build"]);
///
/// assert_eq!(profiler.value("build", 100), Some(300));
/// assert_eq!(profiler.to_string(), "Operations\nn,build\n100,300\n");
/// ```
#[derive(Clone, Debug, Default)]
pub struct Profiler {
    series: BTreeMap<String, BTreeMap<usize, u64>>,
    groups: Vec<(String, Vec<String>)>,
}

impl Profiler {
    /// Creates an empty profiler.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            series: BTreeMap::new(),
            groups: Vec::new(),
        }
    }

    /// Starts a zeroed count for `series` at input size `n`.
    ///
    /// The count is handed back with [`record`](Profiler::record), which keeps the operation
    /// free of any borrow on the profiler while it is being counted into.
    #[must_use]
    #[allow(clippy::unused_self)] // Operations are started through the profiler that records them.
    pub fn create_operation(&self, series: &str, n: usize) -> Operation {
        Operation {
            series: String::from(series),
            n,
            count: 0,
        }
    }

    /// Adds the count of `operation` to its series.
    pub fn record(&mut self, operation: Operation) {
        let Operation { series, n, count } = operation;
        *self.series.entry(series).or_default().entry(n).or_insert(0) += count;
    }

    /// Returns the accumulated count for `series` at input size `n`.
    #[must_use]
    pub fn value(&self, series: &str, n: usize) -> Option<u64> {
        self.series.get(series)?.get(&n).copied()
    }

    /// Divides every value of `series` by `divisor`, rounding down.
    ///
    /// # Panics
    ///
    /// Panics if `divisor` is zero.
    pub fn divide_values(&mut self, series: &str, divisor: u64) {
        assert!(divisor != 0, "`Profiler::divide_values()` - `divisor` is zero!");
        if let Some(values) = self.series.get_mut(series) {
            for value in values.values_mut() {
                *value /= divisor;
            }
        }
    }

    /// Reports `series` side by side under the heading `name`.
    pub fn create_group(&mut self, name: &str, series: &[&str]) {
        let members = series.iter().map(|&s| String::from(s)).collect();
        self.groups.push((String::from(name), members));
    }

    /// Discards every series and group.
    pub fn reset(&mut self) {
        self.series.clear();
        self.groups.clear();
    }
}

impl fmt::Display for Profiler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (name, members) in &self.groups {
            writeln!(f, "{name}")?;
            write!(f, "n")?;
            for member in members {
                write!(f, ",{member}")?;
            }
            writeln!(f)?;

            let mut sizes: Vec<usize> = members
                .iter()
                .filter_map(|member| self.series.get(member))
                .flat_map(BTreeMap::keys)
                .copied()
                .collect();
            sizes.sort_unstable();
            sizes.dedup();

            for n in sizes {
                write!(f, "{n}")?;
                for member in members {
                    match self.value(member, n) {
                        Some(value) => write!(f, ",{value}")?,
                        None => write!(f, ",")?,
                    }
                }
                writeln!(f)?;
            }
        }

        Ok(())
    }
}
