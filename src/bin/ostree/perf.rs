use std::fs;
use std::io::{self, Write};
use std::ops::RangeInclusive;
use std::path::PathBuf;

use anyhow::{Context, Result, ensure};
use osavl_tree::{OSTree, Profiler};
use tracing::info;

const BUILD: &str = "osB";
const SELECT: &str = "osS";
const DELETE: &str = "osD";

#[derive(clap::Args)]
pub(crate) struct Args {
    /// Repetitions averaged per input size
    #[arg(long, default_value_t = 5)]
    runs: u64,

    /// Smallest input size and the increment between sizes
    #[arg(long, default_value_t = 100)]
    step: usize,

    /// Largest input size
    #[arg(long, default_value_t = 10_000)]
    max: usize,

    /// Write the CSV report here instead of stdout
    #[arg(long)]
    out: Option<PathBuf>,
}

/// Measures every input size and writes the averaged CSV report.
pub(crate) fn run<P>(args: &Args, pick: &mut P) -> Result<()>
where
    P: FnMut(RangeInclusive<i32>) -> i32,
{
    let profiler = profile(args, pick)?;

    match &args.out {
        Some(path) => fs::write(path, profiler.to_string()).with_context(|| format!("writing {}", path.display())),
        None => write_report(&profiler, &mut io::stdout().lock()),
    }
}

fn write_report<W: Write + ?Sized>(profiler: &Profiler, out: &mut W) -> Result<()> {
    write!(out, "{profiler}").context("writing report to stdout")?;
    out.flush().context("writing report to stdout")
}

/// Builds `[1, n]` for every input size, then drains it by random order statistic, counting
/// the build, every select, and every delete into separate series averaged over the runs.
fn profile<P>(args: &Args, pick: &mut P) -> Result<Profiler>
where
    P: FnMut(RangeInclusive<i32>) -> i32,
{
    ensure!(args.runs > 0, "--runs must be positive");
    ensure!(args.step > 0, "--step must be positive");
    i32::try_from(args.max).context("--max does not fit an i32 key")?;

    let mut profiler = Profiler::new();
    for run in 0..args.runs {
        info!(run, "measuring");
        for n in (args.step..=args.max).step_by(args.step) {
            measure(&mut profiler, n, pick);
        }
    }

    for series in [BUILD, SELECT, DELETE] {
        profiler.divide_values(series, args.runs);
    }
    profiler.create_group("Operations", &[BUILD, SELECT, DELETE]);

    Ok(profiler)
}

fn measure<P>(profiler: &mut Profiler, n: usize, pick: &mut P)
where
    P: FnMut(RangeInclusive<i32>) -> i32,
{
    let mut build = profiler.create_operation(BUILD, n);
    let mut select = profiler.create_operation(SELECT, n);
    let mut delete = profiler.create_operation(DELETE, n);

    // `n` never exceeds `--max`, which was checked to fit an i32.
    let top = i32::try_from(n).unwrap_or(i32::MAX);
    let mut tree = OSTree::from_range_counted(1, top, &mut build);

    for j in (1..=top).rev() {
        let i = usize::try_from(pick(1..=j)).unwrap_or(1);
        let _ = tree.select_counted(i, &mut select);
        tree.delete_counted(i, &mut delete);
    }
    debug_assert!(tree.is_empty());

    profiler.record(build);
    profiler.record(select);
    profiler.record(delete);
}
