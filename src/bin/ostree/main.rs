//! Demonstrates the order-statistic AVL tree and measures its operation counts.

use std::io;
use std::ops::RangeInclusive;

use anyhow::Result;
use clap::{Parser, Subcommand};
use rand::{Rng, SeedableRng};
use rand::rngs::StdRng;
use tracing_subscriber::EnvFilter;

mod demo;
mod perf;

#[derive(Parser)]
#[command(name = "ostree", about = "Order-statistic AVL tree demo and measurements", version)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Seed for the random source; drawn from the OS when absent
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Log debug events to stderr (overridden by RUST_LOG)
    #[arg(long, short, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Build a tree over [1, N], then select and delete random order statistics
    Demo {
        /// Number of keys
        #[arg(default_value_t = 10, value_parser = clap::value_parser!(i32).range(3..))]
        n: i32,
    },
    /// Count elementary operations of build, select, and delete across input sizes
    Perf(perf::Args),
}

fn main() -> Result<()> {
    let Cli { command, seed, verbose } = Cli::parse();

    let default_level = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
        .with_writer(std::io::stderr)
        .init();

    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let mut pick = |range: RangeInclusive<i32>| rng.random_range(range);

    match command {
        Command::Demo { n } => demo::demonstrate(1, n, &mut io::stdout().lock(), &mut pick),
        Command::Perf(args) => perf::run(&args, &mut pick),
    }
}
