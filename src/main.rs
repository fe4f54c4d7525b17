use anyhow::{Context, Result};
use clap::Parser;
use tracing::Level;

use calcpi::bench::{create_progress_bar, run_trials, DEFAULT_REPEAT};
use calcpi::ParallelProcessor;

#[derive(Parser, Debug)]
#[command(name = "calcpi")]
#[command(about = "Estimate pi by parallel midpoint-rule integration", long_about = None)]
struct Args {
    /// Number of integration slices (must be positive)
    #[arg(value_name = "STEPS", allow_negative_numbers = true)]
    steps: i64,

    /// Number of worker threads (defaults to number of CPU cores)
    #[arg(short = 'j', long)]
    threads: Option<usize>,

    /// Number of serial trials to average over
    #[arg(short, long, default_value_t = DEFAULT_REPEAT)]
    repeat: usize,

    /// Disable progress bar
    #[arg(short, long)]
    quiet: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let log_level = if args.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };

    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .init();

    let processor =
        ParallelProcessor::new(args.threads).context("Failed to set up worker threads")?;

    let progress = if !args.quiet {
        Some(create_progress_bar(args.repeat))
    } else {
        None
    };

    let report = run_trials(&processor, args.steps, args.repeat, progress.as_ref())
        .with_context(|| format!("Cannot run benchmark with {} steps", args.steps))?;

    println!("{report}");

    Ok(())
}
