use std::f64::consts::PI;
use std::fmt;
use std::time::{Duration, Instant};

use indicatif::{ProgressBar, ProgressStyle};
use tracing::info;

use crate::integrator::{estimate_with, validate_steps, IntegrationError, Result};
use crate::parallel::ParallelProcessor;

pub const DEFAULT_REPEAT: usize = 100;

#[derive(Debug, Clone)]
pub struct TrialReport {
    pub num_steps: u64,
    pub num_workers: usize,
    pub repeat: usize,
    pub mean_estimate: f64,
    pub mean_duration: Duration,
}

impl TrialReport {
    pub fn abs_error(&self) -> f64 {
        (self.mean_estimate - PI).abs()
    }
}

impl fmt::Display for TrialReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Running: {} steps across {} worker threads ({} trials)",
            self.num_steps, self.num_workers, self.repeat
        )?;
        writeln!(f, "Calculation of Pi: {:.15}", self.mean_estimate)?;
        writeln!(f, "Absolute error: {:.3e}", self.abs_error())?;
        write!(
            f,
            "Duration: {:.9} seconds",
            self.mean_duration.as_secs_f64()
        )
    }
}

/// Runs the integrator `repeat` times back to back and averages the
/// estimate and wall-clock time per trial.
pub fn run_trials(
    processor: &ParallelProcessor,
    num_steps: i64,
    repeat: usize,
    progress: Option<&ProgressBar>,
) -> Result<TrialReport> {
    let steps = validate_steps(num_steps)?;
    if repeat == 0 {
        return Err(IntegrationError::InvalidArgument(
            "repeat count must be at least 1".to_string(),
        ));
    }

    info!(
        num_steps = steps,
        workers = processor.num_workers(),
        repeat,
        "starting benchmark"
    );

    let start_time = Instant::now();
    let mut total = 0.0;
    for _ in 0..repeat {
        total += estimate_with(processor, num_steps)?;

        if let Some(pb) = progress {
            pb.inc(1);
        }
    }
    let elapsed = start_time.elapsed();

    if let Some(pb) = progress {
        pb.finish_and_clear();
    }

    Ok(TrialReport {
        num_steps: steps,
        num_workers: processor.num_workers(),
        repeat,
        mean_estimate: total / repeat as f64,
        mean_duration: elapsed.div_f64(repeat as f64),
    })
}

pub fn create_progress_bar(repeat: usize) -> ProgressBar {
    let pb = ProgressBar::new(repeat as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} trials ({eta})")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("#>-"),
    );
    pb
}
