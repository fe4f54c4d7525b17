use thiserror::Error;
use tracing::debug;

use crate::parallel::ParallelProcessor;

#[derive(Error, Debug)]
pub enum IntegrationError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Failed to build worker pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

pub type Result<T> = std::result::Result<T, IntegrationError>;

/// Integrand whose integral over [0, 1] is exactly π.
#[inline]
pub fn integrand(x: f64) -> f64 {
    4.0 / (1.0 + x * x)
}

/// Checks the step count and converts it to the unsigned index bound.
pub fn validate_steps(num_steps: i64) -> Result<u64> {
    u64::try_from(num_steps)
        .ok()
        .filter(|&n| n > 0)
        .ok_or_else(|| {
            IntegrationError::InvalidArgument(format!(
                "step count must be a positive integer, got {num_steps}"
            ))
        })
}

/// Midpoint-rule estimate of π with `num_steps` slices, on all hardware threads.
pub fn estimate(num_steps: i64) -> Result<f64> {
    let steps = validate_steps(num_steps)?;
    let processor = ParallelProcessor::new(None)?;
    Ok(integrate(&processor, steps))
}

/// Same as [`estimate`], but on the workers owned by `processor`.
pub fn estimate_with(processor: &ParallelProcessor, num_steps: i64) -> Result<f64> {
    let steps = validate_steps(num_steps)?;
    Ok(integrate(processor, steps))
}

fn integrate(processor: &ParallelProcessor, num_steps: u64) -> f64 {
    let step = 1.0 / num_steps as f64;
    debug!(num_steps, workers = processor.num_workers(), "integrating");

    let sum = processor.sum_indices(num_steps, |i| {
        let x = (i as f64 + 0.5) * step;
        integrand(x)
    });

    step * sum
}
