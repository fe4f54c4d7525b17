use std::ops::Range;

use rayon::prelude::*;
use rayon::{ThreadPool, ThreadPoolBuilder};
use tracing::debug;

use crate::integrator::{IntegrationError, Result};

/// Partial sums handed out per worker. More than one keeps idle workers
/// stealing when the pool is oversubscribed.
pub const CHUNKS_PER_WORKER: usize = 4;

#[derive(Debug)]
pub struct ParallelProcessor {
    num_workers: usize,
    pool: ThreadPool,
}

impl ParallelProcessor {
    pub fn new(num_workers: Option<usize>) -> Result<Self> {
        let num_workers = num_workers.unwrap_or_else(num_cpus::get);
        if num_workers == 0 {
            return Err(IntegrationError::InvalidArgument(
                "worker count must be at least 1".to_string(),
            ));
        }

        // Own pool per processor; the global rayon pool is left alone
        let pool = ThreadPoolBuilder::new()
            .num_threads(num_workers)
            .thread_name(|i| format!("calcpi-worker-{i}"))
            .build()?;

        debug!(num_workers, "worker pool ready");

        Ok(Self { num_workers, pool })
    }

    pub fn num_workers(&self) -> usize {
        self.num_workers
    }

    /// Number of isolated partial sums used for `num_steps` indices.
    pub fn chunk_count(&self, num_steps: u64) -> usize {
        let wanted = self.num_workers * CHUNKS_PER_WORKER;
        usize::try_from(num_steps).map_or(wanted, |n| n.min(wanted))
    }

    /// Evaluates `term` for every index in `[0, num_steps)` and reduces the
    /// results with `+`. Each chunk accumulates into its own local sum; the
    /// partial sums meet only in the final reduction, after every chunk is done.
    pub fn sum_indices<F>(&self, num_steps: u64, term: F) -> f64
    where
        F: Fn(u64) -> f64 + Sync,
    {
        let ranges = partition(num_steps, self.chunk_count(num_steps));
        debug!(num_steps, chunks = ranges.len(), "partitioned index range");

        self.pool.install(|| {
            ranges
                .into_par_iter()
                .map(|range| range.map(&term).sum::<f64>())
                .sum::<f64>()
        })
    }
}

/// Splits `[0, num_steps)` into at most `parts` contiguous ranges whose
/// lengths differ by at most one. Never yields an empty range.
pub fn partition(num_steps: u64, parts: usize) -> Vec<Range<u64>> {
    if num_steps == 0 || parts == 0 {
        return Vec::new();
    }

    let parts = (parts as u64).min(num_steps);
    let base = num_steps / parts;
    let remainder = num_steps % parts;

    let mut ranges = Vec::with_capacity(parts as usize);
    let mut start = 0;
    for part in 0..parts {
        let len = base + u64::from(part < remainder);
        ranges.push(start..start + len);
        start += len;
    }
    ranges
}
