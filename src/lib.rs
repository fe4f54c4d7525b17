pub mod bench;
pub mod integrator;
pub mod parallel;

pub use integrator::{estimate, estimate_with, IntegrationError, Result};
pub use parallel::ParallelProcessor;
