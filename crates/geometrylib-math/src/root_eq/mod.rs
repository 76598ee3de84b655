//! Step functions for root searches over sampled functions of one variable.
//!
//! The caller owns the search loop: evaluate the function, insert the sample, ask for the next
//! x, repeat until its own convergence criterion is met.
use thiserror::Error;

mod bracket;
pub mod sampled;

pub use bracket::Bracket;
pub use sampled::{can_be_negative, next_x_monotonic, next_x_parabolic, secant_intersection};

/// Side of the minimum of a function with a monotonic derivative.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Branch {
    /// Root left of the minimum, where the function decreases.
    Left,
    /// Root right of the minimum, where the function increases.
    Right,
}

/// Errors returned by the step functions.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum StepError {
    /// Step functions need at least 2 samples.
    #[error("at least 2 samples are required, got {0}")]
    InsufficientSamples(usize),
    /// Samples produced a zero denominator, for example two samples sharing the same x.
    #[error("degenerate samples between x = {left} and x = {right}")]
    DegenerateInput {
        /// X of the left sample involved.
        left: f64,
        /// X of the right sample involved.
        right: f64,
    },
}
