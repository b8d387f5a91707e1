//! Acceptance criterion and the values an annealing run reports.

use super::tour::Tour;

/// Notification emitted when the best score improves.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Progress {
    /// Iteration (temperature step) at which the improvement was seen.
    pub iteration: usize,
    /// New best score.
    pub best_score: f64,
}

/// Result of an annealing run.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AnnealResult {
    /// The best tour found.
    pub best: Tour,

    /// Open-path length of `best`.
    pub best_score: f64,

    /// Iterations (temperature steps) completed.
    pub iterations: usize,

    /// Temperature of the last completed iteration, or the start
    /// temperature if none ran.
    pub final_temperature: f64,

    /// Number of accepted trials (including improvements).
    pub accepted_moves: usize,

    /// Number of trials strictly better than the current score.
    pub improving_moves: usize,

    /// Whether the run stopped on the cancellation flag.
    pub cancelled: bool,

    /// Best score after initialization followed by one entry per iteration.
    pub cost_history: Vec<f64>,
}

/// Metropolis acceptance probability for moving from `current` to `trial`.
///
/// Improvements are always accepted; otherwise the probability is
/// `exp(-|current - trial| / temperature)`, so ties give 1.
pub fn acceptance_probability(current: f64, trial: f64, temperature: f64) -> f64 {
    if trial < current {
        1.0
    } else {
        (-(current - trial).abs() / temperature).exp()
    }
}
