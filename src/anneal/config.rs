//! Annealing configuration and cooling schedules.

use crate::error::AnnealError;

/// Temperature as a closed-form function of iteration progress.
///
/// Both schedules start at `start_temperature` for iteration 0 and reach
/// `end_temperature` at `max_iterations`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CoolingSchedule {
    /// Exponential decay: `T_k = T_0 · (T_end / T_0)^(k / max)`.
    #[default]
    Exponential,

    /// Linear decay: `T_k = T_0 − (T_0 − T_end) · k / max`.
    Linear,
}

impl CoolingSchedule {
    /// Temperature at `iteration` of a run lasting `max_iterations`.
    pub fn temperature(self, start: f64, end: f64, iteration: usize, max_iterations: usize) -> f64 {
        let progress = iteration as f64 / max_iterations as f64;
        match self {
            CoolingSchedule::Exponential => start * (end / start).powf(progress),
            CoolingSchedule::Linear => start - (start - end) * progress,
        }
    }
}

/// What happens when a trial is accepted but does not beat the best tour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RollbackPolicy {
    /// Keep the trial tour as current. Current score always matches the
    /// current tour.
    #[default]
    Consistent,

    /// Roll the tour back to the backup but keep the trial score as the
    /// current score. The current tour then never leaves the best tour,
    /// while the tracked score drifts with accepted trials.
    KeepTrialScore,
}

/// Configuration for a tour annealing run.
///
/// # Examples
///
/// ```
/// use u_tsp_anneal::anneal::{AnnealConfig, CoolingSchedule};
///
/// let config = AnnealConfig::new(1000, 100.0, 0.01)
///     .with_cycles_per_iteration(50)
///     .with_cooling(CoolingSchedule::Linear)
///     .with_seed(7);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AnnealConfig {
    /// Number of temperature steps. Must be positive.
    pub max_iterations: usize,

    /// Temperature at iteration 0.
    pub start_temperature: f64,

    /// Temperature the schedule reaches at `max_iterations`. Must be
    /// positive and below `start_temperature`.
    pub end_temperature: f64,

    /// Swap trials attempted at each temperature.
    pub cycles_per_iteration: usize,

    /// How temperature decays from start to end.
    pub cooling: CoolingSchedule,

    /// Handling of accepted trials that do not beat the best tour.
    pub rollback: RollbackPolicy,

    /// Random seed for reproducibility. Only used by [`AnnealRunner`](super::AnnealRunner);
    /// an [`Annealer`](super::Annealer) takes its random source directly.
    pub seed: Option<u64>,
}

impl Default for AnnealConfig {
    fn default() -> Self {
        Self {
            max_iterations: 1000,
            start_temperature: 100.0,
            end_temperature: 0.01,
            cycles_per_iteration: 100,
            cooling: CoolingSchedule::default(),
            rollback: RollbackPolicy::default(),
            seed: None,
        }
    }
}

impl AnnealConfig {
    /// Creates a configuration with 100 cycles per iteration.
    pub fn new(max_iterations: usize, start_temperature: f64, end_temperature: f64) -> Self {
        Self {
            max_iterations,
            start_temperature,
            end_temperature,
            ..Self::default()
        }
    }

    /// Sets the number of temperature steps.
    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = n;
        self
    }

    /// Sets the temperature at iteration 0.
    pub fn with_start_temperature(mut self, t: f64) -> Self {
        self.start_temperature = t;
        self
    }

    /// Sets the temperature reached at `max_iterations`.
    pub fn with_end_temperature(mut self, t: f64) -> Self {
        self.end_temperature = t;
        self
    }

    /// Sets the number of swap trials per temperature.
    pub fn with_cycles_per_iteration(mut self, n: usize) -> Self {
        self.cycles_per_iteration = n;
        self
    }

    /// Sets the cooling schedule.
    pub fn with_cooling(mut self, cooling: CoolingSchedule) -> Self {
        self.cooling = cooling;
        self
    }

    /// Sets the rollback policy.
    pub fn with_rollback(mut self, rollback: RollbackPolicy) -> Self {
        self.rollback = rollback;
        self
    }

    /// Sets the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Temperature for `iteration` under this configuration's schedule.
    pub fn temperature_at(&self, iteration: usize) -> f64 {
        self.cooling.temperature(
            self.start_temperature,
            self.end_temperature,
            iteration,
            self.max_iterations,
        )
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), AnnealError> {
        if self.max_iterations == 0 {
            return Err(invalid("max_iterations must be positive"));
        }
        if self.cycles_per_iteration == 0 {
            return Err(invalid("cycles_per_iteration must be positive"));
        }
        if self.end_temperature.is_nan() || self.end_temperature <= 0.0 {
            return Err(invalid(format!(
                "end_temperature must be positive, got {}",
                self.end_temperature
            )));
        }
        if !self.start_temperature.is_finite() || self.start_temperature <= self.end_temperature {
            return Err(invalid(format!(
                "start_temperature must be finite and greater than end_temperature, got {} <= {}",
                self.start_temperature, self.end_temperature
            )));
        }
        Ok(())
    }
}

fn invalid(msg: impl Into<String>) -> AnnealError {
    AnnealError::InvalidConfig(msg.into())
}
