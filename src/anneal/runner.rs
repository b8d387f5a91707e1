//! Annealing state machine and convenience runners.

use super::config::{AnnealConfig, RollbackPolicy};
use super::tour::Tour;
use super::types::{acceptance_probability, AnnealResult, Progress};
use crate::error::AnnealError;
use crate::geo::{City, DistanceMatrix};
use log::{debug, info, warn};
use rand::Rng;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use u_numflow::random::create_rng;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Created,
    Ready,
    Finished,
}

/// Simulated annealing over tours of a fixed city set.
///
/// Owns the current, best and backup tours and the random source. The
/// lifecycle is `new` → [`initialize`](Self::initialize) →
/// [`run`](Self::run); after the run the state is read-only.
///
/// # Examples
///
/// ```
/// use u_tsp_anneal::anneal::{AnnealConfig, Annealer};
/// use u_tsp_anneal::geo::City;
/// use u_numflow::random::create_rng;
///
/// let cities = vec![
///     City::new("a", 0.0, 0.0),
///     City::new("b", 0.0, 1.0),
///     City::new("c", 1.0, 1.0),
/// ];
/// let config = AnnealConfig::new(100, 10.0, 0.1).with_cycles_per_iteration(10);
/// let mut annealer = Annealer::new(config, create_rng(42)).unwrap();
/// annealer.initialize(&cities).unwrap();
/// let result = annealer.run().unwrap();
/// assert_eq!(result.best.len(), 3);
/// ```
pub struct Annealer<R: Rng> {
    config: AnnealConfig,
    rng: R,
    phase: Phase,
    matrix: DistanceMatrix,

    current: Tour,
    best: Tour,
    backup: Tour,

    current_score: f64,
    previous_score: f64,
    best_score: f64,
    temperature: f64,
    iteration: usize,

    accepted_moves: usize,
    improving_moves: usize,
}

impl<R: Rng> Annealer<R> {
    /// Creates an annealer, failing fast on an invalid configuration.
    pub fn new(config: AnnealConfig, rng: R) -> Result<Self, AnnealError> {
        config.validate()?;
        let temperature = config.start_temperature;
        Ok(Self {
            config,
            rng,
            phase: Phase::Created,
            matrix: DistanceMatrix::new(0),
            current: Tour::identity(0),
            best: Tour::identity(0),
            backup: Tour::identity(0),
            current_score: 0.0,
            previous_score: 0.0,
            best_score: 0.0,
            temperature,
            iteration: 0,
            accepted_moves: 0,
            improving_moves: 0,
        })
    }

    /// Seeds current and best with a random tour of `cities`.
    ///
    /// May be called again before `run` to start from a fresh tour.
    pub fn initialize(&mut self, cities: &[City]) -> Result<(), AnnealError> {
        if self.phase == Phase::Finished {
            return Err(AnnealError::AlreadyFinished);
        }
        if cities.is_empty() {
            return Err(AnnealError::NoCities);
        }

        self.matrix = DistanceMatrix::from_cities(cities);
        let n = cities.len();
        self.current = if n < 2 {
            Tour::identity(n)
        } else {
            Tour::random(n, &mut self.rng)
        };
        self.best = self.current.clone();
        self.backup = self.current.clone();

        self.current_score = self.matrix.path_length(self.current.as_slice());
        self.previous_score = self.current_score;
        self.best_score = self.current_score;
        self.temperature = self.config.start_temperature;
        self.iteration = 0;
        self.accepted_moves = 0;
        self.improving_moves = 0;
        self.phase = Phase::Ready;
        Ok(())
    }

    /// Runs every iteration and returns the best tour found.
    pub fn run(&mut self) -> Result<AnnealResult, AnnealError> {
        self.run_with(None, |_| {})
    }

    /// Runs with a cooperative cancellation flag (checked between
    /// iterations) and a callback invoked whenever the best score changes.
    pub fn run_with<F>(
        &mut self,
        cancel: Option<Arc<AtomicBool>>,
        mut on_progress: F,
    ) -> Result<AnnealResult, AnnealError>
    where
        F: FnMut(Progress),
    {
        match self.phase {
            Phase::Created => return Err(AnnealError::NotInitialized),
            Phase::Finished => return Err(AnnealError::AlreadyFinished),
            Phase::Ready => {}
        }

        let n = self.current.len();
        let mut cost_history = vec![self.best_score];
        let mut iterations = 0usize;
        let mut cancelled = false;

        if n < 2 {
            debug!("{n} city tour needs no annealing");
            return Ok(self.finish(iterations, cancelled, cost_history));
        }

        info!(
            "annealing {n} cities: {} iterations x {} cycles, T {} -> {}",
            self.config.max_iterations,
            self.config.cycles_per_iteration,
            self.config.start_temperature,
            self.config.end_temperature
        );

        cost_history.reserve(self.config.max_iterations);
        let mut previous_best = self.best_score;

        for iteration in 0..self.config.max_iterations {
            if let Some(ref flag) = cancel {
                if flag.load(Ordering::Relaxed) {
                    warn!("annealing cancelled at iteration {iteration}");
                    cancelled = true;
                    break;
                }
            }

            self.iteration = iteration;
            self.temperature = self.config.temperature_at(iteration);

            for _ in 0..self.config.cycles_per_iteration {
                self.cycle();
            }
            iterations += 1;

            if self.best_score != previous_best {
                debug!(
                    "iteration {iteration}: best {:.3} (T = {:.4})",
                    self.best_score, self.temperature
                );
                on_progress(Progress {
                    iteration,
                    best_score: self.best_score,
                });
                previous_best = self.best_score;
            }
            cost_history.push(self.best_score);
        }

        info!(
            "annealing finished after {iterations} iterations: best {:.3}, {} accepted / {} improving",
            self.best_score, self.accepted_moves, self.improving_moves
        );
        Ok(self.finish(iterations, cancelled, cost_history))
    }

    /// One trial: back up, swap, score, accept or roll back.
    pub(crate) fn cycle(&mut self) {
        self.backup.copy_from(&self.current);
        self.current.swap_random(&mut self.rng);
        let trial = self.matrix.path_length(self.current.as_slice());

        let p = acceptance_probability(self.current_score, trial, self.temperature);
        let accept = p >= 1.0 || self.rng.random_range(0.0..1.0) < p;

        if !accept {
            self.current.copy_from(&self.backup);
            return;
        }

        self.accepted_moves += 1;
        if trial < self.current_score {
            self.improving_moves += 1;
        }
        self.previous_score = self.current_score;
        self.current_score = trial;

        if trial < self.best_score {
            self.best.copy_from(&self.current);
            self.best_score = trial;
        } else if self.config.rollback == RollbackPolicy::KeepTrialScore {
            self.current.copy_from(&self.backup);
        }
    }

    fn finish(&mut self, iterations: usize, cancelled: bool, cost_history: Vec<f64>) -> AnnealResult {
        self.phase = Phase::Finished;
        AnnealResult {
            best: self.best.clone(),
            best_score: self.best_score,
            iterations,
            final_temperature: self.temperature,
            accepted_moves: self.accepted_moves,
            improving_moves: self.improving_moves,
            cancelled,
            cost_history,
        }
    }

    /// The validated configuration.
    pub fn config(&self) -> &AnnealConfig {
        &self.config
    }

    /// Tour being mutated by the trials.
    pub fn current(&self) -> &Tour {
        &self.current
    }

    /// Best tour seen so far.
    pub fn best(&self) -> &Tour {
        &self.best
    }

    /// Snapshot taken before the most recent trial.
    pub fn backup(&self) -> &Tour {
        &self.backup
    }

    /// Score tracked for the current tour.
    pub fn current_score(&self) -> f64 {
        self.current_score
    }

    /// Current score before the most recently accepted trial.
    pub fn previous_score(&self) -> f64 {
        self.previous_score
    }

    /// Open-path length of the best tour.
    pub fn best_score(&self) -> f64 {
        self.best_score
    }

    /// Temperature of the iteration in progress (or last completed).
    pub fn temperature(&self) -> f64 {
        self.temperature
    }

    /// Index of the iteration in progress (or last completed).
    pub fn iteration(&self) -> usize {
        self.iteration
    }

    /// Returns `true` once `run` has completed.
    pub fn is_finished(&self) -> bool {
        self.phase == Phase::Finished
    }
}

/// Builds seeded annealers from a configuration and runs them.
pub struct AnnealRunner;

impl AnnealRunner {
    /// Runs one annealer over `cities`.
    pub fn run(cities: &[City], config: &AnnealConfig) -> Result<AnnealResult, AnnealError> {
        Self::run_with_progress(cities, config, None, |_| {})
    }

    /// Runs with an optional cancellation token.
    pub fn run_with_cancel(
        cities: &[City],
        config: &AnnealConfig,
        cancel: Option<Arc<AtomicBool>>,
    ) -> Result<AnnealResult, AnnealError> {
        Self::run_with_progress(cities, config, cancel, |_| {})
    }

    /// Runs with a cancellation token and a progress callback.
    pub fn run_with_progress<F>(
        cities: &[City],
        config: &AnnealConfig,
        cancel: Option<Arc<AtomicBool>>,
        on_progress: F,
    ) -> Result<AnnealResult, AnnealError>
    where
        F: FnMut(Progress),
    {
        let seed = config.seed.unwrap_or_else(rand::random);
        let mut annealer = Annealer::new(config.clone(), create_rng(seed))?;
        annealer.initialize(cities)?;
        annealer.run_with(cancel, on_progress)
    }

    /// Runs `restarts` independent annealers and keeps the best result.
    ///
    /// Restart `k` is seeded with `seed + k`, so restart 0 reproduces
    /// [`run`](Self::run) for the same configuration. With the `parallel`
    /// feature the restarts run on the rayon thread pool. Ties go to the
    /// lowest restart index.
    pub fn run_restarts(
        cities: &[City],
        config: &AnnealConfig,
        restarts: usize,
    ) -> Result<AnnealResult, AnnealError> {
        config.validate()?;
        let base = config.seed.unwrap_or_else(rand::random);

        let run_one = |k: usize| {
            let restart_config = config.clone().with_seed(base.wrapping_add(k as u64));
            Self::run(cities, &restart_config)
        };

        #[cfg(feature = "parallel")]
        let results: Vec<AnnealResult> = {
            use rayon::prelude::*;
            (0..restarts)
                .into_par_iter()
                .map(run_one)
                .collect::<Result<_, _>>()?
        };

        #[cfg(not(feature = "parallel"))]
        let results: Vec<AnnealResult> = (0..restarts).map(run_one).collect::<Result<_, _>>()?;

        results
            .into_iter()
            .reduce(|best, r| if r.best_score < best.best_score { r } else { best })
            .ok_or_else(|| AnnealError::InvalidConfig("restarts must be positive".into()))
    }
}
