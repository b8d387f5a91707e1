//! Simulated annealing over tours.
//!
//! Each iteration fixes a temperature from the cooling schedule and runs a
//! batch of swap trials against it. A trial swaps two positions of the
//! current tour and is kept by the Metropolis criterion; the best tour
//! seen is tracked separately and returned at the end.
//!
//! # References
//!
//! - Kirkpatrick, Gelatt & Vecchi (1983), "Optimization by Simulated Annealing"
//! - Cerny (1985), "Thermodynamical Approach to the Travelling Salesman Problem"

mod config;
mod runner;
mod tour;
mod types;

pub use config::{AnnealConfig, CoolingSchedule, RollbackPolicy};
pub use runner::{AnnealRunner, Annealer};
pub use tour::Tour;
pub use types::{acceptance_probability, AnnealResult, Progress};
