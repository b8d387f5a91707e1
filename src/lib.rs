//! Simulated annealing for the open-path Traveling Salesman Problem over
//! geographic points.
//!
//! - **Distance model** ([`geo`]): haversine great-circle distance in
//!   miles and the open-path score of a visiting order (the last city is
//!   not connected back to the first).
//! - **Annealer** ([`anneal`]): exponential (or linear) cooling over a
//!   fixed iteration budget, swap moves, Metropolis acceptance and
//!   best-tour tracking, with cooperative cancellation, progress
//!   callbacks and multi-start restarts.
//! - **Loader** ([`loader`]): `name,latitude,longitude` records in, an
//!   arrow-joined route string out.
//!
//! # Example
//!
//! ```
//! use u_tsp_anneal::anneal::{AnnealConfig, AnnealRunner};
//! use u_tsp_anneal::loader::{format_route, read_cities};
//!
//! let data = "A,0.0,0.0\nB,0.0,1.0\nC,1.0,1.0\nD,1.0,0.0\n";
//! let cities = read_cities(data.as_bytes()).unwrap();
//!
//! let config = AnnealConfig::new(200, 100.0, 0.01).with_seed(42);
//! let result = AnnealRunner::run(&cities, &config).unwrap();
//! assert!(result.best.is_permutation());
//! println!("{} ({:.1} mi)", format_route(&result.best, &cities), result.best_score);
//! ```
//!
//! The crate logs through the [`log`] facade and never installs a logger.

pub mod anneal;
pub mod error;
pub mod geo;
pub mod loader;

pub use error::AnnealError;
