//! Balanced assignment of officials to stations.
//!
//! [`optimize`] validates the input, deals a shuffled pool round-robin over
//! the stations, then runs best-improvement sweeps over single-official
//! relocations until no relocation lowers the quality score or 1000 sweeps
//! have run. The result is the best assignment found, which need not be a
//! global optimum.
//!
//! The search runs synchronously to completion with no yield points.

mod config;
mod problem;
mod runner;

pub use config::RosterConfig;
pub use problem::{Relocation, RosterProblem};
pub use runner::{
    check_preconditions, improve_once, improve_once_with, optimize, optimize_with,
    optimize_with_rng, Allocation,
};
