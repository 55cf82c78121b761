//! Best-improvement descent (steepest-descent hill climbing).
//!
//! A single-solution local search that, at every sweep, evaluates the
//! complete neighborhood of the current solution and moves to the best
//! strictly improving neighbor. The search stops at the first local
//! optimum or after a fixed number of sweeps.
//!
//! Unlike Tabu Search or VNS there is no mechanism for escaping local
//! optima; the result is "best found", not a global optimum.
//!
//! # References
//!
//! - Aarts, E. & Lenstra, J. K. (1997). *Local Search in Combinatorial
//!   Optimization*, Wiley, ch. 1.

mod config;
mod runner;
mod types;

pub use config::DescentConfig;
pub use runner::{DescentResult, DescentRunner};
pub use types::DescentProblem;
