//! Balanced assignment of rated officials to work stations.
//!
//! Officials carry a discrete skill tier and a continuous rating. The
//! crate places them on a fixed number of stations so that station scores
//! and headcounts are even and every station holds at least one top-tier
//! official, using a bounded best-improvement local search:
//!
//! - **Scoring**: `weight(tier) * rating` per official, summed per station.
//! - **Statistics**: mean, population standard deviation, headcounts,
//!   top-tier counts, and headcount spread of an assignment.
//! - **Quality**: a single scalar penalty (lower is better) combining
//!   balance, headcount fairness, and a dominating eligibility term.
//! - **Descent**: a generic steepest-descent engine over a pluggable
//!   neighborhood.
//! - **Roster**: the assignment problem wired into the engine, with the
//!   `optimize` entry point.
//!
//! # Example
//!
//! ```
//! use u_roster::model::Official;
//! use u_roster::roster::{optimize_with, RosterConfig};
//!
//! let officials = vec![
//!     Official::new("r1", "Alice", 4, 9.0).unwrap(),
//!     Official::new("r2", "Bruno", 4, 7.5).unwrap(),
//!     Official::new("r3", "Chen", 2, 8.0).unwrap(),
//!     Official::new("r4", "Dana", 1, 6.0).unwrap(),
//!     Official::new("r5", "Emil", 3, 5.5).unwrap(),
//! ];
//!
//! let config = RosterConfig::default().with_seed(42);
//! let result = optimize_with(&officials, 2, &config).unwrap();
//!
//! assert!(result.assignment.is_complete_cover());
//! assert!(result.is_eligible());
//! assert!(result.quality <= result.initial_quality);
//! ```
//!
//! # Features
//!
//! - `serde`: `Serialize`/`Deserialize` for every public record.
//! - `parallel`: evaluate the candidates of a sweep with rayon.

pub mod descent;
pub mod error;
pub mod generate;
pub mod model;
pub mod quality;
pub mod roster;
pub mod scoring;
pub mod stats;

pub use error::{RosterError, RosterResult};
